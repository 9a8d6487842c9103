use crate::{Antenna, AntennaId};
use itertools::Itertools;
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

// The order in which antennas pick their sites. Earlier antennas get first pick, so this
// changes the result.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AntennaOrder {
    // As listed in the input.
    Input,
    // Fastest connection first.
    Speed,
    // Widest range first.
    Range,
}

impl AntennaOrder {
    // Antenna ids in processing order. Sorting is stable: equal keys keep input order.
    pub fn arrange(self, antennas: &[Antenna]) -> Vec<AntennaId> {
        let ids = 0..antennas.len();
        match self {
            AntennaOrder::Input => ids.collect(),
            AntennaOrder::Speed => ids
                .sorted_by_key(|&a| Reverse(antennas[a].speed))
                .collect(),
            AntennaOrder::Range => ids
                .sorted_by_key(|&a| Reverse(antennas[a].range))
                .collect(),
        }
    }
}

impl Default for AntennaOrder {
    fn default() -> AntennaOrder {
        AntennaOrder::Input
    }
}

impl FromStr for AntennaOrder {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "input" => Ok(AntennaOrder::Input),
            "speed" => Ok(AntennaOrder::Speed),
            "range" => Ok(AntennaOrder::Range),
            _ => Err("antenna order must be one of [input, speed, range]"),
        }
    }
}

impl fmt::Display for AntennaOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AntennaOrder::Input => "input",
            AntennaOrder::Speed => "speed",
            AntennaOrder::Range => "range",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn antennas() -> Vec<Antenna> {
        vec![
            Antenna::new(1, 5),
            Antenna::new(4, 2),
            Antenna::new(2, 9),
            Antenna::new(4, 5),
        ]
    }

    macro_rules! test {
        ($name:ident, $order:expr, $expected:expr) => {
            #[test]
            fn $name() {
                assert_eq!($order.arrange(&antennas()), $expected);
            }
        };
    }

    test!(input, AntennaOrder::Input, vec![0, 1, 2, 3]);
    // Antennas 0 and 3 share speed 5 and keep their input order.
    test!(speed, AntennaOrder::Speed, vec![2, 0, 3, 1]);
    test!(range, AntennaOrder::Range, vec![1, 3, 2, 0]);

    #[test]
    fn no_antennas() {
        assert!(AntennaOrder::Range.arrange(&[]).is_empty());
    }

    #[test]
    fn from_str() {
        assert_eq!(AntennaOrder::from_str("input"), Ok(AntennaOrder::Input));
        assert_eq!(AntennaOrder::from_str("speed"), Ok(AntennaOrder::Speed));
        assert_eq!(AntennaOrder::from_str("range"), Ok(AntennaOrder::Range));
        assert_eq!(
            AntennaOrder::from_str("random"),
            Err("antenna order must be one of [input, speed, range]")
        );
    }

    #[test]
    fn display_round_trips() {
        for order in [AntennaOrder::Input, AntennaOrder::Speed, AntennaOrder::Range] {
            assert_eq!(AntennaOrder::from_str(&order.to_string()), Ok(order));
        }
    }

    #[test]
    fn default_is_input() {
        assert_eq!(AntennaOrder::default(), AntennaOrder::Input);
    }
}
