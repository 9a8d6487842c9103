use crate::{Antenna, Building, BuildingId, Coord};
use std::str::FromStr;
use thiserror::Error;

// Input limits. With every value inside them a distance is below 2 * MAX_DIMENSION, a single
// building contributes at most MAX_WEIGHT^2 + MAX_WEIGHT * 2 * MAX_DIMENSION = 3e12 in
// magnitude, and a site sums at most MAX_RECORDS of those (3e18), which fits in i64.
pub const MAX_DIMENSION: i64 = 1_000_000;
pub const MAX_WEIGHT: i64 = 1_000_000;
pub const MAX_RECORDS: usize = 1_000_000;
// Any range at or above this already covers the whole grid.
pub const MAX_RANGE: i64 = 2 * MAX_DIMENSION;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing {0} line")]
    MissingHeader(&'static str),
    #[error("line {line}: expected {expected} integers, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: {token:?} is not an integer")]
    InvalidInteger { line: usize, token: String },
    #[error("line {line}: {value} is not a valid record count (0..={})", MAX_RECORDS)]
    InvalidCount { line: usize, value: i64 },
    #[error("grid size {width}x{height} is outside 0..={}", MAX_DIMENSION)]
    GridSize { width: i64, height: i64 },
    #[error("line {line}: building {building} at ({x}, {y}) lies outside the grid")]
    OutOfBounds {
        line: usize,
        building: usize,
        x: i64,
        y: i64,
    },
    #[error("line {line}: {field} {value} is outside -{max}..={max}")]
    ValueOutOfRange {
        line: usize,
        field: &'static str,
        value: i64,
        max: i64,
    },
    #[error("expected {expected} {kind} records, found {found}")]
    RecordCount {
        kind: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: antenna {antenna} has negative range {range}")]
    NegativeRange {
        line: usize,
        antenna: usize,
        range: i64,
    },
    #[error("line {line}: unexpected record after the last antenna")]
    TrailingRecords { line: usize },
}

// A fully parsed problem description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    pub width: i64,
    pub height: i64,
    // Read and reported, but not part of site scoring.
    pub reward: i64,
    pub buildings: Vec<Building>,
    pub antennas: Vec<Antenna>,
}

impl Problem {
    pub fn building_ids(&self) -> Vec<BuildingId> {
        (0..self.buildings.len()).collect()
    }
}

fn parse_record<const N: usize>(line: usize, text: &str) -> Result<[i64; N], ParseError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != N {
        return Err(ParseError::FieldCount {
            line,
            expected: N,
            found: tokens.len(),
        });
    }
    let mut values = [0i64; N];
    for (v, t) in values.iter_mut().zip(tokens) {
        *v = t.parse().map_err(|_| ParseError::InvalidInteger {
            line,
            token: t.to_string(),
        })?;
    }
    Ok(values)
}

fn parse_count(line: usize, value: i64) -> Result<usize, ParseError> {
    usize::try_from(value)
        .ok()
        .filter(|&n| n <= MAX_RECORDS)
        .ok_or(ParseError::InvalidCount { line, value })
}

fn check_weight(line: usize, field: &'static str, value: i64) -> Result<i64, ParseError> {
    if !(-MAX_WEIGHT..=MAX_WEIGHT).contains(&value) {
        return Err(ParseError::ValueOutOfRange {
            line,
            field,
            value,
            max: MAX_WEIGHT,
        });
    }
    Ok(value)
}

// A coordinate inside 0..bound. Bounds never exceed MAX_DIMENSION, so it always fits a Coord.
fn to_coord(value: i64, bound: i64) -> Option<Coord> {
    if (0..bound).contains(&value) {
        Coord::try_from(value).ok()
    } else {
        None
    }
}

impl FromStr for Problem {
    type Err = ParseError;

    // Layout, one record per line:
    //   W H
    //   N M R
    //   Bx By Bl Bc   (N lines)
    //   Ar Ac         (M lines)
    // Trailing blank lines are ignored, anything else after the antennas is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.trim_end().lines().enumerate().map(|(i, l)| (i + 1, l));

        let [width, height] = match lines.next() {
            Some((line, text)) => parse_record::<2>(line, text)?,
            None => return Err(ParseError::MissingHeader("grid size")),
        };
        let dimension = 0..=MAX_DIMENSION;
        if !dimension.contains(&width) || !dimension.contains(&height) {
            return Err(ParseError::GridSize { width, height });
        }
        let (counts_line, [n, m, reward]) = match lines.next() {
            Some((line, text)) => (line, parse_record::<3>(line, text)?),
            None => return Err(ParseError::MissingHeader("record count")),
        };
        let num_buildings = parse_count(counts_line, n)?;
        let num_antennas = parse_count(counts_line, m)?;

        let mut buildings = Vec::new();
        for (line, text) in lines.by_ref().take(num_buildings) {
            let [x, y, load, connectivity] = parse_record::<4>(line, text)?;
            let (cx, cy) = match (to_coord(x, width), to_coord(y, height)) {
                (Some(cx), Some(cy)) => (cx, cy),
                _ => {
                    return Err(ParseError::OutOfBounds {
                        line,
                        building: buildings.len(),
                        x,
                        y,
                    })
                }
            };
            buildings.push(Building::new(
                cx,
                cy,
                check_weight(line, "load", load)?,
                check_weight(line, "connectivity", connectivity)?,
            ));
        }
        if buildings.len() != num_buildings {
            return Err(ParseError::RecordCount {
                kind: "building",
                expected: num_buildings,
                found: buildings.len(),
            });
        }

        let mut antennas = Vec::new();
        for (line, text) in lines.by_ref().take(num_antennas) {
            let [range, speed] = parse_record::<2>(line, text)?;
            if range < 0 {
                return Err(ParseError::NegativeRange {
                    line,
                    antenna: antennas.len(),
                    range,
                });
            }
            if range > MAX_RANGE {
                return Err(ParseError::ValueOutOfRange {
                    line,
                    field: "range",
                    value: range,
                    max: MAX_RANGE,
                });
            }
            antennas.push(Antenna::new(range, check_weight(line, "speed", speed)?));
        }
        if antennas.len() != num_antennas {
            return Err(ParseError::RecordCount {
                kind: "antenna",
                expected: num_antennas,
                found: antennas.len(),
            });
        }

        if let Some((line, _)) = lines.next() {
            return Err(ParseError::TrailingRecords { line });
        }

        Ok(Problem {
            width,
            height,
            reward,
            buildings,
            antennas,
        })
    }
}
