use crate::{AntennaId, Assignment, Building, BuildingId, Coord, ScoreTable};
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub antenna: AntennaId,
    pub building: BuildingId,
    pub x: Coord,
    pub y: Coord,
}

// The placed antennas, in antenna id order. Unassigned antennas are left out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    placements: Vec<Placement>,
}

impl Solution {
    pub fn new(assignment: &Assignment, buildings: &[Building]) -> Solution {
        let placements = assignment
            .iter()
            .map(|(antenna, building)| {
                let site = &buildings[building];
                Placement {
                    antenna,
                    building,
                    x: site.x,
                    y: site.y,
                }
            })
            .collect();
        Solution { placements }
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    // Sum of the table score of every placed antenna at its site. Widened, since each site score
    // alone may take most of the i64 range.
    pub fn total_score(&self, table: &ScoreTable) -> i128 {
        self.placements
            .iter()
            .filter_map(|p| table.get(p.antenna, p.building))
            .map(i128::from)
            .sum()
    }
}

// K, then one "antenna x y" row per placement.
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.placements.len())?;
        for p in self.placements.iter() {
            writeln!(f, "{} {} {}", p.antenna, p.x, p.y)?;
        }
        Ok(())
    }
}
