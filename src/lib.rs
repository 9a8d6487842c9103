use std::cmp::Reverse;
use std::collections::BTreeSet;
use tracing::{debug, trace, warn};

pub mod order;
pub mod problem;
pub mod solution;

pub use order::AntennaOrder;
pub use problem::{ParseError, Problem};
pub use solution::{Placement, Solution};

// Buildings and antennas are identified by their 0-based position in the input.
pub type BuildingId = usize;
pub type AntennaId = usize;
pub type Score = i64;

// Coordinates are i32 so that every distance between two points is exact in i64. The parser
// further bounds coordinates, weights and record counts (see `problem::MAX_DIMENSION`,
// `problem::MAX_WEIGHT` and `problem::MAX_RECORDS`) so that no score sum can overflow.
pub type Coord = i32;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Building {
    pub x: Coord,
    pub y: Coord,
    // Multiplier applied to the distance between the building and the antenna.
    pub load: i64,
    // Multiplier applied to the antenna connection speed.
    pub connectivity: i64,
}

impl Building {
    pub fn new(x: Coord, y: Coord, load: i64, connectivity: i64) -> Building {
        Building {
            x,
            y,
            load,
            connectivity,
        }
    }

    pub fn distance_to(&self, x: Coord, y: Coord) -> i64 {
        distance(self.x, self.y, x, y)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Antenna {
    // Manhattan radius, never negative.
    pub range: i64,
    pub speed: i64,
}

impl Antenna {
    pub fn new(range: i64, speed: i64) -> Antenna {
        Antenna { range, speed }
    }
}

pub fn distance(ax: Coord, ay: Coord, bx: Coord, by: Coord) -> i64 {
    (i64::from(ax) - i64::from(bx)).abs() + (i64::from(ay) - i64::from(by)).abs()
}

// All buildings within range of (site_x, site_y), inclusive, in input order.
pub fn reachable<'a>(
    site_x: Coord,
    site_y: Coord,
    range: i64,
    buildings: &'a [Building],
) -> impl Iterator<Item = &'a Building> + 'a {
    debug_assert!(range >= 0);
    buildings
        .iter()
        .filter(move |b| b.distance_to(site_x, site_y) <= range)
}

// What a single building adds to the score of `antenna` installed at (site_x, site_y). This is
// negative when the distance penalty outweighs the speed reward and must be summed as-is.
pub fn building_contribution(
    building: &Building,
    antenna: &Antenna,
    site_x: Coord,
    site_y: Coord,
) -> Score {
    building.connectivity * antenna.speed - building.load * building.distance_to(site_x, site_y)
}

pub fn site_score(
    antenna: &Antenna,
    site_x: Coord,
    site_y: Coord,
    buildings: &[Building],
) -> Score {
    reachable(site_x, site_y, antenna.range, buildings)
        .map(|b| building_contribution(b, antenna, site_x, site_y))
        .sum()
}

// Dense antenna x site score matrix. Row i holds antenna i's score at every building site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreTable {
    num_buildings: usize,
    rows: Vec<Vec<Score>>,
}

impl ScoreTable {
    // TODO: bucket buildings on a coarse grid so each site only scans nearby cells instead of
    // the full building list. This is the quadratic part of the whole pipeline.
    pub fn build(antennas: &[Antenna], buildings: &[Building]) -> ScoreTable {
        let rows: Vec<Vec<Score>> = antennas
            .iter()
            .map(|antenna| {
                buildings
                    .iter()
                    .map(|site| site_score(antenna, site.x, site.y, buildings))
                    .collect()
            })
            .collect();
        debug!(
            antennas = antennas.len(),
            sites = buildings.len(),
            "built score table"
        );
        ScoreTable {
            num_buildings: buildings.len(),
            rows,
        }
    }

    pub fn num_antennas(&self) -> usize {
        self.rows.len()
    }

    pub fn num_buildings(&self) -> usize {
        self.num_buildings
    }

    pub fn get(&self, antenna: AntennaId, building: BuildingId) -> Option<Score> {
        self.rows.get(antenna)?.get(building).copied()
    }

    pub fn row(&self, antenna: AntennaId) -> Option<&[Score]> {
        self.rows.get(antenna).map(|r| r.as_slice())
    }
}

// Chosen site per antenna. None marks an antenna that found no free building.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    sites: Vec<Option<BuildingId>>,
}

impl Assignment {
    pub fn get(&self, antenna: AntennaId) -> Option<BuildingId> {
        self.sites.get(antenna).copied().flatten()
    }

    pub fn num_antennas(&self) -> usize {
        self.sites.len()
    }

    pub fn num_assigned(&self) -> usize {
        self.sites.iter().filter(|s| s.is_some()).count()
    }

    // Assigned (antenna, building) pairs in antenna id order.
    pub fn iter(&self) -> impl Iterator<Item = (AntennaId, BuildingId)> + '_ {
        self.sites
            .iter()
            .enumerate()
            .filter_map(|(a, s)| s.map(|b| (a, b)))
    }

    pub fn unassigned(&self) -> impl Iterator<Item = AntennaId> + '_ {
        self.sites
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_none())
            .map(|(a, _)| a)
    }
}

// Walks antennas in `antenna_order` and gives each one its best still-free site. Ties go to the
// lowest building id. Sites are never given back, so an early antenna can take the site a later
// one would have scored higher on.
pub fn assign(
    table: &ScoreTable,
    antenna_order: &[AntennaId],
    building_ids: &[BuildingId],
) -> Assignment {
    let mut available: BTreeSet<BuildingId> = building_ids.iter().copied().collect();
    let mut sites: Vec<Option<BuildingId>> = vec![None; table.num_antennas()];

    for &antenna in antenna_order {
        let row = match table.row(antenna) {
            Some(row) => row,
            None => {
                warn!(antenna, "skipping antenna missing from the score table");
                continue;
            }
        };
        if sites[antenna].is_some() {
            warn!(antenna, "skipping antenna listed twice in the order");
            continue;
        }

        let best = available
            .iter()
            .filter_map(|&b| row.get(b).map(|&score| (b, score)))
            .max_by_key(|&(b, score)| (score, Reverse(b)));
        match best {
            Some((building, score)) => {
                available.remove(&building);
                sites[antenna] = Some(building);
                trace!(antenna, building, score, "antenna assigned");
            }
            None => trace!(antenna, "no site left for antenna"),
        }
    }

    let assignment = Assignment { sites };
    debug!(
        assigned = assignment.num_assigned(),
        unassigned = assignment.num_antennas() - assignment.num_assigned(),
        "greedy assignment complete"
    );
    assignment
}

// Scores every site and assigns antennas in input order.
pub fn solve(buildings: &[Building], antennas: &[Antenna]) -> Assignment {
    let table = ScoreTable::build(antennas, buildings);
    let order: Vec<AntennaId> = (0..antennas.len()).collect();
    let ids: Vec<BuildingId> = (0..buildings.len()).collect();
    assign(&table, &order, &ids)
}
