use antenna_placement::{assign, Antenna, AntennaOrder, Building, ScoreTable};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

struct ProblemBenchmarkData {
    name: &'static str,
    buildings: usize,
    antennas: usize,
}

const DATA: [ProblemBenchmarkData; 3] = [
    ProblemBenchmarkData {
        name: "50x10",
        buildings: 50,
        antennas: 10,
    },
    ProblemBenchmarkData {
        name: "200x40",
        buildings: 200,
        antennas: 40,
    },
    ProblemBenchmarkData {
        name: "500x100",
        buildings: 500,
        antennas: 100,
    },
];

// Seeded random layout on a 100x100 grid, identical on every run.
fn generate(d: &ProblemBenchmarkData) -> (Vec<Building>, Vec<Antenna>) {
    let mut rng = SmallRng::seed_from_u64(42);
    let buildings = (0..d.buildings)
        .map(|_| {
            Building::new(
                rng.gen_range(0..100),
                rng.gen_range(0..100),
                rng.gen_range(1..=10),
                rng.gen_range(1..=50),
            )
        })
        .collect();
    let antennas = (0..d.antennas)
        .map(|_| Antenna::new(rng.gen_range(0..20), rng.gen_range(1..=100)))
        .collect();
    (buildings, antennas)
}

fn bm_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for d in DATA.iter() {
        let (buildings, antennas) = generate(d);
        group.bench_with_input(BenchmarkId::from_parameter(d.name), d, |b, _d| {
            b.iter(|| ScoreTable::build(&antennas, &buildings));
        });
    }
    group.finish();
}

fn bm_assign(c: &mut Criterion) {
    let mut group = c.benchmark_group("assign");
    for d in DATA.iter() {
        let (buildings, antennas) = generate(d);
        let table = ScoreTable::build(&antennas, &buildings);
        let order = AntennaOrder::Input.arrange(&antennas);
        let ids: Vec<usize> = (0..buildings.len()).collect();
        group.bench_with_input(BenchmarkId::from_parameter(d.name), d, |b, _d| {
            b.iter(|| assert_eq!(assign(&table, &order, &ids).num_assigned(), d.antennas));
        });
    }
    group.finish();
}

criterion_group!(benches, bm_build, bm_assign);
criterion_main!(benches);
