use antenna_placement::*;
use anyhow::Context;
use std::fs;
use std::path::PathBuf;
use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn enable_tracing() {
    // Logs go to stderr; stdout is reserved for the solution.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Debug, StructOpt)]
#[structopt(about = "Places antennas on building sites to maximise coverage score")]
struct Opt {
    /// Antenna processing order, one of [input, speed, range].
    #[structopt(long, default_value = "input")]
    order: AntennaOrder,
    /// Where to write the solution. Defaults to stdout.
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,
    /// Problem description file.
    #[structopt(parse(from_os_str))]
    input: PathBuf,
}

fn main() -> anyhow::Result<()> {
    enable_tracing();
    let opt = Opt::from_args();

    info!(input = %opt.input.display(), "reading problem");
    let text = fs::read_to_string(&opt.input)
        .with_context(|| format!("failed to read {}", opt.input.display()))?;
    let problem: Problem = text
        .parse()
        .with_context(|| format!("malformed input in {}", opt.input.display()))?;
    info!(
        width = problem.width,
        height = problem.height,
        buildings = problem.buildings.len(),
        antennas = problem.antennas.len(),
        reward = problem.reward,
        "problem read"
    );

    let table = ScoreTable::build(&problem.antennas, &problem.buildings);
    let assignment = assign(
        &table,
        &opt.order.arrange(&problem.antennas),
        &problem.building_ids(),
    );
    let solution = Solution::new(&assignment, &problem.buildings);
    info!(
        order = %opt.order,
        assigned = solution.len(),
        unassigned = assignment.num_antennas() - solution.len(),
        total_score = %solution.total_score(&table),
        "antennas placed"
    );

    match &opt.output {
        Some(path) => {
            fs::write(path, solution.to_string())
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(output = %path.display(), "solution written");
        }
        None => print!("{}", solution),
    }
    Ok(())
}
