use std::time::Instant;

use clap::Parser;
use plat_solver::pricing::Pricing;
use plat_solver::solvers::ExactSearch;
use plat_solver::solvers::ExhaustiveSearch;
use plat_solver::solvers::GreedySearch;
use plat_solver::solvers::SubdivisionProcedure;

#[derive(Parser)]
struct Cli {
    /// The width of the plot in metres.
    width: u32,

    /// The height of the plot in metres.
    height: u32,
}

/// Beyond this area the exhaustive search enumerates billions of partitions,
/// so the example skips it rather than appear to hang.
const EXHAUSTIVE_AREA_LIMIT: u64 = 16;

fn main() {
    let Cli { width, height } = Cli::parse();

    let pricing = Pricing::standard();
    if width == 0 || height == 0 || !pricing.covers(width, height) {
        println!(
            "Please provide dimensions between 1m x 1m and {}m x {}m",
            pricing.max_width(),
            pricing.max_height()
        );
        return;
    }

    let mut exhaustive = ExhaustiveSearch::default();
    let mut greedy = GreedySearch::default();
    let mut exact = ExactSearch::default();

    let mut methods: Vec<(&str, &mut dyn SubdivisionProcedure)> = Vec::new();
    if u64::from(width) * u64::from(height) <= EXHAUSTIVE_AREA_LIMIT {
        methods.push(("exhaustive", &mut exhaustive));
    } else {
        println!("Skipping the exhaustive search on a plot larger than {EXHAUSTIVE_AREA_LIMIT}m2");
    }
    methods.push(("greedy", &mut greedy));
    methods.push(("exact", &mut exact));

    let mut optimal = None;
    for (name, method) in methods {
        let start = Instant::now();
        match method.optimise(&pricing, width, height) {
            Ok(plat) => {
                println!(
                    "{name}: value {} in {}ms",
                    plat.value,
                    start.elapsed().as_millis()
                );
                optimal = Some(plat);
            }
            Err(error) => {
                eprintln!("{name}: {error}");
                return;
            }
        }
    }

    // The exact search ran last, so this is an optimal plat.
    if let Some(plat) = optimal {
        println!();
        match plat.parcel.describe(&pricing) {
            Ok(description) => print!("{description}"),
            Err(error) => eprintln!("{error}"),
        }
    }
}
