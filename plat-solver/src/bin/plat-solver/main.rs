mod result;

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use clap::ValueEnum;
use convert_case::Case;
use log::LevelFilter;
use log::error;
use log::info;
use log::warn;
use plat_solver::Money;
use plat_solver::pricing::PriceTable;
use plat_solver::pricing::Pricing;
use plat_solver::solvers::ExactSearch;
use plat_solver::solvers::ExhaustiveSearch;
use plat_solver::solvers::GreedySearch;
use plat_solver::solvers::SubdivisionProcedure;
use plat_solver::statistics::StatisticLogger;
use plat_solver::statistics::configure_statistic_logging;
use plat_solver::statistics::log_statistic_postfix;
use plat_solver::statistics::should_log_statistics;
use result::PlatError;
use result::PlatResult;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    version,
    about,
    arg_required_else_help = true
)]
struct Args {
    /// The width of the plot in metres.
    width: u32,

    /// The height of the plot in metres.
    height: u32,

    /// The method used to plan the subdivision.
    #[arg(long, value_enum, default_value_t)]
    method: Method,

    /// The file with the price table to use instead of the built-in one.
    ///
    /// The file contains one line of whitespace-separated prices per parcel width;
    /// entry h of line w is the sale price of a whole (w)m x (h)m parcel. All lines
    /// must have the same number of entries, prices may not be negative, and lines
    /// starting with '#' are ignored.
    #[arg(long, verbatim_doc_comment)]
    prices: Option<PathBuf>,

    /// The surveying cost charged per metre of cut.
    #[arg(long, default_value_t = 20)]
    cost_per_metre: u32,

    /// Print statistics about the planning process.
    #[arg(long)]
    log_statistics: bool,

    /// Enable more verbose logging.
    #[arg(long)]
    verbose: bool,
}

/// The method used to plan the subdivision.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Method {
    /// Enumerate every distinct partition. Optimal, but the number of
    /// partitions grows exponentially with the plot dimensions; only
    /// sensible for small plots.
    Exhaustive,
    /// Commit to the best single cut judged with whole halves, then plan the
    /// halves optimally. Fast but generally suboptimal.
    Greedy,
    /// Plan every sub-parcel size bottom-up. Optimal in polynomial time.
    #[default]
    Exact,
    /// Run all of the above and report each result.
    All,
}

fn configure_logging(verbose: bool, log_statistics: bool) -> std::io::Result<()> {
    if log_statistics {
        configure_statistic_logging("%%%plat-stat:", None, Some(Case::Camel), None);
    }
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
    Ok(())
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> PlatResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose, args.log_statistics)?;

    if plat_solver::plat_asserts::PLAT_ASSERT_LEVEL_DEFINITION
        >= plat_solver::plat_asserts::PLAT_ASSERT_MODERATE
    {
        warn!(
            "Potential performance degradation: the assert level is set to {}, meaning many debug asserts are active which may result in performance degradation.",
            plat_solver::plat_asserts::PLAT_ASSERT_LEVEL_DEFINITION
        );
    };

    let table = match args.prices.as_ref() {
        Some(path) => read_price_table(path)?,
        None => PriceTable::standard(),
    };
    let pricing = Pricing::new(table, Money::from(args.cost_per_metre));

    if matches!(args.method, Method::Exhaustive | Method::All)
        && u64::from(args.width) * u64::from(args.height) > 16
    {
        warn!(
            "The number of partitions of a {}m x {}m plot is very large; exhaustive enumeration may not finish in reasonable time.",
            args.width, args.height
        );
    }

    let mut exhaustive = ExhaustiveSearch::default();
    let mut greedy = GreedySearch::default();
    let mut exact = ExactSearch::default();

    let mut methods: Vec<(&str, &mut dyn SubdivisionProcedure)> = Vec::new();
    match args.method {
        Method::Exhaustive => methods.push(("exhaustive", &mut exhaustive)),
        Method::Greedy => methods.push(("greedy", &mut greedy)),
        Method::Exact => methods.push(("exact", &mut exact)),
        Method::All => {
            methods.push(("exhaustive", &mut exhaustive));
            methods.push(("greedy", &mut greedy));
            methods.push(("exact", &mut exact));
        }
    }

    for (index, (name, search)) in methods.into_iter().enumerate() {
        if index > 0 {
            println!();
        }
        run_method(name, search, &pricing, args.width, args.height)?;
    }

    Ok(())
}

fn run_method(
    name: &str,
    search: &mut dyn SubdivisionProcedure,
    pricing: &Pricing,
    width: u32,
    height: u32,
) -> PlatResult<()> {
    let start = Instant::now();
    let plat = search.optimise(pricing, width, height)?;
    let runtime = start.elapsed();

    println!("{name}: value {}", plat.value);
    print!("{}", plat.parcel.describe(pricing)?);

    if should_log_statistics() {
        let statistic_logger = StatisticLogger::new([name]);
        search.log_statistics(statistic_logger.clone());
        statistic_logger
            .attach_to_prefix("runtime_in_milliseconds")
            .log_statistic(runtime.as_millis());
        log_statistic_postfix();
    }
    Ok(())
}

fn read_price_table(path: &Path) -> PlatResult<PriceTable> {
    let contents = std::fs::read_to_string(path)?;

    let mut rows = Vec::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|entry| {
                entry
                    .parse::<Money>()
                    .map_err(|_| PlatError::invalid_price(path.display(), entry))
            })
            .collect::<Result<Vec<Money>, PlatError>>()?;
        rows.push(row);
    }

    Ok(PriceTable::from_rows(rows)?)
}
