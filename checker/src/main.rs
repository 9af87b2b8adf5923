use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use roadlink::{Level, Move, TraceOutcome};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Level definition file.
    #[arg(value_name = "LEVEL")]
    level: PathBuf,
    /// Moves to apply in order: `a1:b2` swaps two cells, `c3` rotates one.
    #[arg(value_name = "MOVE")]
    moves: Vec<Move>,
    /// Print every cell the road passes through.
    #[arg(short, long)]
    trace: bool,
    /// Log more; repeat for more detail. `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .init();
}

fn describe(outcome: TraceOutcome) -> String {
    match outcome {
        TraceOutcome::Reached => "reaches the finish".to_string(),
        TraceOutcome::LeftBoard(at) => format!("runs off the board at {}", at.notation()),
        TraceOutcome::Blocked(at) => format!("is blocked by terrain at {}", at.notation()),
        TraceOutcome::DeadEnd(at) => format!("dead ends at {}", at.notation()),
        TraceOutcome::Impassable(at) => format!("has no way onward at {}", at.notation()),
        TraceOutcome::Cycle(at) => format!("loops back on itself at {}", at.notation()),
    }
}

fn run(args: &CliArgs) -> Result<bool> {
    let text = fs::read_to_string(&args.level)
        .with_context(|| format!("could not read {}", args.level.display()))?;
    let mut level = text.parse::<Level>()
        .with_context(|| format!("could not load {}", args.level.display()))?;
    info!("loaded {} level of size {}", level.difficulty(), level.size());

    for mv in &args.moves {
        level.apply(*mv).with_context(|| format!("move {mv} after {} move(s)", level.move_count()))?;
    }

    let trace = level.trace();
    print!("{level}");
    println!("difficulty: {}", level.difficulty());
    println!("moves: {}", level.move_count());
    if args.trace {
        let path = trace.path().iter().map(|at| at.notation()).collect::<Vec<_>>();
        println!("road: {}", path.join(" "));
    }
    println!("the road {}", describe(trace.outcome()));

    Ok(trace.is_solved())
}

fn main() -> Result<ExitCode> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    Ok(if run(&args)? { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
