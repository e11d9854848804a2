mod render;
mod theme;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use serde::Serialize;
use stalemate_core::{
    is_stalemate, uncovered_squares, Generator, GeneratorConfig, PieceKind, Placement,
    SearchBudget, Solution, Solver, SolverConfig, Square, StalemateError, MAX_PIECES,
};
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Duration;
use theme::Theme;

#[derive(Parser, Debug)]
#[command(
    name = "stalemate",
    version,
    about = "Place attacking pieces so a lone king is stalemated"
)]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace); RUST_LOG also works
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve a given king square and piece set
    Solve {
        /// Defending king square as `row,col`
        #[arg(long)]
        king: Square,
        /// Piece letters, exactly one K (e.g. KQQ or K,R,B,N)
        #[arg(long)]
        pieces: PieceList,
        #[command(flatten)]
        search: SearchArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Generate a random problem and solve it
    Random {
        /// Seed for reproducible problems (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Largest number of pieces besides the king (2 to 10)
        #[arg(
            long,
            default_value_t = MAX_PIECES as u64,
            value_parser = clap::value_parser!(u64).range(2..=MAX_PIECES as u64)
        )]
        max_pieces: u64,
        #[command(flatten)]
        search: SearchArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Check a JSON placement such as {"Queen":[{"row":3,"col":0}]}
    Validate {
        /// Defending king square as `row,col`
        #[arg(long)]
        king: Square,
        /// Placement file, or `-` for stdin
        #[arg(long)]
        placement: String,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Search the strongest pieces first
    #[arg(long)]
    presort: bool,
    /// Give up after this many search nodes
    #[arg(long)]
    max_nodes: Option<u64>,
    /// Give up after this many milliseconds
    #[arg(long)]
    time_limit_ms: Option<u64>,
}

impl SearchArgs {
    fn solver_config(&self) -> SolverConfig {
        let base = if self.presort {
            SolverConfig::presorted()
        } else {
            SolverConfig::greedy()
        };
        base.with_budget(SearchBudget {
            max_nodes: self.max_nodes,
            time_limit: self.time_limit_ms.map(Duration::from_millis),
        })
    }
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Print JSON instead of a board
    #[arg(long)]
    json: bool,
    /// Use the light color theme
    #[arg(long)]
    light: bool,
}

/// Piece letters from the command line. A newtype so clap takes the whole
/// argument as one value.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PieceList(Vec<PieceKind>);

impl FromStr for PieceList {
    type Err = StalemateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PieceKind::parse_list(s).map(PieceList)
    }
}

#[derive(Debug, Serialize)]
struct ValidationReport {
    king: Square,
    stalemate: bool,
    uncovered: Vec<Square>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Solve {
            king,
            pieces,
            search,
            output,
        } => {
            let solver = Solver::with_config(search.solver_config());
            let solution = solver
                .solve(king, &pieces.0)
                .context("could not start the search")?;
            print_solution(&solution, &output)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Random {
            seed,
            max_pieces,
            search,
            output,
        } => {
            let seed = seed.unwrap_or_else(rand::random);
            eprintln!("seed: {}", seed);

            let mut generator = Generator::with_seed(seed);
            generator.set_config(GeneratorConfig {
                max_pieces: max_pieces as usize,
                ..GeneratorConfig::default()
            });
            let problem = generator.problem();
            log::info!(
                "generated king {} with pieces {}",
                problem.king,
                render::format_pieces(&problem.pieces)
            );

            let solver = Solver::with_config(search.solver_config());
            let solution = solver
                .solve(problem.king, &problem.pieces)
                .context("generated problem was rejected")?;
            print_solution(&solution, &output)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate {
            king,
            placement,
            output,
        } => validate(king, &placement, &output),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn print_solution(solution: &Solution, output: &OutputArgs) -> Result<()> {
    if output.json {
        let json = serde_json::to_string_pretty(&solution.report())
            .context("failed to serialize solution")?;
        println!("{}", json);
        return Ok(());
    }

    let theme = Theme::from_flag(output.light);
    let open = uncovered_squares(&solution.board, solution.king, &solution.placement);
    let mut stdout = io::stdout();
    render::render_board(&mut stdout, &solution.board, open, &theme)?;
    render::render_summary(&mut stdout, solution, &theme)?;
    Ok(())
}

fn validate(king: Square, source: &str, output: &OutputArgs) -> Result<ExitCode> {
    let text = read_source(source)?;
    let placement = parse_placement(&text)
        .with_context(|| format!("invalid placement in {}", source))?;

    let stalemate = is_stalemate(king, &placement);
    let board = placement.to_board(king);
    let open = uncovered_squares(&board, king, &placement);

    if output.json {
        let report = validation_report(king, &placement);
        let json =
            serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        println!("{}", json);
    } else {
        let theme = Theme::from_flag(output.light);
        let mut stdout = io::stdout();
        render::render_board(&mut stdout, &board, open, &theme)?;
        render::render_verdict(&mut stdout, stalemate, &theme)?;
    }

    Ok(if stalemate {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Verdict plus the escape squares still open to the king
fn validation_report(king: Square, placement: &Placement) -> ValidationReport {
    let board = placement.to_board(king);
    let mut escapes = uncovered_squares(&board, king, placement);
    escapes.remove(king);
    ValidationReport {
        king,
        stalemate: is_stalemate(king, placement),
        uncovered: escapes.iter().collect(),
    }
}

fn read_source(source: &str) -> Result<String> {
    if source == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read placement from stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(source).with_context(|| format!("failed to read {}", source))
    }
}

fn parse_placement(text: &str) -> Result<Placement> {
    let placement: Placement = serde_json::from_str(text)?;
    if placement.count(PieceKind::King) > 1 {
        bail!(
            "placement has {} attacking kings",
            placement.count(PieceKind::King)
        );
    }
    Ok(placement)
}
