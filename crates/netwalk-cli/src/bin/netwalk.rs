//! Command-line front-end for the network puzzle.
//!
//! Generates a puzzle, prints it, and runs the solvers on it.
//!
//! # Usage
//!
//! ```sh
//! cargo run -p netwalk-cli
//! ```
//!
//! Pick a size preset, or an explicit size:
//!
//! ```sh
//! cargo run -p netwalk-cli -- --preset large
//! cargo run -p netwalk-cli -- --width 12 --height 8
//! ```
//!
//! Reproduce a puzzle from its seed and replay the optimal moves:
//!
//! ```sh
//! cargo run -p netwalk-cli -- --seed <HEX> --solver optimal --apply
//! ```
//!
//! Set `RUST_LOG=debug` to see generator and solver logs.

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use netwalk_cli::render::{render_grid, render_plain};
use netwalk_game::{GameError, GameSession, NewGameOptions, SessionState};
use netwalk_generator::{GridPreset, PuzzleSeed};
use netwalk_solver::{Move, TreeSolver};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PresetArg {
    Small,
    Medium,
    Large,
    Huge,
}

impl From<PresetArg> for GridPreset {
    fn from(preset: PresetArg) -> Self {
        match preset {
            PresetArg::Small => Self::Small,
            PresetArg::Medium => Self::Medium,
            PresetArg::Large => Self::Large,
            PresetArg::Huge => Self::Huge,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SolverKind {
    Greedy,
    Optimal,
    Both,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Grid size preset.
    #[arg(long, value_name = "PRESET", default_value = "medium")]
    preset: PresetArg,

    /// Grid width; overrides the preset.
    #[arg(long, value_name = "COLUMNS", requires = "height")]
    width: Option<usize>,

    /// Grid height; overrides the preset.
    #[arg(long, value_name = "ROWS", requires = "width")]
    height: Option<usize>,

    /// Seed of the puzzle to reproduce, as 64 hex digits.
    #[arg(long, value_name = "HEX")]
    seed: Option<PuzzleSeed>,

    /// Solver to run on the scrambled puzzle.
    #[arg(long, value_name = "KIND", default_value = "both")]
    solver: SolverKind,

    /// Replay the solver's moves and check the result.
    #[arg(long)]
    apply: bool,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> Result<bool, GameError> {
    let mut options = NewGameOptions::from(GridPreset::from(args.preset));
    if let (Some(width), Some(height)) = (args.width, args.height) {
        options = options.with_size(width, height);
    }
    if let Some(seed) = args.seed {
        options = options.with_seed(seed);
    }

    let mut session = GameSession::new();
    let state = session.new_game(&options)?;
    print_state("Puzzle", &session, &state)?;
    print_solution(&session)?;

    let mut replay = Vec::new();
    if matches!(args.solver, SolverKind::Greedy | SolverKind::Both) {
        let moves = session.solve_greedy()?;
        println!("Greedy solver:");
        print_moves(&moves);
        println!();
        replay = moves;
    }
    if matches!(args.solver, SolverKind::Optimal | SolverKind::Both) {
        let game = session.game().ok_or(GameError::NoActiveGame)?;
        let plan = TreeSolver::new().plan(game.live(), game.solution())?;
        println!("Tree solver:");
        print_moves(plan.moves());
        println!(
            "  tree: {} nodes, {} distinct subtrees, {} cache hits",
            plan.nodes(),
            plan.distinct_subtrees(),
            plan.cache_hits()
        );
        println!();
        replay = plan.into_moves();
    }

    if !args.apply {
        return Ok(true);
    }

    let mut state = state;
    for mv in replay {
        state = session.apply_move(mv)?;
    }
    print_state("Replayed", &session, &state)?;
    let game = session.game().ok_or(GameError::NoActiveGame)?;
    let misplaced = game.live().differences(game.solution()).count();
    let solved = session.check_win()?;
    println!("Solved: {solved} ({misplaced} tiles off target)");
    log::info!("replayed {} moves, solved={solved}", state.counters.replayed);
    Ok(solved)
}

fn print_state(title: &str, session: &GameSession, state: &SessionState) -> Result<(), GameError> {
    let connected = session.connected_cells()?;
    println!("{title} ({}x{}, {}):", state.width, state.height, state.status);
    println!("  Seed: {}", state.seed);
    println!("  Active: {}", state.progress);
    println!();
    for line in render_grid(&state.live, &connected).lines() {
        println!("  {line}");
    }
    println!();
    Ok(())
}

fn print_solution(session: &GameSession) -> Result<(), GameError> {
    let game = session.game().ok_or(GameError::NoActiveGame)?;
    println!("Solution:");
    for line in render_plain(game.solution()).lines() {
        println!("  {line}");
    }
    println!();
    Ok(())
}

fn print_moves(moves: &[Move]) {
    println!("  {} moves", moves.len());
    if !moves.is_empty() {
        let listed = moves.iter().map(Move::to_string).collect::<Vec<_>>();
        println!("  {}", listed.join(" "));
    }
}
