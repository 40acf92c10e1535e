//! N-Row: connect five on an unbounded grid.
//!
//! ## Usage
//!
//! - `nrow` - Play a two-player game in the terminal
//! - `nrow play --player1 Ann --player2 Bob` - Skip the name prompts
//! - `nrow demo --seed 7` - Watch a random self-play game
//!
//! Set `NO_COLOR` to disable coloured output and `RUST_LOG` to see logs on stderr.

use std::ffi::OsString;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use nrow::constants::DEFAULT_PAD;
use nrow::game::{Game, Outcome, ask_name};
use nrow::interrupt::Interrupt;
use nrow::player::Players;
use nrow::playout::random_game;
use nrow::printer::ColorPrinter;
use nrow::render::render_lines;

/// N-Row: connect five on an unbounded grid
#[derive(Parser)]
#[command(name = "nrow")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game between two people at this terminal
    Play(PlayArgs),
    /// Play a random game and print the final board
    Demo(DemoArgs),
}

#[derive(Args, Default)]
struct PlayArgs {
    /// Name of the first player (X); prompted for if omitted
    #[arg(long)]
    player1: Option<String>,
    /// Name of the second player (O); prompted for if omitted
    #[arg(long)]
    player2: Option<String>,
    /// Empty cells drawn around the occupied area
    #[arg(long, default_value_t = DEFAULT_PAD)]
    pad: i64,
    /// Print without colours
    #[arg(long)]
    no_color: bool,
}

#[derive(Args)]
struct DemoArgs {
    /// Seed for the random moves
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Stop after this many moves if nobody has won
    #[arg(long, default_value_t = 200)]
    max_moves: usize,
    /// Print without colours
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Demo(args)) => run_demo(args),
        Some(Commands::Play(args)) => run_play(args),
        None => run_play(PlayArgs {
            pad: DEFAULT_PAD,
            ..PlayArgs::default()
        }),
    }
}

/// Colour is on unless `--no-color` is given or `NO_COLOR` is set.
fn use_color(no_color: bool, no_color_env: Option<OsString>) -> bool {
    !no_color && no_color_env.is_none()
}

fn make_printer<W: Write>(out: W, color: bool) -> ColorPrinter<W> {
    if color {
        ColorPrinter::new(out)
    } else {
        ColorPrinter::plain(out)
    }
}

fn run_play(args: PlayArgs) -> Result<()> {
    let color = use_color(args.no_color, std::env::var_os("NO_COLOR"));
    let interrupt = Interrupt::install(color)?;
    let mut input = io::stdin().lock();
    let mut printer = make_printer(io::stdout(), color);

    let Some(first) = name_or_prompt(args.player1, &mut input, &mut printer, 1)? else {
        return farewell(&mut printer);
    };
    let Some(second) = name_or_prompt(args.player2, &mut input, &mut printer, 2)? else {
        return farewell(&mut printer);
    };

    let mut game = Game::new(Players::new(first, second), input, printer, args.pad);
    interrupt.enter_game();
    match game.play()? {
        Outcome::Won { .. } => Ok(()),
        Outcome::Exited => farewell(&mut game.into_printer()),
    }
}

fn name_or_prompt<R: BufRead, W: Write>(
    given: Option<String>,
    input: &mut R,
    printer: &mut ColorPrinter<W>,
    seat: usize,
) -> Result<Option<String>> {
    match given {
        Some(name) => Ok(Some(name)),
        None => ask_name(input, printer, seat),
    }
}

fn farewell<W: Write>(printer: &mut ColorPrinter<W>) -> Result<()> {
    printer
        .print_colored("Game exited. Thanks for playing!")
        .context("failed to write to console")
}

fn run_demo(args: DemoArgs) -> Result<()> {
    let color = use_color(args.no_color, std::env::var_os("NO_COLOR"));
    let mut printer = make_printer(io::stdout(), color);
    let playout = random_game(args.seed, args.max_moves);

    printer.print_colored(&format!("Random game, seed {}", args.seed))?;
    for line in render_lines(&playout.board, DEFAULT_PAD) {
        printer.print_colored(&line)?;
    }
    let summary = match playout.winner {
        Some(symbol) => format!("{symbol} wins after {} moves", playout.moves.len()),
        None => format!("No winner after {} moves", playout.moves.len()),
    };
    printer.print_colored(&summary)?;
    Ok(())
}
