//! Letter Box - CLI
//!
//! Word-chaining puzzle with TUI and line modes, plus board generation tools.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use letter_box::{
    commands::{GameContext, check_chain, generate_boards, run_simple, run_stats},
    config::GameConfig,
    core::Board,
    dictionary::{RetryingOracle, WordListDictionary},
    game::GameSession,
    generator::BoardGenerator,
    interactive::{App, run_tui},
    logging,
    output::{print_chain_check, print_generated, print_stats},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::runtime::Runtime;

type Oracle = RetryingOracle<WordListDictionary>;

#[derive(Parser)]
#[command(
    name = "letter_box",
    about = "Chain words around a square of letters until every letter is used",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Word list file, one word per line (default: built-in list)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Seed for reproducible boards
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Forbid reusing letters from earlier words
    #[arg(long, global = true)]
    no_reuse: bool,

    /// Play on your own board, sides in order top-left-right-bottom (e.g. ATE-MPS-RON-CID)
    #[arg(short, long, global = true)]
    letters: Option<String>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode without TUI
    Simple,

    /// Print random boards
    Generate {
        /// Number of boards
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,
    },

    /// Play a list of words in order and report each outcome
    Check {
        /// Words to submit
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Generate many boards and report generator statistics
    Stats {
        /// Number of boards
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    // Log lines would tear the TUI; keep it quiet unless RUST_LOG asks
    if matches!(command, Commands::Play) {
        logging::init_quiet_logger();
    } else {
        logging::init_logger(cli.verbose);
    }

    let mut config = GameConfig::load(cli.config.as_deref())
        .with_context(|| format!("loading config {:?}", cli.config))?;
    if cli.no_reuse {
        config.rules.allow_letter_reuse = false;
    }

    let generator = BoardGenerator::new(config.generator.clone());
    let mut rng = cli
        .seed
        .map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);

    match command {
        Commands::Generate { count } => {
            for (i, generated) in generate_boards(&generator, count, &mut rng)?
                .iter()
                .enumerate()
            {
                print_generated(i, generated);
            }
            Ok(())
        }
        Commands::Stats { count } => {
            let seed = cli.seed.unwrap_or_else(|| rng.random());
            println!("Generating {count} boards (seed {seed})...");
            let stats = run_stats(&generator, count, seed, true);
            print_stats(&stats);
            Ok(())
        }
        Commands::Check { words } => {
            let board = initial_board(cli.letters.as_deref(), &generator, &mut rng)?;
            let mut session = GameSession::new(board, config.rules);
            let oracle = load_oracle(cli.dictionary.as_deref(), &config)?;

            let runtime = Runtime::new()?;
            let check = runtime.block_on(check_chain(&mut session, &words, &oracle));
            print_chain_check(&check);
            Ok(())
        }
        Commands::Simple => {
            let runtime = Runtime::new()?;
            let mut ctx = game_context(&cli, &config, generator, rng)?;
            run_simple(&mut ctx, runtime.handle(), io::stdin().lock(), &mut io::stdout())?;
            Ok(())
        }
        Commands::Play => {
            let runtime = Runtime::new()?;
            let ctx = game_context(&cli, &config, generator, rng)?;
            run_tui(App::new(ctx, runtime.handle().clone()))
        }
    }
}

fn load_oracle(path: Option<&Path>, config: &GameConfig) -> Result<Oracle> {
    let dictionary = match path {
        Some(path) => WordListDictionary::from_file(path)
            .with_context(|| format!("loading word list {}", path.display()))?,
        None => WordListDictionary::embedded(),
    };
    tracing::info!(words = dictionary.len(), "dictionary loaded");

    Ok(RetryingOracle::new(dictionary, config.oracle))
}

fn initial_board(
    letters: Option<&str>,
    generator: &BoardGenerator,
    rng: &mut StdRng,
) -> Result<Board> {
    match letters {
        Some(text) => Board::parse(text, &generator.config().board_rules())
            .with_context(|| format!("invalid board {text:?}")),
        None => Ok(generator.generate(rng)?.board),
    }
}

fn game_context(
    cli: &Cli,
    config: &GameConfig,
    generator: BoardGenerator,
    mut rng: StdRng,
) -> Result<GameContext<Oracle>> {
    let board = initial_board(cli.letters.as_deref(), &generator, &mut rng)?;
    let session = GameSession::new(board, config.rules);
    let oracle = load_oracle(cli.dictionary.as_deref(), config)?;

    Ok(GameContext::new(session, generator, Arc::new(oracle), rng))
}
