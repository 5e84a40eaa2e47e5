mod arena;
mod config;
mod play;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tictactoe_engine::config::{ConfigManager, Validate};
use tictactoe_engine::{Board, Difficulty, Mark, MatchSession, SessionRng, log, logger, select_move};

use arena::run_arena;
use config::{ArenaConfig, CliConfig, DEFAULT_CONFIG_FILE};
use play::{render_statistics, run_play};

#[derive(Parser)]
#[command(name = "tictactoe", version, about = "Tic-tac-toe against a tiered computer opponent")]
struct Args {
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play rounds against the computer in the terminal
    Play {
        #[arg(long)]
        difficulty: Option<Difficulty>,
        #[arg(long)]
        mark: Option<Mark>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Let two computer tiers play each other
    Arena {
        #[arg(long)]
        x: Option<Difficulty>,
        #[arg(long)]
        o: Option<Difficulty>,
        #[arg(long)]
        rounds: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the cell the computer would choose, e.g. --board "XX./.O./..."
    BestMove {
        #[arg(long)]
        board: Board,
        #[arg(long, default_value_t = Difficulty::Expert)]
        difficulty: Difficulty,
        #[arg(long, default_value_t = Mark::O)]
        computer: Mark,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn session_rng(seed: Option<u64>) -> SessionRng {
    seed.map_or_else(SessionRng::from_random, SessionRng::new)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let config_manager: ConfigManager<_, CliConfig> = ConfigManager::from_yaml_file(args.config.clone());
    let config = config_manager.get_config()?;

    match args.command {
        Command::Play {
            difficulty,
            mark,
            seed,
        } => {
            let difficulty = difficulty.unwrap_or(config.play.difficulty);
            let mark = mark.unwrap_or(config.play.player_mark);
            let mut session = MatchSession::new(difficulty, mark, session_rng(seed));
            log!("Session started: {} vs {} computer", mark, difficulty);

            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            run_play(&mut session, stdin.lock(), &mut stdout)?;

            println!("{}", render_statistics(&session));
        }
        Command::Arena { x, o, rounds, seed } => {
            let settings = ArenaConfig {
                x_difficulty: x.unwrap_or(config.arena.x_difficulty),
                o_difficulty: o.unwrap_or(config.arena.o_difficulty),
                rounds: rounds.unwrap_or(config.arena.rounds),
                seed: seed.or(config.arena.seed),
            };
            settings.validate()?;
            let mut rng = session_rng(settings.seed);
            let tally = run_arena(&settings, &mut rng)?;
            println!("{}", tally);
        }
        Command::BestMove {
            board,
            difficulty,
            computer,
            seed,
        } => {
            let mut rng = session_rng(seed);
            let index = select_move(&board, difficulty, computer, computer.opponent(), &mut rng)?;
            println!("{}\n", board);
            println!("{} ({}) plays {}", computer, difficulty, index);
        }
    }

    Ok(())
}
