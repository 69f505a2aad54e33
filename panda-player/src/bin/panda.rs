use clap::{Parser, Subcommand};
use panda_othello::{Board, Side};
use panda_player::connectors::{serve, Reply, TextConnector};
use panda_player::{Agent, AgentConfig};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "panda", version, about = "Fixed-depth alpha-beta Othello player")]
struct Cli {
    /// JSON config file; flags below override it
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,
    /// Plies searched below the opponent's reply
    #[arg(short = 'd', long)]
    depth: Option<u32>,
    /// Seed for the random fallback
    #[arg(short = 's', long)]
    seed: Option<u64>,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Choose a move for one position
    Choose {
        /// Board cells, row-major: '-' empty, 'X' black, 'O' white
        board: Board,
        /// Side to move: black/white or X/O
        side: Side,
        /// Also print every candidate's value
        #[arg(long)]
        verbose: bool,
    },
    /// Answer "<cells> <side>" lines from stdin until EOF
    Serve,
    /// Print the agent's face
    Face,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AgentConfig::from_file(path)?,
        None => AgentConfig::default(),
    };
    if let Some(depth) = cli.depth {
        config = config.with_depth(depth);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    let mut agent = Agent::new(config);

    match cli.cmd {
        Command::Choose {
            board,
            side,
            verbose,
        } => {
            let decision = agent.decide(&board, side);
            if verbose {
                println!("{}", board);
                for (loc, value) in &decision.scores {
                    println!("{} {}", loc, value);
                }
            }
            println!("{}", Reply::from(decision.choice));
        }
        Command::Serve => {
            let stdin = io::stdin();
            let mut connector = TextConnector::new(stdin.lock(), io::stdout());
            let answered = serve(&mut connector, &mut agent)?;
            tracing::info!(answered, "input closed");
        }
        Command::Face => println!("{}", agent.face()),
    }

    Ok(())
}
