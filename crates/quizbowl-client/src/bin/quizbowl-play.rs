//! Terminal front end: plays a Quiz Bowl round against a running server.
//!
//! Type commands on stdin; the screen is redrawn whenever the session
//! state changes.

use std::time::Duration;

use clap::Parser;
use quizbowl_client::{
    ClientConfig, DEFAULT_DIFFICULTY, DEFAULT_REQUEST_TIMEOUT, GameState,
    HttpRoundFetcher, Phase, render, spawn_session,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play a Quiz Bowl round in the terminal", long_about = None)]
struct Args {
    /// Quiz Bowl server to load questions from
    #[arg(short, long, env = "QUIZBOWL_SERVER", default_value = "http://localhost:5000")]
    server: String,

    /// Team name to join with
    #[arg(short, long)]
    team: Option<String>,

    /// Difficulty to request
    #[arg(short, long, default_value = DEFAULT_DIFFICULTY)]
    difficulty: String,

    /// Seconds to wait for the round before playing the built-in one
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT.as_secs())]
    timeout: u64,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Name(String),
    Join(String),
    Ready,
    Answer(usize),
    Quit,
    Help,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "name" if !rest.is_empty() => Some(Command::Name(rest.to_string())),
        "join" if !rest.is_empty() => Some(Command::Join(rest.to_string())),
        "ready" | "r" => Some(Command::Ready),
        "quit" | "q" | "exit" => Some(Command::Quit),
        "help" | "?" => Some(Command::Help),
        "a" | "1" => Some(Command::Answer(0)),
        "b" | "2" => Some(Command::Answer(1)),
        "c" | "3" => Some(Command::Answer(2)),
        "d" | "4" => Some(Command::Answer(3)),
        _ => None,
    }
}

const HELP: &str = "commands: name <team> | join <code> | ready | a-d or 1-4 | quit";

fn draw(state: &GameState) {
    // Clear the screen and home the cursor.
    print!("\x1B[2J\x1B[H");
    println!("{}", render(state));
    if state.phase == Phase::Complete {
        println!("type `quit` to leave");
    } else {
        println!("{HELP}");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr at `warn` so they don't scroll the screen away.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = ClientConfig {
        difficulty: args.difficulty,
        request_timeout: Duration::from_secs(args.timeout),
        ..ClientConfig::default()
    };
    let fetcher = HttpRoundFetcher::with_timeout(args.server, config.request_timeout)?;
    let session = spawn_session(fetcher, config);

    if let Some(team) = args.team {
        session.set_team_name(team).await?;
    }

    let mut screens = session.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    draw(&screens.borrow_and_update());

    loop {
        tokio::select! {
            changed = screens.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = screens.borrow_and_update().clone();
                draw(&state);
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_command(&line) {
                    Some(Command::Name(team)) => session.set_team_name(team).await?,
                    Some(Command::Join(code)) => session.submit_code(code).await?,
                    Some(Command::Ready) => session.toggle_ready().await?,
                    Some(Command::Answer(position)) => session.select_option(position).await?,
                    Some(Command::Help) => println!("{HELP}"),
                    Some(Command::Quit) => break,
                    None => println!("unknown command; {HELP}"),
                }
            }
        }
    }

    // The session may already be gone if the runtime is shutting down.
    let _ = session.shutdown().await;
    Ok(())
}
