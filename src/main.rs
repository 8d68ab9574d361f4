//! Binary entrypoint for the Kaivoseikkailu terminal shell.
//!
//! Commands:
//! - `play [--json]` - play in the terminal (default when no command is given)
//! - `init` - write a starter `config.toml`
//! - `map` - print every location, its exits and locks, and the unlock gates
//!
//! See the library crate docs for the game core: `kaivoseikkailu::game`.
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use log::{debug, info, warn};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

use kaivoseikkailu::config::Config;
use kaivoseikkailu::game::render::{render, render_map};
use kaivoseikkailu::game::{ConsoleNotifier, GameSession};

/// Shell-only words that end the session; they never reach the game.
const QUIT_WORDS: [&str; 2] = ["lopeta", "quit"];

#[derive(Parser)]
#[command(name = "kaivoseikkailu")]
#[command(about = "A small Finnish text adventure")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game on this terminal
    Play {
        /// Print the world snapshot as JSON after every command
        #[arg(long)]
        json: bool,
    },
    /// Write a default configuration file
    Init,
    /// Print the location graph and unlock gates
    Map,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // A missing config file is fine; defaults apply
    let (config, config_error) = match cli.command {
        Some(Commands::Init) => (None, None),
        _ => match Config::load_optional(&cli.config).await {
            Ok(config) => (config, None),
            Err(e) => (None, Some(e)),
        },
    };
    init_logging(&config, cli.verbose);
    if let Some(e) = config_error {
        warn!("Ignoring configuration, using defaults: {}", e);
    }
    let config = config.unwrap_or_default();

    match cli.command.unwrap_or(Commands::Play { json: false }) {
        Commands::Play { json } => {
            info!("Starting Kaivoseikkailu v{}", env!("CARGO_PKG_VERSION"));
            play(&config, json || config.game.show_snapshot_json).await?;
        }
        Commands::Init => {
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
            println!("Wrote {}", cli.config);
        }
        Commands::Map => {
            let session = GameSession::new().map_err(|e| anyhow!("World failed to load: {}", e))?;
            print!("{}", render_map(session.locations(), session.gates()));
        }
    }

    Ok(())
}

async fn play(config: &Config, json: bool) -> Result<()> {
    let mut session = GameSession::new().map_err(|e| anyhow!("World failed to load: {}", e))?;
    let mut notifier = ConsoleNotifier {
        echo_to_log: config.game.log_messages,
    };
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    print!("{}", render(&session.snapshot()));
    loop {
        print!("{} ", config.game.prompt);
        std::io::stdout().flush()?;

        let line = match lines.next_line().await? {
            Some(line) => line,
            None => {
                debug!("stdin closed");
                break;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if QUIT_WORDS.contains(&trimmed.to_lowercase().as_str()) {
            break;
        }

        let was_over = session.is_game_over();
        session.submit_and_notify(&line, &mut notifier);
        if session.is_game_over() && !was_over {
            info!("Game won");
        }

        let snapshot = session.snapshot();
        print!("{}", render(&snapshot));
        if json {
            match serde_json::to_string(&snapshot) {
                Ok(s) => println!("{}", s),
                Err(e) => warn!("Failed to serialize snapshot: {}", e),
            }
        }
    }
    Ok(())
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let base_level = match verbosity {
        0 => config
            .as_ref()
            .map(|c| c.logging.level_filter())
            .unwrap_or(log::LevelFilter::Warn),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    let log_file = config
        .as_ref()
        .and_then(|c| c.logging.file.as_ref())
        .and_then(|file| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(file)
                .ok()
        });

    if let Some(f) = log_file {
        let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
        // Console output only when someone is watching stderr
        let is_tty = atty::is(atty::Stream::Stderr);
        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());
            if let Ok(mut guard) = write_mutex.lock() {
                let _ = writeln!(guard, "{}", line);
            }
            if is_tty {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else {
        builder.format(|fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
        });
    }
    let _ = builder.try_init();
}
