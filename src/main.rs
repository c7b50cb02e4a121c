// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Command-line front end for the key generator.
//!
//! Run with: `cargo run --features cli -- --block-size 3 next 001`

use clap::Parser;
use clap::Subcommand;

use ordkey::charset;
use ordkey::Config;
use ordkey::Generator;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Predefined symbol set: all, all-no-escape, alphanumeric,
    /// alphanumeric-lower, base64, base58.
    #[arg(long, default_value = "alphanumeric-lower", conflicts_with = "symbols")]
    charset: String,

    /// Custom symbols, in any order.
    #[arg(long)]
    symbols: Option<String>,

    /// Length granularity of keys.
    #[arg(long, default_value_t = 1)]
    block_size: usize,

    /// Units moved by next and prev.
    #[arg(long, default_value_t = 1)]
    step_size: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the key after KEY (the first key when omitted).
    Next { key: Option<String> },
    /// Print the key before KEY (the last key when omitted).
    Prev { key: Option<String> },
    /// Print a key strictly between PREV and BEFORE.
    Between { prev: String, before: String },
    /// Print the middle key.
    Middle,
    /// Print COUNT successive keys.
    Seq {
        count: usize,
        /// Start after this key.
        #[arg(long, default_value = "")]
        from: String,
        /// Walk downwards with prev.
        #[arg(long)]
        desc: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let symbols = match cli.symbols {
        Some(symbols) => symbols,
        None => charset::by_name(&cli.charset)
            .ok_or_else(|| format!("unknown charset '{}'", cli.charset))?
            .to_string(),
    };
    let config = Config::new()
        .with_block_size(cli.block_size)
        .with_step_size(cli.step_size);
    let generator = Generator::with_config(&symbols, config)?;
    tracing::debug!(alphabet = ?generator.alphabet(), config = ?generator.config(), "generator ready");

    match cli.command {
        Command::Next { key } => {
            println!("{}", generator.next(key.as_deref().unwrap_or("")));
        }
        Command::Prev { key } => {
            println!("{}", generator.prev(key.as_deref().unwrap_or(""))?);
        }
        Command::Between { prev, before } => {
            println!("{}", generator.next_before(&prev, &before)?);
        }
        Command::Middle => {
            println!("{}", generator.middle());
        }
        Command::Seq { count, from, desc } => {
            if desc {
                for key in generator.descending(&from).take(count) {
                    println!("{key}");
                }
            } else {
                for key in generator.ascending(&from).take(count) {
                    println!("{key}");
                }
            }
        }
    }

    return Ok(());
}
