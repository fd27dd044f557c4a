//! Command-line options for the terminal game.

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::session::SessionOptions;
use crate::types::Color;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "reversi-tty",
    version,
    about = "Play Reversi against the computer in your terminal"
)]
pub struct Config {
    /// Always play this color and skip the color menu
    #[arg(long, value_enum)]
    pub color: Option<Color>,

    /// Milliseconds the opponent pauses before it moves
    #[arg(long, default_value_t = 1000)]
    pub delay_ms: u64,

    /// Print the board without ANSI colors
    #[arg(long)]
    pub no_color: bool,

    /// Log filter used when RUST_LOG is not set (logs go to stderr)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Config {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            color: self.color,
            opponent_delay: Duration::from_millis(self.delay_ms),
        }
    }

    /// `RUST_LOG` wins over `--log-level`.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level))
    }
}
