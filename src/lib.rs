pub mod board;
pub mod game;
pub mod matchup;
pub mod player;
pub mod types;
pub mod wasm;

#[cfg(feature = "cli")]
pub mod config;
#[cfg(feature = "cli")]
pub mod console;
#[cfg(feature = "cli")]
pub mod error;
#[cfg(feature = "cli")]
pub mod session;
#[cfg(feature = "cli")]
pub mod view;
