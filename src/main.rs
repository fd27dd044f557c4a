use anyhow::Result;
use reversi_tty::config::Config;
use reversi_tty::console::RustylineConsole;
use reversi_tty::session::Session;
use tracing::info;

fn main() -> Result<()> {
    let config = Config::parse_args();

    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr)
        .init();

    if config.no_color {
        colored::control::set_override(false);
    }

    info!(?config, "starting reversi-tty");

    let console = RustylineConsole::new()?;
    let mut session = Session::new(console, config.session_options());
    session.run()?;
    Ok(())
}
