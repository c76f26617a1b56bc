use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use hostdeck::config::{self, Config};
use hostdeck::session::{FAREWELL, Session};
use hostdeck::tui;

#[derive(Parser)]
#[command(
    name = "hostdeck",
    about = "Interactive terminal dashboard for host telemetry and administration"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Launch the full-screen dashboard instead of the menu session
    #[arg(long, default_value_t = false)]
    tui: bool,

    /// Refresh rate of the full-screen dashboard, in milliseconds
    #[arg(long)]
    refresh_rate: Option<u64>,

    /// Color theme: dark, light, mono
    #[arg(long)]
    theme: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let cli = Cli::parse();
    let config = load_config_for_cli(&cli);

    if cli.tui {
        return tui::run(config).await;
    }

    let session_task = tokio::task::spawn_blocking(move || {
        let mut session = Session::stdio(config);
        session.run()
    });

    // The interrupt guard: Ctrl-C ends the session with a farewell and a
    // success status, never a raw fault.
    tokio::select! {
        result = session_task => result??,
        _ = tokio::signal::ctrl_c() => {
            println!();
            println!("{FAREWELL}");
        }
    }
    Ok(())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config_for_cli(cli: &Cli) -> Config {
    let mut config = match &cli.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };

    if let Some(rate) = cli.refresh_rate {
        config.general.refresh_rate_ms = rate;
    }
    if let Some(ref theme) = cli.theme {
        config.colors.theme = theme.clone();
    }

    config
}
