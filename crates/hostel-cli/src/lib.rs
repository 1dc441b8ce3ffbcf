pub mod app;
pub mod commands;
pub mod config;
pub mod console;
pub mod dispatcher;
pub mod session;

use tracing_subscriber::{fmt, EnvFilter};

use crate::app::App;
use crate::config::{Cli, CliConfig};
use crate::console::StdConsole;

/// Install the global subscriber. Logs go to stderr so prompts on stdout
/// stay readable; `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,hostel_store=info,hostel_cli_lib=info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    init_tracing();
    tracing::info!("Starting Hostel Desk v{}", env!("CARGO_PKG_VERSION"));

    let config = CliConfig::from_env().with_cli(&cli);
    tracing::info!(?config, "Loaded configuration");

    let store = config.open_store();
    if config.seed {
        store.seed_defaults()?;
    }

    let mut app = App::new(store);

    // The prompt loop blocks on stdin, so it runs on the blocking pool and
    // Ctrl+C is answered from here.
    let desk = tokio::task::spawn_blocking(move || {
        let mut console = StdConsole::new();
        app.run(&mut console);
    });

    tokio::select! {
        joined = desk => {
            joined?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("interrupted");
            println!("\n\nGoodbye!");
            // The blocking thread is parked on stdin and would keep the
            // runtime alive on shutdown.
            std::process::exit(0);
        }
    }

    Ok(())
}
