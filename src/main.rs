mod calc;
mod config;
mod data;
mod logging;
mod models;
mod run;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let log_path = logging::init();
    let settings = config::load()?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log = ?log_path,
        "finboard starting"
    );

    match args.len() {
        1 => {
            let mut ledger = data::Ledger::demo();
            run::as_tui(settings, &mut ledger)
        }
        2.. => run::as_cli(&args, &settings),
        _ => {
            eprintln!("Usage: finboard [command]");
            Ok(())
        }
    }
}
