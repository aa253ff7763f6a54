use campcheck::pipeline;
use campcheck::settings::{SETTINGS_FILE, Settings};
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_FILE: &str = "debug.log";

fn init_tracing() -> Option<WorkerGuard> {
    // RUST_LOG overrides; debug gives the full per-cell narration.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let console = fmt::layer()
        .with_writer(io::stdout)
        .with_target(false)
        .without_time();
    match File::create(LOG_FILE) {
        Ok(log_file) => {
            let (writer, guard) = tracing_appender::non_blocking(log_file);
            tracing_subscriber::registry()
                .with(console)
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .with(filter)
                .init();
            Some(guard)
        }
        Err(_) => {
            tracing_subscriber::registry().with(console).with(filter).init();
            None
        }
    }
}

// Staff run this by double-click; hold the window open until they have read
// the outcome.
fn pause() {
    print!("Press Enter to exit");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}

fn main() {
    println!("Camp Check Automator {}", env!("CARGO_PKG_VERSION"));
    println!();
    let _guard = init_tracing();

    let settings = Settings::load(Path::new(SETTINGS_FILE));
    match pipeline::run(&settings) {
        Ok(()) => {
            println!();
            println!("Camp check complete.");
            pause();
        }
        Err(e) => {
            eprintln!();
            eprintln!("Aborted: {e}");
            pause();
            std::process::exit(1);
        }
    }
}
