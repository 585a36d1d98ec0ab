use clap::Parser;
use funfacts::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "funfacts", about = "Random fun facts in your terminal")]
struct Args {
    /// Fact service endpoint (overrides FUNFACTS_URL and the config file)
    #[arg(short, long)]
    url: Option<String>,

    /// Line mode: print facts to stdout instead of the full-screen UI
    #[arg(short, long)]
    plain: bool,

    /// Where to write the log file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("funfacts: {e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            endpoint_url: args.url,
            log_file: args.log_file,
        },
    );

    // File logger: the TUI owns the terminal, so nothing goes to stderr
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!(
        "funfacts starting (endpoint: {}, mode: {})",
        resolved.endpoint_url,
        if args.plain { "plain" } else { "tui" }
    );

    if args.plain {
        funfacts::plain::run(resolved).await
    } else {
        funfacts::tui::run(resolved)
    }
}
