use clap::Parser;
use code_entry::Charset;
use code_entry::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "code-entry", about = "Terminal verification-code entry")]
struct Args {
    /// Number of cells in the code
    #[arg(short, long)]
    digits: Option<usize>,

    /// Characters the code may contain
    #[arg(short, long, value_enum)]
    charset: Option<Charset>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to code-entry.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("code-entry.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config()?;
    let resolved = config::resolve(&file_config, args.digits, args.charset)?;
    log::info!(
        "code-entry starting with {} cells ({} charset)",
        resolved.digits,
        resolved.charset.label()
    );

    if let Some(code) = code_entry::tui::run(resolved)? {
        println!("{code}");
    }
    Ok(())
}
