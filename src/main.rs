use clap::Parser;
use contacts::cli;
use contacts::core::config::{self, CliOverrides};
use contacts::core::persist::PersistError;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "contacts", about = "Interactive phone book")]
struct Args {
    /// Phone book file to load and save
    #[arg(long = "infile", value_name = "PATH")]
    infile: Option<PathBuf>,

    /// Phone book file, as a bare argument
    #[arg(value_name = "FILE", conflicts_with = "infile")]
    file: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace, off)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<(), PersistError> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("Ignoring config: {e}");
        config::ContactsConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            phone_book: args.infile.or(args.file),
            log_level: args.log_level,
        },
    );

    // Initialize file logger - writes to contacts.log in current directory by default
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let level = resolved.log_level.parse().unwrap_or(LevelFilter::Debug);

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    log::info!("Contacts starting up with phone book: {:?}", resolved.phone_book);

    cli::run(&resolved)
}
