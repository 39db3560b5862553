use clap::Parser;
use modsnap_interface::{
    list_modules,
    SnapshotError,
    SystemSource,
};

use crate::output::Report;

mod output;

#[derive(Debug, Parser)]
#[clap(name = "modsnap", version)]
struct AppArgs {
    /// ID of the process whose modules should be listed (base 10)
    process_id: u32,

    /// Enable verbose logging ($env:RUST_LOG="trace")
    #[clap(short, long)]
    verbose: bool,
}

fn main() {
    output::print_banner();

    let args = match AppArgs::try_parse() {
        Ok(args) => args,
        Err(error) => {
            println!("{:#}", error);
            std::process::exit(1);
        }
    };

    env_logger::builder()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    if let Err(error) = run(args.process_id) {
        println!("*** ERROR: {:#}", error);
        if let Some(error) = error.downcast_ref::<SnapshotError>() {
            println!("    (Error code: {})", error.os_error_code());
        }
        std::process::exit(1);
    }
}

fn run(process_id: u32) -> anyhow::Result<()> {
    let modules = list_modules(&SystemSource, process_id)?;

    print!(
        "{}",
        Report {
            process_id,
            modules: &modules,
        }
    );
    Ok(())
}
