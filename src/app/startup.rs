//! Application startup

use clap::Parser;

use crate::app::cli::args::Args;
use crate::core::error_handling::log_fatal_error;
use crate::core::logging::init_logging;
use crate::locator::api::locate_bundles;

/// Parse arguments, initialise logging, run the locator and print one
/// resolved URL per line
pub fn startup() {
    let args = Args::parse();

    if let Err(e) = init_logging() {
        eprintln!("Failed to initialise logging: {}", e);
    }

    log::debug!(
        "eclocate starting (built {}, {})",
        crate::BUILD_TIME,
        crate::GIT_HASH
    );

    match locate_bundles(&args.search_root) {
        Ok(locations) => {
            for url in &locations {
                println!("{}", url);
            }
        }
        Err(e) => {
            log_fatal_error(&e, "Eclipse bundle resolution");
            std::process::exit(1);
        }
    }
}
