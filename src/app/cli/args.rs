//! Command-line arguments for the eclocate binary
//!
//! The external interface is deliberately a single path argument; logging
//! is tuned through the `ECLOCATE_LOG*` environment variables so the CLI
//! surface stays fixed.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "eclocate")]
#[command(about = "Locate an Eclipse installation and resolve its core bundle archives")]
#[command(version)]
pub struct Args {
    /// Directory to search for an Eclipse installation
    #[arg(value_name = "SEARCH_ROOT")]
    pub search_root: PathBuf,
}
