use super::TcoOperation;
use clap::Parser;

/// command line tool comparing the total cost of ownership of diesel,
/// battery-electric and autonomous battery-electric buses per route cycle
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct TcoApp {
    /// select the operation to run
    #[command(subcommand)]
    pub op: TcoOperation,
}
