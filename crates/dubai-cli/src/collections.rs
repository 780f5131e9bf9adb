//! # Collections Subcommand
//!
//! Prints the registered collection names, one per line, in sorted order.

use anyhow::Result;
use clap::Args;

use dubai_schema::list_collections;

/// Arguments for the `dubai collections` subcommand.
#[derive(Args, Debug)]
pub struct CollectionsArgs {
    /// Print the names as a JSON array.
    #[arg(long)]
    pub json: bool,
}

/// Execute the collections subcommand.
pub fn run_collections(args: &CollectionsArgs) -> Result<u8> {
    let names = list_collections();
    if args.json {
        println!("{}", serde_json::to_string(&names)?);
    } else {
        for name in &names {
            println!("{name}");
        }
    }
    Ok(0)
}
