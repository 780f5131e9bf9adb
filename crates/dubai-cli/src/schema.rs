//! # Schema Subcommand
//!
//! Prints the JSON Schema backing a collection so editors and other
//! tooling can validate content without this binary. Shared definitions
//! are referenced as `common.schema.json`; pass `--common` to print that
//! document instead.

use anyhow::{Context, Result};
use clap::Args;

use dubai_core::Collection;
use dubai_schema::SchemaRegistry;

/// Arguments for the `dubai schema` subcommand.
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Collection whose schema to print.
    #[arg(value_name = "COLLECTION", required_unless_present = "common")]
    pub collection: Option<Collection>,

    /// Print the shared definitions schema.
    #[arg(long, conflicts_with = "collection")]
    pub common: bool,
}

/// Execute the schema subcommand.
pub fn run_schema(args: &SchemaArgs, registry: &SchemaRegistry) -> Result<u8> {
    let text = render_schema(args, registry)?;
    println!("{text}");
    Ok(0)
}

/// The pretty-printed schema document selected by `args`.
pub fn render_schema(args: &SchemaArgs, registry: &SchemaRegistry) -> Result<String> {
    if args.common {
        return Ok(serde_json::to_string_pretty(registry.common_schema())?);
    }
    let collection = args
        .collection
        .context("a collection name or --common is required")?;
    let schema = registry
        .schema(collection)
        .with_context(|| format!("no schema registered for '{collection}'"))?;
    Ok(serde_json::to_string_pretty(schema)?)
}
