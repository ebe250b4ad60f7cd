use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use cookbook_gate::EntryGate;
use cookbook_resolver::{Resolver, ResolverConfig};
use cookbook_server::{CookbookServer, ServerConfig};
use cookbook_store::{EntryStore, InMemoryEntryStore};
use cookbook_types::{EntryRecord, RecipeSummary};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Parse(args) => cmd_parse(args, cli.format),
        Command::Summary(args) => cmd_summary(args, cli.format),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(max_depth) = args.max_depth {
        config.max_depth = max_depth;
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(CookbookServer::new(config).serve())?;
    Ok(())
}

fn cmd_parse(args: ParseArgs, format: OutputFormat) -> anyhow::Result<()> {
    let name = cookbook_names::normalize(&args.input)?;
    match format {
        OutputFormat::Text => println!("{}", name.bold()),
        OutputFormat::Json => println!("{}", serde_json::json!({ "msg": name })),
    }
    Ok(())
}

fn cmd_summary(args: SummaryArgs, format: OutputFormat) -> anyhow::Result<()> {
    let store = InMemoryEntryStore::new();
    let admitted = load_entries(&args.entries, &store)?;
    tracing::debug!(admitted, path = %args.entries.display(), "entries loaded");

    let config = args
        .max_depth
        .map(ResolverConfig::with_max_depth)
        .unwrap_or_default();
    let summary = Resolver::new(&store, config)
        .summarize(&args.name)
        .with_context(|| format!("summarizing {}", args.name))?;

    match format {
        OutputFormat::Text => print_summary(&summary),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }
    Ok(())
}

/// Admit every record in the JSON array at `path`, in order. Stops at the
/// first rejected record.
pub fn load_entries(path: &Path, store: &dyn EntryStore) -> anyhow::Result<usize> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let records: Vec<EntryRecord> = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;

    let gate = EntryGate::with_default_stages();
    let count = records.len();
    for (index, record) in records.into_iter().enumerate() {
        gate.admit(record, store)
            .with_context(|| format!("entry #{index} in {}", path.display()))?;
    }
    Ok(count)
}

fn print_summary(summary: &RecipeSummary) {
    println!(
        "{}  cook time {}",
        summary.name.bold(),
        summary.cook_time.to_string().cyan()
    );
    for ingredient in &summary.ingredients {
        println!(
            "  {:>6} x {}",
            ingredient.quantity.to_string().yellow(),
            ingredient.name
        );
    }
}
