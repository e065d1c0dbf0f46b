//! # CLI Layer
//!
//! The CLI layer is the **only** place in drafts that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: clap turns shell arguments into [`Commands`]
//! 2. **Context Setup**: [`initialize`] resolves the data directory and config
//! 3. **API Dispatch**: call the matching `DraftsApi` method
//! 4. **Output Formatting**: hand the `CmdResult` to the render module
//!
//! Errors are returned to `main`, which decides how to print them.

use super::logging::init_logging;
use super::render::{format_timestamp, print_messages, print_records, print_stats};
use super::setup::{Cli, Commands};
use crate::samples;
use clap::Parser;
use colored::Colorize;
use draftsapp::api::{CmdMessage, RecordQuery, SortMode, TagFilter};
use draftsapp::error::Result;
use draftsapp::init::{initialize, DraftsContext};
use draftsapp::model::Tag;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let _logger = init_logging(cli.verbose);

    let mut ctx = initialize(cli.data)?;

    match cli.command.unwrap_or(Commands::Home) {
        Commands::Home => handle_home(&ctx),
        Commands::Post {
            message,
            thought,
            tag,
        } => handle_post(&mut ctx, message.join(" "), thought, tag),
        Commands::List { search, tag, sort } => handle_list(&ctx, search, tag, &sort),
        Commands::Relate { id } => handle_relate(&mut ctx, &id),
        Commands::Seed => handle_seed(&mut ctx),
        Commands::Stats => handle_stats(&ctx),
        Commands::Config { key } => handle_config(&ctx, key),
    }
}

fn handle_home(ctx: &DraftsContext) -> Result<()> {
    handle_stats(ctx)?;
    println!();

    let result = ctx.api.list_featured(ctx.config.featured_count)?;
    if !result.listed_records.is_empty() {
        println!("{}", "Recently added".bold());
    }
    print_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_post(
    ctx: &mut DraftsContext,
    message: String,
    thought: Option<String>,
    tag: Option<Tag>,
) -> Result<()> {
    let result = ctx
        .api
        .create_record(&message, thought.as_deref(), tag)?;
    print_messages(&result.messages);
    for record in &result.affected_records {
        println!(
            "{} {}",
            record.id.as_str().yellow(),
            format_timestamp(record.created_at).dimmed()
        );
    }
    Ok(())
}

fn handle_list(
    ctx: &DraftsContext,
    search: Option<String>,
    tag: TagFilter,
    sort: &str,
) -> Result<()> {
    let query = RecordQuery::new()
        .with_text(search.unwrap_or_default())
        .with_tag(tag)
        .with_sort(SortMode::parse_lenient(sort));
    let result = ctx.api.query_records(&query)?;
    print_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_relate(ctx: &mut DraftsContext, input: &str) -> Result<()> {
    let Some(id) = ctx.api.resolve_id(input)? else {
        print_messages(&[CmdMessage::warning(format!(
            "No draft found with id {}",
            input
        ))]);
        return Ok(());
    };

    let result = ctx.api.increment_relate(id.as_str())?;
    for record in &result.affected_records {
        print_messages(&[CmdMessage::success(format!(
            "You relate to this draft ({} total).",
            record.relates
        ))]);
    }
    Ok(())
}

fn handle_seed(ctx: &mut DraftsContext) -> Result<()> {
    let result = ctx.api.seed_samples(&samples::builtin())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &DraftsContext) -> Result<()> {
    if let Some(stats) = ctx.api.stats()?.stats {
        print_stats(&stats);
    }
    Ok(())
}

fn handle_config(ctx: &DraftsContext, key: Option<String>) -> Result<()> {
    match key {
        Some(key) => match ctx.config.get(&key) {
            Some(value) => println!("{}", value),
            None => print_messages(&[CmdMessage::warning(format!(
                "Unknown config key: {}",
                key
            ))]),
        },
        None => {
            println!("data_dir = {}", ctx.data_dir.display());
            println!("storage_key = {}", ctx.config.storage_key);
            println!("featured_count = {}", ctx.config.featured_count);
        }
    }
    Ok(())
}
