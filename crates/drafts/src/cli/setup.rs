use clap::{Parser, Subcommand};
use draftsapp::model::{Tag, UnknownTag};
use draftsapp::query::TagFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "drafts",
    bin_name = "drafts",
    version,
    about = "An anonymous archive of unsent messages",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $DRAFTS_DATA, then the OS data directory)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

fn parse_tag(s: &str) -> Result<Tag, UnknownTag> {
    s.parse()
}

fn parse_tag_filter(s: &str) -> Result<TagFilter, UnknownTag> {
    Ok(TagFilter::parse_lenient(s))
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show totals and the most recent drafts
    #[command(display_order = 1)]
    Home,

    /// Write a new unsent message
    #[command(alias = "p", display_order = 2)]
    Post {
        /// Message words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,

        /// An afterthought shown under the message
        #[arg(short, long)]
        thought: Option<String>,

        /// Category: regret, gratitude, closure, sadness or unspecified
        #[arg(long, value_parser = parse_tag)]
        tag: Option<Tag>,
    },

    /// Browse the archive
    #[command(alias = "ls", display_order = 3)]
    List {
        /// Only drafts whose message or thought contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Only drafts with this tag ("all" for every tag; unknown tags match nothing)
        #[arg(long, default_value = "all", value_parser = parse_tag_filter)]
        tag: TagFilter,

        /// Sort order: newest or relate (unknown values sort by newest)
        #[arg(long, default_value = "newest")]
        sort: String,
    },

    /// Say you relate to a draft
    #[command(display_order = 4)]
    Relate {
        /// Draft id, or a unique prefix of at least four characters
        id: String,
    },

    /// Add the built-in sample drafts
    #[command(display_order = 5)]
    Seed,

    /// Show the number of drafts and reactions
    #[command(display_order = 6)]
    Stats,

    /// Show configuration values
    #[command(display_order = 7)]
    Config {
        /// A single key to show
        key: Option<String>,
    },
}
