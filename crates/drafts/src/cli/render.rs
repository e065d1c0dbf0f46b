//! # Rendering
//!
//! Turns `CmdResult` contents into terminal text. Layout math (widths,
//! truncation, padding) is Unicode-aware via `unicode-width`; colors come from
//! `colored`, which turns itself off when stdout is not a terminal.
//!
//! A draft renders as one header line plus an optional thought line:
//!
//! ```text
//!   4b1d8c52  regret      I hope you know I meant it, even when…   ♥ 2   3 hours ago
//!                         I still replay the moment and rewrite it in my head.
//! ```
//!
//! The `format_*` functions return strings so they can be tested without a
//! terminal; the `print_*` functions write them to stdout.

use chrono::{DateTime, Local, Utc};
use colored::Colorize;
use draftsapp::api::{CmdMessage, MessageLevel, Stats};
use draftsapp::model::Record;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
const ID_WIDTH: usize = 10;
const TAG_WIDTH: usize = 12;
const RELATES_WIDTH: usize = 7;
const TIME_WIDTH: usize = 16;
const RELATE_MARKER: &str = "♥";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_records(records: &[Record]) {
    let now = Utc::now();
    for record in records {
        print!("{}", format_record(record, now));
    }
}

pub(super) fn print_stats(stats: &Stats) {
    println!("{}", format_stats(stats));
}

pub(super) fn format_stats(stats: &Stats) -> String {
    format!(
        "{} {}   {} {}",
        stats.records.to_string().bold(),
        if stats.records == 1 { "draft" } else { "drafts" },
        stats.relates.to_string().bold(),
        if stats.relates == 1 { "relate" } else { "relates" },
    )
}

/// Renders one record as its header line and, when present, its thought line.
pub(super) fn format_record(record: &Record, now: DateTime<Utc>) -> String {
    let id = pad_to_width(record.id.short(), ID_WIDTH);
    let tag = pad_to_width(record.tag.as_str(), TAG_WIDTH);
    let relates = format!(
        "{:>width$}",
        format!("{} {}", RELATE_MARKER, record.relates),
        width = RELATES_WIDTH - 1
    );
    let time = format!(
        "{:>width$}",
        format_time_ago(record.created_at, now),
        width = TIME_WIDTH
    );

    let indent = 2;
    let fixed = indent + ID_WIDTH + TAG_WIDTH + RELATES_WIDTH + TIME_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed);
    let message = truncate_to_width(&single_line(&record.message), available);
    let padding = available.saturating_sub(message.width());

    let mut out = format!(
        "{}{}{}{}{}{} {}\n",
        " ".repeat(indent),
        id.yellow(),
        tag.cyan(),
        message,
        " ".repeat(padding),
        relates.magenta(),
        time.dimmed()
    );

    if record.has_thought() {
        let thought_indent = indent + ID_WIDTH + TAG_WIDTH;
        let thought = truncate_to_width(
            &single_line(&record.thought),
            LINE_WIDTH.saturating_sub(thought_indent),
        );
        out.push_str(&format!(
            "{}{}\n",
            " ".repeat(thought_indent),
            thought.italic().dimmed()
        ));
    }
    out
}

/// Full creation timestamp in local time, e.g. `May 01, 2024 10:00`.
pub(super) fn format_timestamp(created_at: DateTime<Utc>) -> String {
    created_at
        .with_timezone(&Local)
        .format("%b %d, %Y %H:%M")
        .to_string()
}

fn format_time_ago(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(created_at);
    let mut formatter = Formatter::new();
    formatter.num_items(1);
    formatter.convert(duration.to_std().unwrap_or_default())
}

fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width.saturating_sub(1));
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}
