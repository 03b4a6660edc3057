//! Output formatting for list screens.

use owo_colors::{OwoColorize, Stream};
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::controller::DisplayMode;
use crate::screen::{Notice, NoticeLevel, ScreenViewModel};

/// Render rows as a bordered table.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut builder = Builder::default();
    builder.push_record(headers.iter().copied());
    for row in rows {
        builder.push_record(row.iter().cloned());
    }
    let mut table = builder.build();
    table.with(Style::sharp());
    table.to_string()
}

/// One-line paginator summary, e.g. `page 1/3 · 25 records (server-paged)`.
pub fn format_paginator(vm: &ScreenViewModel) -> String {
    let mode = match vm.mode {
        DisplayMode::ServerPaged => "server-paged",
        DisplayMode::ClientFiltered => "filtered",
    };
    let records = if vm.total == 1 { "record" } else { "records" };
    format!(
        "page {}/{} · {} {} ({})",
        vm.page_number, vm.page_count, vm.total, records, mode
    )
}

/// Format a notice with a colored severity tag.
pub fn format_notice(notice: &Notice) -> String {
    let tag = match notice.level {
        NoticeLevel::Info => "info"
            .if_supports_color(Stream::Stderr, |t| t.cyan())
            .to_string(),
        NoticeLevel::Warning => "warning"
            .if_supports_color(Stream::Stderr, |t| t.yellow())
            .to_string(),
        NoticeLevel::Error => "error"
            .if_supports_color(Stream::Stderr, |t| t.red())
            .to_string(),
        NoticeLevel::Success => "ok"
            .if_supports_color(Stream::Stderr, |t| t.green())
            .to_string(),
    };
    format!("{}: {}", tag, notice.message)
}

/// Placeholder line for an empty result set.
pub fn empty_placeholder(entity: &str) -> String {
    format!(
        "{}",
        format!("No {} to show.", entity).if_supports_color(Stream::Stdout, |t| t.dimmed())
    )
}
