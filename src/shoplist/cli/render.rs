//! # Rendering
//!
//! Turns `CmdResult`s and state snapshots into terminal text. Every function returns a
//! `String`; the session decides where it goes.
//!
//! Layout (widths, truncation, padding) is computed on plain text with `unicode-width`, and
//! styles are applied to the already padded cells, so escape codes never disturb alignment.

use super::styles::{BANNER, BOUGHT, FILTERS, HEADER, LABEL, ROW_INDEX, SHORT_ID, TIME};
use chrono::{DateTime, Utc};
use colored::Colorize;
use shoplist::api::{CmdMessage, MessageLevel};
use shoplist::error::Result;
use shoplist::filter::{FilterCriteria, StatusFilter};
use shoplist::index::DisplayProduct;
use shoplist::model::Draft;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const COMPLETED_BANNER: &str = "Shopping Completed!";
pub const EMPTY_LIST: &str = "No products found.";
const MAX_CELL_WIDTH: usize = 32;
const BOUGHT_MARKER: &str = "[x]";
const OPEN_MARKER: &str = "[ ]";

/// The full view: table (or empty notice), active filters and the completion banner.
pub fn render_view(rows: &[DisplayProduct], criteria: &FilterCriteria, all_bought: bool) -> String {
    let mut out = if rows.is_empty() {
        format!("{}\n", EMPTY_LIST)
    } else {
        render_table(rows)
    };

    if let Some(summary) = filter_summary(criteria) {
        out.push_str(&format!("{}\n", FILTERS.apply_to(summary)));
    }

    if all_bought {
        out.push_str(&format!("{}\n", BANNER.apply_to(COMPLETED_BANNER)));
    }

    out
}

pub fn render_table(rows: &[DisplayProduct]) -> String {
    let header = ["", "#", "ID", "Name", "Shop", "Category", "Added"];

    let lines: Vec<[String; 7]> = rows
        .iter()
        .map(|dp| {
            let p = &dp.product;
            [
                if p.is_bought { BOUGHT_MARKER } else { OPEN_MARKER }.to_string(),
                format!("{}.", dp.index),
                p.id.short(),
                truncate_to_width(&p.name, MAX_CELL_WIDTH),
                truncate_to_width(&p.shop, MAX_CELL_WIDTH),
                truncate_to_width(&p.category, MAX_CELL_WIDTH),
                format_time_ago(p.added_at),
            ]
        })
        .collect();

    let mut widths = header.map(|h| h.width());
    for line in &lines {
        for (w, cell) in widths.iter_mut().zip(line.iter()) {
            *w = (*w).max(cell.width());
        }
    }

    let mut out = String::new();

    let header_cells: Vec<String> = header
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| HEADER.apply_to(pad_right(h, *w)).to_string())
        .collect();
    out.push_str(header_cells.join("  ").trim_end());
    out.push('\n');

    for (dp, line) in rows.iter().zip(lines.iter()) {
        let is_bought = dp.product.is_bought;
        let cells: Vec<String> = line
            .iter()
            .zip(widths.iter())
            .enumerate()
            .map(|(col, (cell, w))| {
                // Row numbers are right-aligned so the dots line up
                let padded = if col == 1 {
                    pad_left(cell, *w)
                } else {
                    pad_right(cell, *w)
                };
                match col {
                    0 => padded,
                    1 => ROW_INDEX.apply_to(padded).to_string(),
                    2 => SHORT_ID.apply_to(padded).to_string(),
                    6 => TIME.apply_to(padded).to_string(),
                    _ if is_bought => BOUGHT.apply_to(padded).to_string(),
                    _ => padded,
                }
            })
            .collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }

    out
}

/// One line describing every filter that differs from its default.
pub fn filter_summary(criteria: &FilterCriteria) -> Option<String> {
    if criteria.is_default() {
        return None;
    }

    let mut parts = Vec::new();
    if !criteria.name.is_empty() {
        parts.push(format!("name contains \"{}\"", criteria.name));
    }
    if !criteria.shop.is_any() {
        parts.push(format!("shop = {}", criteria.shop));
    }
    if !criteria.category.is_any() {
        parts.push(format!("category = {}", criteria.category));
    }
    if criteria.status != StatusFilter::All {
        parts.push(format!("status = {}", criteria.status));
    }

    Some(format!("Filters: {}", parts.join(", ")))
}

pub fn render_draft(draft: &Draft) -> String {
    let show = |v: Option<&str>| v.filter(|s| !s.is_empty()).unwrap_or("-").to_string();
    format!(
        "{} name: {}  shop: {}  category: {}\n",
        LABEL.apply_to("New product"),
        show(Some(draft.name.as_str())),
        show(draft.shop.as_deref()),
        show(draft.category.as_deref()),
    )
}

pub fn render_catalog(title: &str, labels: &[String]) -> String {
    let mut out = format!("{}\n", LABEL.apply_to(title));
    for label in labels {
        out.push_str(&format!("  {}\n", label));
    }
    out
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub fn render_json(rows: &[DisplayProduct]) -> Result<String> {
    let products: Vec<_> = rows.iter().map(|dp| &dp.product).collect();
    Ok(format!("{}\n", serde_json::to_string_pretty(&products)?))
}

fn pad_right(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn pad_left(s: &str, width: usize) -> String {
    format!("{}{}", " ".repeat(width.saturating_sub(s.width())), s)
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

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}
