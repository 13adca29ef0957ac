//! Named terminal styles.
//!
//! Rendering code refers to what a piece of text *is* (a header, a bought row, the
//! completion banner) and this module decides how that looks. `console` drops the
//! escape codes on its own when colors are disabled.

use console::Style;
use once_cell::sync::Lazy;

pub static HEADER: Lazy<Style> = Lazy::new(|| Style::new().bold().underlined());
pub static ROW_INDEX: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static BOUGHT: Lazy<Style> = Lazy::new(|| Style::new().dim().strikethrough());
pub static SHORT_ID: Lazy<Style> = Lazy::new(|| Style::new().color256(245));
pub static TIME: Lazy<Style> = Lazy::new(|| Style::new().color256(245).italic());
pub static BANNER: Lazy<Style> = Lazy::new(|| Style::new().green().bold());
pub static FILTERS: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static LABEL: Lazy<Style> = Lazy::new(|| Style::new().bold());
