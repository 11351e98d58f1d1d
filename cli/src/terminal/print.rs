//! Layout helpers for the stderr summary. Every line goes out as a raw event
//! on [`PRINT_TARGET`] so `-q` and `RUST_LOG` silence it like any other log.

use crate::terminal::{colors, logging::PRINT_TARGET};
use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

/// Column budget of rules and centred lines.
pub const TOTAL_WIDTH: usize = 64;

/// A labelled value in a summary tree.
pub type Detail = (String, ColoredString);

pub fn line(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn blank() {
    line("");
}

pub fn banner(no_banner: bool, quiet: u8) {
    if no_banner || quiet > 0 {
        return;
    }

    let title: String = format!("⟦ CONTRACTR v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let (left, right) = side_padding(title.width());
    line(&format!(
        "{}{}{}",
        "═".repeat(left).color(colors::SEPARATOR),
        title.bright_green().bold(),
        "═".repeat(right).color(colors::SEPARATOR)
    ));
}

/// A thin rule with `title` set in the middle, e.g. `───⟦ PARTIES ⟧───`.
pub fn section_rule(title: &str, quiet: u8) {
    if quiet > 0 {
        return;
    }

    let label: String = format!("⟦ {} ⟧", title.to_uppercase());
    let (left, right) = side_padding(label.width());
    line(&format!(
        "{}{}{}",
        "─".repeat(left).color(colors::SEPARATOR),
        label.color(colors::PRIMARY),
        "─".repeat(right).color(colors::SEPARATOR)
    ));
}

pub fn closing_rule() {
    line(&"═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR).to_string());
}

pub fn status(msg: &str) {
    line(&format!(
        "{} {}",
        ">".color(colors::SEPARATOR),
        msg.color(colors::TEXT_DEFAULT)
    ));
}

/// `key....: value` rows, keys padded to the widest one in `rows`.
pub fn fields(rows: &[(&str, String)]) {
    let width: usize = key_width(rows.iter().map(|(key, _)| *key));

    for (key, value) in rows {
        status(&format!(
            "{}{} {}",
            key.color(colors::PRIMARY),
            leader(key, width).color(colors::SEPARATOR),
            value.color(colors::TEXT_DEFAULT)
        ));
    }
}

/// Numbered entry such as a contract party or a section: `[0] name`.
pub fn entry(idx: usize, name: &str) {
    line(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    ));
}

/// One level of `├─ key...: value` branches under the last [`entry`].
pub fn branches(details: &[Detail]) {
    let width: usize = key_width(details.iter().map(|(key, _)| key.as_str()));

    for (i, (key, value)) in details.iter().enumerate() {
        let branch: &str = if i + 1 == details.len() { "└─" } else { "├─" };
        line(&format!(
            " {} {}{} {}",
            branch.color(colors::SEPARATOR),
            key.color(colors::TEXT_DEFAULT),
            leader(key, width).color(colors::SEPARATOR),
            value
        ));
    }
}

/// Centres an already coloured line within [`TOTAL_WIDTH`].
pub fn centered(msg: &str) {
    let (left, _) = side_padding(console::measure_text_width(msg));
    line(&format!("{}{}", " ".repeat(left), msg));
}

fn key_width<'a>(keys: impl Iterator<Item = &'a str>) -> usize {
    keys.map(UnicodeWidthStr::width).max().unwrap_or(0)
}

/// Dots that carry `key` out to `width`, then the colon.
fn leader(key: &str, width: usize) -> String {
    format!("{}:", ".".repeat((width + 1).saturating_sub(key.width())))
}

/// Left and right fill around content `width` columns wide.
fn side_padding(width: usize) -> (usize, usize) {
    let fill: usize = TOTAL_WIDTH.saturating_sub(width);
    (fill / 2, fill - fill / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaders_line_up_colons() {
        let width = key_width(["Down payment", "Total"].into_iter());
        assert_eq!(format!("Down payment{}", leader("Down payment", width)), "Down payment.:");
        assert_eq!(format!("Total{}", leader("Total", width)), "Total........:");
    }

    #[test]
    fn oversized_key_still_gets_a_colon() {
        assert_eq!(leader("Governing law", 3), ":");
    }

    #[test]
    fn padding_fills_total_width() {
        assert_eq!(side_padding(10), (27, 27));
        assert_eq!(side_padding(11), (26, 27));
        assert_eq!(side_padding(TOTAL_WIDTH + 5), (0, 0));
    }

    #[test]
    fn keys_measure_display_columns() {
        assert_eq!(key_width(["Société", "Tel"].into_iter()), 7);
        assert_eq!(key_width(std::iter::empty()), 0);
    }
}
