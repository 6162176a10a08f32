//! Label cleanup and `<text>` emission.

use super::renderer::{escape_xml, fmt_num};
use super::styles::{Defaults, LineSpacing, FONT_FAMILY};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Anything tag-shaped goes, including stray `a<b>c` runs.
    static ref RE_MARKUP_TAG: Regex = Regex::new(r"<[^>]+>").unwrap();
}

/// Remove markup tags, decode HTML entities and trim.
pub fn clean_label(raw: &str) -> String {
    let stripped = RE_MARKUP_TAG.replace_all(raw, "");
    htmlize::unescape(&*stripped).trim().to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

impl FontWeight {
    fn as_str(&self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

/// Render a label centered on `(x, y)`.
///
/// Returns an empty string when nothing is left after cleanup. Multi-line
/// labels become one `<text>` with a `<tspan>` per line.
pub fn render_text(x: f64, y: f64, raw: &str, font_size: f64, weight: FontWeight) -> String {
    let clean = clean_label(raw);
    if clean.is_empty() {
        return String::new();
    }

    let lines: Vec<&str> = clean.split('\n').collect();
    if lines.len() == 1 {
        return format!(
            r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="central" font-family="{}" font-size="{}" font-weight="{}" fill="{}">{}</text>"#,
            fmt_num(x),
            fmt_num(y),
            FONT_FAMILY,
            fmt_num(font_size),
            weight.as_str(),
            Defaults::TEXT_FILL,
            escape_xml(lines[0])
        );
    }

    let mut parts = vec![format!(
        r#"<text x="{}" text-anchor="middle" font-family="{}" font-size="{}" font-weight="{}" fill="{}">"#,
        fmt_num(x),
        FONT_FAMILY,
        fmt_num(font_size),
        weight.as_str(),
        Defaults::TEXT_FILL
    )];
    let start_y = y - (lines.len() - 1) as f64 * font_size * LineSpacing::CENTER_SHIFT;
    for (i, line) in lines.iter().enumerate() {
        let line_y = start_y + i as f64 * font_size * LineSpacing::ADVANCE;
        parts.push(format!(
            r#"<tspan x="{}" y="{}" dominant-baseline="central">{}</tspan>"#,
            fmt_num(x),
            fmt_num(line_y),
            escape_xml(line)
        ));
    }
    parts.push("</text>".to_string());
    parts.join("\n")
}
