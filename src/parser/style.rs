//! mxGraph style string parser

use crate::types::StyleMap;

/// Parse a style string like `rounded=1;fillColor=#fff;rhombus`.
///
/// Segments split on the first `=`; bare tokens map to `"1"`. Blank
/// segments are dropped.
pub fn parse_style(style: &str) -> StyleMap {
    let mut map = StyleMap::new();
    for part in style.split(';') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        match part.split_once('=') {
            Some((key, value)) => map.insert(key.trim(), value.trim()),
            None => map.insert(part, "1"),
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_value_pairs() {
        let style = parse_style("a=1;b=2");
        assert_eq!(style.len(), 2);
        assert_eq!(style.get("a"), Some("1"));
        assert_eq!(style.get("b"), Some("2"));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_style("").is_empty());
        assert!(parse_style(" ; ;").is_empty());
    }

    #[test]
    fn test_bare_token_is_flag() {
        let style = parse_style("rhombus");
        assert_eq!(style.get("rhombus"), Some("1"));
    }

    #[test]
    fn test_splits_on_first_equals_and_trims() {
        let style = parse_style(" shape = rhombus ;perimeter=a=b;whiteSpace=wrap;html=1;");
        assert_eq!(style.get("shape"), Some("rhombus"));
        assert_eq!(style.get("perimeter"), Some("a=b"));
        assert_eq!(style.get("html"), Some("1"));
        assert_eq!(style.len(), 4);
    }

    #[test]
    fn test_empty_value_kept() {
        let style = parse_style("fillColor=");
        assert_eq!(style.get("fillColor"), Some(""));
    }
}
