//! Upsert and removal of a managed block within file content

use crate::block::{BlockMarkers, ManagedBlock};
use crate::error::Result;

/// Replace an existing managed block in place, or append a new one.
///
/// Replacement does not consume the newlines around the old block, so a
/// leading newline before the block survives unchanged. When no block
/// exists the new one is appended: an empty (after trailing-whitespace
/// trim) source becomes just the block, otherwise the block follows the
/// trimmed content after one blank line. Either way the result ends with
/// a single newline and contains exactly one marker-pair occurrence.
pub fn upsert(source: &str, block: &ManagedBlock) -> Result<String> {
    let rendered = block.serialize();

    if let Some(range) = block.markers().find(source)? {
        let mut result = String::with_capacity(source.len() + rendered.len());
        result.push_str(&source[..range.start]);
        result.push_str(&rendered);
        result.push_str(&source[range.end..]);
        return Ok(result);
    }

    let base = source.trim_end();
    if base.is_empty() {
        Ok(format!("{rendered}\n"))
    } else {
        Ok(format!("{base}\n\n{rendered}\n"))
    }
}

/// Remove the managed block, markers included.
///
/// Returns `Ok(None)` when no block is present (caller treats this as a
/// no-op). Otherwise returns the remaining content with surrounding
/// whitespace trimmed; when the block sat between two retained regions
/// they are re-joined with a single newline. An empty string means
/// nothing besides the block remained.
pub fn remove(source: &str, markers: &BlockMarkers) -> Result<Option<String>> {
    let Some(range) = markers.find(source)? else {
        return Ok(None);
    };

    let before = source[..range.start].trim_end();
    let after = source[range.end..].trim_start();

    let remaining = if before.is_empty() {
        after.trim_end().to_string()
    } else if after.is_empty() {
        before.to_string()
    } else {
        format!("{before}\n{}", after.trim_end())
    };

    Ok(Some(remaining))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const START: &str = "/* Start */";
    const END: &str = "/* End */";

    fn markers() -> BlockMarkers {
        BlockMarkers::new(START, END)
    }

    fn block(body: &str) -> ManagedBlock {
        ManagedBlock::new(markers(), body)
    }

    #[test]
    fn upsert_into_empty_source_is_just_the_block() {
        let result = upsert("", &block("body")).unwrap();
        assert_eq!(result, "/* Start */\nbody\n/* End */\n");
    }

    #[test]
    fn upsert_into_whitespace_only_source_is_just_the_block() {
        let result = upsert("  \n\n", &block("body")).unwrap();
        assert_eq!(result, "/* Start */\nbody\n/* End */\n");
    }

    #[test]
    fn upsert_appends_after_blank_line() {
        let result = upsert("window { color: red; }\n", &block("body")).unwrap();
        assert_eq!(
            result,
            "window { color: red; }\n\n/* Start */\nbody\n/* End */\n"
        );
    }

    #[test]
    fn upsert_replaces_existing_block_in_place() {
        let first = upsert("user css\n", &block("old")).unwrap();
        let second = upsert(&first, &block("new")).unwrap();
        assert_eq!(second, "user css\n\n/* Start */\nnew\n/* End */\n");
    }

    #[test]
    fn upsert_preserves_leading_newline_before_block() {
        let source = "a\n\n/* Start */\nold\n/* End */\ntrailing\n";
        let result = upsert(source, &block("new")).unwrap();
        assert_eq!(result, "a\n\n/* Start */\nnew\n/* End */\ntrailing\n");
    }

    #[test]
    fn upsert_is_idempotent() {
        let once = upsert("body { margin: 0; }", &block("b")).unwrap();
        let twice = upsert(&once, &block("b")).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn upsert_fails_on_unterminated_block() {
        let source = "/* Start */\ndangling";
        assert!(upsert(source, &block("b")).is_err());
    }

    #[test]
    fn remove_returns_none_when_block_absent() {
        assert_eq!(remove("plain content", &markers()).unwrap(), None);
    }

    #[test]
    fn remove_of_block_only_source_leaves_nothing() {
        let source = upsert("", &block("b")).unwrap();
        assert_eq!(remove(&source, &markers()).unwrap(), Some(String::new()));
    }

    #[test]
    fn remove_keeps_unrelated_content_trimmed() {
        let source = upsert("user css\n", &block("b")).unwrap();
        let remaining = remove(&source, &markers()).unwrap().unwrap();
        assert_eq!(remaining, "user css");
    }

    #[test]
    fn remove_joins_surrounding_regions_with_newline() {
        let source = "top\n\n/* Start */\nb\n/* End */\n\nbottom\n";
        let remaining = remove(source, &markers()).unwrap().unwrap();
        assert_eq!(remaining, "top\nbottom");
    }

    #[test]
    fn upsert_then_remove_round_trips_modulo_edge_trim() {
        let original = "window { color: red; }\n.label { margin: 2px; }\n";
        let upserted = upsert(original, &block("b")).unwrap();
        let remaining = remove(&upserted, &markers()).unwrap().unwrap();
        assert_eq!(remaining, original.trim_end());
    }
}
