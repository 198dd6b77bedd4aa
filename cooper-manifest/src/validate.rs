//! Span-finding helpers for validation diagnostics.

use miette::SourceSpan;

/// Best-effort span for the first occurrence of `needle` in the source.
///
/// Used to point validation errors at the offending key or value; a miss
/// simply produces a span-less diagnostic.
pub(crate) fn find_span(src: &str, needle: &str) -> Option<SourceSpan> {
    src.find(needle).map(|start| (start, needle.len()).into())
}

/// Span for a quoted string value (e.g. a target path) in the source.
pub(crate) fn find_quoted_span(src: &str, value: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{value}\"");
    src.find(&quoted).map(|start| (start, quoted.len()).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_span() {
        let src = "extension = \".ts\"";
        let span = find_span(src, "extension").unwrap();
        assert_eq!(span.offset(), 0);
        assert_eq!(span.len(), "extension".len());
    }

    #[test]
    fn test_find_quoted_span() {
        let src = "targets = [\"components\"]";
        let span = find_quoted_span(src, "components").unwrap();
        assert_eq!(span.offset(), 11);
        assert_eq!(span.len(), "\"components\"".len());
    }

    #[test]
    fn test_find_span_missing() {
        assert!(find_span("foo = 1", "bar").is_none());
    }
}
