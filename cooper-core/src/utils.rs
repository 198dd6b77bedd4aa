//! Shared string helpers for barrel generation.

/// Strip everything from the first `.` onwards (e.g., "Button.test.tsx" -> "Button").
///
/// Directory names without a dot pass through unchanged.
pub fn module_stem(name: &str) -> &str {
    match name.find('.') {
        Some(idx) => &name[..idx],
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_stem_single_extension() {
        assert_eq!(module_stem("Button.tsx"), "Button");
        assert_eq!(module_stem("utils.js"), "utils");
    }

    #[test]
    fn test_module_stem_multiple_dots() {
        assert_eq!(module_stem("Button.test.tsx"), "Button");
        assert_eq!(module_stem("a.b.c"), "a");
    }

    #[test]
    fn test_module_stem_no_extension() {
        assert_eq!(module_stem("widgets"), "widgets");
        assert_eq!(module_stem(""), "");
    }

    #[test]
    fn test_module_stem_leading_dot() {
        assert_eq!(module_stem(".gitignore"), "");
    }
}
