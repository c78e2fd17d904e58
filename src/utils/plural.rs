//! Pluralization utilities.

/// Return "s" suffix for plural counts
///
/// # Examples
///
/// - `plural_s(0)` -> `"s"` (0 widgets)
/// - `plural_s(1)` -> `""` (1 widget)
/// - `plural_s(5)` -> `"s"` (5 widgets)
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// # Examples
///
/// - `plural_count(0, "widget")` -> `"0 widgets"`
/// - `plural_count(1, "widget")` -> `"1 widget"`
/// - `plural_count(5, "widget")` -> `"5 widgets"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "widget"), "0 widgets");
        assert_eq!(plural_count(1, "widget"), "1 widget");
        assert_eq!(plural_count(5, "type"), "5 types");
    }
}
