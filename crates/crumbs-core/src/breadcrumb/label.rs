//! Fallback labels for routes without a title.

/// Derives a label from a raw path segment: `-` and `_` become spaces and
/// the first character is uppercased (`my-page_name` → `My page name`).
pub fn fallback_label(segment: &str) -> String {
    let spaced = segment.replace(['-', '_'], " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyphens_and_underscores() {
        assert_eq!(fallback_label("my-page_name"), "My page name");
    }

    #[test]
    fn only_first_char_changes_case() {
        assert_eq!(fallback_label("aBOUT-us"), "ABOUT us");
        assert_eq!(fallback_label("2024"), "2024");
    }

    #[test]
    fn non_ascii_first_char() {
        assert_eq!(fallback_label("éclair"), "Éclair");
    }

    #[test]
    fn empty_segment() {
        assert_eq!(fallback_label(""), "");
    }
}
