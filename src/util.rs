//! Pure string helpers for caption and image path normalization.

/// Strip a leading `Figure <number>.` prefix from an image caption.
///
/// Asciidoctor numbers figure titles when rendering (`Figure 1. Welcome
/// aboard!`); the stored caption keeps only the human text. The prefix must
/// match exactly: case-sensitive `Figure`, one space, one or more ASCII
/// digits, a literal dot. Whitespace after the dot is consumed. Anything
/// else is returned unchanged.
pub(crate) fn strip_figure_prefix(caption: &str) -> &str {
    let Some(rest) = caption.strip_prefix("Figure ") else {
        return caption;
    };
    let after_digits = rest.trim_start_matches(|c: char| c.is_ascii_digit());
    if after_digits.len() == rest.len() {
        // "Figure " not followed by a number
        return caption;
    }
    match after_digits.strip_prefix('.') {
        Some(text) => text.trim_start(),
        None => caption,
    }
}

/// Final segment of an image source path (`ch01/images/a.png` -> `a.png`).
pub(crate) fn image_basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_figure_prefix() {
        assert_eq!(strip_figure_prefix("Figure 1. Welcome aboard!"), "Welcome aboard!");
        assert_eq!(strip_figure_prefix("Figure 12. Two digits"), "Two digits");
        assert_eq!(strip_figure_prefix("Figure 3.No space"), "No space");
    }

    #[test]
    fn test_strip_figure_prefix_is_case_sensitive() {
        assert_eq!(strip_figure_prefix("figure 1. lowercase"), "figure 1. lowercase");
        assert_eq!(strip_figure_prefix("FIGURE 1. shouty"), "FIGURE 1. shouty");
    }

    #[test]
    fn test_strip_figure_prefix_requires_number_and_dot() {
        assert_eq!(strip_figure_prefix("Figure one. spelled out"), "Figure one. spelled out");
        assert_eq!(strip_figure_prefix("Figure 1 no dot"), "Figure 1 no dot");
        assert_eq!(strip_figure_prefix("Figure"), "Figure");
        assert_eq!(strip_figure_prefix(""), "");
    }

    #[test]
    fn test_strip_figure_prefix_only_at_start() {
        assert_eq!(strip_figure_prefix("See Figure 1. below"), "See Figure 1. below");
    }

    #[test]
    fn test_image_basename() {
        assert_eq!(image_basename("ch01/images/welcome_aboard.png"), "welcome_aboard.png");
        assert_eq!(image_basename("cover.jpg"), "cover.jpg");
        assert_eq!(image_basename("a/b/c/d.gif"), "d.gif");
        assert_eq!(image_basename("trailing/"), "");
    }
}
