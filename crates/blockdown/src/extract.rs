//! Image and link extraction.
//!
//! Both scanners return `(text, url)` pairs in left-to-right order. Text is one
//! or more characters without square brackets; the url runs up to the first
//! closing parenthesis on the same line and may be empty.

use once_cell::sync::Lazy;
use regex::Regex;

static IMAGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\[\]]+)\]\((.*?)\)").expect("image pattern is valid"));

static LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]+)\]\((.*?)\)").expect("link pattern is valid"));

/// Find all `![alt](url)` images in `text`
pub fn extract_images(text: &str) -> Vec<(&str, &str)> {
    IMAGE_PATTERN
        .captures_iter(text)
        .map(|caps| {
            let (_, [alt, url]) = caps.extract();
            (alt, url)
        })
        .collect()
}

/// Find all `[label](url)` links in `text`, skipping images
pub fn extract_links(text: &str) -> Vec<(&str, &str)> {
    let mut links = Vec::new();
    let mut start = 0;

    while let Some(caps) = LINK_PATTERN.captures_at(text, start) {
        let Some(whole) = caps.get(0) else {
            break;
        };

        // `[` directly after `!` opens an image; resume scanning right after it
        if text[..whole.start()].ends_with('!') {
            start = whole.start() + 1;
            continue;
        }

        let (_, [label, url]) = caps.extract();
        links.push((label, url));
        start = whole.end();
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_image() {
        let text = "Here is an image: ![Alt text](https://example.com/image.jpg)";
        assert_eq!(
            extract_images(text),
            vec![("Alt text", "https://example.com/image.jpg")]
        );
    }

    #[test]
    fn test_multiple_images() {
        let text = "
        Here is the first image: ![Image 1](https://example.com/image1.jpg).
        Here is the second image: ![Image 2](https://example.com/image2.jpg).
        ";
        assert_eq!(
            extract_images(text),
            vec![
                ("Image 1", "https://example.com/image1.jpg"),
                ("Image 2", "https://example.com/image2.jpg"),
            ]
        );
    }

    #[test]
    fn test_malformed_image_syntax() {
        let text = "
        Malformed image syntax: ![Alt text](https://example.com/image.jpg.
        Missing alt text: ![](https://example.com/image.jpg).
        ";
        assert!(extract_images(text).is_empty());
    }

    #[test]
    fn test_special_characters_in_images() {
        let text = "
        Special characters in alt text: ![Alt!@#$%^&*()_+](https://example.com/image.jpg).
        Special characters in URL: ![Alt text](https://example.com/im@g3.jpg).
        ";
        assert_eq!(
            extract_images(text),
            vec![
                ("Alt!@#$%^&*()_+", "https://example.com/image.jpg"),
                ("Alt text", "https://example.com/im@g3.jpg"),
            ]
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(extract_images("").is_empty());
        assert!(extract_links("").is_empty());
    }

    #[test]
    fn test_single_link() {
        let text = "Here is a link: [Example](https://example.com).";
        assert_eq!(extract_links(text), vec![("Example", "https://example.com")]);
    }

    #[test]
    fn test_multiple_links() {
        let text = "
        Here is the first link: [Google](https://google.com).
        Here is another: [GitHub](https://github.com).
        ";
        assert_eq!(
            extract_links(text),
            vec![
                ("Google", "https://google.com"),
                ("GitHub", "https://github.com"),
            ]
        );
    }

    #[test]
    fn test_images_are_not_links() {
        assert!(extract_links("![a](u)").is_empty());
        assert_eq!(extract_images("![a](u)"), vec![("a", "u")]);

        let text = "
        This is an image: ![Alt text](https://example.com/image.jpg).
        This is a link: [Link text](https://example.com).
        ";
        assert_eq!(extract_links(text), vec![("Link text", "https://example.com")]);
    }

    #[test]
    fn test_link_inside_image_url() {
        // The link starts after `(`, not after `!`
        assert_eq!(extract_links("![x]([z](w))"), vec![("z", "w")]);
    }

    #[test]
    fn test_malformed_link_syntax() {
        let text = "
        Malformed link: [Example](https://example.com.
        Missing text: [](https://example.com).
        ";
        assert!(extract_links(text).is_empty());
    }

    #[test]
    fn test_special_characters_in_links() {
        let text = "Special characters: \
                    [Check this! @#$%^&*()](https://example.com/special?param=value&other=1).";
        assert_eq!(
            extract_links(text),
            vec![(
                "Check this! @#$%^&*()",
                "https://example.com/special?param=value&other=1"
            )]
        );
    }

    #[test]
    fn test_link_without_url() {
        assert_eq!(extract_links("Missing URL: [Example]()."), vec![("Example", "")]);
    }

    #[test]
    fn test_url_is_non_greedy() {
        assert_eq!(
            extract_links("[a](one) and [b](two)"),
            vec![("a", "one"), ("b", "two")]
        );
    }
}
