/*
 * emoji.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Read-only registry of emoji shortcodes known to the exporter.

/// A registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownEmoji {
    pub shortcode: &'static str,
    pub name: &'static str,
    pub url: &'static str,
}

static KNOWN_EMOJI: &[KnownEmoji] = &[
    KnownEmoji {
        shortcode: ":smile:",
        name: "Smiling Face",
        url: "https://example.com/emoji/smile.png",
    },
    KnownEmoji {
        shortcode: ":heart:",
        name: "Heart",
        url: "https://example.com/emoji/heart.png",
    },
    KnownEmoji {
        shortcode: ":star:",
        name: "Star",
        url: "https://example.com/emoji/star.png",
    },
];

/// Look up a shortcode such as `:smile:`.
pub fn lookup_emoji(shortcode: &str) -> Option<&'static KnownEmoji> {
    KNOWN_EMOJI.iter().find(|e| e.shortcode == shortcode)
}

/// All registered emoji, in registry order.
pub fn all_emoji() -> &'static [KnownEmoji] {
    KNOWN_EMOJI
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known() {
        let star = lookup_emoji(":star:").unwrap();
        assert_eq!(star.name, "Star");
        assert!(star.url.ends_with("star.png"));
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(lookup_emoji(":rocket:").is_none());
        assert!(lookup_emoji("smile").is_none());
    }

    #[test]
    fn test_registry_has_unique_shortcodes() {
        let all = all_emoji();
        for (i, e) in all.iter().enumerate() {
            assert!(all[i + 1..].iter().all(|o| o.shortcode != e.shortcode));
        }
    }
}
