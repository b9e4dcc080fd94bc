// Slug derivation for tag titles

use unicode_normalization::UnicodeNormalization;

/// Options for [`derive_slug`].
///
/// Observed revisions of the admin panel disagree on whether slugs keep
/// leading/trailing hyphens, so the behavior is configurable instead of
/// hardcoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugOptions {
    /// Trim hyphens produced at the edges by surrounding whitespace or
    /// punctuation. Defaults to `true` (the stricter variant).
    pub trim_edge_hyphens: bool,
}

impl Default for SlugOptions {
    fn default() -> Self {
        SlugOptions {
            trim_edge_hyphens: true,
        }
    }
}

/// Derive a URL-safe slug from a free-text title.
///
/// Pure and total: every input maps to some slug, including the empty
/// string. Pipeline: NFD decomposition, lowercasing, stripping of
/// punctuation and detached combining marks, and collapsing every run of
/// whitespace, underscores, or hyphens into a single hyphen.
///
/// `"Programação Avançada!"` becomes `"programacao-avancada"`.
pub fn derive_slug(input: &str, options: &SlugOptions) -> String {
    // NFD splits accented letters into base char + combining mark, so the
    // mark can be dropped below while the base letter survives.
    let decomposed: String = input.nfd().flat_map(char::to_lowercase).collect();

    let mut slug = String::with_capacity(decomposed.len());
    let mut pending_separator = false;

    for c in decomposed.chars() {
        if c.is_whitespace() || c == '_' || c == '-' {
            // Separator runs collapse into one hyphen, emitted lazily so
            // intervening punctuation does not break the run.
            pending_separator = true;
        } else if c.is_ascii_alphanumeric() {
            if pending_separator {
                slug.push('-');
                pending_separator = false;
            }
            slug.push(c);
        }
        // Anything else (punctuation, combining marks, non-ASCII symbols)
        // is dropped.
    }

    if pending_separator {
        slug.push('-');
    }

    if options.trim_edge_hyphens {
        slug.trim_matches('-').to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slug(input: &str) -> String {
        derive_slug(input, &SlugOptions::default())
    }

    #[test]
    fn test_basic_title() {
        assert_eq!(slug("Hello, World!"), "hello-world");
    }

    #[test]
    fn test_diacritics_are_stripped() {
        assert_eq!(slug("Programação"), "programacao");
        assert_eq!(slug("Programação Avançada!"), "programacao-avancada");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(slug(""), "");
    }

    #[test]
    fn test_punctuation_only_input() {
        assert_eq!(slug("!?!..."), "");
    }

    #[test]
    fn test_separator_runs_collapse_to_one_hyphen() {
        assert_eq!(slug("  multiple   spaces  "), "multiple-spaces");
        assert_eq!(slug("snake_case__title"), "snake-case-title");
        assert_eq!(slug("already-hyphenated--title"), "already-hyphenated-title");
        assert_eq!(slug("mixed _- separators"), "mixed-separators");
    }

    #[test]
    fn test_untrimmed_variant_keeps_edge_hyphens() {
        let options = SlugOptions {
            trim_edge_hyphens: false,
        };
        assert_eq!(
            derive_slug("  multiple   spaces  ", &options),
            "-multiple-spaces-"
        );
        assert_eq!(derive_slug("plain", &options), "plain");
    }

    #[test]
    fn test_digits_and_underscores_in_words_survive() {
        assert_eq!(slug("Top 10 Tips"), "top-10-tips");
    }

    #[test]
    fn test_idempotent_on_derived_slugs() {
        for input in ["Hello, World!", "Programação Avançada!", "  multiple   spaces  "] {
            let once = slug(input);
            assert_eq!(slug(&once), once);
        }

        let options = SlugOptions {
            trim_edge_hyphens: false,
        };
        let once = derive_slug("  multiple   spaces  ", &options);
        assert_eq!(derive_slug(&once, &options), once);
    }
}
