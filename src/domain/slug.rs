//! URL slug derivation.

use once_cell::sync::Lazy;
use regex::Regex;

static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\s]").expect("slug character class is valid"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace class is valid"));

/// Derive a lowercase, URL-safe slug from a human-readable name.
///
/// Deterministic: the same name always yields the same slug. May return an
/// empty string when the name has no transliterable alphanumerics.
pub fn slugify(name: &str) -> String {
    let mut expanded = String::with_capacity(name.len());
    for c in name.chars() {
        match transliterate(c) {
            Some(s) => expanded.push_str(s),
            None => match c {
                '&' => expanded.push_str(" and "),
                '-' | '_' => expanded.push(' '),
                _ => expanded.extend(c.to_lowercase()),
            },
        }
    }

    let stripped = DISALLOWED.replace_all(&expanded, "");
    WHITESPACE.replace_all(stripped.trim(), "-").into_owned()
}

fn transliterate(c: char) -> Option<&'static str> {
    let s = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => "a",
        'æ' | 'Æ' => "ae",
        'ç' | 'Ç' => "c",
        'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' => "e",
        'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => "i",
        'ñ' | 'Ñ' => "n",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => "o",
        'ù' | 'ú' | 'û' | 'ü' | 'Ù' | 'Ú' | 'Û' | 'Ü' => "u",
        'ý' | 'ÿ' | 'Ý' => "y",
        'ß' => "ss",
        _ => return None,
    };
    Some(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        assert_eq!(slugify("Summer Collection"), "summer-collection");
    }

    #[test]
    fn test_punctuation_is_dropped() {
        assert_eq!(slugify("Women's Wear!"), "womens-wear");
    }

    #[test]
    fn test_dashes_and_ampersand() {
        assert_eq!(slugify("T-Shirts & Tops"), "t-shirts-and-tops");
        assert_eq!(slugify("kurta__sets"), "kurta-sets");
    }

    #[test]
    fn test_whitespace_is_collapsed_and_trimmed() {
        assert_eq!(slugify("   Bridal    Lehengas  "), "bridal-lehengas");
    }

    #[test]
    fn test_accents_are_transliterated() {
        assert_eq!(slugify("Café Crème"), "cafe-creme");
    }

    #[test]
    fn test_deterministic() {
        let name = "Festive Sarees 2024";
        assert_eq!(slugify(name), slugify(name));
        assert_eq!(slugify(name), "festive-sarees-2024");
    }

    #[test]
    fn test_output_is_url_safe() {
        let slug = slugify("«Ethnic» / Fusion — Wear?");
        assert!(slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        assert!(!slug.starts_with('-') && !slug.ends_with('-'));
    }

    #[test]
    fn test_nothing_left() {
        assert_eq!(slugify("!!!"), "");
    }
}
