use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"));

/// Known brand spellings, keyed by [`slug`].
const BRAND_NORMALIZATION: &[(&str, &str)] = &[
    ("apple", "Apple"),
    ("asus", "Asus"),
    ("alurin", "Alurin"),
    ("dell", "Dell"),
    ("hp", "HP"),
    ("hewlett packard", "HP"),
    ("lenovo", "Lenovo"),
    ("msi", "MSI"),
    ("oneplus", "OnePlus"),
    ("realme", "Realme"),
    ("samsung", "Samsung"),
    ("samsung electronics", "Samsung"),
    ("xiaomi", "Xiaomi"),
];

/// Lowercases and folds every run of non-alphanumerics into a single space.
pub fn slug(value: &str) -> String {
    let lower = value.to_lowercase();
    NON_ALNUM.replace_all(&lower, " ").trim().to_string()
}

/// Collapses whitespace and drops non-ASCII characters.
pub fn clean_text(value: &str) -> Option<String> {
    let collapsed = WHITESPACE.replace_all(value, " ");
    let ascii: String = collapsed.chars().filter(char::is_ascii).collect();
    let cleaned = ascii.trim();
    (!cleaned.is_empty()).then(|| cleaned.to_string())
}

/// Trims surrounding whitespace only.
pub fn trimmed(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Maps known brand spellings to their canonical form; unknown brands are
/// returned trimmed.
pub fn normalize_brand(brand: &str) -> Option<String> {
    let key = slug(brand);
    BRAND_NORMALIZATION
        .iter()
        .find(|(spelling, _)| *spelling == key)
        .map(|(_, canonical)| canonical.to_string())
        .or_else(|| trimmed(brand))
}

/// Brand taken from the first word of a product name.
pub fn extract_brand_from_name(name: &str) -> Option<String> {
    name.split_whitespace().next().and_then(normalize_brand)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug() {
        assert_eq!(slug("  Hewlett-Packard "), "hewlett packard");
        assert_eq!(slug("ASUS™"), "asus");
        assert_eq!(slug("--"), "");
    }

    #[test]
    fn test_clean_text_collapses_whitespace() {
        assert_eq!(
            clean_text("  Intel Core\t i5 \n 1135G7 ").as_deref(),
            Some("Intel Core i5 1135G7")
        );
    }

    #[test]
    fn test_clean_text_strips_non_ascii() {
        assert_eq!(clean_text("Galaxy Tab™ S9").as_deref(), Some("Galaxy Tab S9"));
        assert_eq!(clean_text("Café\u{00a0}Book").as_deref(), Some("Caf Book"));
        assert_eq!(clean_text("™ ®"), None);
        assert_eq!(clean_text("™ Foo").as_deref(), Some("Foo"));
        assert_eq!(clean_text("   "), None);
    }

    #[test]
    fn test_normalize_brand_known_spellings() {
        assert_eq!(normalize_brand("SAMSUNG ELECTRONICS").as_deref(), Some("Samsung"));
        assert_eq!(normalize_brand("hewlett-packard").as_deref(), Some("HP"));
        assert_eq!(normalize_brand(" msi ").as_deref(), Some("MSI"));
        assert_eq!(normalize_brand("OnePlus").as_deref(), Some("OnePlus"));
    }

    #[test]
    fn test_normalize_brand_unknown_passes_through() {
        assert_eq!(normalize_brand("Noname").as_deref(), Some("Noname"));
        assert_eq!(normalize_brand("  Acer  ").as_deref(), Some("Acer"));
        assert_eq!(normalize_brand("   "), None);
    }

    #[test]
    fn test_extract_brand_from_name() {
        assert_eq!(
            extract_brand_from_name("apple iPad Air 2024").as_deref(),
            Some("Apple")
        );
        assert_eq!(
            extract_brand_from_name("Honor Pad X9").as_deref(),
            Some("Honor")
        );
        assert_eq!(extract_brand_from_name(""), None);
    }
}
