//! Canonical name forms

/// Descriptive prefixes that do not change what the ingredient is.
/// Stripped from the front of a name before head-noun comparison.
static DESCRIPTIVE_PREFIXES: [&str; 15] = [
    "kosher", "sea", "table", "fresh", "dried", "ground", "organic", "frozen", "whole",
    // color adjectives
    "red", "green", "yellow", "white", "black", "brown",
];

/// Lowercase, trim, punctuation to spaces, collapse whitespace
pub fn normalize(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let replaced: String = lowered
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Approximate head noun: normalize, strip descriptive prefixes, keep the
/// last two words of whatever remains.
///
/// "Kosher salt" and "Sea salt" both reduce to "salt"; "extra virgin olive
/// oil" reduces to "olive oil".
pub fn base_name(name: &str) -> String {
    let normalized = normalize(name);
    let mut words: Vec<&str> = normalized.split_whitespace().collect();

    while words.len() > 1 && DESCRIPTIVE_PREFIXES.contains(&words[0]) {
        words.remove(0);
    }

    if words.len() > 2 {
        words = words.split_off(words.len() - 2);
    }
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  Chicken Breast "), "chicken breast");
        assert_eq!(normalize("sun-dried tomatoes"), "sun dried tomatoes");
        assert_eq!(normalize("salt, kosher"), "salt kosher");
        assert_eq!(normalize("BUTTER"), "butter");
    }

    #[test]
    fn test_base_name_strips_prefixes() {
        assert_eq!(base_name("Kosher salt"), "salt");
        assert_eq!(base_name("Sea salt"), "salt");
        assert_eq!(base_name("fresh ground black pepper"), "pepper");
        assert_eq!(base_name("frozen peas"), "peas");
    }

    #[test]
    fn test_base_name_keeps_head_noun_pair() {
        assert_eq!(base_name("extra virgin olive oil"), "olive oil");
        assert_eq!(base_name("boneless skinless chicken breast"), "chicken breast");
        assert_eq!(base_name("chicken breast"), "chicken breast");
        assert_eq!(base_name("flour"), "flour");
    }

    #[test]
    fn test_base_name_never_strips_last_word() {
        // a name that is nothing but a prefix word keeps itself
        assert_eq!(base_name("fresh"), "fresh");
        assert_eq!(base_name("Whole"), "whole");
    }
}
