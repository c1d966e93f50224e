//! Spoken Number Normalization
//!
//! Converts the raw spoken bus-number fragment into a canonical digit string
//! before entity matching. No fuzzy correction, no locale variants.

/// Spoken number words the platform's vocabulary can produce
const NUMBER_WORDS: [(&str, &str); 20] = [
    ("one", "1"),
    ("two", "2"),
    ("three", "3"),
    ("four", "4"),
    ("five", "5"),
    ("six", "6"),
    ("seven", "7"),
    ("eight", "8"),
    ("nine", "9"),
    ("ten", "10"),
    ("eleven", "11"),
    ("twelve", "12"),
    ("thirteen", "13"),
    ("fourteen", "14"),
    ("fifteen", "15"),
    ("sixteen", "16"),
    ("seventeen", "17"),
    ("eighteen", "18"),
    ("nineteen", "19"),
    ("twenty", "20"),
];

/// Normalize spoken text to a canonical digit string
///
/// Pure digit strings pass through unchanged; number words map via the
/// fixed table; anything else yields `None`.
pub fn normalize_number(text: &str) -> Option<String> {
    let text = text.trim().to_lowercase();
    if text.is_empty() {
        return None;
    }

    if text.chars().all(|c| c.is_ascii_digit()) {
        return Some(text);
    }

    NUMBER_WORDS
        .iter()
        .find(|(word, _)| *word == text)
        .map(|(_, digits)| digits.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_words() {
        assert_eq!(normalize_number("Two"), Some("2".to_string()));
        assert_eq!(normalize_number("twenty"), Some("20".to_string()));
        assert_eq!(normalize_number("  ten "), Some("10".to_string()));
    }

    #[test]
    fn test_digits_pass_through() {
        assert_eq!(normalize_number("7"), Some("7".to_string()));
        // Unmapped but purely numeric input is accepted as-is
        assert_eq!(normalize_number("42"), Some("42".to_string()));
    }

    #[test]
    fn test_unrecognized_input() {
        assert_eq!(normalize_number("banana"), None);
        assert_eq!(normalize_number("twenty one"), None);
        assert_eq!(normalize_number("bus 2"), None);
        assert_eq!(normalize_number(""), None);
    }
}
