//! Contact details
//!
//! Phone-number masking and the pure validation predicates shared by the
//! registration forms. The predicates only answer yes or no; user-visible
//! messaging belongs to the calling form.

/// A masked phone value together with the caret position that keeps typing
/// and deleting feeling natural.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedPhone {
    /// The masked value, e.g. `(876) 555-0199`.
    pub value: String,

    /// Caret position within [`MaskedPhone::value`].
    pub cursor: usize,
}

/// Strips a phone number down to at most ten digit characters.
pub fn clean_phone_number(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).take(10).collect()
}

/// Masks a phone number for display as `(xxx) xxx-xxxx`.
///
/// Partial input is masked progressively: three or more digits close the
/// area code, fewer leave an open parenthesis, and no digits yield an empty
/// string. Idempotent on already-masked ten-digit numbers.
pub fn format_phone_number(input: &str) -> String {
    let digits = clean_phone_number(input);

    match digits.len() {
        0 => String::new(),
        1..=2 => format!("({digits}"),
        3..=5 => format!(
            "({}) {}",
            digits.get(..3).unwrap_or_default(),
            digits.get(3..).unwrap_or_default()
        ),
        _ => format!(
            "({}) {}-{}",
            digits.get(..3).unwrap_or_default(),
            digits.get(3..6).unwrap_or_default(),
            digits.get(6..).unwrap_or_default()
        ),
    }
}

/// Masks a phone number while tracking the caret.
///
/// The caret lands after the same digit ordinal it sat behind in the raw
/// value, clamped to the masked length, so inserting or deleting in the
/// middle of the number does not jump the cursor.
pub fn format_phone_number_with_cursor(value: &str, cursor: usize) -> MaskedPhone {
    let formatted = format_phone_number(value);

    let digits_before_cursor = value
        .chars()
        .take(cursor)
        .filter(char::is_ascii_digit)
        .count();

    let mut position = if digits_before_cursor == 0 { 0 } else { cursor };

    if digits_before_cursor > 0 {
        let mut seen = 0;
        for (index, character) in formatted.char_indices() {
            if character.is_ascii_digit() {
                seen += 1;
                if seen == digits_before_cursor {
                    position = index + 1;
                    break;
                }
            }
        }
    }

    MaskedPhone {
        cursor: position.min(formatted.len()),
        value: formatted,
    }
}

/// Whether the input holds a complete ten-digit phone number.
pub fn validate_phone_number(phone: &str) -> bool {
    clean_phone_number(phone).len() == 10
}

/// Whether the input looks like an email address.
///
/// Accepts `local@domain` where neither side is empty, nothing contains
/// whitespace or a second `@`, and the domain has an interior dot.
pub fn validate_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    if email.chars().any(char::is_whitespace) {
        return false;
    }

    domain
        .char_indices()
        .any(|(index, character)| character == '.' && index > 0 && index + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_keeps_at_most_ten_digits() {
        assert_eq!(clean_phone_number("(876) 555-0199"), "8765550199");
        assert_eq!(clean_phone_number("876555019912345"), "8765550199");
        assert_eq!(clean_phone_number("call me maybe"), "");
    }

    #[test]
    fn clean_output_is_all_digits_for_arbitrary_input() {
        for input in ["+1 (876) 555-0199 ext. 4", "abc123!@#456", "  ", "٣٤"] {
            let cleaned = clean_phone_number(input);

            assert!(cleaned.len() <= 10, "more than ten characters kept");
            assert!(
                cleaned.chars().all(|c| c.is_ascii_digit()),
                "non-digit survived cleaning"
            );
        }
    }

    #[test]
    fn format_masks_progressively() {
        assert_eq!(format_phone_number(""), "");
        assert_eq!(format_phone_number("8"), "(8");
        assert_eq!(format_phone_number("876"), "(876) ");
        assert_eq!(format_phone_number("87655"), "(876) 55");
        assert_eq!(format_phone_number("8765550"), "(876) 555-0");
        assert_eq!(format_phone_number("8765550199"), "(876) 555-0199");
    }

    #[test]
    fn format_is_idempotent_on_complete_numbers() {
        let formatted = format_phone_number("8765550199");

        assert_eq!(format_phone_number(&formatted), formatted);
    }

    #[test]
    fn cursor_follows_its_digit_through_masking() {
        // Caret after the fourth digit of "8765550199".
        let masked = format_phone_number_with_cursor("8765550199", 4);

        assert_eq!(masked.value, "(876) 555-0199");
        assert_eq!(masked.cursor, 7);
    }

    #[test]
    fn cursor_at_start_stays_at_start() {
        let masked = format_phone_number_with_cursor("8765550199", 0);

        assert_eq!(masked.cursor, 0);
    }

    #[test]
    fn cursor_past_the_end_lands_after_the_last_digit() {
        let masked = format_phone_number_with_cursor("876", 30);

        assert_eq!(masked.value, "(876) ");
        assert_eq!(masked.cursor, 4);
    }

    #[test]
    fn cursor_is_clamped_to_masked_length() {
        // Fourteen digits: four never make it into the mask, so the caret
        // can only clamp to the masked length.
        let masked = format_phone_number_with_cursor("12345678901234", 14);

        assert_eq!(masked.value, "(123) 456-7890");
        assert_eq!(masked.cursor, 14);
    }

    #[test]
    fn phone_validation_requires_ten_digits() {
        assert!(validate_phone_number("(876) 555-0199"));
        assert!(validate_phone_number("8765550199"));
        assert!(!validate_phone_number("876555019"));
        assert!(!validate_phone_number(""));
    }

    #[test]
    fn email_validation_accepts_plain_addresses() {
        assert!(validate_email("name@example.com"));
        assert!(validate_email("first.last@mail.example.org"));
    }

    #[test]
    fn email_validation_rejects_malformed_addresses() {
        assert!(!validate_email("no-at-sign.example.com"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("name@"));
        assert!(!validate_email("name@example"));
        assert!(!validate_email("name@.com"));
        assert!(!validate_email("name@example."));
        assert!(!validate_email("two@signs@example.com"));
        assert!(!validate_email("spa ce@example.com"));
    }
}
