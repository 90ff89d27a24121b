/// Luhn pre-check for card numbers entered in the booking form. Advisory
/// only; no payment processing happens in this service.
///
/// Accepts spaces and dashes as grouping characters and requires 13 to 19
/// digits, the range issued by the major networks.
pub fn is_valid_number(card_number: &str) -> bool {
    let sanitized: String = card_number
        .chars()
        .filter(|c| *c != ' ' && *c != '-')
        .collect();

    if sanitized.len() < 13 || sanitized.len() > 19 {
        return false;
    }
    if !sanitized.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    let mut sum = 0u32;
    let mut double = false;
    for c in sanitized.chars().rev() {
        let mut digit = c.to_digit(10).unwrap_or(0);
        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
        double = !double;
    }

    sum % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_good_numbers_pass() {
        assert!(is_valid_number("4111111111111111"));
        assert!(is_valid_number("5500005555555559"));
        assert!(is_valid_number("378282246310005")); // 15-digit Amex
    }

    #[test]
    fn grouping_characters_are_ignored() {
        assert!(is_valid_number("4111 1111 1111 1111"));
        assert!(is_valid_number("4111-1111-1111-1111"));
    }

    #[test]
    fn off_by_one_checksum_fails() {
        assert!(!is_valid_number("4111111111111112"));
    }

    #[test]
    fn wrong_lengths_fail() {
        assert!(!is_valid_number("411111111111")); // 12 digits
        assert!(!is_valid_number("41111111111111111111")); // 20 digits
        assert!(!is_valid_number(""));
    }

    #[test]
    fn non_digits_fail() {
        assert!(!is_valid_number("4111x1111y1111z111"));
    }
}
