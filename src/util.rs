use rand::Rng;

pub fn random_digits<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        let digit = rng.gen_range(0..10);
        out.push(char::from(b'0' + digit as u8));
    }
    out
}

pub fn random_upper_letters<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        let idx = rng.gen_range(0..CHARSET.len());
        out.push(char::from(CHARSET[idx]));
    }
    out
}

// Position 0 is the rightmost digit; digits at odd positions are doubled
// and reduced by 9 when the double exceeds 9.
pub fn luhn_sum(digits: &[u8]) -> u32 {
    let mut sum = 0u32;
    for (position, &digit) in digits.iter().rev().enumerate() {
        let mut value = u32::from(digit);
        if position % 2 == 1 {
            value *= 2;
            if value > 9 {
                value -= 9;
            }
        }
        sum += value;
    }
    sum
}

pub fn luhn_check_digit(partial: &[u8]) -> u8 {
    let mut digits = Vec::with_capacity(partial.len() + 1);
    digits.extend_from_slice(partial);
    digits.push(0);
    let last = partial.len();
    for candidate in 0..10u8 {
        digits[last] = candidate;
        if luhn_sum(&digits) % 10 == 0 {
            return candidate;
        }
    }
    // exactly one candidate in 0..10 satisfies the relation
    0
}

pub fn is_luhn_valid(number: &str) -> bool {
    if number.is_empty() {
        return false;
    }
    let mut digits = Vec::with_capacity(number.len());
    for ch in number.chars() {
        match ch.to_digit(10) {
            Some(digit) => digits.push(digit as u8),
            None => return false,
        }
    }
    luhn_sum(&digits) % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_luhn_sum_known_sequence() {
        // 7992739871x with x = 3 is the classic worked example
        let digits = [7, 9, 9, 2, 7, 3, 9, 8, 7, 1, 3];
        assert_eq!(luhn_sum(&digits) % 10, 0);
    }

    #[test]
    fn test_luhn_check_digit_known_sequence() {
        let partial = [7, 9, 9, 2, 7, 3, 9, 8, 7, 1];
        assert_eq!(luhn_check_digit(&partial), 3);
    }

    #[test]
    fn test_luhn_check_digit_zero_case() {
        // already a multiple of 10 without contribution from the last digit
        let partial = [0, 0, 0, 0, 0];
        assert_eq!(luhn_check_digit(&partial), 0);
    }

    #[test]
    fn test_is_luhn_valid_accepts_known_numbers() {
        assert!(is_luhn_valid("79927398713"));
        assert!(is_luhn_valid("4111111111111111"));
        assert!(is_luhn_valid("378282246310005"));
    }

    #[test]
    fn test_is_luhn_valid_rejects_bad_checksum() {
        assert!(!is_luhn_valid("4111111111111112"));
        assert!(!is_luhn_valid("79927398710"));
    }

    #[test]
    fn test_is_luhn_valid_rejects_non_digits() {
        assert!(!is_luhn_valid(""));
        assert!(!is_luhn_valid("4111 1111 1111 1111"));
        assert!(!is_luhn_valid("41111111x1111111"));
    }

    #[test]
    fn test_random_digits_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let out = random_digits(&mut rng, 12);
        assert_eq!(out.len(), 12);
        assert!(out.chars().all(|ch| ch.is_ascii_digit()));
    }

    #[test]
    fn test_random_upper_letters_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let out = random_upper_letters(&mut rng, 8);
        assert_eq!(out.len(), 8);
        assert!(out.chars().all(|ch| ch.is_ascii_uppercase()));
    }
}
