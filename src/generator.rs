use crate::models::CardRecord;
use crate::reference::{cvv_length_for_number, default_target_length, scheme_for_number};
use crate::util::{luhn_check_digit, random_digits};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

pub const MIN_CARD_LENGTH: usize = 13;
pub const MAX_CARD_LENGTH: usize = 19;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthesisError {
    #[error("invalid prefix '{prefix}': {reason}")]
    InvalidPrefix { prefix: String, reason: &'static str },
    #[error("unsupported target length {0}: supported lengths are 13..=19")]
    UnsupportedLength(usize),
}

pub struct GeneratorConfig {
    pub count: usize,
    // None derives the length from the prefix's scheme convention
    pub target_length: Option<usize>,
    pub expiry_min_year: i32,
    pub expiry_max_year: i32,
}

// Extends `prefix` with uniform random digits up to `target_length - 1` and
// closes the sequence with the Luhn check digit.
pub fn synthesize<R: Rng + ?Sized>(
    rng: &mut R,
    prefix: &str,
    target_length: usize,
) -> Result<String, SynthesisError> {
    let mut digits = prefix_digits(prefix)?;
    if digits.len() >= target_length {
        return Err(SynthesisError::InvalidPrefix {
            prefix: prefix.to_string(),
            reason: "prefix leaves no room for a check digit",
        });
    }
    if !(MIN_CARD_LENGTH..=MAX_CARD_LENGTH).contains(&target_length) {
        return Err(SynthesisError::UnsupportedLength(target_length));
    }

    while digits.len() < target_length - 1 {
        digits.push(rng.gen_range(0..10) as u8);
    }
    let check = luhn_check_digit(&digits);
    digits.push(check);

    Ok(digits.iter().map(|&digit| char::from(b'0' + digit)).collect())
}

// Independent syntheses; outputs may repeat by chance.
pub fn synthesize_many<R: Rng + ?Sized>(
    rng: &mut R,
    prefix: &str,
    target_length: usize,
    count: usize,
) -> Result<Vec<String>, SynthesisError> {
    let mut numbers = Vec::with_capacity(count);
    for _ in 0..count {
        numbers.push(synthesize(rng, prefix, target_length)?);
    }
    Ok(numbers)
}

pub fn generate_cards(
    config: &GeneratorConfig,
    prefix: &str,
    seed: u64,
) -> Result<Vec<CardRecord>, String> {
    validate_config(config)?;
    let target_length = config
        .target_length
        .unwrap_or_else(|| default_target_length(prefix));
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let numbers = synthesize_many(&mut rng, prefix, target_length, config.count)
        .map_err(|err| err.to_string())?;
    let mut records = Vec::with_capacity(numbers.len());
    for number in numbers {
        records.push(build_record(&mut rng, number, config));
    }
    Ok(records)
}

fn build_record<R: Rng + ?Sized>(
    rng: &mut R,
    number: String,
    config: &GeneratorConfig,
) -> CardRecord {
    let exp_month = format!("{:02}", rng.gen_range(1..=12));
    let exp_year = rng
        .gen_range(config.expiry_min_year..=config.expiry_max_year)
        .to_string();
    let cvv = random_digits(rng, cvv_length_for_number(&number));
    let scheme = scheme_for_number(&number).map(|rule| rule.name.to_string());

    CardRecord {
        number,
        exp_month,
        exp_year,
        cvv,
        scheme,
    }
}

fn validate_config(config: &GeneratorConfig) -> Result<(), String> {
    if config.count == 0 {
        return Err("count must be greater than 0".to_string());
    }
    if let Some(length) = config.target_length {
        if !(MIN_CARD_LENGTH..=MAX_CARD_LENGTH).contains(&length) {
            return Err(format!(
                "length must be between {} and {}",
                MIN_CARD_LENGTH, MAX_CARD_LENGTH
            ));
        }
    }
    if config.expiry_min_year > config.expiry_max_year {
        return Err("expiry year window is empty".to_string());
    }
    Ok(())
}

fn prefix_digits(prefix: &str) -> Result<Vec<u8>, SynthesisError> {
    if prefix.is_empty() {
        return Err(SynthesisError::InvalidPrefix {
            prefix: String::new(),
            reason: "prefix must not be empty",
        });
    }
    let mut digits = Vec::with_capacity(prefix.len());
    for ch in prefix.chars() {
        match ch.to_digit(10) {
            Some(digit) => digits.push(digit as u8),
            None => {
                return Err(SynthesisError::InvalidPrefix {
                    prefix: prefix.to_string(),
                    reason: "prefix must contain only decimal digits",
                })
            }
        }
    }
    Ok(digits)
}
