use crate::generator::{MAX_CARD_LENGTH, MIN_CARD_LENGTH};
use crate::models::CardRecord;
use crate::reference::scheme_for_number;
use crate::util::is_luhn_valid;

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Valid,
    InvalidChecksum,
    Malformed,
}

#[derive(Debug, Clone)]
pub struct CheckResult {
    pub number: String,
    pub scheme: Option<&'static str>,
    pub outcome: CheckOutcome,
}

#[derive(Debug, Clone)]
pub struct CheckSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub malformed: usize,
}

impl CheckSummary {
    pub fn new() -> Self {
        Self {
            total: 0,
            valid: 0,
            invalid: 0,
            malformed: 0,
        }
    }

    fn record(&mut self, outcome: CheckOutcome) {
        self.total += 1;
        match outcome {
            CheckOutcome::Valid => self.valid += 1,
            CheckOutcome::InvalidChecksum => self.invalid += 1,
            CheckOutcome::Malformed => self.malformed += 1,
        }
    }
}

// Accepts a bare number or the pipe-delimited NUMBER|MM|YYYY|CVV form;
// spaces and dashes inside the number are tolerated.
pub fn check_number(input: &str) -> CheckResult {
    let raw = input.split('|').next().unwrap_or(input).trim();
    let number: String = raw
        .chars()
        .filter(|ch| !matches!(ch, ' ' | '-'))
        .collect();

    let digits_only = !number.is_empty() && number.chars().all(|ch| ch.is_ascii_digit());
    let length_supported = (MIN_CARD_LENGTH..=MAX_CARD_LENGTH).contains(&number.len());

    let outcome = if !digits_only || !length_supported {
        CheckOutcome::Malformed
    } else if is_luhn_valid(&number) {
        CheckOutcome::Valid
    } else {
        CheckOutcome::InvalidChecksum
    };

    let scheme = if digits_only {
        scheme_for_number(&number).map(|rule| rule.name)
    } else {
        None
    };

    CheckResult {
        number,
        scheme,
        outcome,
    }
}

pub fn check_file(path: &Path) -> Result<(Vec<CheckResult>, CheckSummary), String> {
    let contents = std::fs::read_to_string(path).map_err(|err| err.to_string())?;
    let mut results = Vec::new();
    let mut summary = CheckSummary::new();

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let result = check_number(line);
        summary.record(result.outcome);
        results.push(result);
    }

    Ok((results, summary))
}

pub fn verify_records(records: &[CardRecord]) -> CheckSummary {
    let mut summary = CheckSummary::new();
    for record in records {
        summary.record(check_number(&record.number).outcome);
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_number_valid() {
        let result = check_number("4111111111111111");
        assert_eq!(result.outcome, CheckOutcome::Valid);
        assert_eq!(result.scheme, Some("Visa"));
    }

    #[test]
    fn test_check_number_pipe_form_and_separators() {
        let result = check_number("4111111111111111|03|2027|482");
        assert_eq!(result.outcome, CheckOutcome::Valid);
        assert_eq!(result.number, "4111111111111111");

        let spaced = check_number("4111 1111 1111 1111");
        assert_eq!(spaced.outcome, CheckOutcome::Valid);
        assert_eq!(spaced.number, "4111111111111111");
    }

    #[test]
    fn test_check_number_bad_checksum() {
        let result = check_number("4111111111111112");
        assert_eq!(result.outcome, CheckOutcome::InvalidChecksum);
        assert_eq!(result.scheme, Some("Visa"));
    }

    #[test]
    fn test_check_number_malformed() {
        // too short for a card number even though Luhn-valid
        assert_eq!(check_number("79927398713").outcome, CheckOutcome::Malformed);
        assert_eq!(check_number("not-a-number").outcome, CheckOutcome::Malformed);
        assert_eq!(check_number("").outcome, CheckOutcome::Malformed);
    }

    #[test]
    fn test_verify_records_counts() {
        let good = CardRecord {
            number: "4111111111111111".to_string(),
            exp_month: "01".to_string(),
            exp_year: "2027".to_string(),
            cvv: "123".to_string(),
            scheme: Some("Visa".to_string()),
        };
        let mut bad = good.clone();
        bad.number = "4111111111111112".to_string();

        let summary = verify_records(&[good, bad]);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.valid, 1);
        assert_eq!(summary.invalid, 1);
        assert_eq!(summary.malformed, 0);
    }
}
