use crate::models::IdentityRecord;
use crate::util::{random_digits, random_upper_letters};

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Thomas", "Susan", "Daniel", "Jessica", "Peter", "Sarah",
    "Paul", "Karen", "Mark", "Nancy", "George", "Lisa", "Anna", "Emma", "Lucas", "Sofia",
    "Henrik", "Claire",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Wilson",
    "Anderson", "Taylor", "Thomas", "Moore", "Martin", "Walsh", "Schmidt", "Fischer", "Weber",
    "Dubois", "Laurent", "Moreau", "Visser", "Bakker", "Murphy", "Kelly", "Byrne", "Clark",
    "Wright", "Hall", "Young",
];

const STREET_NAMES: &[&str] = &[
    "Market", "Station", "Oak", "River", "Park", "Hill", "Lake", "Maple", "Cedar", "High",
    "Broad", "King", "Queen", "Mill", "Garden", "Main", "North", "South", "West", "East",
];

struct CountryProfile {
    code: &'static str,
    name: &'static str,
    cities: &'static [&'static str],
    regions: &'static [&'static str],
}

const COUNTRY_PROFILES: &[CountryProfile] = &[
    CountryProfile {
        code: "US",
        name: "United States",
        cities: &["Springfield", "Franklin", "Madison", "Georgetown", "Arlington", "Salem"],
        regions: &["California", "Texas", "New York", "Ohio", "Oregon", "Virginia"],
    },
    CountryProfile {
        code: "GB",
        name: "United Kingdom",
        cities: &["London", "Manchester", "Leeds", "Bristol", "Sheffield", "Glasgow"],
        regions: &["Greater London", "Yorkshire", "Merseyside", "Kent", "Lancashire"],
    },
    CountryProfile {
        code: "CA",
        name: "Canada",
        cities: &["Toronto", "Vancouver", "Calgary", "Ottawa", "Halifax", "Winnipeg"],
        regions: &["Ontario", "British Columbia", "Alberta", "Quebec", "Manitoba"],
    },
    CountryProfile {
        code: "DE",
        name: "Germany",
        cities: &["Berlin", "Hamburg", "Munich", "Cologne", "Frankfurt", "Leipzig"],
        regions: &["Bavaria", "Hesse", "Saxony", "Brandenburg", "Hamburg"],
    },
    CountryProfile {
        code: "FR",
        name: "France",
        cities: &["Paris", "Lyon", "Marseille", "Toulouse", "Nantes", "Lille"],
        regions: &["Ile-de-France", "Occitanie", "Brittany", "Normandy", "Provence"],
    },
    CountryProfile {
        code: "NL",
        name: "Netherlands",
        cities: &["Amsterdam", "Rotterdam", "Utrecht", "Eindhoven", "Groningen"],
        regions: &["North Holland", "South Holland", "Utrecht", "Gelderland"],
    },
    CountryProfile {
        code: "IE",
        name: "Ireland",
        cities: &["Dublin", "Cork", "Galway", "Limerick", "Waterford"],
        regions: &["Leinster", "Munster", "Connacht", "Ulster"],
    },
];

pub fn normalize_country_code(code: &str) -> Option<String> {
    let trimmed = code.trim();
    if trimmed.len() == 2 && trimmed.chars().all(|ch| ch.is_ascii_alphabetic()) {
        Some(trimmed.to_uppercase())
    } else {
        None
    }
}

pub fn supported_countries() -> Vec<&'static str> {
    COUNTRY_PROFILES.iter().map(|profile| profile.code).collect()
}

pub fn generate_identity<R: Rng + ?Sized>(
    rng: &mut R,
    country: &str,
) -> Result<IdentityRecord, String> {
    let code = normalize_country_code(country)
        .ok_or_else(|| format!("invalid country code: {}", country.trim()))?;
    let profile = COUNTRY_PROFILES
        .iter()
        .find(|profile| profile.code == code)
        .ok_or_else(|| {
            format!(
                "no identity data for country {} (supported: {})",
                code,
                supported_countries().join(", ")
            )
        })?;

    let first_name = FIRST_NAMES.choose(rng).unwrap_or(&"James").to_string();
    let last_name = LAST_NAMES.choose(rng).unwrap_or(&"Smith").to_string();
    let street_number = rng.gen_range(1..250).to_string();
    let street = STREET_NAMES.choose(rng).unwrap_or(&"Market").to_string();
    let city = profile.cities.choose(rng).unwrap_or(&"Springfield").to_string();
    let region = profile.regions.choose(rng).unwrap_or(&"California").to_string();
    let postcode = postcode_for(rng, &code);

    Ok(IdentityRecord {
        first_name,
        last_name,
        street_number,
        street,
        city,
        region,
        country: profile.name.to_string(),
        postcode,
    })
}

pub fn generate_identities(
    country: &str,
    count: usize,
    seed: u64,
) -> Result<Vec<IdentityRecord>, String> {
    if count == 0 {
        return Err("count must be greater than 0".to_string());
    }
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut records = Vec::with_capacity(count);
    for _ in 0..count {
        records.push(generate_identity(&mut rng, country)?);
    }
    Ok(records)
}

fn postcode_for<R: Rng + ?Sized>(rng: &mut R, code: &str) -> String {
    match code {
        "GB" | "IE" => format!(
            "{}{} {}{}",
            random_upper_letters(rng, 2),
            rng.gen_range(1..10),
            rng.gen_range(1..10),
            random_upper_letters(rng, 2)
        ),
        "CA" => format!(
            "{}{}{} {}{}{}",
            random_upper_letters(rng, 1),
            rng.gen_range(0..10),
            random_upper_letters(rng, 1),
            rng.gen_range(0..10),
            random_upper_letters(rng, 1),
            rng.gen_range(0..10)
        ),
        "NL" => format!("{} {}", random_digits(rng, 4), random_upper_letters(rng, 2)),
        _ => random_digits(rng, 5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    #[test]
    fn test_normalize_country_code() {
        assert_eq!(normalize_country_code(" us "), Some("US".to_string()));
        assert_eq!(normalize_country_code("De"), Some("DE".to_string()));
        assert_eq!(normalize_country_code("USA"), None);
        assert_eq!(normalize_country_code("4x"), None);
        assert_eq!(normalize_country_code(""), None);
    }

    #[test]
    fn test_generate_identity_fields() {
        let mut rng = test_rng(11);
        let record = generate_identity(&mut rng, "us").unwrap();
        assert!(!record.first_name.is_empty());
        assert!(!record.last_name.is_empty());
        assert_eq!(record.country, "United States");
        assert_eq!(record.postcode.len(), 5);
        assert!(record.postcode.chars().all(|ch| ch.is_ascii_digit()));
        let number: u32 = record.street_number.parse().unwrap();
        assert!((1..250).contains(&number));
    }

    #[test]
    fn test_generate_identity_unknown_country() {
        let mut rng = test_rng(12);
        assert!(generate_identity(&mut rng, "ZZ").is_err());
        assert!(generate_identity(&mut rng, "Germany").is_err());
    }

    #[test]
    fn test_generate_identities_count_and_determinism() {
        let first = generate_identities("GB", 3, 99).unwrap();
        let second = generate_identities("GB", 3, 99).unwrap();
        assert_eq!(first.len(), 3);
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.render_line(), b.render_line());
        }
    }

    #[test]
    fn test_postcode_shapes() {
        let mut rng = test_rng(13);
        let nl = postcode_for(&mut rng, "NL");
        assert_eq!(nl.len(), 7);
        assert!(nl.chars().nth(4) == Some(' '));

        let gb = postcode_for(&mut rng, "GB");
        assert_eq!(gb.len(), 7);
        assert!(gb.contains(' '));
    }
}
