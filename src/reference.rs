#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchemeRule {
    pub name: &'static str,
    pub prefixes: &'static [&'static str],
    pub default_length: usize,
    pub cvv_length: usize,
}

pub const SCHEME_RULES: &[SchemeRule] = &[
    SchemeRule {
        name: "American Express",
        prefixes: &["34", "37"],
        default_length: 15,
        cvv_length: 4,
    },
    SchemeRule {
        name: "Visa",
        prefixes: &["4"],
        default_length: 16,
        cvv_length: 3,
    },
    SchemeRule {
        name: "Mastercard",
        prefixes: &["51", "52", "53", "54", "55"],
        default_length: 16,
        cvv_length: 3,
    },
    SchemeRule {
        name: "Discover",
        prefixes: &["6011", "644", "645", "646", "647", "648", "649", "65"],
        default_length: 16,
        cvv_length: 3,
    },
    SchemeRule {
        name: "JCB",
        prefixes: &["35"],
        default_length: 16,
        cvv_length: 3,
    },
    SchemeRule {
        name: "Diners Club",
        prefixes: &["300", "301", "302", "303", "304", "305", "36", "38"],
        default_length: 14,
        cvv_length: 3,
    },
    SchemeRule {
        name: "UnionPay",
        prefixes: &["62"],
        default_length: 16,
        cvv_length: 3,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct BinRecord {
    pub bin: &'static str,
    pub scheme: &'static str,
    pub card_type: &'static str,
    pub brand: &'static str,
    pub bank: &'static str,
    pub country: &'static str,
}

pub const BIN_DIRECTORY: &[BinRecord] = &[
    BinRecord {
        bin: "411111",
        scheme: "Visa",
        card_type: "Credit",
        brand: "Visa Classic",
        bank: "JPMorgan Chase Bank",
        country: "United States",
    },
    BinRecord {
        bin: "401288",
        scheme: "Visa",
        card_type: "Credit",
        brand: "Visa Classic",
        bank: "NatWest Bank",
        country: "United Kingdom",
    },
    BinRecord {
        bin: "424242",
        scheme: "Visa",
        card_type: "Credit",
        brand: "Visa Classic",
        bank: "Barclays Bank",
        country: "United Kingdom",
    },
    BinRecord {
        bin: "450875",
        scheme: "Visa",
        card_type: "Debit",
        brand: "Visa Electron",
        bank: "Banco Santander",
        country: "Spain",
    },
    BinRecord {
        bin: "510510",
        scheme: "Mastercard",
        card_type: "Credit",
        brand: "Standard",
        bank: "Citibank",
        country: "United States",
    },
    BinRecord {
        bin: "555555",
        scheme: "Mastercard",
        card_type: "Credit",
        brand: "World",
        bank: "Deutsche Bank",
        country: "Germany",
    },
    BinRecord {
        bin: "340000",
        scheme: "American Express",
        card_type: "Credit",
        brand: "American Express",
        bank: "American Express",
        country: "United States",
    },
    BinRecord {
        bin: "371449",
        scheme: "American Express",
        card_type: "Credit",
        brand: "Platinum",
        bank: "American Express",
        country: "United States",
    },
    BinRecord {
        bin: "378282",
        scheme: "American Express",
        card_type: "Credit",
        brand: "Gold",
        bank: "American Express",
        country: "United States",
    },
    BinRecord {
        bin: "601111",
        scheme: "Discover",
        card_type: "Credit",
        brand: "Discover it",
        bank: "Discover Bank",
        country: "United States",
    },
    BinRecord {
        bin: "353011",
        scheme: "JCB",
        card_type: "Credit",
        brand: "JCB Standard",
        bank: "JCB Co.",
        country: "Japan",
    },
    BinRecord {
        bin: "305693",
        scheme: "Diners Club",
        card_type: "Credit",
        brand: "Diners Club International",
        bank: "Diners Club",
        country: "United States",
    },
    BinRecord {
        bin: "622126",
        scheme: "UnionPay",
        card_type: "Debit",
        brand: "UnionPay",
        bank: "Industrial and Commercial Bank of China",
        country: "China",
    },
];

// Longest matching prefix wins.
pub fn scheme_for_number(number: &str) -> Option<&'static SchemeRule> {
    let mut best: Option<(&'static SchemeRule, usize)> = None;
    for rule in SCHEME_RULES {
        for prefix in rule.prefixes {
            if !number.starts_with(prefix) {
                continue;
            }
            let better = match best {
                Some((_, matched)) => prefix.len() > matched,
                None => true,
            };
            if better {
                best = Some((rule, prefix.len()));
            }
        }
    }
    best.map(|(rule, _)| rule)
}

pub fn default_target_length(prefix: &str) -> usize {
    scheme_for_number(prefix)
        .map(|rule| rule.default_length)
        .unwrap_or(16)
}

pub fn cvv_length_for_number(number: &str) -> usize {
    scheme_for_number(number)
        .map(|rule| rule.cvv_length)
        .unwrap_or(3)
}

// Directory lookup keyed on the first six digits.
pub fn lookup_bin(bin: &str) -> Option<&'static BinRecord> {
    if bin.len() < 6 {
        return None;
    }
    let key = bin.get(0..6)?;
    if !key.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    BIN_DIRECTORY.iter().find(|record| record.bin == key)
}

// Mocked 3-D Secure label: even final digit reads as enrolled.
pub fn vbv_status(bin: &str) -> Option<&'static str> {
    if bin.is_empty() || !bin.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    let last = bin.chars().last()?.to_digit(10)?;
    if last % 2 == 0 {
        Some("VBV")
    } else {
        Some("NON-VBV")
    }
}
