use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardRecord {
    pub number: String,
    pub exp_month: String,
    pub exp_year: String,
    pub cvv: String,
    #[serde(default)]
    pub scheme: Option<String>,
}

impl CardRecord {
    // NUMBER|MM|YYYY|CVV
    pub fn render_line(&self) -> String {
        format!(
            "{}|{}|{}|{}",
            self.number, self.exp_month, self.exp_year, self.cvv
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityRecord {
    pub first_name: String,
    pub last_name: String,
    pub street_number: String,
    pub street: String,
    pub city: String,
    pub region: String,
    pub country: String,
    pub postcode: String,
}

impl IdentityRecord {
    pub fn render_line(&self) -> String {
        format!(
            "{} {}, {} {} St, {}, {}, {} - {}",
            self.first_name,
            self.last_name,
            self.street_number,
            self.street,
            self.city,
            self.region,
            self.country,
            self.postcode
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_render_line() {
        let record = CardRecord {
            number: "4111111111111111".to_string(),
            exp_month: "03".to_string(),
            exp_year: "2027".to_string(),
            cvv: "482".to_string(),
            scheme: Some("Visa".to_string()),
        };
        assert_eq!(record.render_line(), "4111111111111111|03|2027|482");
    }

    #[test]
    fn test_identity_render_line() {
        let record = IdentityRecord {
            first_name: "Anna".to_string(),
            last_name: "Walsh".to_string(),
            street_number: "17".to_string(),
            street: "Oak".to_string(),
            city: "Dublin".to_string(),
            region: "Leinster".to_string(),
            country: "Ireland".to_string(),
            postcode: "74213".to_string(),
        };
        assert_eq!(
            record.render_line(),
            "Anna Walsh, 17 Oak St, Dublin, Leinster, Ireland - 74213"
        );
    }
}
