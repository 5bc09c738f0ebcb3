use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Editable price row. `key` ties the row to a bundled pricing card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingItem {
    pub id: i64,
    #[serde(default)]
    pub key: String,
    pub title_en: String,
    pub title_ar: String,
    pub price_en: String,
    pub price_ar: String,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Admin edit of the display strings of one row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingUpdateDto {
    pub title_en: String,
    pub title_ar: String,
    pub price_en: String,
    pub price_ar: String,
}

impl PricingUpdateDto {
    pub fn from_item(item: &PricingItem) -> Self {
        Self {
            title_en: item.title_en.clone(),
            title_ar: item.title_ar.clone(),
            price_en: item.price_en.clone(),
            price_ar: item.price_ar.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        let fields = [
            ("title_en", &self.title_en),
            ("title_ar", &self.title_ar),
            ("price_en", &self.price_en),
            ("price_ar", &self.price_ar),
        ];
        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((name, _)) => Err(format!("{} must not be empty", name)),
            None => Ok(()),
        }
    }
}

/// Query string value for `GET /api/pricing?keys=`
pub fn keys_param<'a>(keys: impl IntoIterator<Item = &'a str>) -> String {
    keys.into_iter().collect::<Vec<_>>().join(",")
}

/// Inverse of [`keys_param`]; blank segments are dropped
pub fn parse_keys_param(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_param_round_trip() {
        let param = keys_param(["party_xtreme", "party_graduation"]);
        assert_eq!(param, "party_xtreme,party_graduation");
        assert_eq!(parse_keys_param(" party_xtreme,,party_graduation "), vec!["party_xtreme", "party_graduation"]);
    }

    #[test]
    fn blank_strings_are_rejected() {
        let dto = PricingUpdateDto {
            title_en: "Xtreme Package".into(),
            title_ar: "باقة إكستريم".into(),
            price_en: " ".into(),
            price_ar: "٩٩ ر.س".into(),
        };
        assert_eq!(dto.validate(), Err("price_en must not be empty".to_string()));
    }
}
