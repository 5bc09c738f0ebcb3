use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::lang::{Language, Text};

// ============================================================================
// Inquiry type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryType {
    #[default]
    General,
    PartyBooking,
    SchoolTrip,
    Feedback,
}

impl InquiryType {
    pub const ALL: [InquiryType; 4] = [
        InquiryType::General,
        InquiryType::PartyBooking,
        InquiryType::SchoolTrip,
        InquiryType::Feedback,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InquiryType::General => "general",
            InquiryType::PartyBooking => "party_booking",
            InquiryType::SchoolTrip => "school_trip",
            InquiryType::Feedback => "feedback",
        }
    }

    /// Unknown stored values read back as `General`
    pub fn from_str_lossy(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == value)
            .unwrap_or_default()
    }

    pub fn label(self, lang: Language) -> &'static str {
        let text = match self {
            InquiryType::General => Text::new("General Question", "استفسار عام"),
            InquiryType::PartyBooking => Text::new("Party Booking", "حجز حفلة"),
            InquiryType::SchoolTrip => Text::new("School Trip", "رحلة مدرسية"),
            InquiryType::Feedback => Text::new("Feedback", "ملاحظات"),
        };
        text.get(lang)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Message left through the contact form. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInquiry {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub inquiry_type: InquiryType,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Contact form payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInquiryDto {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub inquiry_type: InquiryType,
    #[serde(default)]
    pub message: String,
}

impl ContactInquiryDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.full_name.trim().is_empty() {
            return Err("Full name is required".into());
        }
        if !self.email.contains('@') {
            return Err("A valid email is required".into());
        }
        if self.phone.trim().is_empty() {
            return Err("Phone is required".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> ContactInquiryDto {
        ContactInquiryDto {
            full_name: "Sara".into(),
            email: "sara@example.com".into(),
            phone: "0500000000".into(),
            inquiry_type: InquiryType::PartyBooking,
            message: "Saturday party for 12 kids".into(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert!(dto().validate().is_ok());
    }

    #[test]
    fn missing_fields_are_rejected() {
        let mut d = dto();
        d.full_name = "  ".into();
        assert!(d.validate().is_err());

        let mut d = dto();
        d.email = "sara".into();
        assert!(d.validate().is_err());
    }

    #[test]
    fn inquiry_type_round_trips_through_storage_string() {
        for t in InquiryType::ALL {
            assert_eq!(InquiryType::from_str_lossy(t.as_str()), t);
        }
        assert_eq!(InquiryType::from_str_lossy("spam"), InquiryType::General);
        assert_eq!(InquiryType::SchoolTrip.label(Language::Ar), "رحلة مدرسية");
    }
}
