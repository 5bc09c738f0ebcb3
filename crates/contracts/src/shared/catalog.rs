//! Bundled bilingual content of the site.
//!
//! Every pricing-sensitive card carries a stable `key` used by the pricing
//! overlay and a `cart_id` used when the card is added to the cart.

use super::cart::{CartItem, ItemKind};
use super::lang::{Language, Text};

// ============================================================================
// Pricing cards
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct PricingCard {
    pub key: &'static str,
    pub cart_id: &'static str,
    pub kind: ItemKind,
    pub title_en: String,
    pub title_ar: String,
    pub price_en: String,
    pub price_ar: String,
    /// Price charged in the cart, in SR
    pub unit_price: i64,
    pub features: Vec<Text>,
    pub best_value: bool,
}

impl PricingCard {
    fn new(
        key: &'static str,
        cart_id: &'static str,
        kind: ItemKind,
        title: Text,
        price: Text,
        unit_price: i64,
    ) -> Self {
        Self {
            key,
            cart_id,
            kind,
            title_en: title.en.to_string(),
            title_ar: title.ar.to_string(),
            price_en: price.en.to_string(),
            price_ar: price.ar.to_string(),
            unit_price,
            features: Vec::new(),
            best_value: false,
        }
    }

    fn with_features(mut self, features: &[Text]) -> Self {
        self.features = features.to_vec();
        self
    }

    fn best_value(mut self) -> Self {
        self.best_value = true;
        self
    }

    pub fn title(&self, lang: Language) -> &str {
        lang.pick(&self.title_en, &self.title_ar)
    }

    pub fn price(&self, lang: Language) -> &str {
        lang.pick(&self.price_en, &self.price_ar)
    }

    pub fn to_cart_item(&self) -> CartItem {
        CartItem::new(
            self.cart_id,
            self.title_en.clone(),
            self.title_ar.clone(),
            self.unit_price,
            self.kind,
        )
    }
}

pub const KEY_TICKET_WEEKDAY: &str = "ticket_weekday";
pub const KEY_TICKET_WEEKEND: &str = "ticket_weekend";
pub const KEY_PARTY_XTREME: &str = "party_xtreme";
pub const KEY_PARTY_GRADUATION: &str = "party_graduation";
pub const KEY_SCHOOL_XTREME: &str = "school_xtreme";

pub fn ticket_cards() -> Vec<PricingCard> {
    vec![
        PricingCard::new(
            KEY_TICKET_WEEKDAY,
            "ticket-weekday",
            ItemKind::Ticket,
            Text::new("Weekdays", "أيام الأسبوع"),
            Text::new("89 SR", "٨٩ ر.س"),
            89,
        ),
        PricingCard::new(
            KEY_TICKET_WEEKEND,
            "ticket-weekend",
            ItemKind::Ticket,
            Text::new("Weekends & Holidays", "الويكند والإجازات"),
            Text::new("125 SR", "١٢٥ ر.س"),
            125,
        ),
    ]
}

pub fn party_packages() -> Vec<PricingCard> {
    vec![
        PricingCard::new(
            KEY_PARTY_XTREME,
            "party-xtreme-package",
            ItemKind::Package,
            Text::new("Xtreme Package", "باقة إكستريم"),
            Text::new("99 / 139 SR", "٩٩ / ١٣٩ ر.س"),
            99,
        )
        .with_features(&[
            Text::new("Themed party room", "غرفة حفلات بطابع خاص"),
            Text::new("Full day access to trampoline area", "دخول طوال اليوم لمنطقة الترامبولين"),
            Text::new("Private party room for two hours", "غرفة حفلات خاصة لمدة ساعتين"),
            Text::new("Dedicated party host", "مضيف حفلات مخصص"),
            Text::new("Popcorn & Kids meal with juice", "فشار ووجبة أطفال مع عصير"),
            Text::new("Xtreme Play E-card invitation", "بطاقة دعوة إلكترونية"),
        ])
        .best_value(),
        PricingCard::new(
            KEY_PARTY_GRADUATION,
            "party-graduation-package",
            ItemKind::Package,
            Text::new("Graduation Package", "باقة التخرج"),
            Text::new("139 SR", "١٣٩ ر.س"),
            139,
        )
        .with_features(&[
            Text::new("Themed party room (graduation)", "غرفة حفلات (طابع تخرج)"),
            Text::new("Full day access to trampoline area", "دخول طوال اليوم لمنطقة الترامبولين"),
            Text::new("Private party room for one hour", "غرفة حفلات خاصة لمدة ساعة"),
            Text::new("Dedicated Entertainer", "منشط مخصص"),
            Text::new("Gift and certificate for each kid", "هدية وشهادة لكل طفل"),
            Text::new("Kids meal with juice and water", "وجبة أطفال مع عصير وماء"),
        ]),
    ]
}

pub fn school_trip_packages() -> Vec<PricingCard> {
    vec![PricingCard::new(
        KEY_SCHOOL_XTREME,
        "trip-xtreme-trip",
        ItemKind::Package,
        Text::new("Xtreme Trip", "رحلة إكستريم"),
        Text::new("79 SR / Student", "٧٩ ر.س / طالب"),
        79,
    )
    .with_features(&[
        Text::new("Three hours trip", "رحلة لمدة ثلاث ساعات"),
        Text::new("Access to trampoline and inflatables area", "دخول لمنطقة الترامبولين والمنفوخات"),
        Text::new("Games and Challenges with coach", "ألعاب وتحديات مع مدرب"),
        Text::new("Xtreme Play Socks", "جوارب إكستريم بلاي"),
        Text::new("Kids meal with juice", "وجبة أطفال مع عصير"),
        Text::new("10% discount for teachers", "خصم ١٠٪ للمعلمين والمشرفين"),
    ])
    .best_value()]
}

/// Every bundled pricing card, in the order the pricing rows are seeded
pub fn all_pricing_cards() -> Vec<PricingCard> {
    let mut cards = ticket_cards();
    cards.extend(party_packages());
    cards.extend(school_trip_packages());
    cards
}

// ============================================================================
// Gallery, contact details, opening hours
// ============================================================================

/// Shown whenever the gallery collection is empty or unreachable
pub const GALLERY_FALLBACK: &[&str] = &[
    "https://picsum.photos/id/1012/800/600",
    "https://picsum.photos/id/1025/800/600",
    "https://picsum.photos/id/1043/800/600",
    "https://picsum.photos/id/1050/800/600",
    "https://picsum.photos/id/1062/800/600",
    "https://picsum.photos/id/1074/800/600",
    "https://picsum.photos/id/1084/800/600",
    "https://picsum.photos/id/11/800/600",
];

pub const ADDRESS: Text = Text::new("1st Floor Sultan Mall, Jeddah, KSA", "الطابق الأول، سلطان مول، جدة، المملكة العربية السعودية");
pub const PHONE: &str = "+966 800 244 0306";
pub const EMAIL: &str = "info@xtremeplay.sa";
pub const WHATSAPP_URL: &str = "https://wa.me/9668002440306";
pub const MAPS_URL: &str = "https://maps.google.com";

pub struct OpeningHours {
    pub days: Text,
    pub hours: &'static str,
}

pub const OPENING_HOURS: &[OpeningHours] = &[
    OpeningHours { days: Text::new("Sat - Wed", "السبت - الأربعاء"), hours: "3 PM - 11 PM" },
    OpeningHours { days: Text::new("Thu - Fri", "الخميس - الجمعة"), hours: "3 PM - 12 AM" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_and_cart_ids_are_unique() {
        let cards = all_pricing_cards();
        let keys: HashSet<_> = cards.iter().map(|c| c.key).collect();
        let ids: HashSet<_> = cards.iter().map(|c| c.cart_id).collect();
        assert_eq!(keys.len(), cards.len());
        assert_eq!(ids.len(), cards.len());
    }

    #[test]
    fn xtreme_package_is_best_value_at_99() {
        let parties = party_packages();
        assert!(parties[0].best_value);
        assert_eq!(parties[0].to_cart_item().price, 99);
        assert_eq!(parties[0].to_cart_item().kind, ItemKind::Package);
        assert_eq!(parties[0].features.len(), 6);
    }

    #[test]
    fn tickets_are_ticket_kind() {
        assert!(ticket_cards().iter().all(|c| c.kind == ItemKind::Ticket));
        assert_eq!(ticket_cards()[1].price(Language::En), "125 SR");
    }

    #[test]
    fn gallery_fallback_has_eight_images() {
        assert_eq!(GALLERY_FALLBACK.len(), 8);
    }
}
