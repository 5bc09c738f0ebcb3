use super::aggregate::PricingItem;
use crate::shared::catalog::PricingCard;

/// Overrides bundled card strings with live pricing rows.
///
/// A row with a key only matches the card with that key. A row without a
/// key matches the first card whose default English title and the row's
/// English title contain one another, ignoring case.
pub fn apply_overlay(cards: &mut [PricingCard], rows: &[PricingItem]) {
    for card in cards.iter_mut() {
        let default_title = card.title_en.to_lowercase();
        let row = rows
            .iter()
            .find(|row| row.key == card.key)
            .or_else(|| {
                rows.iter()
                    .filter(|row| row.key.is_empty())
                    .find(|row| titles_overlap(&row.title_en.to_lowercase(), &default_title))
            });

        if let Some(row) = row {
            overwrite(card, row);
        }
    }
}

fn titles_overlap(row_title: &str, card_title: &str) -> bool {
    if row_title.trim().is_empty() {
        return false;
    }
    row_title.contains(card_title) || card_title.contains(row_title)
}

fn overwrite(card: &mut PricingCard, row: &PricingItem) {
    card.title_en = row.title_en.clone();
    card.title_ar = row.title_ar.clone();
    card.price_en = row.price_en.clone();
    card.price_ar = row.price_ar.clone();
    if let Some(amount) = leading_amount(&row.price_en) {
        card.unit_price = amount;
    }
}

/// Leading integer of a display price such as `"99 / 139 SR"`
pub fn leading_amount(price: &str) -> Option<i64> {
    let digits: String = price
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog::{party_packages, school_trip_packages, KEY_PARTY_GRADUATION};

    fn row(key: &str, title_en: &str, price_en: &str) -> PricingItem {
        PricingItem {
            id: 1,
            key: key.into(),
            title_en: title_en.into(),
            title_ar: "عنوان".into(),
            price_en: price_en.into(),
            price_ar: "سعر".into(),
            updated_at: None,
        }
    }

    #[test]
    fn keyed_row_overrides_only_its_card() {
        let mut cards = party_packages();
        apply_overlay(&mut cards, &[row(KEY_PARTY_GRADUATION, "Graduation Deluxe", "159 SR")]);

        assert_eq!(cards[0].title_en, "Xtreme Package");
        assert_eq!(cards[1].title_en, "Graduation Deluxe");
        assert_eq!(cards[1].price_en, "159 SR");
        assert_eq!(cards[1].unit_price, 159);
    }

    #[test]
    fn unkeyed_row_matches_by_title_substring() {
        let mut cards = school_trip_packages();
        apply_overlay(&mut cards, &[row("", "XTREME TRIP (spring)", "85 SR / Student")]);

        assert_eq!(cards[0].price_en, "85 SR / Student");
        assert_eq!(cards[0].unit_price, 85);
    }

    #[test]
    fn unrelated_rows_leave_defaults() {
        let mut cards = party_packages();
        let before = cards.clone();
        apply_overlay(&mut cards, &[row("", "Birthday Bash", "200 SR"), row("", "", "1 SR")]);
        assert_eq!(cards, before);
    }

    #[test]
    fn non_numeric_price_keeps_cart_price() {
        let mut cards = party_packages();
        apply_overlay(&mut cards, &[row("party_xtreme", "Xtreme Package", "Call us")]);
        assert_eq!(cards[0].price_en, "Call us");
        assert_eq!(cards[0].unit_price, 99);
    }

    #[test]
    fn leading_amount_reads_first_number() {
        assert_eq!(leading_amount("99 / 139 SR"), Some(99));
        assert_eq!(leading_amount("  125 SR"), Some(125));
        assert_eq!(leading_amount("SR 125"), None);
    }
}
