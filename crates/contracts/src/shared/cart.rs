use serde::{Deserialize, Serialize};

use super::lang::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Ticket,
    Package,
}

/// One cart line. Serialized in the shape stored inside order snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub name_en: String,
    pub name_ar: String,
    /// Unit price in SR
    pub price: i64,
    pub quantity: u32,
    #[serde(rename = "type")]
    pub kind: ItemKind,
}

impl CartItem {
    pub fn new(
        id: impl Into<String>,
        name_en: impl Into<String>,
        name_ar: impl Into<String>,
        price: i64,
        kind: ItemKind,
    ) -> Self {
        Self {
            id: id.into(),
            name_en: name_en.into(),
            name_ar: name_ar.into(),
            price,
            quantity: 1,
            kind,
        }
    }

    pub fn name(&self, lang: Language) -> &str {
        lang.pick(&self.name_en, &self.name_ar)
    }

    /// `price × quantity`, saturating at the `i64` bounds
    pub fn line_total(&self) -> i64 {
        self.price.saturating_mul(i64::from(self.quantity))
    }

    /// `None` when `price × quantity` does not fit in an `i64`
    pub fn checked_line_total(&self) -> Option<i64> {
        self.price.checked_mul(i64::from(self.quantity))
    }
}

/// Sum of `price × quantity` over the given lines, saturating on overflow
pub fn cart_total(items: &[CartItem]) -> i64 {
    items
        .iter()
        .map(CartItem::line_total)
        .fold(0i64, i64::saturating_add)
}

/// Exact cart total, or `None` if any product or the sum overflows
pub fn checked_cart_total(items: &[CartItem]) -> Option<i64> {
    items
        .iter()
        .try_fold(0i64, |acc, item| acc.checked_add(item.checked_line_total()?))
}

/// Ordered collection of cart lines, at most one line per item id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the quantity of an existing line, otherwise appends the
    /// item with quantity 1.
    pub fn add(&mut self, item: CartItem) {
        match self.items.iter_mut().find(|line| line.id == item.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.items.push(CartItem { quantity: 1, ..item }),
        }
    }

    pub fn remove(&mut self, id: &str) {
        self.items.retain(|line| line.id != id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units, shown in the header badge
    pub fn count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    pub fn total(&self) -> i64 {
        cart_total(&self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xtreme() -> CartItem {
        CartItem::new("party-xtreme-package", "Xtreme Package", "باقة إكستريم", 99, ItemKind::Package)
    }

    fn weekday() -> CartItem {
        CartItem::new("ticket-weekday", "Weekday Ticket", "تذكرة أيام الأسبوع", 89, ItemKind::Ticket)
    }

    #[test]
    fn adding_same_id_twice_increments_quantity() {
        let mut cart = Cart::new();
        cart.add(xtreme());
        cart.add(xtreme());

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn oversized_totals_are_detected() {
        let mut huge = xtreme();
        huge.price = i64::MAX;
        huge.quantity = 2;
        assert_eq!(huge.checked_line_total(), None);
        assert_eq!(huge.line_total(), i64::MAX);

        let mut half = weekday();
        half.price = i64::MAX / 2 + 1;
        assert_eq!(checked_cart_total(&[half.clone(), half.clone()]), None);
        assert_eq!(cart_total(&[half.clone(), half]), i64::MAX);

        let mut two = xtreme();
        two.quantity = 2;
        assert_eq!(checked_cart_total(&[two, weekday()]), Some(99 * 2 + 89));
    }

    #[test]
    fn insertion_order_is_kept() {
        let mut cart = Cart::new();
        cart.add(weekday());
        cart.add(xtreme());
        cart.add(weekday());

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["ticket-weekday", "party-xtreme-package"]);
    }

    #[test]
    fn removing_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(weekday());
        let before = cart.clone();

        cart.remove("ticket-weekend");
        assert_eq!(cart, before);
    }

    #[test]
    fn total_is_sum_of_lines() {
        let mut cart = Cart::new();
        assert_eq!(cart.total(), 0);

        cart.add(weekday());
        cart.add(xtreme());
        cart.add(xtreme());
        assert_eq!(cart.total(), 89 + 99 * 2);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn serializes_with_snapshot_keys() {
        let json = serde_json::to_value(weekday()).unwrap();
        assert_eq!(json["nameEn"], "Weekday Ticket");
        assert_eq!(json["type"], "ticket");
        assert_eq!(json["quantity"], 1);
    }
}
