use contracts::domain::a003_pricing_item::aggregate::{PricingItem, PricingUpdateDto};
use sea_orm::DatabaseConnection;

use super::repository;
use crate::shared::data::schema::pricing_provisioning_sql;
use crate::shared::error::{AppError, AppResult};

pub async fn list(db: &DatabaseConnection, keys: &[String]) -> AppResult<Vec<PricingItem>> {
    repository::list(db, keys).await
}

pub async fn update(db: &DatabaseConnection, id: i64, dto: PricingUpdateDto) -> AppResult<PricingItem> {
    dto.validate().map_err(AppError::Validation)?;
    let item = repository::update(db, id, &dto).await?;
    tracing::info!("Pricing row {} ({}) now reads {}", item.id, item.key, item.price_en);
    Ok(item)
}

/// SQL shown on the admin pricing tab while the collection is missing
pub fn provisioning_sql() -> String {
    pricing_provisioning_sql()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_pricing_item::overlay::apply_overlay;
    use contracts::shared::catalog::{
        all_pricing_cards, party_packages, KEY_PARTY_GRADUATION, KEY_PARTY_XTREME,
    };
    use sea_orm::ConnectionTrait;

    use crate::shared::data::db::connect_in_memory;

    #[tokio::test]
    async fn every_card_is_seeded_once() {
        let db = connect_in_memory(true).await;
        let rows = list(&db, &[]).await.unwrap();
        assert_eq!(rows.len(), all_pricing_cards().len());

        // a second bootstrap keeps the existing rows
        crate::shared::data::schema::bootstrap(&db, true).await.unwrap();
        assert_eq!(list(&db, &[]).await.unwrap().len(), rows.len());
    }

    #[tokio::test]
    async fn keys_filter_rows() {
        let db = connect_in_memory(true).await;
        let rows = list(&db, &[KEY_PARTY_XTREME.to_string()]).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title_en, "Xtreme Package");
    }

    #[tokio::test]
    async fn unkeyed_row_is_returned_with_keyed_lookup_and_matches_by_title() {
        let db = connect_in_memory(true).await;
        db.execute_unprepared(&format!(
            "DELETE FROM pricing WHERE \"key\" = '{}'",
            KEY_PARTY_GRADUATION
        ))
        .await
        .unwrap();
        db.execute_unprepared(
            "INSERT INTO pricing (\"key\", title_en, title_ar, price_en, price_ar) \
             VALUES ('', 'Graduation Package', 'باقة التخرج', '777 SR', '٧٧٧ ريال')",
        )
        .await
        .unwrap();

        let mut cards = party_packages();
        let keys: Vec<String> = cards.iter().map(|c| c.key.to_string()).collect();
        let rows = list(&db, &keys).await.unwrap();
        assert!(rows.iter().any(|r| r.key.is_empty() && r.title_en == "Graduation Package"));

        apply_overlay(&mut cards, &rows);
        let graduation = cards.iter().find(|c| c.key == KEY_PARTY_GRADUATION).unwrap();
        assert_eq!(graduation.price_en, "777 SR");
        assert_eq!(graduation.unit_price, 777);
        let xtreme = cards.iter().find(|c| c.key == KEY_PARTY_XTREME).unwrap();
        assert_eq!(xtreme.title_en, "Xtreme Package");
    }

    #[tokio::test]
    async fn edited_price_reaches_public_cards() {
        let db = connect_in_memory(true).await;
        let row = list(&db, &[KEY_PARTY_XTREME.to_string()]).await.unwrap().remove(0);

        let mut dto = PricingUpdateDto::from_item(&row);
        dto.price_en = "109 / 149 SR".into();
        let updated = update(&db, row.id, dto).await.unwrap();
        assert!(updated.updated_at.is_some());

        let mut cards = party_packages();
        apply_overlay(&mut cards, &list(&db, &[]).await.unwrap());
        assert_eq!(cards[0].price_en, "109 / 149 SR");
        assert_eq!(cards[0].unit_price, 109);
    }

    #[tokio::test]
    async fn missing_table_is_reported_not_provisioned() {
        let db = connect_in_memory(false).await;
        let err = list(&db, &[]).await.unwrap_err();
        assert!(matches!(err, AppError::NotProvisioned { ref table } if table == "pricing"));
        assert!(provisioning_sql().contains("CREATE TABLE IF NOT EXISTS pricing"));
    }
}
