use contracts::domain::a001_contact_inquiry::aggregate::{ContactInquiry, ContactInquiryDto};
use contracts::shared::listing::Listing;
use sea_orm::DatabaseConnection;

use super::repository;
use crate::shared::error::{AppError, AppResult};

pub async fn create(db: &DatabaseConnection, dto: ContactInquiryDto) -> AppResult<ContactInquiry> {
    dto.validate().map_err(AppError::Validation)?;
    let inquiry = repository::insert(db, &dto).await?;
    tracing::info!(
        "Contact inquiry {} received ({})",
        inquiry.id,
        inquiry.inquiry_type.as_str()
    );
    Ok(inquiry)
}

pub async fn list(db: &DatabaseConnection) -> AppResult<Listing<ContactInquiry>> {
    repository::list(db).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;
    use contracts::domain::a001_contact_inquiry::aggregate::InquiryType;

    fn dto(name: &str) -> ContactInquiryDto {
        ContactInquiryDto {
            full_name: name.into(),
            email: "guest@example.com".into(),
            phone: "0500000000".into(),
            inquiry_type: InquiryType::SchoolTrip,
            message: "Trip for grade 4".into(),
        }
    }

    #[tokio::test]
    async fn inquiries_are_listed_newest_first() {
        let db = connect_in_memory(true).await;
        create(&db, dto("First")).await.unwrap();
        create(&db, dto("Second")).await.unwrap();

        let listing = list(&db).await.unwrap();
        assert_eq!(listing.total, 2);
        assert_eq!(listing.items[0].full_name, "Second");
        assert_eq!(listing.items[1].inquiry_type, InquiryType::SchoolTrip);
    }

    #[tokio::test]
    async fn invalid_inquiry_is_rejected() {
        let db = connect_in_memory(true).await;
        let err = create(&db, dto("  ")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(list(&db).await.unwrap().total, 0);
    }

    #[tokio::test]
    async fn unprovisioned_contacts_report_table() {
        let db = connect_in_memory(false).await;
        let err = create(&db, dto("Guest")).await.unwrap_err();
        assert!(matches!(err, AppError::NotProvisioned { ref table } if table == "contacts"));
    }
}
