use chrono::Utc;
use contracts::domain::a001_contact_inquiry::aggregate::{ContactInquiry, ContactInquiryDto, InquiryType};
use contracts::shared::listing::Listing;
use sea_orm::entity::prelude::*;
use sea_orm::{DatabaseConnection, QueryOrder, Set};

use crate::shared::data::gateway::{fetch_listing, TableResult};
use crate::shared::data::schema::CONTACTS;
use crate::shared::error::AppResult;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "contacts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub inquiry_type: String,
    pub message: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ContactInquiry {
    fn from(m: Model) -> Self {
        ContactInquiry {
            id: m.id,
            full_name: m.full_name,
            email: m.email,
            phone: m.phone,
            inquiry_type: InquiryType::from_str_lossy(&m.inquiry_type),
            message: m.message,
            created_at: m.created_at,
        }
    }
}

pub async fn insert(db: &DatabaseConnection, dto: &ContactInquiryDto) -> AppResult<ContactInquiry> {
    let active = ActiveModel {
        full_name: Set(dto.full_name.trim().to_string()),
        email: Set(dto.email.trim().to_string()),
        phone: Set(dto.phone.trim().to_string()),
        inquiry_type: Set(dto.inquiry_type.as_str().to_string()),
        message: Set(dto.message.trim().to_string()),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    let model = active.insert(db).await.for_table(CONTACTS)?;
    Ok(model.into())
}

/// Newest first
pub async fn list(db: &DatabaseConnection) -> AppResult<Listing<ContactInquiry>> {
    let select = Entity::find()
        .order_by_desc(Column::CreatedAt)
        .order_by_desc(Column::Id);
    let listing = fetch_listing(db, CONTACTS, select).await?;
    Ok(listing.map(Into::into))
}
