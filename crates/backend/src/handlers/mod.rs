pub mod a001_contact_inquiry;
pub mod a002_gallery_image;
pub mod a003_pricing_item;
pub mod a004_order;
