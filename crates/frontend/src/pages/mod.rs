//! Public pages of the site, one component per `Page`

pub mod cart;
pub mod contact;
pub mod gallery;
pub mod home;
pub mod parties;
pub mod plan_visit;
pub mod school_trips;
