pub mod cards;
pub mod editor;
