pub mod category;
pub mod disposal;
pub mod recycling_tip;
pub mod waste;
