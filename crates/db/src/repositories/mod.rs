//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Joined reads decode into the
//! typed row structs from [`crate::models`] and are folded into nested
//! records with [`waste_sorting_core::aggregate`].

pub mod category_repo;
pub mod disposal_repo;
pub mod recycling_tip_repo;
pub mod waste_repo;

pub use category_repo::CategoryRepo;
pub use disposal_repo::DisposalRepo;
pub use recycling_tip_repo::RecyclingTipRepo;
pub use waste_repo::WasteRepo;
