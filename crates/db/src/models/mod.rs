//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches
//!
//! Modules whose entity is the parent side of a `LEFT JOIN` also define the
//! typed join row and the nested record it aggregates into.

pub mod category;
pub mod disposal;
pub mod recycling_tip;
pub mod waste;
