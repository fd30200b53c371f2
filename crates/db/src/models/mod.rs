//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) where rows are patchable

pub mod group;
pub mod idea;
pub mod notification;
pub mod question;
pub mod review;
pub mod theme;
pub mod user;
pub mod vote;
