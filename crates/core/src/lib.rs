//! Domain types and pure logic for the team-formation service.
//!
//! This crate has no database or HTTP dependencies. The group assignment
//! engine talks to persistence only through [`assignment::FormationStore`].

pub mod analytics;
pub mod assignment;
pub mod error;
pub mod pagination;
pub mod review;
pub mod roles;
pub mod theme;
pub mod types;
