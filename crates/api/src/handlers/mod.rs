pub mod group_assignment;
pub mod groups;
pub mod ideas;
pub mod notifications;
pub mod questions;
pub mod themes;
pub mod users;
