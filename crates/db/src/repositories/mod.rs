//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod analytics_repo;
pub mod formation_repo;
pub mod group_repo;
pub mod idea_repo;
pub mod notification_repo;
pub mod question_repo;
pub mod review_repo;
pub mod theme_repo;
pub mod user_repo;
pub mod vote_repo;

pub use analytics_repo::AnalyticsRepo;
pub use formation_repo::FormationRepo;
pub use group_repo::GroupRepo;
pub use idea_repo::IdeaRepo;
pub use notification_repo::NotificationRepo;
pub use question_repo::QuestionRepo;
pub use review_repo::ReviewRepo;
pub use theme_repo::ThemeRepo;
pub use user_repo::UserRepo;
pub use vote_repo::VoteRepo;
