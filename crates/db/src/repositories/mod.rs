mod field_repo;
mod incident_repo;
mod irrigation_log_repo;
mod notification_log_repo;
mod summary_repo;
mod task_repo;
mod user_repo;

pub use field_repo::FieldRepo;
pub use incident_repo::IncidentRepo;
pub use irrigation_log_repo::IrrigationLogRepo;
pub use notification_log_repo::NotificationLogRepo;
pub use summary_repo::{DailySummary, SummaryRepo};
pub use task_repo::TaskRepo;
pub use user_repo::UserRepo;
