pub mod field;
pub mod incident;
pub mod irrigation_log;
pub mod notification_log;
pub mod task;
pub mod user;
