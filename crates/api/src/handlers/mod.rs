pub mod auth;
pub mod fields;
pub mod incidents;
pub mod internal;
pub mod irrigation;
pub mod tasks;
pub mod users;
