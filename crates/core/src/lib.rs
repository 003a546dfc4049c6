//! Domain logic for the AgriOps farm-operations backend.
//!
//! Pure types and functions only -- no I/O, no async. Persistence lives in
//! `agriops-db`, HTTP and webhook delivery in `agriops-api`.

pub mod error;
pub mod incidents;
pub mod irrigation;
pub mod notifications;
pub mod roles;
pub mod tasks;
pub mod types;
