//! Internal server-side records.
//!
//! Plain value types passed between services and repositories: new-record
//! and change-set structs for writes, and typed filters for listings. These
//! deliberately carry no persistence behavior; repositories own the mapping
//! to the store.

pub mod app;
pub mod date;
pub mod discipline;
pub mod material;
pub mod query;
pub mod tool;
pub mod transaction;
