//! Server application core modules.
//!
//! This module contains all server-side functionality for the Stockyard
//! inventory API: HTTP routing, request controllers, per-entity services and
//! repositories, configuration, and error handling. Requests are handled
//! statelessly; the only shared state is the database connection pool held
//! in [`model::app::AppState`].

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
