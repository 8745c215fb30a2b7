pub mod fixture;
pub mod setup;
