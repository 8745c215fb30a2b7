pub mod date;
pub mod discipline;
pub mod material;
pub mod tool;
pub mod transaction;
pub mod util;
