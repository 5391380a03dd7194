pub mod format;
pub mod grid;
pub mod holidays;
