pub mod filter;
pub mod model;
pub mod overlap;
pub mod store;
pub mod validation;
