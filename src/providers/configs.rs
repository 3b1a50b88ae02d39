pub mod azure;
pub mod base;
