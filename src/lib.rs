pub mod marker;
pub mod prompt;
pub mod providers;
pub mod session;
