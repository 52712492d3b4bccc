// Shared fakes for the behavior tests
pub mod common;

mod theme;
