
/// Main memory tests.
pub mod ram;
