#[cfg(feature = "cli")]
pub mod driver;
pub mod output;
