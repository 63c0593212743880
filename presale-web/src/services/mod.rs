//! Browser services

pub mod clipboard;
pub mod ethereum;

pub use ethereum::BrowserProvider;
