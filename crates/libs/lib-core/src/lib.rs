//! # Core Library
//!
//! Presale configuration, the error type shared by the libraries, and the
//! static presale and tokenomics model rendered by the site.

pub mod config;
pub mod error;
pub mod model;

// Re-export commonly used types
pub use config::{core_config, init_config, Config};
pub use error::{AppError, Result};
pub use model::presale::{PaymentMethod, PresaleTerms, SocialLink};
pub use model::tokenomics::{Allocation, ALLOCATIONS};
