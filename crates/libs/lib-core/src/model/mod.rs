//! Static presale model rendered by the site.

pub mod presale;
pub mod tokenomics;
