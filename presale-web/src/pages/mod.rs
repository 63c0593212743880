//! Static content panels

pub mod apply;
pub mod governance;
pub mod home;
pub mod how_to_purchase;
pub mod legal;
pub mod presale;
pub mod tokenomics;
pub mod whitepaper;

pub use apply::ApplyPage;
pub use governance::GovernancePage;
pub use home::{HomePage, MissionPage};
pub use how_to_purchase::HowToPurchasePage;
pub use legal::{PrivacyPage, TermsPage};
pub use presale::PresalePage;
pub use tokenomics::TokenomicsPage;
pub use whitepaper::WhitepaperPage;
