//! UI Components

pub mod address_box;
pub mod countdown;
pub mod footer;
pub mod navbar;
pub mod notice;
pub mod wallet_button;

pub use address_box::AddressBox;
pub use countdown::CountdownGrid;
pub use footer::Footer;
pub use navbar::Navbar;
pub use notice::NoticeToast;
pub use wallet_button::WalletButton;
