//! Presale site root component
//!
//! Provides the shared contexts and swaps the visible panel on navigation.

use leptos::prelude::*;

use crate::components::{Footer, Navbar, NoticeToast};
use crate::pages::{
    ApplyPage, GovernancePage, HomePage, HowToPurchasePage, MissionPage, PresalePage, PrivacyPage,
    TermsPage, TokenomicsPage, WhitepaperPage,
};
use crate::state::notice::provide_notice_context;
use crate::state::view::{provide_view_context, Page};
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App() -> impl IntoView {
    let notices = provide_notice_context();
    let view_ctx = provide_view_context();
    provide_wallet_context(notices);

    // Backup for when the loading element was added after main() ran
    Effect::new(move || crate::hide_loading_screen());

    view! {
        <div class="app-container">
            <Navbar/>
            <main class="content">
                {move || match view_ctx.page.get() {
                    Page::Home => view! { <HomePage/> }.into_any(),
                    Page::Mission => view! { <MissionPage/> }.into_any(),
                    Page::Tokenomics => view! { <TokenomicsPage/> }.into_any(),
                    Page::Whitepaper => view! { <WhitepaperPage/> }.into_any(),
                    Page::Governance => view! { <GovernancePage/> }.into_any(),
                    Page::Apply => view! { <ApplyPage/> }.into_any(),
                    Page::Presale => view! { <PresalePage/> }.into_any(),
                    Page::HowToPurchase => view! { <HowToPurchasePage/> }.into_any(),
                    Page::Privacy => view! { <PrivacyPage/> }.into_any(),
                    Page::Terms => view! { <TermsPage/> }.into_any(),
                }}
            </main>
            <Footer/>
            <NoticeToast/>
        </div>
    }
}
