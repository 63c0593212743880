//! In-memory view router
//!
//! The site is one page; the current panel is a signal, not a URL.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Home,
    Mission,
    Tokenomics,
    Whitepaper,
    Governance,
    Apply,
    Presale,
    HowToPurchase,
    Privacy,
    Terms,
}

/// Pages linked from the header, in display order.
pub const NAV_PAGES: &[Page] = &[
    Page::Home,
    Page::Mission,
    Page::Tokenomics,
    Page::Whitepaper,
    Page::Governance,
    Page::Presale,
    Page::HowToPurchase,
    Page::Apply,
];

/// Pages linked from the footer.
pub const LEGAL_PAGES: &[Page] = &[Page::Privacy, Page::Terms];

impl Page {
    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Mission => "Mission",
            Page::Tokenomics => "Tokenomics",
            Page::Whitepaper => "White Paper",
            Page::Governance => "Governance",
            Page::Apply => "Apply",
            Page::Presale => "Presale",
            Page::HowToPurchase => "How to Buy",
            Page::Privacy => "Privacy Policy",
            Page::Terms => "Terms & Conditions",
        }
    }
}

/// Global view context
#[derive(Clone, Copy)]
pub struct ViewContext {
    pub page: RwSignal<Page>,
    pub menu_open: RwSignal<bool>,
}

impl ViewContext {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(Page::default()),
            menu_open: RwSignal::new(false),
        }
    }

    /// Show `page` and close the mobile menu.
    pub fn navigate(&self, page: Page) {
        log::debug!("Navigating to {:?}", page);
        self.page.set(page);
        self.menu_open.set(false);
    }

    pub fn toggle_menu(&self) {
        self.menu_open.update(|open| *open = !*open);
    }

    pub fn is_current(&self, page: Page) -> bool {
        self.page.get() == page
    }
}

pub fn provide_view_context() -> ViewContext {
    let context = ViewContext::new();
    provide_context(context);
    context
}

pub fn use_view_context() -> ViewContext {
    expect_context::<ViewContext>()
}
