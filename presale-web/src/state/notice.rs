//! Transient notices
//!
//! Wallet failures are reported through a single auto-dismissing message.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::utils::constants::NOTICE_DISMISS_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// Global notice context
#[derive(Clone, Copy)]
pub struct NoticeContext {
    pub current: RwSignal<Option<Notice>>,
    next_id: StoredValue<u64>,
}

impl NoticeContext {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            next_id: StoredValue::new(0),
        }
    }

    pub fn info(&self, text: impl Into<String>) {
        self.show(NoticeKind::Info, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(NoticeKind::Error, text.into());
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }

    /// Replace the current notice; it clears itself after [`NOTICE_DISMISS_MS`]
    /// unless a newer one took its place.
    fn show(&self, kind: NoticeKind, text: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        match kind {
            NoticeKind::Error => log::warn!("Notice: {}", text),
            NoticeKind::Info => log::info!("Notice: {}", text),
        }
        self.current.set(Some(Notice { id, kind, text }));

        let current = self.current;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(NOTICE_DISMISS_MS).await;
            let still_shown = current
                .try_with_untracked(|n| n.as_ref().map(|n| n.id) == Some(id))
                .unwrap_or(false);
            if still_shown {
                let _ = current.try_set(None);
            }
        });
    }
}

pub fn provide_notice_context() -> NoticeContext {
    let context = NoticeContext::new();
    provide_context(context);
    context
}

pub fn use_notice_context() -> NoticeContext {
    expect_context::<NoticeContext>()
}
