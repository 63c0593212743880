//! Transient notice toast

use leptos::prelude::*;

use crate::state::notice::{use_notice_context, NoticeKind};

#[component]
pub fn NoticeToast() -> impl IntoView {
    let notices = use_notice_context();

    move || {
        notices.current.get().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Error => "notice notice-error",
                NoticeKind::Info => "notice notice-info",
            };
            view! {
                <div class=class role="alert" on:click=move |_| notices.dismiss()>
                    {notice.text}
                </div>
            }
        })
    }
}
