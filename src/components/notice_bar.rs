//! Notice Bar Component

use leptos::prelude::*;

use crate::context::{AppContext, NoticeKind};

/// Transient message strip; click to dismiss
#[component]
pub fn NoticeBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.notice.get().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Info => "notice-bar",
                NoticeKind::Error => "notice-bar error",
            };
            view! {
                <div class=class role="status" on:click=move |_| ctx.dismiss()>
                    {notice.text}
                </div>
            }
        })}
    }
}
