//! Notification banner for the latest `Notice`.

use leptos::prelude::*;

use crate::state::notice::{NoticeKind, NoticeState};

/// Renders the current notice and dismisses it after `NOTICE_TTL_MS`.
#[component]
pub fn Toast() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let shown = notices.with(|n| n.current.as_ref().map(|_| n.seq));
        if let Some(seq) = shown {
            leptos::task::spawn_local(async move {
                let ttl = u64::from(crate::state::notice::NOTICE_TTL_MS);
                gloo_timers::future::sleep(std::time::Duration::from_millis(ttl)).await;
                notices.update(|n| n.dismiss(seq));
            });
        }
    });

    view! {
        {move || {
            notices
                .get()
                .current
                .map(|notice| {
                    let class = match notice.kind {
                        NoticeKind::Success => "toast toast--success",
                        NoticeKind::Error => "toast toast--error",
                    };
                    view! {
                        <div class=class role="status">
                            {notice.text}
                        </div>
                    }
                })
        }}
    }
}
