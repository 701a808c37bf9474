//! Creator directory page: fetch once, filter by community, render cards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Anonymous browsing is allowed. The viewer's session only decides the
//! chat/upsell slot on each card and the header's sign-in/out control.

use leptos::prelude::*;

use crate::components::profile_card::ProfileCard;
use crate::state::directory::{CommunityFilter, DirectoryState, EMPTY_MESSAGE, chat_affordance};
use crate::state::session::SessionManager;
use crate::util::redirect::{DEFAULT_REDIRECT, auth_href};
use crate::util::task::TaskScope;

#[component]
pub fn ProfilesPage() -> impl IntoView {
    let session = expect_context::<SessionManager>();
    let scope = TaskScope::for_component();

    let directory = RwSignal::new(DirectoryState::default());
    let displayed = Memo::new(move |_| directory.with(DirectoryState::displayed));
    let session_state = session.state();
    let affordance = Signal::derive(move || session_state.with(|s| chat_affordance(s.user.as_ref())));

    // One fetch per mount; the component body runs once.
    #[cfg(feature = "hydrate")]
    {
        let source = expect_context::<std::sync::Arc<dyn crate::net::backend::ProfileSource>>();
        scope.spawn(async move {
            let result = crate::state::directory::load_profiles(source.as_ref()).await;
            directory.update(|d| d.apply_load(result));
        });
    }

    let logout_scope = scope.clone();
    let on_logout = move |_: leptos::ev::MouseEvent| {
        let session = session.clone();
        logout_scope.spawn(async move { session.logout().await });
    };

    view! {
        <Show
            when=move || !directory.with(DirectoryState::is_loading)
            fallback=|| view! { <div class="profiles-page profiles-page--loading"><div class="spinner"></div></div> }
        >
            <div class="profiles-page">
                <header class="profiles-page__header">
                    <h1>"Discover Creators"</h1>
                    <label class="profiles-page__filter">
                        <span class="profiles-page__filter-icon" aria-hidden="true">"⚲"</span>
                        <select
                            prop:value=move || directory.with(|d| d.filter.label().to_owned())
                            on:change=move |ev| {
                                let filter = CommunityFilter::from_label(&event_target_value(&ev));
                                directory.update(|d| d.set_filter(filter));
                            }
                        >
                            {CommunityFilter::options()
                                .map(|option| view! { <option value=option.label()>{option.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <span class="profiles-page__viewer">
                        {
                            let on_logout = on_logout.clone();
                            move || match session_state.get().user {
                                Some(user) => {
                                    let on_logout = on_logout.clone();
                                    view! {
                                        <span class="profiles-page__viewer-name">{user.name}</span>
                                        <button class="btn profiles-page__logout" on:click=on_logout>
                                            "Logout"
                                        </button>
                                    }
                                        .into_any()
                                }
                                None => {
                                    view! {
                                        <a class="btn profiles-page__signin" href=auth_href(DEFAULT_REDIRECT)>
                                            "Sign in"
                                        </a>
                                    }
                                        .into_any()
                                }
                            }
                        }
                    </span>
                </header>

                <Show when=move || directory.with(|d| d.error().is_some())>
                    <p class="profiles-page__error" role="alert">
                        {move || directory.with(|d| d.error().unwrap_or_default().to_owned())}
                    </p>
                </Show>

                <div class="profiles-page__grid">
                    {move || {
                        displayed
                            .get()
                            .into_iter()
                            .map(|profile| view! { <ProfileCard profile=profile affordance=affordance/> })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <Show when=move || directory.with(DirectoryState::is_empty_view)>
                    <div class="profiles-page__empty">
                        <p>{EMPTY_MESSAGE}</p>
                    </div>
                </Show>
            </div>
        </Show>
    }
}
