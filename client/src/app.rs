//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::toast::Toast;
use crate::net::backend::{HttpBackend, ProfileSource};
use crate::pages::{auth::AuthPage, profiles::ProfilesPage};
use crate::state::notice::NoticeState;
use crate::state::session::SessionManager;
use crate::util::redirect::DEFAULT_REDIRECT;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Creates the session manager and notice store once, provides them (and the
/// profile source) to every page, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let backend = Arc::new(HttpBackend);
    let session = SessionManager::new(backend.clone());
    let profiles: Arc<dyn ProfileSource> = backend;
    let notices = RwSignal::new(NoticeState::default());

    provide_context(session.clone());
    provide_context(profiles);
    provide_context(notices);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move { session.restore().await });

    view! {
        <Stylesheet id="leptos" href="/pkg/creatorhub.css"/>
        <Title text="CreatorHub"/>

        <Toast/>
        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=DEFAULT_REDIRECT/> }/>
                    <Route path=StaticSegment("auth") view=AuthPage/>
                    <Route path=StaticSegment("profiles") view=ProfilesPage/>
                </Routes>
            </main>
        </Router>
    }
}
