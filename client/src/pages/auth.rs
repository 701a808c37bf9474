//! Sign-in / sign-up page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds `AuthForm` to the DOM and hands submissions to the context
//! `SessionManager`. On success it shows a notice and replaces the history
//! entry with the captured `?from=` target.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::types::{Community, SocialPlatform};
use crate::state::auth_form::{AuthForm, AuthMode, FormField, SubmitBlocked, SubmitOutcome, submit_with};
use crate::state::notice::{Notice, NoticeState};
use crate::state::session::SessionManager;
use crate::util::redirect::redirect_target;
use crate::util::task::TaskScope;

#[component]
pub fn AuthPage() -> impl IntoView {
    let session = expect_context::<SessionManager>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    let query = use_query_map();
    let scope = TaskScope::for_component();

    let form = RwSignal::new(AuthForm::default());
    let pending_redirect = RwSignal::new(None::<String>);
    let mode = Memo::new(move |_| form.with(|f| f.mode));
    let loading = Memo::new(move |_| form.with(|f| f.loading));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.with_untracked(|f| f.loading) {
            return;
        }
        let redirect_to = redirect_target(query.with_untracked(|q| q.get("from")).as_deref());
        let session = session.clone();

        scope.spawn(async move {
            match submit_with(form, &session, &redirect_to).await {
                Ok(SubmitOutcome::Redirect { notice, to }) => {
                    notices.update(|n| {
                        n.show(notice);
                    });
                    pending_redirect.set(Some(to));
                }
                Ok(SubmitOutcome::Failed(notice)) => notices.update(|n| {
                    n.show(notice);
                }),
                Err(SubmitBlocked::Invalid(message)) => notices.update(|n| {
                    n.show(Notice::error(message));
                }),
                Err(SubmitBlocked::Pending) => {}
            }
        });
    };

    Effect::new(move || {
        if let Some(to) = pending_redirect.get() {
            pending_redirect.set(None);
            navigate(&to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__header">
                    <h2>{move || mode.get().title()}</h2>
                    <p class="auth-card__switch">
                        {move || mode.get().switch_prompt()}
                        <button
                            class="auth-card__switch-button"
                            type="button"
                            on:click=move |_| form.update(AuthForm::toggle_mode)
                        >
                            {move || mode.get().switch_label()}
                        </button>
                    </p>
                </div>

                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || mode.get() == AuthMode::Signup>
                        <SignupFields form=form/>
                    </Show>

                    <TextField form=form field=FormField::Email label="Email" input_type="email" required=true/>
                    <TextField
                        form=form
                        field=FormField::Password
                        label="Password"
                        input_type="password"
                        required=true
                    />

                    <button class="auth-form__submit" type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Loading..." } else { mode.get().submit_label() }}
                    </button>
                </form>
            </div>
        </div>
    }
}

/// Labelled single-line input bound to one form field.
#[component]
fn TextField(
    form: RwSignal<AuthForm>,
    field: FormField,
    label: &'static str,
    input_type: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <label class="auth-form__label">
            {label}
            <input
                class="auth-form__input"
                type=input_type
                required=required
                prop:value=move || form.with(|f| f.value(field))
                on:input=move |ev| form.update(|f| f.apply(field, event_target_value(&ev)))
            />
        </label>
    }
}

/// Profile fields only shown while creating an account.
#[component]
fn SignupFields(form: RwSignal<AuthForm>) -> impl IntoView {
    view! {
        <TextField form=form field=FormField::Name label="Full Name" input_type="text" required=true/>
        <TextField form=form field=FormField::Phone label="Phone" input_type="tel" required=true/>

        <label class="auth-form__label">
            "Community"
            <select
                class="auth-form__input"
                required=true
                prop:value=move || form.with(|f| f.value(FormField::Community))
                on:change=move |ev| form.update(|f| f.apply(FormField::Community, event_target_value(&ev)))
            >
                <option value="">"Select your community"</option>
                {Community::ALL
                    .into_iter()
                    .map(|c| view! { <option value=c.label()>{c.label()}</option> })
                    .collect::<Vec<_>>()}
            </select>
        </label>

        <label class="auth-form__label">
            "Bio"
            <textarea
                class="auth-form__input"
                rows="3"
                required=true
                prop:value=move || form.with(|f| f.value(FormField::Bio))
                on:input=move |ev| form.update(|f| f.apply(FormField::Bio, event_target_value(&ev)))
            ></textarea>
        </label>

        <TextField form=form field=FormField::ProfilePicture label="Profile Picture URL" input_type="url"/>

        <div class="auth-form__social">
            <h4 class="auth-form__label">"Social Links"</h4>
            {SocialPlatform::ALL
                .into_iter()
                .map(|platform| {
                    let field = FormField::Social(platform);
                    view! {
                        <input
                            class="auth-form__input"
                            type="url"
                            placeholder=platform.placeholder()
                            prop:value=move || form.with(|f| f.value(field))
                            on:input=move |ev| form.update(|f| f.apply(field, event_target_value(&ev)))
                        />
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
