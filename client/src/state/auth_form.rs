//! Dual-mode (login/signup) credential form model.
//!
//! DESIGN
//! ======
//! All form logic lives on plain data so it can be tested without a DOM.
//! Field edits arrive as a `FormField` discriminant rather than an input
//! name, so nested social links are addressed by type instead of by parsing
//! dotted strings.
//!
//! Toggling the mode keeps every field value. Login reads only email and
//! password; the signup-only fields stay in memory until the form is dropped.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::net::types::{Community, SessionUser, SignupPayload, SocialLinks, SocialPlatform};
use crate::state::notice::Notice;
use crate::state::session::SessionManager;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Sign in to your account",
            AuthMode::Signup => "Create your account",
        }
    }

    pub fn switch_prompt(self) -> &'static str {
        match self {
            AuthMode::Login => "Don't have an account? ",
            AuthMode::Signup => "Already have an account? ",
        }
    }

    pub fn switch_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Sign up",
            AuthMode::Signup => "Sign in",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Sign in",
            AuthMode::Signup => "Sign up",
        }
    }
}

/// Addressable form inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Password,
    Bio,
    Community,
    ProfilePicture,
    Social(SocialPlatform),
}

impl FormField {
    fn label(self) -> &'static str {
        match self {
            FormField::Name => "Full name",
            FormField::Email => "Email",
            FormField::Phone => "Phone",
            FormField::Password => "Password",
            FormField::Bio => "Bio",
            FormField::Community => "Community",
            FormField::ProfilePicture => "Profile picture",
            FormField::Social(_) => "Social link",
        }
    }
}

const LOGIN_REQUIRED: [FormField; 2] = [FormField::Email, FormField::Password];
const SIGNUP_REQUIRED: [FormField; 6] = [
    FormField::Name,
    FormField::Email,
    FormField::Phone,
    FormField::Password,
    FormField::Bio,
    FormField::Community,
];

/// Raw input values, kept across mode toggles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub bio: String,
    pub community: Option<Community>,
    pub profile_picture: String,
    pub social_links: SocialLinks,
}

/// Why a submit did not start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A previous submission has not resolved yet.
    Pending,
    /// A required field is empty; carries the message to show.
    Invalid(String),
}

/// Work handed to the session manager for one submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitRequest {
    Login { email: String, password: String },
    Signup(SignupPayload),
}

impl SubmitRequest {
    fn success_message(&self) -> &'static str {
        match self {
            SubmitRequest::Login { .. } => "Welcome back!",
            SubmitRequest::Signup(_) => "Profile created successfully!",
        }
    }

    /// Map the session result to what the page should do next.
    pub fn outcome(&self, result: &Result<SessionUser, ApiError>, redirect_to: &str) -> SubmitOutcome {
        match result {
            Ok(_) => SubmitOutcome::Redirect {
                notice: Notice::success(self.success_message()),
                to: redirect_to.to_owned(),
            },
            Err(e) => SubmitOutcome::Failed(Notice::error(e.user_message())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Show the notice, then replace the current history entry with `to`.
    Redirect { notice: Notice, to: String },
    /// Show the notice and keep the form as entered.
    Failed(Notice),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub fields: AuthFields,
    pub loading: bool,
}

impl AuthForm {
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Set one input. Social links update only the named platform.
    pub fn apply(&mut self, field: FormField, value: String) {
        let f = &mut self.fields;
        match field {
            FormField::Name => f.name = value,
            FormField::Email => f.email = value,
            FormField::Phone => f.phone = value,
            FormField::Password => f.password = value,
            FormField::Bio => f.bio = value,
            FormField::Community => f.community = Community::from_label(&value),
            FormField::ProfilePicture => f.profile_picture = value,
            FormField::Social(platform) => f.social_links.set(platform, value),
        }
    }

    /// Current input value as bound to the DOM.
    pub fn value(&self, field: FormField) -> String {
        let f = &self.fields;
        match field {
            FormField::Name => f.name.clone(),
            FormField::Email => f.email.clone(),
            FormField::Phone => f.phone.clone(),
            FormField::Password => f.password.clone(),
            FormField::Bio => f.bio.clone(),
            FormField::Community => f.community.map(Community::label).unwrap_or_default().to_owned(),
            FormField::ProfilePicture => f.profile_picture.clone(),
            FormField::Social(platform) => f.social_links.get(platform).to_owned(),
        }
    }

    /// Check the fields the current mode requires.
    ///
    /// Same rule as the browser's `required`: only an empty value is
    /// missing, whitespace counts as filled.
    ///
    /// # Errors
    ///
    /// Returns the message for the first empty required field.
    pub fn validate(&self) -> Result<(), String> {
        let required: &[FormField] = match self.mode {
            AuthMode::Login => &LOGIN_REQUIRED,
            AuthMode::Signup => &SIGNUP_REQUIRED,
        };
        match required.iter().find(|field| self.value(**field).is_empty()) {
            Some(field) => Err(format!("{} is required.", field.label())),
            None => Ok(()),
        }
    }

    /// Start a submission unless one is already in flight.
    ///
    /// # Errors
    ///
    /// `SubmitBlocked::Pending` while loading, `SubmitBlocked::Invalid` when a
    /// required field is empty. Neither changes the form.
    pub fn begin_submit(&mut self) -> Result<SubmitRequest, SubmitBlocked> {
        if self.loading {
            return Err(SubmitBlocked::Pending);
        }
        self.validate().map_err(SubmitBlocked::Invalid)?;
        let f = &self.fields;
        let request = match self.mode {
            AuthMode::Login => SubmitRequest::Login { email: f.email.clone(), password: f.password.clone() },
            AuthMode::Signup => {
                let Some(community) = f.community else {
                    return Err(SubmitBlocked::Invalid("Community is required.".to_owned()));
                };
                SubmitRequest::Signup(SignupPayload {
                    name: f.name.clone(),
                    email: f.email.clone(),
                    phone: f.phone.clone(),
                    password: f.password.clone(),
                    bio: f.bio.clone(),
                    community,
                    profile_picture: f.profile_picture.clone(),
                    social_links: f.social_links.clone(),
                })
            }
        };
        self.loading = true;
        Ok(request)
    }

    /// Re-enable submitting. Field values are never cleared here.
    pub fn finish_submit(&mut self) {
        self.loading = false;
    }
}

/// Run one submission of `form` through `session`.
///
/// The single-flight guard is `AuthForm::loading`: a second call while the
/// first is awaiting returns `SubmitBlocked::Pending` without touching the
/// backend.
///
/// # Errors
///
/// Returns `SubmitBlocked` when the submission never started.
pub async fn submit_with(
    form: RwSignal<AuthForm>,
    session: &SessionManager,
    redirect_to: &str,
) -> Result<SubmitOutcome, SubmitBlocked> {
    let mut begun = Err(SubmitBlocked::Pending);
    form.update(|f| begun = f.begin_submit());
    let request = begun?;

    let result = match &request {
        SubmitRequest::Login { email, password } => session.login(email, password).await,
        SubmitRequest::Signup(payload) => session.signup(payload).await,
    };
    if let Err(e) = &result {
        log::info!("auth submission failed: {e}");
    }

    form.update(AuthForm::finish_submit);
    Ok(request.outcome(&result, redirect_to))
}
