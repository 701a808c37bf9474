//! Creator directory view-model: load status, community filter, card rules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ProfilesPage` fetches once per mount through a `ProfileSource`, folds the
//! tagged result into `DirectoryState`, and renders `displayed()` through a
//! memo so the list recomputes whenever the profile set or filter changes.
//!
//! ERROR HANDLING
//! ==============
//! A failed fetch never crashes the view. The list is empty and the status
//! carries the failure so the page can show an explicit error line.

#[cfg(test)]
#[path = "directory_test.rs"]
mod directory_test;

use std::fmt;

use crate::net::api::ApiError;
use crate::net::backend::ProfileSource;
use crate::net::types::{Community, Profile, SessionUser};

pub const ALL_LABEL: &str = "All";
pub const DEFAULT_AVATAR: &str = "/default-avatar.png";
pub const PREMIUM_HREF: &str = "/premium";
pub const LOAD_FAILED_MESSAGE: &str = "Could not load profiles. Please try again later.";
pub const EMPTY_MESSAGE: &str = "No profiles found in this community.";

/// Community selection; `All` is the sentinel that disables filtering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CommunityFilter {
    #[default]
    All,
    Only(Community),
}

impl CommunityFilter {
    /// Select options in display order.
    pub fn options() -> impl Iterator<Item = CommunityFilter> {
        std::iter::once(CommunityFilter::All).chain(Community::ALL.into_iter().map(CommunityFilter::Only))
    }

    pub fn label(self) -> &'static str {
        match self {
            CommunityFilter::All => ALL_LABEL,
            CommunityFilter::Only(c) => c.label(),
        }
    }

    /// Parse a `<select>` value; anything unrecognized means `All`.
    pub fn from_label(label: &str) -> Self {
        Community::from_label(label).map_or(CommunityFilter::All, CommunityFilter::Only)
    }

    /// Exact, case-sensitive community match.
    pub fn matches(self, profile: &Profile) -> bool {
        match self {
            CommunityFilter::All => true,
            CommunityFilter::Only(c) => profile.community == c.label(),
        }
    }
}

impl fmt::Display for CommunityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DirectoryState {
    pub profiles: Vec<Profile>,
    pub filter: CommunityFilter,
    pub status: LoadStatus,
}

impl DirectoryState {
    /// Fold a fetch result in. Success replaces the whole set.
    pub fn apply_load(&mut self, result: Result<Vec<Profile>, ApiError>) {
        match result {
            Ok(profiles) => {
                self.profiles = profiles;
                self.status = LoadStatus::Loaded;
            }
            Err(e) => {
                log::error!("error fetching profiles: {e}");
                self.profiles.clear();
                self.status = LoadStatus::Failed(LOAD_FAILED_MESSAGE.to_owned());
            }
        }
    }

    pub fn set_filter(&mut self, filter: CommunityFilter) {
        self.filter = filter;
    }

    /// Profiles passing the filter, in server order.
    pub fn displayed(&self) -> Vec<Profile> {
        self.profiles.iter().filter(|p| self.filter.matches(p)).cloned().collect()
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// True when a successful load leaves nothing to show.
    pub fn is_empty_view(&self) -> bool {
        self.status == LoadStatus::Loaded && !self.profiles.iter().any(|p| self.filter.matches(p))
    }
}

/// Fetch the full collection once.
///
/// # Errors
///
/// Returns the source's error unchanged.
pub async fn load_profiles(source: &dyn ProfileSource) -> Result<Vec<Profile>, ApiError> {
    source.fetch_profiles().await
}

/// Messaging affordance on a card, decided by the viewer, not the profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatAffordance {
    Chat,
    Upsell,
    Hidden,
}

pub fn chat_affordance(viewer: Option<&SessionUser>) -> ChatAffordance {
    match viewer {
        Some(user) if user.is_premium => ChatAffordance::Chat,
        Some(_) => ChatAffordance::Upsell,
        None => ChatAffordance::Hidden,
    }
}

pub fn avatar_src(profile: &Profile) -> &str {
    profile
        .profile_picture
        .as_deref()
        .filter(|src| !src.trim().is_empty())
        .unwrap_or(DEFAULT_AVATAR)
}

pub fn profile_href(id: &str) -> String {
    format!("/profile/{id}")
}

pub fn chat_href(id: &str) -> String {
    format!("/chat/{id}")
}
