//! Wire DTOs for the creator directory REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON (`_id`, `isPremium`,
//! `profilePicture`) through serde renames so Rust code keeps snake_case.
//! Server-owned values that are open-ended (a profile's community) stay
//! `String` so one unexpected value cannot fail decoding of a whole batch.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Creator niche a profile belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Community {
    Influencer,
    Entrepreneur,
    Blogger,
    Artist,
    Creator,
    #[serde(rename = "Video Editor")]
    VideoEditor,
}

impl Community {
    /// Every community in display order.
    pub const ALL: [Community; 6] = [
        Community::Influencer,
        Community::Entrepreneur,
        Community::Blogger,
        Community::Artist,
        Community::Creator,
        Community::VideoEditor,
    ];

    /// Label shown in the UI and sent over the wire.
    pub fn label(self) -> &'static str {
        match self {
            Community::Influencer => "Influencer",
            Community::Entrepreneur => "Entrepreneur",
            Community::Blogger => "Blogger",
            Community::Artist => "Artist",
            Community::Creator => "Creator",
            Community::VideoEditor => "Video Editor",
        }
    }

    /// Exact, case-sensitive label lookup.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl fmt::Display for Community {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A creator profile as listed by `GET /api/profiles`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub bio: String,
    pub community: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub is_premium: bool,
}

/// Response body of `GET /api/profiles`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfilesResponse {
    #[serde(default)]
    pub profiles: Vec<Profile>,
}

/// The signed-in user as reported by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_premium: bool,
}

/// Response body of the login and signup endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: SessionUser,
}

/// Request body of `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Social platforms a creator can link on signup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SocialPlatform {
    Instagram,
    Facebook,
    Youtube,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 3] = [SocialPlatform::Instagram, SocialPlatform::Facebook, SocialPlatform::Youtube];

    pub fn placeholder(self) -> &'static str {
        match self {
            SocialPlatform::Instagram => "Instagram URL",
            SocialPlatform::Facebook => "Facebook URL",
            SocialPlatform::Youtube => "YouTube URL",
        }
    }
}

/// Optional social profile URLs, one per platform.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub facebook: String,
    #[serde(default)]
    pub youtube: String,
}

impl SocialLinks {
    pub fn get(&self, platform: SocialPlatform) -> &str {
        match platform {
            SocialPlatform::Instagram => &self.instagram,
            SocialPlatform::Facebook => &self.facebook,
            SocialPlatform::Youtube => &self.youtube,
        }
    }

    pub fn set(&mut self, platform: SocialPlatform, value: String) {
        match platform {
            SocialPlatform::Instagram => self.instagram = value,
            SocialPlatform::Facebook => self.facebook = value,
            SocialPlatform::Youtube => self.youtube = value,
        }
    }
}

/// Request body of `POST /api/auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub bio: String,
    pub community: Community,
    pub profile_picture: String,
    pub social_links: SocialLinks,
}

/// Error body shape the backend uses for failed requests.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
