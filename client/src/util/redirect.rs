//! Post-auth redirect target capture.
//!
//! SYSTEM CONTEXT
//! ==============
//! Screens that need a signed-in user link to `/auth?from=<path>`. After a
//! successful login or signup the auth page navigates back to that path, or
//! to the directory when none was captured.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

pub const AUTH_PATH: &str = "/auth";
pub const DEFAULT_REDIRECT: &str = "/profiles";

/// Auth page URL that returns to `from` afterwards.
pub fn auth_href(from: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(from.as_bytes()).collect();
    format!("{AUTH_PATH}?from={encoded}")
}

/// Resolve the captured `from` query value to a safe in-app path.
///
/// Only same-origin absolute paths are honored; anything else (missing,
/// protocol-relative, or the auth page itself) falls back to the directory.
pub fn redirect_target(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(path) if is_in_app_path(path) => path.to_owned(),
        _ => DEFAULT_REDIRECT.to_owned(),
    }
}

fn is_in_app_path(path: &str) -> bool {
    if !path.starts_with('/') || path.starts_with("//") || path.starts_with("/\\") {
        return false;
    }
    let route = path.split(['?', '#']).next().unwrap_or_default();
    route != AUTH_PATH
}
