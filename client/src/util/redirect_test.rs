use super::*;

#[test]
fn auth_href_encodes_return_path() {
    assert_eq!(auth_href("/profiles"), "/auth?from=%2Fprofiles");
    assert_eq!(auth_href("/chat/42?x=1"), "/auth?from=%2Fchat%2F42%3Fx%3D1");
}

#[test]
fn redirect_target_defaults_to_profiles() {
    assert_eq!(redirect_target(None), "/profiles");
    assert_eq!(redirect_target(Some("")), "/profiles");
}

#[test]
fn redirect_target_keeps_in_app_paths() {
    assert_eq!(redirect_target(Some("/premium")), "/premium");
    assert_eq!(redirect_target(Some("/chat/42?x=1")), "/chat/42?x=1");
}

#[test]
fn redirect_target_rejects_external_destinations() {
    assert_eq!(redirect_target(Some("https://evil.example.com")), "/profiles");
    assert_eq!(redirect_target(Some("//evil.example.com")), "/profiles");
    assert_eq!(redirect_target(Some("/\\evil.example.com")), "/profiles");
}

#[test]
fn redirect_target_never_returns_to_auth_page() {
    assert_eq!(redirect_target(Some("/auth")), "/profiles");
    assert_eq!(redirect_target(Some("/auth?from=%2Fprofiles")), "/profiles");
}
