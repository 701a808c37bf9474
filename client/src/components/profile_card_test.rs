use super::*;
use crate::net::backend::fake::{profile, with_owner};

fn render(profile: Profile, affordance: ChatAffordance) -> String {
    with_owner(|| {
        let affordance = Signal::stored(affordance);
        view! { <ProfileCard profile=profile affordance=affordance/> }.to_html()
    })
}

#[test]
fn premium_badge_only_for_premium_profiles() {
    let premium = render(profile("1", "Artist", true), ChatAffordance::Hidden);
    let free = render(profile("2", "Artist", false), ChatAffordance::Hidden);
    assert!(premium.contains("profile-card__premium"));
    assert!(!free.contains("profile-card__premium"));
}

#[test]
fn card_links_to_profile_and_falls_back_to_default_avatar() {
    let html = render(profile("abc", "Blogger", false), ChatAffordance::Hidden);
    assert!(html.contains(r#"href="/profile/abc""#));
    assert!(html.contains(DEFAULT_AVATAR_SRC));
    assert!(html.contains("Blogger"));
}

#[test]
fn chat_slot_follows_viewer_affordance() {
    let hidden = render(profile("1", "Artist", true), ChatAffordance::Hidden);
    assert!(!hidden.contains("/chat/1"));
    assert!(!hidden.contains("Go Premium to chat"));

    let upsell = render(profile("1", "Artist", true), ChatAffordance::Upsell);
    assert!(!upsell.contains("/chat/1"));
    assert!(upsell.contains("Go Premium to chat"));
    assert!(upsell.contains(r#"href="/premium""#));

    let chat = render(profile("1", "Artist", false), ChatAffordance::Chat);
    assert!(chat.contains(r#"href="/chat/1""#));
    assert!(!chat.contains("Go Premium to chat"));
}

const DEFAULT_AVATAR_SRC: &str = r#"src="/default-avatar.png""#;
