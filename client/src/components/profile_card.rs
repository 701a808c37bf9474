//! Card for one creator in the directory grid.
//!
//! DESIGN
//! ======
//! The premium badge follows the viewed profile; the chat/upsell slot follows
//! the viewer, so it takes a reactive affordance instead of the session.

#[cfg(test)]
#[path = "profile_card_test.rs"]
mod profile_card_test;

use leptos::prelude::*;

use crate::net::types::Profile;
use crate::state::directory::{ChatAffordance, PREMIUM_HREF, avatar_src, chat_href, profile_href};

#[component]
pub fn ProfileCard(profile: Profile, #[prop(into)] affordance: Signal<ChatAffordance>) -> impl IntoView {
    let avatar = avatar_src(&profile).to_owned();
    let view_link = profile_href(&profile.id);
    let chat_link = chat_href(&profile.id);
    let is_premium = profile.is_premium;

    view! {
        <div class="profile-card">
            <div class="profile-card__media">
                <img class="profile-card__avatar" src=avatar alt=profile.name.clone()/>
                {is_premium
                    .then(|| {
                        view! {
                            <span class="profile-card__premium" title="Premium" aria-label="Premium">
                                "♛"
                            </span>
                        }
                    })}
            </div>
            <div class="profile-card__body">
                <div class="profile-card__header">
                    <h3 class="profile-card__name">{profile.name}</h3>
                    <span class="profile-card__community">{profile.community}</span>
                </div>
                <p class="profile-card__bio">{profile.bio}</p>
                <div class="profile-card__actions">
                    <a class="profile-card__view" href=view_link>
                        "View Profile"
                    </a>
                    <Show when=move || affordance.get() == ChatAffordance::Chat>
                        <a class="profile-card__chat" href=chat_link.clone()>
                            "Chat"
                        </a>
                    </Show>
                </div>
                <Show when=move || affordance.get() == ChatAffordance::Upsell>
                    <div class="profile-card__upsell">
                        <a href=PREMIUM_HREF>"Go Premium to chat"</a>
                    </div>
                </Show>
            </div>
        </div>
    }
}
