use super::{ButtonVariant, CtaButton, Icon};
use crate::content::PAGE_DESCRIPTION;
use crate::types::{IconRef, LucideIcon};
use leptos::prelude::*;

#[component]
pub fn Hero(#[prop(into)] install_url: String) -> impl IntoView {
    view! {
        <header class="hero">
            <div class="container">
                <div class="hero-badge">
                    <Icon icon=IconRef::new(LucideIcon::Sparkles).with_class("hero-badge-icon") />
                </div>
                <h1 class="hero-title">
                    "Your Tasks, "
                    <span class="hero-title-accent">"Everywhere"</span>
                </h1>
                <p class="hero-description">{PAGE_DESCRIPTION}</p>
                <CtaButton href=install_url variant=ButtonVariant::Primary>
                    "Add to Chrome"
                </CtaButton>
            </div>
        </header>
    }
}
