//! Call-to-action button linking out to the install page

use super::Icon;
use crate::types::{IconRef, LucideIcon};
use leptos::prelude::*;

/// Visual variant of a [`CtaButton`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
        }
    }
}

/// Pill-shaped link that opens `href` in a new tab, followed by an arrow.
#[component]
pub fn CtaButton(
    #[prop(into)] href: String,
    #[prop(optional)] variant: ButtonVariant,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href class=variant.class() target="_blank" rel="noopener noreferrer">
            {children()}
            <Icon icon=IconRef::new(LucideIcon::ArrowRight).with_class("btn-icon") />
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn primary_is_default_variant() {
        let html = view! { <CtaButton href="https://example.com">"Go"</CtaButton> }.to_html();

        assert!(html.contains(r#"class="btn btn-primary""#));
        assert!(html.contains(r#"href="https://example.com""#));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
    }

    #[test]
    fn secondary_variant_and_arrow() {
        let html = view! {
            <CtaButton href="https://example.com" variant=ButtonVariant::Secondary>"Later"</CtaButton>
        }
        .to_html();

        assert!(html.contains(r#"class="btn btn-secondary""#));
        let label = html.find("Later").expect("label");
        let arrow = html.find(r#"data-icon="arrow-right""#).expect("arrow");
        assert!(label < arrow);
    }
}
