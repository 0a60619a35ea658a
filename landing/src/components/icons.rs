//! Inline SVG glyphs from the Lucide icon set.

use crate::types::{IconRef, LucideIcon};
use leptos::prelude::*;

/// Renders the glyph behind `icon` as inline SVG.
///
/// The SVG carries exactly the class on the reference. Components that want a
/// fixed look pass `icon.restyled(..)` rather than styling around it.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon icon=IconRef::new(LucideIcon::Check).with_class("btn-icon") /> }
/// ```
#[component]
pub fn Icon(
    /// Glyph reference (glyph + its own class)
    icon: IconRef,
) -> impl IntoView {
    let glyph = icon.glyph;

    // No class on the reference means no class attribute at all
    match icon.class {
        Some(class) => view! {
            <svg
                xmlns="http://www.w3.org/2000/svg"
                width="24"
                height="24"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true"
                data-icon=glyph.name()
                class=class.into_owned()
            >
                {glyph_paths(glyph)}
            </svg>
        }
        .into_any(),
        None => view! {
            <svg
                xmlns="http://www.w3.org/2000/svg"
                width="24"
                height="24"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true"
                data-icon=glyph.name()
            >
                {glyph_paths(glyph)}
            </svg>
        }
        .into_any(),
    }
}

fn glyph_paths(glyph: LucideIcon) -> Vec<impl IntoView> {
    glyph
        .paths()
        .iter()
        .map(|d| view! { <path d=*d></path> })
        .collect::<Vec<_>>()
}
