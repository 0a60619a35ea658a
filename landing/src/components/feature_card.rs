//! Feature card - the leaf of the features grid

use super::Icon;
use crate::types::IconRef;
use leptos::prelude::*;

/// Class every card glyph is rendered with, whatever the caller supplied.
pub const BADGE_GLYPH_CLASS: &str = "feature-icon-glyph";

/// One feature: icon badge, title, description.
///
/// Pure function of its props. The supplied glyph is re-skinned with
/// [`BADGE_GLYPH_CLASS`]; any class it carried is dropped.
#[component]
pub fn FeatureCard(
    icon: IconRef,
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    /// Position of the card in the grid (0-based)
    #[prop(optional)]
    index: Option<usize>,
) -> impl IntoView {
    let badge = icon.restyled(BADGE_GLYPH_CLASS);

    view! {
        <article class="feature-card" data-feature-index=index.map(|i| i.to_string())>
            <div class="feature-icon">
                <Icon icon=badge />
            </div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
        </article>
    }
}
