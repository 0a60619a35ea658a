//! Features grid - one card per descriptor, in order

use super::FeatureCard;
use crate::types::FeatureDescriptor;
use leptos::prelude::*;

/// Section wrapping the features grid.
#[component]
pub fn Features(features: Vec<FeatureDescriptor>) -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <FeaturesGrid features=features />
            </div>
        </section>
    }
}

/// Grid of feature cards.
///
/// Card N is built from descriptor N. Nothing is filtered, deduplicated or
/// reordered, so an empty list gives an empty grid.
#[component]
pub fn FeaturesGrid(features: Vec<FeatureDescriptor>) -> impl IntoView {
    view! {
        <div class="features-grid">
            {features
                .into_iter()
                .enumerate()
                .map(|(index, feature)| {
                    view! {
                        <FeatureCard
                            icon=feature.icon
                            title=feature.title.into_owned()
                            description=feature.description.into_owned()
                            index=index
                        />
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
