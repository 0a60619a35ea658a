use super::CtaButton;
use crate::content::PRODUCT_NAME;
use leptos::prelude::*;

#[component]
pub fn CallToAction(#[prop(into)] install_url: String) -> impl IntoView {
    let pitch = format!(
        "Join thousands of users who are already staying organized across the web with {}.",
        PRODUCT_NAME
    );

    view! {
        <section id="install" class="cta">
            <div class="container">
                <h2 class="section-title">"Ready to boost your productivity?"</h2>
                <p class="cta-description">{pitch}</p>
                <CtaButton href=install_url>"Install Now - It's Free"</CtaButton>
            </div>
        </section>
    }
}
