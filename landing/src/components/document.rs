//! Root document component - the complete HTML page

use super::{CallToAction, DemoSection, Features, Footer, Hero};
use crate::content::PAGE_DESCRIPTION;
use crate::styles::{CSP, LANDING_CSS};
use crate::types::{FeatureDescriptor, PageConfig};
use leptos::prelude::*;

/// The complete HTML document for the landing page
#[component]
pub fn LandingDocument(features: Vec<FeatureDescriptor>, config: PageConfig) -> impl IntoView {
    let title = config.title.clone();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <meta name="description" content=PAGE_DESCRIPTION />
                <title>{title}</title>
                <style>{LANDING_CSS}</style>
            </head>
            <body>
                <LandingPage features=features config=config />
            </body>
        </html>
    }
}

/// Page body: hero, features, demo, call to action, footer.
#[component]
pub fn LandingPage(features: Vec<FeatureDescriptor>, config: PageConfig) -> impl IntoView {
    let PageConfig {
        install_url,
        screenshot,
        copyright_year,
        ..
    } = config;

    view! {
        <div class="page">
            <Hero install_url=install_url.clone() />
            <main>
                <Features features=features />
                <DemoSection screenshot=screenshot />
                <CallToAction install_url=install_url />
            </main>
            <Footer copyright_year=copyright_year />
        </div>
    }
}
