use crate::types::Screenshot;
use leptos::prelude::*;

/// "See it in Action" - browser window mock with the widget screenshot on top.
#[component]
pub fn DemoSection(screenshot: Screenshot) -> impl IntoView {
    view! {
        <section id="demo" class="demo">
            <div class="container">
                <h2 class="section-title">"See it in Action"</h2>
                <div class="browser-mock">
                    <BrowserControls />
                    <div class="browser-viewport">
                        <PlaceholderContent />
                        <div class="demo-widget">
                            <img
                                src=screenshot.src
                                alt=screenshot.alt
                                width=screenshot.width.to_string()
                                height=screenshot.height.to_string()
                            />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn BrowserControls() -> impl IntoView {
    view! {
        <div class="browser-controls">
            <div class="browser-dot red"></div>
            <div class="browser-dot yellow"></div>
            <div class="browser-dot green"></div>
            <div class="browser-address">"example.com"</div>
        </div>
    }
}

// Stand-in for the page the widget floats over
#[component]
fn PlaceholderContent() -> impl IntoView {
    view! {
        <div class="placeholder-content">
            <div class="placeholder placeholder-bar"></div>
            <div class="placeholder-grid">
                <div class="placeholder placeholder-tile"></div>
                <div class="placeholder placeholder-tile"></div>
                <div class="placeholder placeholder-tile"></div>
            </div>
            <div class="placeholder placeholder-line wide"></div>
            <div class="placeholder placeholder-line half"></div>
        </div>
    }
}
