//! # floating-todo-landing
//!
//! Static landing page for the Floating Todo App browser extension, rendered
//! with [Leptos](https://leptos.dev/) server-side rendering.
//!
//! The page is one self-contained HTML document: inline CSS, inline SVG
//! glyphs, no JavaScript and no hydration.
//!
//! ## Quick Start
//!
//! ```rust
//! use floating_todo_landing::{render_landing, types::PageConfig};
//!
//! let config = PageConfig {
//!     copyright_year: Some(2025),
//!     ..Default::default()
//! };
//!
//! let html = render_landing(&config);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Feature descriptors, glyph references, page settings
//! - [`content`] - Static copy, outbound links and the feature list
//! - [`components`] - Leptos UI components
//! - [`config`] - Optional TOML site config
//! - [`styles`] - CSS and Content-Security-Policy constants
//!
//! Rendering goes through Leptos 0.8's `RenderHtml` trait:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <MyComponent /> };
//! let html: String = view.to_html();
//! ```

pub mod components;
pub mod config;
pub mod content;
pub mod styles;
pub mod types;

use components::LandingDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::{FeatureDescriptor, PageConfig};

/// Render the complete landing page from a feature list.
///
/// One card is rendered per descriptor, in order. The output is a full HTML
/// document starting with `<!DOCTYPE html>`. Rendering has no side effects,
/// so the same input always yields the same string.
///
/// # Example
///
/// ```rust
/// use floating_todo_landing::render_page;
/// use floating_todo_landing::types::{FeatureDescriptor, IconRef, LucideIcon, PageConfig};
///
/// let features = [FeatureDescriptor::new(
///     IconRef::new(LucideIcon::Plus),
///     "Quick Add",
///     "Add new tasks instantly...",
/// )];
///
/// let html = render_page(&features, &PageConfig::default());
/// assert!(html.contains("Quick Add"));
/// ```
pub fn render_page(features: &[FeatureDescriptor], config: &PageConfig) -> String {
    tracing::debug!(cards = features.len(), "rendering landing page");

    let doc = view! {
        <LandingDocument features=features.to_vec() config=config.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render the landing page with the built-in [`content::FEATURES`] list.
pub fn render_landing(config: &PageConfig) -> String {
    render_page(content::FEATURES, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use types::{IconRef, LucideIcon};

    fn card_count(html: &str) -> usize {
        html.matches(r#"class="feature-card""#).count()
    }

    #[test]
    fn renders_complete_document() {
        let html = render_landing(&PageConfig::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<title>Floating Todo App</title>"));
        assert!(html.contains("Content-Security-Policy"));
        assert!(html.contains(".feature-card"));
    }

    #[test]
    fn sections_appear_in_page_order() {
        let html = render_landing(&PageConfig::default());

        let hero = html.find("Everywhere").expect("hero");
        let grid = html.find(r#"class="features-grid""#).expect("features");
        let demo = html.find("See it in Action").expect("demo");
        let cta = html.find("Ready to boost your productivity?").expect("cta");
        let footer = html.find("All rights reserved.").expect("footer");
        assert!(hero < grid && grid < demo && demo < cta && cta < footer);
    }

    #[test]
    fn renders_one_card_per_builtin_feature() {
        let html = render_landing(&PageConfig::default());

        assert_eq!(card_count(&html), content::FEATURES.len());
        for feature in content::FEATURES {
            assert!(html.contains(feature.title.as_ref()));
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let config = PageConfig {
            copyright_year: Some(2025),
            ..Default::default()
        };
        assert_eq!(render_landing(&config), render_landing(&config));
    }

    #[test]
    fn empty_feature_list_still_renders_page() {
        let html = render_page(&[], &PageConfig::default());

        assert_eq!(card_count(&html), 0);
        assert!(html.contains(r#"class="features-grid""#));
        assert!(html.contains("See it in Action"));
    }

    #[test]
    fn install_url_is_used_by_both_buttons() {
        let config = PageConfig {
            install_url: "https://example.com/install".into(),
            ..Default::default()
        };
        let html = render_landing(&config);

        assert_eq!(html.matches(r#"href="https://example.com/install""#).count(), 2);
        assert!(html.contains("Add to Chrome"));
        assert!(html.contains("Install Now"));
    }

    #[test]
    fn footer_year_comes_from_config() {
        let config = PageConfig {
            copyright_year: Some(2031),
            ..Default::default()
        };
        let html = render_landing(&config);
        assert!(html.contains("© 2031 Floating Todo App"));
    }

    #[test]
    fn hero_glyph_keeps_its_own_styling() {
        // Only feature cards normalize their glyphs.
        let features = [FeatureDescriptor::new(
            IconRef::new(LucideIcon::Sparkles).with_class("hero-badge-icon"),
            "Always Available",
            "Whenever inspiration strikes.",
        )];
        let html = render_page(&features, &PageConfig::default());

        assert_eq!(html.matches(r#"class="hero-badge-icon""#).count(), 1);
        assert_eq!(html.matches(r#"class="feature-icon-glyph""#).count(), 1);
    }
}
