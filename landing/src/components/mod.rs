//! Leptos UI components for the landing page.
//!
//! Every component renders from its props alone, so the whole page is a
//! deterministic function of the feature list and the [`crate::types::PageConfig`].
//!
//! # Component Hierarchy
//!
//! ```text
//! LandingDocument
//! └── LandingPage
//!     ├── Hero
//!     │   └── CtaButton
//!     ├── Features
//!     │   └── FeaturesGrid
//!     │       └── FeatureCard (one per descriptor)
//!     │           └── Icon (badge-normalized)
//!     ├── DemoSection
//!     ├── CallToAction
//!     │   └── CtaButton
//!     └── Footer
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_page`], but can be
//! rendered on their own:
//!
//! ```rust
//! use floating_todo_landing::components::FeaturesGrid;
//! use floating_todo_landing::content::FEATURES;
//! use leptos::prelude::*;
//! use leptos::tachys::view::RenderHtml;
//!
//! let html = view! { <FeaturesGrid features=FEATURES.to_vec() /> }.to_html();
//! assert!(html.contains("Quick Add"));
//! ```

mod button;
mod cta;
mod demo;
mod document;
mod feature_card;
mod features;
mod footer;
mod hero;
mod icons;

pub use button::{ButtonVariant, CtaButton};
pub use cta::CallToAction;
pub use demo::DemoSection;
pub use document::{LandingDocument, LandingPage};
pub use feature_card::{BADGE_GLYPH_CLASS, FeatureCard};
pub use features::{Features, FeaturesGrid};
pub use footer::Footer;
pub use hero::Hero;
pub use icons::Icon;
