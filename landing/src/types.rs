//! Page data types.
//!
//! These types define the data model behind the landing page. They're designed to be:
//!
//! - **Const-constructible** - the feature list is a `static` literal
//! - **Serializable** - the CLI can dump descriptors as JSON
//! - **Complete by construction** - no `Default` on [`FeatureDescriptor`], so
//!   a descriptor without an icon, title or description cannot exist
//!
//! # Example
//!
//! ```rust
//! use floating_todo_landing::types::{FeatureDescriptor, IconRef, LucideIcon};
//!
//! const QUICK_ADD: FeatureDescriptor = FeatureDescriptor::new(
//!     IconRef::new(LucideIcon::Plus),
//!     "Quick Add",
//!     "Add new tasks instantly with just a single click.",
//! );
//! assert_eq!(QUICK_ADD.title, "Quick Add");
//! ```

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::content;

/// Stock glyphs available to the page (Lucide icon set, 24x24 stroke icons).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LucideIcon {
    ArrowRight,
    Check,
    Layout,
    Move,
    Plus,
    Save,
    Sparkles,
}

impl LucideIcon {
    /// Kebab-case glyph name, as used by the Lucide icon set.
    pub fn name(self) -> &'static str {
        match self {
            LucideIcon::ArrowRight => "arrow-right",
            LucideIcon::Check => "check",
            LucideIcon::Layout => "layout",
            LucideIcon::Move => "move",
            LucideIcon::Plus => "plus",
            LucideIcon::Save => "save",
            LucideIcon::Sparkles => "sparkles",
        }
    }

    /// SVG path data (`d` attributes) drawn inside a `0 0 24 24` viewBox.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            LucideIcon::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            LucideIcon::Check => &["M20 6 9 17l-5-5"],
            LucideIcon::Layout => &[
                "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
                "M3 9h18",
                "M9 21V9",
            ],
            LucideIcon::Move => &[
                "M12 2v20",
                "m15 19-3 3-3-3",
                "m19 9 3 3-3 3",
                "M2 12h20",
                "m5 9-3 3 3 3",
                "m9 5 3-3 3 3",
            ],
            LucideIcon::Plus => &["M5 12h14", "M12 5v14"],
            LucideIcon::Save => &[
                "M15.2 3a2 2 0 0 1 1.4.6l3.8 3.8a2 2 0 0 1 .6 1.4V19a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
                "M17 21v-7a1 1 0 0 0-1-1H8a1 1 0 0 0-1 1v7",
                "M7 3v4a1 1 0 0 0 1 1h7",
            ],
            LucideIcon::Sparkles => &[
                "M9.937 15.5A2 2 0 0 0 8.5 14.063l-6.135-1.582a.5.5 0 0 1 0-.962L8.5 9.936A2 2 0 0 0 9.937 8.5l1.582-6.135a.5.5 0 0 1 .963 0L14.063 8.5A2 2 0 0 0 15.5 9.937l6.135 1.581a.5.5 0 0 1 0 .964L15.5 14.063a2 2 0 0 0-1.437 1.437l-1.582 6.135a.5.5 0 0 1-.963 0z",
                "M20 3v4",
                "M22 5h-4",
                "M4 17v2",
                "M5 18H3",
            ],
        }
    }
}

/// Reference to a glyph plus whatever styling it carries on its own.
///
/// Components that own a visual policy call [`IconRef::restyled`] to replace
/// that styling wholesale instead of trusting the caller to pre-style it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRef {
    pub glyph: LucideIcon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<Cow<'static, str>>,
}

impl IconRef {
    /// Unstyled reference to `glyph`.
    pub const fn new(glyph: LucideIcon) -> Self {
        Self { glyph, class: None }
    }

    /// Reference carrying its own CSS class.
    pub fn with_class(self, class: impl Into<Cow<'static, str>>) -> Self {
        Self {
            glyph: self.glyph,
            class: Some(class.into()),
        }
    }

    /// Same glyph, with `class` replacing any styling the reference carried.
    pub fn restyled(&self, class: &'static str) -> Self {
        Self {
            glyph: self.glyph,
            class: Some(Cow::Borrowed(class)),
        }
    }
}

impl From<LucideIcon> for IconRef {
    fn from(glyph: LucideIcon) -> Self {
        Self::new(glyph)
    }
}

/// One marketing feature shown as a card in the features grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureDescriptor {
    pub icon: IconRef,
    pub title: Cow<'static, str>,
    pub description: Cow<'static, str>,
}

impl FeatureDescriptor {
    /// Build a descriptor from static strings (usable in `const`/`static`).
    pub const fn new(icon: IconRef, title: &'static str, description: &'static str) -> Self {
        Self {
            icon,
            title: Cow::Borrowed(title),
            description: Cow::Borrowed(description),
        }
    }

    /// Build a descriptor from owned strings.
    pub fn owned(icon: IconRef, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            icon,
            title: Cow::Owned(title.into()),
            description: Cow::Owned(description.into()),
        }
    }
}

/// Demo screenshot shown inside the browser mock-up.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screenshot {
    pub src: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
}

impl Default for Screenshot {
    fn default() -> Self {
        Self {
            src: content::SCREENSHOT_SRC.into(),
            alt: content::SCREENSHOT_ALT.into(),
            width: content::SCREENSHOT_WIDTH,
            height: content::SCREENSHOT_HEIGHT,
        }
    }
}

/// Static settings for one render of the page.
///
/// The library never reads the clock: `copyright_year` is supplied by the
/// caller (the CLI fills it from the local date).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    pub title: String,
    pub install_url: String,
    pub screenshot: Screenshot,
    pub copyright_year: Option<i32>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: content::PAGE_TITLE.into(),
            install_url: content::INSTALL_URL.into(),
            screenshot: Screenshot::default(),
            copyright_year: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn restyled_replaces_existing_class() {
        let icon = IconRef::new(LucideIcon::Move).with_class("w-10 text-red-500");
        let badge = icon.restyled("feature-icon-glyph");

        assert_eq!(badge.glyph, LucideIcon::Move);
        assert_eq!(badge.class.as_deref(), Some("feature-icon-glyph"));
        // The original reference is left untouched.
        assert_eq!(icon.class.as_deref(), Some("w-10 text-red-500"));
    }

    #[test]
    fn every_glyph_has_paths() {
        let all = [
            LucideIcon::ArrowRight,
            LucideIcon::Check,
            LucideIcon::Layout,
            LucideIcon::Move,
            LucideIcon::Plus,
            LucideIcon::Save,
            LucideIcon::Sparkles,
        ];
        for glyph in all {
            assert!(!glyph.paths().is_empty(), "{} has no paths", glyph.name());
        }
    }

    #[test]
    fn descriptor_serializes_glyph_by_name() {
        let feature = FeatureDescriptor::new(IconRef::new(LucideIcon::ArrowRight), "Go", "Onwards");
        let json = serde_json::to_value(&feature).expect("serialize");

        assert_eq!(json["icon"]["glyph"], "arrow-right");
        assert_eq!(json["title"], "Go");
        assert!(json["icon"].get("class").is_none());
    }

    #[test]
    fn default_page_config_points_at_store_listing() {
        let config = PageConfig::default();
        assert!(config.install_url.starts_with("https://chromewebstore.google.com/"));
        assert_eq!(config.screenshot.width, 256);
        assert_eq!(config.screenshot.height, 384);
        assert_eq!(config.copyright_year, None);
    }
}
