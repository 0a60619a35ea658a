//! Static page copy, outbound links and the feature list.

use crate::types::{FeatureDescriptor, IconRef, LucideIcon};

/// Product name used in the title, footer and meta tags.
pub const PRODUCT_NAME: &str = "Floating Todo App";

pub const PAGE_TITLE: &str = PRODUCT_NAME;

pub const PAGE_DESCRIPTION: &str = "A floating todo list that follows you across the web, \
     helping you stay organized without switching tabs.";

/// Chrome Web Store listing (both CTA buttons point here).
pub const INSTALL_URL: &str =
    "https://chromewebstore.google.com/detail/floating-todo-app/baofnehekhobikaeeidlhjaggcehnpld";

pub const SCREENSHOT_SRC: &str = "/screen.png";
pub const SCREENSHOT_ALT: &str = "Floating Todo Widget Demo";
pub const SCREENSHOT_WIDTH: u32 = 256;
pub const SCREENSHOT_HEIGHT: u32 = 384;

/// Features in display order.
pub static FEATURES: &[FeatureDescriptor] = &[
    FeatureDescriptor::new(
        IconRef::new(LucideIcon::Move),
        "Floating Interface",
        "Drag and position your todo list anywhere on the page. It stays visible as you browse different websites.",
    ),
    FeatureDescriptor::new(
        IconRef::new(LucideIcon::Save),
        "Auto-Saving",
        "Your tasks are automatically saved locally, ensuring they're always there when you need them.",
    ),
    FeatureDescriptor::new(
        IconRef::new(LucideIcon::Layout),
        "Minimal Design",
        "Clean and intuitive interface that doesn't get in the way of your browsing experience.",
    ),
    FeatureDescriptor::new(
        IconRef::new(LucideIcon::Plus),
        "Quick Add",
        "Add new tasks instantly with just a single click. No need to open new tabs or windows.",
    ),
    FeatureDescriptor::new(
        IconRef::new(LucideIcon::Check),
        "Task Management",
        "Mark tasks as complete, edit them, or delete with simple controls.",
    ),
    FeatureDescriptor::new(
        IconRef::new(LucideIcon::Sparkles),
        "Always Available",
        "Access your todo list instantly on any webpage, whenever inspiration strikes.",
    ),
];
