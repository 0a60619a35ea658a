//! CSS styles for the landing page.
//!
//! The page ships a single inline stylesheet, so the rendered `index.html`
//! is self-contained apart from the demo screenshot.
//!
//! # Customization
//!
//! ```rust
//! use floating_todo_landing::styles::LANDING_CSS;
//!
//! let my_css = ".hero-title { letter-spacing: -0.02em; }";
//! let combined = format!("{}\n{}", LANDING_CSS, my_css);
//! assert!(combined.contains(".feature-card"));
//! ```

/// Content-Security-Policy for the static page: inline styles and same-origin
/// images only, no scripts.
pub const CSP: &str = "default-src 'none'; style-src 'unsafe-inline'; img-src 'self' data:; base-uri 'none'; form-action 'none'";

/// Complete CSS for the page - light purple theme.
pub const LANDING_CSS: &str = r#"
:root {
    --purple-50: #faf5ff;
    --purple-100: #f3e8ff;
    --purple-600: #9333ea;
    --purple-700: #7e22ce;
    --gray-50: #f9fafb;
    --gray-100: #f3f4f6;
    --gray-200: #e5e7eb;
    --gray-600: #4b5563;
    --gray-900: #111827;
    --font-sans: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
    --container-max: 1200px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    line-height: 1.5;
    color: var(--gray-900);
}

h1, h2, h3, p {
    margin: 0;
}

.page {
    min-height: 100vh;
    background: linear-gradient(to bottom, var(--purple-50), #ffffff);
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 16px;
}

/* Hero */

.hero {
    padding-top: 80px;
    padding-bottom: 128px;
    text-align: center;
}

.hero-badge {
    display: inline-block;
    padding: 8px;
    margin-bottom: 24px;
    background: var(--purple-100);
    border-radius: 9999px;
    animation: bounce 1s infinite;
}

.hero-badge-icon {
    display: block;
    width: 24px;
    height: 24px;
    color: var(--purple-600);
}

@keyframes bounce {
    0%, 100% { transform: translateY(-25%); animation-timing-function: cubic-bezier(0.8, 0, 1, 1); }
    50% { transform: none; animation-timing-function: cubic-bezier(0, 0, 0.2, 1); }
}

@media (prefers-reduced-motion: reduce) {
    .hero-badge { animation: none; }
}

.hero-title {
    font-size: 3rem;
    line-height: 1;
    font-weight: 700;
    margin-bottom: 24px;
}

.hero-title-accent {
    color: var(--purple-600);
}

.hero-description {
    font-size: 1.25rem;
    color: var(--gray-600);
    max-width: 42rem;
    margin: 0 auto 32px;
}

/* Buttons */

.btn {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 16px 32px;
    border-radius: 9999px;
    font-size: 1.125rem;
    font-weight: 600;
    text-decoration: none;
    transition: background-color 200ms;
}

.btn-primary {
    background: var(--purple-600);
    color: #ffffff;
}

.btn-primary:hover {
    background: var(--purple-700);
}

.btn-secondary {
    background: var(--purple-50);
    color: var(--purple-600);
}

.btn-secondary:hover {
    background: var(--purple-100);
}

.btn-icon {
    width: 20px;
    height: 20px;
}

/* Features */

.features {
    padding: 80px 0;
}

.features-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 32px;
}

@media (min-width: 768px) {
    .features-grid { grid-template-columns: repeat(2, 1fr); }
}

@media (min-width: 1024px) {
    .features-grid { grid-template-columns: repeat(3, 1fr); }
}

.feature-card {
    background: #ffffff;
    padding: 24px;
    border-radius: 12px;
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    transition: box-shadow 200ms;
}

.feature-card:hover {
    box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -2px rgba(0, 0, 0, 0.1);
}

.feature-icon {
    width: 48px;
    height: 48px;
    margin-bottom: 16px;
    display: flex;
    align-items: center;
    justify-content: center;
    background: var(--purple-100);
    border-radius: 8px;
}

.feature-icon-glyph {
    width: 24px;
    height: 24px;
    color: var(--purple-600);
}

.feature-title {
    font-size: 1.25rem;
    font-weight: 600;
    margin-bottom: 8px;
    color: #000000;
}

.feature-description {
    color: var(--gray-600);
}

/* Demo */

.demo {
    background: var(--purple-50);
    padding: 80px 0;
}

.section-title {
    font-size: 1.875rem;
    font-weight: 700;
    text-align: center;
    color: #000000;
}

.demo .section-title {
    margin-bottom: 64px;
}

.browser-mock {
    position: relative;
    max-width: 56rem;
    margin: 0 auto;
    background: #ffffff;
    border-radius: 8px;
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 8px 10px -6px rgba(0, 0, 0, 0.1);
    padding: 16px;
}

.browser-controls {
    display: flex;
    align-items: center;
    gap: 8px;
    margin-bottom: 16px;
}

.browser-dot {
    flex: none;
    width: 12px;
    height: 12px;
    border-radius: 9999px;
}

.browser-dot.red { background: #f87171; }
.browser-dot.yellow { background: #facc15; }
.browser-dot.green { background: #4ade80; }

.browser-address {
    width: 100%;
    max-width: 36rem;
    margin: 0 auto;
    padding: 8px 16px;
    background: var(--gray-100);
    border-radius: 9999px;
    font-size: 0.875rem;
    color: var(--gray-600);
}

.browser-viewport {
    position: relative;
    height: 800px;
    background: var(--gray-50);
    border-radius: 4px;
    overflow: hidden;
}

.placeholder-content {
    position: absolute;
    inset: 0;
    padding: 32px;
}

.placeholder {
    background: var(--gray-200);
}

.placeholder-bar {
    width: 100%;
    height: 32px;
    border-radius: 9999px;
    margin-bottom: 16px;
}

.placeholder-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 16px;
    margin-bottom: 16px;
}

.placeholder-tile {
    height: 128px;
    border-radius: 4px;
}

.placeholder-line {
    height: 16px;
    border-radius: 9999px;
}

.placeholder-line.wide { width: 75%; margin-bottom: 8px; }
.placeholder-line.half { width: 50%; }

.demo-widget {
    position: absolute;
    right: 32px;
    top: 128px;
    width: 256px;
    transition: transform 300ms;
}

.demo-widget:hover {
    transform: scale(1.05);
}

.demo-widget img {
    display: block;
    max-width: 100%;
    height: auto;
    filter: drop-shadow(0 20px 13px rgba(0, 0, 0, 0.03)) drop-shadow(0 8px 5px rgba(0, 0, 0, 0.08));
}

/* Call to action */

.cta {
    padding: 80px 0;
    text-align: center;
}

.cta .section-title {
    margin-bottom: 24px;
}

.cta-description {
    color: var(--gray-600);
    max-width: 36rem;
    margin: 0 auto 32px;
}

/* Footer */

.footer {
    background: var(--gray-50);
    padding: 32px 0;
    text-align: center;
    color: var(--gray-600);
}
"#;
