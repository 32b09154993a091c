//! Visual themes of the landing page.
//!
//! A theme is a set of design tokens. The stylesheet is the tokens written
//! out as CSS custom properties on the page root, followed by the section
//! rules every theme shares and the theme's own rules.
//!
//! Stylesheets end up as the text of a `<style>` element, which the server
//! renderer escapes like any other text node, so rules must not contain
//! `<`, `>` or `&`.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Monochrome, dashed placeholder boxes, square corners.
    Dashed,
    /// Rounded cards with soft shadows.
    Rounded,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tokens {
    pub accent: &'static str,
    pub accent_soft: &'static str,
    pub accent_tint: &'static str,
    pub ink: &'static str,
    pub muted: &'static str,
    pub subtle: &'static str,
    pub surface: &'static str,
    pub card: &'static str,
    pub line: &'static str,
    pub dark: &'static str,
    pub dark_line: &'static str,
    pub box_border: &'static str,
    pub radius: &'static str,
    pub radius_button: &'static str,
    pub shadow: &'static str,
    pub shadow_hover: &'static str,
    pub font_body: &'static str,
    pub font_label: &'static str,
    pub container: &'static str,
}

static DASHED: Tokens = Tokens {
    accent: "#059669",
    accent_soft: "#10b981",
    accent_tint: "#d1fae5",
    ink: "#18181b",
    muted: "#52525b",
    subtle: "#71717a",
    surface: "#fafafa",
    card: "#ffffff",
    line: "#e4e4e7",
    dark: "#18181b",
    dark_line: "#27272a",
    box_border: "2px dashed #a1a1aa",
    radius: "0",
    radius_button: "0",
    shadow: "none",
    shadow_hover: "0 10px 15px -3px rgba(0, 0, 0, 0.1)",
    font_body: "ui-sans-serif, system-ui, sans-serif",
    font_label: "ui-monospace, SFMono-Regular, Menlo, monospace",
    container: "72rem",
};

static ROUNDED: Tokens = Tokens {
    accent: "#0070F3",
    accent_soft: "#3291ff",
    accent_tint: "#e6f1fe",
    ink: "#000000",
    muted: "#666666",
    subtle: "#888888",
    surface: "#F8F9FA",
    card: "#FFFFFF",
    line: "#eaeaea",
    dark: "#111111",
    dark_line: "#333333",
    box_border: "1px solid #eaeaea",
    radius: "16px",
    radius_button: "8px",
    shadow: "0 4px 12px rgba(0, 0, 0, 0.1)",
    shadow_hover: "0 8px 32px rgba(0, 0, 0, 0.12)",
    font_body: "Inter, ui-sans-serif, system-ui, sans-serif",
    font_label: "Inter, ui-sans-serif, system-ui, sans-serif",
    container: "1200px",
};

impl Theme {
    pub fn tokens(self) -> &'static Tokens {
        match self {
            Theme::Dashed => &DASHED,
            Theme::Rounded => &ROUNDED,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Dashed => "landing--dashed",
            Theme::Rounded => "landing--rounded",
        }
    }

    pub fn stylesheet(self) -> String {
        let own = match self {
            Theme::Dashed => DASHED_CSS,
            Theme::Rounded => ROUNDED_CSS,
        };
        format!(
            ".{} {{\n{}}}\n{}{}",
            self.class_name(),
            custom_properties(self.tokens()),
            BASE_CSS,
            own
        )
    }
}

fn custom_properties(tokens: &Tokens) -> String {
    let pairs = [
        ("accent", tokens.accent),
        ("accent-soft", tokens.accent_soft),
        ("accent-tint", tokens.accent_tint),
        ("ink", tokens.ink),
        ("muted", tokens.muted),
        ("subtle", tokens.subtle),
        ("surface", tokens.surface),
        ("card", tokens.card),
        ("line", tokens.line),
        ("dark", tokens.dark),
        ("dark-line", tokens.dark_line),
        ("box-border", tokens.box_border),
        ("radius", tokens.radius),
        ("radius-button", tokens.radius_button),
        ("shadow", tokens.shadow),
        ("shadow-hover", tokens.shadow_hover),
        ("font-body", tokens.font_body),
        ("font-label", tokens.font_label),
        ("container", tokens.container),
    ];
    pairs
        .iter()
        .map(|(name, value)| format!("    --{}: {};\n", name, value))
        .collect()
}

const BASE_CSS: &str = r#"
.landing {
    min-height: 100vh;
    position: relative;
    margin: 0;
    background: var(--surface);
    color: var(--ink);
    font-family: var(--font-body);
    line-height: 1.5;
}

.landing * {
    box-sizing: border-box;
}

.landing a {
    color: inherit;
    text-decoration: none;
}

.grid-overlay {
    position: fixed;
    inset: 0;
    pointer-events: none;
    opacity: 0.03;
    background-image: linear-gradient(#000 1px, transparent 1px), linear-gradient(90deg, #000 1px, transparent 1px);
    background-size: 40px 40px;
}

.container {
    max-width: var(--container);
    margin: 0 auto;
    padding: 0 1.5rem;
}

.container--narrow {
    max-width: 56rem;
    text-align: center;
}

.site-header {
    position: relative;
    background: var(--card);
    border-bottom: 2px solid var(--line);
}

.site-header__inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding-top: 1rem;
    padding-bottom: 1rem;
}

.logo-box {
    padding: 0.5rem 1.5rem;
    border: var(--box-border);
    border-radius: var(--radius-button);
    background: rgba(244, 244, 245, 0.5);
}

.logo-box__text {
    font-family: var(--font-label);
    font-weight: 700;
    color: #3f3f46;
}

.site-nav {
    display: none;
    gap: 2rem;
}

.site-nav__link {
    font-family: var(--font-label);
    font-size: 0.875rem;
    color: var(--muted);
    transition: color 0.2s ease;
}

.site-nav__link:hover {
    color: var(--accent);
}

.site-header__actions {
    display: flex;
    align-items: center;
    gap: 1rem;
}

.lang-switch {
    font-family: var(--font-label);
    font-size: 0.75rem;
    color: var(--subtle);
    border-bottom: 1px solid transparent;
}

.lang-switch:hover {
    color: var(--ink);
    border-bottom-color: var(--ink);
}

.header-cta {
    padding: 0.5rem 1rem;
    background: var(--dark);
    border-radius: var(--radius-button);
    font-family: var(--font-label);
    font-size: 0.875rem;
    color: #fff;
}

.section {
    position: relative;
    padding: 5rem 0;
    border-bottom: 2px solid var(--line);
}

.section--alt {
    background: var(--card);
}

.section-heading {
    margin-bottom: 3rem;
}

.section-heading--center {
    text-align: center;
    margin-bottom: 4rem;
}

.eyebrow {
    font-family: var(--font-label);
    font-size: 0.75rem;
    letter-spacing: 0.05em;
    color: var(--accent);
}

.section-title {
    margin: 0.5rem 0 0;
    font-size: 1.875rem;
    font-weight: 700;
    color: var(--ink);
}

.hero {
    position: relative;
    padding: 6rem 0;
    border-bottom: 2px solid var(--line);
}

.hero__grid,
.use-cases {
    display: grid;
    gap: 3rem;
    align-items: center;
}

.use-cases {
    gap: 4rem;
    align-items: start;
}

.badge {
    display: inline-block;
    margin-bottom: 1.5rem;
    padding: 0.25rem 0.75rem;
    background: var(--accent-tint);
    color: var(--accent);
    font-family: var(--font-label);
    font-size: 0.75rem;
    border: 1px solid var(--accent-soft);
    border-radius: var(--radius-button);
}

.hero__title {
    margin: 0 0 1.5rem;
    font-size: 2.25rem;
    font-weight: 700;
    line-height: 1.15;
}

.accent {
    color: var(--accent);
}

.hero__lead {
    margin: 0 0 2rem;
    font-size: 1.125rem;
    line-height: 1.65;
    color: var(--muted);
}

.button-row {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
}

.button-row--center {
    justify-content: center;
}

.button {
    padding: 0.75rem 1.5rem;
    font-family: var(--font-label);
    font-size: 1rem;
    border-radius: var(--radius-button);
    cursor: pointer;
    transition: all 0.2s ease;
}

.button--primary {
    background: var(--dark);
    color: #fff;
    border: 2px solid var(--dark);
}

.button--primary:hover {
    background: var(--accent);
    border-color: var(--accent);
}

.button--secondary {
    background: transparent;
    color: #3f3f46;
    border: 2px solid #d4d4d8;
}

.button--secondary:hover {
    border-color: var(--ink);
}

.button--accent {
    padding: 1rem 2rem;
    font-size: 1.125rem;
    background: var(--accent-soft);
    color: #fff;
    border: 2px solid var(--accent-soft);
}

.button--accent:hover {
    background: var(--accent);
}

.button--ghost {
    padding: 1rem 2rem;
    font-size: 1.125rem;
    background: transparent;
    color: #d4d4d8;
    border: 2px solid #52525b;
}

.button--ghost:hover {
    color: #fff;
    border-color: #a1a1aa;
}

.placeholder {
    display: flex;
    align-items: center;
    justify-content: center;
    border: var(--box-border);
    border-radius: var(--radius);
    background: rgba(244, 244, 245, 0.5);
}

.placeholder--square {
    aspect-ratio: 1 / 1;
}

.placeholder--video {
    aspect-ratio: 16 / 9;
}

.placeholder--dark {
    padding: 1rem;
    justify-content: flex-start;
    border-color: #52525b;
    background: rgba(39, 39, 42, 0.5);
}

.placeholder__caption {
    font-family: var(--font-label);
    font-size: 0.875rem;
    color: var(--subtle);
}

.hero__illustration {
    padding: 2rem;
    text-align: center;
}

.hero__icons {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 1rem;
    margin-bottom: 1rem;
}

.icon-tile {
    width: 4rem;
    height: 4rem;
    margin: 0 auto;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.5rem;
    background: var(--card);
    border: 2px solid #d4d4d8;
    border-radius: var(--radius-button);
}

.services-grid {
    display: grid;
    gap: 1.5rem;
}

.service-card {
    position: relative;
    padding: 1.5rem;
    background: var(--card);
    border: 2px solid #d4d4d8;
    border-radius: var(--radius);
    box-shadow: var(--shadow);
    transition: all 0.3s ease;
}

.service-card:hover {
    border-color: var(--accent-soft);
    box-shadow: var(--shadow-hover);
}

.service-card__icon {
    position: absolute;
    top: 0;
    right: 0;
    width: 4rem;
    height: 4rem;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.5rem;
    background: #f4f4f5;
    transition: all 0.3s ease;
}

.service-card:hover .service-card__icon {
    background: var(--accent-soft);
    color: #fff;
}

.service-card__body {
    padding-right: 4rem;
}

.service-card__title {
    margin: 0 0 0.5rem;
    font-family: var(--font-label);
    font-size: 1.125rem;
    font-weight: 700;
}

.service-card__description {
    margin: 0 0 1rem;
    font-size: 0.875rem;
    line-height: 1.65;
    color: var(--muted);
}

.service-card__tags {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
}

.service-card__tag {
    padding: 0.25rem 0.5rem;
    font-family: var(--font-label);
    font-size: 0.75rem;
    color: #3f3f46;
    background: #f4f4f5;
    border: 1px solid #d4d4d8;
    border-radius: var(--radius-button);
}

.use-case {
    display: flex;
    gap: 1.5rem;
    align-items: flex-start;
    padding: 1.5rem 0;
    border-bottom: 1px solid var(--line);
}

.use-case:last-child {
    border-bottom: 0;
}

.use-case__number {
    flex-shrink: 0;
    width: 3rem;
    height: 3rem;
    display: flex;
    align-items: center;
    justify-content: center;
    font-family: var(--font-label);
    font-size: 1.25rem;
    font-weight: 700;
    color: #fff;
    background: var(--accent-soft);
    border-radius: var(--radius-button);
}

.use-case__body {
    flex: 1;
}

.use-case__header {
    display: flex;
    align-items: baseline;
    gap: 1rem;
    margin-bottom: 0.5rem;
}

.use-case__title {
    margin: 0;
    font-family: var(--font-label);
    font-weight: 700;
}

.use-case__metric {
    font-family: var(--font-label);
    font-size: 0.875rem;
    font-weight: 700;
    color: var(--accent);
}

.use-case__description {
    margin: 0 0 0.75rem;
    font-size: 0.875rem;
    color: var(--muted);
}

.use-case__details {
    margin: 0;
    padding: 0;
    list-style: none;
}

.use-case__detail {
    display: flex;
    align-items: center;
    margin-bottom: 0.25rem;
    font-size: 0.75rem;
    color: var(--subtle);
}

.check {
    margin-right: 0.5rem;
    color: #22c55e;
}

.process-grid {
    display: grid;
    gap: 2rem;
}

.process-step__header {
    display: flex;
    align-items: center;
    gap: 1rem;
    margin-bottom: 1rem;
}

.process-step__number {
    width: 2.5rem;
    height: 2.5rem;
    display: flex;
    align-items: center;
    justify-content: center;
    font-family: var(--font-label);
    font-weight: 700;
    color: var(--muted);
    border: 2px solid #a1a1aa;
    border-radius: 9999px;
}

.process-step__title {
    margin: 0;
    font-family: var(--font-label);
    font-weight: 700;
}

.process-step__items {
    margin-left: 1.25rem;
    padding: 0 0 2rem 2.25rem;
    border-left: 2px dashed #d4d4d8;
}

.process-step__item {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    margin-bottom: 0.5rem;
    font-size: 0.875rem;
    color: var(--muted);
}

.bullet {
    width: 0.375rem;
    height: 0.375rem;
    background: var(--accent-soft);
}

.tech-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 1rem;
}

.tech-badge {
    padding: 1rem 0;
    text-align: center;
    font-family: var(--font-label);
    font-size: 0.875rem;
    color: var(--muted);
    border: var(--box-border);
    border-radius: var(--radius-button);
    background: rgba(244, 244, 245, 0.5);
}

.cta-band {
    padding: 6rem 0;
    background: var(--dark);
}

.cta-band__title {
    margin: 0 0 1.5rem;
    font-size: 1.875rem;
    font-weight: 700;
    color: #fff;
}

.cta-band__lead {
    max-width: 42rem;
    margin: 0 auto 2rem;
    font-size: 1.125rem;
    color: #a1a1aa;
}

.site-footer {
    padding: 3rem 0;
    background: var(--dark);
    border-top: 1px solid var(--dark-line);
    color: #a1a1aa;
    font-size: 0.875rem;
}

.site-footer__grid {
    display: grid;
    gap: 2rem;
}

.logo-box--dark {
    margin-bottom: 1rem;
    border-color: #52525b;
    background: rgba(39, 39, 42, 0.5);
}

.logo-box--dark .logo-box__text {
    color: #fff;
}

.site-footer__tagline {
    margin: 0;
    color: #71717a;
}

.site-footer__heading {
    margin: 0 0 1rem;
    font-family: var(--font-label);
    color: #fff;
}

.site-footer__links {
    margin: 0;
    padding: 0;
    list-style: none;
}

.site-footer__links li {
    margin-bottom: 0.5rem;
}

.site-footer__links a:hover {
    color: var(--accent-soft);
}

.site-footer__contact {
    font-family: var(--font-label);
    font-size: 0.75rem;
    color: #71717a;
    line-height: 2;
}

.site-footer__bottom {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
    margin-top: 3rem;
    padding-top: 2rem;
    border-top: 1px solid var(--dark-line);
}

.site-footer__copyright {
    margin: 0;
    font-family: var(--font-label);
    font-size: 0.75rem;
    color: #71717a;
}

.site-footer__legal {
    display: flex;
    gap: 1.5rem;
    font-family: var(--font-label);
    font-size: 0.75rem;
    color: #71717a;
}

.site-footer__legal a:hover {
    color: #fff;
}

@media (min-width: 768px) {
    .site-nav {
        display: flex;
    }

    .hero__title {
        font-size: 3rem;
    }

    .hero__grid,
    .use-cases,
    .services-grid {
        grid-template-columns: repeat(2, 1fr);
    }

    .process-grid,
    .site-footer__grid {
        grid-template-columns: repeat(4, 1fr);
    }

    .tech-grid {
        grid-template-columns: repeat(4, 1fr);
    }

    .cta-band__title {
        font-size: 2.25rem;
    }

    .site-footer__bottom {
        flex-direction: row;
    }
}

@media (min-width: 1024px) {
    .tech-grid {
        grid-template-columns: repeat(6, 1fr);
    }
}
"#;

const DASHED_CSS: &str = r#"
.landing--dashed .service-card__icon {
    border-left: 2px solid #d4d4d8;
    border-bottom: 2px solid #d4d4d8;
}
"#;

const ROUNDED_CSS: &str = r#"
.landing--rounded .section,
.landing--rounded .hero,
.landing--rounded .site-header {
    border-bottom-width: 1px;
}

.landing--rounded .service-card {
    border-width: 1px;
    border-color: var(--line);
    overflow: hidden;
}

.landing--rounded .service-card:hover {
    transform: translateY(-2px);
}

.landing--rounded .service-card__icon {
    top: 1rem;
    right: 1rem;
    width: 3rem;
    height: 3rem;
    border-radius: 12px;
    background: var(--accent-tint);
}

.landing--rounded .use-case {
    margin-bottom: 1rem;
    padding: 1.5rem;
    background: var(--card);
    border: 1px solid var(--line);
    border-radius: var(--radius);
    box-shadow: var(--shadow);
}

.landing--rounded .use-case:last-child {
    border-bottom: 1px solid var(--line);
}

.landing--rounded .badge,
.landing--rounded .service-card__tag {
    border-radius: 9999px;
}

.landing--rounded .process-step__items {
    border-left-style: solid;
    border-left-color: var(--line);
}

.landing--rounded .bullet {
    border-radius: 9999px;
}

.landing--rounded .tech-badge {
    background: var(--card);
    box-shadow: var(--shadow);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_scopes_tokens_to_theme_class() {
        let css = Theme::Dashed.stylesheet();
        assert!(css.starts_with(".landing--dashed {\n"));
        assert!(css.contains("    --box-border: 2px dashed #a1a1aa;\n"));
        assert!(css.contains("    --radius: 0;\n"));

        let css = Theme::Rounded.stylesheet();
        assert!(css.starts_with(".landing--rounded {\n"));
        assert!(css.contains("    --accent: #0070F3;\n"));
        assert!(css.contains("    --radius: 16px;\n"));
    }

    #[test]
    fn theme_rules_stay_with_their_theme() {
        assert!(!Theme::Dashed.stylesheet().contains(".landing--rounded"));
        assert!(!Theme::Rounded.stylesheet().contains(".landing--dashed"));
    }

    #[test]
    fn stylesheets_survive_text_escaping() {
        for theme in [Theme::Dashed, Theme::Rounded] {
            let css = theme.stylesheet();
            assert!(!css.contains(|c| matches!(c, '<' | '>' | '&')), "{:?}", theme);
        }
    }
}
