use yew::prelude::*;
use crate::content::LandingContent;

#[derive(Properties, PartialEq)]
pub struct SiteHeaderProps {
    pub content: &'static LandingContent,
    /// Path of the other edition, linked from the language switch.
    pub switch_href: &'static str,
    pub switch_lang: &'static str,
}

#[function_component(SiteHeader)]
pub fn site_header(props: &SiteHeaderProps) -> Html {
    let SiteHeaderProps { content, switch_href, switch_lang } = props;

    html! {
        <header class="site-header">
            <div class="container site-header__inner">
                <div class="logo-box">
                    <span class="logo-box__text">{content.brand}</span>
                </div>

                <nav class="site-nav">
                    { for content.nav.iter().map(|item| html! {
                        <a href={format!("#{}", item.anchor)} class="site-nav__link">
                            {item.label}
                        </a>
                    }) }
                </nav>

                <div class="site-header__actions">
                    <a href={*switch_href} hreflang={*switch_lang} class="lang-switch">
                        {content.switch_label}
                    </a>
                    <div class="header-cta">
                        <span>{content.header_cta}</span>
                    </div>
                </div>
            </div>
        </header>
    }
}
