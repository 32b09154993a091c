use yew::prelude::*;
use crate::content::{Footer, Service};

#[derive(Properties, PartialEq)]
pub struct SiteFooterProps {
    pub footer: &'static Footer,
    /// Service titles are repeated as footer links.
    pub services: &'static [Service],
}

#[function_component(SiteFooter)]
pub fn site_footer(props: &SiteFooterProps) -> Html {
    let footer = props.footer;
    let services = props.services;

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="site-footer__grid">
                    <div>
                        <div class="logo-box logo-box--dark">
                            <span class="logo-box__text">{footer.brand}</span>
                        </div>
                        <p class="site-footer__tagline">
                            { for footer.tagline.iter().enumerate().map(|(i, line)| html! {
                                <>
                                    { if i > 0 { html! { <br/> } } else { html! {} } }
                                    {*line}
                                </>
                            }) }
                        </p>
                    </div>

                    <div>
                        <h4 class="site-footer__heading">{footer.services_heading}</h4>
                        {link_list(services.iter().map(|s| s.title))}
                    </div>

                    <div>
                        <h4 class="site-footer__heading">{footer.resources_heading}</h4>
                        {link_list(footer.resources.iter().copied())}
                    </div>

                    <div>
                        <h4 class="site-footer__heading">{footer.contact_heading}</h4>
                        <div class="placeholder placeholder--dark">
                            <div class="site-footer__contact">
                                { for footer.contact_placeholders.iter().map(|p| html! { <div>{*p}</div> }) }
                            </div>
                        </div>
                    </div>
                </div>

                <div class="site-footer__bottom">
                    <p class="site-footer__copyright">{footer.copyright}</p>
                    <div class="site-footer__legal">
                        { for footer.legal_links.iter().map(|label| html! { <a href="#">{*label}</a> }) }
                    </div>
                </div>
            </div>
        </footer>
    }
}

fn link_list(labels: impl Iterator<Item = &'static str>) -> Html {
    html! {
        <ul class="site-footer__links">
            { for labels.map(|label| html! { <li><a href="#">{label}</a></li> }) }
        </ul>
    }
}
