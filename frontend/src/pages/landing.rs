use yew::prelude::*;
use crate::components::{
    cta::CallToAction,
    footer::SiteFooter,
    header::SiteHeader,
    hero::Hero,
    overlay::GridOverlay,
    process::Process,
    services::Services,
    tech_stack::TechStack,
    use_cases::UseCases,
};
use crate::edition::Edition;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub edition: Edition,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let edition = props.edition;
    let content = edition.content();
    let theme = edition.theme();

    // Scroll to top and retitle the tab whenever the edition changes
    {
        use_effect_with_deps(
            move |edition: &Edition| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                    if let Some(document) = window.document() {
                        document.set_title(edition.content().page_title);
                    }
                }
                || ()
            },
            edition,
        );
    }

    html! {
        <main class={classes!("landing", theme.class_name())} lang={content.lang}>
            <style>{theme.stylesheet()}</style>
            <GridOverlay />

            <SiteHeader
                content={content}
                switch_href={edition.other().path()}
                switch_lang={edition.other().lang()}
            />
            <Hero hero={&content.hero} />
            <Services heading={&content.services_heading} services={content.services} />
            <UseCases
                heading={&content.use_cases_heading}
                media={content.use_cases_media}
                use_cases={content.use_cases}
            />
            <Process heading={&content.process_heading} steps={content.process_steps} />
            <TechStack heading={&content.tech_heading} entries={content.tech_stack} />
            <CallToAction cta={&content.cta} />
            <SiteFooter footer={&content.footer} services={content.services} />
        </main>
    }
}
