use yew::prelude::*;
use crate::content::SectionHeading;

#[derive(Properties, PartialEq)]
pub struct HeadingProps {
    pub heading: &'static SectionHeading,
    #[prop_or_default]
    pub centered: bool,
}

/// Small mono eyebrow over a section title.
#[function_component(Heading)]
pub fn heading(props: &HeadingProps) -> Html {
    let HeadingProps { heading, centered } = props;

    html! {
        <div class={classes!("section-heading", centered.then(|| "section-heading--center"))}>
            <span class="eyebrow">{heading.eyebrow}</span>
            <h2 class="section-title">{heading.title}</h2>
        </div>
    }
}
