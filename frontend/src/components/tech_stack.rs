use yew::prelude::*;
use crate::components::heading::Heading;
use crate::content::{section, SectionHeading};

#[derive(Properties, PartialEq)]
pub struct TechStackProps {
    pub heading: &'static SectionHeading,
    pub entries: &'static [&'static str],
}

#[function_component(TechStack)]
pub fn tech_stack(props: &TechStackProps) -> Html {
    html! {
        <section id={section::STACK} class="section">
            <div class="container">
                <Heading heading={props.heading} centered={true} />
                <div class="tech-grid">
                    { for props.entries.iter().map(|tech| html! {
                        <div class="tech-badge"><span>{*tech}</span></div>
                    }) }
                </div>
            </div>
        </section>
    }
}
