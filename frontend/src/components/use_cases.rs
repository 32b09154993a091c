use yew::prelude::*;
use crate::components::heading::Heading;
use crate::content::{section, SectionHeading, UseCase};

#[derive(Properties, PartialEq)]
pub struct UseCasesProps {
    pub heading: &'static SectionHeading,
    /// Caption of the screenshot placeholder next to the heading.
    pub media: &'static str,
    pub use_cases: &'static [UseCase],
}

#[function_component(UseCases)]
pub fn use_cases(props: &UseCasesProps) -> Html {
    html! {
        <section id={section::USE_CASES} class="section">
            <div class="container use-cases">
                <div>
                    <Heading heading={props.heading} />
                    <div class="placeholder placeholder--video">
                        <span class="placeholder__caption">{props.media}</span>
                    </div>
                </div>

                <div class="use-cases__list">
                    { for props.use_cases.iter().map(use_case_block) }
                </div>
            </div>
        </section>
    }
}

fn use_case_block(use_case: &UseCase) -> Html {
    html! {
        <div class="use-case">
            <div class="use-case__number">{use_case.number}</div>
            <div class="use-case__body">
                <div class="use-case__header">
                    <h4 class="use-case__title">{use_case.title}</h4>
                    <span class="use-case__metric">{use_case.metric}</span>
                </div>
                <p class="use-case__description">{use_case.description}</p>
                <ul class="use-case__details">
                    { for use_case.details.iter().map(|detail| html! {
                        <li class="use-case__detail">
                            <span class="check">{"✓"}</span>
                            {*detail}
                        </li>
                    }) }
                </ul>
            </div>
        </div>
    }
}
