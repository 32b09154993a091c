use yew::prelude::*;
use crate::components::heading::Heading;
use crate::content::{section, ProcessStep, SectionHeading};

#[derive(Properties, PartialEq)]
pub struct ProcessProps {
    pub heading: &'static SectionHeading,
    pub steps: &'static [ProcessStep],
}

#[function_component(Process)]
pub fn process(props: &ProcessProps) -> Html {
    html! {
        <section id={section::PROCESS} class="section section--alt">
            <div class="container">
                <Heading heading={props.heading} centered={true} />
                <div class="process-grid">
                    { for props.steps.iter().map(|step| html! {
                        <div class="process-step">
                            <div class="process-step__header">
                                <div class="process-step__number">{step.step}</div>
                                <h4 class="process-step__title">{step.title}</h4>
                            </div>
                            <div class="process-step__items">
                                { for step.items.iter().map(|item| html! {
                                    <div class="process-step__item">
                                        <div class="bullet"></div>
                                        {*item}
                                    </div>
                                }) }
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
