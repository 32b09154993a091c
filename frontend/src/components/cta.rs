use yew::prelude::*;
use crate::content::{section, Cta};

#[derive(Properties, PartialEq)]
pub struct CallToActionProps {
    pub cta: &'static Cta,
}

#[function_component(CallToAction)]
pub fn call_to_action(props: &CallToActionProps) -> Html {
    let cta = props.cta;

    html! {
        <section id={section::CONTACT} class="cta-band">
            <div class="container container--narrow">
                <h2 class="cta-band__title">{cta.title}</h2>
                <p class="cta-band__lead">{cta.lead}</p>
                <div class="button-row button-row--center">
                    <button type="button" class="button button--accent">{cta.primary}</button>
                    <button type="button" class="button button--ghost">{cta.secondary}</button>
                </div>
            </div>
        </section>
    }
}
