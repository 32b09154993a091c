use yew::prelude::*;
use crate::components::heading::Heading;
use crate::content::{section, SectionHeading, Service};

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub heading: &'static SectionHeading,
    pub services: &'static [Service],
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    html! {
        <section id={section::SERVICES} class="section section--alt">
            <div class="container">
                <Heading heading={props.heading} />
                <div class="services-grid">
                    { for props.services.iter().map(service_card) }
                </div>
            </div>
        </section>
    }
}

fn service_card(service: &Service) -> Html {
    html! {
        <div class="service-card">
            <div class="service-card__icon">{service.icon}</div>
            <div class="service-card__body">
                <h3 class="service-card__title">{service.title}</h3>
                <p class="service-card__description">{service.description}</p>
                <div class="service-card__tags">
                    { for service.tags.iter().map(|tag| html! {
                        <span class="service-card__tag">{*tag}</span>
                    }) }
                </div>
            </div>
        </div>
    }
}
