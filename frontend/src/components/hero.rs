use yew::prelude::*;
use crate::content::{section, Hero as HeroContent};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub hero: &'static HeroContent,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let hero = props.hero;
    let [first, accented, last] = hero.headline;

    html! {
        <section id={section::HERO} class="hero">
            <div class="container hero__grid">
                <div class="hero__copy">
                    <div class="badge">{hero.eyebrow}</div>
                    <h1 class="hero__title">
                        {first}<br/>
                        <span class="accent">{accented}</span><br/>
                        {last}
                    </h1>
                    <p class="hero__lead">{hero.lead}</p>
                    <div class="button-row">
                        <button type="button" class="button button--primary">{hero.primary_cta}</button>
                        <button type="button" class="button button--secondary">{hero.secondary_cta}</button>
                    </div>
                </div>

                <div class="placeholder placeholder--square">
                    <div class="hero__illustration">
                        <div class="hero__icons">
                            { for hero.illustration_icons.iter().map(|icon| html! {
                                <div class="icon-tile">{*icon}</div>
                            }) }
                        </div>
                        <p class="placeholder__caption">{hero.illustration_caption}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
