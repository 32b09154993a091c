use yew::prelude::*;

#[function_component(GridOverlay)]
pub fn grid_overlay() -> Html {
    html! {
        <div class="grid-overlay" aria-hidden="true"></div>
    }
}
