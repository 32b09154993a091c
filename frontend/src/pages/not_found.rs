use yew::prelude::*;
use crate::edition::Edition;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="not-found">
            <div class="not-found__box">
                <span class="not-found__code">{"404"}</span>
                <p>{"Seite nicht gefunden / Page not found"}</p>
                <div class="not-found__links">
                    { for Edition::ALL.iter().map(|edition| html! {
                        <a href={edition.path()} hreflang={edition.lang()}>
                            {edition.content().page_title}
                        </a>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #fafafa;
                    color: #18181b;
                    font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
                }

                .not-found__box {
                    padding: 3rem;
                    text-align: center;
                    border: 2px dashed #a1a1aa;
                    background: rgba(244, 244, 245, 0.5);
                }

                .not-found__code {
                    font-size: 3rem;
                    font-weight: 700;
                    color: #059669;
                }

                .not-found__links {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    margin-top: 1.5rem;
                }

                .not-found__links a {
                    color: #52525b;
                    text-decoration: none;
                }

                .not-found__links a:hover {
                    color: #059669;
                }
                "#}
            </style>
        </main>
    }
}
