use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::backdrop::AuroraBackdrop;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <AuroraBackdrop class="min-h-screen">
            <div class="container not-found">
                <h1 class="section__title">{"Page not found"}</h1>
                <p class="muted">{"The page you were looking for does not exist."}</p>
                <Link<Route> to={Route::Home} classes="btn btn--hero">
                    {"Back to Happirate"}
                </Link<Route>>
            </div>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: flex-start;
                    justify-content: center;
                    gap: 1rem;
                }
                "#}
            </style>
        </AuroraBackdrop>
    }
}
