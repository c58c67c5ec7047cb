use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::domain::car_type::ui::list::CarTypeListPage;
use crate::layout::Shell;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route
                        path=path!("/")
                        view=|| view! { <Redirect path="/catalog/car-types" /> }
                    />
                    <Route path=path!("/catalog/car-types") view=CarTypeListPage />
                </Routes>
            </Shell>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--empty">
            <h1 class="page__title">"Page not found"</h1>
            <a href="/catalog/car-types">"Back to the catalog"</a>
        </div>
    }
}
