use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;

/// Main application shell for the staff console.
///
/// ```text
/// +------------------------------------------+
/// |               TopHeader                  |
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header class="top-header">
                <span class="top-header__brand">"Booking Console"</span>
            </header>

            <div class="app-body">
                <Sidebar />
                <main class="app-main">{children()}</main>
            </div>
        </div>
    }
}

/// Catalog sections of the staff console. Only the car type catalog is
/// routed from this shell; the remaining sections live in their own
/// deployments and are linked through the top-level navigation.
#[component]
fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar__section">"Catalog"</div>
            <A href="/catalog/car-types" attr:class="sidebar__link">
                {icon("car-types")}
                <span>"Car types"</span>
            </A>
            <span class="sidebar__link sidebar__link--disabled">
                {icon("tours")}
                <span>"Tours"</span>
            </span>
            <span class="sidebar__link sidebar__link--disabled">
                {icon("bookings")}
                <span>"Bookings"</span>
            </span>
            <span class="sidebar__link sidebar__link--disabled">
                {icon("refunds")}
                <span>"Refunds"</span>
            </span>
            <span class="sidebar__link sidebar__link--disabled">
                {icon("invoices")}
                <span>"Invoices"</span>
            </span>
        </nav>
    }
}
