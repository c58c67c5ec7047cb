use leptos::prelude::*;

use crate::routes::AppRoutes;
use crate::shared::notify::{NotifyService, ToastHost};

#[component]
pub fn App() -> impl IntoView {
    // Controllers receive the notifier through context, not a global.
    provide_context(NotifyService::new());

    view! {
        <AppRoutes />
        <ToastHost />
    }
}
