use leptos::prelude::*;

use crate::shared::icons::icon;

/// Small headline-number card for the list-page header.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Count to display (None = not loaded yet)
    #[prop(into)]
    value: Signal<Option<usize>>,
    /// Visual accent: "", "success" or "muted"
    #[prop(optional)]
    tone: &'static str,
) -> impl IntoView {
    let card_class = match tone {
        "success" => "stat-card stat-card--success",
        "muted" => "stat-card stat-card--muted",
        _ => "stat-card",
    };

    view! {
        <div class=card_class>
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__body">
                <span class="stat-card__label">{label}</span>
                <span class="stat-card__value">
                    {move || value.get().map(|v| v.to_string()).unwrap_or_else(|| "—".to_string())}
                </span>
            </div>
        </div>
    }
}
