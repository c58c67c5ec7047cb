mod state;

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use contracts::domain::car_type::aggregate::CarType;

use self::state::create_state;
use crate::domain::car_type::api;
use crate::domain::car_type::ui::details::CarTypeDetails;
use crate::shared::api::user_message;
use crate::shared::catalog::{CatalogStats, DeleteFlow, ReloadToken, StatusFilter};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::Select;
use crate::shared::date_utils::format_datetime_opt;
use crate::shared::icons::icon;
use crate::shared::notify::{NoticeKind, NotifyService};

fn status_filter_options() -> Vec<(String, String)> {
    vec![
        ("".to_string(), "All".to_string()),
        ("1".to_string(), "Active".to_string()),
        ("0".to_string(), "Inactive".to_string()),
    ]
}

/// Staff page for the car type catalog: searchable paged table, stat cards,
/// create/edit modal and a confirmation-gated delete.
#[component]
pub fn CarTypeListPage() -> impl IntoView {
    let notify = use_context::<NotifyService>().expect("NotifyService not found in context");
    let state = create_state();
    let delete_flow: RwSignal<DeleteFlow<CarType>> = RwSignal::new(DeleteFlow::Closed);
    let reload_guard = RwSignal::new(ReloadToken::default());
    let editing: RwSignal<Option<CarType>> = RwSignal::new(None);
    let (show_create, set_show_create) = signal(false);
    let filter_expanded = RwSignal::new(true);

    let reload = move || {
        // A response is applied only while its token is the latest issued,
        // so overlapping searches cannot leave a stale page on screen.
        let token = reload_guard
            .try_update(|guard| guard.issue())
            .unwrap_or_default();
        state.update(|s| s.loading = true);
        spawn_local(async move {
            loop {
                let query = state.with_untracked(|s| s.query.clone());
                let result = api::search(&query).await;
                if !reload_guard.with_untracked(|guard| guard.is_current(token)) {
                    return;
                }
                match result {
                    Ok(page) => {
                        let total = page.total();
                        let page_moved = state
                            .try_update(|s| s.apply_page(page.items, total))
                            .unwrap_or(false);
                        if !page_moved {
                            return;
                        }
                        // the page was clamped back; fetch its actual rows
                        state.update(|s| s.loading = true);
                    }
                    Err(e) => {
                        // previous list stays on screen
                        log::warn!("car type search failed: {}", e);
                        state.update(|s| s.loading = false);
                        notify.error(user_message(&e));
                        return;
                    }
                }
            }
        });
    };

    let reload_stats = move || {
        spawn_local(async move {
            match api::fetch_all().await {
                Ok(all) => state.update(|s| {
                    s.stats = Some(CatalogStats::tally(all.iter().map(|t| t.status)));
                }),
                Err(e) => log::warn!("car type stats fetch failed: {}", e),
            }
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            reload();
            reload_stats();
        }
    });

    // Reloads on every keystroke; the token guard covers the resulting
    // request overlap.
    let keyword_changed = move |value: String| {
        state.update(|s| s.query.set_keyword(value));
        reload();
    };

    let status_changed = move |value: String| {
        state.update(|s| s.query.set_status(StatusFilter::from_value(&value)));
        reload();
    };

    let reset_filters = move || {
        state.update(|s| {
            s.query.set_keyword(String::new());
            s.query.set_status(StatusFilter::All);
        });
        reload();
    };

    let go_to_page = move |page: usize| {
        state.update(|s| {
            let bounds = s.total_pages;
            s.query.go_to_page(page, bounds);
        });
        reload();
    };

    let change_page_size = move |size: usize| {
        state.update(|s| s.query.set_page_size(size));
        reload();
    };

    let confirm_delete = move || {
        let Some(target) = delete_flow
            .try_update(|flow| flow.begin())
            .flatten()
        else {
            return;
        };
        spawn_local(async move {
            match api::delete(target.id).await {
                Ok(()) => {
                    delete_flow.update(|flow| flow.succeed());
                    notify.publish(
                        NoticeKind::Delete,
                        format!("Car type \"{}\" deleted", target.name),
                    );
                    state.update(|s| {
                        let page = s.page_after_removal();
                        s.query.page = page;
                    });
                    reload();
                    reload_stats();
                }
                Err(e) => {
                    log::warn!("car type delete failed: {}", e);
                    delete_flow.update(|flow| flow.fail(user_message(&e)));
                }
            }
        });
    };

    let on_saved = Callback::new(move |_| {
        set_show_create.set(false);
        editing.set(None);
        reload();
        reload_stats();
    });

    let stats_value = move |pick: fn(CatalogStats) -> usize| {
        Signal::derive(move || state.with(|s| s.stats.map(pick)))
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Car types"</h1>
                    <Badge>
                        {move || state.with(|s| s.total_count.to_string())}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| set_show_create.set(true)
                    >
                        {icon("plus")}
                        " New car type"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            reload();
                            reload_stats();
                        }
                        disabled=Signal::derive(move || state.with(|s| s.loading))
                    >
                        {icon("refresh")}
                        {move || if state.with(|s| s.loading) { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-cards">
                    <StatCard
                        label="Total types"
                        icon_name="car-types"
                        value=stats_value(|s| s.total)
                    />
                    <StatCard
                        label="Active"
                        icon_name="check-circle"
                        value=stats_value(|s| s.active)
                        tone="success"
                    />
                    <StatCard
                        label="Inactive"
                        icon_name="pause-circle"
                        value=stats_value(|s| s.inactive)
                        tone="muted"
                    />
                </div>

                <FilterPanel
                    is_expanded=filter_expanded
                    active_filters_count=Signal::derive(move || {
                        state.with(|s| s.query.active_filter_count())
                    })
                    pagination_controls=move || view! {
                        <PaginationControls
                            current_page=Signal::derive(move || state.with(|s| s.query.page))
                            total_pages=Signal::derive(move || state.with(|s| s.total_pages))
                            total_count=Signal::derive(move || state.with(|s| s.total_count))
                            page_size=Signal::derive(move || state.with(|s| s.query.page_size))
                            on_page_change=Callback::new(go_to_page)
                            on_page_size_change=Callback::new(change_page_size)
                        />
                    }.into_any()
                    filter_content=move || view! {
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <div class="form__group" style="flex: 1; max-width: 320px;">
                                <label class="form__label" for="car-type-keyword">"Keyword"</label>
                                <input
                                    type="text"
                                    id="car-type-keyword"
                                    class="form__input"
                                    prop:value=move || state.with(|s| s.query.keyword.clone())
                                    on:input=move |ev| keyword_changed(event_target_value(&ev))
                                    placeholder="Code or name..."
                                />
                            </div>
                            <div style="width: 160px;">
                                <Select
                                    label="Status"
                                    value=Signal::derive(move || {
                                        state.with(|s| s.query.status.as_value().to_string())
                                    })
                                    on_change=Callback::new(status_changed)
                                    options=Signal::derive(status_filter_options)
                                />
                            </div>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| reset_filters()
                            >
                                "Reset"
                            </Button>
                        </Flex>
                    }.into_any()
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=110.0>"Code"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Name"</TableHeaderCell>
                                <TableHeaderCell min_width=220.0>"Description"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Status"</TableHeaderCell>
                                <TableHeaderCell min_width=130.0>"Created"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || state.with(|s| s.items.clone())
                                key=|t| t.id.value()
                                children=move |car_type| {
                                    let for_edit = car_type.clone();
                                    let for_delete = car_type.clone();
                                    let created = format_datetime_opt(car_type.created_at);
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">{car_type.code.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {car_type.name.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {car_type.description.clone().unwrap_or_else(|| "-".to_string())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if car_type.status.is_active() {
                                                        view! { <span class="badge badge--success">"Active"</span> }.into_any()
                                                    } else {
                                                        view! { <span class="badge badge--neutral">"Inactive"</span> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{created}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing.set(Some(for_edit.clone()))
                                                    attr:title="Edit"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| {
                                                        delete_flow.update(|flow| {
                                                            flow.request(for_delete.clone());
                                                        });
                                                    }
                                                    attr:title="Delete"
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                {move || if show_create.get() {
                    view! {
                        <CarTypeDetails
                            entity=None
                            on_saved=on_saved
                            on_cancel=Callback::new(move |_| set_show_create.set(false))
                        />
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }}

                {move || editing.get().map(|car_type| view! {
                    <CarTypeDetails
                        entity=Some(car_type)
                        on_saved=on_saved
                        on_cancel=Callback::new(move |_| editing.set(None))
                    />
                })}

                <ConfirmDeleteDialog
                    flow=delete_flow
                    on_confirm=Callback::new(move |_| confirm_delete())
                />
            </div>
        </div>
    }
}

/// The confirmation gate in front of delete. After a server conflict the
/// confirm button stays disabled; the dialog has to be dismissed and
/// reopened before another attempt.
#[component]
fn ConfirmDeleteDialog(
    flow: RwSignal<DeleteFlow<CarType>>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    let cancel = move |_| flow.update(|f| f.cancel());

    view! {
        {move || flow.with(|f| f.target().map(|t| t.name.clone())).map(|name| view! {
            <div class="modal-overlay">
                <div class="modal modal--confirm">
                    <div class="modal-header">
                        <h2 class="modal-title">"Delete car type"</h2>
                        <Button appearance=ButtonAppearance::Subtle on_click=cancel>
                            {icon("x")}
                        </Button>
                    </div>
                    <div class="modal-body">
                        <p>
                            "Delete car type \"" {name} "\"? This cannot be undone."
                        </p>
                        {move || flow.with(|f| f.error().map(str::to_string)).map(|e| view! {
                            <div class="alert alert--error">{e}</div>
                        })}
                    </div>
                    <div class="modal-footer">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=cancel
                            disabled=Signal::derive(move || flow.with(|f| f.is_deleting()))
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_confirm.run(())
                            disabled=Signal::derive(move || flow.with(|f| !f.can_confirm()))
                        >
                            {move || if flow.with(|f| f.is_deleting()) { "Deleting..." } else { "Delete" }}
                        </Button>
                    </div>
                </div>
            </div>
        })}
    }
}
