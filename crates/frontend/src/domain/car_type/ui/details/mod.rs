mod view_model;

use leptos::prelude::*;
use thaw::*;

use contracts::domain::car_type::aggregate::{normalize_code, CarType};

use self::view_model::CarTypeDetailsViewModel;
use crate::shared::catalog::CatalogOptions;
use crate::shared::components::ui::{Select, Textarea};
use crate::shared::icons::icon;
use crate::shared::notify::NotifyService;

fn status_options() -> Vec<(String, String)> {
    vec![
        ("1".to_string(), "Active".to_string()),
        ("0".to_string(), "Inactive".to_string()),
    ]
}

/// Create/edit modal for a car type. In-progress edits are dropped when the
/// modal closes; nothing is written back until the server accepts the save.
#[component]
pub fn CarTypeDetails(
    /// Existing record for edit mode; `None` creates.
    entity: Option<CarType>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let notify = use_context::<NotifyService>().expect("NotifyService not found in context");
    let vm = CarTypeDetailsViewModel::new(entity.as_ref(), CatalogOptions::default());

    let title = if vm.is_edit_mode() {
        "Edit car type"
    } else {
        "New car type"
    };
    let code_editable = vm.code_editable();
    let stored_code = vm.original_code.clone().unwrap_or_default();

    let vm_clone = vm.clone();

    view! {
        <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| on_cancel.run(())
                    >
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {
                        let vm = vm_clone.clone();
                        move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })
                    }

                    <div class="form__group">
                        <label class="form__label" for="car-type-code">"Code"</label>
                        {if code_editable {
                            let vm_value = vm_clone.clone();
                            let vm_input = vm_clone.clone();
                            view! {
                                <input
                                    type="text"
                                    id="car-type-code"
                                    class="form__input"
                                    prop:value=move || vm_value.form.get().code.clone().unwrap_or_default()
                                    on:input=move |ev| {
                                        // uppercase as typed, anything outside [A-Z_] is dropped
                                        let normalized = normalize_code(&event_target_value(&ev));
                                        vm_input.form.update(|f| f.code = Some(normalized));
                                    }
                                    placeholder="SUV"
                                />
                            }.into_any()
                        } else {
                            view! {
                                <input
                                    type="text"
                                    id="car-type-code"
                                    class="form__input"
                                    prop:value=stored_code.clone()
                                    disabled=true
                                />
                            }.into_any()
                        }}
                        {
                            let vm = vm_clone.clone();
                            move || vm.field_error("code").map(|m| view! { <div class="form__error">{m}</div> })
                        }
                    </div>

                    <div class="form__group">
                        <label class="form__label" for="car-type-name">"Name"</label>
                        <input
                            type="text"
                            id="car-type-name"
                            class="form__input"
                            prop:value={
                                let vm = vm_clone.clone();
                                move || vm.form.get().name
                            }
                            on:input={
                                let vm = vm_clone.clone();
                                move |ev| {
                                    vm.form.update(|f| f.name = event_target_value(&ev));
                                }
                            }
                            placeholder="Xe 7 chỗ"
                        />
                        {
                            let vm = vm_clone.clone();
                            move || vm.field_error("name").map(|m| view! { <div class="form__error">{m}</div> })
                        }
                    </div>

                    <Textarea
                        label="Description"
                        value=Signal::derive({
                            let vm = vm_clone.clone();
                            move || vm.form.get().description
                        })
                        on_input=Callback::new({
                            let vm = vm_clone.clone();
                            move |value| {
                                vm.form.update(|f| f.description = value);
                            }
                        })
                        placeholder="Optional, up to 255 characters"
                    />
                    {
                        let vm = vm_clone.clone();
                        move || vm.field_error("description").map(|m| view! { <div class="form__error">{m}</div> })
                    }

                    <Select
                        label="Status"
                        value=Signal::derive({
                            let vm = vm_clone.clone();
                            move || vm.form.get().status.to_string()
                        })
                        on_change=Callback::new({
                            let vm = vm_clone.clone();
                            move |value: String| {
                                let status = value.parse().unwrap_or(1);
                                vm.form.update(|f| f.status = status);
                            }
                        })
                        options=Signal::derive(status_options)
                    />
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_cancel.run(())
                        disabled=Signal::derive({
                            let vm = vm_clone.clone();
                            move || vm.saving.get()
                        })
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click={
                            let vm = vm_clone.clone();
                            move |_| vm.save(notify, on_saved)
                        }
                        disabled=Signal::derive({
                            let vm = vm_clone.clone();
                            move || vm.saving.get()
                        })
                    >
                        {
                            let vm = vm_clone.clone();
                            move || if vm.saving.get() { "Saving..." } else { "Save" }
                        }
                    </Button>
                </div>
            </div>
        </div>
    }
}
