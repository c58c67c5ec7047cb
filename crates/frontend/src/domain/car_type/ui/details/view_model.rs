use std::collections::BTreeMap;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use contracts::domain::car_type::aggregate::{CarType, CarTypeDto, CarTypeId};

use crate::domain::car_type::api;
use crate::shared::api::{user_message, ApiError, ConflictField};
use crate::shared::catalog::CatalogOptions;
use crate::shared::notify::{NoticeKind, NotifyService};

#[derive(Clone, Copy)]
enum Mode {
    Create,
    Edit(CarTypeId),
}

/// ViewModel for the car type create/edit form.
///
/// Validation runs locally on submit; the remote client is only called once
/// every rule passes. Remote conflicts land either on the offending field or
/// in the form-level error banner.
#[derive(Clone)]
pub struct CarTypeDetailsViewModel {
    pub form: RwSignal<CarTypeDto>,
    pub field_errors: RwSignal<BTreeMap<&'static str, String>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    /// Stored code for display when editing with write-once codes.
    pub original_code: Option<String>,
    mode: Mode,
    options: CatalogOptions,
}

impl CarTypeDetailsViewModel {
    /// `entity` present = edit mode with fields pre-populated; prior errors
    /// always start cleared.
    pub fn new(entity: Option<&CarType>, options: CatalogOptions) -> Self {
        let (mode, form, original_code) = match entity {
            Some(entity) => (
                Mode::Edit(entity.id),
                CarTypeDto::from_entity(entity, options.code_editable),
                Some(entity.code.clone()),
            ),
            None => (
                Mode::Create,
                CarTypeDto {
                    code: Some(String::new()),
                    status: 1,
                    ..CarTypeDto::default()
                },
                None,
            ),
        };

        Self {
            form: RwSignal::new(form),
            field_errors: RwSignal::new(BTreeMap::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            original_code,
            mode,
            options,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        matches!(self.mode, Mode::Edit(_))
    }

    /// Whether the form carries an editable code field.
    pub fn code_editable(&self) -> bool {
        matches!(self.mode, Mode::Create) || self.options.code_editable
    }

    pub fn field_error(&self, field: &'static str) -> Option<String> {
        self.field_errors.with(|errors| errors.get(field).cloned())
    }

    /// Validate and, if clean, create or update. `on_saved` fires only after
    /// the server accepted the payload.
    pub fn save(&self, notify: NotifyService, on_saved: Callback<()>) {
        if self.saving.get_untracked() {
            return;
        }

        let dto = self.form.get_untracked();
        let errors = dto.validate(self.code_editable());
        if !errors.is_empty() {
            self.field_errors.set(errors);
            return;
        }
        self.field_errors.set(BTreeMap::new());
        self.error.set(None);
        self.saving.set(true);

        let vm = self.clone();
        let mode = self.mode;
        spawn_local(async move {
            let result = match mode {
                Mode::Create => api::create(&dto).await,
                Mode::Edit(id) => api::update(id, &dto).await,
            };
            match result {
                Ok(saved) => {
                    let (kind, verb) = match mode {
                        Mode::Create => (NoticeKind::Create, "created"),
                        Mode::Edit(_) => (NoticeKind::Update, "updated"),
                    };
                    notify.publish(kind, format!("Car type \"{}\" {}", saved.name, verb));
                    on_saved.run(());
                }
                Err(e) => {
                    log::warn!("car type save failed: {}", e);
                    vm.saving.set(false);
                    vm.apply_remote_error(e);
                }
            }
        });
    }

    /// Route a remote failure onto the form: duplicate-field conflicts attach
    /// to their input, everything else goes to the banner.
    fn apply_remote_error(&self, error: ApiError) {
        let message = user_message(&error);
        match &error {
            ApiError::ValidationConflict {
                field: ConflictField::Code,
                ..
            } => {
                self.field_errors.update(|e| {
                    e.insert("code", message);
                });
            }
            ApiError::ValidationConflict {
                field: ConflictField::Name,
                ..
            } => {
                self.field_errors.update(|e| {
                    e.insert("name", message);
                });
            }
            _ => self.error.set(Some(message)),
        }
    }
}
