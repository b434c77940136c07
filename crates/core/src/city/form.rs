//! Create/edit form state.
//!
//! One [`CityForm`] backs both the modal and the full-page flow. The page
//! that shows the form owns the value; nothing here is global. Client-side
//! checks use the same rule set as the server, but a form that passes them
//! still goes through server validation on submit.

use serde::Serialize;

use crate::city::{
    validate_field, CityField, CityFormValues, FieldErrors, CITIES_PATH, CITY_FIELDS,
};
use crate::types::DbId;

/// Whether the form creates a new city or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum FormMode {
    Create,
    Edit { id: DbId },
}

/// Where the form is displayed. Decides what happens after a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Presentation {
    Modal,
    Page,
}

/// HTTP method a form submits with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitMethod {
    Post,
    Patch,
}

/// A request the form wants sent to the city controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub method: SubmitMethod,
    pub path: String,
    pub payload: CityFormValues,
}

/// Result of a submission as reported by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved,
    Rejected(FieldErrors),
}

/// What the owner of the form should do after a submission settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEffect {
    CloseModal,
    NavigateTo(String),
    /// Keep the form on screen showing its errors.
    Stay,
}

/// Render-ready description of one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub required: bool,
    pub min_length: usize,
    pub max_length: usize,
    pub pattern: &'static str,
    pub show_char_count: bool,
    pub char_count: usize,
    pub value: String,
    pub error: Option<String>,
    pub disabled: bool,
}

/// Render-ready description of the whole form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormDescriptor {
    #[serde(flatten)]
    pub mode: FormMode,
    pub title: &'static str,
    pub description: &'static str,
    pub submit_label: &'static str,
    pub method: SubmitMethod,
    pub action: String,
    pub processing: bool,
    pub fields: Vec<FieldView>,
}

/// State of one city form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityForm {
    mode: FormMode,
    presentation: Presentation,
    values: CityFormValues,
    errors: FieldErrors,
    processing: bool,
}

impl CityForm {
    /// An empty form for adding a city.
    pub fn create(presentation: Presentation) -> Self {
        Self {
            mode: FormMode::Create,
            presentation,
            values: CityFormValues::default(),
            errors: FieldErrors::new(),
            processing: false,
        }
    }

    /// A form pre-filled with an existing city's current values.
    pub fn edit(presentation: Presentation, id: DbId, name: &str) -> Self {
        Self {
            mode: FormMode::Edit { id },
            presentation,
            values: CityFormValues::new(name),
            errors: FieldErrors::new(),
            processing: false,
        }
    }

    /// Rebuild a form from submitted values and the errors they produced.
    pub fn rejected(
        mode: FormMode,
        presentation: Presentation,
        values: CityFormValues,
        errors: FieldErrors,
    ) -> Self {
        Self {
            mode,
            presentation,
            values,
            errors,
            processing: false,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn values(&self) -> &CityFormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    /// Update a field's value. Clears any error shown for that field.
    pub fn set(&mut self, field: CityField, value: impl Into<String>) {
        field.set(&mut self.values, value.into());
        self.errors.remove(field.spec().name);
    }

    /// Method and path the form submits to.
    pub fn target(&self) -> (SubmitMethod, String) {
        match self.mode {
            FormMode::Create => (SubmitMethod::Post, CITIES_PATH.to_string()),
            FormMode::Edit { id } => (SubmitMethod::Patch, format!("{CITIES_PATH}/{id}")),
        }
    }

    /// Run client-side checks and, if they pass, start a submission.
    ///
    /// Returns `None` without sending anything when a check fails (the
    /// errors are now on the form) or a submission is already in flight.
    pub fn submit(&mut self) -> Option<Submission> {
        if self.processing {
            return None;
        }

        let mut errors = FieldErrors::new();
        for &field in CITY_FIELDS {
            if let Err(err) = validate_field(field.spec(), field.value(&self.values)) {
                errors.insert(err.field, err.message);
            }
        }
        if !errors.is_empty() {
            self.errors = errors;
            return None;
        }

        self.errors = FieldErrors::new();
        self.processing = true;
        let (method, path) = self.target();
        Some(Submission {
            method,
            path,
            payload: self.values.clone(),
        })
    }

    /// Settle an in-flight submission.
    ///
    /// `on_success` runs only when the controller saved the city. An outcome
    /// arriving while nothing is in flight is ignored.
    pub fn finish(&mut self, outcome: SubmitOutcome, on_success: impl FnOnce()) -> FormEffect {
        if !self.processing {
            return FormEffect::Stay;
        }
        self.processing = false;
        match outcome {
            SubmitOutcome::Saved => {
                self.errors = FieldErrors::new();
                on_success();
                match self.presentation {
                    Presentation::Modal => FormEffect::CloseModal,
                    Presentation::Page => FormEffect::NavigateTo(CITIES_PATH.to_string()),
                }
            }
            SubmitOutcome::Rejected(errors) => {
                self.errors = errors;
                FormEffect::Stay
            }
        }
    }

    pub fn descriptor(&self) -> FormDescriptor {
        let (title, description, submit_label) = match self.mode {
            FormMode::Create => (
                "Add New City",
                "Enter the details of the new city below.",
                "Add City",
            ),
            FormMode::Edit { .. } => (
                "Edit City",
                "Update the city information below.",
                "Update City",
            ),
        };
        let (method, action) = self.target();

        let fields = CITY_FIELDS
            .iter()
            .map(|&field| {
                let spec = field.spec();
                let value = field.value(&self.values).to_string();
                FieldView {
                    name: spec.name,
                    label: spec.label,
                    placeholder: spec.placeholder,
                    required: spec.required,
                    min_length: spec.min_length,
                    max_length: spec.max_length,
                    pattern: spec.charset.as_str(),
                    show_char_count: spec.show_char_count,
                    char_count: value.chars().count(),
                    error: self.errors.get(spec.name).map(str::to_string),
                    value,
                    disabled: self.processing,
                }
            })
            .collect();

        FormDescriptor {
            mode: self.mode,
            title,
            description,
            submit_label,
            method,
            action,
            processing: self.processing,
            fields,
        }
    }
}
