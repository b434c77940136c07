//! Local state of the city list page.
//!
//! The list page owns which modal is open, which city is being edited, and
//! which city is awaiting delete confirmation. It passes the open
//! [`CityForm`] down to the modal instead of sharing flags process-wide.

use crate::city::form::{CityForm, Presentation};
use crate::city::CITIES_PATH;
use crate::types::DbId;

/// A confirmed delete, ready to send to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    pub id: DbId,
    pub path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CitiesIndexState {
    modal: Option<CityForm>,
    pending_delete: Option<DbId>,
}

impl CitiesIndexState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The form shown in the modal, if the modal is open.
    pub fn modal(&self) -> Option<&CityForm> {
        self.modal.as_ref()
    }

    pub fn modal_mut(&mut self) -> Option<&mut CityForm> {
        self.modal.as_mut()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_some()
    }

    /// Open the modal with an empty create form.
    pub fn open_create(&mut self) {
        self.modal = Some(CityForm::create(Presentation::Modal));
    }

    /// Open the modal editing the given city.
    pub fn open_edit(&mut self, id: DbId, name: &str) {
        self.modal = Some(CityForm::edit(Presentation::Modal, id, name));
    }

    /// Close the modal and forget the editing target.
    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    pub fn pending_delete(&self) -> Option<DbId> {
        self.pending_delete
    }

    /// Ask for confirmation before deleting `id`.
    pub fn request_delete(&mut self, id: DbId) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Confirm the pending delete.
    ///
    /// The confirmation stays pending until [`Self::delete_finished`] so the
    /// dialog remains visible while the request is in flight.
    pub fn confirm_delete(&self) -> Option<DeleteRequest> {
        self.pending_delete.map(|id| DeleteRequest {
            id,
            path: format!("{CITIES_PATH}/{id}"),
        })
    }

    pub fn delete_finished(&mut self) {
        self.pending_delete = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::form::{FormEffect, FormMode, SubmitOutcome};
    use crate::city::CityField;

    #[test]
    fn starts_closed() {
        let state = CitiesIndexState::new();
        assert!(!state.is_modal_open());
        assert_eq!(state.pending_delete(), None);
    }

    #[test]
    fn open_create_then_edit_replaces_target() {
        let mut state = CitiesIndexState::new();
        state.open_create();
        assert_eq!(state.modal().unwrap().mode(), FormMode::Create);

        state.open_edit(5, "Springfield");
        let form = state.modal().unwrap();
        assert_eq!(form.mode(), FormMode::Edit { id: 5 });
        assert_eq!(form.values().name, "Springfield");
    }

    #[test]
    fn close_clears_editing_target() {
        let mut state = CitiesIndexState::new();
        state.open_edit(5, "Springfield");
        state.close_modal();
        assert!(state.modal().is_none());

        // Reopening for create must not carry the old city over.
        state.open_create();
        assert_eq!(state.modal().unwrap().values().name, "");
    }

    #[test]
    fn saved_modal_form_asks_to_close() {
        let mut state = CitiesIndexState::new();
        state.open_create();

        let form = state.modal_mut().unwrap();
        form.set(CityField::Name, "Springfield");
        form.submit().unwrap();
        let effect = form.finish(SubmitOutcome::Saved, || {});

        assert_eq!(effect, FormEffect::CloseModal);
        state.close_modal();
        assert!(!state.is_modal_open());
    }

    #[test]
    fn delete_confirmation_flow() {
        let mut state = CitiesIndexState::new();
        assert!(state.confirm_delete().is_none());

        state.request_delete(9);
        let request = state.confirm_delete().unwrap();
        assert_eq!(request.id, 9);
        assert_eq!(request.path, "/cities/9");
        assert_eq!(state.pending_delete(), Some(9));

        state.delete_finished();
        assert_eq!(state.pending_delete(), None);
    }

    #[test]
    fn cancel_delete_sends_nothing() {
        let mut state = CitiesIndexState::new();
        state.request_delete(2);
        state.cancel_delete();
        assert!(state.confirm_delete().is_none());
    }
}
