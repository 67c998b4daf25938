//! The invitation screen: store, dialogs and dashboard behind one owner.
//!
//! Every user intent enters through a method here and leaves as a store
//! replacement; views read back through the accessors on the next frame.

use shared::domain::{InvitationId, InvitationRecord, DEFAULT_COUNTRY_CODE};
use shared::protocol::{ListIntent, RsvpSummary};
use tracing::{debug, info};

use crate::dashboard::{summarize, DashboardState};
use crate::error::FormError;
use crate::form::{AddFormController, EditFormController};
use crate::ids::{ClockIdSource, IdSource};
use crate::store::InvitationStore;

pub struct InvitationScreen {
    store: InvitationStore,
    add_form: AddFormController,
    editing: Option<EditFormController>,
    dashboard: DashboardState,
    ids: Box<dyn IdSource>,
}

impl Default for InvitationScreen {
    fn default() -> Self {
        Self::new(Box::new(ClockIdSource), DEFAULT_COUNTRY_CODE)
    }
}

impl InvitationScreen {
    pub fn new(ids: Box<dyn IdSource>, default_country_code: &str) -> Self {
        Self {
            store: InvitationStore::new(),
            add_form: AddFormController::new(default_country_code),
            editing: None,
            dashboard: DashboardState::default(),
            ids,
        }
    }

    pub fn store(&self) -> &InvitationStore {
        &self.store
    }

    pub fn records(&self) -> &[InvitationRecord] {
        self.store.records()
    }

    pub fn summary(&self) -> RsvpSummary {
        summarize(self.store.records())
    }

    pub fn dashboard(&self) -> &DashboardState {
        &self.dashboard
    }

    pub fn dashboard_mut(&mut self) -> &mut DashboardState {
        &mut self.dashboard
    }

    pub fn add_form(&self) -> &AddFormController {
        &self.add_form
    }

    pub fn add_form_mut(&mut self) -> &mut AddFormController {
        &mut self.add_form
    }

    pub fn editing_id(&self) -> Option<InvitationId> {
        self.editing.as_ref().map(EditFormController::target)
    }

    pub fn edit_form(&self) -> Option<&EditFormController> {
        self.editing.as_ref()
    }

    pub fn edit_form_mut(&mut self) -> Option<&mut EditFormController> {
        self.editing.as_mut()
    }

    pub fn dispatch(&mut self, intent: ListIntent) {
        debug!(intent = intent.name(), id = %intent.target(), "list intent");
        match intent {
            ListIntent::ChangeStatus { id, status } => {
                self.store.set_status(id, status);
                info!(%id, %status, "rsvp status changed");
            }
            ListIntent::BeginEdit { id } => match self.store.get(id) {
                Some(record) => self.editing = Some(EditFormController::begin(record)),
                None => debug!(%id, "edit requested for missing invitation"),
            },
            ListIntent::Delete { id } => {
                self.store.delete(id);
                if self.editing_id() == Some(id) {
                    self.editing = None;
                }
                info!(%id, "invitation deleted");
            }
        }
    }

    pub fn open_add_form(&mut self) {
        self.add_form.open();
    }

    pub fn cancel_add_form(&mut self) {
        self.add_form.cancel();
    }

    pub fn submit_add_form(&mut self) -> Result<InvitationId, FormError> {
        let record = self.add_form.submit(self.ids.as_ref())?;
        let id = record.id;
        self.store.add(record);
        info!(%id, "invitation added");
        Ok(id)
    }

    pub fn save_edit(&mut self) -> Result<InvitationId, FormError> {
        let editor = self.editing.as_mut().ok_or(FormError::Closed)?;
        let details = editor.submit()?;
        let id = editor.target();
        self.store.update_details(id, details);
        self.editing = None;
        info!(%id, "invitation updated");
        Ok(id)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }
}

#[cfg(test)]
#[path = "tests/screen_tests.rs"]
mod tests;
