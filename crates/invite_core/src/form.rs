//! Add and edit form controllers.
//!
//! Both controllers stage user input in an [`InviteeDraft`] whose setters apply
//! the keystroke filters from [`crate::validation`]. Field errors stay hidden
//! until the first submit attempt.

use shared::domain::{
    is_known_country_code, Category, InvitationRecord, InviteeDetails, InvitationId,
    DEFAULT_COUNTRY_CODE, EMAIL_NOT_PROVIDED,
};

use crate::{
    error::{FieldErrors, FormError},
    ids::IdSource,
    phone::{compose_mobile, split_mobile},
    validation::{
        filter_email, filter_extras, filter_mobile, filter_name, is_email_valid, is_mobile_valid,
        is_name_valid, parse_extras,
    },
};

pub const NAME_REQUIRED: &str = "Name is required";
pub const MOBILE_INVALID: &str = "Must be 10 digits";
pub const EMAIL_INVALID: &str = "Invalid email format";
pub const CATEGORY_REQUIRED: &str = "Category is required";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteeDraft {
    name: String,
    country_code: String,
    mobile: String,
    email: String,
    category: Option<Category>,
    extras: String,
}

impl InviteeDraft {
    pub fn blank(country_code: &str) -> Self {
        Self {
            name: String::new(),
            country_code: country_code.to_string(),
            mobile: String::new(),
            email: String::new(),
            category: None,
            extras: String::new(),
        }
    }

    /// Seeds a draft from a stored record; the `"NA"` email sentinel reads as blank.
    pub fn from_record(record: &InvitationRecord) -> Self {
        let parts = split_mobile(&record.mobile);
        let email = if record.has_email() {
            record.email.clone()
        } else {
            String::new()
        };
        Self {
            name: record.name.clone(),
            country_code: parts.country_code,
            mobile: parts.digits,
            email,
            category: Some(record.category),
            extras: record.extras.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn mobile(&self) -> &str {
        &self.mobile
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn extras(&self) -> &str {
        &self.extras
    }

    pub fn set_name(&mut self, input: &str) {
        self.name = filter_name(input);
    }

    pub fn set_mobile(&mut self, input: &str) {
        self.mobile = filter_mobile(input);
    }

    pub fn set_email(&mut self, input: &str) {
        self.email = filter_email(input);
    }

    pub fn set_extras(&mut self, input: &str) {
        self.extras = filter_extras(&self.extras, input);
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.category = category;
    }

    /// Codes outside the dialing-code table are ignored.
    pub fn set_country_code(&mut self, code: &str) {
        if is_known_country_code(code) {
            self.country_code = code.to_string();
        }
    }

    pub fn validity(&self) -> DraftValidity {
        DraftValidity {
            name: is_name_valid(&self.name),
            mobile: is_mobile_valid(&self.mobile),
            category: self.category.is_some(),
            email: is_email_valid(&self.email),
        }
    }

    /// `None` until a category has been chosen.
    fn to_details(&self) -> Option<InviteeDetails> {
        let email = if self.email.trim().is_empty() {
            EMAIL_NOT_PROVIDED.to_string()
        } else {
            self.email.trim().to_string()
        };
        Some(InviteeDetails {
            name: self.name.trim().to_string(),
            email,
            mobile: compose_mobile(&self.country_code, &self.mobile),
            category: self.category?,
            extras: parse_extras(&self.extras),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftValidity {
    pub name: bool,
    pub mobile: bool,
    pub category: bool,
    pub email: bool,
}

impl DraftValidity {
    pub fn is_complete(&self) -> bool {
        self.required_fields_valid() && self.email
    }

    pub fn required_fields_valid(&self) -> bool {
        self.name && self.mobile && self.category
    }
}

#[derive(Debug, Clone)]
struct FormSession {
    draft: InviteeDraft,
    submit_attempted: bool,
}

impl FormSession {
    fn new(draft: InviteeDraft) -> Self {
        Self {
            draft,
            submit_attempted: false,
        }
    }

    fn visible_errors(&self) -> FieldErrors {
        if !self.submit_attempted {
            return FieldErrors::default();
        }
        let validity = self.draft.validity();
        FieldErrors {
            name: (!validity.name).then_some(NAME_REQUIRED),
            mobile: (!validity.mobile).then_some(MOBILE_INVALID),
            email: (!validity.email && !self.draft.email.trim().is_empty())
                .then_some(EMAIL_INVALID),
            category: (!validity.category).then_some(CATEGORY_REQUIRED),
        }
    }

    /// Marks the attempt and returns the committed details when the draft is fully valid.
    fn attempt_submit(&mut self) -> Result<InviteeDetails, FormError> {
        self.submit_attempted = true;
        if !self.draft.validity().is_complete() {
            return Err(FormError::Invalid(self.visible_errors()));
        }
        self.draft
            .to_details()
            .ok_or_else(|| FormError::Invalid(self.visible_errors()))
    }
}

/// Two states: closed, or open with a draft.
#[derive(Debug, Clone)]
pub struct AddFormController {
    session: Option<FormSession>,
    default_country_code: String,
}

impl Default for AddFormController {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTRY_CODE)
    }
}

impl AddFormController {
    pub fn new(default_country_code: &str) -> Self {
        Self {
            session: None,
            default_country_code: default_country_code.to_string(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Opens with a fresh draft, discarding anything left from before.
    pub fn open(&mut self) {
        self.session = Some(FormSession::new(InviteeDraft::blank(
            &self.default_country_code,
        )));
    }

    pub fn cancel(&mut self) {
        self.session = None;
    }

    pub fn draft(&self) -> Option<&InviteeDraft> {
        self.session.as_ref().map(|session| &session.draft)
    }

    pub fn draft_mut(&mut self) -> Option<&mut InviteeDraft> {
        self.session.as_mut().map(|session| &mut session.draft)
    }

    pub fn submit_attempted(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.submit_attempted)
    }

    pub fn can_submit(&self) -> bool {
        self.draft()
            .is_some_and(|draft| draft.validity().is_complete())
    }

    pub fn visible_errors(&self) -> FieldErrors {
        self.session
            .as_ref()
            .map(FormSession::visible_errors)
            .unwrap_or_default()
    }

    /// On success the form closes and the new pending record is returned for
    /// the store. On failure the form stays open with its errors now visible.
    pub fn submit(&mut self, ids: &dyn IdSource) -> Result<InvitationRecord, FormError> {
        let session = self.session.as_mut().ok_or(FormError::Closed)?;
        let details = session.attempt_submit()?;
        self.session = None;
        Ok(InvitationRecord::new(ids.next_id(), details))
    }
}

/// Edit form bound to one existing record.
#[derive(Debug, Clone)]
pub struct EditFormController {
    target: InvitationId,
    session: FormSession,
}

impl EditFormController {
    pub fn begin(record: &InvitationRecord) -> Self {
        Self {
            target: record.id,
            session: FormSession::new(InviteeDraft::from_record(record)),
        }
    }

    pub fn target(&self) -> InvitationId {
        self.target
    }

    pub fn draft(&self) -> &InviteeDraft {
        &self.session.draft
    }

    pub fn draft_mut(&mut self) -> &mut InviteeDraft {
        &mut self.session.draft
    }

    pub fn submit_attempted(&self) -> bool {
        self.session.submit_attempted
    }

    /// Live enabled state of the save control. Email is not part of it; a
    /// malformed email is only caught by [`EditFormController::submit`].
    pub fn can_submit(&self) -> bool {
        self.session.draft.validity().required_fields_valid()
    }

    pub fn visible_errors(&self) -> FieldErrors {
        self.session.visible_errors()
    }

    /// Re-checks every field, email included, before handing back the
    /// replacement details.
    pub fn submit(&mut self) -> Result<InviteeDetails, FormError> {
        self.session.attempt_submit()
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
