use shared::error::FormField;
use thiserror::Error;

/// Error text for every field that failed validation, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub mobile: Option<&'static str>,
    pub email: Option<&'static str>,
    pub category: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.mobile.is_none()
            && self.email.is_none()
            && self.category.is_none()
    }

    pub fn get(&self, field: FormField) -> Option<&'static str> {
        match field {
            FormField::Name => self.name,
            FormField::Mobile => self.mobile,
            FormField::Email => self.email,
            FormField::Category => self.category,
            FormField::Extras => None,
        }
    }

    pub fn fields(&self) -> Vec<FormField> {
        [
            FormField::Name,
            FormField::Mobile,
            FormField::Email,
            FormField::Category,
        ]
        .into_iter()
        .filter(|field| self.get(*field).is_some())
        .collect()
    }

    /// Field labels joined for log lines, e.g. `Name, Phone`.
    pub fn summary(&self) -> String {
        self.fields()
            .into_iter()
            .map(FormField::label)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("form is not open")]
    Closed,
    #[error("form has invalid fields: {}", .0.summary())]
    Invalid(FieldErrors),
}
