use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Name,
    Mobile,
    Email,
    Category,
    Extras,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Mobile => "Phone",
            Self::Email => "Email",
            Self::Category => "Category",
            Self::Extras => "Extras",
        }
    }
}
