use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(InvitationId);

/// Longest accepted invitee name, in characters.
pub const MAX_NAME_CHARS: usize = 50;
/// Longest accepted email address, in characters.
pub const MAX_EMAIL_CHARS: usize = 100;
/// Digits in the subscriber part of a mobile number.
pub const MOBILE_DIGITS: usize = 10;
/// Most additional guests a single invitee may bring.
pub const MAX_EXTRAS: u8 = 2;
/// Stored in place of an email address the user left blank.
pub const EMAIL_NOT_PROVIDED: &str = "NA";
pub const DEFAULT_COUNTRY_CODE: &str = "+91";

pub const COUNTRY_CODES: &[&str] = &[
    "+1", "+7", "+20", "+27", "+30", "+31", "+32", "+33", "+34", "+36", "+39", "+40", "+41",
    "+43", "+44", "+45", "+46", "+47", "+48", "+49", "+52", "+53", "+54", "+55", "+56", "+57",
    "+58", "+60", "+61", "+62", "+63", "+64", "+65", "+66", "+81", "+82", "+84", "+86", "+90",
    "+91", "+92", "+93", "+94", "+95", "+98", "+211", "+212", "+213", "+216", "+218", "+220",
    "+221", "+222", "+223", "+224", "+225", "+226", "+227", "+228", "+229", "+230", "+231",
    "+232", "+233", "+234", "+235", "+236", "+237", "+238", "+239", "+240", "+241", "+242",
    "+243", "+244", "+245", "+246", "+248", "+249", "+250", "+251", "+252", "+253", "+254",
    "+255", "+256", "+257", "+258", "+260", "+261", "+262", "+263", "+264", "+265", "+266",
    "+267", "+268", "+269", "+290", "+291", "+297", "+298", "+299", "+350", "+351", "+352",
    "+353", "+354", "+355", "+356", "+357", "+358", "+359", "+370", "+371", "+372", "+373",
    "+374", "+375", "+376", "+377", "+378", "+380", "+381", "+382", "+383", "+385", "+386",
    "+387", "+389", "+420", "+421", "+423", "+500", "+501", "+502", "+503", "+504", "+505",
    "+506", "+507", "+508", "+509", "+590", "+591", "+592", "+593", "+594", "+595", "+596",
    "+597", "+598", "+599", "+670", "+672", "+673", "+674", "+675", "+676", "+677", "+678",
    "+679", "+680", "+681", "+682", "+683", "+685", "+686", "+687", "+688", "+689", "+690",
    "+691", "+692", "+850", "+852", "+853", "+855", "+856", "+880", "+886", "+960", "+961",
    "+962", "+963", "+964", "+965", "+966", "+967", "+968", "+970", "+971", "+972", "+973",
    "+974", "+975", "+976", "+977", "+992", "+993", "+994", "+995", "+996", "+998",
];

pub fn is_known_country_code(code: &str) -> bool {
    COUNTRY_CODES.contains(&code)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RsvpStatus {
    Accepted,
    #[default]
    Pending,
    Rejected,
}

impl RsvpStatus {
    /// Selector order used by list rows.
    pub const ALL: [RsvpStatus; 3] = [Self::Accepted, Self::Pending, Self::Rejected];

    pub fn label(self) -> &'static str {
        match self {
            Self::Accepted => "Accepted",
            Self::Pending => "Pending",
            Self::Rejected => "Rejected",
        }
    }

    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Accepted => "ACCEPTED",
            Self::Pending => "PENDING",
            Self::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Family,
    Friend,
    Relative,
    Colleague,
    Acquaintance,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Self::Family,
        Self::Friend,
        Self::Relative,
        Self::Colleague,
        Self::Acquaintance,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Family => "Family",
            Self::Friend => "Friend",
            Self::Relative => "Relative",
            Self::Colleague => "Colleague",
            Self::Acquaintance => "Acquaintance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Editable fields of an invitation, everything except identity and RSVP status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteeDetails {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub category: Category,
    pub extras: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvitationRecord {
    pub id: InvitationId,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub category: Category,
    pub extras: u8,
    pub status: RsvpStatus,
}

impl InvitationRecord {
    /// New records always start out pending.
    pub fn new(id: InvitationId, details: InviteeDetails) -> Self {
        Self {
            id,
            name: details.name,
            email: details.email,
            mobile: details.mobile,
            category: details.category,
            extras: details.extras,
            status: RsvpStatus::Pending,
        }
    }

    pub fn details(&self) -> InviteeDetails {
        InviteeDetails {
            name: self.name.clone(),
            email: self.email.clone(),
            mobile: self.mobile.clone(),
            category: self.category,
            extras: self.extras,
        }
    }

    pub fn with_details(&self, details: InviteeDetails) -> Self {
        Self {
            id: self.id,
            name: details.name,
            email: details.email,
            mobile: details.mobile,
            category: details.category,
            extras: details.extras,
            status: self.status,
        }
    }

    pub fn with_status(&self, status: RsvpStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    pub fn has_email(&self) -> bool {
        self.email != EMAIL_NOT_PROVIDED
    }
}
