//! Guest-list engine: the invitation store, form controllers, dashboard
//! aggregation and the event-date timer effects.

pub mod confetti;
pub mod countdown;
pub mod dashboard;
pub mod effects;
pub mod error;
pub mod form;
pub mod ids;
pub mod phone;
pub mod screen;
pub mod store;
pub mod validation;

pub use countdown::{Clock, CountdownPhase, SystemClock, Urgency};
pub use effects::{EffectEvent, EventEffects};
pub use error::{FieldErrors, FormError};
pub use screen::InvitationScreen;
pub use store::InvitationStore;
