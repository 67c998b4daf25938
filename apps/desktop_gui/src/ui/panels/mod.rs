//! Screen sections: the event dashboard, the invitation list, and invitee forms.

pub mod dashboard;
pub mod invitation_list;
pub mod invitee_form;
