use invite_core::form::{EMAIL_INVALID, MOBILE_INVALID};
use invite_core::ids::SequentialIdSource;
use invite_core::validation::is_email_valid;
use invite_core::{FormError, InvitationScreen};
use shared::domain::{
    Category, InvitationId, RsvpStatus, DEFAULT_COUNTRY_CODE, EMAIL_NOT_PROVIDED,
};
use shared::protocol::ListIntent;

fn screen() -> InvitationScreen {
    InvitationScreen::new(
        Box::new(SequentialIdSource::starting_at(1_700_000_000_000)),
        DEFAULT_COUNTRY_CODE,
    )
}

fn invite(
    screen: &mut InvitationScreen,
    name: &str,
    code: &str,
    mobile: &str,
    email: &str,
    extras: &str,
) -> InvitationId {
    screen.open_add_form();
    let draft = screen.add_form_mut().draft_mut().expect("add form open");
    draft.set_name(name);
    draft.set_country_code(code);
    draft.set_mobile(mobile);
    draft.set_email(email);
    draft.set_category(Some(Category::Friend));
    draft.set_extras(extras);
    screen.submit_add_form().expect("invitee accepted")
}

#[test]
fn email_examples() {
    assert!(is_email_valid("alice@example.com"));
    assert!(!is_email_valid("not-an-email"));
    assert!(is_email_valid(""));
}

#[test]
fn blank_email_stored_as_sentinel_and_edited_as_blank() {
    let mut screen = screen();
    let id = invite(&mut screen, "Meera", "+91", "9000011111", "", "");
    assert_eq!(screen.records()[0].email, EMAIL_NOT_PROVIDED);

    screen.dispatch(ListIntent::BeginEdit { id });
    assert_eq!(screen.edit_form().expect("editing").draft().email(), "");
}

#[test]
fn uk_number_round_trips_through_edit_form() {
    let mut screen = screen();
    let id = invite(
        &mut screen,
        "Oliver",
        "+44",
        "7911123456",
        "oliver@example.co.uk",
        "1",
    );
    assert_eq!(screen.records()[0].mobile, "+447911123456");

    screen.dispatch(ListIntent::BeginEdit { id });
    let draft = screen.edit_form().expect("editing").draft();
    assert_eq!(draft.country_code(), "+44");
    assert_eq!(draft.mobile(), "7911123456");
}

#[test]
fn accepting_and_reverting_moves_extras() {
    let mut screen = screen();
    let id = invite(&mut screen, "Ravi", "+91", "9888877777", "", "2");
    invite(&mut screen, "Sana", "+91", "9888877778", "", "1");

    screen.dispatch(ListIntent::ChangeStatus {
        id,
        status: RsvpStatus::Accepted,
    });
    let accepted = screen.summary();
    assert_eq!(accepted.accepted, 1);
    assert_eq!(accepted.total_extras, 2);

    screen.dispatch(ListIntent::ChangeStatus {
        id,
        status: RsvpStatus::Rejected,
    });
    let rejected = screen.summary();
    assert_eq!(rejected.accepted, 0);
    assert_eq!(rejected.rejected, 1);
    assert_eq!(rejected.total_extras, 0);
    assert_eq!(rejected.total, 2);
}

#[test]
fn delete_preserves_order_of_the_rest() {
    let mut screen = screen();
    let a = invite(&mut screen, "A", "+91", "9000000001", "", "");
    let b = invite(&mut screen, "B", "+91", "9000000002", "", "");
    let c = invite(&mut screen, "C", "+91", "9000000003", "", "");

    screen.dispatch(ListIntent::Delete { id: b });
    let ids: Vec<InvitationId> = screen.records().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![a, c]);
}

#[test]
fn edit_commit_keeps_status_and_closes_editor() {
    let mut screen = screen();
    let id = invite(&mut screen, "Lena", "+49", "1512345678", "", "");
    screen.dispatch(ListIntent::ChangeStatus {
        id,
        status: RsvpStatus::Accepted,
    });
    screen.dispatch(ListIntent::BeginEdit { id });

    {
        let draft = screen.edit_form_mut().expect("editing").draft_mut();
        draft.set_email("lena@");
    }
    let Err(FormError::Invalid(errors)) = screen.save_edit() else {
        panic!("bad email must block the commit");
    };
    assert_eq!(errors.email, Some(EMAIL_INVALID));

    {
        let draft = screen.edit_form_mut().expect("still editing").draft_mut();
        draft.set_email("lena@example.de");
        draft.set_extras("2");
    }
    assert_eq!(screen.save_edit(), Ok(id));
    assert_eq!(screen.editing_id(), None);

    let record = &screen.records()[0];
    assert_eq!(record.email, "lena@example.de");
    assert_eq!(record.extras, 2);
    assert_eq!(record.status, RsvpStatus::Accepted);
}

#[test]
fn short_phone_blocks_add() {
    let mut screen = screen();
    screen.open_add_form();
    {
        let draft = screen.add_form_mut().draft_mut().expect("open");
        draft.set_name("Kim");
        draft.set_mobile("12345");
        draft.set_category(Some(Category::Acquaintance));
    }
    let Err(FormError::Invalid(errors)) = screen.submit_add_form() else {
        panic!("five digits are not a phone number");
    };
    assert_eq!(errors.mobile, Some(MOBILE_INVALID));
    assert!(screen.add_form().is_open());
    assert!(screen.records().is_empty());
}
