use super::*;
use crate::ids::SequentialIdSource;
use shared::domain::{Category, RsvpStatus};

fn screen() -> InvitationScreen {
    InvitationScreen::new(
        Box::new(SequentialIdSource::starting_at(1)),
        DEFAULT_COUNTRY_CODE,
    )
}

fn add(screen: &mut InvitationScreen, name: &str, extras: &str) -> InvitationId {
    screen.open_add_form();
    let draft = screen.add_form_mut().draft_mut().expect("open");
    draft.set_name(name);
    draft.set_mobile("9123456789");
    draft.set_category(Some(Category::Family));
    draft.set_extras(extras);
    screen.submit_add_form().expect("valid invitee")
}

#[test]
fn begin_edit_replaces_previous_editor() {
    let mut screen = screen();
    let first = add(&mut screen, "Asha", "");
    let second = add(&mut screen, "Bilal", "1");

    screen.dispatch(ListIntent::BeginEdit { id: first });
    screen.dispatch(ListIntent::BeginEdit { id: second });
    assert_eq!(screen.editing_id(), Some(second));
    assert_eq!(
        screen.edit_form().expect("editor").draft().name(),
        "Bilal"
    );
}

#[test]
fn deleting_edited_row_closes_editor() {
    let mut screen = screen();
    let first = add(&mut screen, "Asha", "");
    let second = add(&mut screen, "Bilal", "");

    screen.dispatch(ListIntent::BeginEdit { id: first });
    screen.dispatch(ListIntent::Delete { id: second });
    assert_eq!(screen.editing_id(), Some(first));

    screen.dispatch(ListIntent::Delete { id: first });
    assert_eq!(screen.editing_id(), None);
    assert!(screen.records().is_empty());
}

#[test]
fn begin_edit_on_missing_id_is_ignored() {
    let mut screen = screen();
    screen.dispatch(ListIntent::BeginEdit {
        id: InvitationId(404),
    });
    assert_eq!(screen.editing_id(), None);
}

#[test]
fn failed_save_keeps_editor_open() {
    let mut screen = screen();
    let id = add(&mut screen, "Asha", "");
    screen.dispatch(ListIntent::BeginEdit { id });
    screen
        .edit_form_mut()
        .expect("editor")
        .draft_mut()
        .set_name("   ");

    assert!(matches!(screen.save_edit(), Err(FormError::Invalid(_))));
    assert_eq!(screen.editing_id(), Some(id));
    assert_eq!(screen.records()[0].name, "Asha");
}

#[test]
fn save_without_editor_is_refused() {
    let mut screen = screen();
    assert_eq!(screen.save_edit(), Err(FormError::Closed));
}

#[test]
fn status_change_is_reflected_in_summary() {
    let mut screen = screen();
    let id = add(&mut screen, "Asha", "2");
    assert_eq!(screen.summary().pending, 1);

    screen.dispatch(ListIntent::ChangeStatus {
        id,
        status: RsvpStatus::Accepted,
    });
    let summary = screen.summary();
    assert_eq!(summary.accepted, 1);
    assert_eq!(summary.pending, 0);
    assert_eq!(summary.total_extras, 2);
}
