// Integration tests for the session engine. These exercise the pure Rust
// state machine end to end (compose → card → zone → drop) without any
// browser API, so they run under plain `cargo test` on the host.

use braille_core::{
    ActionError, DropOutcome, Gesture, Handle, Mode, SharedSecretGate, Session, ZoneStatus,
};

fn edit_session() -> Session {
    let mut s = Session::new();
    s.set_mode(Mode::Edit);
    s
}

/// Compose one word from dot lists and build a card from it.
fn make_card(s: &mut Session, letters: &[&[u8]]) -> braille_core::CardId {
    for dots in letters {
        for &d in *dots {
            s.toggle_dot(d).expect("edit mode");
        }
        s.compose_letter().expect("non-empty selection");
    }
    s.build_card().expect("non-empty word")
}

#[test]
fn compose_and_build_yields_word_and_consumes_it() {
    let mut s = edit_session();
    let id = make_card(&mut s, &[&[1], &[1, 2], &[1, 4]]);
    let card = s.card(id).expect("card exists");
    assert_eq!(card.word, "abc");
    assert_eq!(card.glyphs.len(), 3);
    assert!(!card.locked);
    // the in-progress word was taken, not copied
    assert!(s.word().is_empty());
    assert_eq!(s.build_card(), Err(ActionError::EmptyWord));
}

#[test]
fn compose_clears_the_grid_and_rejects_empty_selection() {
    let mut s = edit_session();
    assert_eq!(s.compose_letter(), Err(ActionError::EmptySelection));
    s.toggle_dot(2).unwrap();
    s.toggle_dot(4).unwrap();
    let letter = s.compose_letter().unwrap();
    assert_eq!(letter.letter, 'i');
    assert!(s.active_dots().is_empty());
}

#[test]
fn unknown_combination_propagates_as_sentinel_letter() {
    let mut s = edit_session();
    for d in [2, 3] {
        s.toggle_dot(d).unwrap();
    }
    s.compose_letter().unwrap();
    let id = s.build_card().unwrap();
    assert_eq!(s.card(id).unwrap().word, "?");
}

#[test]
fn clear_word_resets_grid_and_letters() {
    let mut s = edit_session();
    s.toggle_dot(1).unwrap();
    s.compose_letter().unwrap();
    s.toggle_dot(5).unwrap();
    s.clear_word();
    assert!(s.word().is_empty());
    assert!(s.active_dots().is_empty());
    assert_eq!(s.build_card(), Err(ActionError::EmptyWord));
}

#[test]
fn assign_answer_in_edit_mode_sets_expectation_and_occupancy() {
    let mut s = edit_session();
    let card = make_card(&mut s, &[&[1]]);
    let zone = s.create_dropzone(50.0, 50.0).unwrap();
    assert!(!s.zone(zone).unwrap().assigned());
    let out = s.assign_answer(zone, card).unwrap();
    assert_eq!(
        out,
        Some(DropOutcome::Assigned {
            word: "a".to_string()
        })
    );
    let z = s.zone(zone).unwrap();
    assert!(z.assigned());
    assert_eq!(z.expected_word, "a");
    assert_eq!(z.occupant, Some(card));
    assert_eq!(z.status, ZoneStatus::FilledEdit);
    assert_eq!(s.tray_cards().count(), 0);
}

#[test]
fn reassignment_overwrites_answer_and_releases_previous_occupant() {
    let mut s = edit_session();
    let first = make_card(&mut s, &[&[1]]);
    let second = make_card(&mut s, &[&[1, 2]]);
    let zone = s.create_dropzone(0.0, 0.0).unwrap();
    s.assign_answer(zone, first).unwrap();
    s.assign_answer(zone, second).unwrap();
    let z = s.zone(zone).unwrap();
    assert_eq!(z.expected_word, "b");
    assert_eq!(z.occupant, Some(second));
    // the first card is back in the tray, not destroyed
    let tray: Vec<_> = s.tray_cards().map(|c| c.id).collect();
    assert_eq!(tray, vec![first]);
}

#[test]
fn matching_drop_locks_card_and_marks_zone_correct() {
    let mut s = edit_session();
    let card = make_card(&mut s, &[&[1], &[1, 2, 4, 5]]);
    let zone = s.create_dropzone(0.0, 0.0).unwrap();
    s.assign_answer(zone, card).unwrap();
    let decoy = make_card(&mut s, &[&[1, 5]]);

    s.set_mode(Mode::Play);
    // the assigned card still sits in the zone; the student drops the decoy
    assert_eq!(
        s.attempt_match(zone, decoy),
        Err(ActionError::MatchMismatch)
    );
    assert!(!s.card(decoy).unwrap().locked);

    // re-dropping the assigned card itself counts as a match and locks it
    let out = s.attempt_match(zone, card).unwrap();
    assert_eq!(
        out,
        Some(DropOutcome::Matched {
            word: "ag".to_string()
        })
    );
    let z = s.zone(zone).unwrap();
    assert_eq!(z.status, ZoneStatus::FilledCorrect);
    assert_eq!(z.occupant, Some(card));
    assert!(s.card(card).unwrap().locked);
    assert!(!s.begin_card_drag(card), "locked card must not drag");
}

#[test]
fn mismatching_drop_changes_nothing_and_allows_retry() {
    let mut s = edit_session();
    let answer = make_card(&mut s, &[&[1]]);
    let wrong = make_card(&mut s, &[&[1, 2]]);
    let zone = s.create_dropzone(0.0, 0.0).unwrap();
    s.assign_answer(zone, answer).unwrap();
    s.set_mode(Mode::Play);

    for _ in 0..3 {
        assert_eq!(s.attempt_match(zone, wrong), Err(ActionError::MatchMismatch));
        let z = s.zone(zone).unwrap();
        assert_eq!(z.occupant, Some(answer));
        assert!(!s.card(wrong).unwrap().locked);
        assert!(s.begin_card_drag(wrong), "retry stays possible");
        s.end_gesture();
    }
}

#[test]
fn drop_dispatches_by_mode() {
    let mut s = edit_session();
    let card = make_card(&mut s, &[&[1]]);
    let zone = s.create_dropzone(0.0, 0.0).unwrap();

    assert!(s.begin_card_drag(card));
    let out = s.drop_dragged_card(zone).unwrap();
    assert!(matches!(out, Some(DropOutcome::Assigned { .. })));
    s.end_gesture();

    s.set_mode(Mode::Play);
    // no drag active: the drop is a no-op
    assert_eq!(s.drop_dragged_card(zone).unwrap(), None);
}

#[test]
fn mode_switch_preserves_answers_and_clears_correct_marks() {
    let mut s = edit_session();
    let card = make_card(&mut s, &[&[1]]);
    let zone = s.create_dropzone(0.0, 0.0).unwrap();
    s.assign_answer(zone, card).unwrap();
    s.set_mode(Mode::Play);
    s.attempt_match(zone, card).unwrap();
    assert_eq!(s.zone(zone).unwrap().status, ZoneStatus::FilledCorrect);

    s.set_mode(Mode::Edit);
    let z = s.zone(zone).unwrap();
    assert_eq!(z.status, ZoneStatus::FilledEdit, "correctness is play-only");
    assert_eq!(z.expected_word, "a", "answers survive mode switches");
    assert_eq!(z.occupant, Some(card), "placed cards survive mode switches");

    s.set_mode(Mode::Play);
    assert_eq!(s.zone(zone).unwrap().expected_word, "a");
}

#[test]
fn zone_drag_preserves_grab_offset() {
    let mut s = edit_session();
    let zone = s.create_dropzone(50.0, 50.0).unwrap();
    // grab 10 units inside the zone
    s.begin_zone_drag(zone, 60.0, 70.0).unwrap();
    s.pointer_moved(200.0, 100.0);
    let r = s.zone(zone).unwrap().rect;
    assert_eq!((r.x, r.y), (190.0, 80.0));
    s.end_gesture();
    assert!(s.gesture().is_idle());
}

#[test]
fn zone_resize_clamps_to_minimum_size() {
    let mut s = edit_session();
    let zone = s.create_dropzone(50.0, 50.0).unwrap();
    // default zone is 100x100; drag the east handle 80 units left
    s.begin_zone_resize(zone, Handle::E, 150.0, 100.0).unwrap();
    s.pointer_moved(70.0, 100.0);
    let r = s.zone(zone).unwrap().rect;
    assert_eq!(r.w, 50.0);
    assert_eq!(r.x, 50.0, "east handle never moves the left edge");
    s.end_gesture();

    // same delta on the west handle of a fresh zone travels the left edge
    let zone = s.create_dropzone(50.0, 50.0).unwrap();
    s.begin_zone_resize(zone, Handle::W, 50.0, 100.0).unwrap();
    s.pointer_moved(130.0, 100.0);
    let r = s.zone(zone).unwrap().rect;
    assert_eq!(r.w, 50.0);
    assert_eq!(r.x, 100.0);
    s.end_gesture();
}

#[test]
fn gestures_are_mutually_exclusive_and_release_always_idles() {
    let mut s = edit_session();
    let card = make_card(&mut s, &[&[1]]);
    let zone = s.create_dropzone(0.0, 0.0).unwrap();

    s.begin_zone_drag(zone, 10.0, 10.0).unwrap();
    assert!(matches!(s.gesture(), Gesture::DraggingDropzone { .. }));
    assert_eq!(s.gesture().active_zone(), Some(zone));
    // a second press cannot stack another gesture
    s.begin_zone_resize(zone, Handle::Se, 0.0, 0.0).unwrap();
    assert!(matches!(s.gesture(), Gesture::DraggingDropzone { .. }));
    assert!(!s.begin_card_drag(card));

    s.end_gesture();
    assert!(s.gesture().is_idle());
    assert!(s.begin_card_drag(card));
    s.end_gesture();
    assert!(s.gesture().is_idle());
}

#[test]
fn zone_gestures_require_edit_mode() {
    let mut s = edit_session();
    let zone = s.create_dropzone(0.0, 0.0).unwrap();
    s.set_mode(Mode::Play);
    assert_eq!(
        s.begin_zone_drag(zone, 0.0, 0.0),
        Err(ActionError::ModePermissionDenied)
    );
    assert_eq!(
        s.begin_zone_resize(zone, Handle::E, 0.0, 0.0),
        Err(ActionError::ModePermissionDenied)
    );
    assert_eq!(s.delete_dropzone(zone), Err(ActionError::ModePermissionDenied));
    assert!(s.zone(zone).is_some());
}

#[test]
fn deleting_a_card_vacates_its_zone_but_keeps_the_answer() {
    let mut s = edit_session();
    let card = make_card(&mut s, &[&[1]]);
    let zone = s.create_dropzone(0.0, 0.0).unwrap();
    s.assign_answer(zone, card).unwrap();
    s.delete_card(card);
    let z = s.zone(zone).unwrap();
    assert_eq!(z.occupant, None);
    assert_eq!(z.status, ZoneStatus::Empty);
    assert_eq!(z.expected_word, "a");
    // a second delete is a no-op
    s.delete_card(card);
    assert!(s.cards().is_empty());
}

#[test]
fn deleting_a_zone_releases_its_occupant() {
    let mut s = edit_session();
    let card = make_card(&mut s, &[&[1]]);
    let zone = s.create_dropzone(0.0, 0.0).unwrap();
    s.assign_answer(zone, card).unwrap();
    let released = s.delete_dropzone(zone).unwrap();
    assert_eq!(released, Some(card));
    assert!(s.zone(zone).is_none());
    assert_eq!(s.tray_cards().count(), 1);
    // idempotent
    assert_eq!(s.delete_dropzone(zone), Ok(None));
}

#[test]
fn gate_grants_or_denies_edit_access() {
    let mut s = Session::new();
    let gate = SharedSecretGate::new("abre");
    assert_eq!(
        s.unlock_edit(&gate, "sesamo"),
        Err(ActionError::AccessDenied)
    );
    assert_eq!(s.mode(), Mode::Play);
    s.unlock_edit(&gate, "abre").unwrap();
    assert_eq!(s.mode(), Mode::Edit);
}
