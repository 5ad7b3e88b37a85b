//! Mode gating, passthrough, history, and tab commands end to end.

use std::sync::mpsc;

use pagenav_core::element::ElementRole;
use pagenav_core::event::{KeyEvent, Modifiers};
use pagenav_core::geometry::Rect;
use pagenav_harness::{FakePage, Session};
use pagenav_runtime::{KeyDisposition, Mode, ModeController, NavConfig};
use pagenav_tabs::{TabDirection, TabRequest};
use pretty_assertions::assert_eq;

#[test]
fn insert_escape_in_text_field_then_j_scrolls() {
    let mut s = Session::tall_page();
    let input = s
        .page
        .add_element(ElementRole::Input, Rect::new(10.0, 10.0, 200.0, 20.0));

    assert_eq!(s.press('i'), KeyDisposition::Consumed);
    assert_eq!(s.controller.mode(), Mode::Insert);
    assert!(s.page.insert_indicator_visible());

    s.page.focus(input);
    assert_eq!(s.press('h'), KeyDisposition::PassThrough);
    assert_eq!(s.press('i'), KeyDisposition::PassThrough);
    assert_eq!(s.page.element(input).map(|e| e.value.as_str()), Some("hi"));

    assert_eq!(s.escape(), KeyDisposition::Consumed);
    assert_eq!(s.page.focused(), None);
    assert_eq!(s.controller.mode(), Mode::Normal);
    assert!(!s.page.insert_indicator_visible());

    assert_eq!(s.press('j'), KeyDisposition::Consumed);
    s.run_frames(5);
    assert!(s.page.scroll_y() > 0.0);
    assert_eq!(s.page.element(input).map(|e| e.value.as_str()), Some("hi"));
}

#[test]
fn insert_mode_passes_everything_but_escape() {
    let mut s = Session::tall_page();
    s.press('i');
    assert_eq!(s.press('j'), KeyDisposition::PassThrough);
    assert_eq!(s.press('f'), KeyDisposition::PassThrough);
    s.run_frames(3);
    assert_eq!(s.page.scroll_y(), 0.0);
    assert!(!s.controller.hints().is_active());

    assert_eq!(s.escape(), KeyDisposition::Consumed);
    assert_eq!(s.controller.mode(), Mode::Normal);
    assert_eq!(s.page.modes(), &[Mode::Insert, Mode::Normal]);
}

#[test]
fn focused_text_field_receives_command_letters() {
    let mut s = Session::tall_page();
    let area = s
        .page
        .add_element(ElementRole::TextArea, Rect::new(0.0, 0.0, 300.0, 100.0));
    s.page.focus(area);

    s.type_str("jkG");
    s.run_frames(3);
    assert_eq!(s.page.scroll_y(), 0.0);
    assert_eq!(s.page.element(area).map(|e| e.value.as_str()), Some("jkG"));
    assert_eq!(s.controller.mode(), Mode::Normal);
}

#[test]
fn editable_region_counts_as_text_editing() {
    let mut s = Session::tall_page();
    let editor = s
        .page
        .add_element(ElementRole::ContentEditable, Rect::new(0.0, 0.0, 300.0, 100.0));
    s.page.focus(editor);
    assert_eq!(s.press('x'), KeyDisposition::PassThrough);
    assert!(s.sent_tabs().is_empty());
    assert_eq!(s.escape(), KeyDisposition::Consumed);
    assert_eq!(s.page.focused(), None);
}

#[test]
fn focused_button_does_not_block_commands() {
    let mut s = Session::tall_page();
    let button = s
        .page
        .add_element(ElementRole::Button, Rect::new(0.0, 0.0, 30.0, 10.0));
    s.page.focus(button);
    assert_eq!(s.press('j'), KeyDisposition::Consumed);
}

#[test]
fn ctrl_keys_always_pass_through() {
    let mut s = Session::tall_page();
    let ctrl_j = KeyEvent::char('j').with_modifiers(Modifiers::CTRL);
    assert_eq!(s.key(ctrl_j), KeyDisposition::PassThrough);
    assert_eq!(s.controller.scroll().live_direction(), None);

    let ctrl_f = KeyEvent::char('f').with_modifiers(Modifiers::CTRL);
    assert_eq!(s.key(ctrl_f), KeyDisposition::PassThrough);
    assert!(!s.controller.hints().is_active());
}

#[test]
fn configured_passthrough_modifiers() {
    let config = NavConfig::default().with_passthrough(Modifiers::ALT);
    let mut s = Session::with_config(
        FakePage::new(800.0, 600.0).with_document_size(800.0, 5000.0),
        config,
    );
    let alt_j = KeyEvent::char('j').with_modifiers(Modifiers::ALT);
    assert_eq!(s.key(alt_j), KeyDisposition::PassThrough);
    let ctrl_j = KeyEvent::char('j').with_modifiers(Modifiers::CTRL);
    assert_eq!(s.key(ctrl_j), KeyDisposition::Consumed);
}

#[test]
fn unbound_keys_pass_through() {
    let mut s = Session::tall_page();
    assert_eq!(s.press('q'), KeyDisposition::PassThrough);
    assert_eq!(s.press('?'), KeyDisposition::PassThrough);
    assert_eq!(s.escape(), KeyDisposition::PassThrough);
    assert_eq!(s.enter(), KeyDisposition::PassThrough);
}

#[test]
fn history_commands() {
    let mut s = Session::new(FakePage::new(800.0, 600.0).with_history(&["a", "b", "c"], 1));
    s.press('H');
    assert_eq!(s.page.current_url(), "a");
    s.press('H');
    assert_eq!(s.page.current_url(), "a");
    s.press('L');
    s.press('L');
    s.press('L');
    assert_eq!(s.page.current_url(), "c");
}

#[test]
fn tab_commands_are_sent() {
    let mut s = Session::tall_page();
    assert_eq!(s.press('J'), KeyDisposition::Consumed);
    assert_eq!(s.press('K'), KeyDisposition::Consumed);
    assert_eq!(s.press('x'), KeyDisposition::Consumed);
    assert_eq!(
        s.sent_tabs(),
        vec![
            TabRequest::MoveTab {
                direction: TabDirection::Next
            },
            TabRequest::MoveTab {
                direction: TabDirection::Prev
            },
            TabRequest::CloseTab,
        ]
    );
}

#[test]
fn unreachable_tab_service_degrades_to_noop() {
    let mut page = FakePage::new(800.0, 600.0).with_document_size(800.0, 5000.0);
    let (tx, rx) = mpsc::channel::<TabRequest>();
    drop(rx);
    let mut controller = ModeController::new(NavConfig::default(), tx);

    assert_eq!(
        controller.handle_key(&mut page, &KeyEvent::char('J')),
        KeyDisposition::Consumed
    );
    assert_eq!(
        controller.handle_key(&mut page, &KeyEvent::char('x')),
        KeyDisposition::Consumed
    );
    assert_eq!(
        controller.handle_key(&mut page, &KeyEvent::char('j')),
        KeyDisposition::Consumed
    );
    assert!(controller.scroll().live_direction().is_some());
}
