//! Tests for the dirty flag mechanism
//!
//! The event loop only redraws when `needs_redraw` is set. State changes
//! that affect what is on screen must set it.

mod common;

use common::*;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fetch_dogs::app::AppMessage;
use fetch_dogs::models::User;

fn idle_app() -> TestHarness {
    let mut harness = TestHarness::new(&MockService::new().build());
    harness.app.needs_redraw = false;
    harness
}

#[test]
fn test_app_initializes_with_needs_redraw_true() {
    let harness = TestHarness::new(&MockService::new().build());
    assert!(harness.app.needs_redraw, "App should initialize with needs_redraw=true");
}

#[test]
fn test_key_event_marks_dirty() {
    let mut harness = idle_app();
    harness
        .app
        .handle_key_event(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
    assert!(harness.app.needs_redraw);
}

#[test]
fn test_paste_marks_dirty() {
    let mut harness = idle_app();
    harness.app.handle_paste("Ada");
    assert!(harness.app.needs_redraw);
    assert_eq!(harness.app.login.name, "Ada");
}

#[test]
fn test_message_marks_dirty() {
    let mut harness = idle_app();
    harness.app.handle_message(AppMessage::LogoutFinished { error: None });
    assert!(harness.app.needs_redraw);
}

#[test]
fn test_idle_tick_does_not_mark_dirty() {
    let mut harness = idle_app();
    harness.app.tick();
    assert!(!harness.app.needs_redraw, "Nothing animates while idle");
}

#[test]
fn test_tick_while_loading_marks_dirty() {
    let mut harness = idle_app();
    harness.app.session.authenticate(User::new("Ada", "ada@example.com"));
    harness.app.results.begin_request();
    harness.app.tick();
    assert!(harness.app.needs_redraw, "Spinner needs a redraw each tick");
}
