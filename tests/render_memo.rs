//! Preview memoization, observed through the render call counter.
//!
//! Run with: cargo test --features test-hooks --test render_memo

#![cfg(feature = "test-hooks")]

use serde_json::json;
use storecraft_core::render::{get_render_call_count, reset_render_call_count};
use storecraft_core::EditorSession;

#[test]
fn preview_renders_only_on_change() {
    reset_render_call_count();
    let mut session = EditorSession::with_defaults().unwrap();

    let first = session.preview().unwrap().fingerprint.clone();
    session.preview().unwrap();
    session.preview().unwrap();
    assert_eq!(get_render_call_count(), 1);

    // Selection is not part of the rendered document
    let hero = session.sections()[0].id.clone();
    session.set_active(Some(hero.as_str()));
    assert_eq!(session.preview().unwrap().fingerprint, first);
    assert_eq!(get_render_call_count(), 1);

    session.set_prop(&hero, "title", json!("Sale"));
    session.preview().unwrap();
    assert_eq!(get_render_call_count(), 2);

    session.undo();
    assert_eq!(session.preview().unwrap().fingerprint, first);
    assert_eq!(get_render_call_count(), 3);

    session.set_primary_color("#e17055");
    session.preview().unwrap();
    assert_eq!(get_render_call_count(), 4);
}
