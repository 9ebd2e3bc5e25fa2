//! Palette lifecycle: open, commit, dismiss.

use super::common::{auth_cache_store, docs_site, open_with, press, RecordingNavigator};
use docsift::{Key, KeyEvent, KeyOutcome, Modifiers, Palette, SearchConfig};

fn ctrl_k() -> KeyEvent {
    KeyEvent {
        key: Key::Char('k'),
        modifiers: Modifiers {
            ctrl: true,
            ..Modifiers::NONE
        },
    }
}

#[test]
fn shortcut_opens_an_empty_session() {
    let store = docs_site();
    let mut palette = Palette::new(&store, SearchConfig::default());
    assert!(!palette.is_open());

    let outcome = palette.handle_key(ctrl_k(), &mut RecordingNavigator::default());
    assert_eq!(outcome, KeyOutcome::Opened);
    assert!(palette.is_open());
    assert_eq!(palette.query(), "");
    assert!(palette.matches().is_empty());
}

#[test]
fn keys_are_ignored_while_closed() {
    let store = docs_site();
    let mut palette = Palette::new(&store, SearchConfig::default());

    assert_eq!(press(&mut palette, Key::ArrowDown), KeyOutcome::Ignored);
    assert_eq!(press(&mut palette, Key::Enter), KeyOutcome::Ignored);
    assert_eq!(press(&mut palette, Key::Char('k')), KeyOutcome::Ignored);
    assert!(!palette.is_open());
}

#[test]
fn enter_commits_highlighted_result() {
    let store = auth_cache_store();
    let mut palette = open_with(&store, "jwt");
    let mut nav = RecordingNavigator::default();

    palette.handle_key(KeyEvent::plain(Key::ArrowDown), &mut nav);
    let outcome = palette.handle_key(KeyEvent::plain(Key::Enter), &mut nav);

    assert_eq!(outcome, KeyOutcome::Committed("/docs/1".to_string()));
    assert_eq!(nav.visited, ["/docs/1"]);
    assert!(!palette.is_open());
}

#[test]
fn enter_without_selection_is_ignored() {
    let store = auth_cache_store();
    let mut palette = open_with(&store, "jwt");
    let mut nav = RecordingNavigator::default();

    let outcome = palette.handle_key(KeyEvent::plain(Key::Enter), &mut nav);
    assert_eq!(outcome, KeyOutcome::Ignored);
    assert!(nav.visited.is_empty());
    assert!(palette.is_open());
}

#[test]
fn escape_discards_the_session() {
    let store = docs_site();
    let mut palette = open_with(&store, "token");
    press(&mut palette, Key::ArrowDown);

    assert_eq!(press(&mut palette, Key::Escape), KeyOutcome::Closed);
    assert!(!palette.is_open());

    palette.open();
    assert_eq!(palette.query(), "");
    assert!(palette.matches().is_empty());
    assert_eq!(palette.cursor().selected(), None);
}

#[test]
fn shortcut_while_open_keeps_the_query() {
    let store = docs_site();
    let mut palette = open_with(&store, "token");

    let outcome = palette.handle_key(ctrl_k(), &mut RecordingNavigator::default());
    assert_eq!(outcome, KeyOutcome::Ignored);
    assert_eq!(palette.query(), "token");
    assert_eq!(palette.matches().len(), 3);
}

#[test]
fn click_commits_that_row() {
    let store = docs_site();
    let mut palette = open_with(&store, "token");
    let mut nav = RecordingNavigator::default();

    assert_eq!(palette.click(7, &mut nav), KeyOutcome::Ignored);
    assert_eq!(
        palette.click(2, &mut nav),
        KeyOutcome::Committed("/docs/6".to_string())
    );
    assert_eq!(nav.visited, ["/docs/6"]);
    assert!(!palette.is_open());
}

#[test]
fn queries_are_ignored_while_closed() {
    let store = docs_site();
    let mut palette = Palette::new(&store, SearchConfig::default());
    palette.set_query("token");
    assert!(!palette.is_open());
    assert!(palette.matches().is_empty());
}

#[test]
fn excerpt_prefers_the_provided_excerpt() {
    let store = docs_site();
    let palette = open_with(&store, "quick");
    let entry = palette.matches()[0];
    assert_eq!(palette.excerpt_for(entry), "Get up and running in five minutes.");
}

#[test]
fn dismiss_closes_without_navigating() {
    let store = docs_site();
    let mut palette = open_with(&store, "token");
    palette.hover(0);

    assert!(palette.dismiss());
    assert!(!palette.is_open());
    assert!(palette.selected().is_none());
    assert!(!palette.dismiss());
}
