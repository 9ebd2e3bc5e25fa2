//! Cursor movement through the keyboard contract.

use super::common::{docs_site, open_with, press};
use docsift::{Key, KeyOutcome};

#[test]
fn fresh_results_have_no_selection() {
    let store = docs_site();
    let palette = open_with(&store, "token");
    assert_eq!(palette.cursor().selected(), None);
    assert_eq!(palette.cursor().as_index(), -1);
}

#[test]
fn arrow_down_clamps_at_last_row() {
    let store = docs_site();
    let mut palette = open_with(&store, "token");

    for _ in 0..4 {
        press(&mut palette, Key::ArrowDown);
    }
    assert_eq!(palette.cursor().selected(), Some(2));
}

#[test]
fn arrow_up_clamps_at_first_row() {
    let store = docs_site();
    let mut palette = open_with(&store, "token");

    assert_eq!(press(&mut palette, Key::ArrowUp), KeyOutcome::Moved(Some(0)));
    press(&mut palette, Key::ArrowDown);
    press(&mut palette, Key::ArrowUp);
    press(&mut palette, Key::ArrowUp);
    assert_eq!(palette.cursor().selected(), Some(0));
}

#[test]
fn arrows_over_no_results_do_nothing() {
    let store = docs_site();
    let mut palette = open_with(&store, "zz");

    assert_eq!(press(&mut palette, Key::ArrowDown), KeyOutcome::Moved(None));
    assert_eq!(press(&mut palette, Key::ArrowUp), KeyOutcome::Moved(None));
}

#[test]
fn typing_resets_the_cursor() {
    let store = docs_site();
    let mut palette = open_with(&store, "token");
    press(&mut palette, Key::ArrowDown);
    press(&mut palette, Key::ArrowDown);

    palette.set_query("tokens");
    assert_eq!(palette.cursor().selected(), None);
}

#[test]
fn hover_moves_the_cursor_within_range() {
    let store = docs_site();
    let mut palette = open_with(&store, "token");

    assert!(palette.hover(1));
    assert_eq!(palette.selected().map(|e| e.title.as_str()), Some("Rate Limits"));
    assert!(!palette.hover(3));
    assert_eq!(palette.cursor().selected(), Some(1));
}
