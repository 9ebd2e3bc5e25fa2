//! Category grouping of matches.

use super::common::{docs_site, make_entry_in, open_with, store_of};
use docsift::{group_by_category, DocumentEntry};

#[test]
fn groups_in_first_appearance_order() {
    let store = docs_site();
    let palette = open_with(&store, "token");
    let groups = palette.groups();

    let labels: Vec<_> = groups.labels().collect();
    assert_eq!(labels, ["Guides", "API", "Security"]);
    assert_eq!(groups.get("API").map(<[_]>::len), Some(1));
}

#[test]
fn uncategorised_entries_fall_back_to_other() {
    let store = docs_site();
    let palette = open_with(&store, "release");
    let labels: Vec<_> = palette.groups().labels().collect();
    assert_eq!(labels, ["Other"]);
}

#[test]
fn interleaved_categories_keep_relative_order() {
    let entries = vec![
        make_entry_in(1, "a1", "x", "A"),
        make_entry_in(2, "b1", "x", "B"),
        make_entry_in(3, "a2", "x", "A"),
        make_entry_in(4, "b2", "x", "B"),
    ];
    let groups = group_by_category(&entries, "Other");

    let flat: Vec<_> = groups.iter().flat_map(|g| g.entries.iter().map(|e| e.title.as_str())).collect();
    assert_eq!(flat, ["a1", "a2", "b1", "b2"]);
}

#[test]
fn concatenated_groups_are_a_permutation_of_matches() {
    let store = store_of(vec![
        make_entry_in(1, "Setup", "install", "Guides"),
        make_entry_in(2, "Install API", "endpoint", "API"),
        make_entry_in(3, "Reinstall", "again", "Guides"),
    ]);
    let palette = open_with(&store, "install");

    let mut grouped: Vec<&DocumentEntry> = palette.groups().entries().collect();
    let mut matches = palette.matches();
    grouped.sort_by_key(|e| e.url.clone());
    matches.sort_by_key(|e| e.url.clone());
    assert_eq!(grouped, matches);
}

#[test]
fn groups_serialize_as_a_list() {
    let store = docs_site();
    let palette = open_with(&store, "webhooks");
    let json = serde_json::to_value(palette.groups()).unwrap();

    assert_eq!(json[0]["label"], "API");
    assert_eq!(json[0]["entries"][0]["url"], "/docs/4");
}
