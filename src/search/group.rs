// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Grouping matches into category sections for display.
//!
//! Groups appear in the order their label is first seen, and entries keep
//! their match order inside a group. Reading the groups front to back gives
//! back the match list exactly; nothing is dropped, nothing is repeated.

use serde::Serialize;

use crate::types::DocumentEntry;

/// One category section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultGroup<'a> {
    pub label: &'a str,
    pub entries: Vec<&'a DocumentEntry>,
}

/// Matches partitioned by category, in first-seen label order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GroupedResults<'a> {
    groups: Vec<ResultGroup<'a>>,
}

impl<'a> GroupedResults<'a> {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<&[&'a DocumentEntry]> {
        self.groups
            .iter()
            .find(|group| group.label == label)
            .map(|group| group.entries.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResultGroup<'a>> {
        self.groups.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.groups.iter().map(|group| group.label)
    }

    /// Every entry, group by group.
    pub fn entries(&self) -> impl Iterator<Item = &'a DocumentEntry> + '_ {
        self.groups
            .iter()
            .flat_map(|group| group.entries.iter().copied())
    }
}

impl<'a> IntoIterator for GroupedResults<'a> {
    type Item = ResultGroup<'a>;
    type IntoIter = std::vec::IntoIter<ResultGroup<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Partition `matches` by category. Entries without a (non-blank) category go
/// under `fallback`.
pub fn group_by_category<'a, I>(matches: I, fallback: &'a str) -> GroupedResults<'a>
where
    I: IntoIterator<Item = &'a DocumentEntry>,
{
    let mut groups: Vec<ResultGroup<'a>> = Vec::new();
    for entry in matches {
        let label = entry.category_or(fallback);
        match groups.iter_mut().find(|group| group.label == label) {
            Some(group) => group.entries.push(entry),
            None => groups.push(ResultGroup {
                label,
                entries: vec![entry],
            }),
        }
    }
    GroupedResults { groups }
}
