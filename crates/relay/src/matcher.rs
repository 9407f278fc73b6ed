//! Watch-lists and entity matching.
//!
//! A watch-list token is either a numeric id written in decimal or a literal
//! name. Matching is exact and case-sensitive.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use zkb_events::NamedEntity;

/// A set of name or id tokens for one entity kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct WatchList {
    tokens: HashSet<String>,
}

impl From<Vec<String>> for WatchList {
    fn from(tokens: Vec<String>) -> Self {
        Self::from_tokens(tokens)
    }
}

impl From<WatchList> for Vec<String> {
    fn from(list: WatchList) -> Self {
        let mut tokens: Vec<String> = list.tokens.into_iter().collect();
        tokens.sort();
        tokens
    }
}

impl WatchList {
    /// Creates an empty watch-list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a comma-separated list, e.g. `"Bob Nobody,98000001"`.
    ///
    /// Whitespace around each token is trimmed and empty tokens are dropped,
    /// so `""` and `" , "` both give an empty list.
    pub fn parse(input: &str) -> Self {
        Self::from_tokens(input.trim().split(','))
    }

    /// Builds a watch-list from individual tokens, dropping blank ones.
    pub fn from_tokens(tokens: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        let mut list = Self::new();
        list.extend(tokens);
        list
    }

    /// Adds tokens to the list, dropping blank ones.
    pub fn extend(&mut self, tokens: impl IntoIterator<Item = impl AsRef<str>>) {
        for token in tokens {
            let token = token.as_ref().trim();
            if !token.is_empty() {
                self.tokens.insert(token.to_string());
            }
        }
    }

    /// Checks whether a token is on the list.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates over the tokens in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

/// The three watch-lists, one per entity kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchSet {
    pub characters: WatchList,
    pub corporations: WatchList,
    pub alliances: WatchList,
}

impl WatchSet {
    /// Creates a watch set from three comma-separated lists.
    pub fn parse(characters: &str, corporations: &str, alliances: &str) -> Self {
        Self {
            characters: WatchList::parse(characters),
            corporations: WatchList::parse(corporations),
            alliances: WatchList::parse(alliances),
        }
    }

    /// True when nothing at all is being watched.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty() && self.corporations.is_empty() && self.alliances.is_empty()
    }

    /// Total number of tokens across the three lists.
    pub fn len(&self) -> usize {
        self.characters.len() + self.corporations.len() + self.alliances.len()
    }

    /// Merges another set into this one.
    pub fn merge(&mut self, other: &WatchSet) {
        self.characters.extend(other.characters.iter());
        self.corporations.extend(other.corporations.iter());
        self.alliances.extend(other.alliances.iter());
    }
}

/// Returns true if the entity's name or decimal id is on the watch-list.
///
/// An absent entity (id 0, empty name) never matches.
pub fn is_relevant(entity: &NamedEntity, watch: &WatchList) -> bool {
    if entity.is_absent() {
        return false;
    }
    watch.contains(&entity.name) || watch.contains(&entity.id_token())
}
