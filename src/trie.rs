//! Character trie with values on word-final states
//!
//! States live in one flat vector and transitions are labeled by `char`, so
//! words sharing a prefix share states. Transitions are kept sorted, which
//! makes walks over them deterministic.
use std::collections::BTreeMap;

use farm::{self, StateMap};

/// Index into the state vector. The root is always state 0.
pub type StateId = u32;

#[derive(Default)]
pub(crate) struct State {
    /// Does a stored word end here?
    pub(crate) terminal: bool,
    pub(crate) transitions: BTreeMap<char, StateId>,
}

/// Maps words to values, one character transition at a time
pub struct Trie<V> {
    states: Vec<State>,
    values: StateMap<StateId, V>,
}

impl<V> Trie<V> {
    pub fn new() -> Trie<V> {
        Trie {
            states: vec![State::default()],
            values: farm::new_state_map(),
        }
    }

    /// Store a word with its value, replacing the value if the word is
    /// already present
    pub fn insert(&mut self, word: &str, value: V) {
        let mut current: StateId = 0;
        for c in word.chars() {
            let found = self.states[current as usize].transitions.get(&c).cloned();
            current = match found {
                Some(next) => next,
                None => {
                    let next = self.new_state();
                    self.states[current as usize].transitions.insert(c, next);
                    next
                }
            };
        }
        self.states[current as usize].terminal = true;
        self.values.insert(current, value);
    }

    /// Look up the value of an exact word. Prefixes of stored words are not
    /// hits unless they were stored themselves.
    pub fn get(&self, word: &str) -> Option<&V> {
        let mut current: StateId = 0;
        for c in word.chars() {
            match self.states[current as usize].transitions.get(&c) {
                Some(&next) => current = next,
                None => return None,
            }
        }
        if self.states[current as usize].terminal {
            self.values.get(&current)
        } else {
            None
        }
    }

    /// How many states the trie holds, root included
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// How many distinct words are stored
    pub fn word_count(&self) -> usize {
        self.values.len()
    }

    fn new_state(&mut self) -> StateId {
        assert!(
            self.states.len() < u32::max_value() as usize,
            "trie state space exhausted"
        );
        let id = self.states.len() as StateId;
        self.states.push(State::default());
        id
    }

    pub(crate) fn root(&self) -> StateId {
        0
    }

    pub(crate) fn state(&self, id: StateId) -> &State {
        &self.states[id as usize]
    }

    pub(crate) fn value(&self, id: StateId) -> Option<&V> {
        self.values.get(&id)
    }
}
