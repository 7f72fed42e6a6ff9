//! Approximate word lookup over a trie
//!
//! Finds every stored word reachable from an input word within a cutoff
//! number of edits. One edit substitutes, inserts, or deletes a character,
//! or transposes two neighboring ones. The walk carries an explicit stack
//! instead of recursing, since the branching is wide and the useful depth
//! is bounded by the input length plus the cutoff.
use farm::{self, TokenMap};
use trie::{StateId, Trie};

/// A stored word within the edit cutoff of the input
#[derive(Debug, Clone, PartialEq)]
pub struct Found<V> {
    pub word: String,
    pub value: V,
    /// How many edits it took to reach the word, the fewest possible
    pub edits: u32,
}

/// One pending branch of the walk
struct Item {
    state: StateId,
    edits: u32,
    /// How many input characters are consumed
    pos: usize,
    /// The word spelled by the trie path so far
    candidate: String,
}

/// Every word in the trie within `cutoff` edits of `word`, in no particular
/// order. A word reachable along several paths is reported once with its
/// minimum edit count.
pub fn find_within<V: Clone>(trie: &Trie<V>, word: &str, cutoff: u32) -> Vec<Found<V>> {
    let input: Vec<char> = word.chars().collect();
    let mut best: TokenMap<(u32, StateId)> = farm::new_token_map();
    let mut stack = vec![Item {
        state: trie.root(),
        edits: 0,
        pos: 0,
        candidate: String::new(),
    }];

    while let Some(top) = stack.pop() {
        let state = trie.state(top.state);

        // The whole input is consumed on a word-final state: a match
        if top.pos == input.len() && state.terminal {
            let record = best
                .entry(top.candidate.clone())
                .or_insert((top.edits, top.state));
            if record.0 > top.edits {
                *record = (top.edits, top.state);
            }
        }

        // Follow the input as written, no edit spent
        if let Some(&c) = input.get(top.pos) {
            if let Some(&next) = state.transitions.get(&c) {
                stack.push(Item {
                    state: next,
                    edits: top.edits,
                    pos: top.pos + 1,
                    candidate: push_char(&top.candidate, c),
                });
            }
        }

        if top.edits == cutoff {
            continue;
        }

        // Deletion consumes an input character without moving in the trie
        if top.pos < input.len() {
            stack.push(Item {
                state: top.state,
                edits: top.edits + 1,
                pos: top.pos + 1,
                candidate: top.candidate.clone(),
            });
        }

        for (&label, &next) in &state.transitions {
            // Transposition, when the next two input characters cross this
            // edge and one beyond it in swapped order
            if top.pos + 1 < input.len() && input[top.pos + 1] == label {
                if let Some(&after) = trie.state(next).transitions.get(&input[top.pos]) {
                    let mut candidate = top.candidate.clone();
                    candidate.push(label);
                    candidate.push(input[top.pos]);
                    stack.push(Item {
                        state: after,
                        edits: top.edits + 1,
                        pos: top.pos + 2,
                        candidate,
                    });
                }
            }
            // Substitution spends the current input character on this edge
            if top.pos < input.len() {
                stack.push(Item {
                    state: next,
                    edits: top.edits + 1,
                    pos: top.pos + 1,
                    candidate: push_char(&top.candidate, label),
                });
            }
            // Insertion takes this edge without consuming any input
            stack.push(Item {
                state: next,
                edits: top.edits + 1,
                pos: top.pos,
                candidate: push_char(&top.candidate, label),
            });
        }
    }

    best.into_iter()
        .map(|(word, (edits, state))| Found {
            word,
            value: trie
                .value(state)
                .expect("word-final trie state without a value")
                .clone(),
            edits,
        })
        .collect()
}

fn push_char(base: &str, c: char) -> String {
    let mut extended = String::with_capacity(base.len() + c.len_utf8());
    extended.push_str(base);
    extended.push(c);
    extended
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trie<f64> {
        let mut words = Trie::new();
        words.insert("apple", -1.0);
        words.insert("apply", -2.0);
        words.insert("ape", -1.5);
        words
    }

    fn ranked(mut found: Vec<Found<f64>>) -> Vec<(String, u32)> {
        found.sort_by(|a, b| a.word.cmp(&b.word));
        found.into_iter().map(|f| (f.word, f.edits)).collect()
    }

    #[test]
    fn exact_matches_cost_nothing() {
        let found = find_within(&sample(), "apple", 0);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].word, "apple");
        assert_eq!(found[0].edits, 0);
        assert_eq!(found[0].value, -1.0);
    }

    #[test]
    fn cutoff_zero_rejects_near_misses() {
        assert!(find_within(&sample(), "appla", 0).is_empty());
    }

    #[test]
    fn substitution_is_one_edit() {
        let found = ranked(find_within(&sample(), "appla", 1));
        assert_eq!(found, vec![("apple".to_string(), 1), ("apply".to_string(), 1)]);
    }

    #[test]
    fn insertion_and_deletion_are_one_edit() {
        // "aple" reaches apple by inserting a p, and ape by deleting the l
        let found = ranked(find_within(&sample(), "aple", 1));
        assert_eq!(found, vec![("ape".to_string(), 1), ("apple".to_string(), 1)]);
    }

    #[test]
    fn deletion_drops_an_extra_character() {
        let found = ranked(find_within(&sample(), "appple", 1));
        assert_eq!(found, vec![("apple".to_string(), 1)]);
    }

    #[test]
    fn transposition_is_one_edit_not_two() {
        let found = ranked(find_within(&sample(), "aplpe", 1));
        assert_eq!(found, vec![("apple".to_string(), 1)]);
    }

    #[test]
    fn repeated_words_report_their_minimum_edits() {
        // At cutoff 2 the exact word is also reachable by wasteful paths;
        // only the cheapest count survives
        let found = ranked(find_within(&sample(), "apple", 2));
        assert_eq!(
            found,
            vec![
                ("ape".to_string(), 2),
                ("apple".to_string(), 0),
                ("apply".to_string(), 1),
            ]
        );
    }

    #[test]
    fn empty_input_reaches_short_words_by_insertion() {
        let mut words = Trie::new();
        words.insert("a", 0.5);
        assert!(find_within(&words, "", 0).is_empty());
        let found = find_within(&words, "", 1);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].word, "a");
        assert_eq!(found[0].edits, 1);
    }

    #[test]
    fn far_away_words_stay_hidden() {
        assert!(find_within(&sample(), "zucchini", 1).is_empty());
    }
}
