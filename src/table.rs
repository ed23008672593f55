//! The transition table: the shared representation both parsers produce
//! and both renderers consume.
//!
//! A table is an ordered sequence of `(state, event, callback)` triples.
//! Order is semantically meaningful: the first transition's state is the
//! machine's start state, and generated event enumerations and function
//! lists follow first-seen order so re-runs over identical input produce
//! identical output.

use rustc_hash::FxHashSet;

/// Sentinel state/callback value meaning "no outgoing edge".
///
/// Retained in the table and in generated code, excluded from diagrams and
/// from the symbol set.
pub const NULL_TOKEN: &str = "NULL";

/// One `(state, event, callback)` record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transition {
    pub state: String,
    pub event: String,
    pub callback: String,
}

/// Insertion-ordered string set: a sequence plus a membership index.
///
/// First insertion wins; later duplicates are ignored. Built once during
/// parsing, read-only afterwards.
#[derive(Debug, Default, Clone)]
pub struct OrderedSet {
    items: Vec<String>,
    index: FxHashSet<String>,
}

impl OrderedSet {
    pub fn insert(&mut self, value: &str) {
        if !self.index.contains(value) {
            self.index.insert(value.to_string());
            self.items.push(value.to_string());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Ordered transitions plus the projections renderers need.
#[derive(Debug, Default, Clone)]
pub struct TransitionTable {
    /// Table identifier: the FSM name (forward) or the declared array name
    /// (reverse).
    pub name: String,
    transitions: Vec<Transition>,
    events: OrderedSet,
    symbols: OrderedSet,
}

impl TransitionTable {
    pub fn new(name: impl Into<String>) -> Self {
        TransitionTable {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Append a transition and fold it into the derived sets.
    ///
    /// The `NULL` sentinel never enters the symbol set: it is not an
    /// identifier and must not get a generated stub.
    pub(crate) fn push(&mut self, t: Transition) {
        self.events.insert(&t.event);
        if t.state != NULL_TOKEN {
            self.symbols.insert(&t.state);
        }
        if t.callback != NULL_TOKEN {
            self.symbols.insert(&t.callback);
        }
        self.transitions.push(t);
    }

    /// State of the first transition, the machine's initial state.
    pub fn start_state(&self) -> Option<&str> {
        self.transitions.first().map(|t| t.state.as_str())
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Unique events, first-seen order.
    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.events.iter()
    }

    /// Unique states and callbacks used as function names, first-seen order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter()
    }

    /// Transitions leaving `symbol`, in table order.
    pub fn outgoing<'a>(&'a self, symbol: &'a str) -> impl Iterator<Item = &'a Transition> {
        self.transitions.iter().filter(move |t| t.state == symbol)
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }
}
