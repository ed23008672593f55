//! fsmgen - transition-table compiler for embedded-style state machines.
//!
//! Bidirectional translator between a compact FSM descriptor and its C
//! realization, plus a Mermaid diagram renderer:
//!
//! - **forward**: `descriptor::parse` turns a `state,event,callback` line
//!   list into a [`table::TransitionTable`]; `render::template` substitutes
//!   it into the C template set, one output file per template.
//! - **reverse**: `scan::scan_tree` sweeps a file tree,
//!   `extract::extract_tables` recovers tables from generated sources, and
//!   `render::diagram` emits `graph TD` text plus a static HTML viewer per
//!   table.
//!
//! The descriptor format, template placeholder vocabulary, and generated
//! table shape are shared with the C runtime this tool feeds; both parsers
//! meet in the same [`table::TransitionTable`] representation, which is
//! what makes forward-then-reverse round-trips possible.

pub mod descriptor;
pub mod error;
pub mod extract;
pub mod fsio;
pub mod lex;
pub mod render;
pub mod scan;
pub mod table;

pub use error::{FsmError, Result};
pub use table::{Transition, TransitionTable};
