//! Rendering backends consuming a [`TransitionTable`](crate::table::TransitionTable):
//!
//! - [`template`]: placeholder substitution into the C template set
//!   (forward pipeline).
//! - [`diagram`]: Mermaid graph text and the static HTML viewer
//!   (reverse pipeline).

pub mod diagram;
pub mod template;
