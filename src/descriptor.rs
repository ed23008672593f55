//! Descriptor parser: the forward pipeline's input format.
//!
//! One transition per non-empty line, `state,event,callback`, whitespace
//! around fields ignored. Every identifier is prefixed `<fsmName>_` so the
//! generated code stays namespaced per machine; the `NULL` sentinel is the
//! one token left unprefixed.

use std::path::Path;

use crate::error::{FsmError, Result};
use crate::table::{Transition, TransitionTable, NULL_TOKEN};

/// Split one record body on commas into exactly three non-empty trimmed
/// fields, or say precisely what is wrong with it.
///
/// A single trailing empty field is dropped first: generated initializer
/// rows carry a trailing comma (`{ NULL, EV_LIMIT, NULL, }`), and the rule
/// is applied uniformly to descriptor lines.
pub(crate) fn split_record(body: &str) -> std::result::Result<[&str; 3], String> {
    let mut fields: Vec<&str> = body.split(',').map(str::trim).collect();
    if fields.len() > 1 && fields.last() == Some(&"") {
        fields.pop();
    }
    let [state, event, callback] = fields[..] else {
        return Err(format!(
            "expected `state,event,callback`, found {} field(s)",
            fields.len()
        ));
    };
    for (field, role) in [(state, "state"), (event, "event"), (callback, "callback")] {
        if field.is_empty() {
            return Err(format!("empty {role} field"));
        }
    }
    Ok([state, event, callback])
}

/// Prefix an identifier with the FSM name, leaving the `NULL` sentinel alone.
fn prefixed(fsm_name: &str, ident: &str) -> String {
    if ident == NULL_TOKEN {
        ident.to_string()
    } else {
        format!("{fsm_name}_{ident}")
    }
}

/// Parse a descriptor into a transition table named after the FSM.
///
/// `path` is only used for error reporting; the caller has already read
/// the file. Empty (or whitespace-only) lines are skipped; any other line
/// must split into exactly three fields or the parse fails with
/// [`FsmError::MalformedDescriptorLine`] naming the 1-based line.
pub fn parse(descriptor: &str, fsm_name: &str, path: &Path) -> Result<TransitionTable> {
    let mut table = TransitionTable::new(fsm_name);

    for (idx, line) in descriptor.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let [state, event, callback] =
            split_record(line).map_err(|message| FsmError::MalformedDescriptorLine {
                path: path.to_path_buf(),
                line: idx + 1,
                message,
            })?;
        table.push(Transition {
            state: prefixed(fsm_name, state),
            event: prefixed(fsm_name, event),
            callback: prefixed(fsm_name, callback),
        });
    }

    Ok(table)
}
