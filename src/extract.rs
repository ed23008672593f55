//! Source extractor: recovers transition tables from generated C sources.
//!
//! Generated state tables look like
//!
//! ```c
//! static fsm_state_t menu_stateTable[] = {
//!     { (void*)menu_init, menu_EV_NEXT, (void*)menu_main },
//!     { NULL, menu_EV_LIMIT, NULL, }
//! };
//! ```
//!
//! The extractor finds each `static fsm_state_t ` marker, takes the
//! identifier before `[` as the table name, isolates the initializer with
//! the balanced-delimiter scanner, normalizes it with the lexical stripper,
//! and splits each inner `{...}` group into one transition. Identifiers in
//! scanned source are already namespaced, so nothing is prefixed here.

use memchr::memmem;
use once_cell::sync::Lazy;
use tracing::debug;

use crate::descriptor::split_record;
use crate::error::{FsmError, Result};
use crate::lex::{self, DEFAULT_STRIP_TOKENS};
use crate::table::{Transition, TransitionTable};

/// Lexical marker introducing a generated state-table declaration.
pub const TABLE_MARKER: &str = "static fsm_state_t ";

static MARKER_FINDER: Lazy<memmem::Finder<'static>> =
    Lazy::new(|| memmem::Finder::new(TABLE_MARKER));

/// Extract every state table declared in `source`.
///
/// A source with no marker yields an empty Vec; that is the common case
/// when sweeping a file tree and is not an error. A marker followed by a
/// truncated or unbalanced declaration is.
pub fn extract_tables(source: &str) -> Result<Vec<TransitionTable>> {
    let mut tables = Vec::new();
    let mut pos = 0;

    while let Some(off) = MARKER_FINDER.find(source[pos..].as_bytes()) {
        let name_start = pos + off + TABLE_MARKER.len();
        let rest = &source[name_start..];

        let bracket = rest.find('[').ok_or_else(|| FsmError::UnmatchedDelimiter {
            context: format!("no `[` after `{}` at offset {}", TABLE_MARKER.trim_end(), pos + off),
        })?;
        let name = rest[..bracket].trim();

        let open = rest.find('{').ok_or_else(|| FsmError::UnmatchedDelimiter {
            context: format!("no `{{` opening the initializer of state table `{name}`"),
        })?;
        let open_abs = name_start + open;
        let end = lex::matching_delimiter(source, open_abs, b'{', b'}')?;

        debug!(table = name, "found state table");
        let body = lex::strip(&source[open_abs + 1..end - 1], DEFAULT_STRIP_TOKENS);
        tables.push(parse_initializer(name, &body)?);

        pos = end;
    }

    Ok(tables)
}

/// Parse a stripped initializer body: one top-level `{...}` group per
/// transition record.
fn parse_initializer(name: &str, body: &str) -> Result<TransitionTable> {
    let mut table = TransitionTable::new(name);
    let mut pos = 0;

    while let Some(off) = body[pos..].find('{') {
        let open = pos + off;
        let end = lex::matching_delimiter(body, open, b'{', b'}')?;
        let record = &body[open + 1..end - 1];

        let [state, event, callback] =
            split_record(record).map_err(|message| FsmError::MalformedTableRecord {
                table: name.to_string(),
                record: record.to_string(),
                message,
            })?;
        table.push(Transition {
            state: state.to_string(),
            event: event.to_string(),
            callback: callback.to_string(),
        });

        pos = end;
    }

    Ok(table)
}
