//! Template renderer: substitutes table-derived text into the C template
//! set, producing the four boilerplate files of one machine.
//!
//! The placeholder vocabulary is closed and each token has a fixed
//! substitution mode. `$FSM_NAME$` is replaced at every occurrence; every
//! other placeholder only at its first. The asymmetry is deliberate: the
//! name recurs throughout a template, while the table, event list, and stub
//! blocks each have exactly one insertion point.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{FsmError, Result};
use crate::fsio;
use crate::table::TransitionTable;

/// File-name suffixes of the template set, in render order.
pub const TEMPLATE_SUFFIXES: [&str; 4] = ["_tsk.c", "_tsk.h", "_api.c", "_api.h"];

/// Compiled-in default templates, paired with [`TEMPLATE_SUFFIXES`].
const DEFAULT_TEMPLATES: [&str; 4] = [
    include_str!("../../templates/_tsk.c"),
    include_str!("../../templates/_tsk.h"),
    include_str!("../../templates/_api.c"),
    include_str!("../../templates/_api.h"),
];

/// How a placeholder substitutes: once or everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    First,
    All,
}

/// The closed placeholder vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placeholder {
    Name,
    StartCb,
    Table,
    EventList,
    Prototype,
    Function,
}

/// Substitution order. `Name` first, so identifiers inserted by the other
/// placeholders (already fully qualified) are never re-scanned for it.
const PLACEHOLDERS: [Placeholder; 6] = [
    Placeholder::Name,
    Placeholder::StartCb,
    Placeholder::Table,
    Placeholder::EventList,
    Placeholder::Prototype,
    Placeholder::Function,
];

impl Placeholder {
    fn token(self) -> &'static str {
        match self {
            Placeholder::Name => "$FSM_NAME$",
            Placeholder::StartCb => "$FSM_START_CB$",
            Placeholder::Table => "$FSM_TABLE$",
            Placeholder::EventList => "$FSM_EVENT_LIST$",
            Placeholder::Prototype => "$FSM_PROTOTYPE$",
            Placeholder::Function => "$FSM_FUNCTION$",
        }
    }

    fn mode(self) -> Mode {
        match self {
            Placeholder::Name => Mode::All,
            _ => Mode::First,
        }
    }

    fn expansion(self, table: &TransitionTable) -> String {
        match self {
            Placeholder::Name => table.name.clone(),
            Placeholder::StartCb => table.start_state().unwrap_or_default().to_string(),
            Placeholder::Table => table_rows(table),
            Placeholder::EventList => event_list(table),
            Placeholder::Prototype => prototypes(table),
            Placeholder::Function => functions(table),
        }
    }
}

/// State-table initializer rows. Each row ends with a newline and the
/// two-space indent of the sentinel row that follows it in the template.
fn table_rows(table: &TransitionTable) -> String {
    let mut out = String::new();
    for t in table.transitions() {
        let _ = write!(
            out,
            "{{ (void*){}, {}, (void*){} }},\n  ",
            t.state, t.event, t.callback
        );
    }
    out
}

/// Event enumerators, each followed by `,` and the enum-body indent.
fn event_list(table: &TransitionTable) -> String {
    let mut out = String::new();
    for event in table.events() {
        let _ = write!(out, "{event},\n  ");
    }
    out
}

/// One doc comment and handler prototype per symbol.
fn prototypes(table: &TransitionTable) -> String {
    let mut out = String::new();
    for symbol in table.symbols() {
        let _ = write!(
            out,
            "/**\n * @brief {symbol}\n */\n{}_evHandler {symbol}(fsm_handler_t* this);\n\n",
            table.name
        );
    }
    out
}

/// One handler stub per symbol, with a placeholder-conditioned early return
/// per outgoing transition for manual completion.
fn functions(table: &TransitionTable) -> String {
    let mut out = String::new();
    for symbol in table.symbols() {
        let mut body = String::new();
        for t in table.outgoing(symbol) {
            let _ = write!(body, "\n  if(0)\n    return {};", t.event);
        }
        let _ = write!(
            out,
            "{}_evHandler {symbol}(fsm_handler_t* this)\n{{{body}\n}}\n\n",
            table.name
        );
    }
    out
}

fn substitute(text: &str, token: &str, replacement: &str, mode: Mode) -> String {
    match mode {
        Mode::All => text.replace(token, replacement),
        Mode::First => match text.find(token) {
            Some(pos) => {
                let mut out = String::with_capacity(text.len() + replacement.len());
                out.push_str(&text[..pos]);
                out.push_str(replacement);
                out.push_str(&text[pos + token.len()..]);
                out
            }
            None => text.to_string(),
        },
    }
}

/// Render one template against a table. Placeholders absent from the
/// template are skipped; output is byte-deterministic in the input.
pub fn render(template: &str, table: &TransitionTable) -> String {
    let mut contents = template.to_string();
    for placeholder in PLACEHOLDERS {
        let token = placeholder.token();
        if contents.contains(token) {
            contents = substitute(&contents, token, &placeholder.expansion(table), placeholder.mode());
        }
    }
    contents
}

/// A named template set: one document per suffix.
#[derive(Debug)]
pub struct TemplateSet {
    templates: Vec<(&'static str, String)>,
}

impl TemplateSet {
    /// The compiled-in default set.
    pub fn embedded() -> Self {
        TemplateSet {
            templates: TEMPLATE_SUFFIXES
                .iter()
                .zip(DEFAULT_TEMPLATES)
                .map(|(suffix, text)| (*suffix, text.to_string()))
                .collect(),
        }
    }

    /// Load an overriding set from `dir`. All four files must exist there;
    /// a missing one is [`FsmError::MissingTemplateFile`].
    pub fn load(dir: &Path) -> Result<Self> {
        let mut templates = Vec::with_capacity(TEMPLATE_SUFFIXES.len());
        for suffix in TEMPLATE_SUFFIXES {
            let path = dir.join(suffix);
            if !path.is_file() {
                return Err(FsmError::MissingTemplateFile(path));
            }
            templates.push((suffix, fsio::read_to_string(&path)?));
        }
        Ok(TemplateSet { templates })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.templates.iter().map(|(s, t)| (*s, t.as_str()))
    }
}

/// Forward-pipeline output: render every template and write
/// `<out_dir>/<fsmName><suffix>` atomically, creating the directory if
/// absent. Returns the written paths.
pub fn generate_sources(
    table: &TransitionTable,
    templates: &TemplateSet,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    fsio::create_dir_all(out_dir)?;

    let mut written = Vec::with_capacity(TEMPLATE_SUFFIXES.len());
    for (suffix, template) in templates.iter() {
        let target = out_dir.join(format!("{}{}", table.name, suffix));
        info!(file = %target.display(), "generating");
        fsio::write_atomic(&target, render(template, table).as_bytes())?;
        written.push(target);
    }
    Ok(written)
}
