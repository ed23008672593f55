//! Mermaid diagram renderer for the reverse pipeline.
//!
//! One `graph TD` document per table, one edge statement per transition
//! whose state is not the `NULL` sentinel, in table order. The HTML viewer
//! is a fixed wrapper around the graph text pointing at the Mermaid CDN;
//! the output is meant to be dropped into a `docs/` directory and opened
//! in a browser as-is.

use crate::table::{TransitionTable, NULL_TOKEN};

const VIEWER_HEAD: &str = "<html><body>\
<script src=\"https://cdn.jsdelivr.net/npm/mermaid@8.4.0/dist/mermaid.min.js\"></script>\
<script>mermaid.initialize({startOnLoad:true});</script>\
<div class=\"mermaid\">\n";

const VIEWER_TAIL: &str = "</div></body></html>";

/// Render the Mermaid graph text.
///
/// `NULL`-state rows are table sentinels, not edges; they are skipped
/// without disturbing the order of the remaining edges.
pub fn to_mermaid(table: &TransitionTable) -> String {
    let mut graph = String::from("graph TD\n");
    for t in table.transitions() {
        if t.state != NULL_TOKEN {
            graph.push_str("  ");
            graph.push_str(&t.state);
            graph.push_str(" -->|");
            graph.push_str(&t.event);
            graph.push_str("| ");
            graph.push_str(&t.callback);
            graph.push('\n');
        }
    }
    graph
}

/// Wrap graph text in the static HTML viewer document.
pub fn to_viewer_html(graph: &str) -> String {
    let mut html = String::with_capacity(VIEWER_HEAD.len() + graph.len() + VIEWER_TAIL.len());
    html.push_str(VIEWER_HEAD);
    html.push_str(graph);
    html.push_str(VIEWER_TAIL);
    html
}
