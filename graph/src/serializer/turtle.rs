//! Turtle 1.1 serializer for the inventors graph.
//!
//! Produces the full document: the fixed two-prefix preamble followed by one
//! `wdt:P800` triple line per row, in row order.

use crate::model::{InventionRow, NOTABLE_WORK, WDT_IRI, WD_IRI};

/// Serializes the rows to a complete Turtle document.
///
/// Identifier values are embedded verbatim between angle brackets: no
/// trimming, escaping, or URI validation is applied. A value that itself
/// contains `>` therefore yields syntactically invalid Turtle; the converter
/// passes it through unchanged.
///
/// Triple lines are joined with single newlines and the document carries no
/// trailing newline after the last triple. An empty table yields exactly the
/// preamble, ending in its blank line.
#[must_use]
pub fn to_turtle(rows: &[InventionRow]) -> String {
    let mut out = String::with_capacity(128 + rows.len() * 48);

    // Prefix declarations
    out.push_str("@prefix wdt: <");
    out.push_str(WDT_IRI);
    out.push_str("> .\n");
    out.push_str("@prefix wd: <");
    out.push_str(WD_IRI);
    out.push_str("> .\n");
    out.push('\n');

    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        triple(&mut out, &row.inventor, NOTABLE_WORK, &row.invention);
    }

    out
}

fn triple(out: &mut String, subj: &str, pred: &str, obj: &str) {
    out.push('<');
    out.push_str(subj);
    out.push_str("> ");
    out.push_str(pred);
    out.push_str(" <");
    out.push_str(obj);
    out.push_str("> .");
}
