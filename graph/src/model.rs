//! Row types and the fixed Wikidata vocabulary.
//!
//! The vocabulary is not configurable: the converter emits exactly one
//! predicate, `wdt:P800` ("notable work"), under the two standard Wikidata
//! prefixes.

use serde::Deserialize;

/// IRI bound to the `wdt:` prefix (Wikidata direct-claim properties).
pub const WDT_IRI: &str = "http://www.wikidata.org/prop/direct/";

/// IRI bound to the `wd:` prefix (Wikidata entities).
pub const WD_IRI: &str = "http://www.wikidata.org/entity/";

/// The one predicate this converter emits, as its prefixed Turtle token.
pub const NOTABLE_WORK: &str = "wdt:P800";

/// Column names the input header must contain. Other columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 2] = ["inventor", "invention"];

/// One (inventor, invention) pair, read verbatim from a table record.
///
/// Values are expected to be URIs or URI fragments but are not validated,
/// trimmed, or escaped; whatever the table holds is embedded as-is. Duplicate
/// rows pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InventionRow {
    /// Subject identifier.
    pub inventor: String,
    /// Object identifier.
    pub invention: String,
}
