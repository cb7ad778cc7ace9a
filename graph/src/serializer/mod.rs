//! Serializers for the inventors graph.
//!
//! One serialization format is supported:
//! - **Turtle** ([`turtle`]) — the output artifact, `data/inventors_graph.ttl`
//!   by default.

pub mod turtle;
