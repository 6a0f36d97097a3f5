//! Board module tests.
//!
//! - `counts.rs` - move counts for known positions and empty-board geometry
//! - `edge_cases.rs` - positions that exercise board edges and blockers
//! - `proptest.rs` - property-based tests over random positions and playouts

mod counts;
