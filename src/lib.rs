#![cfg_attr(docsrs, feature(doc_cfg))]
//! # mesh-sfc
//!
//! mesh-sfc encodes the elements of adaptively refined meshes as integers on a
//! space-filling curve (SFC) and navigates the refinement tree on that
//! encoding: parent, child, sibling, successor in SFC order, first and last
//! descendant, and vertex coordinates.
//!
//! ## Element classes
//! - [`Line`](element::line::Line): bisection, 2 children per level.
//! - [`Triangle`](element::triangle::Triangle): Bey refinement, 4 children per
//!   level, two orientation types tracked with static transition tables.
//! - [`Product`](element::product::Product): the cross product of any two
//!   classes, e.g. [`Prism`](element::product::Prism) = triangle ⊗ line with 8
//!   children per level. Quads and hexes fall out of the same construction.
//!
//! All elements implement [`SfcElement`](element::SfcElement). They are small
//! `Copy` values; every navigation operation returns a new element.
//!
//! ## Usage
//!
//! ```rust
//! use mesh_sfc::prelude::*;
//!
//! let prism = Prism::from_linear_id(1, 3);
//! let next = prism.successor(1);
//! assert_eq!(next.linear_id(1), 4);
//! assert_eq!(next.parent(), Prism::root());
//! ```
//!
//! ## Invariant checking
//! Preconditions are checked with `debug_assert!`. Enable the
//! `strict-invariants` or `check-invariants` feature to keep
//! [`DebugInvariants`] checks in release builds; the `try_*` methods of
//! [`SfcElement`](element::SfcElement) return [`MeshSfcError`](mesh_error::MeshSfcError)
//! instead of relying on them.

pub mod debug_invariants;
pub mod element;
pub mod mesh_error;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::element::class::ElementClass;
    pub use crate::element::iter::LevelIter;
    pub use crate::element::line::Line;
    pub use crate::element::product::{Hex, Prism, Product, Quad};
    pub use crate::element::triangle::Triangle;
    pub use crate::element::{Coord, SfcElement};
    pub use crate::mesh_error::MeshSfcError;
}
