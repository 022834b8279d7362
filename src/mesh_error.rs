//! MeshSfcError: Unified error type for mesh-sfc public APIs
//!
//! The navigation operations themselves treat bad input as a contract
//! violation (checked with `debug_assert!`). This error type is returned by
//! the fallible `try_*` wrappers and by invariant validation, for callers
//! that handle untrusted levels, ids or deserialized elements.

use crate::element::class::ElementClass;
use thiserror::Error;

/// Unified error type for mesh-sfc operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshSfcError {
    /// Requested level is larger than the class supports.
    #[error("{class:?}: level {level} out of range (max {max})")]
    LevelOutOfRange {
        class: ElementClass,
        level: u8,
        max: u8,
    },
    /// Linear id is not below `NUM_CHILDREN^level`.
    #[error("{class:?}: linear id {id} out of range for level {level} ({count} elements)")]
    LinearIdOutOfRange {
        class: ElementClass,
        level: u8,
        id: u64,
        count: u64,
    },
    /// Child or sibling index is not below `NUM_CHILDREN`.
    #[error("{class:?}: child id {child_id} out of range (element has {num_children} children)")]
    InvalidChildId {
        class: ElementClass,
        child_id: usize,
        num_children: usize,
    },
    /// `parent()` requested on a level-0 element.
    #[error("{0:?}: the root element has no parent")]
    RootHasNoParent(ElementClass),
    /// A coordinate is not a multiple of the cell length at the element's level.
    #[error("{class:?}: coordinate {coord} is not aligned to level {level}")]
    MisalignedCoordinate {
        class: ElementClass,
        coord: i32,
        level: u8,
    },
    /// Triangle type outside `{0, 1}`.
    #[error("invalid triangle type {0}")]
    InvalidTriangleType(u8),
    /// Element lies outside its root element.
    #[error("{0:?}: element lies outside the root element")]
    OutsideRoot(ElementClass),
    /// The two factors of a product element report different levels.
    #[error("{class:?}: factor levels differ ({first} vs {second})")]
    FactorLevelMismatch {
        class: ElementClass,
        first: u8,
        second: u8,
    },
}
