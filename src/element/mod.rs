//! SFC elements: the shared navigation interface and its implementations.
//!
//! Every element is a small `Copy` value. Navigation never mutates its
//! input; each operation returns a fresh element.
//!
//! # Expected invariants
//! - `0 <= level() <= MAX_LEVEL`.
//! - Coordinates are multiples of the cell length `2^(MAX_LEVEL - level)`.
//! - For a fixed level, `linear_id` and `from_linear_id` are inverse
//!   bijections onto `[0, NUM_CHILDREN^level)`.
//!
//! Violating a precondition (level bounds, `parent()` on the root, id
//! range) is a programming error and is caught by `debug_assert!`. The
//! `try_*` methods check the same conditions and return [`MeshSfcError`].

pub mod class;
pub mod iter;
pub mod line;
pub mod product;
pub mod triangle;

use crate::mesh_error::MeshSfcError;
use class::ElementClass;
use std::cmp::Ordering;
use std::fmt::Debug;

/// Integer coordinate on an element's ambient grid.
pub type Coord = i32;

/// Cell length `2^(max_level - level)` on a grid with `2^max_level` cells per axis.
#[inline]
pub(crate) const fn cell_len(max_level: u8, level: u8) -> Coord {
    1 << (max_level - level)
}

/// Right shift taking coordinates from a `2^factor_max` grid to a coarser
/// `2^product_max` grid.
#[inline]
pub(crate) const fn grid_shift(factor_max: u8, product_max: u8) -> u8 {
    factor_max - product_max
}

/// `radix^level`, the number of elements at `level`.
#[inline]
pub(crate) const fn count_at_level(radix: usize, level: u8) -> u64 {
    (radix as u64).pow(level as u32)
}

/// Largest level whose element count `radix^level` still fits in a `u64`.
pub(crate) const fn max_level_for_radix(radix: usize) -> u8 {
    let mut level = 0u8;
    let mut count = 1u64;
    loop {
        match count.checked_mul(radix as u64) {
            Some(next) => {
                count = next;
                level += 1;
            }
            None => return level,
        }
    }
}

/// Navigation interface shared by all element classes.
pub trait SfcElement: Copy + Eq + Debug + Send + Sync + 'static {
    /// Class tag.
    const CLASS: ElementClass;
    /// Deepest supported refinement level.
    const MAX_LEVEL: u8;
    /// Children per refinement step (the SFC radix).
    const NUM_CHILDREN: usize;
    /// Corner vertices.
    const NUM_VERTICES: usize;
    /// Number of coordinate axes used by [`vertex_coords`](Self::vertex_coords).
    const DIM: usize;

    /// The level-0 element.
    fn root() -> Self;

    /// Refinement level.
    fn level(&self) -> u8;

    /// Decode the element with linear id `id` at `level`.
    fn from_linear_id(level: u8, id: u64) -> Self;

    /// SFC rank of the ancestor (or first descendant) at `level`.
    fn linear_id(&self, level: u8) -> u64;

    /// Position among the siblings, in `[0, NUM_CHILDREN)`. Requires `level() > 0`.
    fn child_id(&self) -> usize;

    /// Requires `level() > 0`.
    fn parent(&self) -> Self;

    /// Child number `child_id`. Requires `level() < MAX_LEVEL`.
    fn child(&self, child_id: usize) -> Self;

    /// Ancestor at `level <= self.level()`; the element itself when equal.
    fn ancestor(&self, level: u8) -> Self;

    /// Next element in SFC order at `level`, computed for the ancestor at
    /// `level`. Requires `1 <= level <= self.level()` and that the ancestor
    /// is not the last element of its level.
    fn successor(&self, level: u8) -> Self;

    /// Descendant at `level` reached by always taking the first child.
    fn first_descendant(&self, level: u8) -> Self;

    /// Descendant at `level` reached by always taking the last child.
    fn last_descendant(&self, level: u8) -> Self;

    /// Coordinates of corner `vertex`; axes beyond [`DIM`](Self::DIM) are zero.
    fn vertex_coords(&self, vertex: usize) -> [Coord; 3];

    /// Number of elements at `level`.
    #[inline]
    fn count_at_level(level: u8) -> u64 {
        count_at_level(Self::NUM_CHILDREN, level)
    }

    /// Sibling number `sibling_id`, always computed through the parent.
    #[inline]
    fn sibling(&self, sibling_id: usize) -> Self {
        self.parent().child(sibling_id)
    }

    /// All children in SFC order.
    fn children(&self) -> impl Iterator<Item = Self> {
        let this = *self;
        (0..Self::NUM_CHILDREN).map(move |c| this.child(c))
    }

    /// All corner coordinates.
    fn all_vertex_coords(&self) -> Vec<[Coord; 3]> {
        (0..Self::NUM_VERTICES)
            .map(|v| self.vertex_coords(v))
            .collect()
    }

    /// True if `self` and `other` are distinct children of the same parent.
    fn is_sibling(&self, other: &Self) -> bool {
        self.level() > 0
            && self.level() == other.level()
            && self != other
            && self.parent() == other.parent()
    }

    /// True if `self` is the parent of `child`.
    fn is_parent(&self, child: &Self) -> bool {
        child.level() == self.level() + 1 && child.parent() == *self
    }

    /// True if `self` is unequal to and an ancestor of `other`.
    fn is_ancestor(&self, other: &Self) -> bool {
        self.level() < other.level() && other.ancestor(self.level()) == *self
    }

    /// True if `family` holds the children of one parent, in order.
    fn is_family(family: &[Self]) -> bool {
        if family.len() != Self::NUM_CHILDREN || family[0].level() == 0 {
            return false;
        }
        let parent = family[0].parent();
        family
            .iter()
            .enumerate()
            .all(|(c, e)| *e == parent.child(c))
    }

    /// Finest element that is an ancestor of (or equal to) both inputs.
    fn nearest_common_ancestor(&self, other: &Self) -> Self {
        let mut level = self.level().min(other.level());
        let mut a = self.ancestor(level);
        let mut b = other.ancestor(level);
        while a != b {
            level -= 1;
            a = a.ancestor(level);
            b = b.ancestor(level);
        }
        a
    }

    /// Total SFC order across levels: compares positions on the finer of the
    /// two levels, an ancestor sorting before its descendants.
    fn sfc_cmp(&self, other: &Self) -> Ordering {
        let level = self.level().max(other.level());
        self.linear_id(level)
            .cmp(&other.linear_id(level))
            .then(self.level().cmp(&other.level()))
    }

    /// Checked [`from_linear_id`](Self::from_linear_id).
    fn try_from_linear_id(level: u8, id: u64) -> Result<Self, MeshSfcError> {
        crate::debug_invariants::check_level(Self::CLASS, level, Self::MAX_LEVEL).inspect_err(
            |e| log::debug!("rejected from_linear_id({level}, {id}): {e}"),
        )?;
        let count = Self::count_at_level(level);
        if id >= count {
            let err = MeshSfcError::LinearIdOutOfRange {
                class: Self::CLASS,
                level,
                id,
                count,
            };
            log::debug!("rejected from_linear_id({level}, {id}): {err}");
            return Err(err);
        }
        Ok(Self::from_linear_id(level, id))
    }

    /// Checked [`parent`](Self::parent).
    fn try_parent(&self) -> Result<Self, MeshSfcError> {
        if self.level() == 0 {
            return Err(MeshSfcError::RootHasNoParent(Self::CLASS));
        }
        Ok(self.parent())
    }

    /// Checked [`child`](Self::child).
    fn try_child(&self, child_id: usize) -> Result<Self, MeshSfcError> {
        if child_id >= Self::NUM_CHILDREN {
            return Err(MeshSfcError::InvalidChildId {
                class: Self::CLASS,
                child_id,
                num_children: Self::NUM_CHILDREN,
            });
        }
        if self.level() >= Self::MAX_LEVEL {
            return Err(MeshSfcError::LevelOutOfRange {
                class: Self::CLASS,
                level: self.level() + 1,
                max: Self::MAX_LEVEL,
            });
        }
        Ok(self.child(child_id))
    }
}
