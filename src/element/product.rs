//! Product elements `F ⊗ G` built from two factor encoders.
//!
//! A product element is the pair of its factors at a common level. One
//! refinement step refines both factors, giving `F::NUM_CHILDREN *
//! G::NUM_CHILDREN` children. Per level the SFC digit `d` splits as
//!
//! ```text
//!   f = d mod F::NUM_CHILDREN      child index of the first factor
//!   g = d div F::NUM_CHILDREN      child index of the second factor
//! ```
//!
//! so the first factor runs fastest. For the prism (`Triangle ⊗ Line`) the
//! digit is `f + 4g`: the four triangles of the lower half first, then the
//! four of the upper half.
//!
//! Successor is the interesting operation. The factors have different radix,
//! so the product digit only overflows when both factor digits are at their
//! last value; when just the first factor overflows, the second one advances
//! inside the same parent and the first restarts at its child 0.

use super::class::ElementClass;
use super::line::Line;
use super::triangle::Triangle;
use super::{Coord, SfcElement, grid_shift, max_level_for_radix};
use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::MeshSfcError;
use serde::{Deserialize, Serialize};

/// Cross product of two factor elements sharing one level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product<F, G> {
    first: F,
    second: G,
}

/// Triangular prism: triangle ⊗ line.
pub type Prism = Product<Triangle, Line>;
/// Quadrilateral: line ⊗ line, in Morton order.
pub type Quad = Product<Line, Line>;
/// Hexahedron: quad ⊗ line, in Morton order.
pub type Hex = Product<Quad, Line>;

const fn min_level(a: u8, b: u8) -> u8 {
    if a < b { a } else { b }
}

impl<F: SfcElement, G: SfcElement> Product<F, G> {
    /// Combines two factors of equal level.
    pub fn from_factors(first: F, second: G) -> Self {
        debug_assert_eq!(
            first.level(),
            second.level(),
            "product factors must share one level"
        );
        Self { first, second }
    }

    /// First factor.
    #[inline]
    pub fn first(&self) -> &F {
        &self.first
    }

    /// Second factor.
    #[inline]
    pub fn second(&self) -> &G {
        &self.second
    }

    /// Splits a product child index into the factors' child indices.
    #[inline]
    pub fn split_child_id(child_id: usize) -> (usize, usize) {
        (child_id % F::NUM_CHILDREN, child_id / F::NUM_CHILDREN)
    }
}

impl Prism {
    /// Triangle factor.
    #[inline]
    pub fn triangle(&self) -> &Triangle {
        &self.first
    }

    /// Line factor.
    #[inline]
    pub fn line(&self) -> &Line {
        &self.second
    }
}

impl<F: SfcElement, G: SfcElement> SfcElement for Product<F, G> {
    const CLASS: ElementClass = match F::CLASS.product(G::CLASS) {
        Some(class) => class,
        None => panic!("unsupported product of element classes"),
    };
    const MAX_LEVEL: u8 = min_level(
        min_level(F::MAX_LEVEL, G::MAX_LEVEL),
        max_level_for_radix(F::NUM_CHILDREN * G::NUM_CHILDREN),
    );
    const NUM_CHILDREN: usize = F::NUM_CHILDREN * G::NUM_CHILDREN;
    const NUM_VERTICES: usize = F::NUM_VERTICES * G::NUM_VERTICES;
    const DIM: usize = F::DIM + G::DIM;

    fn root() -> Self {
        Self {
            first: F::root(),
            second: G::root(),
        }
    }

    #[inline]
    fn level(&self) -> u8 {
        debug_assert_eq!(self.first.level(), self.second.level());
        self.first.level()
    }

    fn from_linear_id(level: u8, mut id: u64) -> Self {
        debug_assert!(level <= Self::MAX_LEVEL);
        debug_assert!(id < Self::count_at_level(level), "product id {id} too large for level {level}");
        let (nf, ng) = (F::NUM_CHILDREN as u64, G::NUM_CHILDREN as u64);
        let (mut first_id, mut second_id) = (0u64, 0u64);
        let (mut first_weight, mut second_weight) = (1u64, 1u64);
        // Finest level first.
        for _ in 0..level {
            let digit = id % Self::NUM_CHILDREN as u64;
            first_id += (digit % nf) * first_weight;
            second_id += (digit / nf) * second_weight;
            first_weight *= nf;
            second_weight *= ng;
            id /= Self::NUM_CHILDREN as u64;
        }
        Self {
            first: F::from_linear_id(level, first_id),
            second: G::from_linear_id(level, second_id),
        }
    }

    fn linear_id(&self, level: u8) -> u64 {
        debug_assert!(level <= Self::MAX_LEVEL);
        let (nf, ng) = (F::NUM_CHILDREN as u64, G::NUM_CHILDREN as u64);
        let mut first_id = self.first.linear_id(level);
        let mut second_id = self.second.linear_id(level);
        let mut id = 0u64;
        let mut weight = 1u64;
        for _ in 0..level {
            id += (first_id % nf + nf * (second_id % ng)) * weight;
            first_id /= nf;
            second_id /= ng;
            weight = weight.wrapping_mul(Self::NUM_CHILDREN as u64);
        }
        id
    }

    #[inline]
    fn child_id(&self) -> usize {
        self.first.child_id() + F::NUM_CHILDREN * self.second.child_id()
    }

    fn parent(&self) -> Self {
        debug_assert!(self.level() > 0, "root product element has no parent");
        Self {
            first: self.first.parent(),
            second: self.second.parent(),
        }
    }

    fn child(&self, child_id: usize) -> Self {
        debug_assert!(child_id < Self::NUM_CHILDREN);
        debug_assert!(self.level() < Self::MAX_LEVEL);
        let (f, g) = Self::split_child_id(child_id);
        Self {
            first: self.first.child(f),
            second: self.second.child(g),
        }
    }

    fn ancestor(&self, level: u8) -> Self {
        Self {
            first: self.first.ancestor(level),
            second: self.second.ancestor(level),
        }
    }

    fn successor(&self, level: u8) -> Self {
        debug_assert!(1 <= level && level <= self.level());
        let elem = self.ancestor(level);
        let f = elem.first.child_id();
        let g = elem.second.child_id();

        if f + 1 < F::NUM_CHILDREN {
            // Next first-factor child, second factor unchanged.
            return Self {
                first: elem.first.successor(level),
                second: elem.second,
            };
        }
        if g + 1 < G::NUM_CHILDREN {
            // First factor wraps to child 0, second factor advances.
            return Self {
                first: elem.first.parent().child(0),
                second: elem.second.successor(level),
            };
        }

        // Last of all siblings: the carry moves to the parent.
        debug_assert!(level > 1, "last product element of level {level} has no successor");
        if elem.first.parent().child_id() + 1 < F::NUM_CHILDREN {
            // The parent's successor only advances the first factor, so the
            // first factor carries on its own and the second restarts.
            return Self {
                first: elem.first.successor(level),
                second: elem.second.parent().child(0),
            };
        }
        elem.parent().successor(level - 1).child(0)
    }

    fn first_descendant(&self, level: u8) -> Self {
        debug_assert!(self.level() <= level && level <= Self::MAX_LEVEL);
        Self {
            first: self.first.first_descendant(level),
            second: self.second.first_descendant(level),
        }
    }

    fn last_descendant(&self, level: u8) -> Self {
        debug_assert!(self.level() <= level && level <= Self::MAX_LEVEL);
        Self {
            first: self.first.last_descendant(level),
            second: self.second.last_descendant(level),
        }
    }

    fn vertex_coords(&self, vertex: usize) -> [Coord; 3] {
        debug_assert!(vertex < Self::NUM_VERTICES);
        debug_assert!(Self::DIM <= 3);
        let first = self.first.vertex_coords(vertex % F::NUM_VERTICES);
        let second = self.second.vertex_coords(vertex / F::NUM_VERTICES);
        let first_shift = grid_shift(F::MAX_LEVEL, Self::MAX_LEVEL);
        let second_shift = grid_shift(G::MAX_LEVEL, Self::MAX_LEVEL);
        let mut coords = [0; 3];
        for axis in 0..F::DIM {
            coords[axis] = first[axis] >> first_shift;
        }
        for axis in 0..G::DIM {
            coords[F::DIM + axis] = second[axis] >> second_shift;
        }
        coords
    }
}

impl<F, G> DebugInvariants for Product<F, G>
where
    F: SfcElement + DebugInvariants,
    G: SfcElement + DebugInvariants,
{
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Product");
    }

    fn validate_invariants(&self) -> Result<(), MeshSfcError> {
        if self.first.level() != self.second.level() {
            return Err(MeshSfcError::FactorLevelMismatch {
                class: Self::CLASS,
                first: self.first.level(),
                second: self.second.level(),
            });
        }
        crate::debug_invariants::check_level(Self::CLASS, self.first.level(), Self::MAX_LEVEL)?;
        self.first.validate_invariants()?;
        self.second.validate_invariants()
    }
}
