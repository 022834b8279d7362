//! Triangle elements refined in Bey order.
//!
//! A triangle is stored as the anchor `(x, y)` of the square cell that
//! contains it, plus one of two orientation types:
//!
//! ```text
//!   type 0: (x,y) (x+h,y)   (x+h,y+h)      below the cell diagonal
//!   type 1: (x,y) (x,y+h)   (x+h,y+h)      above the cell diagonal
//! ```
//!
//! Bey refinement cuts a triangle at its edge midpoints. Child `i < 3` keeps
//! parent vertex `i` and the parent's type; child 3 is the middle triangle
//! and has the opposite type. Which of the two triangles in a sub-square a
//! child is therefore depends on the parent's type, so the type of every
//! element is determined by its ancestry and the tables below.
//!
//! The linear id stores one Bey child index per level as a base-4 digit, the
//! coarsest level most significant.

use super::class::ElementClass;
use super::{Coord, SfcElement, cell_len};
use crate::debug_invariants::{DebugInvariants, check_aligned, check_level};
use crate::mesh_error::MeshSfcError;
use serde::{Deserialize, Serialize};
use static_assertions::const_assert;

/// Deepest triangle level.
pub const TRI_MAX_LEVEL: u8 = 29;
/// Side length of the root triangle's bounding square.
pub const TRI_ROOT_LEN: Coord = 1 << TRI_MAX_LEVEL;

const_assert!(TRI_MAX_LEVEL <= super::max_level_for_radix(4));

/// Type of Bey child `bey` of a parent of type `t`: `TYPE_OF_CHILD[t][bey]`.
pub const TYPE_OF_CHILD: [[u8; 4]; 2] = [[0, 0, 0, 1], [1, 1, 1, 0]];

/// Parent type from the child's cube id and type: `[cube_id][type]`.
pub const CUBE_ID_TYPE_TO_PARENT_TYPE: [[u8; 2]; 4] = [[0, 1], [0, 0], [1, 1], [0, 1]];

/// Bey child index from the child's type and cube id: `[type][cube_id]`.
pub const TYPE_CUBE_ID_TO_BEY_ID: [[u8; 4]; 2] = [[0, 1, 3, 2], [0, 3, 1, 2]];

/// Parent vertex towards which Bey child `bey` is anchored.
pub const BEY_ID_TO_VERTEX: [usize; 4] = [0, 1, 2, 1];

/// A triangle in the Bey refinement tree of the root triangle
/// `(0,0) (L,0) (L,L)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triangle {
    x: Coord,
    y: Coord,
    tri_type: u8,
    level: u8,
}

impl Triangle {
    /// Builds a triangle from raw state, validated in debug builds.
    pub fn new(x: Coord, y: Coord, tri_type: u8, level: u8) -> Self {
        let tri = Self {
            x,
            y,
            tri_type,
            level,
        };
        crate::debug_invariants!(tri.validate_invariants(), "Triangle::new");
        tri
    }

    /// Anchor of the containing square cell.
    #[inline]
    pub fn anchor(&self) -> [Coord; 2] {
        [self.x, self.y]
    }

    /// Orientation type, 0 or 1.
    #[inline]
    pub fn tri_type(&self) -> u8 {
        self.tri_type
    }

    /// Cell length at the element's level.
    #[inline]
    pub fn length(&self) -> Coord {
        cell_len(TRI_MAX_LEVEL, self.level)
    }

    /// Position of the anchor inside the parent's square: bit 0 for x, bit 1 for y.
    #[inline]
    fn cube_id(&self) -> usize {
        let h = self.length();
        usize::from(self.x & h != 0) | (usize::from(self.y & h != 0) << 1)
    }

    /// The two planar coordinates of `vertex`.
    pub fn compute_coords(&self, vertex: usize) -> [Coord; 2] {
        debug_assert!(vertex < 3, "triangle vertex {vertex} out of range");
        let h = self.length();
        let mut coords = [self.x, self.y];
        match vertex {
            0 => {}
            1 => coords[usize::from(self.tri_type)] += h,
            _ => {
                coords[0] += h;
                coords[1] += h;
            }
        }
        coords
    }

    /// True if the triangle lies in the root triangle.
    pub fn is_inside_root(&self) -> bool {
        let in_range = |c: Coord| (0..TRI_ROOT_LEN).contains(&c);
        in_range(self.x)
            && in_range(self.y)
            && match self.tri_type {
                0 => self.x >= self.y,
                _ => self.x > self.y,
            }
    }

    /// Same-level neighbour across `face` (the edge opposite vertex `face`),
    /// with the neighbour's number for the shared edge. The neighbour may lie
    /// outside the root triangle; check with [`is_inside_root`](Self::is_inside_root).
    pub fn face_neighbour(&self, face: usize) -> (Self, usize) {
        debug_assert!(face < 3, "triangle face {face} out of range");
        let h = self.length();
        let mut n = Self {
            tri_type: 1 - self.tri_type,
            ..*self
        };
        match (self.tri_type, face) {
            (_, 1) => {}
            (0, 0) => n.x += h,
            (0, _) => n.y -= h,
            (_, 0) => n.y += h,
            (_, _) => n.x -= h,
        }
        (n, 2 - face)
    }
}

impl SfcElement for Triangle {
    const CLASS: ElementClass = ElementClass::Triangle;
    const MAX_LEVEL: u8 = TRI_MAX_LEVEL;
    const NUM_CHILDREN: usize = 4;
    const NUM_VERTICES: usize = 3;
    const DIM: usize = 2;

    fn root() -> Self {
        Self::default()
    }

    #[inline]
    fn level(&self) -> u8 {
        self.level
    }

    fn from_linear_id(level: u8, id: u64) -> Self {
        debug_assert!(level <= TRI_MAX_LEVEL);
        debug_assert!(id < Self::count_at_level(level), "triangle id {id} too large for level {level}");
        (0..level).rev().fold(Self::root(), |tri, i| {
            tri.child(((id >> (2 * i)) & 3) as usize)
        })
    }

    fn linear_id(&self, level: u8) -> u64 {
        debug_assert!(level <= TRI_MAX_LEVEL);
        if level > self.level {
            // First descendants append digit 0.
            return self.linear_id(self.level) << (2 * (level - self.level));
        }
        let mut tri = self.ancestor(level);
        let mut id = 0u64;
        let mut shift = 0u32;
        while tri.level > 0 {
            id |= (tri.child_id() as u64) << shift;
            shift += 2;
            tri = tri.parent();
        }
        id
    }

    #[inline]
    fn child_id(&self) -> usize {
        debug_assert!(self.level > 0);
        usize::from(TYPE_CUBE_ID_TO_BEY_ID[usize::from(self.tri_type)][self.cube_id()])
    }

    fn parent(&self) -> Self {
        debug_assert!(self.level > 0, "root triangle has no parent");
        let h = self.length();
        Self {
            x: self.x & !h,
            y: self.y & !h,
            tri_type: CUBE_ID_TYPE_TO_PARENT_TYPE[self.cube_id()][usize::from(self.tri_type)],
            level: self.level - 1,
        }
    }

    fn child(&self, child_id: usize) -> Self {
        debug_assert!(child_id < 4);
        debug_assert!(self.level < TRI_MAX_LEVEL);
        let [vx, vy] = self.compute_coords(BEY_ID_TO_VERTEX[child_id]);
        Self {
            x: self.x + ((vx - self.x) >> 1),
            y: self.y + ((vy - self.y) >> 1),
            tri_type: TYPE_OF_CHILD[usize::from(self.tri_type)][child_id],
            level: self.level + 1,
        }
    }

    fn ancestor(&self, level: u8) -> Self {
        debug_assert!(level <= self.level);
        let mut tri = *self;
        while tri.level > level {
            tri = tri.parent();
        }
        tri
    }

    fn successor(&self, level: u8) -> Self {
        debug_assert!(1 <= level && level <= self.level);
        let tri = self.ancestor(level);
        let child_id = tri.child_id();
        if child_id < 3 {
            return tri.sibling(child_id + 1);
        }
        debug_assert!(level > 1, "last triangle of level {level} has no successor");
        tri.parent().successor(level - 1).child(0)
    }

    fn first_descendant(&self, level: u8) -> Self {
        debug_assert!(self.level <= level && level <= TRI_MAX_LEVEL);
        // Child 0 keeps anchor and type.
        Self { level, ..*self }
    }

    fn last_descendant(&self, level: u8) -> Self {
        debug_assert!(self.level <= level && level <= TRI_MAX_LEVEL);
        let mut tri = *self;
        while tri.level < level {
            tri = tri.child(3);
        }
        tri
    }

    fn vertex_coords(&self, vertex: usize) -> [Coord; 3] {
        let [x, y] = self.compute_coords(vertex);
        [x, y, 0]
    }
}

impl DebugInvariants for Triangle {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Triangle");
    }

    fn validate_invariants(&self) -> Result<(), MeshSfcError> {
        check_level(ElementClass::Triangle, self.level, TRI_MAX_LEVEL)?;
        if self.tri_type > 1 {
            return Err(MeshSfcError::InvalidTriangleType(self.tri_type));
        }
        let h = self.length();
        check_aligned(ElementClass::Triangle, self.x, h, self.level)?;
        check_aligned(ElementClass::Triangle, self.y, h, self.level)?;
        if !self.is_inside_root() {
            return Err(MeshSfcError::OutsideRoot(ElementClass::Triangle));
        }
        Ok(())
    }
}
