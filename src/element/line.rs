//! Line elements refined by bisection.
//!
//! A line at `level` covers `[x, x + h)` with `h = 2^(MAX_LEVEL - level)`.
//! Its linear id is the bisection history read as a binary number, the
//! coarsest level in the most significant bit, so it is simply `x >> (MAX_LEVEL - level)`.

use super::class::ElementClass;
use super::{Coord, SfcElement, cell_len};
use crate::debug_invariants::{DebugInvariants, check_aligned, check_level};
use crate::mesh_error::MeshSfcError;
use serde::{Deserialize, Serialize};

/// Deepest line level.
pub const LINE_MAX_LEVEL: u8 = 30;
/// Length of the root line.
pub const LINE_ROOT_LEN: Coord = 1 << LINE_MAX_LEVEL;

/// A line segment in the refinement tree of the unit line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    /// Left end point on the `2^LINE_MAX_LEVEL` grid.
    x: Coord,
    level: u8,
}

impl Line {
    /// Builds a line from raw state, validated in debug builds.
    pub fn new(x: Coord, level: u8) -> Self {
        let line = Self { x, level };
        crate::debug_invariants!(line.validate_invariants(), "Line::new");
        line
    }

    /// Left end point.
    #[inline]
    pub fn x(&self) -> Coord {
        self.x
    }

    /// Cell length at the element's level.
    #[inline]
    pub fn length(&self) -> Coord {
        cell_len(LINE_MAX_LEVEL, self.level)
    }

    /// True if the segment lies in the root segment.
    pub fn is_inside_root(&self) -> bool {
        0 <= self.x && self.x < LINE_ROOT_LEN
    }

    /// Same-level neighbour across end point `face` (0 = left, 1 = right),
    /// with the neighbour's face number. May lie outside the root.
    pub fn face_neighbour(&self, face: usize) -> (Self, usize) {
        debug_assert!(face < 2, "line face {face} out of range");
        let x = if face == 0 {
            self.x - self.length()
        } else {
            self.x + self.length()
        };
        (Self { x, ..*self }, 1 - face)
    }
}

impl SfcElement for Line {
    const CLASS: ElementClass = ElementClass::Line;
    const MAX_LEVEL: u8 = LINE_MAX_LEVEL;
    const NUM_CHILDREN: usize = 2;
    const NUM_VERTICES: usize = 2;
    const DIM: usize = 1;

    fn root() -> Self {
        Self { x: 0, level: 0 }
    }

    #[inline]
    fn level(&self) -> u8 {
        self.level
    }

    fn from_linear_id(level: u8, id: u64) -> Self {
        debug_assert!(level <= LINE_MAX_LEVEL);
        debug_assert!(id < Self::count_at_level(level), "line id {id} too large for level {level}");
        Self {
            x: (id << (LINE_MAX_LEVEL - level)) as Coord,
            level,
        }
    }

    fn linear_id(&self, level: u8) -> u64 {
        debug_assert!(level <= LINE_MAX_LEVEL);
        (self.x >> (LINE_MAX_LEVEL - level)) as u64
    }

    #[inline]
    fn child_id(&self) -> usize {
        debug_assert!(self.level > 0);
        usize::from(self.x & self.length() != 0)
    }

    fn parent(&self) -> Self {
        debug_assert!(self.level > 0, "root line has no parent");
        Self {
            x: self.x & !self.length(),
            level: self.level - 1,
        }
    }

    fn child(&self, child_id: usize) -> Self {
        debug_assert!(child_id < 2);
        debug_assert!(self.level < LINE_MAX_LEVEL);
        let level = self.level + 1;
        Self {
            x: self.x + child_id as Coord * cell_len(LINE_MAX_LEVEL, level),
            level,
        }
    }

    fn ancestor(&self, level: u8) -> Self {
        debug_assert!(level <= self.level);
        Self {
            x: self.x & !(cell_len(LINE_MAX_LEVEL, level) - 1),
            level,
        }
    }

    fn successor(&self, level: u8) -> Self {
        debug_assert!(1 <= level && level <= self.level);
        let elem = self.ancestor(level);
        if elem.child_id() == 0 {
            return elem.parent().child(1);
        }
        debug_assert!(level > 1, "last line of level {level} has no successor");
        elem.parent().successor(level - 1).child(0)
    }

    fn first_descendant(&self, level: u8) -> Self {
        debug_assert!(self.level <= level && level <= LINE_MAX_LEVEL);
        Self { x: self.x, level }
    }

    fn last_descendant(&self, level: u8) -> Self {
        debug_assert!(self.level <= level && level <= LINE_MAX_LEVEL);
        Self {
            x: self.x + self.length() - cell_len(LINE_MAX_LEVEL, level),
            level,
        }
    }

    fn vertex_coords(&self, vertex: usize) -> [Coord; 3] {
        debug_assert!(vertex < 2);
        [self.x + vertex as Coord * self.length(), 0, 0]
    }
}

impl DebugInvariants for Line {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Line");
    }

    fn validate_invariants(&self) -> Result<(), MeshSfcError> {
        check_level(ElementClass::Line, self.level, LINE_MAX_LEVEL)?;
        check_aligned(ElementClass::Line, self.x, self.length(), self.level)?;
        if !self.is_inside_root() {
            return Err(MeshSfcError::OutsideRoot(ElementClass::Line));
        }
        Ok(())
    }
}
