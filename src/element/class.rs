//! Element class metadata for SFC elements.

use serde::{Deserialize, Serialize};

/// Element classes the encoder supports.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum ElementClass {
    /// 1D segment subdivided by bisection.
    Line,
    /// 2D simplex subdivided in Bey order.
    Triangle,
    /// 2D tensor-product cell (line ⊗ line).
    Quadrilateral,
    /// 3D wedge (triangle ⊗ line).
    Prism,
    /// 3D tensor-product cell (quad ⊗ line).
    Hexahedron,
}

impl Default for ElementClass {
    fn default() -> Self {
        ElementClass::Line
    }
}

impl ElementClass {
    /// Returns the topological dimension of the class.
    pub const fn dimension(self) -> usize {
        match self {
            ElementClass::Line => 1,
            ElementClass::Triangle | ElementClass::Quadrilateral => 2,
            ElementClass::Prism | ElementClass::Hexahedron => 3,
        }
    }

    /// Number of corner vertices.
    pub const fn num_vertices(self) -> usize {
        match self {
            ElementClass::Line => 2,
            ElementClass::Triangle => 3,
            ElementClass::Quadrilateral => 4,
            ElementClass::Prism => 6,
            ElementClass::Hexahedron => 8,
        }
    }

    /// Number of children produced by one refinement step.
    pub const fn num_children(self) -> usize {
        match self {
            ElementClass::Line => 2,
            ElementClass::Triangle | ElementClass::Quadrilateral => 4,
            ElementClass::Prism | ElementClass::Hexahedron => 8,
        }
    }

    /// Class of the cross product `self ⊗ other`, if it is one we name.
    pub const fn product(self, other: ElementClass) -> Option<ElementClass> {
        match (self, other) {
            (ElementClass::Line, ElementClass::Line) => Some(ElementClass::Quadrilateral),
            (ElementClass::Triangle, ElementClass::Line) => Some(ElementClass::Prism),
            (ElementClass::Quadrilateral, ElementClass::Line) => Some(ElementClass::Hexahedron),
            _ => None,
        }
    }
}
