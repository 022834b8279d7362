use crate::mesh_error::MeshSfcError;

/// Trait for validating element invariants.
pub trait DebugInvariants {
    /// Assert invariants in debug builds or when invariant checking is enabled.
    fn debug_assert_invariants(&self);
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), MeshSfcError>;
}

/// Helper macro to run a fallible check and panic on error when invariant
/// checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}

/// Checks that `coord` is a multiple of `len`, the cell length at `level`.
pub(crate) fn check_aligned(
    class: crate::element::class::ElementClass,
    coord: i32,
    len: i32,
    level: u8,
) -> Result<(), MeshSfcError> {
    if coord & (len - 1) != 0 {
        return Err(MeshSfcError::MisalignedCoordinate {
            class,
            coord,
            level,
        });
    }
    Ok(())
}

/// Checks `level <= max`.
pub(crate) fn check_level(
    class: crate::element::class::ElementClass,
    level: u8,
    max: u8,
) -> Result<(), MeshSfcError> {
    if level > max {
        return Err(MeshSfcError::LevelOutOfRange { class, level, max });
    }
    Ok(())
}
