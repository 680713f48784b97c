//! Binary operators of the list-expression language.

/// Binary operators.
///
/// The three set operators combine address sets. `Sequence` and `Parallel`
/// combine evaluations and only differ in how the two sides are scheduled.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Set operators
    Union,
    Difference,
    Intersection,

    // Composition
    Sequence,
    Parallel,
}

impl BinaryOp {
    /// Text placed between the operands in the canonical rendering.
    pub const fn separator(self) -> &'static str {
        match self {
            Self::Union => ", ",
            Self::Difference => " ! ",
            Self::Intersection => " * ",
            Self::Sequence => "; ",
            Self::Parallel => " | ",
        }
    }

    /// Whether structural equality ignores operand order.
    ///
    /// Only union does. Intersection is order-insensitive as a set operation
    /// but its trees still compare left/right in order.
    pub const fn is_symmetric(self) -> bool {
        matches!(self, Self::Union)
    }
}
