/// Result container holding exactly one of two values.
///
/// `Either` is the value every composed database operation ultimately
/// resolves to: `Left` carries the successful outcome, `Right` the failure.
/// The active variant is fixed at construction and never changes; callers
/// consume it either through [`Either::handle`] with one handler per
/// variant, or through the accessors.
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Either<L, R> {
    /// Successful outcome.
    Left(L),
    /// Failed outcome.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if the `Left` variant is active.
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns `true` if the `Right` variant is active.
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Returns the left value, or `None` if `Right` is active.
    pub fn left(&self) -> Option<&L> {
        match self {
            Either::Left(value) => Some(value),
            Either::Right(_) => None,
        }
    }

    /// Returns the right value, or `None` if `Left` is active.
    pub fn right(&self) -> Option<&R> {
        match self {
            Either::Left(_) => None,
            Either::Right(value) => Some(value),
        }
    }

    /// Invokes exactly one of the two handlers with the held value.
    pub fn handle<F, G>(&self, on_left: F, on_right: G)
    where
        F: FnOnce(&L),
        G: FnOnce(&R),
    {
        match self {
            Either::Left(value) => on_left(value),
            Either::Right(value) => on_right(value),
        }
    }

    /// Converts into a standard `Result`, treating `Left` as success.
    pub fn into_result(self) -> std::result::Result<L, R> {
        match self {
            Either::Left(value) => Ok(value),
            Either::Right(value) => Err(value),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Either::Left(value) => write!(f, "Left({})", value),
            Either::Right(value) => write!(f, "Right({})", value),
        }
    }
}
