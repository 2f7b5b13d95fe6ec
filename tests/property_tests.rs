//! Property-based tests for the Either result container
//!
//! These tests verify the container's laws over arbitrary values:
//! - exactly one variant is active, and the predicates agree with it
//! - accessors return the held value for the active variant only
//! - `handle` invokes exactly one handler, with the held value

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use sqlfn::Either;
    use std::cell::Cell;

    proptest! {
        #[test]
        fn left_is_left_and_not_right(value in any::<i64>()) {
            let either: Either<i64, String> = Either::Left(value);
            prop_assert!(either.is_left());
            prop_assert!(!either.is_right());
            prop_assert_eq!(either.left(), Some(&value));
            prop_assert_eq!(either.right(), None);
        }

        #[test]
        fn right_is_right_and_not_left(message in ".*") {
            let either: Either<i64, String> = Either::Right(message.clone());
            prop_assert!(either.is_right());
            prop_assert!(!either.is_left());
            prop_assert_eq!(either.left(), None);
            prop_assert_eq!(either.right(), Some(&message));
        }

        #[test]
        fn handle_invokes_exactly_one_handler(value in any::<i64>(), use_left in any::<bool>()) {
            let either: Either<i64, i64> = if use_left {
                Either::Left(value)
            } else {
                Either::Right(value)
            };

            let left_calls = Cell::new(0u32);
            let right_calls = Cell::new(0u32);
            either.handle(
                |v| {
                    assert_eq!(*v, value);
                    left_calls.set(left_calls.get() + 1);
                },
                |v| {
                    assert_eq!(*v, value);
                    right_calls.set(right_calls.get() + 1);
                },
            );

            prop_assert_eq!(left_calls.get() + right_calls.get(), 1);
            prop_assert_eq!(left_calls.get() == 1, use_left);
        }

        #[test]
        fn equality_follows_held_value(a in any::<i64>(), b in any::<i64>()) {
            let left_a: Either<i64, String> = Either::Left(a);
            let left_b: Either<i64, String> = Either::Left(b);
            prop_assert_eq!(left_a == left_b, a == b);
        }

        #[test]
        fn into_result_preserves_the_value(value in any::<i64>()) {
            let left: Either<i64, String> = Either::Left(value);
            prop_assert_eq!(left.into_result(), Ok(value));

            let right: Either<i64, i64> = Either::Right(value);
            prop_assert_eq!(right.into_result(), Err(value));
        }
    }
}
