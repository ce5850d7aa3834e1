//! Property-based tests for Maybe<T>.
//!
//! - **Round trip**: `Maybe::wrap(v).unwrap() == v`
//! - **Composition**: `wrap(v).transform(f).transform(g) == wrap(g(f(v)))`
//! - **In place**: an in-place chain ends with the same payload as the
//!   consuming chain
//! - **Bridge**: `unwrap_to_result` maps presence to OK and absence to an
//!   empty ERR

#![cfg(feature = "maybe")]

use maybe_result::Maybe;
use proptest::prelude::*;

fn increment(value: Option<i32>) -> Option<i32> {
    value.map(|n| n.wrapping_add(1))
}

fn double_or_zero(value: Option<i32>) -> Option<i32> {
    Some(value.map_or(0, |n| n.wrapping_mul(2)))
}

proptest! {
    #[test]
    fn prop_wrap_unwrap_round_trip(value in any::<Option<i32>>()) {
        prop_assert_eq!(Maybe::wrap(value).unwrap(), value);
    }

    #[test]
    fn prop_wrap_unwrap_round_trip_string(value in any::<Option<String>>()) {
        prop_assert_eq!(Maybe::wrap(value.clone()).unwrap(), value);
    }

    #[test]
    fn prop_transform_composition(value in any::<Option<i32>>()) {
        let chained = Maybe::wrap(value).transform(increment).transform(double_or_zero).unwrap();
        prop_assert_eq!(chained, double_or_zero(increment(value)));
    }

    #[test]
    fn prop_transform_if_present_matches_option_map(value in any::<Option<i32>>()) {
        let mapped = Maybe::wrap(value).transform_if_present(|n| n.wrapping_sub(7)).unwrap();
        prop_assert_eq!(mapped, value.map(|n| n.wrapping_sub(7)));
    }

    #[test]
    fn prop_in_place_matches_consuming_chain(value in any::<Option<i32>>()) {
        let consumed = Maybe::wrap(value).transform(increment).transform(double_or_zero);

        let mut in_place = Maybe::wrap(value);
        let receiver: *const Maybe<i32> = &in_place;
        let returned: *const Maybe<i32> = in_place
            .transform_in_place(increment)
            .transform_in_place(double_or_zero);

        prop_assert!(std::ptr::eq(receiver, returned));
        prop_assert_eq!(in_place, consumed);
    }

    #[test]
    fn prop_default_if_absent_never_overwrites(value in any::<i32>(), default in any::<Option<i32>>()) {
        let mut maybe = Maybe::some(value);
        maybe.default_if_absent_in_place(default);
        prop_assert_eq!(maybe.unwrap(), Some(value));
    }

    #[test]
    fn prop_unwrap_to_result_tracks_presence(value in any::<Option<i32>>()) {
        let result = Maybe::wrap(value).unwrap_to_result();
        match value {
            Some(inner) => {
                prop_assert!(result.is_ok());
                prop_assert_eq!(result.get_ok(), &inner);
            }
            None => {
                prop_assert!(result.is_err());
                prop_assert!(result.is_empty());
            }
        }
    }

    #[test]
    fn prop_predicate_bridge_keeps_payload(value in any::<Option<i32>>(), threshold in any::<i32>()) {
        let result = Maybe::wrap(value)
            .unwrap_to_result_with_predicate(|x| x.is_some_and(|x| *x > threshold));
        let accepted = value.is_some_and(|x| x > threshold);

        prop_assert_eq!(result.is_ok(), accepted);
        prop_assert_eq!(result.into_std(), if accepted { Ok(value) } else { Err(value) });
    }
}
