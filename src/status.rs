//! Per-track loading/error status queries.
//!
//! Both queries are pure reads over a [`TrackRegistry`] snapshot and are
//! total: malformed or unknown identifiers report "not loading" / "no
//! error" rather than failing.
//!
//! Identifier handling is asymmetric, and deliberately so:
//! [`is_track_loading`] normalizes its textual id to the registry's numeric
//! [`TrackId`](crate::model::TrackId) before the membership check, while
//! [`track_error`] looks its key up exactly as given. See
//! [`TrackKey`] for the representation contract callers must follow.

use crate::model::{TrackId, TrackKey, TrackRegistry};

/// Whether a fetch for this track is currently in flight.
///
/// The textual id is coerced to the registry's numeric [`TrackId`] with
/// lenient parse semantics; text that is not a number matches nothing and
/// yields `false`. Absence of a valid id is not an application error.
pub fn is_track_loading(registry: &TrackRegistry, track_id: &str) -> bool {
    match TrackId::coerce(track_id) {
        Some(id) => registry.loading.contains(&id),
        None => false,
    }
}

/// The recorded load failure for this track, if any.
///
/// The key is used **as given**: a numeric key only finds failures recorded
/// numerically, a textual key only textual ones. Callers are responsible
/// for supplying the identifier in the representation the registry was
/// populated with. Most tracks have no entry, and `None` is the normal
/// outcome, not a failure of the query.
pub fn track_error<'a>(registry: &'a TrackRegistry, key: impl Into<TrackKey>) -> Option<&'a str> {
    registry.error.get(&key.into()).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::mock_registry;

    #[test]
    fn test_is_track_loading_member() {
        // Registry fixture has loading = {5}, error = {7: "network error"}.
        let registry = mock_registry();
        assert!(is_track_loading(&registry, "5"));
        assert!(!is_track_loading(&registry, "7"));
        assert!(!is_track_loading(&registry, "6"));
    }

    #[test]
    fn test_is_track_loading_coerces_text() {
        let registry = mock_registry();
        assert!(is_track_loading(&registry, " 5 "));
    }

    #[test]
    fn test_is_track_loading_unparseable_id_is_false() {
        let registry = mock_registry();
        assert!(!is_track_loading(&registry, "abc"));
        assert!(!is_track_loading(&registry, ""));
    }

    #[test]
    fn test_track_error_returns_recorded_value() {
        let registry = mock_registry();
        assert_eq!(track_error(&registry, 7), Some("network error"));
        assert_eq!(track_error(&registry, 5), None);
    }

    #[test]
    fn test_track_error_does_not_normalize_keys() {
        // The failure for track 7 was recorded under the numeric key, so
        // the textual form finds nothing. This asymmetry with
        // is_track_loading is part of the contract.
        let registry = mock_registry();
        assert_eq!(track_error(&registry, "7"), None);

        let mut registry = mock_registry();
        registry
            .error
            .insert(TrackKey::from("9"), "decode error".to_string());
        assert_eq!(track_error(&registry, "9"), Some("decode error"));
        assert_eq!(track_error(&registry, 9), None);
    }
}

/// Property-based tests using proptest
#[cfg(test)]
mod proptests {
    use super::*;
    use crate::model::TrackId;
    use proptest::prelude::*;
    use smallvec::SmallVec;

    proptest! {
        /// Every id in the loading set is reported loading via its text form.
        #[test]
        fn loading_members_report_true(ids in prop::collection::hash_set(-1000i64..1000, 0..12), probe in -1000i64..1000) {
            let registry = TrackRegistry {
                loading: ids.iter().copied().map(TrackId).collect::<SmallVec<_>>(),
                error: Default::default(),
            };
            for id in &ids {
                prop_assert!(is_track_loading(&registry, &id.to_string()));
            }
            prop_assert_eq!(is_track_loading(&registry, &probe.to_string()), ids.contains(&probe));
        }

        /// Non-numeric text never matches, whatever the registry holds.
        #[test]
        fn non_numeric_text_never_matches(text in "[a-zA-Z ]{0,10}", ids in prop::collection::vec(any::<i64>(), 0..8)) {
            let registry = TrackRegistry {
                loading: ids.into_iter().map(TrackId).collect::<SmallVec<_>>(),
                error: Default::default(),
            };
            prop_assert!(!is_track_loading(&registry, &text));
        }
    }
}
