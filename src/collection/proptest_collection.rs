//! Property-based tests for collection validation and list edges.

use proptest::prelude::*;
use serde_json::json;

use super::Collection;
use crate::core::Item;

fn item_strategy() -> impl Strategy<Value = Item> {
    prop_oneof![
        any::<i64>().prop_map(Item::Integer),
        any::<bool>().prop_map(Item::Boolean),
        "[a-z/]{0,12}".prop_map(Item::Text),
        Just(Item::Null),
    ]
}

fn collection_strategy() -> impl Strategy<Value = Collection> {
    (
        prop::option::of("/[a-z]{1,8}"),
        prop::collection::vec(item_strategy(), 0..8),
        prop::option::of(0i64..1_000_000),
    )
        .prop_map(|(id, items, expires)| {
            Collection::from_parts(id, Some(items), expires).unwrap_or_default()
        })
}

proptest! {
    /// Property: any non-negative value is stored verbatim.
    #[test]
    fn prop_non_negative_metadata_round_trips(n in 0i64..=i64::MAX) {
        let mut c = Collection::new();
        c.set_expires(n).unwrap().set_total(n).unwrap().set_limit(n).unwrap();
        prop_assert_eq!(c.expires(), Some(n as u64));
        prop_assert_eq!(c.total(), Some(n as u64));
        prop_assert_eq!(c.limit(), Some(n as u64));

        c.unset_expires();
        prop_assert_eq!(c.expires(), None);
    }

    /// Property: negative values are rejected and the previous value survives.
    #[test]
    fn prop_negative_metadata_rejected(n in i64::MIN..0, prev in 0i64..1000) {
        let mut c = Collection::new();
        c.set_expires(prev).unwrap().set_total(prev).unwrap().set_limit(prev).unwrap();

        prop_assert!(c.set_expires(n).is_err());
        prop_assert!(c.set_total(n).is_err());
        prop_assert!(c.set_limit(n).is_err());

        prop_assert_eq!(c.expires(), Some(prev as u64));
        prop_assert_eq!(c.total(), Some(prev as u64));
        prop_assert_eq!(c.limit(), Some(prev as u64));
    }

    /// Property: push then pop is the identity on the items.
    #[test]
    fn prop_push_pop_restores(c in collection_strategy(), x in item_strategy()) {
        let mut c = c;
        let before = c.items().to_vec();
        c.push(x.clone());
        prop_assert_eq!(c.pop(), Some(x));
        prop_assert_eq!(c.items(), before.as_slice());
    }

    /// Property: unshift then shift is the identity on the items.
    #[test]
    fn prop_unshift_shift_restores(c in collection_strategy(), x in item_strategy()) {
        let mut c = c;
        let before = c.items().to_vec();
        c.unshift(x.clone());
        prop_assert_eq!(c.shift(), Some(x));
        prop_assert_eq!(c.items(), before.as_slice());
    }

    /// Property: non-array input never replaces the items.
    #[test]
    fn prop_non_array_items_rejected(c in collection_strategy(), n in any::<i64>(), s in ".{0,8}") {
        let mut c = c;
        let before = c.items().to_vec();
        for bad in [json!(n), json!(s), json!({"k": n}), json!(null), json!(true)] {
            prop_assert!(c.set_items_value(&bad).is_err());
        }
        prop_assert_eq!(c.items(), before.as_slice());
    }

    /// Property: set_item always leaves the item readable at its position.
    #[test]
    fn prop_set_item_addressable(c in collection_strategy(), pos in 0i64..64, x in any::<i64>()) {
        let mut c = c;
        let before_len = c.len();
        c.set_item(pos, x).unwrap();
        prop_assert_eq!(c.get_item(pos as usize), Some(&Item::Integer(x)));
        prop_assert_eq!(c.len(), before_len.max(pos as usize + 1));
    }
}
