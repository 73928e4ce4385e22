use resource_collection::{
    Collection, MAX_ITEMS,
    core::{Item, ModelError, Result, Symlink},
};
use serde_json::json;

#[test]
fn test_users_page_scenario() -> Result<()> {
    let a = Symlink::new("/users/123");
    let b = Symlink::new("/users/789");
    let c = Symlink::new("/users/456");

    let mut users = Collection::with_id("/users");
    users
        .set_items([a, b, c])
        .set_total(500)?
        .set_limit(10)?;

    let payload = users.to_value()?;
    assert_eq!(
        payload,
        json!({
            "$type": "collection",
            "$id": "/users",
            "items": [
                {"$type": "symlink", "$id": "/users/123"},
                {"$type": "symlink", "$id": "/users/789"},
                {"$type": "symlink", "$id": "/users/456"}
            ],
            "total": 500,
            "limit": 10
        })
    );
    assert!(payload.get("$expires").is_none());
    Ok(())
}

#[test]
fn test_set_item_on_empty_collection() -> Result<()> {
    let mut c = Collection::new();
    c.set_item(2, "x")?;

    assert_eq!(c.len(), 3);
    assert_eq!(c.get_item(2), Some(&Item::from("x")));
    assert!(c.items()[0].is_empty_slot());
    assert!(c.items()[1].is_empty_slot());
    assert_eq!(c.to_value()?["items"], json!([null, null, "x"]));
    Ok(())
}

#[test]
fn test_wrong_id_type_never_sets() {
    let mut c = Collection::new();
    let err = c.set_id_value(&json!(123)).unwrap_err();
    assert!(matches!(err, ModelError::InvalidArgument { field: "id", .. }));
    assert_eq!(c.id(), None);
}

#[test]
fn test_expires_round_trip_and_unset() -> Result<()> {
    let mut c = Collection::new();
    c.set_expires(60000)?;
    assert_eq!(c.expires(), Some(60000));

    c.unset_expires();
    assert_eq!(c.expires(), None);

    c.set_expires_value(&json!(null))?;
    assert_eq!(c.expires(), None);
    Ok(())
}

#[test]
fn test_negative_values_leave_state_unchanged() -> Result<()> {
    let mut c = Collection::with_id("/orders");
    c.set_expires(1)?.set_total(2)?.set_limit(3)?;
    let before = c.clone();

    assert!(c.set_expires(-1).is_err());
    assert!(c.set_total(-100).is_err());
    assert!(c.set_limit(-7).is_err());
    assert!(c.set_item(-1, "x").is_err());

    assert_eq!(c, before);
    Ok(())
}

#[test]
fn test_edges_on_empty_collection() {
    let mut c = Collection::new();
    assert_eq!(c.pop(), None);
    assert_eq!(c.shift(), None);
    assert!(c.is_empty());
}

#[test]
fn test_push_pop_and_unshift_shift() {
    let mut c = Collection::new();
    c.set_items([1, 2]);

    c.push("last");
    assert_eq!(c.pop(), Some(Item::from("last")));
    assert_eq!(c.items(), &[Item::from(1), Item::from(2)]);

    c.unshift("first");
    assert_eq!(c.shift(), Some(Item::from("first")));
    assert_eq!(c.items(), &[Item::from(1), Item::from(2)]);
}

#[test]
fn test_heterogeneous_items() -> Result<()> {
    let mut nested = Collection::with_id("/users/123/groups");
    nested.push(Symlink::new("/groups/1"));

    let mut profile = serde_json::Map::new();
    profile.insert("name".into(), json!("Alice"));

    let mut c = Collection::with_id("/feed");
    c.push(nested)
        .push(profile)
        .push(42)
        .push(1.5)
        .push(true)
        .push(Item::Null);

    assert_eq!(
        c.to_value()?,
        json!({
            "$type": "collection",
            "$id": "/feed",
            "items": [
                {
                    "$type": "collection",
                    "$id": "/users/123/groups",
                    "items": [{"$type": "symlink", "$id": "/groups/1"}]
                },
                {"name": "Alice"},
                42,
                1.5,
                true,
                null
            ]
        })
    );
    Ok(())
}

#[test]
fn test_builder_matches_setters() -> Result<()> {
    let built = Collection::builder()
        .id("/users")
        .items(["a", "b"])
        .expires(1000)
        .total(2)
        .limit(2)
        .build()?;

    let mut manual = Collection::from_parts(
        Some("/users".to_string()),
        Some(vec![Item::from("a"), Item::from("b")]),
        Some(1000),
    )?;
    manual.set_total(2)?.set_limit(2)?;

    assert_eq!(built, manual);
    Ok(())
}

#[test]
fn test_out_of_bounds_positions_are_rejected() {
    let mut c = Collection::new();
    c.set_items(["a"]);

    assert!(c.set_item(i64::MAX, "x").is_err());
    assert!(c.set_item(MAX_ITEMS as i64, "x").is_err());
    assert!(c.set_item_value(&json!(u64::MAX), json!("x")).is_err());
    assert_eq!(c.items(), &[Item::from("a")]);
}

#[test]
fn test_placeholders_read_as_missing_everywhere() -> Result<()> {
    let mut c = Collection::new();
    c.set_item(1, "x")?;
    c.unshift(Item::Empty);

    assert_eq!(c.get_item(0), None);
    assert_eq!(c.shift(), None);
    assert_eq!(c.get_item(0), None);
    assert_eq!(c.pop(), Some(Item::from("x")));
    assert_eq!(c.pop(), None);
    assert!(c.is_empty());
    Ok(())
}
