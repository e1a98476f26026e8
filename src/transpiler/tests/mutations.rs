//! insert, update, delete and count statements.

use crate::prelude::*;

#[test]
fn test_nested_inserts_share_counter() {
    let nested3 = Entity::new("Nested3").insert().value("name", "nested3");
    let nested2 = Entity::new("Nested2")
        .insert()
        .value("name", "nested2")
        .value("nested3", nested3);
    let query = Entity::new("Nested1")
        .insert()
        .value("name", "nested1")
        .value("nested2", nested2)
        .build()
        .unwrap();
    assert_eq!(
        query.query,
        "insert Nested1 { name := <str>$insert_0, nested2 := (insert Nested2 { name := <str>$insert_1, \
         nested3 := (insert Nested3 { name := <str>$insert_2 }) }) }"
    );
    assert_eq!(query.params.len(), 3);
    assert_eq!(query.params["insert_2"], Value::from("nested3"));
}

#[test]
fn test_insert_select_subquery() {
    let nested2 = Entity::new("Nested2");
    let existing = nested2.select().filter(nested2.col("name").eq("n2")).limit1();
    let query = Entity::new("Nested1")
        .insert()
        .value("nested2", existing)
        .build()
        .unwrap();
    assert_eq!(
        query.query,
        "insert Nested1 { nested2 := (select Nested2 filter .name = <str>$filter_0 limit 1) }"
    );
}

#[test]
fn test_unless_conflict_else_update() {
    let entity = Entity::new("WithConstraints");
    let fallback = entity.update().value("composite1", "c");
    let query = entity
        .insert()
        .value("name", "n")
        .value("composite1", "c")
        .unless_conflict(UnlessConflict::on(entity.col("name")).or_else(fallback))
        .build()
        .unwrap();
    assert_eq!(
        query.query,
        "insert WithConstraints { name := <str>$insert_0, composite1 := <str>$insert_1 } \
         unless conflict on .name else (update WithConstraints set { composite1 := <str>$update_2 })"
    );
}

#[test]
fn test_unless_conflict_on_tuple_else_entity() {
    let a = Entity::new("A");
    let query = a
        .insert()
        .value("p_str", "s")
        .unless_conflict(UnlessConflict::on_tuple([a.col("p_str"), a.col("p_int16")]).or_else(a.clone()))
        .build()
        .unwrap();
    assert_eq!(
        query.query,
        "insert A { p_str := <str>$insert_0 } unless conflict on (.p_str, .p_int16) else A"
    );
}

#[test]
fn test_unless_conflict_without_target() {
    let a = Entity::new("A");
    let query = a
        .insert()
        .value("p_str", "s")
        .unless_conflict(UnlessConflict::any())
        .build()
        .unwrap();
    assert_eq!(query.query, "insert A { p_str := <str>$insert_0 } unless conflict");
}

#[test]
fn test_unless_conflict_on_empty_tuple_has_no_target() {
    let a = Entity::new("A");
    let conflict = UnlessConflict::on_tuple(Vec::new());
    assert_eq!(conflict.on, None);
    let query = a
        .insert()
        .value("p_str", "s")
        .unless_conflict(conflict)
        .build()
        .unwrap();
    assert_eq!(query.query, "insert A { p_str := <str>$insert_0 } unless conflict");

    let direct = UnlessConflict {
        on: Some(ConflictTarget::Tuple(Vec::new())),
        fallback: Some(a.clone().into()),
    };
    let query = a.insert().value("p_str", "s").unless_conflict(direct).build().unwrap();
    assert_eq!(query.query, "insert A { p_str := <str>$insert_0 } unless conflict else A");
}

#[test]
fn test_insert_requires_values() {
    let err = Entity::new("A").insert().build().unwrap_err();
    assert!(matches!(err, QbError::EmptyValues { statement: "insert" }));
}

#[test]
fn test_insert_rejects_unary() {
    let err = Entity::new("A").insert().value("p_int64", -Expr::from(int64(1))).build().unwrap_err();
    assert_eq!(
        err.to_string(),
        "unary operator `-` is not supported in insert clause"
    );
}

#[test]
fn test_update_filters_before_set() {
    let a = Entity::new("A");
    let query = a
        .update()
        .filter(a.col("p_int16").eq(int16(1)))
        .value("p_str", "x")
        .build()
        .unwrap();
    assert_eq!(
        query.query,
        "update A filter .p_int16 = <int16>$filter_0 set { p_str := <str>$update_1 }"
    );
    assert_eq!(query.params["filter_0"], Value::Int(1));
}

#[test]
fn test_update_references_current_value() {
    let a = Entity::new("A");
    let query = a
        .update()
        .value("p_int64", a.col("p_int64") + int64(1))
        .build()
        .unwrap();
    assert_eq!(query.query, "update A set { p_int64 := .p_int64 + <int64>$update_0 }");
}

#[test]
fn test_update_rejects_unary() {
    let a = Entity::new("A");
    let err = a.update().value("p_bool", !a.col("p_bool")).build().unwrap_err();
    assert!(matches!(err, QbError::Unsupported { clause: "update", .. }));
}

#[test]
fn test_update_requires_values() {
    let a = Entity::new("A");
    let err = a.update().filter(a.col("p_bool").eq(true)).build().unwrap_err();
    assert!(matches!(err, QbError::EmptyValues { statement: "update" }));
}

#[test]
fn test_delete_with_binding() {
    let a = Entity::new("A");
    let x = Expr::from(int64(1)).label("x");
    let query = a
        .delete()
        .with(x.clone())
        .filter(a.col("p_int64").eq(x))
        .build()
        .unwrap();
    assert_eq!(query.query, "with x := <int64>$with_0 delete A filter .p_int64 = x");
}

#[test]
fn test_delete_with_pagination() {
    let a = Entity::new("A");
    let query = a
        .delete()
        .filter(a.col("p_bool").eq(true))
        .order_by(a.col("p_int64").desc())
        .offset(5_i64)
        .limit(10_i64)
        .build()
        .unwrap();
    assert_eq!(
        query.query,
        "delete A filter .p_bool = <bool>$filter_0 order by .p_int64 desc \
         offset <int64>$offset_1 limit <int64>$limit_2"
    );
}

#[test]
fn test_count_with_module() {
    let a = Entity::new("A").with_module("test");
    assert_eq!(a.count().build().unwrap().query, "with module test select count(A)");
    let query = a.count().filter(a.col("p_bool").eq(true)).build().unwrap();
    assert_eq!(
        query.query,
        "with module test select count((select A filter .p_bool = <bool>$filter_0))"
    );
}

#[test]
fn test_count() {
    let a = Entity::new("A");
    assert_eq!(a.count().build().unwrap().query, "select count(A)");
    let query = a.count().filter(a.col("p_int64").gt(int64(1))).build().unwrap();
    assert_eq!(
        query.query,
        "select count((select A filter .p_int64 > <int64>$filter_0))"
    );
}
