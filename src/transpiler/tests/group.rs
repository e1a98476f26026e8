use crate::prelude::*;

#[test]
fn test_group_using_bindings() {
    let a = Entity::new("A");
    let first = (a.col("p_int16") + int16(1)).label("a");
    let second = (first.clone() + int16(2)).label("b");
    let third = (first.clone() + second.clone()).label("c");
    let query = a
        .group()
        .column(a.col("p_str"))
        .using(first)
        .using(second)
        .using(third.clone())
        .by(third)
        .build()
        .unwrap();
    assert_eq!(
        query.query,
        "group A { p_str } using a := .p_int16 + <int16>$using_0, b := a + <int16>$using_1, c := a + b by c"
    );
    assert_eq!(query.params.len(), 2);
}

#[test]
fn test_group_by_columns() {
    let a = Entity::new("A");
    let query = a
        .group()
        .by(a.col("p_str"))
        .by(a.col("nested").attr("name"))
        .build()
        .unwrap();
    assert_eq!(query.query, "group A by .p_str, .nested.name");
}

#[test]
fn test_group_by_alias() {
    let a = Entity::new("A");
    let query = a.group().by(Alias::new("key")).build().unwrap();
    assert_eq!(query.query, "group A by key");
}

#[test]
fn test_group_by_rejects_expressions() {
    let a = Entity::new("A");
    let err = a.group().by(a.col("p_int16") + int16(1)).build().unwrap_err();
    assert_eq!(err.to_string(), "Invalid group by target: binary operator `+`");
}
