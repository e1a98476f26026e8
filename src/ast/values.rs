use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use uuid::Uuid;

/// A literal bound as a query parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Str(String),
    Bytes(Vec<u8>),
    /// Timezone-aware datetime
    DateTime(DateTime<FixedOffset>),
    /// Timezone-naive datetime
    LocalDateTime(NaiveDateTime),
    LocalDate(NaiveDate),
    LocalTime(NaiveTime),
    Duration(TimeDelta),
    Decimal(Decimal),
    /// Number with an explicit EdgeQL scalar type
    Typed(TypedValue),
    /// Untyped integer, bound without a cast
    Int(i64),
    /// Untyped float, bound without a cast
    Float(f64),
    Uuid(Uuid),
}

impl Value {
    /// EdgeQL cast emitted in front of the parameter, if any.
    pub fn cast_name(&self) -> Option<&'static str> {
        match self {
            Value::Bool(_) => Some("bool"),
            Value::Str(_) => Some("str"),
            Value::Bytes(_) => Some("bytes"),
            Value::DateTime(_) => Some("datetime"),
            Value::LocalDateTime(_) => Some("cal::local_datetime"),
            Value::LocalDate(_) => Some("cal::local_date"),
            Value::LocalTime(_) => Some("cal::local_time"),
            Value::Duration(_) => Some("duration"),
            Value::Decimal(_) => Some("decimal"),
            Value::Typed(typed) => Some(typed.scalar.as_str()),
            Value::Int(_) | Value::Float(_) | Value::Uuid(_) => None,
        }
    }

    /// The value stored in the parameter map. Typed holders are unwrapped.
    pub fn bound(&self) -> Value {
        match self {
            Value::Typed(typed) => typed.number.into(),
            other => other.clone(),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Str(s) => write!(f, "'{}'", s.replace('\'', "\\'")),
            Value::Bytes(b) => write!(f, "b'<{} bytes>'", b.len()),
            Value::DateTime(dt) => write!(f, "'{}'", dt.to_rfc3339()),
            Value::LocalDateTime(dt) => write!(f, "'{}'", dt),
            Value::LocalDate(d) => write!(f, "'{}'", d),
            Value::LocalTime(t) => write!(f, "'{}'", t),
            Value::Duration(d) => write!(f, "'{}'", d),
            Value::Decimal(d) => write!(f, "{}n", d),
            Value::Typed(typed) => write!(f, "<{}>{}", typed.scalar, typed.number),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Uuid(u) => write!(f, "'{}'", u),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Bytes(b) => serializer.serialize_bytes(b),
            Value::DateTime(dt) => dt.serialize(serializer),
            Value::LocalDateTime(dt) => dt.serialize(serializer),
            Value::LocalDate(d) => d.serialize(serializer),
            Value::LocalTime(t) => t.serialize(serializer),
            Value::Duration(d) => serializer.collect_str(d),
            Value::Decimal(d) => serializer.collect_str(d),
            Value::Typed(typed) => typed.number.serialize(serializer),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(n) => serializer.serialize_f64(*n),
            Value::Uuid(u) => u.serialize(serializer),
        }
    }
}

/// Scalar types that can be attached to a number explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Int16,
    Int32,
    Int64,
    BigInt,
    Float32,
    Float64,
}

impl ScalarType {
    pub fn as_str(self) -> &'static str {
        match self {
            ScalarType::Int16 => "int16",
            ScalarType::Int32 => "int32",
            ScalarType::Int64 => "int64",
            ScalarType::BigInt => "bigint",
            ScalarType::Float32 => "float32",
            ScalarType::Float64 => "float64",
        }
    }
}

impl std::fmt::Display for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            Number::Float(n) => write!(f, "{}", n),
        }
    }
}

impl From<Number> for Value {
    fn from(number: Number) -> Self {
        match number {
            Number::Int(n) => Value::Int(n),
            Number::Float(n) => Value::Float(n),
        }
    }
}

/// A number paired with the scalar type it should be cast to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypedValue {
    pub scalar: ScalarType,
    pub number: Number,
}

pub fn int16(value: i16) -> TypedValue {
    TypedValue { scalar: ScalarType::Int16, number: Number::Int(value.into()) }
}

pub fn int32(value: i32) -> TypedValue {
    TypedValue { scalar: ScalarType::Int32, number: Number::Int(value.into()) }
}

pub fn int64(value: i64) -> TypedValue {
    TypedValue { scalar: ScalarType::Int64, number: Number::Int(value) }
}

pub fn bigint(value: i64) -> TypedValue {
    TypedValue { scalar: ScalarType::BigInt, number: Number::Int(value) }
}

pub fn float32(value: f32) -> TypedValue {
    TypedValue { scalar: ScalarType::Float32, number: Number::Float(value.into()) }
}

pub fn float64(value: f64) -> TypedValue {
    TypedValue { scalar: ScalarType::Float64, number: Number::Float(value) }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Bytes(b.to_vec())
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Value::DateTime(dt)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(dt: DateTime<Utc>) -> Self {
        Value::DateTime(dt.into())
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Value::LocalDateTime(dt)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::LocalDate(d)
    }
}

impl From<NaiveTime> for Value {
    fn from(t: NaiveTime) -> Self {
        Value::LocalTime(t)
    }
}

impl From<TimeDelta> for Value {
    fn from(d: TimeDelta) -> Self {
        Value::Duration(d)
    }
}

impl From<Decimal> for Value {
    fn from(d: Decimal) -> Self {
        Value::Decimal(d)
    }
}

impl From<TypedValue> for Value {
    fn from(typed: TypedValue) -> Self {
        Value::Typed(typed)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<Uuid> for Value {
    fn from(u: Uuid) -> Self {
        Value::Uuid(u)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cast_names() {
        let aware = DateTime::parse_from_rfc3339("2022-05-26T00:00:00+03:00").unwrap();
        let naive = NaiveDate::from_ymd_opt(2022, 5, 26).unwrap();
        assert_eq!(Value::from(true).cast_name(), Some("bool"));
        assert_eq!(Value::from("x").cast_name(), Some("str"));
        assert_eq!(Value::from(b"x".as_slice()).cast_name(), Some("bytes"));
        assert_eq!(Value::from(aware).cast_name(), Some("datetime"));
        assert_eq!(
            Value::from(naive.and_hms_opt(1, 2, 3).unwrap()).cast_name(),
            Some("cal::local_datetime")
        );
        assert_eq!(Value::from(naive).cast_name(), Some("cal::local_date"));
        assert_eq!(
            Value::from(NaiveTime::from_hms_opt(1, 2, 3).unwrap()).cast_name(),
            Some("cal::local_time")
        );
        assert_eq!(Value::from(TimeDelta::seconds(5)).cast_name(), Some("duration"));
        assert_eq!(Value::from(Decimal::new(15, 1)).cast_name(), Some("decimal"));
        assert_eq!(Value::from(bigint(1)).cast_name(), Some("bigint"));
        assert_eq!(Value::from(float32(1.5)).cast_name(), Some("float32"));
        assert_eq!(Value::from(1_i64).cast_name(), None);
        assert_eq!(Value::from(Uuid::nil()).cast_name(), None);
    }

    #[test]
    fn test_typed_value_binds_bare_number() {
        assert_eq!(Value::from(int16(3)).bound(), Value::Int(3));
        assert_eq!(Value::from(float64(0.5)).bound(), Value::Float(0.5));
        assert_eq!(Value::from("s").bound(), Value::from("s"));
    }

    #[test]
    fn test_serialize_params() {
        let json = serde_json::to_string(&vec![
            Value::from(int32(7)),
            Value::from("a"),
            Value::from(Decimal::new(125, 2)),
            Value::from(NaiveDate::from_ymd_opt(2022, 5, 26).unwrap()),
        ])
        .unwrap();
        assert_eq!(json, r#"[7,"a","1.25","2022-05-26"]"#);
    }
}
