// Rust guideline compliant 2026-10-16

//! Rejects NaN and infinite floats before a value is converted to JSON.
//!
//! serde_json writes non-finite floats as `null`, which would silently change
//! the payload. `check` walks the value once and fails instead.

use serde::ser::{self, Error as _, Serialize};

/// Diagnostic reported for NaN or infinite floats.
pub const NON_FINITE_MESSAGE: &str = "Inf and NaN cannot be JSON encoded";

/// Walks `value` and fails on the first NaN or infinite float.
///
/// Errors raised by the value's own `Serialize` impl are passed through.
pub(crate) fn check<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<()> {
    value.serialize(FiniteCheck)
}

fn finite(value: f64) -> serde_json::Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(serde_json::Error::custom(NON_FINITE_MESSAGE))
    }
}

struct FiniteCheck;

impl ser::Serializer for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;
    type SerializeSeq = Self;
    type SerializeTuple = Self;
    type SerializeTupleStruct = Self;
    type SerializeTupleVariant = Self;
    type SerializeMap = Self;
    type SerializeStruct = Self;
    type SerializeStructVariant = Self;

    fn serialize_bool(self, _v: bool) -> serde_json::Result<()> {
        Ok(())
    }

    fn serialize_i8(self, _v: i8) -> serde_json::Result<()> {
        Ok(())
    }

    fn serialize_i16(self, _v: i16) -> serde_json::Result<()> {
        Ok(())
    }

    fn serialize_i32(self, _v: i32) -> serde_json::Result<()> {
        Ok(())
    }

    fn serialize_i64(self, _v: i64) -> serde_json::Result<()> {
        Ok(())
    }

    fn serialize_i128(self, _v: i128) -> serde_json::Result<()> {
        Ok(())
    }

    fn serialize_u8(self, _v: u8) -> serde_json::Result<()> {
        Ok(())
    }

    fn serialize_u16(self, _v: u16) -> serde_json::Result<()> {
        Ok(())
    }

    fn serialize_u32(self, _v: u32) -> serde_json::Result<()> {
        Ok(())
    }

    fn serialize_u64(self, _v: u64) -> serde_json::Result<()> {
        Ok(())
    }

    fn serialize_u128(self, _v: u128) -> serde_json::Result<()> {
        Ok(())
    }

    fn serialize_f32(self, v: f32) -> serde_json::Result<()> {
        finite(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> serde_json::Result<()> {
        finite(v)
    }

    fn serialize_char(self, _v: char) -> serde_json::Result<()> {
        Ok(())
    }

    fn serialize_str(self, _v: &str) -> serde_json::Result<()> {
        Ok(())
    }

    fn serialize_bytes(self, _v: &[u8]) -> serde_json::Result<()> {
        Ok(())
    }

    fn serialize_none(self) -> serde_json::Result<()> {
        Ok(())
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> serde_json::Result<()> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> serde_json::Result<()> {
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> serde_json::Result<()> {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
    ) -> serde_json::Result<()> {
        Ok(())
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> serde_json::Result<()> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        value: &T,
    ) -> serde_json::Result<()> {
        value.serialize(self)
    }

    fn serialize_seq(self, _len: Option<usize>) -> serde_json::Result<Self> {
        Ok(self)
    }

    fn serialize_tuple(self, _len: usize) -> serde_json::Result<Self> {
        Ok(self)
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> serde_json::Result<Self> {
        Ok(self)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> serde_json::Result<Self> {
        Ok(self)
    }

    fn serialize_map(self, _len: Option<usize>) -> serde_json::Result<Self> {
        Ok(self)
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> serde_json::Result<Self> {
        Ok(self)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> serde_json::Result<Self> {
        Ok(self)
    }
}

impl ser::SerializeSeq for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> serde_json::Result<()> {
        check(value)
    }

    fn end(self) -> serde_json::Result<()> {
        Ok(())
    }
}

impl ser::SerializeTuple for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> serde_json::Result<()> {
        check(value)
    }

    fn end(self) -> serde_json::Result<()> {
        Ok(())
    }
}

impl ser::SerializeTupleStruct for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> serde_json::Result<()> {
        check(value)
    }

    fn end(self) -> serde_json::Result<()> {
        Ok(())
    }
}

impl ser::SerializeTupleVariant for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> serde_json::Result<()> {
        check(value)
    }

    fn end(self) -> serde_json::Result<()> {
        Ok(())
    }
}

impl ser::SerializeMap for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> serde_json::Result<()> {
        check(key)
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> serde_json::Result<()> {
        check(value)
    }

    fn end(self) -> serde_json::Result<()> {
        Ok(())
    }
}

impl ser::SerializeStruct for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        _key: &'static str,
        value: &T,
    ) -> serde_json::Result<()> {
        check(value)
    }

    fn end(self) -> serde_json::Result<()> {
        Ok(())
    }
}

impl ser::SerializeStructVariant for FiniteCheck {
    type Ok = ();
    type Error = serde_json::Error;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        _key: &'static str,
        value: &T,
    ) -> serde_json::Result<()> {
        check(value)
    }

    fn end(self) -> serde_json::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[derive(serde::Serialize)]
    struct Reading {
        sensor: &'static str,
        values: Vec<Option<f32>>,
    }

    #[test]
    fn test_finite_values_pass() {
        assert!(check(&json!({"a": [1, 2.5, null, "x"]})).is_ok());
        assert!(check(&(1u8, -2i64, 0.0f64, 'c')).is_ok());
        assert!(check(&f64::MAX).is_ok());
    }

    #[test]
    fn test_nan_and_infinity_rejected() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = check(&value).unwrap_err();
            assert_eq!(err.to_string(), NON_FINITE_MESSAGE);
        }
    }

    #[test]
    fn test_nested_non_finite_rejected() {
        let reading = Reading {
            sensor: "t1",
            values: vec![Some(1.0), None, Some(f32::NAN)],
        };
        assert!(check(&reading).is_err());

        let mut map = BTreeMap::new();
        map.insert("limit", vec![f64::NEG_INFINITY]);
        assert!(check(&map).is_err());
    }
}
