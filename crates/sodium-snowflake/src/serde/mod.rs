//! Serde helpers for snowflake fields.

/// Serialize a snowflake as its decimal string.
///
/// JSON consumers commonly parse numbers as doubles, which cannot hold a
/// 64-bit snowflake exactly. Use with `#[serde(with = "as_string")]`:
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use sodium_snowflake::serde::as_string;
///
/// #[derive(Serialize, Deserialize)]
/// struct Message {
///     #[serde(with = "as_string")]
///     id: u64,
/// }
///
/// let json = serde_json::to_string(&Message { id: 1461913675098095707 }).unwrap();
/// assert_eq!(json, r#"{"id":"1461913675098095707"}"#);
/// ```
pub mod as_string {
    use crate::SnowflakeInput;
    use core::fmt;
    use serde::{Deserializer, Serializer, de};

    /// Serialize a snowflake as a decimal string.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<S>(id: &u64, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.collect_str(id)
    }

    /// Deserialize a snowflake from a decimal string or a native integer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The underlying deserializer fails
    /// - The string is not a valid non-negative integer literal
    /// - The integer is negative
    pub fn deserialize<'de, D>(d: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SnowflakeVisitor;

        impl de::Visitor<'_> for SnowflakeVisitor {
            type Value = u64;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a snowflake as a decimal string or integer")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                SnowflakeInput::from(v).to_u64().map_err(de::Error::custom)
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(v)
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                u64::try_from(v)
                    .map_err(|_| de::Error::invalid_value(de::Unexpected::Signed(v), &self))
            }
        }

        d.deserialize_any(SnowflakeVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DeconstructedSnowflake, Error, Snowflake};
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
    struct Row {
        #[serde(with = "as_string")]
        event_id: u64,
    }

    #[test]
    fn string_roundtrip() {
        let row = Row {
            event_id: u64::MAX,
        };

        let json = serde_json::to_string(&row).expect("serialize");
        assert_eq!(json, r#"{"event_id":"18446744073709551615"}"#);
        let back: Row = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, row);
    }

    #[test]
    fn accepts_native_integers() {
        let row: Row = serde_json::from_value(json!({"event_id": 42})).expect("deserialize");
        assert_eq!(row.event_id, 42);
    }

    #[test]
    fn rejects_negative_integers() {
        let err = serde_json::from_value::<Row>(json!({"event_id": -1})).expect_err("should fail");
        assert!(err.to_string().contains("invalid value"), "{err}");
    }

    #[test]
    fn rejects_malformed_strings() {
        let err =
            serde_json::from_value::<Row>(json!({"event_id": "12ab"})).expect_err("should fail");
        assert_eq!(
            err.to_string(),
            Error::MalformedIdentifier {
                input: "12ab".to_owned()
            }
            .to_string()
        );
    }

    #[test]
    fn deconstructed_serializes_id_as_string() {
        let parts = Snowflake::discord()
            .deconstruct("1461913675098095707")
            .expect("deconstruct");
        let value = serde_json::to_value(parts).expect("serialize");
        assert_eq!(
            value,
            json!({
                "id": "1461913675098095707",
                "timestamp": 1_768_617_781_186_u64,
                "worker_id": parts.worker_id,
                "process_id": parts.process_id,
                "increment": parts.increment,
                "epoch": 1_420_070_400_000_u64,
            })
        );
        let back: DeconstructedSnowflake = serde_json::from_value(value).expect("deserialize");
        assert_eq!(back, parts);
    }
}
