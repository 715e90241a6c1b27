use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned to a stored record. Unique within a store and
/// never reused, even after the record is deleted.
pub type AddressId = u64;

/// A stored contact record.
///
/// The identity and timestamp fields are managed by the store; callers
/// supply the remaining fields through an [`AddressDraft`]. Timestamps
/// are internal bookkeeping and never appear in serialized responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AddressEntry {
    pub id: AddressId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(with = "phone_wire")]
    pub phone_number: u64,
    #[serde(skip_serializing)]
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// A caller-supplied candidate record: the mutable fields only, no
/// identity, no timestamps.
///
/// Missing fields decode to their empty values so that an incomplete
/// body surfaces as a validation failure rather than a decode failure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(with = "phone_wire")]
    pub phone_number: u64,
}

/// Wire format for `phone_number`: serialized as a numeric string,
/// accepted as either a JSON number or a numeric string on input.
mod phone_wire {
    use std::fmt;

    use serde::de::{self, Deserializer, Unexpected, Visitor};
    use serde::Serializer;

    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PhoneVisitor;

        impl<'de> Visitor<'de> for PhoneVisitor {
            type Value = u64;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a phone number as an integer or a numeric string")
            }

            fn visit_u64<E>(self, v: u64) -> Result<u64, E> {
                Ok(v)
            }

            fn visit_i64<E>(self, v: i64) -> Result<u64, E>
            where
                E: de::Error,
            {
                u64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
            }

            fn visit_str<E>(self, v: &str) -> Result<u64, E>
            where
                E: de::Error,
            {
                v.parse()
                    .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(PhoneVisitor)
    }
}
