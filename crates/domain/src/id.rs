//! Typed identifiers backed by random UUIDs.
//!
//! Ids serialise as the plain UUID string. Their `Display` form is a short
//! prefixed tag (`zone-1a2b3c4d`) meant for log lines and the console.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident, $prefix:literal) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(uuid::Uuid);

        impl Default for $name {
            fn default() -> Self {
                Self(uuid::Uuid::new_v4())
            }
        }

        impl $name {
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }

            #[must_use]
            pub fn as_uuid(self) -> uuid::Uuid {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "-{:08x}"), self.0.as_fields().0)
            }
        }
    };
}

define_id!(
    /// One household zone, i.e. one registry and engine pair.
    ZoneId,
    "zone"
);

define_id!(
    /// One journal [`Event`](crate::event::Event).
    EventId,
    "event"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_generate_unique_ids() {
        assert_ne!(ZoneId::new(), ZoneId::new());
    }

    #[test]
    fn should_display_short_prefixed_tag() {
        let id = ZoneId::new();
        let tag = id.to_string();
        assert!(tag.starts_with("zone-"));
        assert_eq!(tag.len(), "zone-".len() + 8);
        assert!(id.as_uuid().simple().to_string().starts_with(&tag[5..]));
    }

    #[test]
    fn should_serialize_as_plain_uuid() {
        let id = EventId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));
        let back: EventId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
