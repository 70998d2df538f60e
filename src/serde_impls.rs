//! `Serialize` and `Deserialize` for [`TabCustomization`].
//!
//! Deserialization funnels through [`TabCustomization::with_overflow`], so a
//! decoded customization is de-duplicated and re-split exactly like a freshly
//! constructed one. Persisted state that has gone stale (a different
//! `max_visible`, an oversized visible list, duplicated items) heals on load
//! instead of resurrecting a broken split.

use alloc::vec::Vec;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::TabCustomization;

impl<T: Serialize> Serialize for TabCustomization<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("TabCustomization", 3)?;
        state.serialize_field("visible", &self.visible)?;
        state.serialize_field("overflow", &self.overflow)?;
        state.serialize_field("max_visible", &self.max_visible)?;
        state.end()
    }
}

impl<'de, T> Deserialize<'de> for TabCustomization<T>
where
    T: Deserialize<'de> + PartialEq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(bound(deserialize = "T: Deserialize<'de>"))]
        struct Raw<T> {
            #[serde(default)]
            visible: Vec<T>,
            #[serde(default)]
            overflow: Vec<T>,
            max_visible: usize,
        }

        let raw = Raw::deserialize(deserializer)?;
        if raw.max_visible == 0 {
            return Err(de::Error::invalid_value(
                de::Unexpected::Unsigned(0),
                &"a max_visible of at least 1",
            ));
        }

        Ok(Self::with_overflow(raw.visible, raw.overflow, raw.max_visible))
    }
}
