use super::OutOfRange;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Width of one indentation level handed to the formatter (1-8).
///
/// When tabs are used this is the width a tab is assumed to occupy, which
/// still matters to formatters that wrap at the print width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndentSize(u8);

impl IndentSize {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 8;

    /// # Errors
    /// Returns [`OutOfRange`] unless `1 <= value <= 8`.
    pub fn new(value: u8) -> Result<Self, OutOfRange> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(OutOfRange {
                name: "indent-size",
                min: Self::MIN.into(),
                max: Self::MAX.into(),
                value: value.into(),
            })
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl Default for IndentSize {
    fn default() -> Self {
        Self(2)
    }
}

impl<'de> Deserialize<'de> for IndentSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        IndentSize::new(value).map_err(serde::de::Error::custom)
    }
}

impl Serialize for IndentSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}
