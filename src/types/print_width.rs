use super::OutOfRange;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Line width the formatter tries to wrap at (40-120).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrintWidth(u16);

impl PrintWidth {
    pub const MIN: u16 = 40;
    pub const MAX: u16 = 120;

    /// # Errors
    /// Returns [`OutOfRange`] unless `40 <= value <= 120`.
    pub fn new(value: u16) -> Result<Self, OutOfRange> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(OutOfRange {
                name: "print-width",
                min: Self::MIN,
                max: Self::MAX,
                value,
            })
        }
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl Default for PrintWidth {
    fn default() -> Self {
        Self(80)
    }
}

impl<'de> Deserialize<'de> for PrintWidth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u16::deserialize(deserializer)?;
        PrintWidth::new(value).map_err(serde::de::Error::custom)
    }
}

impl Serialize for PrintWidth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_are_inclusive() {
        assert_eq!(PrintWidth::new(40).unwrap().get(), 40);
        assert_eq!(PrintWidth::new(120).unwrap().get(), 120);
        assert!(PrintWidth::new(39).is_err());
        assert!(PrintWidth::new(121).is_err());
    }

    #[test]
    fn test_default_is_eighty() {
        assert_eq!(PrintWidth::default().get(), 80);
    }

    #[test]
    fn test_deserialize_validates() {
        #[derive(Debug, serde::Deserialize)]
        struct Wrapper {
            width: PrintWidth,
        }

        assert!(toml::from_str::<Wrapper>("width = 200").is_err());
        let ok: Wrapper = toml::from_str("width = 100").unwrap();
        assert_eq!(ok.width.get(), 100);
    }
}
