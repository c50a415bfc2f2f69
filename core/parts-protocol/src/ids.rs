use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid word id '{0}': expected a positive integer")]
pub struct WordIdParseError(pub String);

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        #[repr(transparent)] // Same layout as u32
        pub struct $name(pub u32);

        impl $name {
            pub const fn new(id: u32) -> Self {
                Self(id)
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> u32 {
                id.0
            }
        }

        /// The textual form is the identifier surfaces hand around ("1", "28", ...).
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = WordIdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                // Reject signs so "+3" and "3" don't alias
                if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(WordIdParseError(s.to_string()));
                }
                trimmed
                    .parse::<u32>()
                    .map(Self)
                    .map_err(|_| WordIdParseError(s.to_string()))
            }
        }
    };
}

define_id!(WordId, "Unique identifier for an entry of the word bank.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_text_form() {
        assert_eq!(WordId::new(28).to_string(), "28");
        assert_eq!("28".parse::<WordId>(), Ok(WordId(28)));
        assert_eq!(" 7 ".parse::<WordId>(), Ok(WordId(7)));
    }

    #[test]
    fn test_id_rejects_garbage() {
        assert!("".parse::<WordId>().is_err());
        assert!("+3".parse::<WordId>().is_err());
        assert!("-1".parse::<WordId>().is_err());
        assert!("am".parse::<WordId>().is_err());
        assert!("99999999999".parse::<WordId>().is_err());
    }

    #[test]
    fn test_id_layout() {
        assert_eq!(core::mem::size_of::<WordId>(), 4);
    }
}
