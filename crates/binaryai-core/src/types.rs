use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a single analysed function, as issued by the service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FunctionId(String);

/// Identifier of a server-side function set.
///
/// The value is opaque: it is never generated or validated locally, only
/// echoed back to the service or forwarded to the IDA plugin.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FunctionSetId(String);

macro_rules! opaque_id {
    ($ty:ident) => {
        impl $ty {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $ty {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $ty {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

opaque_id!(FunctionId);
opaque_id!(FunctionSetId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn funcset_id_serializes_as_plain_string() {
        let id = FunctionSetId::new("5e8a7c");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"5e8a7c\"");
        let back: FunctionSetId = serde_json::from_str("\"5e8a7c\"").unwrap();
        assert_eq!(back, id);
        assert_eq!(back.to_string(), "5e8a7c");
    }
}
