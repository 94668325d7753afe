use serde::{Deserialize, Serialize};

// UUID を内部に持つ ID 型
macro_rules! define_uuid_id {
    ($id_type: ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(into = "String", try_from = "String")]
        pub struct $id_type(uuid::Uuid);

        impl $id_type {
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4())
            }
        }

        impl Default for $id_type {
            fn default() -> Self {
                Self::new()
            }
        }

        impl TryFrom<String> for $id_type {
            type Error = uuid::Error;
            fn try_from(value: String) -> Result<Self, Self::Error> {
                uuid::Uuid::parse_str(&value).map(Self)
            }
        }

        impl std::fmt::Display for $id_type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<$id_type> for String {
            fn from(value: $id_type) -> Self {
                value.0.to_string()
            }
        }
    };
}

// 人が読める文字列をそのまま持つ ID 型（"A1" や "user-001" など）
macro_rules! define_label_id {
    ($id_type: ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $id_type(String);

        impl $id_type {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $id_type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $id_type {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<$id_type> for String {
            fn from(value: $id_type) -> Self {
                value.0
            }
        }
    };
}

define_uuid_id!(HistoryId);
define_label_id!(SlotId);
define_label_id!(UserId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_id_roundtrips_through_string() {
        let id = HistoryId::new();
        let parsed = HistoryId::try_from(id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn label_ids_keep_their_text() {
        let slot = SlotId::from("A1");
        assert_eq!(slot.as_str(), "A1");
        assert_eq!(String::from(UserId::new("user-001")), "user-001");
    }
}
