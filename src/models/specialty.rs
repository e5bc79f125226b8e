use serde::{Deserialize, Serialize};

/// A medical discipline category. Static catalog data, looked up
/// by id or by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specialty {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
}
