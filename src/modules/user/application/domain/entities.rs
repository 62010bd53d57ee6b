use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Hex form of the stored ObjectId.
    #[schema(example = "65f1c2a9e4b0a1b2c3d4e5f7")]
    pub id: String,
    pub name: String,
    pub email: String,
}
