use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "name": "Ali Mohammadi",
        "employee_id": "10001",
        "position": "Senior Developer",
        "is_active": true,
        "avatar": "data:image/svg+xml;base64,PHN2Zy8+"
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "Ali Mohammadi")]
    pub name: String,

    /// Personnel code, unique across all employees
    #[schema(example = "10001")]
    pub employee_id: String,

    #[schema(example = "Senior Developer")]
    pub position: String,

    #[schema(example = true)]
    pub is_active: bool,

    /// Image as a data URI
    #[schema(nullable = true)]
    pub avatar: Option<String>,
}
