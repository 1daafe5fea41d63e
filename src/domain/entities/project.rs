use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// ───── Database Models ───────────────────────────────────────────────

/// A portfolio item as stored in the `projects` table.
///
/// Columns are camelCase in the schema and on the wire, so the same
/// renaming applies to both sqlx and serde.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub image_url: String,
    pub category: Option<String>,
    pub created_at: NaiveDateTime,
}

// ───── Input Requests ────────────────────────────────────────────────

/// Body of `POST /api/projects`.
///
/// Every field is optional here on purpose: absent values are bound as
/// `NULL` and the table's `NOT NULL` constraints decide what is accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewProject {
    #[serde(deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub image_url: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub category: Option<String>,
}

/// Body of `PUT /api/projects/{id}`. `imageUrl` is not updatable and any
/// such key in the body is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateProject {
    #[serde(deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub category: Option<String>,
}

/// Columns are TEXT, so any JSON value is kept as text: strings verbatim,
/// everything else as its JSON rendering. `null` stays `NULL`.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        SuccessResponse { success: true }
    }
}

impl NewProject {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        NewProject {
            title: Some(title.into()),
            description: Some(description.into()),
            image_url: Some(image_url.into()),
            category: Some(category.into()),
        }
    }
}
