use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse
};
use derive_more::Display;
use sqlx::error::ErrorKind;

#[derive(Debug, Display)]
pub enum AppError {
    #[display("Invalid input: {_0}")]
    InvalidInput(String),

    #[display("Not found: {_0}")]
    NotFound(String),

    #[display("Internal server error: {_0}")]
    InternalError(String),
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::InternalError(detail) => {
                tracing::error!(error = %detail, "Request failed");
                serde_json::json!({"error": "Internal server error"})
            }
            _ => serde_json::json!({"error": self.to_string()}),
        };
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(e) if matches!(e.kind(), ErrorKind::NotNullViolation | ErrorKind::CheckViolation) => {
                tracing::warn!(kind = ?e.kind(), "Store rejected the row: {}", e.message());
                AppError::InternalError(format!("Constraint violation: {}", e.message()))
            }
            sqlx::Error::Database(e) => {
                AppError::InternalError(format!("Database error ({:?}): {}", e.kind(), e.message()))
            }
            _ => AppError::InternalError(format!("Database error: {}", err))
        }
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        AppError::InternalError(format!("Migration error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn maps_variants_to_status_codes() {
        assert_eq!(AppError::InvalidInput("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotFound("x".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::InternalError("x".into()).status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn row_not_found_is_an_internal_error() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::InternalError(_)));
    }

    #[actix_rt::test]
    async fn internal_errors_hide_their_detail() {
        let response = AppError::InternalError("disk on fire".into()).error_response();
        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["error"], "Internal server error");
    }

    #[actix_rt::test]
    async fn client_errors_carry_their_message() {
        let response = AppError::NotFound("Project 7 not found".into()).error_response();
        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["error"], "Not found: Project 7 not found");
    }
}
