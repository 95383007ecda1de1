use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use booking::domain::{core::BookingError, DataAccessError};
use serde::Serialize;
use serde_json::{error::Category, json};
use tracing::error;

/// リクエスト内の位置
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Loc {
    Key(String),
    Index(usize),
}

impl From<&str> for Loc {
    fn from(value: &str) -> Self {
        Loc::Key(value.to_owned())
    }
}

impl From<usize> for Loc {
    fn from(value: usize) -> Self {
        Loc::Index(value)
    }
}

/// 項目単位の入力エラー
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub loc: Vec<Loc>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn new(loc: Vec<Loc>, msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            loc,
            msg: msg.into(),
            kind: kind.into(),
        }
    }

    /// `body[index].field` のエラー
    pub fn at(index: usize, field: &str, msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self::new(vec!["body".into(), index.into(), field.into()], msg, kind)
    }
}

#[derive(Debug)]
pub enum ApiError {
    /// 422 入力不正
    Validation(Vec<FieldError>),
    /// 409 予約の重複
    Conflict(String),
    /// 500
    Internal,
}

impl From<serde_json::Error> for ApiError {
    fn from(value: serde_json::Error) -> Self {
        let kind = match value.classify() {
            Category::Data => "value_error",
            Category::Syntax | Category::Eof => "json_invalid",
            Category::Io => "body",
        };
        ApiError::Validation(vec![FieldError::new(
            vec!["body".into()],
            value.to_string(),
            kind,
        )])
    }
}

impl From<BookingError> for ApiError {
    fn from(value: BookingError) -> Self {
        match value {
            BookingError::Conflict { .. } => ApiError::Conflict(value.to_string()),
            BookingError::DataAccess(e) => e.into(),
        }
    }
}

impl From<DataAccessError> for ApiError {
    fn from(value: DataAccessError) -> Self {
        error!("データアクセスエラー: {}", value);
        ApiError::Internal
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": errors })),
            )
                .into_response(),
            ApiError::Conflict(message) => {
                (StatusCode::CONFLICT, Json(json!({ "detail": message }))).into_response()
            }
            ApiError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "detail": "Internal Server Error" })),
            )
                .into_response(),
        }
    }
}
