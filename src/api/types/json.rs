//! JSON extractor whose rejections use the API error envelope

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::{de::DeserializeOwned, Serialize};

use super::error::{ApiError, ApiErrorType};

/// Wrapper around `axum::Json` reporting malformed bodies as [`ApiError`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match AxumJson::<T>::from_request(req, state).await {
            Ok(AxumJson(value)) => Ok(Json(value)),
            Err(rejection) => Err(rejection_to_error(&rejection)),
        }
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}

// Every body problem is a client error, including 415/422 rejections.
fn rejection_to_error(rejection: &JsonRejection) -> ApiError {
    let message = match rejection {
        JsonRejection::JsonDataError(err) => format!("Invalid recipe data: {}", err.body_text()),
        JsonRejection::JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err.body_text()),
        JsonRejection::MissingJsonContentType(_) => {
            "Missing Content-Type header. Expected 'application/json'.".to_string()
        }
        JsonRejection::BytesRejection(err) => {
            format!("Failed to read request body: {}", err.body_text())
        }
        _ => "Invalid JSON request".to_string(),
    };

    ApiError::new(
        axum::http::StatusCode::BAD_REQUEST,
        ApiErrorType::InvalidRequestError,
        message,
    )
    .with_code("invalid_json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, StatusCode};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Named {
        name: String,
    }

    fn request(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = axum::http::Request::builder().method("POST").uri("/");

        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }

        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn test_extracts_valid_body() {
        let req = request(Some("application/json"), r#"{"name": "Soup"}"#);

        let Json(named) = Json::<Named>::from_request(req, &()).await.unwrap();
        assert_eq!(named.name, "Soup");
    }

    #[tokio::test]
    async fn test_syntax_error_is_bad_request() {
        let req = request(Some("application/json"), r#"{"name": "#);

        let err = Json::<Named>::from_request(req, &()).await.unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.response.error.code, Some("invalid_json".to_string()));
        assert!(err.response.error.message.starts_with("Invalid JSON syntax"));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_bad_request() {
        let req = request(Some("application/json"), r#"{"name": 42}"#);

        let err = Json::<Named>::from_request(req, &()).await.unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.response.error.message.starts_with("Invalid recipe data"));
    }

    #[tokio::test]
    async fn test_missing_content_type_is_bad_request() {
        let req = request(None, r#"{"name": "Soup"}"#);

        let err = Json::<Named>::from_request(req, &()).await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }
}
