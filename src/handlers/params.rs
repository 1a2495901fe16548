use actix_web::{dev::Payload, http::StatusCode, web, FromRequest, HttpMessage, HttpRequest};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;

use super::FORM_LIMIT_BYTES;
use crate::error::AppError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Request parameters read from a urlencoded body, or from the query string
/// when the body is not a form. Every failure surfaces as an `AppError`.
pub struct Params<T>(pub T);

impl<T> Params<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for Params<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, AppError>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let is_form = req.content_type().eq_ignore_ascii_case(FORM_CONTENT_TYPE);
        let query = req.query_string().to_string();
        let body = web::Bytes::from_request(req, payload);

        Box::pin(async move {
            let bytes = body.await.map_err(|err| {
                if err.as_response_error().status_code() == StatusCode::PAYLOAD_TOO_LARGE {
                    AppError::PayloadTooLarge(FORM_LIMIT_BYTES)
                } else {
                    AppError::InvalidInput(err.to_string())
                }
            })?;

            let raw = if is_form {
                std::str::from_utf8(&bytes)
                    .map_err(|_| AppError::InvalidInput("form body is not valid UTF-8".to_string()))?
            } else {
                query.as_str()
            };

            web::Query::<T>::from_query(raw)
                .map(|parsed| Params(parsed.into_inner()))
                .map_err(|err| AppError::InvalidInput(err.to_string()))
        })
    }
}
