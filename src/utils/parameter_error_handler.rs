//! 请求参数错误处理
//!
//! 把 actix 的表单反序列化错误转换为统一的 400 响应体。

use actix_web::error::UrlencodedError;
use actix_web::{Error, HttpRequest, HttpResponse, error::InternalError};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

/// 表单参数错误处理器，挂载到 web::FormConfig
pub fn form_error_handler(err: UrlencodedError, req: &HttpRequest) -> Error {
    debug!(
        "Form deserialization failed for {} {}: {}",
        req.method(),
        req.path(),
        err
    );

    let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::BadRequest,
        format!("Malformed form body: {err}"),
    ));

    InternalError::from_response(err, response).into()
}
