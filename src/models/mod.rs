pub mod attendance;
pub mod common;
pub mod dispatcher;

pub use common::response::ApiResponse;

use serde::{Deserialize, Serialize};

/// 业务错误码
///
/// 0 表示成功；1xxx 为输入校验类错误；2xxx 为存储类错误；5000 为内部错误。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ErrorCode {
    Success = 0,
    MissingMode = 1001,
    MissingHouseFields = 1002,
    MissingClassField = 1003,
    MissingOrInvalidNumeric = 1004,
    InvalidNumericRange = 1005,
    InvalidMode = 1006,
    BadRequest = 1400,
    PersistenceFailure = 2001,
    InternalServerError = 5000,
}

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
