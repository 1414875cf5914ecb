//! 考勤提交服务

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AttendanceService;
use crate::models::attendance::requests::AttendanceForm;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use crate::utils::validate_submission;

/// 处理一次考勤提交
///
/// 校验全部在持久化之前完成；任何失败路径都不会写库，
/// 成功路径恰好插入一行。
pub async fn submit_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    form: AttendanceForm,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let mode = service.get_mode(request);

    // 输入校验
    let record = match validate_submission(&form) {
        Ok(record) => record,
        Err(e) => {
            info!("Attendance submission rejected ({} mode): {}", mode, e);
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(e.error_code(), e.message())));
        }
    };

    // 保存记录
    match storage.create_attendance_record(record).await {
        Ok(saved) => {
            info!(
                "Attendance record {} stored for '{}' ({} mode)",
                saved.id, saved.house_or_class, mode
            );
            Ok(HttpResponse::SeeOther()
                .insert_header((header::LOCATION, "/"))
                .finish())
        }
        Err(e) => {
            error!("Failed to persist attendance record: {}", e);
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::PersistenceFailure,
                "An unexpected error occurred while saving attendance",
            )))
        }
    }
}
