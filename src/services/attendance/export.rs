//! 考勤报表导出服务

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::{DateTime, Utc};
use rust_xlsxwriter::{Format, Workbook};
use tracing::error;

use super::AttendanceService;
use crate::errors::Result;
use crate::models::attendance::entities::AttendanceRecord;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 导出表头（八个展示列）
const EXPORT_HEADERS: [&str; 8] = [
    "House/Class",
    "Category",
    "Total Students",
    "Present",
    "Absent",
    "On Duty",
    "Leave",
    "Not Reported",
];

/// 导出全部考勤记录
///
/// 工作簿在内存中生成并直接作为响应体下发，不在磁盘上留文件。
pub async fn export_report(
    service: &AttendanceService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let records = match storage.list_attendance_records().await {
        Ok(records) => records,
        Err(e) => {
            error!("Failed to load attendance records for export: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to load attendance records",
                )),
            );
        }
    };

    // 空库不生成文件，返回内联提示页
    if records.is_empty() {
        return Ok(HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body("<h1>No data to export!</h1>"));
    }

    match generate_xlsx(&records) {
        Ok(buffer) => {
            let filename = export_filename(Utc::now());

            Ok(HttpResponse::Ok()
                .content_type("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
                .insert_header((
                    "Content-Disposition",
                    format!("attachment; filename=\"{filename}\""),
                ))
                .body(buffer))
        }
        Err(e) => {
            error!("生成 XLSX 失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to generate export report",
                )),
            )
        }
    }
}

/// 导出文件名，时间戳精确到秒
fn export_filename(now: DateTime<Utc>) -> String {
    format!("attendance_report_{}.xlsx", now.format("%Y%m%d%H%M%S"))
}

/// 生成 XLSX 文件
fn generate_xlsx(records: &[AttendanceRecord]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();

    // 格式定义
    let header_format = Format::new().set_bold();

    let sheet = workbook.add_worksheet().set_name("Attendance")?;

    // 表头
    for (col, header) in EXPORT_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    // 数据行，保持存储顺序
    for (row, record) in records.iter().enumerate() {
        let row = (row + 1) as u32;

        sheet.write_string(row, 0, &record.house_or_class).ok();
        sheet.write_string(row, 1, &record.category).ok();
        sheet.write_number(row, 2, record.total as f64).ok();
        sheet.write_number(row, 3, record.present as f64).ok();
        sheet.write_number(row, 4, record.absent as f64).ok();
        sheet.write_number(row, 5, record.on_duty as f64).ok();
        sheet.write_number(row, 6, record.leave as f64).ok();
        sheet.write_number(row, 7, record.not_reported as f64).ok();
    }

    // 设置列宽
    sheet.set_column_width(0, 20).ok();
    sheet.set_column_width(1, 15).ok();
    for col in 2..EXPORT_HEADERS.len() as u16 {
        sheet.set_column_width(col, 12).ok();
    }

    // 生成二进制数据
    Ok(workbook.save_to_buffer()?)
}
