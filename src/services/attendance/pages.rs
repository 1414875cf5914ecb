//! 考勤录入表单页面
//!
//! 两个服务实例各自渲染本模式的服务端表单，提交目标都是
//! /submit_attendance，attendance_type 由隐藏字段携带。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::models::attendance::entities::ServiceMode;

/// 渲染本实例的录入表单
pub async fn home_page(
    service: &AttendanceService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let mode = service.get_mode(request);

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_form(mode)))
}

/// 单个数值字段的输入行
fn numeric_field(label: &str, name: &str, min: i64) -> String {
    format!(
        r#"        <label for="{name}">{label}:</label>
        <input type="number" id="{name}" name="{name}" min="{min}" required>
"#
    )
}

/// 生成模式对应的表单 HTML
fn render_form(mode: ServiceMode) -> String {
    // 模式专属的标识字段
    let identity_fields = match mode {
        ServiceMode::House => concat!(
            r#"        <label for="house">House:</label>
"#,
            r#"        <input type="text" id="house" name="house" required>
"#,
            r#"        <label for="category">Category:</label>
"#,
            r#"        <input type="text" id="category" name="category" required>
"#
        )
        .to_string(),
        ServiceMode::Class => concat!(
            r#"        <label for="class">Class:</label>
"#,
            r#"        <input type="text" id="class" name="class" required>
"#
        )
        .to_string(),
    };

    let numeric_fields = [
        ("Total Students", "total", 1),
        ("Present", "present", 0),
        ("Absent", "absent", 0),
        ("On Duty", "onDuty", 0),
        ("Leave", "leave", 0),
        ("Not Reported", "notReported", 0),
    ]
    .map(|(label, name, min)| numeric_field(label, name, min))
    .join("");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>MOD Attendance System - {title}</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            max-width: 600px;
            margin: 40px auto;
            padding: 20px;
        }}
        label {{ display: block; margin-top: 12px; }}
        input {{ padding: 4px 8px; }}
        button {{ margin-top: 16px; padding: 6px 16px; }}
    </style>
</head>
<body>
    <h1>{title}</h1>
    <form method="POST" action="/submit_attendance">
        <input type="hidden" name="attendance_type" value="{mode}">
{identity_fields}{numeric_fields}        <button type="submit">Submit</button>
    </form>
    <p><a href="/export">Export attendance report</a></p>
</body>
</html>"#,
        title = mode.display_name(),
    )
}
