//! 调度入口服务
//!
//! 让操作员选择考勤模式，并跳转到对应的服务实例。
//! 跳转目标来自配置（ServicesConfig），不做硬编码。

use std::str::FromStr;

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use tracing::info;

use crate::config::ServicesConfig;
use crate::models::attendance::entities::ServiceMode;
use crate::models::dispatcher::requests::ModeSelectionForm;
use crate::models::{ApiResponse, ErrorCode};

/// 两个考勤服务实例的跳转地址
#[derive(Debug, Clone)]
pub struct DispatcherTargets {
    pub house_url: String,
    pub class_url: String,
}

impl DispatcherTargets {
    pub fn from_config(services: &ServicesConfig) -> Self {
        Self {
            house_url: services.house.target_url(),
            class_url: services.class.target_url(),
        }
    }

    /// 模式对应的目标地址
    pub fn url_for(&self, mode: ServiceMode) -> &str {
        match mode {
            ServiceMode::House => &self.house_url,
            ServiceMode::Class => &self.class_url,
        }
    }
}

pub struct DispatcherService;

impl DispatcherService {
    pub fn new_lazy() -> Self {
        Self
    }

    fn get_targets(&self, request: &HttpRequest) -> DispatcherTargets {
        request
            .app_data::<web::Data<DispatcherTargets>>()
            .expect("Dispatcher targets not found in app data")
            .get_ref()
            .clone()
    }

    // 渲染模式选择表单
    pub async fn home_page(&self, _request: &HttpRequest) -> ActixResult<HttpResponse> {
        Ok(HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(render_mode_selection()))
    }

    // 按所选模式跳转到目标服务实例
    pub async fn submit_selection(
        &self,
        request: &HttpRequest,
        form: ModeSelectionForm,
    ) -> ActixResult<HttpResponse> {
        let mode = form
            .attendance_type
            .as_deref()
            .map(str::trim)
            .and_then(|s| ServiceMode::from_str(s).ok());

        match mode {
            Some(mode) => {
                let targets = self.get_targets(request);
                let target = targets.url_for(mode);
                info!("Dispatching operator to {} service: {}", mode, target);
                Ok(HttpResponse::Found()
                    .insert_header((header::LOCATION, target.to_string()))
                    .finish())
            }
            None => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::InvalidMode,
                "Invalid attendance type",
            ))),
        }
    }
}

/// 模式选择页 HTML
fn render_mode_selection() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>MOD Attendance System</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            max-width: 600px;
            margin: 40px auto;
            padding: 20px;
        }}
        select, button {{ margin-top: 12px; padding: 6px 12px; }}
    </style>
</head>
<body>
    <h1>MOD Attendance System</h1>
    <form method="POST" action="/submit_attendance">
        <h3>Select Attendance Type:</h3>
        <label for="attendance_type">Attendance Type:</label>
        <select name="attendance_type" id="attendance_type" required>
            <option value="">--Select--</option>
            <option value="{house}">House-wise Attendance</option>
            <option value="{class}">Class-wise Attendance</option>
        </select>
        <button type="submit">Submit</button>
    </form>
</body>
</html>"#,
        house = ServiceMode::HOUSE,
        class = ServiceMode::CLASS,
    )
}
