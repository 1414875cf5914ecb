pub mod export;
pub mod pages;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::attendance::entities::ServiceMode;
use crate::models::attendance::requests::AttendanceForm;
use crate::storage::Storage;

/// 考勤服务
///
/// 同一份实现按 ServiceMode 实例化两次（house / class），
/// 模式与存储都从请求的 app data 注入。
pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn get_mode(&self, request: &HttpRequest) -> ServiceMode {
        *request
            .app_data::<actix_web::web::Data<ServiceMode>>()
            .expect("Service mode not found in app data")
            .get_ref()
    }

    // 渲染本实例的考勤录入表单
    pub async fn home_page(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        pages::home_page(self, request).await
    }

    // 校验并保存一次考勤提交
    pub async fn submit_attendance(
        &self,
        request: &HttpRequest,
        form: AttendanceForm,
    ) -> ActixResult<HttpResponse> {
        submit::submit_attendance(self, request, form).await
    }

    // 导出全部考勤记录为 XLSX
    pub async fn export_report(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        export::export_report(self, request).await
    }
}
