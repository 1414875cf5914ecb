use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::dispatcher::requests::ModeSelectionForm;
use crate::services::DispatcherService;

// 懒加载的全局 DISPATCHER_SERVICE 实例
static DISPATCHER_SERVICE: Lazy<DispatcherService> = Lazy::new(DispatcherService::new_lazy);

// HTTP处理程序
pub async fn home_page(req: HttpRequest) -> ActixResult<HttpResponse> {
    DISPATCHER_SERVICE.home_page(&req).await
}

pub async fn submit_selection(
    req: HttpRequest,
    form: web::Form<ModeSelectionForm>,
) -> ActixResult<HttpResponse> {
    DISPATCHER_SERVICE
        .submit_selection(&req, form.into_inner())
        .await
}

// 配置路由
pub fn configure_dispatcher_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(home_page)))
        .service(web::resource("/submit_attendance").route(web::post().to(submit_selection)));
}
