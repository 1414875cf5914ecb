use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::attendance::requests::AttendanceForm;
use crate::services::AttendanceService;

// 懒加载的全局 ATTENDANCE_SERVICE 实例
static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

// HTTP处理程序
pub async fn home_page(req: HttpRequest) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.home_page(&req).await
}

pub async fn submit_attendance(
    req: HttpRequest,
    form: web::Form<AttendanceForm>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .submit_attendance(&req, form.into_inner())
        .await
}

pub async fn export_report(req: HttpRequest) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.export_report(&req).await
}

// 配置路由
pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(home_page)))
        .service(web::resource("/submit_attendance").route(web::post().to(submit_attendance)))
        .service(web::resource("/export").route(web::get().to(export_report)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test};
    use std::sync::Arc;

    use crate::models::attendance::entities::ServiceMode;
    use crate::storage::{Storage, sea_orm_storage::SeaOrmStorage};

    /// 内存库实例；单连接池保证迁移与查询看到同一个库
    async fn memory_storage() -> Arc<dyn Storage> {
        let storage = SeaOrmStorage::new_with_url(":memory:", 1, 5)
            .await
            .expect("Failed to create in-memory storage");
        Arc::new(storage)
    }

    macro_rules! build_app {
        ($mode:expr, $storage:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($storage.clone()))
                    .app_data(web::Data::new($mode))
                    .configure(configure_attendance_routes),
            )
            .await
        };
    }

    fn class_payload() -> Vec<(&'static str, &'static str)> {
        vec![
            ("attendance_type", "class"),
            ("class", "10A"),
            ("total", "40"),
            ("present", "35"),
            ("absent", "3"),
            ("onDuty", "1"),
            ("leave", "1"),
            ("notReported", "0"),
        ]
    }

    #[actix_web::test]
    async fn test_valid_class_submission_persists_one_record() {
        let storage = memory_storage().await;
        let app = build_app!(ServiceMode::Class, storage);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/submit_attendance")
                .set_form(class_payload())
                .to_request(),
        )
        .await;

        // 成功后重定向回表单页
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/");

        let records = storage.list_attendance_records().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].house_or_class, "10A");
        assert_eq!(records[0].category, "N/A");
        assert_eq!(records[0].total, 40);
    }

    #[actix_web::test]
    async fn test_valid_house_submission_keeps_category() {
        let storage = memory_storage().await;
        let app = build_app!(ServiceMode::House, storage);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/submit_attendance")
                .set_form(vec![
                    ("attendance_type", "house"),
                    ("house", "Red House"),
                    ("category", "Juniors"),
                    ("total", "120"),
                    ("present", "110"),
                    ("absent", "6"),
                    ("onDuty", "2"),
                    ("leave", "1"),
                    ("notReported", "1"),
                ])
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);

        let records = storage.list_attendance_records().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, "Juniors");
    }

    #[actix_web::test]
    async fn test_missing_mode_is_rejected_without_insert() {
        let storage = memory_storage().await;
        let app = build_app!(ServiceMode::Class, storage);

        let mut payload = class_payload();
        payload.retain(|(k, _)| *k != "attendance_type");

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/submit_attendance")
                .set_form(payload)
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(storage.count_attendance_records().await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_non_positive_total_is_rejected_without_insert() {
        let storage = memory_storage().await;
        let app = build_app!(ServiceMode::Class, storage);

        let mut payload = class_payload();
        for (k, v) in payload.iter_mut() {
            if *k == "total" {
                *v = "0";
            }
        }

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/submit_attendance")
                .set_form(payload)
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(storage.count_attendance_records().await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_export_with_empty_store_returns_inline_page() {
        let storage = memory_storage().await;
        let app = build_app!(ServiceMode::Class, storage);

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/export").to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().get("Content-Disposition").is_none());

        let body = test::read_body(resp).await;
        assert!(String::from_utf8_lossy(&body).contains("No data to export!"));
    }

    #[actix_web::test]
    async fn test_submission_round_trips_into_export() {
        let storage = memory_storage().await;
        let app = build_app!(ServiceMode::Class, storage);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/submit_attendance")
                .set_form(class_payload())
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/export").to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        );
        let disposition = resp
            .headers()
            .get("Content-Disposition")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.contains("attachment; filename=\"attendance_report_"));
        assert!(disposition.ends_with(".xlsx\""));

        // XLSX 是 zip 容器，以 PK 开头
        let body = test::read_body(resp).await;
        assert_eq!(&body[..2], b"PK");
    }

    #[actix_web::test]
    async fn test_home_page_renders_mode_form() {
        let storage = memory_storage().await;
        let app = build_app!(ServiceMode::House, storage);

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let html = String::from_utf8_lossy(&body);
        assert!(html.contains(r#"name="house""#));
        assert!(html.contains(r#"action="/submit_attendance""#));
    }
}
