use std::sync::Arc;
use std::time::Duration;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::middleware::{Compress, DefaultHeaders};
use actix_web::{App, HttpServer, web};
use dotenv::dotenv;
use futures_util::future;
use human_panic::setup_panic;
use tracing::{debug, warn};

// 从 lib.rs 导入模块
use school_attendance_system::config::{AppConfig, DispatcherConfig, ServiceInstanceConfig};
use school_attendance_system::models::AppStartTime;
use school_attendance_system::models::attendance::entities::ServiceMode;
use school_attendance_system::routes;
use school_attendance_system::runtime::lifetime;
use school_attendance_system::services::dispatcher::DispatcherTargets;
use school_attendance_system::storage::Storage;
use school_attendance_system::utils::form_error_handler;

/// 构建一个考勤服务实例（house / class 各一份）
fn build_attendance_server(
    mode: ServiceMode,
    instance: &ServiceInstanceConfig,
    storage: Arc<dyn Storage>,
) -> std::io::Result<Server> {
    let config = AppConfig::get();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .wrap(Compress::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("Connection", "keep-alive"))
                    .add((
                        "Keep-Alive",
                        format!("timeout={}, max=1000", config.server.timeouts.keep_alive),
                    ))
                    .add(("Cache-Control", "no-cache, no-store, must-revalidate")),
            )
            .app_data(web::FormConfig::default().error_handler(form_error_handler)) // 设置表单错误处理器
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(mode))
            .app_data(web::PayloadConfig::new(
                config.server.limits.max_payload_size,
            )) // 设置最大请求体大小
            .configure(routes::configure_attendance_routes)
    })
    .keep_alive(Duration::from_secs(config.server.timeouts.keep_alive)) // 启用长连接
    .client_request_timeout(Duration::from_millis(config.server.timeouts.client_request)) // 客户端超时
    .client_disconnect_timeout(Duration::from_millis(config.server.timeouts.client_disconnect)) // 断连超时
    .workers(config.server.workers);

    let bind_address = instance.bind_address();
    warn!(
        "Starting {} attendance service at http://{}",
        mode, bind_address
    );
    Ok(server.bind(bind_address)?.run())
}

/// 构建调度入口
fn build_dispatcher_server(
    dispatcher: &DispatcherConfig,
    targets: DispatcherTargets,
) -> std::io::Result<Server> {
    let config = AppConfig::get();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .wrap(Compress::default())
            .wrap(
                DefaultHeaders::new().add(("Cache-Control", "no-cache, no-store, must-revalidate")),
            )
            .app_data(web::FormConfig::default().error_handler(form_error_handler))
            .app_data(web::Data::new(targets.clone()))
            .configure(routes::configure_dispatcher_routes)
    })
    .keep_alive(Duration::from_secs(config.server.timeouts.keep_alive))
    .client_request_timeout(Duration::from_millis(config.server.timeouts.client_request))
    .client_disconnect_timeout(Duration::from_millis(config.server.timeouts.client_disconnect))
    .workers(config.server.workers);

    let bind_address = dispatcher.bind_address();
    warn!("Starting dispatcher at http://{}", bind_address);
    Ok(server.bind(bind_address)?.run())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    // 记录程序启动时间
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    // 启动前预处理 //

    // 初始化配置
    setup_panic!();
    AppConfig::init().expect("Failed to initialize configuration");
    let config = AppConfig::get();

    // 初始化日志
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    // 打印信息
    warn!(
        "Starting pre-startup processing...
        Project: {}
        Version: {}
        Authors: {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS")
    );

    let startup = lifetime::startup::prepare_server_startup().await;

    let storage = startup.storage.clone();

    // 输出预处理时间
    debug!(
        "Pre-startup processing completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(app_start_time.start_datetime)
            .num_milliseconds()
    );

    // 预处理完成 //

    warn!(
        "Using {} CPU cores for each listener",
        config.server.workers
    );

    // 同一份考勤服务按模式实例化两次，外加调度入口
    let house_server =
        build_attendance_server(ServiceMode::House, &config.services.house, storage.clone())?;
    let class_server =
        build_attendance_server(ServiceMode::Class, &config.services.class, storage.clone())?;
    let dispatcher_server = build_dispatcher_server(
        &config.dispatcher,
        DispatcherTargets::from_config(&config.services),
    )?;

    tokio::select! {
        res = future::try_join3(house_server, class_server, dispatcher_server) => {
            res?;
        }
        _ = lifetime::shutdown::listen_for_shutdown() => {
            warn!("Graceful shutdown: all tasks completed");
        }
    }

    Ok(())
}
