use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 准备服务器启动的上下文
/// 初始化存储并运行数据库迁移
pub async fn prepare_server_startup() -> StartupContext {
    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    // 记录当前库中已有的考勤记录数
    match storage.count_attendance_records().await {
        Ok(count) => {
            debug!("Attendance store currently holds {} record(s)", count);
        }
        Err(e) => {
            warn!("Failed to count attendance records: {}", e);
        }
    }

    StartupContext { storage }
}
