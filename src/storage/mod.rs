use std::sync::Arc;

use crate::errors::Result;
use crate::models::attendance::{entities::AttendanceRecord, requests::CreateAttendanceRecord};

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 考勤记录管理方法
    // 插入一条考勤记录（单行原子插入）
    async fn create_attendance_record(
        &self,
        record: CreateAttendanceRecord,
    ) -> Result<AttendanceRecord>;
    // 按存储顺序读取全部考勤记录
    async fn list_attendance_records(&self) -> Result<Vec<AttendanceRecord>>;
    // 统计考勤记录数
    async fn count_attendance_records(&self) -> Result<u64>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
