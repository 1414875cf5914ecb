//! 考勤记录存储操作

use super::SeaOrmStorage;
use crate::entity::attendance_records::{ActiveModel, Column, Entity as AttendanceRecords};
use crate::errors::{AttendanceError, Result};
use crate::models::attendance::{entities::AttendanceRecord, requests::CreateAttendanceRecord};
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 插入一条考勤记录
    ///
    /// 单行插入，由数据库保证原子性；失败时不会留下半行数据。
    pub async fn create_attendance_record_impl(
        &self,
        record: CreateAttendanceRecord,
    ) -> Result<AttendanceRecord> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            house_or_class: Set(record.house_or_class),
            category: Set(record.category),
            total: Set(record.total),
            present: Set(record.present),
            absent: Set(record.absent),
            on_duty: Set(record.on_duty),
            leave: Set(record.leave),
            not_reported: Set(record.not_reported),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("插入考勤记录失败: {e}")))?;

        Ok(result.into_record())
    }

    /// 按主键顺序读取全部考勤记录
    pub async fn list_attendance_records_impl(&self) -> Result<Vec<AttendanceRecord>> {
        let records = AttendanceRecords::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("查询考勤记录失败: {e}")))?;

        Ok(records.into_iter().map(|m| m.into_record()).collect())
    }

    /// 统计考勤记录数
    pub async fn count_attendance_records_impl(&self) -> Result<u64> {
        AttendanceRecords::find()
            .count(&self.db)
            .await
            .map_err(|e| AttendanceError::database_operation(format!("统计考勤记录失败: {e}")))
    }
}
