//! 考勤记录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attendance_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub house_or_class: String,
    pub category: String,
    pub total: i64,
    pub present: i64,
    pub absent: i64,
    pub on_duty: i64,
    pub leave: i64,
    pub not_reported: i64,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_record(self) -> crate::models::attendance::entities::AttendanceRecord {
        use crate::models::attendance::entities::AttendanceRecord;
        use chrono::{DateTime, Utc};

        AttendanceRecord {
            id: self.id,
            house_or_class: self.house_or_class,
            category: self.category,
            total: self.total,
            present: self.present,
            absent: self.absent,
            on_duty: self.on_duty,
            leave: self.leave,
            not_reported: self.not_reported,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
