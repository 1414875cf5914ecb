use serde::{Deserialize, Serialize};

/// 类别缺省哨兵值（班级模式或未填写时落库）
pub const CATEGORY_SENTINEL: &str = "N/A";

// 考勤服务模式
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ServiceMode {
    House, // 按学院（house）统计
    Class, // 按班级统计
}

impl ServiceMode {
    pub const HOUSE: &'static str = "house";
    pub const CLASS: &'static str = "class";

    /// 表单展示用名称
    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceMode::House => "House-wise Attendance",
            ServiceMode::Class => "Class-wise Attendance",
        }
    }

    /// house 模式额外携带 category 子类别
    pub fn uses_category(&self) -> bool {
        matches!(self, ServiceMode::House)
    }
}

impl<'de> Deserialize<'de> for ServiceMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            ServiceMode::HOUSE => Ok(ServiceMode::House),
            ServiceMode::CLASS => Ok(ServiceMode::Class),
            _ => Err(serde::de::Error::custom(format!(
                "无效的考勤模式: '{s}'. 支持的模式: house, class"
            ))),
        }
    }
}

impl std::fmt::Display for ServiceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceMode::House => write!(f, "{}", ServiceMode::HOUSE),
            ServiceMode::Class => write!(f, "{}", ServiceMode::CLASS),
        }
    }
}

impl std::str::FromStr for ServiceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "house" => Ok(ServiceMode::House),
            "class" => Ok(ServiceMode::Class),
            _ => Err(format!("Invalid attendance mode: {s}")),
        }
    }
}

// 考勤记录实体
//
// 记录创建后不可变：存储层只提供插入与全量读取，没有更新和删除。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    // 学院名或班级名
    pub house_or_class: String,
    // 子类别；班级模式固定为哨兵值 "N/A"
    pub category: String,
    pub total: i64,
    pub present: i64,
    pub absent: i64,
    pub on_duty: i64,
    pub leave: i64,
    pub not_reported: i64,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_mode_round_trip() {
        assert_eq!(ServiceMode::from_str("house").unwrap(), ServiceMode::House);
        assert_eq!(ServiceMode::from_str("class").unwrap(), ServiceMode::Class);
        assert_eq!(ServiceMode::House.to_string(), "house");
        assert_eq!(ServiceMode::Class.to_string(), "class");
    }

    #[test]
    fn test_mode_rejects_unknown() {
        assert!(ServiceMode::from_str("section").is_err());
        assert!(ServiceMode::from_str("").is_err());
    }

    #[test]
    fn test_category_usage() {
        assert!(ServiceMode::House.uses_category());
        assert!(!ServiceMode::Class.uses_category());
    }
}
