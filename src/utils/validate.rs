//! 考勤提交校验与归一化
//!
//! 纯函数：只依赖表单输入，不触碰存储。规则按固定顺序判定，
//! 返回第一条被违反的规则。

use std::str::FromStr;

use crate::models::ErrorCode;
use crate::models::attendance::entities::{CATEGORY_SENTINEL, ServiceMode};
use crate::models::attendance::requests::{AttendanceForm, CreateAttendanceRecord};

/// 校验失败的具体规则
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// 考勤模式缺失或非法
    MissingMode,
    /// house 模式缺少 house 或 category
    MissingHouseFields,
    /// class 模式缺少 class
    MissingClassField,
    /// 数值字段缺失或无法解析为整数
    MissingOrInvalidNumeric(&'static str),
    /// 数值超出允许范围
    InvalidNumericRange(&'static str),
}

impl ValidationError {
    /// 对应的业务错误码
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ValidationError::MissingMode => ErrorCode::MissingMode,
            ValidationError::MissingHouseFields => ErrorCode::MissingHouseFields,
            ValidationError::MissingClassField => ErrorCode::MissingClassField,
            ValidationError::MissingOrInvalidNumeric(_) => ErrorCode::MissingOrInvalidNumeric,
            ValidationError::InvalidNumericRange(_) => ErrorCode::InvalidNumericRange,
        }
    }

    /// 面向调用方的错误信息
    pub fn message(&self) -> String {
        match self {
            ValidationError::MissingMode => "Attendance type is required".to_string(),
            ValidationError::MissingHouseFields => {
                "House and Category are required for house-wise attendance".to_string()
            }
            ValidationError::MissingClassField => {
                "Class is required for class-wise attendance".to_string()
            }
            ValidationError::MissingOrInvalidNumeric(field) => {
                format!("Field '{field}' is required and must be an integer")
            }
            ValidationError::InvalidNumericRange(field) => {
                format!("Invalid attendance numbers: '{field}' is out of range")
            }
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// 取出非空白字段值（空白串视同缺失）
fn non_empty(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// 解析单个数值字段
fn parse_numeric_field(
    value: &Option<String>,
    field: &'static str,
) -> Result<i64, ValidationError> {
    non_empty(value)
        .and_then(|s| i64::from_str(s).ok())
        .ok_or(ValidationError::MissingOrInvalidNumeric(field))
}

/// 校验并归一化一次考勤提交
///
/// 规则顺序：
/// 1. attendance_type 必须是 house/class
/// 2. house 模式要求 house + category
/// 3. class 模式要求 class
/// 4. 六个数值字段全部可解析为整数
/// 5. total > 0，其余字段 >= 0
/// 6. category 缺省归一化为 "N/A"
pub fn validate_submission(
    form: &AttendanceForm,
) -> Result<CreateAttendanceRecord, ValidationError> {
    let mode = non_empty(&form.attendance_type)
        .and_then(|s| ServiceMode::from_str(s).ok())
        .ok_or(ValidationError::MissingMode)?;

    let (house_or_class, category) = match mode {
        ServiceMode::House => {
            let house = non_empty(&form.house).ok_or(ValidationError::MissingHouseFields)?;
            let category = non_empty(&form.category).ok_or(ValidationError::MissingHouseFields)?;
            (house.to_string(), category.to_string())
        }
        ServiceMode::Class => {
            let class = non_empty(&form.class).ok_or(ValidationError::MissingClassField)?;
            (class.to_string(), CATEGORY_SENTINEL.to_string())
        }
    };

    let total = parse_numeric_field(&form.total, "total")?;
    let present = parse_numeric_field(&form.present, "present")?;
    let absent = parse_numeric_field(&form.absent, "absent")?;
    let on_duty = parse_numeric_field(&form.on_duty, "onDuty")?;
    let leave = parse_numeric_field(&form.leave, "leave")?;
    let not_reported = parse_numeric_field(&form.not_reported, "notReported")?;

    if total <= 0 {
        return Err(ValidationError::InvalidNumericRange("total"));
    }
    for (field, value) in [
        ("present", present),
        ("absent", absent),
        ("onDuty", on_duty),
        ("leave", leave),
        ("notReported", not_reported),
    ] {
        if value < 0 {
            return Err(ValidationError::InvalidNumericRange(field));
        }
    }

    // 注意：五个状态计数之和是否等于 total 故意不做校验，
    // 允许只上报部分状态的提交。
    Ok(CreateAttendanceRecord {
        house_or_class,
        category,
        total,
        present,
        absent,
        on_duty,
        leave,
        not_reported,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class_form() -> AttendanceForm {
        AttendanceForm {
            attendance_type: Some("class".into()),
            class: Some("10A".into()),
            total: Some("40".into()),
            present: Some("35".into()),
            absent: Some("3".into()),
            on_duty: Some("1".into()),
            leave: Some("1".into()),
            not_reported: Some("0".into()),
            ..Default::default()
        }
    }

    fn house_form() -> AttendanceForm {
        AttendanceForm {
            attendance_type: Some("house".into()),
            house: Some("Red House".into()),
            category: Some("Juniors".into()),
            total: Some("120".into()),
            present: Some("110".into()),
            absent: Some("6".into()),
            on_duty: Some("2".into()),
            leave: Some("1".into()),
            not_reported: Some("1".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_class_submission_normalizes_category() {
        let record = validate_submission(&class_form()).unwrap();
        assert_eq!(record.house_or_class, "10A");
        assert_eq!(record.category, "N/A");
        assert_eq!(record.total, 40);
        assert_eq!(record.not_reported, 0);
    }

    #[test]
    fn test_valid_house_submission_keeps_category() {
        let record = validate_submission(&house_form()).unwrap();
        assert_eq!(record.house_or_class, "Red House");
        assert_eq!(record.category, "Juniors");
    }

    #[test]
    fn test_missing_mode() {
        let mut form = class_form();
        form.attendance_type = None;
        assert_eq!(
            validate_submission(&form).unwrap_err(),
            ValidationError::MissingMode
        );

        form.attendance_type = Some("section".into());
        assert_eq!(
            validate_submission(&form).unwrap_err(),
            ValidationError::MissingMode
        );
    }

    #[test]
    fn test_house_mode_requires_house_and_category() {
        let mut form = house_form();
        form.category = None;
        assert_eq!(
            validate_submission(&form).unwrap_err(),
            ValidationError::MissingHouseFields
        );

        let mut form = house_form();
        form.house = Some("   ".into());
        assert_eq!(
            validate_submission(&form).unwrap_err(),
            ValidationError::MissingHouseFields
        );
    }

    #[test]
    fn test_class_mode_requires_class() {
        let mut form = class_form();
        form.class = Some(String::new());
        assert_eq!(
            validate_submission(&form).unwrap_err(),
            ValidationError::MissingClassField
        );
    }

    #[test]
    fn test_numeric_fields_must_parse() {
        let mut form = class_form();
        form.present = None;
        assert_eq!(
            validate_submission(&form).unwrap_err(),
            ValidationError::MissingOrInvalidNumeric("present")
        );

        let mut form = class_form();
        form.on_duty = Some("two".into());
        assert_eq!(
            validate_submission(&form).unwrap_err(),
            ValidationError::MissingOrInvalidNumeric("onDuty")
        );
    }

    #[test]
    fn test_total_must_be_positive() {
        let mut form = class_form();
        form.total = Some("0".into());
        assert_eq!(
            validate_submission(&form).unwrap_err(),
            ValidationError::InvalidNumericRange("total")
        );

        form.total = Some("-5".into());
        assert_eq!(
            validate_submission(&form).unwrap_err(),
            ValidationError::InvalidNumericRange("total")
        );
    }

    #[test]
    fn test_status_counts_must_be_non_negative() {
        let mut form = class_form();
        form.absent = Some("-1".into());
        assert_eq!(
            validate_submission(&form).unwrap_err(),
            ValidationError::InvalidNumericRange("absent")
        );
    }

    #[test]
    fn test_sum_mismatch_is_accepted() {
        // 五个状态计数之和与 total 不一致时仍然放行
        let mut form = class_form();
        form.present = Some("1".into());
        assert!(validate_submission(&form).is_ok());
    }

    #[test]
    fn test_mode_checked_before_identifiers_and_numerics() {
        let form = AttendanceForm::default();
        assert_eq!(
            validate_submission(&form).unwrap_err(),
            ValidationError::MissingMode
        );

        // 标识字段先于数值字段判定
        let form = AttendanceForm {
            attendance_type: Some("class".into()),
            ..Default::default()
        };
        assert_eq!(
            validate_submission(&form).unwrap_err(),
            ValidationError::MissingClassField
        );
    }

    #[test]
    fn test_error_code_mapping() {
        assert_eq!(
            ValidationError::MissingMode.error_code(),
            ErrorCode::MissingMode
        );
        assert_eq!(
            ValidationError::InvalidNumericRange("total").error_code(),
            ErrorCode::InvalidNumericRange
        );
    }
}
