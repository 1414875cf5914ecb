use serde::Deserialize;

// 考勤提交表单（来自 HTTP 请求的原始字段映射）
//
// 所有字段都按 Option 接收，缺失与非法值统一交给 utils::validate 判定，
// 保证校验顺序与错误信息可控。
#[derive(Debug, Default, Deserialize)]
pub struct AttendanceForm {
    pub attendance_type: Option<String>,
    // house 模式字段
    pub house: Option<String>,
    pub category: Option<String>,
    // class 模式字段
    pub class: Option<String>,
    // 六个数值字段
    pub total: Option<String>,
    pub present: Option<String>,
    pub absent: Option<String>,
    #[serde(rename = "onDuty")]
    pub on_duty: Option<String>,
    pub leave: Option<String>,
    #[serde(rename = "notReported")]
    pub not_reported: Option<String>,
}

// 校验通过后的新记录（id 与 created_at 由存储层分配）
#[derive(Debug, Clone, PartialEq)]
pub struct CreateAttendanceRecord {
    pub house_or_class: String,
    pub category: String,
    pub total: i64,
    pub present: i64,
    pub absent: i64,
    pub on_duty: i64,
    pub leave: i64,
    pub not_reported: i64,
}
