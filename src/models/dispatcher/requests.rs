use serde::Deserialize;

// 调度入口的模式选择表单
#[derive(Debug, Default, Deserialize)]
pub struct ModeSelectionForm {
    pub attendance_type: Option<String>,
}
