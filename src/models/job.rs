//! 任务状态数据模型
//!
//! 对应后端 /repurpose 与 /jobs/{id} 两个接口的响应

use crate::models::bundle::ResultBundle;
use serde::{Deserialize, Serialize};

/// 任务状态
///
/// processing 是唯一的非终态，任务一旦离开 processing 便不再变化
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Processing,
    Completed,
    Failed,
}

impl JobStatus {
    /// 是否为终态（completed 或 failed）
    pub fn is_terminal(&self) -> bool {
        !matches!(self, JobStatus::Processing)
    }
}

/// 一次状态查询返回的任务快照
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSnapshot {
    pub job_id: String,
    pub status: JobStatus,
    /// 处理进度 0-100，仅在 processing 期间有展示意义，
    /// 后端数值可信，客户端不校验单调性
    #[serde(default)]
    pub progress: u8,
    /// 仅在 completed 时存在
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ResultBundle>,
    /// 仅在 failed 时存在，原样展示给用户
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// /repurpose 成功响应
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponse {
    pub job_id: String,
}

/// 非 2xx 响应可能携带的错误详情
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<String>,
}
