//! 任务上下文
//!
//! 封装"我正在跟踪哪个任务、属于哪个代次"这一信息

use std::fmt::Display;

/// 任务上下文
#[derive(Debug, Clone)]
pub struct JobCtx {
    /// 后端分配的任务 ID
    pub job_id: String,

    /// 会话代次，开始跟踪时由 StudySession 发放，
    /// 轮询快照必须带回同一代次才会被接受
    pub generation: u64,

    /// 用户标题（仅用于日志与导出文件名）
    pub title: String,
}

impl JobCtx {
    /// 创建新的任务上下文
    pub fn new(job_id: String, generation: u64, title: String) -> Self {
        Self {
            job_id,
            generation,
            title,
        }
    }
}

impl Display for JobCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[任务 {}]", self.job_id)
    }
}
