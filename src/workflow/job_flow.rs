//! 任务轮询流程 - 流程层
//!
//! 核心职责：定义"一个任务"从创建到终态的完整跟踪流程
//!
//! 状态机：processing 是唯一非终态
//! 1. 查询一次状态
//! 2. processing → 记录进度，固定间隔后再查（串行链式，绝不并行）
//! 3. completed / failed → 永久停止
//!
//! 查询本身失败（传输 / HTTP / 解码）立即终止轮询并上报，
//! 与任务进入 failed 状态（一次成功的查询）是两回事

use crate::clients::RepurposeClient;
use crate::config::Config;
use crate::error::{AppResult, PollError};
use crate::models::{JobSnapshot, JobStatus};
use crate::orchestrator::session::StudySession;
use crate::workflow::job_ctx::JobCtx;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

/// 状态查询能力的接缝，便于在测试中注入脚本化的状态序列
#[allow(async_fn_in_trait)]
pub trait StatusSource {
    /// 查询一次任务状态快照
    async fn fetch_status(&self, job_id: &str) -> AppResult<JobSnapshot>;
}

impl StatusSource for RepurposeClient {
    async fn fetch_status(&self, job_id: &str) -> AppResult<JobSnapshot> {
        RepurposeClient::fetch_status(self, job_id).await
    }
}

/// 一个任务跟踪到头的结局
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    /// 任务完成，学习包已写入会话
    Completed,
    /// 任务失败，携带后端原文错误信息
    Failed(String),
    /// 任务在轮询期间被用户抛弃（会话代次已更替）
    Abandoned,
}

/// 任务轮询流程
pub struct JobFlow {
    poll_interval: Duration,
}

impl JobFlow {
    /// 创建新的轮询流程
    pub fn new(config: &Config) -> Self {
        Self {
            poll_interval: Duration::from_millis(config.poll_interval_ms),
        }
    }

    /// 跟踪任务直到终态
    ///
    /// 每次查询成功返回后才安排下一次，间隔固定，
    /// 因此同一任务的快照必然按请求顺序处理。
    /// 没有最大轮询次数，也没有总超时——
    /// 永远停在 processing 的任务会一直轮询到会话结束
    pub async fn poll_until_terminal<S: StatusSource>(
        &self,
        source: &S,
        ctx: &JobCtx,
        session: &mut StudySession,
    ) -> AppResult<JobOutcome> {
        loop {
            let snapshot = source.fetch_status(&ctx.job_id).await?;

            // 代次检查先于一切内容检查：被抛弃任务的快照连格式都不看
            if ctx.generation != session.generation() {
                info!("{} 任务已被抛弃，停止轮询", ctx);
                return Ok(JobOutcome::Abandoned);
            }

            let status = snapshot.status;
            let progress = snapshot.progress;
            let error_text = snapshot.error.clone();

            // completed 必须带结果，缺了按解码问题处理
            if status == JobStatus::Completed && snapshot.result.is_none() {
                return Err(PollError::MissingResult {
                    job_id: ctx.job_id.clone(),
                }
                .into());
            }

            if !session.apply_snapshot(ctx.generation, snapshot) {
                info!("{} 任务已被抛弃，停止轮询", ctx);
                return Ok(JobOutcome::Abandoned);
            }

            match status {
                JobStatus::Processing => {
                    info!(
                        "{} ⏳ 处理中 {}% - {}",
                        ctx,
                        progress,
                        stage_label(progress)
                    );
                    sleep(self.poll_interval).await;
                }
                JobStatus::Completed => {
                    info!("{} ✅ 处理完成", ctx);
                    return Ok(JobOutcome::Completed);
                }
                JobStatus::Failed => {
                    let error =
                        error_text.unwrap_or_else(|| "后端未提供失败原因".to_string());
                    warn!("{} ❌ 处理失败: {}", ctx, error);
                    return Ok(JobOutcome::Failed(error));
                }
            }
        }
    }
}

/// 进度对应的阶段说明，仅用于展示
pub fn stage_label(progress: u8) -> &'static str {
    match progress {
        0..=14 => "下载内容",
        15..=34 => "提取信息",
        35..=54 => "生成摘要",
        55..=74 => "生成题目",
        75..=89 => "制作记忆卡",
        _ => "收尾中",
    }
}
