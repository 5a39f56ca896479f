//! 内容再加工后端客户端
//!
//! 封装与后端两个接口的所有交互：
//! - POST /repurpose  提交文件或 YouTube 链接，换取任务 ID
//! - GET  /jobs/{id}  查询任务状态快照
//!
//! 两个接口的响应都经 serde 显式解码，解码失败是独立的错误种类

use crate::config::Config;
use crate::error::{AppError, AppResult, FileError, PollError, SubmissionError};
use crate::models::{ErrorDetail, JobSnapshot, SubmitResponse};
use reqwest::multipart::{Form, Part};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// 标题留空时的默认值
pub const DEFAULT_TITLE: &str = "Educational Content";

/// 待提交的输入
///
/// 构造前必须先通过 InputValidator 对应模式的校验
#[derive(Debug, Clone)]
pub enum SubmitInput {
    /// 本地文件
    File { path: PathBuf, file_name: String },
    /// YouTube 链接
    Youtube { url: String },
}

impl SubmitInput {
    /// 后端约定的 content_type 取值
    pub fn content_type(&self) -> &'static str {
        match self {
            SubmitInput::File { .. } => "file",
            SubmitInput::Youtube { .. } => "youtube",
        }
    }
}

/// 内容再加工后端客户端
pub struct RepurposeClient {
    http: reqwest::Client,
    base_url: String,
}

impl RepurposeClient {
    /// 创建新的后端客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::Other(format!("初始化 HTTP 客户端失败: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 提交内容，创建处理任务
    ///
    /// # 参数
    /// - `input`: 已通过校验的文件或链接
    /// - `title`: 用户标题，留空时使用默认标题
    ///
    /// # 返回
    /// 返回后端分配的任务 ID。任何失败都不做自动重试，
    /// 由用户决定是否用同样的输入再次提交
    pub async fn submit(&self, input: &SubmitInput, title: &str) -> AppResult<String> {
        let endpoint = format!("{}/repurpose", self.base_url);

        let title = if title.trim().is_empty() {
            DEFAULT_TITLE
        } else {
            title.trim()
        };

        let mut form = Form::new()
            .text("title", title.to_string())
            .text("content_type", input.content_type().to_string());

        match input {
            SubmitInput::File { path, file_name } => {
                let bytes = tokio::fs::read(path).await.map_err(|e| FileError::ReadFailed {
                    path: path.display().to_string(),
                    source: Box::new(e),
                })?;
                debug!("上传文件 {} ({} 字节)", file_name, bytes.len());
                form = form.part("file", Part::bytes(bytes).file_name(file_name.clone()));
            }
            SubmitInput::Youtube { url } => {
                form = form.text("youtube_url", url.clone());
            }
        }

        let response = self
            .http
            .post(&endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| SubmissionError::RequestFailed {
                endpoint: endpoint.clone(),
                source: Box::new(e),
            })?;

        let status = response.status();
        if !status.is_success() {
            // 优先使用后端给出的错误详情，解析不出来就报状态码
            let detail = response
                .json::<ErrorDetail>()
                .await
                .ok()
                .and_then(|d| d.detail);
            return Err(SubmissionError::BadResponse {
                endpoint,
                status: status.as_u16(),
                detail,
            }
            .into());
        }

        let body: SubmitResponse =
            response
                .json()
                .await
                .map_err(|e| SubmissionError::DecodeFailed {
                    endpoint,
                    source: Box::new(e),
                })?;

        debug!("任务创建成功: {}", body.job_id);

        Ok(body.job_id)
    }

    /// 查询一次任务状态
    ///
    /// 传输失败、非 2xx、解码失败都会让调用方终止轮询
    pub async fn fetch_status(&self, job_id: &str) -> AppResult<JobSnapshot> {
        let endpoint = format!("{}/jobs/{}", self.base_url, job_id);

        let response = self
            .http
            .get(&endpoint)
            .send()
            .await
            .map_err(|e| PollError::RequestFailed {
                job_id: job_id.to_string(),
                source: Box::new(e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PollError::BadResponse {
                job_id: job_id.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        let snapshot: JobSnapshot =
            response.json().await.map_err(|e| PollError::DecodeFailed {
                job_id: job_id.to_string(),
                source: Box::new(e),
            })?;

        Ok(snapshot)
    }
}
