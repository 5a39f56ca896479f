use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 输入校验错误（提交前拦截）
    Validation(ValidationError),
    /// 提交任务错误（/repurpose）
    Submission(SubmissionError),
    /// 轮询任务状态错误（/jobs/{id}）
    Poll(PollError),
    /// 本地文件操作错误
    File(FileError),
    /// 其他错误（用于包装第三方库错误）
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(e) => write!(f, "校验错误: {}", e),
            AppError::Submission(e) => write!(f, "提交错误: {}", e),
            AppError::Poll(e) => write!(f, "轮询错误: {}", e),
            AppError::File(e) => write!(f, "文件错误: {}", e),
            AppError::Other(msg) => write!(f, "错误: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Validation(e) => Some(e),
            AppError::Submission(e) => Some(e),
            AppError::Poll(e) => Some(e),
            AppError::File(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

/// 输入校验错误
///
/// 出现此类错误时提交从未发起，用户修正输入后可直接重试
#[derive(Debug)]
pub enum ValidationError {
    /// 文件超过大小限制
    FileTooLarge {
        size_bytes: u64,
        limit_bytes: u64,
    },
    /// 不支持的文件扩展名
    UnsupportedExtension {
        extension: String,
        supported: String,
    },
    /// 无效的 YouTube 链接
    InvalidYoutubeUrl {
        url: String,
    },
    /// 未提供任何输入
    MissingInput,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FileTooLarge { size_bytes, limit_bytes } => {
                write!(
                    f,
                    "文件大小 {:.2} MB 超过 {} MB 限制，请选择更小的文件",
                    *size_bytes as f64 / 1024.0 / 1024.0,
                    limit_bytes / 1024 / 1024
                )
            }
            ValidationError::UnsupportedExtension { extension, supported } => {
                write!(
                    f,
                    "不支持的文件类型 .{}，支持的类型: {}",
                    extension, supported
                )
            }
            ValidationError::InvalidYoutubeUrl { url } => {
                write!(f, "无效的 YouTube 链接: {}", url)
            }
            ValidationError::MissingInput => {
                write!(f, "请提供待处理的文件路径或 YouTube 链接")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// 提交任务错误
///
/// 出现此类错误时任务视为未创建，不做自动重试
#[derive(Debug)]
pub enum SubmissionError {
    /// 网络请求失败（未收到响应）
    RequestFailed {
        endpoint: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 后端返回非 2xx 响应
    BadResponse {
        endpoint: String,
        status: u16,
        detail: Option<String>,
    },
    /// 响应体解析失败
    DecodeFailed {
        endpoint: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::RequestFailed { endpoint, source } => {
                write!(f, "启动处理失败 ({}): {}", endpoint, source)
            }
            SubmissionError::BadResponse { endpoint, status, detail } => match detail {
                Some(detail) => write!(f, "后端拒绝提交 ({}): {}", endpoint, detail),
                None => write!(f, "后端拒绝提交 ({}): HTTP {}", endpoint, status),
            },
            SubmissionError::DecodeFailed { endpoint, source } => {
                write!(f, "提交响应解析失败 ({}): {}", endpoint, source)
            }
        }
    }
}

impl std::error::Error for SubmissionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SubmissionError::RequestFailed { source, .. }
            | SubmissionError::DecodeFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            SubmissionError::BadResponse { .. } => None,
        }
    }
}

/// 轮询任务状态错误
///
/// 注意：任务本身进入 failed 状态不属于轮询错误，
/// 那是一次成功的查询，其 error 文本会原样展示
#[derive(Debug)]
pub enum PollError {
    /// 网络请求失败（未收到响应）
    RequestFailed {
        job_id: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 后端返回非 2xx 响应
    BadResponse {
        job_id: String,
        status: u16,
    },
    /// 状态响应解析失败
    DecodeFailed {
        job_id: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 任务已完成但缺少结果数据
    MissingResult {
        job_id: String,
    },
}

impl fmt::Display for PollError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PollError::RequestFailed { job_id, source } => {
                write!(f, "查询任务状态失败 (任务 {}): {}", job_id, source)
            }
            PollError::BadResponse { job_id, status } => {
                write!(f, "查询任务状态失败 (任务 {}): HTTP {}", job_id, status)
            }
            PollError::DecodeFailed { job_id, source } => {
                write!(f, "任务状态解析失败 (任务 {}): {}", job_id, source)
            }
            PollError::MissingResult { job_id } => {
                write!(f, "任务 {} 已完成但后端未返回结果数据", job_id)
            }
        }
    }
}

impl std::error::Error for PollError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PollError::RequestFailed { source, .. }
            | PollError::DecodeFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 本地文件操作错误
#[derive(Debug)]
pub enum FileError {
    /// 文件不存在
    NotFound {
        path: String,
    },
    /// 读取文件失败
    ReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 写入文件失败
    WriteFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::NotFound { path } => write!(f, "文件不存在: {}", path),
            FileError::ReadFailed { path, source } => {
                write!(f, "读取文件失败 ({}): {}", path, source)
            }
            FileError::WriteFailed { path, source } => {
                write!(f, "写入文件失败 ({}): {}", path, source)
            }
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::ReadFailed { source, .. } | FileError::WriteFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            FileError::NotFound { .. } => None,
        }
    }
}

// ========== 从子错误类型转换 ==========

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl From<SubmissionError> for AppError {
    fn from(err: SubmissionError) -> Self {
        AppError::Submission(err)
    }
}

impl From<PollError> for AppError {
    fn from(err: PollError) -> Self {
        AppError::Poll(err)
    }
}

impl From<FileError> for AppError {
    fn from(err: FileError) -> Self {
        AppError::File(err)
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
