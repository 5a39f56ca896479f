//! # Repurpose Study Client
//!
//! 内容再加工学习包客户端：把文件或 YouTube 链接交给后端异步处理，
//! 跟踪任务直到拿到学习包（摘要、要点、选择题、记忆卡），
//! 再提供多语言内容解析、答题 / 记忆卡交互状态和导出落盘
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 封装与后端两个接口的全部交互
//! - `RepurposeClient` - 提交任务、查询状态
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，互不依赖
//! - `InputValidator` - 提交前校验能力（纯函数）
//! - `LocalizationResolver` - 按语言取内容能力（纯投影）
//! - `QuizState` / `FlashcardState` - 交互状态能力
//! - `ExportWriter` - 导出落盘能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个任务"的完整跟踪流程
//! - `JobCtx` - 上下文封装（job_id + 代次）
//! - `JobFlow` - 轮询编排（查询 → 等待 → 再查询，直到终态）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/session` - 会话控制器，持有全部状态，
//!   只通过明确的迁移操作修改，代次计数器拦截过期轮询
//! - `app` - 驱动完整流程（校验 → 提交 → 轮询 → 展示 → 导出）

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use clients::{RepurposeClient, SubmitInput};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Flashcard, JobSnapshot, JobStatus, Mcq, ResultBundle};
pub use orchestrator::{SessionPhase, StudySession};
pub use services::{
    ExportWriter, FlashcardState, InputValidator, LocalizationResolver, QuizState,
};
pub use workflow::{JobCtx, JobFlow, JobOutcome, StatusSource};
