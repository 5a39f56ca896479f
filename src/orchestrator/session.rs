//! 学习会话控制器 - 编排层
//!
//! 把一次会话的全部状态（任务、结果、语言、交互）收进一个结构，
//! 只通过明确定义的迁移操作修改：
//! start_job → apply_snapshot → select_language / record_answer / toggle_flip → reset
//!
//! 每次 start_job / reset 都会递增代次计数器，
//! 轮询快照必须携带匹配的代次才会生效，
//! 因此被用户抛弃的旧任务即使还有在途轮询也改不了当前状态

use crate::models::{JobSnapshot, JobStatus, ResultBundle};
use crate::services::assessment::{FlashcardState, QuizReport, QuizState};
use crate::services::localizer::{LocalizationResolver, LocalizedView};

/// 会话所处阶段
#[derive(Debug, Clone)]
pub enum SessionPhase {
    /// 尚未提交任务
    Idle,
    /// 任务处理中
    Processing { job_id: String, progress: u8 },
    /// 任务完成，学习包可用
    Completed { bundle: ResultBundle },
    /// 任务失败，error 为后端原文
    Failed { error: String },
}

/// 学习会话
pub struct StudySession {
    /// 代次计数器，过期轮询的防线
    generation: u64,
    phase: SessionPhase,
    /// 当前展示语言
    language: String,
    quiz: QuizState,
    cards: FlashcardState,
}

impl StudySession {
    pub fn new() -> Self {
        Self {
            generation: 0,
            phase: SessionPhase::Idle,
            language: "en".to_string(),
            quiz: QuizState::new(),
            cards: FlashcardState::new(),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// 开始跟踪一个新任务
    ///
    /// 抛弃旧任务（如果有），清空全部交互状态，语言回到英文
    ///
    /// # 返回
    /// 返回本任务的代次，轮询方需原样带回
    pub fn start_job(&mut self, job_id: impl Into<String>) -> u64 {
        self.generation += 1;
        self.phase = SessionPhase::Processing {
            job_id: job_id.into(),
            progress: 0,
        };
        self.language = "en".to_string();
        self.quiz.clear();
        self.cards.clear();
        self.generation
    }

    /// 应用一次轮询快照
    ///
    /// 代次不匹配（任务已被抛弃）或任务已到终态时快照被忽略
    ///
    /// # 返回
    /// 返回快照是否生效
    pub fn apply_snapshot(&mut self, generation: u64, snapshot: JobSnapshot) -> bool {
        if generation != self.generation {
            return false;
        }

        // 终态不可再变
        if !matches!(self.phase, SessionPhase::Processing { .. }) {
            return false;
        }

        match snapshot.status {
            JobStatus::Processing => {
                if let SessionPhase::Processing { progress, .. } = &mut self.phase {
                    *progress = snapshot.progress.min(100);
                }
                true
            }
            JobStatus::Completed => match snapshot.result {
                Some(bundle) => {
                    self.phase = SessionPhase::Completed { bundle };
                    true
                }
                // 缺结果的 completed 快照由轮询方先行报错，这里不接受
                None => false,
            },
            JobStatus::Failed => {
                self.phase = SessionPhase::Failed {
                    error: snapshot
                        .error
                        .unwrap_or_else(|| "后端未提供失败原因".to_string()),
                };
                true
            }
        }
    }

    /// 切换展示语言
    ///
    /// 不同语言下同一索引可能对应不同题目，因此交互状态一并清空
    pub fn select_language(&mut self, language: &str) {
        if language == self.language {
            return;
        }
        self.language = language.to_string();
        self.quiz.clear();
        self.cards.clear();
    }

    /// 当前语言下的内容视图，任务完成后才有
    pub fn view(&self) -> Option<LocalizedView<'_>> {
        match &self.phase {
            SessionPhase::Completed { bundle } => {
                Some(LocalizationResolver::resolve(bundle, &self.language))
            }
            _ => None,
        }
    }

    /// 记录答题
    pub fn record_answer(&mut self, index: usize, letter: impl Into<String>) {
        self.quiz.record_answer(index, letter);
    }

    /// 翻转记忆卡
    pub fn toggle_flip(&mut self, index: usize) -> bool {
        self.cards.toggle_flip(index)
    }

    pub fn quiz(&self) -> &QuizState {
        &self.quiz
    }

    pub fn cards(&self) -> &FlashcardState {
        &self.cards
    }

    /// 当前视图的答题成绩
    pub fn quiz_report(&self) -> Option<QuizReport> {
        self.view().map(|view| self.quiz.report(view.mcqs))
    }

    /// 当前视图的记忆卡浏览完成度
    pub fn flashcard_completion(&self) -> Option<u32> {
        self.view()
            .map(|view| self.cards.completion_percent(view.flashcards.len()))
    }

    /// 回到初始状态，同样会使旧任务的在途轮询失效
    pub fn reset(&mut self) {
        self.generation += 1;
        self.phase = SessionPhase::Idle;
        self.language = "en".to_string();
        self.quiz.clear();
        self.cards.clear();
    }
}

impl Default for StudySession {
    fn default() -> Self {
        Self::new()
    }
}
