//! 应用主结构 - 编排层
//!
//! 把校验 → 提交 → 轮询 → 展示 → 导出串成完整流程，
//! 所有会话状态都收在 StudySession 里，App 只负责驱动

use crate::clients::{RepurposeClient, SubmitInput};
use crate::config::Config;
use crate::error::{AppError, ValidationError};
use crate::orchestrator::session::{SessionPhase, StudySession};
use crate::services::{ExportWriter, InputValidator, YOUTUBE_DEFAULT_TITLE};
use crate::utils::logging;
use crate::workflow::{JobCtx, JobFlow, JobOutcome};
use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    validator: InputValidator,
    client: RepurposeClient,
    flow: JobFlow,
    exporter: ExportWriter,
    session: StudySession,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        logging::log_startup(&config);

        let client = RepurposeClient::new(&config)?;
        let flow = JobFlow::new(&config);
        let exporter = ExportWriter::new(&config.output_dir);

        Ok(Self {
            config,
            validator: InputValidator::new(),
            client,
            flow,
            exporter,
            session: StudySession::new(),
        })
    }

    /// 运行完整流程
    ///
    /// # 参数
    /// - `raw_input`: 文件路径或 YouTube 链接
    /// - `title_override`: 用户指定的标题，缺省时自动派生
    pub async fn run(&mut self, raw_input: &str, title_override: Option<String>) -> Result<()> {
        // 1. 校验输入，派生默认标题
        let (input, derived_title) = self.validate_input(raw_input)?;
        let title = title_override.unwrap_or(derived_title);

        // 2. 提交任务
        info!("📤 正在提交任务: {}", logging::truncate_text(&title, 60));
        let job_id = self.client.submit(&input, &title).await?;
        info!("✓ 任务已创建: {}", job_id);

        // 3. 跟踪任务直到终态
        let generation = self.session.start_job(job_id.clone());
        let ctx = JobCtx::new(job_id, generation, title);

        let outcome = self
            .flow
            .poll_until_terminal(&self.client, &ctx, &mut self.session)
            .await?;

        // 4. 按结局处理
        match &outcome {
            JobOutcome::Completed => {
                let language = self.config.language.clone();
                self.session.select_language(&language);
                self.present(&ctx.title)?;
            }
            JobOutcome::Failed(err) => {
                // 后端报告的失败原样展示，由用户决定是否重新提交
                error!("❌ 处理失败: {}", err);
            }
            JobOutcome::Abandoned => {
                warn!("任务在跟踪期间被抛弃");
            }
        }

        exit_result(&outcome)
    }

    /// 校验原始输入并构造提交参数
    fn validate_input(&self, raw_input: &str) -> Result<(SubmitInput, String), AppError> {
        if raw_input.starts_with("http://") || raw_input.starts_with("https://") {
            self.validator.validate_youtube_url(raw_input)?;
            logging::log_youtube_accepted(raw_input);
            return Ok((
                SubmitInput::Youtube {
                    url: raw_input.to_string(),
                },
                YOUTUBE_DEFAULT_TITLE.to_string(),
            ));
        }

        let path = Path::new(raw_input);
        let metadata = std::fs::metadata(path).map_err(|_| {
            AppError::File(crate::error::FileError::NotFound {
                path: raw_input.to_string(),
            })
        })?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or(ValidationError::MissingInput)?;

        let category = self.validator.validate_file(&file_name, metadata.len())?;
        logging::log_file_accepted(&file_name, category.label(), metadata.len());
        info!("🔎 处理方式: {}", category.description());

        let title = self.validator.default_title(&file_name);
        Ok((
            SubmitInput::File {
                path: path.to_path_buf(),
                file_name,
            },
            title,
        ))
    }

    /// 展示学习包并按配置进入交互模式
    fn present(&mut self, title: &str) -> Result<()> {
        let Some(view) = self.session.view() else {
            return Ok(());
        };

        if view.fell_back {
            warn!(
                "⚠️ 语言 {} 暂无译文，已展示英文内容",
                self.session.language()
            );
        }

        info!("\n{}", "─".repeat(60));
        info!("📖 摘要: {}", logging::truncate_text(view.summary, 200));
        for (i, takeaway) in view.takeaways.iter().enumerate() {
            info!("  {}. {}", i + 1, takeaway);
        }
        info!(
            "📚 学习包: {} 道选择题 / {} 张记忆卡",
            view.mcqs.len(),
            view.flashcards.len()
        );

        // 详细日志（如果启用）
        if self.config.verbose_logging {
            for (i, mcq) in view.mcqs.iter().enumerate() {
                info!(
                    "  {}. [{}] {}",
                    i + 1,
                    mcq.bloom_level,
                    logging::truncate_text(&mcq.question, 80)
                );
            }
        }
        info!("{}", "─".repeat(60));

        // 导出内容落盘（缺失项静默跳过）
        let exports = match self.session.phase() {
            SessionPhase::Completed { bundle } => bundle.exports.clone(),
            _ => Default::default(),
        };
        let handles = self.exporter.write_exports(title, &exports);

        // 交互模式
        if self.config.interactive_quiz {
            self.run_quiz()?;
            self.run_flashcards()?;
        }

        logging::print_final_stats(
            self.session.quiz_report().as_ref(),
            self.session.flashcard_completion(),
            &handles,
        );

        Ok(())
    }

    /// 交互答题
    fn run_quiz(&mut self) -> Result<()> {
        let total = self.session.view().map(|v| v.mcqs.len()).unwrap_or(0);
        if total == 0 {
            return Ok(());
        }

        println!("\n========== 答题开始，共 {} 题 ==========", total);

        for index in 0..total {
            // 选项一经选择不可更改，已作答的题直接跳过
            if self.session.quiz().is_answered(index) {
                continue;
            }

            let (question, options) = {
                let view = match self.session.view() {
                    Some(view) => view,
                    None => return Ok(()),
                };
                let mcq = &view.mcqs[index];
                (mcq.question.clone(), mcq.options.clone())
            };

            println!("\n{}. {}", index + 1, question);
            for option in &options {
                println!("   {}", option);
            }

            let Some(letter) = read_answer_letter(options.len())? else {
                println!("（跳过本题）");
                continue;
            };

            self.session.record_answer(index, letter.to_string());

            let (correct, correct_answer, explanation) = {
                let view = match self.session.view() {
                    Some(view) => view,
                    None => return Ok(()),
                };
                let mcq = &view.mcqs[index];
                (
                    self.session.quiz().is_correct(index, view.mcqs),
                    mcq.correct_answer.clone(),
                    mcq.explanation.clone(),
                )
            };

            if correct {
                println!("✓ 回答正确");
            } else {
                println!("✗ 回答错误，正确答案: {}", correct_answer);
            }
            println!("解析: {}", explanation);
        }

        if let Some(report) = self.session.quiz_report() {
            match report.percentage {
                Some(pct) => println!("\n成绩: {}/{} ({}%)", report.correct, report.total, pct),
                None => println!(
                    "\n已作答 {}/{}，全部作答后才给出百分比",
                    report.answered, report.total
                ),
            }
        }

        Ok(())
    }

    /// 交互浏览记忆卡
    fn run_flashcards(&mut self) -> Result<()> {
        let total = self.session.view().map(|v| v.flashcards.len()).unwrap_or(0);
        if total == 0 {
            return Ok(());
        }

        println!("\n========== 记忆卡浏览，共 {} 张 ==========", total);
        println!("回车翻面，输入 s 跳过当前卡片\n");

        for index in 0..total {
            let (front, back) = {
                let view = match self.session.view() {
                    Some(view) => view,
                    None => return Ok(()),
                };
                let card = &view.flashcards[index];
                (card.front.clone(), card.back.clone())
            };

            println!("卡片 {}/{} [正面] {}", index + 1, total, front);
            print!("> ");
            std::io::stdout().flush()?;

            let mut line = String::new();
            std::io::stdin().lock().read_line(&mut line)?;
            if line.trim().eq_ignore_ascii_case("s") {
                continue;
            }

            self.session.toggle_flip(index);
            println!("[背面] {}\n", back);
        }

        if let Some(completion) = self.session.flashcard_completion() {
            println!("浏览完成度: {}%", completion);
        }

        Ok(())
    }
}

/// 任务结局对应的进程结果
///
/// 后端报告失败时命令以非零码退出，便于脚本判断；
/// 完成与抛弃都视为正常结束
fn exit_result(outcome: &JobOutcome) -> Result<()> {
    match outcome {
        JobOutcome::Failed(err) => Err(anyhow::anyhow!("任务处理失败: {}", err)),
        JobOutcome::Completed | JobOutcome::Abandoned => Ok(()),
    }
}

/// 从标准输入读取一个选项字母
///
/// 空行表示跳过；无效输入时重新提示
fn read_answer_letter(option_count: usize) -> Result<Option<char>> {
    let max_letter = (b'A' + option_count.saturating_sub(1) as u8) as char;
    let stdin = std::io::stdin();

    loop {
        print!("你的答案 (A-{}): ", max_letter);
        std::io::stdout().flush()?;

        let mut line = String::new();
        stdin.lock().read_line(&mut line)?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return Ok(None);
        }

        let letter = trimmed.chars().next().map(|c| c.to_ascii_uppercase());
        match letter {
            Some(c) if c >= 'A' && c <= max_letter && trimmed.chars().count() == 1 => {
                return Ok(Some(c));
            }
            _ => println!("无效输入，请输入 A-{} 中的一个字母", max_letter),
        }
    }
}
