//! 日志工具模块
//!
//! 提供日志格式化和输出的辅助函数

use crate::config::Config;
use crate::services::assessment::QuizReport;
use crate::services::export_writer::DownloadHandle;
use tracing::info;

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 内容再加工学习包客户端");
    info!("🌐 后端地址: {}", config.api_base_url);
    info!("🗣️ 首选语言: {}", config.language);
    info!("{}", "=".repeat(60));
}

/// 记录文件输入通过校验
pub fn log_file_accepted(file_name: &str, category_label: &str, size_bytes: u64) {
    info!(
        "📄 文件: {} ({} / {:.2} MB)",
        file_name,
        category_label,
        size_bytes as f64 / 1024.0 / 1024.0
    );
}

/// 记录 YouTube 链接通过校验
pub fn log_youtube_accepted(url: &str) {
    info!("▶️ YouTube 链接: {}", url);
    info!("💡 建议视频时长不超过 30 分钟（由后端把关）");
}

/// 打印最终统计信息
pub fn print_final_stats(
    quiz: Option<&QuizReport>,
    cards_completion: Option<u32>,
    exports: &[DownloadHandle],
) {
    info!("\n{}", "=".repeat(60));
    info!("📊 本次会话统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    if let Some(report) = quiz {
        match report.percentage {
            Some(pct) => info!("✅ 答题: {}/{} 正确 ({}%)", report.correct, report.total, pct),
            None => info!(
                "📝 答题: 已作答 {}/{}，答对 {}",
                report.answered, report.total, report.correct
            ),
        }
    }
    if let Some(completion) = cards_completion {
        info!("🃏 记忆卡浏览完成度: {}%", completion);
    }
    for handle in exports {
        info!(
            "💾 已导出: {} ({}, {} 字节)",
            handle.path.display(),
            handle.mime_type,
            handle.bytes_written
        );
    }
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
