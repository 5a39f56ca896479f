//! 学习包数据模型
//!
//! 对应后端任务完成后返回的 result 字段

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 单选题
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mcq {
    pub question: String,
    /// 四个选项，每个选项带字母前缀，如 "A) ..."
    pub options: Vec<String>,
    /// 正确答案字母，与恰好一个选项的前缀对应
    pub correct_answer: String,
    pub explanation: String,
    /// 布鲁姆认知层级标签，仅用于展示
    pub bloom_level: String,
}

impl Mcq {
    /// 提取选项的字母前缀
    pub fn option_letter(option: &str) -> Option<char> {
        option.chars().next().filter(|c| c.is_ascii_alphabetic())
    }

    /// 判断给定字母是否为本题的正确答案
    pub fn is_correct_letter(&self, letter: &str) -> bool {
        self.correct_answer.eq_ignore_ascii_case(letter.trim())
    }
}

/// 记忆卡
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flashcard {
    /// 正面（提示）
    pub front: String,
    /// 背面（答案）
    pub back: String,
}

/// 按语言划分的局部学习包
///
/// 只覆盖 summary / takeaways / mcqs / flashcards 四个字段
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocalizedBundle {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub takeaways: Vec<String>,
    #[serde(default)]
    pub mcqs: Vec<Mcq>,
    #[serde(default)]
    pub flashcards: Vec<Flashcard>,
}

/// 后端预生成的导出内容，客户端只负责落盘，不做任何转换
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Exports {
    #[serde(default)]
    pub google_forms_csv: Option<String>,
    #[serde(default)]
    pub full_json: Option<String>,
}

/// 任务完成后的完整学习包
///
/// 不变式：localized 中永远不含 "en"，英文内容由顶层字段表示
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultBundle {
    pub title: String,
    /// 内容来源的人类可读描述
    pub content_source: String,
    pub summary: String,
    #[serde(default)]
    pub takeaways: Vec<String>,
    #[serde(default)]
    pub mcqs: Vec<Mcq>,
    #[serde(default)]
    pub flashcards: Vec<Flashcard>,
    /// 语言代码 → 局部学习包
    #[serde(default)]
    pub localized: HashMap<String, LocalizedBundle>,
    #[serde(default)]
    pub exports: Exports,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_hash: Option<String>,
}
