//! 答题与记忆卡状态服务 - 业务能力层
//!
//! 两份相互独立的交互状态，均以当前语言视图中的位置索引为键：
//! - 答题状态：题目索引 → 已选字母
//! - 记忆卡状态：已翻面的卡片索引集合
//!
//! 切换语言或开始新任务时两份状态都会被清空，
//! 因为不同语言下同一索引可能对应不同内容

use crate::models::Mcq;
use std::collections::{HashMap, HashSet};

/// 答题成绩报告
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizReport {
    /// 答对数量
    pub correct: usize,
    /// 已作答数量
    pub answered: usize,
    /// 题目总数
    pub total: usize,
    /// 四舍五入的百分比，只在全部作答后给出
    pub percentage: Option<u32>,
}

/// 答题状态
#[derive(Debug, Clone, Default)]
pub struct QuizState {
    /// 题目索引 → 用户选择的字母
    answers: HashMap<usize, String>,
}

impl QuizState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录某题的作答
    ///
    /// 本操作不拒绝重复作答，"选项一经选择不可更改"由交互层把关
    pub fn record_answer(&mut self, index: usize, letter: impl Into<String>) {
        self.answers.insert(index, letter.into());
    }

    /// 查询某题的作答
    pub fn answer(&self, index: usize) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }

    /// 某题是否已作答
    pub fn is_answered(&self, index: usize) -> bool {
        self.answers.contains_key(&index)
    }

    /// 已作答题目数量
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// 某题作答是否正确
    pub fn is_correct(&self, index: usize, mcqs: &[Mcq]) -> bool {
        match (self.answers.get(&index), mcqs.get(index)) {
            (Some(letter), Some(mcq)) => mcq.is_correct_letter(letter),
            _ => false,
        }
    }

    /// 统计成绩
    ///
    /// 百分比仅在当前视图的所有题目均已作答后给出
    pub fn report(&self, mcqs: &[Mcq]) -> QuizReport {
        let total = mcqs.len();
        let correct = (0..total).filter(|i| self.is_correct(*i, mcqs)).count();
        let answered = self.answered_count();

        let percentage = if total > 0 && answered >= total {
            Some((correct as f64 / total as f64 * 100.0).round() as u32)
        } else {
            None
        };

        QuizReport {
            correct,
            answered,
            total,
            percentage,
        }
    }

    /// 清空作答记录
    pub fn clear(&mut self) {
        self.answers.clear();
    }
}

/// 记忆卡状态
#[derive(Debug, Clone, Default)]
pub struct FlashcardState {
    /// 已翻面的卡片索引
    flipped: HashSet<usize>,
}

impl FlashcardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 翻转某张卡片
    ///
    /// 往返切换而非单向揭示，再次翻转即恢复正面
    ///
    /// # 返回
    /// 返回翻转后是否处于背面
    pub fn toggle_flip(&mut self, index: usize) -> bool {
        if self.flipped.remove(&index) {
            false
        } else {
            self.flipped.insert(index);
            true
        }
    }

    /// 某张卡片是否已翻面
    pub fn is_flipped(&self, index: usize) -> bool {
        self.flipped.contains(&index)
    }

    /// 已翻面卡片数量
    pub fn flipped_count(&self) -> usize {
        self.flipped.len()
    }

    /// 浏览完成度（四舍五入百分比）
    pub fn completion_percent(&self, total: usize) -> u32 {
        if total == 0 {
            return 0;
        }
        (self.flipped.len() as f64 / total as f64 * 100.0).round() as u32
    }

    /// 清空翻面记录
    pub fn clear(&mut self) {
        self.flipped.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_mcqs(count: usize) -> Vec<Mcq> {
        (0..count)
            .map(|i| Mcq {
                question: format!("第 {} 题", i + 1),
                options: vec![
                    "A) 甲".to_string(),
                    "B) 乙".to_string(),
                    "C) 丙".to_string(),
                    "D) 丁".to_string(),
                ],
                correct_answer: "A".to_string(),
                explanation: String::new(),
                bloom_level: "Understand".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_score_three_of_five() {
        let mcqs = sample_mcqs(5);
        let mut quiz = QuizState::new();

        // 前三题答对，后两题答错
        for i in 0..3 {
            quiz.record_answer(i, "A");
        }
        quiz.record_answer(3, "B");
        quiz.record_answer(4, "C");

        let report = quiz.report(&mcqs);
        assert_eq!(report.correct, 3);
        assert_eq!(report.total, 5);
        assert_eq!(report.percentage, Some(60));
    }

    #[test]
    fn test_percentage_withheld_until_all_answered() {
        let mcqs = sample_mcqs(5);
        let mut quiz = QuizState::new();
        quiz.record_answer(0, "A");
        quiz.record_answer(1, "A");

        let report = quiz.report(&mcqs);
        assert_eq!(report.correct, 2);
        assert_eq!(report.answered, 2);
        assert_eq!(report.percentage, None);
    }

    #[test]
    fn test_is_correct_out_of_range_index() {
        let mcqs = sample_mcqs(2);
        let mut quiz = QuizState::new();
        quiz.record_answer(9, "A");
        assert!(!quiz.is_correct(9, &mcqs));
    }

    #[test]
    fn test_empty_quiz_has_no_percentage() {
        let quiz = QuizState::new();
        let report = quiz.report(&[]);
        assert_eq!(report.total, 0);
        assert_eq!(report.percentage, None);
    }

    #[test]
    fn test_double_toggle_restores_original_state() {
        let mut cards = FlashcardState::new();
        assert!(cards.toggle_flip(2));
        assert!(cards.is_flipped(2));
        assert!(!cards.toggle_flip(2));
        assert!(!cards.is_flipped(2));
        assert_eq!(cards.flipped_count(), 0);
    }

    #[test]
    fn test_completion_percent() {
        let mut cards = FlashcardState::new();
        cards.toggle_flip(0);
        cards.toggle_flip(1);
        assert_eq!(cards.completion_percent(3), 67);
        assert_eq!(cards.completion_percent(0), 0);
    }

    #[test]
    fn test_clear_resets_both_states() {
        let mcqs = sample_mcqs(2);
        let mut quiz = QuizState::new();
        let mut cards = FlashcardState::new();
        quiz.record_answer(0, "A");
        cards.toggle_flip(0);

        quiz.clear();
        cards.clear();

        assert_eq!(quiz.answered_count(), 0);
        assert_eq!(cards.flipped_count(), 0);
        assert!(!quiz.is_correct(0, &mcqs));
    }
}
