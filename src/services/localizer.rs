//! 本地化解析服务 - 业务能力层
//!
//! 只负责"按语言取内容"能力，纯投影，不修改学习包
//!
//! 规则：
//! - "en" 直接返回顶层字段
//! - 其他语言查 localized 映射，命中则返回译文
//! - 未命中时静默回退到英文内容，但通过 fell_back 标记告知调用方

use crate::models::{Flashcard, Mcq, ResultBundle};

/// 按所选语言解析出的内容视图
///
/// 只借用学习包中的数据，本身不持有任何内容
#[derive(Debug, Clone, Copy)]
pub struct LocalizedView<'a> {
    pub summary: &'a str,
    pub takeaways: &'a [String],
    pub mcqs: &'a [Mcq],
    pub flashcards: &'a [Flashcard],
    /// 请求的语言缺失、实际返回英文内容时为 true
    pub fell_back: bool,
}

/// 本地化解析服务
pub struct LocalizationResolver;

impl LocalizationResolver {
    /// 解析指定语言的内容视图
    pub fn resolve<'a>(bundle: &'a ResultBundle, language: &str) -> LocalizedView<'a> {
        if language == "en" {
            return Self::english_view(bundle, false);
        }

        match bundle.localized.get(language) {
            Some(localized) => LocalizedView {
                summary: &localized.summary,
                takeaways: &localized.takeaways,
                mcqs: &localized.mcqs,
                flashcards: &localized.flashcards,
                fell_back: false,
            },
            // 译文缺失：回退英文，标记 fell_back
            None => Self::english_view(bundle, true),
        }
    }

    fn english_view(bundle: &ResultBundle, fell_back: bool) -> LocalizedView<'_> {
        LocalizedView {
            summary: &bundle.summary,
            takeaways: &bundle.takeaways,
            mcqs: &bundle.mcqs,
            flashcards: &bundle.flashcards,
            fell_back,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LocalizedBundle;

    fn sample_bundle() -> ResultBundle {
        let mut bundle = ResultBundle {
            title: "Photosynthesis".to_string(),
            content_source: "PDF document (text extraction)".to_string(),
            summary: "Plants convert light into energy.".to_string(),
            takeaways: vec!["Light is required.".to_string()],
            mcqs: Vec::new(),
            flashcards: Vec::new(),
            localized: Default::default(),
            exports: Default::default(),
            file_hash: None,
        };
        bundle.localized.insert(
            "hi".to_string(),
            LocalizedBundle {
                summary: "पौधे प्रकाश को ऊर्जा में बदलते हैं।".to_string(),
                takeaways: vec!["प्रकाश आवश्यक है।".to_string()],
                mcqs: Vec::new(),
                flashcards: Vec::new(),
            },
        );
        bundle
    }

    #[test]
    fn test_resolve_english_returns_top_level() {
        let bundle = sample_bundle();
        let view = LocalizationResolver::resolve(&bundle, "en");
        assert_eq!(view.summary, "Plants convert light into energy.");
        assert!(!view.fell_back);
    }

    #[test]
    fn test_resolve_present_translation() {
        let bundle = sample_bundle();
        let view = LocalizationResolver::resolve(&bundle, "hi");
        assert_eq!(view.summary, "पौधे प्रकाश को ऊर्जा में बदलते हैं।");
        assert!(!view.fell_back);
    }

    #[test]
    fn test_resolve_missing_translation_falls_back_to_english() {
        let bundle = sample_bundle();
        let fr = LocalizationResolver::resolve(&bundle, "fr");
        let en = LocalizationResolver::resolve(&bundle, "en");

        // 内容与英文完全一致，仅多了回退标记
        assert_eq!(fr.summary, en.summary);
        assert_eq!(fr.takeaways, en.takeaways);
        assert!(fr.fell_back);
        assert!(!en.fell_back);
    }

    #[test]
    fn test_resolve_does_not_mutate_bundle() {
        let bundle = sample_bundle();
        let before = serde_json::to_string(&bundle).expect("序列化");
        let _ = LocalizationResolver::resolve(&bundle, "es");
        let after = serde_json::to_string(&bundle).expect("序列化");
        assert_eq!(before, after);
    }
}
