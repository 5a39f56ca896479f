//! 输入校验服务 - 业务能力层
//!
//! 只负责"提交前校验"能力，纯函数，不触网、不改状态
//!
//! 职责：
//! - 文件：大小限制 + 扩展名白名单
//! - YouTube 链接：三种 URL 模式匹配
//! - 派生默认标题（仅为用户方便，后端不依赖）

use crate::error::ValidationError;
use regex::Regex;
use std::sync::OnceLock;

/// 文件大小上限：500 MiB
pub const MAX_FILE_SIZE_BYTES: u64 = 500 * 1024 * 1024;

/// YouTube 模式下使用的固定标题
pub const YOUTUBE_DEFAULT_TITLE: &str = "YouTube Video Content";

/// 文件内容类别，决定后端的处理路径，客户端仅用于展示
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    Document,
    Image,
    Audio,
    Video,
}

impl FileCategory {
    /// 类别的展示名称
    pub fn label(&self) -> &'static str {
        match self {
            FileCategory::Document => "文档",
            FileCategory::Image => "图片",
            FileCategory::Audio => "音频",
            FileCategory::Video => "视频",
        }
    }

    /// 后端对该类别的处理方式说明
    pub fn description(&self) -> &'static str {
        match self {
            FileCategory::Document => "文本提取与分析",
            FileCategory::Image => "OCR 识别与视觉分析",
            FileCategory::Audio => "语音转文字",
            FileCategory::Video => "音频转写 + 视觉分析",
        }
    }
}

/// 扩展名（小写） → 内容类别
static EXTENSION_CATEGORIES: phf::Map<&'static str, FileCategory> = phf::phf_map! {
    // 文档
    "pdf" => FileCategory::Document,
    "docx" => FileCategory::Document,
    "txt" => FileCategory::Document,
    // 图片
    "jpg" => FileCategory::Image,
    "jpeg" => FileCategory::Image,
    "png" => FileCategory::Image,
    "webp" => FileCategory::Image,
    "gif" => FileCategory::Image,
    "bmp" => FileCategory::Image,
    "tiff" => FileCategory::Image,
    // 音频
    "mp3" => FileCategory::Audio,
    "wav" => FileCategory::Audio,
    "ogg" => FileCategory::Audio,
    "m4a" => FileCategory::Audio,
    "flac" => FileCategory::Audio,
    // 视频
    "mp4" => FileCategory::Video,
    "avi" => FileCategory::Video,
    "mov" => FileCategory::Video,
    "wmv" => FileCategory::Video,
    "flv" => FileCategory::Video,
    "webm" => FileCategory::Video,
    "mkv" => FileCategory::Video,
};

/// 用于拒绝信息的扩展名列表（按类别排序）
const SUPPORTED_EXTENSIONS: &[&str] = &[
    "pdf", "docx", "txt", "jpg", "jpeg", "png", "webp", "gif", "bmp", "tiff", "mp3", "wav",
    "ogg", "m4a", "flac", "mp4", "avi", "mov", "wmv", "flv", "webm", "mkv",
];

static YOUTUBE_PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();

fn youtube_patterns() -> &'static [Regex] {
    YOUTUBE_PATTERNS.get_or_init(|| {
        [
            r"^https?://(?:www\.)?youtube\.com/watch\?v=[\w-]+",
            r"^https?://youtu\.be/[\w-]+",
            r"^https?://(?:www\.)?youtube\.com/embed/[\w-]+",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("内置正则表达式必须合法"))
        .collect()
    })
}

/// 输入校验服务
pub struct InputValidator;

impl InputValidator {
    pub fn new() -> Self {
        Self
    }

    /// 校验待上传文件
    ///
    /// # 参数
    /// - `file_name`: 文件名（用于扩展名判断）
    /// - `size_bytes`: 文件字节数
    ///
    /// # 返回
    /// 通过时返回文件类别，否则返回具体拒绝原因
    pub fn validate_file(
        &self,
        file_name: &str,
        size_bytes: u64,
    ) -> Result<FileCategory, ValidationError> {
        if size_bytes > MAX_FILE_SIZE_BYTES {
            return Err(ValidationError::FileTooLarge {
                size_bytes,
                limit_bytes: MAX_FILE_SIZE_BYTES,
            });
        }

        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match EXTENSION_CATEGORIES.get(extension.as_str()) {
            Some(category) => Ok(*category),
            None => Err(ValidationError::UnsupportedExtension {
                extension,
                supported: SUPPORTED_EXTENSIONS.join(", "),
            }),
        }
    }

    /// 校验 YouTube 链接
    ///
    /// 只做 URL 模式匹配，不验证视频是否存在；
    /// 30 分钟时长限制由后端把关，此处不拦截
    pub fn validate_youtube_url(&self, url: &str) -> Result<(), ValidationError> {
        if youtube_patterns().iter().any(|p| p.is_match(url)) {
            Ok(())
        } else {
            Err(ValidationError::InvalidYoutubeUrl {
                url: url.to_string(),
            })
        }
    }

    /// 从文件名派生默认标题
    ///
    /// 去掉扩展名，下划线和连字符替换为空格
    pub fn default_title(&self, file_name: &str) -> String {
        let stem = file_name
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(file_name);
        stem.replace(['_', '-'], " ")
    }
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oversized_file_rejected_regardless_of_extension() {
        let validator = InputValidator::new();
        let too_big = MAX_FILE_SIZE_BYTES + 1;

        for name in ["lecture.pdf", "lecture.mp4", "lecture.xyz"] {
            let err = validator.validate_file(name, too_big).unwrap_err();
            assert!(
                matches!(err, ValidationError::FileTooLarge { .. }),
                "超大文件应先被大小检查拦截: {}",
                name
            );
        }
    }

    #[test]
    fn test_boundary_size_accepted() {
        let validator = InputValidator::new();
        assert!(validator
            .validate_file("notes.pdf", MAX_FILE_SIZE_BYTES)
            .is_ok());
    }

    #[test]
    fn test_all_supported_extensions_accepted() {
        let validator = InputValidator::new();
        for ext in SUPPORTED_EXTENSIONS {
            let name = format!("lesson.{}", ext);
            assert!(
                validator.validate_file(&name, 1024).is_ok(),
                "应接受扩展名 .{}",
                ext
            );
        }
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        let validator = InputValidator::new();
        assert_eq!(
            validator.validate_file("Lecture.PDF", 1024).unwrap(),
            FileCategory::Document
        );
        assert_eq!(
            validator.validate_file("clip.MKV", 1024).unwrap(),
            FileCategory::Video
        );
    }

    #[test]
    fn test_unsupported_extension_message_lists_everything() {
        let validator = InputValidator::new();
        let err = validator.validate_file("archive.zip", 1024).unwrap_err();
        let msg = err.to_string();
        for ext in SUPPORTED_EXTENSIONS {
            assert!(msg.contains(ext), "拒绝信息应列出 {}: {}", ext, msg);
        }
    }

    #[test]
    fn test_file_without_extension_rejected() {
        let validator = InputValidator::new();
        assert!(validator.validate_file("README", 1024).is_err());
    }

    #[test]
    fn test_category_detected() {
        let validator = InputValidator::new();
        assert_eq!(
            validator.validate_file("song.flac", 1024).unwrap(),
            FileCategory::Audio
        );
        assert_eq!(
            validator.validate_file("scan.tiff", 1024).unwrap(),
            FileCategory::Image
        );
    }

    #[test]
    fn test_valid_youtube_urls() {
        let validator = InputValidator::new();
        let valid = [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtube.com/watch?v=dQw4w9WgXcQ",
            "http://youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://youtube.com/embed/abc-DEF_123",
        ];
        for url in valid {
            assert!(validator.validate_youtube_url(url).is_ok(), "应接受 {}", url);
        }
    }

    #[test]
    fn test_invalid_youtube_urls() {
        let validator = InputValidator::new();
        let invalid = [
            "https://vimeo.com/12345",
            "https://www.youtube.com/watch",
            "https://youtu.be/",
            "youtube.com/watch?v=dQw4w9WgXcQ",
            "ftp://youtube.com/watch?v=abc",
            "",
        ];
        for url in invalid {
            assert!(
                validator.validate_youtube_url(url).is_err(),
                "应拒绝 {}",
                url
            );
        }
    }

    #[test]
    fn test_default_title_from_file_name() {
        let validator = InputValidator::new();
        assert_eq!(
            validator.default_title("intro_to-biology.pdf"),
            "intro to biology"
        );
        assert_eq!(validator.default_title("notes"), "notes");
    }
}
