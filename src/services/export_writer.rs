//! 导出落盘服务 - 业务能力层
//!
//! 只负责"把后端生成的导出文本保存为本地文件"能力，
//! 不解析、不校验、不转换内容——后端给什么就存什么

use crate::error::{AppResult, FileError};
use crate::models::Exports;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// 一次成功落盘的导出文件句柄
#[derive(Debug, Clone)]
pub struct DownloadHandle {
    pub path: PathBuf,
    pub mime_type: String,
    pub bytes_written: usize,
}

/// 导出落盘服务
pub struct ExportWriter {
    output_dir: PathBuf,
}

impl ExportWriter {
    /// 使用指定输出目录创建
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// 将文本负载打包为本地下载文件
    ///
    /// # 参数
    /// - `payload`: 后端预生成的文本内容，原样写入
    /// - `mime_type`: 内容的 MIME 类型标记
    /// - `filename`: 目标文件名
    pub fn package(
        &self,
        payload: &str,
        mime_type: &str,
        filename: &str,
    ) -> AppResult<DownloadHandle> {
        fs::create_dir_all(&self.output_dir).map_err(|e| FileError::WriteFailed {
            path: self.output_dir.display().to_string(),
            source: Box::new(e),
        })?;

        let path = self.output_dir.join(filename);
        fs::write(&path, payload).map_err(|e| FileError::WriteFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;

        debug!("已写入导出文件: {} ({} 字节)", path.display(), payload.len());

        Ok(DownloadHandle {
            path,
            mime_type: mime_type.to_string(),
            bytes_written: payload.len(),
        })
    }

    /// 保存学习包附带的全部导出内容
    ///
    /// 缺失的导出项静默跳过，写入失败只记录警告，
    /// 导出环节永远不会让整个流程崩溃
    pub fn write_exports(&self, title: &str, exports: &Exports) -> Vec<DownloadHandle> {
        let mut handles = Vec::new();

        if let Some(csv) = &exports.google_forms_csv {
            let filename = format!("{}-google-forms.csv", Self::title_or(title, "quiz"));
            match self.package(csv, "text/csv;charset=utf-8", &filename) {
                Ok(handle) => handles.push(handle),
                Err(e) => warn!("⚠️ CSV 导出写入失败: {}", e),
            }
        } else {
            debug!("学习包未包含 Google Forms CSV 导出，跳过");
        }

        if let Some(json) = &exports.full_json {
            let filename = format!("{}-full-export.json", Self::title_or(title, "content"));
            match self.package(json, "application/json;charset=utf-8", &filename) {
                Ok(handle) => handles.push(handle),
                Err(e) => warn!("⚠️ JSON 导出写入失败: {}", e),
            }
        } else {
            debug!("学习包未包含完整 JSON 导出，跳过");
        }

        handles
    }

    /// 标题为空时使用各导出项固定的默认名；
    /// 同时替换路径分隔符，避免标题把文件写到别的目录
    fn title_or(title: &str, fallback: &str) -> String {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            fallback.to_string()
        } else {
            trimmed.replace(['/', '\\'], "-")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_writer(case: &str) -> ExportWriter {
        let dir = std::env::temp_dir()
            .join("repurpose_study_client_tests")
            .join(case);
        let _ = fs::remove_dir_all(&dir);
        ExportWriter::new(dir)
    }

    #[test]
    fn test_package_writes_exact_payload() {
        let writer = temp_writer("package_exact");
        let payload = "a,b\n1,2";

        let handle = writer
            .package(payload, "text/csv", "quiz-google-forms.csv")
            .expect("写入应成功");

        assert!(handle.path.ends_with("quiz-google-forms.csv"));
        assert_eq!(handle.bytes_written, payload.len());
        let written = fs::read_to_string(&handle.path).expect("读取应成功");
        assert_eq!(written, payload);
    }

    #[test]
    fn test_write_exports_skips_missing_payloads() {
        let writer = temp_writer("skip_missing");
        let exports = Exports {
            google_forms_csv: None,
            full_json: Some("{\"title\":\"x\"}".to_string()),
        };

        let handles = writer.write_exports("生物 复习", &exports);
        assert_eq!(handles.len(), 1);
        assert!(handles[0].path.ends_with("生物 复习-full-export.json"));
        assert_eq!(handles[0].mime_type, "application/json;charset=utf-8");
    }

    #[test]
    fn test_empty_title_uses_per_kind_defaults() {
        let writer = temp_writer("default_titles");
        let exports = Exports {
            google_forms_csv: Some("q,a\n".to_string()),
            full_json: Some("{}".to_string()),
        };

        let handles = writer.write_exports("  ", &exports);
        let names: Vec<String> = handles
            .iter()
            .map(|h| h.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert!(names.contains(&"quiz-google-forms.csv".to_string()));
        assert!(names.contains(&"content-full-export.json".to_string()));
    }

    #[test]
    fn test_title_with_path_separator_is_sanitized() {
        let writer = temp_writer("sanitize");
        let exports = Exports {
            google_forms_csv: Some("q,a\n".to_string()),
            full_json: None,
        };

        let handles = writer.write_exports("unit/one", &exports);
        assert_eq!(handles.len(), 1);
        assert!(handles[0].path.ends_with("unit-one-google-forms.csv"));
    }
}
