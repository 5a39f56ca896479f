/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 后端服务地址
    pub api_base_url: String,
    /// 轮询间隔（毫秒）
    pub poll_interval_ms: u64,
    /// 导出文件输出目录
    pub output_dir: String,
    /// 首选内容语言（en / hi / es）
    pub language: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 处理完成后是否进入交互答题模式
    pub interactive_quiz: bool,
    /// HTTP 请求超时（秒），上传大文件时需要较长时间
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            poll_interval_ms: 2000,
            output_dir: "exports".to_string(),
            language: "en".to_string(),
            verbose_logging: false,
            interactive_quiz: false,
            request_timeout_secs: 600,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            api_base_url: std::env::var("API_BASE_URL").unwrap_or(default.api_base_url),
            poll_interval_ms: std::env::var("POLL_INTERVAL_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.poll_interval_ms),
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or(default.output_dir),
            language: std::env::var("LANGUAGE").unwrap_or(default.language),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            interactive_quiz: std::env::var("INTERACTIVE_QUIZ").ok().and_then(|v| v.parse().ok()).unwrap_or(default.interactive_quiz),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_timeout_secs),
        }
    }
}
