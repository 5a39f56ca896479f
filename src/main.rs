use anyhow::Result;
use repurpose_study_client::error::{AppError, ValidationError};
use repurpose_study_client::{logger, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    // 加载配置
    let config = Config::from_env();

    // 第一个参数：文件路径或 YouTube 链接；第二个参数（可选）：标题
    let mut args = std::env::args().skip(1);
    let input = match args.next() {
        Some(input) => input,
        None => {
            eprintln!("用法: repurpose_study_client <文件路径|YouTube链接> [标题]");
            return Err(AppError::Validation(ValidationError::MissingInput).into());
        }
    };
    let title = args.next();

    // 初始化并运行应用
    App::initialize(config)?.run(&input, title).await
}
