use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = match (verbose, level) {
            (true, _) => "enroll_assist=debug,info".to_string(),
            (false, Some(level)) => format!("enroll_assist={},warn", level),
            (false, None) => "enroll_assist=info".to_string(),
        };
        EnvFilter::new(directive)
    })
}

pub fn init_cli_logger(verbose: bool) {
    init_logger(verbose, None, false);
}

/// 初始化日誌；`json` 為 true 時輸出 JSON 格式 (適合集中式日誌)
pub fn init_logger(verbose: bool, level: Option<&str>, json: bool) {
    let filter = default_filter(verbose, level);

    if json {
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .json(),
            )
            .try_init();
    } else {
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .try_init();
    }
}
