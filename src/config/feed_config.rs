// ==========================================
// 选手数据上报工具 - 运行参数
// ==========================================

use std::path::PathBuf;

// ==========================================
// 默认值常量
// ==========================================
pub mod defaults {
    /// 选手表路径
    pub const SOURCE_PATH: &str = "ipl-sheet.xlsx";

    /// 上报端点（POST）
    pub const ENDPOINT_URL: &str = "http://localhost:8080/api/player";

    /// 审计日志路径（NDJSON，追加写）
    pub const AUDIT_LOG_PATH: &str = "players.json";

    /// 单次运行最多处理的数据行数
    pub const MAX_ROWS: usize = 10;
}

// ==========================================
// FeedConfig - 运行参数
// ==========================================
// 生产环境只使用 Default；测试可构造指向临时文件与本地服务的实例
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    pub source_path: PathBuf,
    pub endpoint_url: String,
    pub audit_log_path: PathBuf,
    pub max_rows: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(defaults::SOURCE_PATH),
            endpoint_url: defaults::ENDPOINT_URL.to_string(),
            audit_log_path: PathBuf::from(defaults::AUDIT_LOG_PATH),
            max_rows: defaults::MAX_ROWS,
        }
    }
}
