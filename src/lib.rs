// ==========================================
// 选手数据上报工具 - 核心库
// ==========================================
// 流程: 选手表 → Player → HTTP 上报 + 审计日志
// 执行模型: 单线程、逐条顺序执行
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 固定运行参数
pub mod config;

// 导入层 - 选手表读取与字段转换
pub mod importer;

// 上报层 - HTTP 上报与审计日志
pub mod sender;

// 引擎层 - 流程编排
pub mod engine;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

pub use config::FeedConfig;
pub use domain::{AuditEntry, Nationality, Player};
pub use engine::{BatchReport, FeedOrchestrator};
pub use importer::{ImportError, PlayerIdGenerator, PlayerImporter};
pub use sender::{AuditLog, HttpPlayerSender, PlayerSink, SendError};

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "选手数据上报工具";
