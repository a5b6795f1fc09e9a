// ==========================================
// 选手数据上报工具 - 配置层
// ==========================================
// 职责: 集中管理源文件/上报端点/审计日志等固定参数
// 红线: 不读取命令行、环境变量或配置文件
// ==========================================

pub mod feed_config;

pub use feed_config::{defaults, FeedConfig};
