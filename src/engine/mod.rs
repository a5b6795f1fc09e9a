// ==========================================
// 选手数据上报工具 - 引擎层
// ==========================================
// 职责: 编排导入 → 上报 → 审计日志
// ==========================================

pub mod orchestrator;

pub use orchestrator::{BatchReport, FeedOrchestrator};
