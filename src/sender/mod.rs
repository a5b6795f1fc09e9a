// ==========================================
// 选手数据上报工具 - 上报层
// ==========================================
// 职责: 将 Player 上报至 HTTP 端点；追加本地审计日志
// 说明: 两者为独立操作，由编排器组合
// ==========================================

pub mod audit_log;
pub mod error;
pub mod player_sender;

pub use audit_log::AuditLog;
pub use error::{AuditLogError, SendError};
pub use player_sender::{HttpPlayerSender, PlayerSink};
