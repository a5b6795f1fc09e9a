// ==========================================
// 选手数据上报工具 - 领域层
// ==========================================

pub mod player;

pub use player::{AuditEntry, Nationality, Player};
