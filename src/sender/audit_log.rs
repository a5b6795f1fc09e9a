// ==========================================
// 选手数据上报工具 - 审计日志
// ==========================================
// 格式: 每行一个 JSON 对象 {"playerName": ..., "playerId": ...}
// 红线: 只追加，不截断、不改写已有内容
// ==========================================

use crate::domain::AuditEntry;
use crate::sender::error::AuditLogError;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 追加一行审计记录（文件不存在时创建）
    pub fn append(&self, entry: &AuditEntry) -> Result<(), AuditLogError> {
        let mut line = serde_json::to_vec(entry)?;
        line.push(b'\n');

        let io_err = |source| AuditLogError::Io {
            path: self.path.display().to_string(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(io_err)?;
        file.write_all(&line).map_err(io_err)?;

        debug!(player_id = %entry.player_id, "审计日志已追加");
        Ok(())
    }
}
