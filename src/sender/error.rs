// ==========================================
// 选手数据上报工具 - 上报模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 上报失败与审计日志失败分开建模，互不混淆
// ==========================================

use thiserror::Error;

/// 单条记录上报错误
#[derive(Error, Debug)]
pub enum SendError {
    #[error("选手数据序列化失败: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("请求发送失败: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("服务端返回状态: {status}")]
    Status { status: reqwest::StatusCode },
}

impl SendError {
    /// 服务端是否已收到该记录（即得到了响应，无论状态码）
    pub fn reached_server(&self) -> bool {
        matches!(self, SendError::Status { .. })
    }
}

/// 审计日志错误
#[derive(Error, Debug)]
pub enum AuditLogError {
    #[error("审计日志序列化失败: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("审计日志写入失败 ({path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
