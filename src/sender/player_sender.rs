// ==========================================
// 选手数据上报工具 - 选手上报器
// ==========================================
// 接口: POST {endpoint}，Content-Type: application/json
// 规则: 单次尝试，不重试；仅 200 视为成功
// ==========================================

use crate::domain::Player;
use crate::sender::error::SendError;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use tracing::debug;

// ==========================================
// PlayerSink Trait
// ==========================================
// 用途: 单条记录的上报目标
// 实现者: HttpPlayerSender
#[async_trait]
pub trait PlayerSink: Send + Sync {
    /// 上报一条记录
    ///
    /// # 返回
    /// - Ok(()): 服务端返回 200
    /// - Err(SendError): 序列化失败、传输失败或非 200 状态
    async fn send(&self, player: &Player) -> Result<(), SendError>;
}

// ==========================================
// HttpPlayerSender - HTTP 上报实现
// ==========================================
pub struct HttpPlayerSender {
    client: Client,
    endpoint: String,
}

impl HttpPlayerSender {
    /// 创建上报器（使用传输层默认超时）
    ///
    /// 端点为本机服务，不走系统代理
    pub fn new(endpoint: impl Into<String>) -> Result<Self, SendError> {
        let client = Client::builder().no_proxy().build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl PlayerSink for HttpPlayerSender {
    async fn send(&self, player: &Player) -> Result<(), SendError> {
        let body = serde_json::to_vec(player)?;

        debug!(player_id = player.player_id(), endpoint = %self.endpoint, "发送选手数据");
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(SendError::Status { status });
        }
        Ok(())
    }
}
