// ==========================================
// 选手数据上报工具 - 主入口
// ==========================================
// 无命令行参数、无配置文件：全部使用固定参数
// 读取选手表失败时以非零状态退出
// ==========================================

use anyhow::Context;
use player_feed::{logging, FeedConfig, FeedOrchestrator, HttpPlayerSender, PlayerIdGenerator};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    logging::init();

    if let Err(e) = run().await {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = FeedConfig::default();

    tracing::info!(
        "{} v{} | 源文件: {} | 端点: {}",
        player_feed::APP_NAME,
        player_feed::VERSION,
        config.source_path.display(),
        config.endpoint_url
    );

    let sender = HttpPlayerSender::new(config.endpoint_url.clone())
        .context("无法创建 HTTP 客户端")?;
    let mut orchestrator =
        FeedOrchestrator::from_config(&config, sender, PlayerIdGenerator::from_os_rng());

    orchestrator
        .run(&config.source_path)
        .await
        .context("读取选手表失败")?;

    Ok(())
}
