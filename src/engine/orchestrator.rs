// ==========================================
// 选手数据上报工具 - 上报编排器
// ==========================================
// 流程: 读取选手表 → 逐条上报 → 追加审计日志
// 规则: 顺序执行；单条失败只记录告警，不中断批次
// ==========================================

use crate::config::FeedConfig;
use crate::domain::Player;
use crate::importer::{
    FieldMapperImpl, ImportResult, PlayerIdGenerator, PlayerImporter, UniversalFileParser,
};
use crate::sender::{AuditLog, PlayerSink};
use std::path::Path;
use tracing::{info, instrument, warn};

// ==========================================
// BatchReport - 批次结果
// ==========================================
// 仅返回给调用方，不额外输出汇总日志
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub attempted: usize,
    pub sent: Vec<String>,   // 上报成功的选手 ID
    pub failed: Vec<String>, // 上报失败的选手 ID
}

// ==========================================
// FeedOrchestrator - 上报编排器
// ==========================================
pub struct FeedOrchestrator<S>
where
    S: PlayerSink,
{
    importer: PlayerImporter,
    sink: S,
    audit_log: AuditLog,
    ids: PlayerIdGenerator,
}

impl<S> FeedOrchestrator<S>
where
    S: PlayerSink,
{
    /// 创建编排器
    ///
    /// # 参数
    /// - importer: 选手导入器
    /// - sink: 上报目标
    /// - audit_log: 审计日志
    /// - ids: 选手 ID 生成器（整个运行期间共用一个随机源）
    pub fn new(
        importer: PlayerImporter,
        sink: S,
        audit_log: AuditLog,
        ids: PlayerIdGenerator,
    ) -> Self {
        Self {
            importer,
            sink,
            audit_log,
            ids,
        }
    }

    /// 按配置组装编排器
    pub fn from_config(config: &FeedConfig, sink: S, ids: PlayerIdGenerator) -> Self {
        let importer = PlayerImporter::new(
            Box::new(UniversalFileParser),
            Box::new(FieldMapperImpl::new()),
            config.max_rows,
        );
        Self::new(importer, sink, AuditLog::new(&config.audit_log_path), ids)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// 读取选手表
    ///
    /// 读取失败为致命错误，直接返回给调用方
    pub fn load_players<P: AsRef<Path>>(&mut self, source: P) -> ImportResult<Vec<Player>> {
        self.importer.read_players(source, &mut self.ids)
    }

    /// 逐条上报
    pub async fn dispatch(&self, players: &[Player]) -> BatchReport {
        let mut report = BatchReport::default();

        for player in players {
            report.attempted += 1;

            match self.sink.send(player).await {
                Ok(()) => {
                    self.record_audit(player);
                    info!(player_id = player.player_id(), "选手上报成功: {}", player.player_name());
                    report.sent.push(player.player_id().to_string());
                }
                Err(e) => {
                    // 服务端已收到（非 200）时仍记审计日志
                    if e.reached_server() {
                        self.record_audit(player);
                    }
                    warn!(player_id = player.player_id(), error = %e, "选手上报失败: {}", player.player_name());
                    report.failed.push(player.player_id().to_string());
                }
            }
        }

        report
    }

    /// 完整运行: 读取 → 上报
    #[instrument(skip(self, source), fields(file = %source.as_ref().display()))]
    pub async fn run<P: AsRef<Path>>(&mut self, source: P) -> ImportResult<BatchReport> {
        let players = self.load_players(source)?;
        Ok(self.dispatch(&players).await)
    }

    /// 审计日志失败单独告警，不影响上报结果
    fn record_audit(&self, player: &Player) {
        if let Err(e) = self.audit_log.append(&player.audit_entry()) {
            warn!(player_id = player.player_id(), error = %e, "审计日志写入失败");
        }
    }
}
