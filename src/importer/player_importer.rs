// ==========================================
// 选手数据上报工具 - 选手导入器
// ==========================================
// 职责: 整合导入流程，从文件到内存中的 Player 序列
// 流程: 解析 → 截断（最多 max_rows 行）→ 映射（含 ID 生成）
// ==========================================

use crate::domain::Player;
use crate::importer::error::ImportResult;
use crate::importer::id_generator::PlayerIdGenerator;
use crate::importer::player_importer_trait::{FieldMapper, FileParser};
use std::path::Path;
use tracing::{debug, info, instrument};

pub struct PlayerImporter {
    file_parser: Box<dyn FileParser>,
    field_mapper: Box<dyn FieldMapper>,
    max_rows: usize,
}

impl PlayerImporter {
    /// 创建新的 PlayerImporter 实例
    ///
    /// # 参数
    /// - file_parser: 文件解析器
    /// - field_mapper: 字段映射器
    /// - max_rows: 最多处理的数据行数
    pub fn new(
        file_parser: Box<dyn FileParser>,
        field_mapper: Box<dyn FieldMapper>,
        max_rows: usize,
    ) -> Self {
        Self {
            file_parser,
            field_mapper,
            max_rows,
        }
    }

    /// 读取选手表并转换为 Player 序列
    ///
    /// # 返回
    /// - Ok(Vec<Player>): 长度不超过 max_rows
    /// - Err: 文件无法打开或读取（调用方应视为致命错误）
    #[instrument(skip(self, file_path, ids), fields(file = %file_path.as_ref().display()))]
    pub fn read_players<P: AsRef<Path>>(
        &self,
        file_path: P,
        ids: &mut PlayerIdGenerator,
    ) -> ImportResult<Vec<Player>> {
        debug!("步骤 1: 解析文件");
        let mut rows = self.file_parser.parse_rows(file_path.as_ref())?;
        let total_rows = rows.len();

        debug!("步骤 2: 截断");
        rows.truncate(self.max_rows);

        debug!("步骤 3: 字段映射");
        let players: Vec<Player> = rows
            .iter()
            .map(|row| self.field_mapper.map_to_player(row, ids))
            .collect();

        info!(total_rows, accepted = players.len(), "选手表读取完成");
        Ok(players)
    }
}
