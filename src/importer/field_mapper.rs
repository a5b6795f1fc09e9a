// ==========================================
// 选手数据上报工具 - 字段映射器实现
// ==========================================
// 职责: 原始行（按列位置）→ Player
// 红线: 列位置固定；列顺序变化只会产出错位字段，不会报错
// ==========================================

use crate::domain::Player;
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::id_generator::PlayerIdGenerator;
use crate::importer::player_importer_trait::FieldMapper as FieldMapperTrait;

// ==========================================
// 列位置
// ==========================================
pub mod columns {
    pub const NAME: usize = 0;
    pub const RATING: usize = 1;
    pub const POOL: usize = 2;
    pub const ROLE: usize = 3;
    pub const COUNTRY: usize = 4;
    pub const BASE_PRICE: usize = 5;
}

/// 评分默认值
pub const DEFAULT_RATING: f64 = 0.0;

/// 底价默认值
pub const DEFAULT_BASE_PRICE: i64 = 0;

pub struct FieldMapper {
    cleaner: DataCleaner,
}

impl FieldMapper {
    pub fn new() -> Self {
        Self {
            cleaner: DataCleaner,
        }
    }

    /// 取单元格文本，缺失列视为空串
    fn cell<'a>(&self, row: &'a [String], index: usize) -> &'a str {
        row.get(index).map(String::as_str).unwrap_or("")
    }
}

impl Default for FieldMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldMapperTrait for FieldMapper {
    fn map_to_player(&self, row: &[String], ids: &mut PlayerIdGenerator) -> Player {
        Player::new(
            self.cell(row, columns::NAME).to_string(),
            ids.next_id(),
            self.cleaner
                .parse_float_or_default(self.cell(row, columns::RATING), DEFAULT_RATING),
            self.cleaner
                .parse_int_or_default(self.cell(row, columns::BASE_PRICE), DEFAULT_BASE_PRICE),
            self.cleaner.format_pool(self.cell(row, columns::POOL)),
            self.cleaner
                .classify_nationality(self.cell(row, columns::COUNTRY)),
            self.cell(row, columns::ROLE).to_string(),
        )
    }
}
