// ==========================================
// 选手数据上报工具 - 导入 Trait
// ==========================================
// 职责: 定义导入管道各阶段接口（不包含实现）
// 流程: 文件解析 → 截断 → 字段映射（含 ID 生成）
// ==========================================

use crate::domain::Player;
use crate::importer::error::ImportResult;
use crate::importer::id_generator::PlayerIdGenerator;
use std::path::Path;

/// 原始行：按列位置排列的单元格文本
pub type RawRow = Vec<String>;

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口
// 实现者: ExcelParser, CsvParser
pub trait FileParser: Send + Sync {
    /// 解析文件为原始数据行（已跳过表头）
    ///
    /// # 参数
    /// - file_path: 文件路径
    ///
    /// # 返回
    /// - Ok(Vec<RawRow>): 表头之后的全部非空行
    /// - Err: 文件不存在、格式错误、无表头
    fn parse_rows(&self, file_path: &Path) -> ImportResult<Vec<RawRow>>;
}

// ==========================================
// FieldMapper Trait
// ==========================================
// 用途: 原始行 → Player
// 实现者: FieldMapperImpl
pub trait FieldMapper: Send + Sync {
    /// 将原始行映射为 Player
    ///
    /// # 参数
    /// - row: 原始行（按列位置）
    /// - ids: 选手 ID 生成器
    ///
    /// # 返回
    /// - Player: 任何行都会产出记录，解析失败的字段取默认值
    fn map_to_player(&self, row: &[String], ids: &mut PlayerIdGenerator) -> Player;
}
