// ==========================================
// 选手数据上报工具 - 导入层
// ==========================================
// 职责: 读取选手表，生成内存中的 Player 序列
// 支持: Excel, CSV
// ==========================================

// 模块声明
pub mod data_cleaner;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod id_generator;
pub mod player_importer;
pub mod player_importer_trait;

// 重导出核心类型
pub use data_cleaner::DataCleaner;
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper as FieldMapperImpl;
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use id_generator::PlayerIdGenerator;
pub use player_importer::PlayerImporter;

// 重导出 Trait 接口
pub use player_importer_trait::{FieldMapper, FileParser, RawRow};
