// ==========================================
// 选手数据上报工具 - 文件解析器实现
// ==========================================
// 支持: Excel (.xlsx/.xlsm/.xls/.ods) / CSV (.csv)
// 规则: 第一行为表头并跳过，列按位置读取，不按列名查找
// 规则: 表头之后的每一行都保留，空白行同样交给映射器
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::player_importer_trait::{FileParser, RawRow};
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// 检查文件存在
fn ensure_exists(path: &Path) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

/// 小写扩展名（无扩展名时为空串）
fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_rows(&self, file_path: &Path) -> ImportResult<Vec<RawRow>> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let mut records = reader.records();

        // 表头
        match records.next() {
            Some(header) => {
                header?;
            }
            None => {
                return Err(ImportError::EmptySource(file_path.display().to_string()));
            }
        }

        let mut rows: Vec<RawRow> = Vec::new();
        for result in records {
            let record = result?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        debug!(rows = rows.len(), "CSV 解析完成");
        Ok(rows)
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_rows(&self, file_path: &Path) -> ImportResult<Vec<RawRow>> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if !matches!(ext.as_str(), "xlsx" | "xlsm" | "xls" | "ods") {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        // 工作簿句柄在本作用域结束时释放
        let mut workbook = open_workbook_auto(file_path)?;

        // 读取第一个 sheet
        let sheet_names = workbook.sheet_names();
        let sheet_name = sheet_names
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无工作表".to_string()))?;

        let range = workbook.worksheet_range(&sheet_name)?;

        let mut range_rows = range.rows();
        if range_rows.next().is_none() {
            return Err(ImportError::EmptySource(file_path.display().to_string()));
        }

        let mut rows: Vec<RawRow> = Vec::new();
        for data_row in range_rows {
            rows.push(data_row.iter().map(|cell| cell.to_string()).collect());
        }

        debug!(sheet = %sheet_name, rows = rows.len(), "Excel 解析完成");
        Ok(rows)
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalFileParser;

impl FileParser for UniversalFileParser {
    fn parse_rows(&self, file_path: &Path) -> ImportResult<Vec<RawRow>> {
        match extension_of(file_path).as_str() {
            "csv" => CsvParser.parse_rows(file_path),
            "xlsx" | "xlsm" | "xls" | "ods" => ExcelParser.parse_rows(file_path),
            other => {
                ensure_exists(file_path)?;
                Err(ImportError::UnsupportedFormat(other.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use std::io::Write;
    use tempfile::Builder;

    fn temp_csv(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file
    }

    #[test]
    fn test_csv_parser_skips_header() {
        let file = temp_csv(&[
            "Name,Rating,Pool,Role,Country,Base",
            "Raj Sharma,8.5,P1,Batsman,India,200",
            "Tom Lee,7,P2,Bowler,Australia,150",
        ]);

        let rows = CsvParser.parse_rows(file.path()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0], "Raj Sharma");
        assert_eq!(rows[1][4], "Australia");
    }

    #[test]
    fn test_csv_parser_keeps_cells_verbatim() {
        let file = temp_csv(&["Name,Rating", "\"  Raj  \",8.5"]);

        let rows = CsvParser.parse_rows(file.path()).unwrap();

        assert_eq!(rows[0][0], "  Raj  ");
    }

    #[test]
    fn test_csv_parser_short_rows_allowed() {
        let file = temp_csv(&["Name,Rating,Pool", "Raj"]);

        let rows = CsvParser.parse_rows(file.path()).unwrap();

        assert_eq!(rows, vec![vec!["Raj".to_string()]]);
    }

    #[test]
    fn test_csv_parser_keeps_blank_rows() {
        let file = temp_csv(&["Name,Rating", "A,1", ",", "B,2"]);

        let rows = CsvParser.parse_rows(file.path()).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], vec![String::new(), String::new()]);
        assert_eq!(rows[2][0], "B");
    }

    #[test]
    fn test_csv_parser_empty_file() {
        let file = temp_csv(&[]);

        let result = CsvParser.parse_rows(file.path());

        assert!(matches!(result, Err(ImportError::EmptySource(_))));
    }

    #[test]
    fn test_parser_file_not_found() {
        let result = UniversalFileParser.parse_rows(Path::new("non_existent.xlsx"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));

        let result = CsvParser.parse_rows(Path::new("non_existent.csv"));
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_universal_parser_unsupported_format() {
        let file = Builder::new().suffix(".txt").tempfile().unwrap();

        let result = UniversalFileParser.parse_rows(file.path());

        assert!(matches!(result, Err(ImportError::UnsupportedFormat(ext)) if ext == "txt"));
    }

    #[test]
    fn test_excel_parser_rejects_garbage() {
        let mut file = Builder::new().suffix(".xlsx").tempfile().unwrap();
        write!(file, "not a workbook").unwrap();

        let result = ExcelParser.parse_rows(file.path());

        assert!(matches!(result, Err(ImportError::ExcelParseError(_))));
    }

    #[test]
    fn test_excel_parser_reads_first_sheet() {
        let file = Builder::new().suffix(".xlsx").tempfile().unwrap();

        let mut workbook = Workbook::new();
        let players = workbook.add_worksheet();
        players.set_name("Players").unwrap();
        for (col, title) in ["Name", "Rating", "Pool", "Role", "Country", "Base"]
            .iter()
            .enumerate()
        {
            players.write_string(0, col as u16, *title).unwrap();
        }
        players.write_string(1, 0, "Raj Sharma").unwrap();
        players.write_number(1, 1, 8.5).unwrap();
        players.write_string(1, 2, "P1").unwrap();
        players.write_string(1, 3, "Batsman").unwrap();
        players.write_string(1, 4, "India").unwrap();
        players.write_number(1, 5, 200).unwrap();
        // 第 3 行留空
        players.write_string(3, 0, "Tom Lee").unwrap();

        let other = workbook.add_worksheet();
        other.set_name("Other").unwrap();
        other.write_string(0, 0, "Ignored").unwrap();
        other.write_string(1, 0, "Nobody").unwrap();

        workbook.save(file.path()).unwrap();

        let rows = ExcelParser.parse_rows(file.path()).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0],
            vec!["Raj Sharma", "8.5", "P1", "Batsman", "India", "200"]
        );
        assert!(rows[1].iter().all(|c| c.is_empty()));
        assert_eq!(rows[2][0], "Tom Lee");
    }
}
