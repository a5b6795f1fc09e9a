// ==========================================
// 选手数据上报工具 - 数据清洗器实现
// ==========================================
// 职责: 数值解析（失败取默认值）/ 分组前缀去除 / 国籍分类
// 红线: 任何字段解析失败都不拒绝整行
// ==========================================

use crate::domain::Nationality;

pub struct DataCleaner;

impl DataCleaner {
    /// 解析前导十进制整数，失败返回默认值
    ///
    /// # 规则
    /// - 跳过前导空白
    /// - 可选符号 + 至少一位数字，其后的任意文本忽略（"200abc" → 200）
    /// - 无数字或溢出 → default
    pub fn parse_int_or_default(&self, value: &str, default: i64) -> i64 {
        let s = value.trim_start();
        let bytes = s.as_bytes();

        let mut end = 0;
        if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
            end = 1;
        }
        let digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end == digits_start {
            return default;
        }

        s[..end].parse::<i64>().unwrap_or(default)
    }

    /// 解析前导浮点数，失败返回默认值
    ///
    /// # 规则
    /// - 跳过前导空白
    /// - 取最长的合法前缀: 符号、整数部分、小数部分、指数
    /// - 整数部分与小数部分都没有数字 → default
    /// - 指数标记后没有数字（"2e"）→ default
    /// - 超出 f64 范围 → default
    pub fn parse_float_or_default(&self, value: &str, default: f64) -> f64 {
        let s = value.trim_start();
        let bytes = s.as_bytes();
        let count_digits = |from: usize| {
            bytes[from..]
                .iter()
                .take_while(|b| b.is_ascii_digit())
                .count()
        };

        let mut end = 0;
        if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
            end = 1;
        }

        let int_digits = count_digits(end);
        end += int_digits;

        let mut frac_digits = 0;
        if bytes.get(end) == Some(&b'.') {
            frac_digits = count_digits(end + 1);
            if int_digits > 0 || frac_digits > 0 {
                end += 1 + frac_digits;
            }
        }

        if int_digits == 0 && frac_digits == 0 {
            return default;
        }

        if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
            let mut exp_end = end + 1;
            if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
                exp_end += 1;
            }
            let exp_digits = count_digits(exp_end);
            if exp_digits == 0 {
                return default;
            }
            end = exp_end + exp_digits;
        }

        s[..end]
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(default)
    }

    /// 去除分组代码的前缀 'P'（仅当长度大于 1）
    pub fn format_pool(&self, value: &str) -> String {
        match value.strip_prefix('P') {
            Some(rest) if value.len() > 1 => rest.to_string(),
            _ => value.to_string(),
        }
    }

    /// 国籍分类
    pub fn classify_nationality(&self, value: &str) -> Nationality {
        Nationality::classify(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_or_default() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.parse_int_or_default("abc", 7), 7);
        assert_eq!(cleaner.parse_int_or_default("42", 7), 42);
        assert_eq!(cleaner.parse_int_or_default("", 0), 0);
        assert_eq!(cleaner.parse_int_or_default("-15", 0), -15);
        assert_eq!(cleaner.parse_int_or_default("+15", 0), 15);
        assert_eq!(cleaner.parse_int_or_default("  200", 0), 200);
    }

    #[test]
    fn test_parse_int_leading_prefix() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.parse_int_or_default("200abc", 0), 200);
        assert_eq!(cleaner.parse_int_or_default("200.5", 0), 200);
        assert_eq!(cleaner.parse_int_or_default("-", 3), 3);
        assert_eq!(cleaner.parse_int_or_default("x200", 3), 3);
    }

    #[test]
    fn test_parse_int_overflow_defaults() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.parse_int_or_default("99999999999999999999", 5), 5);
    }

    #[test]
    fn test_parse_float_or_default() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.parse_float_or_default("8.5", 0.0), 8.5);
        assert_eq!(cleaner.parse_float_or_default("7", 0.0), 7.0);
        assert_eq!(cleaner.parse_float_or_default("abc", 1.5), 1.5);
        assert_eq!(cleaner.parse_float_or_default("", 0.0), 0.0);
        assert_eq!(cleaner.parse_float_or_default(".5", 0.0), 0.5);
        assert_eq!(cleaner.parse_float_or_default("5.", 0.0), 5.0);
        assert_eq!(cleaner.parse_float_or_default("-2.25", 0.0), -2.25);
    }

    #[test]
    fn test_parse_float_leading_prefix() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.parse_float_or_default("8.5 stars", 0.0), 8.5);
        assert_eq!(cleaner.parse_float_or_default("1e3", 0.0), 1000.0);
        assert_eq!(cleaner.parse_float_or_default("2e", 0.0), 0.0);
        assert_eq!(cleaner.parse_float_or_default("2e+", 1.0), 1.0);
        assert_eq!(cleaner.parse_float_or_default("2.5E-1x", 0.0), 0.25);
        assert_eq!(cleaner.parse_float_or_default(".", 4.0), 4.0);
        assert_eq!(cleaner.parse_float_or_default("-", 4.0), 4.0);
    }

    #[test]
    fn test_parse_float_out_of_range_defaults() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.parse_float_or_default("1e400", 0.0), 0.0);
        assert_eq!(cleaner.parse_float_or_default("-1e400", 3.0), 3.0);
        assert_eq!(cleaner.parse_float_or_default("1e-400", 9.0), 0.0);
    }

    #[test]
    fn test_format_pool() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.format_pool("P5"), "5");
        assert_eq!(cleaner.format_pool("5"), "5");
        assert_eq!(cleaner.format_pool("P"), "P");
        assert_eq!(cleaner.format_pool(""), "");
        assert_eq!(cleaner.format_pool("PP2"), "P2");
        assert_eq!(cleaner.format_pool("p5"), "p5");
    }

    #[test]
    fn test_classify_nationality() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.classify_nationality("India"), Nationality::Indian);
        assert_eq!(cleaner.classify_nationality("india"), Nationality::Foreign);
        assert_eq!(cleaner.classify_nationality("Australia"), Nationality::Foreign);
    }
}
