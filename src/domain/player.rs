// ==========================================
// 选手数据上报工具 - 选手领域模型
// ==========================================
// 职责: 定义上报记录与审计日志行的结构
// 红线: Player 构造后不可变（字段私有，无 setter）
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Nationality - 国籍分类
// ==========================================
// 二元分类: 源列值恰好为 "India" 时为 Indian，其余一律 Foreign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nationality {
    Indian,
    Foreign,
}

impl Nationality {
    /// 按源列值分类（区分大小写，精确匹配）
    pub fn classify(value: &str) -> Self {
        if value == "India" {
            Nationality::Indian
        } else {
            Nationality::Foreign
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Nationality::Indian => "Indian",
            Nationality::Foreign => "Foreign",
        }
    }
}

impl fmt::Display for Nationality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==========================================
// Player - 上报记录
// ==========================================
// 用途: 导入层构造，上报层只读
// 对齐: POST /api/player 请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    player_name: String,              // 选手姓名（第 0 列）
    player_id: String,                // 选手 ID（生成，PL + 4 位数字）
    rating: f64,                      // 评分（第 1 列，默认 0.0）
    bought_at: Option<String>,        // 成交方（创建时恒为 null）
    base_price: i64,                  // 底价（第 5 列，默认 0）
    pocket: String,                   // 分组（第 2 列，去掉前缀 P）
    nationality: Nationality,         // 国籍分类（第 4 列）
    role: String,                     // 角色（第 3 列）
}

impl Player {
    /// 构造上报记录，bought_at 固定为 None
    pub fn new(
        player_name: String,
        player_id: String,
        rating: f64,
        base_price: i64,
        pocket: String,
        nationality: Nationality,
        role: String,
    ) -> Self {
        Self {
            player_name,
            player_id,
            rating,
            bought_at: None,
            base_price,
            pocket,
            nationality,
            role,
        }
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn player_id(&self) -> &str {
        &self.player_id
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn bought_at(&self) -> Option<&str> {
        self.bought_at.as_deref()
    }

    pub fn base_price(&self) -> i64 {
        self.base_price
    }

    pub fn pocket(&self) -> &str {
        &self.pocket
    }

    pub fn nationality(&self) -> Nationality {
        self.nationality
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    /// 提取审计日志行
    pub fn audit_entry(&self) -> AuditEntry {
        AuditEntry {
            player_name: self.player_name.clone(),
            player_id: self.player_id.clone(),
        }
    }
}

// ==========================================
// AuditEntry - 审计日志行
// ==========================================
// 对齐: players.json 每行 {"playerName": ..., "playerId": ...}
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub player_name: String,
    pub player_id: String,
}
