// ==========================================
// 选手数据上报工具 - 选手 ID 生成器
// ==========================================
// 格式: "PL" + 4 位补零数字，均匀取自 [0, 10000)
// 随机源: 单个 StdRng，创建时初始化一次，不按调用重新播种
// 说明: 不保证唯一，不做去重
// ==========================================

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// ID 前缀
pub const PLAYER_ID_PREFIX: &str = "PL";

/// ID 数字部分上界（不含）
pub const PLAYER_ID_SPACE: u32 = 10_000;

pub struct PlayerIdGenerator {
    rng: StdRng,
}

impl PlayerIdGenerator {
    /// 以操作系统熵源初始化（生产环境）
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// 以固定种子初始化（测试可复现）
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// 生成下一个选手 ID
    pub fn next_id(&mut self) -> String {
        let n = self.rng.random_range(0..PLAYER_ID_SPACE);
        format!("{}{:04}", PLAYER_ID_PREFIX, n)
    }
}
