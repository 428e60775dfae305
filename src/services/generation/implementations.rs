// ペイロード値生成の具象実装

use crate::core::ValueSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// 乱数によるペイロード値生成実装
///
/// 値は1〜100の一様分布、ペーシング遅延は500〜1500msの一様分布。
/// シード指定で再現可能な実行もできる。
#[derive(Debug, Clone)]
pub struct RandomValueSource {
    rng: StdRng,
    value_min: u32,
    value_max: u32,
    delay_min_ms: u64,
    delay_max_ms: u64,
}

impl RandomValueSource {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// シード指定で作成（再現可能な実行用）
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            value_min: 1,
            value_max: 100,
            delay_min_ms: 500,
            delay_max_ms: 1500,
        }
    }

    /// ペーシング遅延の範囲を変更（テストでは0にして高速化）
    pub fn with_delay_millis(mut self, min_ms: u64, max_ms: u64) -> Self {
        self.delay_min_ms = min_ms;
        self.delay_max_ms = max_ms;
        self
    }
}

impl Default for RandomValueSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueSource for RandomValueSource {
    fn next_value(&mut self) -> u32 {
        self.rng.gen_range(self.value_min..=self.value_max)
    }

    fn next_delay(&mut self) -> Duration {
        if self.delay_max_ms == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(self.rng.gen_range(self.delay_min_ms..=self.delay_max_ms))
    }
}

/// 固定列によるペイロード値生成実装（テスト用および開発用）
///
/// 列を使い切った場合は先頭から繰り返す。遅延は常にゼロ。
#[derive(Debug, Clone)]
pub struct SequenceValueSource {
    values: Vec<u32>,
    position: usize,
}

impl SequenceValueSource {
    pub fn new(values: Vec<u32>) -> Self {
        assert!(!values.is_empty(), "値の列は空であってはならない");
        Self {
            values,
            position: 0,
        }
    }
}

impl ValueSource for SequenceValueSource {
    fn next_value(&mut self) -> u32 {
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }

    fn next_delay(&mut self) -> Duration {
        Duration::ZERO
    }
}
