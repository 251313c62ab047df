// ============================================
// src/pool.rs
// 出題プール (重複なしのランダム抽選 + 自動補充)
// ============================================

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// 乱数源。`[0, 1)` の値を返す
///
/// テストでは固定の値列を返す実装を差し込む。
pub trait RandomSource {
    fn next(&mut self) -> f64;
}

/// `rand` の `StdRng` を使った本番用の乱数源
#[derive(Debug, Clone)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// OS のエントロピーから初期化
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// シード固定 (`--seed` 指定時、再現用)
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for StdRandom {
    fn next(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// 出題プール
///
/// `original` は初期化後に変更しない。`remaining` が空になったら
/// `original` のコピーで補充する (1周 = `remaining` が空になるまで)。
#[derive(Debug, Clone)]
pub struct Pool<T, R> {
    remaining: Vec<T>,
    original: Vec<T>,
    rng: R,
    cycle: u64,
}

impl<T: Clone, R: RandomSource> Pool<T, R> {
    /// 空のプールを作成
    pub fn new(rng: R) -> Self {
        Self {
            remaining: Vec::new(),
            original: Vec::new(),
            rng,
            cycle: 0,
        }
    }

    /// `items` を元データとして保持し、そのコピーを残りプールにする
    ///
    /// 空の列も受け付ける (以後の `draw` は常に `None`)。
    pub fn initialize(&mut self, items: Vec<T>) {
        self.remaining = items.clone();
        self.original = items;
        self.cycle = 0;
    }

    /// 残りプールからランダムに1つ取り出す
    pub fn draw(&mut self) -> Option<T> {
        if self.remaining.is_empty() {
            if self.original.is_empty() {
                return None; // 何も設定されていない
            }
            self.remaining = self.original.clone();
            self.cycle += 1;
            debug!(cycle = self.cycle, size = self.remaining.len(), "pool replenished");
        }

        let len = self.remaining.len();
        // 乱数源が 1.0 を返しても範囲外にならないようにする
        let idx = ((self.rng.next() * len as f64).floor() as usize).min(len - 1);
        let item = self.remaining.remove(idx);
        debug!(idx, left = self.remaining.len(), "pool draw");
        Some(item)
    }

    /// 両方のリストを空にする (セッション終了時)
    pub fn clear(&mut self) {
        self.remaining.clear();
        self.original.clear();
        self.cycle = 0;
    }

    /// 今の周でまだ出ていない項目
    pub fn remaining(&self) -> &[T] {
        &self.remaining
    }

    pub fn original(&self) -> &[T] {
        &self.original
    }

    /// 補充した回数
    pub fn cycle(&self) -> u64 {
        self.cycle
    }
}
