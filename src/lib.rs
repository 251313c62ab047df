// ============================================
// src/lib.rs
// KANA WiZ のコア (出題プール・判定・かな表)
// 描画には依存しない。TUI は main.rs 側
// ============================================

pub mod config;
pub mod error;
pub mod kana;
pub mod pool;
pub mod selection;
pub mod session;

pub use error::{ConfigError, SessionError};
pub use pool::{Pool, RandomSource, StdRandom};
pub use selection::{ColumnRef, Selection};
pub use session::{MatchResult, QuizItem, Session};
