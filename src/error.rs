// ============================================
// src/error.rs
// エラー型
// ============================================

use std::path::PathBuf;

use thiserror::Error;

/// セッション操作のエラー
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    /// 出題中の問題がないのに `evaluate` / `reveal` が呼ばれた
    #[error("no active question; call start() first")]
    NoActiveQuestion,
}

/// 設定ファイルのエラー
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("unknown kana column `{0}` (expected <script>/<table>/<label>)")]
    UnknownColumn(String),
}
