// ============================================
// src/config.rs
// 設定ファイル (settings.json) の読み込み
// ============================================

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::selection::{ColumnRef, Selection};

const SETTINGS_FILE: &str = "settings.json";

/// 起動時の設定
///
/// 進捗は保存しない。ここにあるのは起動時の初期状態だけ。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 最初からチェックしておく列 ("hiragana/simple/ka" 形式)
    pub preselect: Vec<String>,
    /// 乱数のシード (再現用)。`--seed` が優先
    pub seed: Option<u64>,
}

impl Settings {
    // MARK:設定ファイルのパスを取得する関数
    /// OSごとの設定ディレクトリ内の settings.json
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("jp", "Fukumoto0141", "KANA_WIZ")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE))
    }

    /// MARK:ファイルから読み込む
    ///
    /// ファイルがなければデフォルト値。壊れていればエラー。
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `preselect` を列の参照に変換する
    pub fn preselected_columns(&self) -> Result<Vec<ColumnRef>, ConfigError> {
        self.preselect.iter().map(|name| name.parse()).collect()
    }

    /// `preselect` の列をチェックする
    pub fn apply(&self, selection: &mut Selection) -> Result<(), ConfigError> {
        for col in self.preselected_columns()? {
            selection.set(col, true);
        }
        Ok(())
    }
}
