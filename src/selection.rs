// ============================================
// src/selection.rs
// 表の列選択 (チェック状態 + 表の切り替え)
// ============================================

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::kana::{self, Script, TableKind};
use crate::session::QuizItem;

/// 表の1列を指す
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnRef {
    pub script: Script,
    pub table: TableKind,
    pub column: usize,
}

impl ColumnRef {
    pub fn new(script: Script, table: TableKind, column: usize) -> Self {
        Self { script, table, column }
    }

    /// 列のラベル ("ka" など)。範囲外なら `None`
    pub fn label(&self) -> Option<&'static str> {
        kana::table(self.script, self.table)
            .and_then(|t| t.columns.get(self.column))
            .map(|c| c.label)
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.script, self.table, self.label().unwrap_or("?"))
    }
}

/// "hiragana/simple/ka" 形式をパースする
impl FromStr for ColumnRef {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ConfigError::UnknownColumn(s.to_string());

        let mut parts = s.split('/');
        let (Some(script), Some(table), Some(label), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(unknown());
        };

        let script = Script::from_name(script).ok_or_else(unknown)?;
        let kind = TableKind::from_name(table).ok_or_else(unknown)?;
        let column = kana::table(script, kind)
            .and_then(|t| t.columns.iter().position(|c| c.label == label))
            .ok_or_else(unknown)?;

        Ok(Self::new(script, kind, column))
    }
}

/// 文字種ごとの状態
#[derive(Debug, Clone)]
struct ScriptState {
    /// 表ごと・列ごとのチェック
    checked: Vec<Vec<bool>>,
    /// 表示中の表のインデックス
    visible: usize,
}

impl ScriptState {
    fn new(script: Script) -> Self {
        Self {
            checked: kana::tables(script)
                .iter()
                .map(|t| vec![false; t.columns.len()])
                .collect(),
            visible: 0,
        }
    }
}

/// 列選択の状態
#[derive(Debug, Clone)]
pub struct Selection {
    hiragana: ScriptState,
    katakana: ScriptState,
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

impl Selection {
    /// 何も選ばれていない状態
    pub fn new() -> Self {
        Self {
            hiragana: ScriptState::new(Script::Hiragana),
            katakana: ScriptState::new(Script::Katakana),
        }
    }

    fn state(&self, script: Script) -> &ScriptState {
        match script {
            Script::Hiragana => &self.hiragana,
            Script::Katakana => &self.katakana,
        }
    }

    fn state_mut(&mut self, script: Script) -> &mut ScriptState {
        match script {
            Script::Hiragana => &mut self.hiragana,
            Script::Katakana => &mut self.katakana,
        }
    }

    fn slot_mut(&mut self, col: ColumnRef) -> Option<&mut bool> {
        let table_idx = table_index(col.script, col.table)?;
        self.state_mut(col.script)
            .checked
            .get_mut(table_idx)?
            .get_mut(col.column)
    }

    pub fn is_checked(&self, col: ColumnRef) -> bool {
        table_index(col.script, col.table)
            .and_then(|t| self.state(col.script).checked.get(t))
            .and_then(|cols| cols.get(col.column))
            .copied()
            .unwrap_or(false)
    }

    /// チェックを反転し、新しい状態を返す (存在しない列なら `None`)
    pub fn toggle(&mut self, col: ColumnRef) -> Option<bool> {
        let slot = self.slot_mut(col)?;
        *slot = !*slot;
        Some(*slot)
    }

    /// チェック状態を設定 (存在しない列なら `false`)
    pub fn set(&mut self, col: ColumnRef, value: bool) -> bool {
        match self.slot_mut(col) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// 表示中の表
    pub fn visible_table(&self, script: Script) -> TableKind {
        let tables = kana::tables(script);
        tables[self.state(script).visible % tables.len()].kind
    }

    /// 次の表へ (最後の次は最初)
    pub fn show_next_table(&mut self, script: Script) {
        let len = kana::tables(script).len();
        let state = self.state_mut(script);
        state.visible = (state.visible + 1) % len;
    }

    /// 前の表へ (最初の前は最後)
    pub fn show_previous_table(&mut self, script: Script) {
        let len = kana::tables(script).len();
        let state = self.state_mut(script);
        state.visible = (state.visible + len - 1) % len;
    }

    /// 表示中の表の列をすべてチェック
    pub fn select_all(&mut self, script: Script) {
        self.apply_to_visible(script, true);
    }

    /// 表示中の表の列をすべて外す
    pub fn reset_all(&mut self, script: Script) {
        self.apply_to_visible(script, false);
    }

    fn apply_to_visible(&mut self, script: Script, value: bool) {
        let state = self.state_mut(script);
        let visible = state.visible;
        if let Some(cols) = state.checked.get_mut(visible) {
            cols.iter_mut().for_each(|c| *c = value);
        }
    }

    /// すべての表のすべての列をチェック (`--all`)
    pub fn select_everything(&mut self) {
        for script in Script::ALL {
            for cols in self.state_mut(script).checked.iter_mut() {
                cols.iter_mut().for_each(|c| *c = true);
            }
        }
    }

    /// チェックされた列のかなを出題リストにする
    ///
    /// 並び順: 清音表の列ごとに ひらがな → カタカナ、次に拗音表も同様、
    /// 最後にカタカナの外来語表。
    pub fn collect_items(&self) -> Vec<QuizItem> {
        let mut items = Vec::new();

        for kind in [TableKind::Simple, TableKind::Double] {
            let len = kana::table(Script::Hiragana, kind).map_or(0, |t| t.columns.len());
            for column in 0..len {
                self.add_column_if(ColumnRef::new(Script::Hiragana, kind, column), &mut items);
                self.add_column_if(ColumnRef::new(Script::Katakana, kind, column), &mut items);
            }
        }

        let extra_len = kana::table(Script::Katakana, TableKind::Extra).map_or(0, |t| t.columns.len());
        for column in 0..extra_len {
            self.add_column_if(
                ColumnRef::new(Script::Katakana, TableKind::Extra, column),
                &mut items,
            );
        }

        items
    }

    fn add_column_if(&self, col: ColumnRef, items: &mut Vec<QuizItem>) {
        if !self.is_checked(col) {
            return;
        }
        let Some(column) = kana::table(col.script, col.table).and_then(|t| t.columns.get(col.column))
        else {
            return;
        };
        items.extend(
            column
                .cells
                .iter()
                .map(|(symbol, romaji)| QuizItem::new(*symbol, *romaji)),
        );
    }

    /// チェックされている列の数
    pub fn checked_count(&self) -> usize {
        Script::ALL
            .into_iter()
            .flat_map(|s| self.state(s).checked.iter())
            .map(|cols| cols.iter().filter(|c| **c).count())
            .sum()
    }
}

fn table_index(script: Script, kind: TableKind) -> Option<usize> {
    kana::tables(script).iter().position(|t| t.kind == kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(name: &str) -> ColumnRef {
        name.parse().unwrap()
    }

    #[test]
    fn test_parse_column_names() {
        let c = col("hiragana/simple/ka");
        assert_eq!(c, ColumnRef::new(Script::Hiragana, TableKind::Simple, 1));
        assert_eq!(c.to_string(), "hiragana/simple/ka");
        assert_eq!(col("katakana/extra/fa").table, TableKind::Extra);

        for bad in ["", "hiragana/simple", "hiragana/extra/fa", "romaji/simple/a", "hiragana/simple/xx", "hiragana/simple/ka/1"] {
            assert!(
                matches!(bad.parse::<ColumnRef>(), Err(ConfigError::UnknownColumn(ref s)) if s == bad),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_toggle() {
        let mut sel = Selection::new();
        let c = col("katakana/double/sha");
        assert!(!sel.is_checked(c));
        assert_eq!(sel.toggle(c), Some(true));
        assert!(sel.is_checked(c));
        assert_eq!(sel.toggle(c), Some(false));

        let out_of_range = ColumnRef::new(Script::Hiragana, TableKind::Extra, 0);
        assert_eq!(sel.toggle(out_of_range), None);
        assert!(!sel.is_checked(out_of_range));
    }

    #[test]
    fn test_carousel_wraps() {
        let mut sel = Selection::new();
        assert_eq!(sel.visible_table(Script::Katakana), TableKind::Simple);
        sel.show_previous_table(Script::Katakana);
        assert_eq!(sel.visible_table(Script::Katakana), TableKind::Extra);
        sel.show_next_table(Script::Katakana);
        assert_eq!(sel.visible_table(Script::Katakana), TableKind::Simple);

        sel.show_next_table(Script::Hiragana);
        sel.show_next_table(Script::Hiragana);
        assert_eq!(sel.visible_table(Script::Hiragana), TableKind::Simple);
    }

    #[test]
    fn test_select_all_only_touches_visible_table() {
        let mut sel = Selection::new();
        sel.show_next_table(Script::Hiragana); // double
        sel.select_all(Script::Hiragana);

        assert!(sel.is_checked(col("hiragana/double/kya")));
        assert!(sel.is_checked(col("hiragana/double/pya")));
        assert!(!sel.is_checked(col("hiragana/simple/a")));
        assert!(!sel.is_checked(col("katakana/double/kya")));

        sel.reset_all(Script::Hiragana);
        assert_eq!(sel.checked_count(), 0);
    }

    #[test]
    fn test_collect_items_interleaves_scripts() {
        let mut sel = Selection::new();
        sel.set(col("katakana/extra/ye"), true);
        sel.set(col("katakana/simple/wa"), true);
        sel.set(col("hiragana/double/ja"), true);
        sel.set(col("hiragana/simple/n"), true);
        sel.set(col("hiragana/simple/wa"), true);

        let symbols: Vec<String> = sel.collect_items().into_iter().map(|i| i.symbol).collect();
        assert_eq!(
            symbols,
            ["わ", "を", "ワ", "ヲ", "ん", "じゃ", "じゅ", "じょ", "イェ"]
        );
    }

    #[test]
    fn test_nothing_selected_gives_no_items() {
        assert!(Selection::new().collect_items().is_empty());
    }

    #[test]
    fn test_select_everything() {
        let mut sel = Selection::new();
        sel.select_everything();
        let total: usize = Script::ALL
            .into_iter()
            .flat_map(kana::tables)
            .map(|t| t.columns.len())
            .sum();
        assert_eq!(sel.checked_count(), total);
        assert!(sel.collect_items().iter().any(|i| i.symbol == "ヴ"));
    }
}
