// ============================================
// src/app.rs
// アプリ全体の状態とキー入力の処理
// ============================================

use crossterm::event::{KeyCode, KeyEvent};
use tracing::warn;

use kanawiz::kana::{self, Script};
use kanawiz::{ColumnRef, MatchResult, RandomSource, Selection, Session};

/// 画面 (タブ)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Hiragana,
    Katakana,
    Start,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Hiragana, Screen::Katakana, Screen::Start];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Hiragana => "Hiragana",
            Screen::Katakana => "Katakana",
            Screen::Start => "Start",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// かな表の画面ならその文字種
    pub fn script(self) -> Option<Script> {
        match self {
            Screen::Hiragana => Some(Script::Hiragana),
            Screen::Katakana => Some(Script::Katakana),
            Screen::Start => None,
        }
    }
}

/// アプリ全体の状態を管理する
pub struct AppState<R> {
    pub screen: Screen,
    pub selection: Selection,
    pub session: Session<R>,

    /// 表の画面でのカーソル位置 (ひらがな, カタカナ)
    cursors: [usize; 2],

    /// 入力中のローマ字
    pub input: String,
    /// ミスタイプ中か
    pub is_error: bool,
    /// Start を開いたが何も選ばれていなかった
    pub nothing_selected: bool,
    pub should_quit: bool,
}

impl<R: RandomSource> AppState<R> {
    pub fn new(selection: Selection, rng: R) -> Self {
        Self {
            screen: Screen::Hiragana,
            selection,
            session: Session::new(rng),
            cursors: [0, 0],
            input: String::new(),
            is_error: false,
            nothing_selected: false,
            should_quit: false,
        }
    }

    /// 画面を切り替える。Start に入るとセッション開始、出ると終了
    pub fn switch_to(&mut self, screen: Screen) {
        if screen == self.screen {
            return;
        }
        if self.screen == Screen::Start {
            self.session.stop();
            self.input.clear();
            self.is_error = false;
            self.nothing_selected = false;
        }
        self.screen = screen;
        if screen == Screen::Start {
            self.nothing_selected = !self.session.start(self.selection.collect_items());
        }
    }

    /// キー入力の処理
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.switch_to(self.screen.next()),
            KeyCode::BackTab => self.switch_to(self.screen.previous()),
            _ => match self.screen.script() {
                Some(script) => self.handle_table_key(script, key.code),
                None => self.handle_quiz_key(key.code),
            },
        }
    }

    // --------------------------------------------------
    // かな表の画面
    // --------------------------------------------------

    /// カーソルがある列
    pub fn cursor_column(&self, script: Script) -> ColumnRef {
        let table = self.selection.visible_table(script);
        ColumnRef::new(script, table, self.cursors[script_slot(script)])
    }

    fn visible_len(&self, script: Script) -> usize {
        kana::table(script, self.selection.visible_table(script)).map_or(0, |t| t.columns.len())
    }

    fn handle_table_key(&mut self, script: Script, code: KeyCode) {
        let len = self.visible_len(script);
        let slot = script_slot(script);
        match code {
            KeyCode::Left if len > 0 => self.cursors[slot] = (self.cursors[slot] + len - 1) % len,
            KeyCode::Right if len > 0 => self.cursors[slot] = (self.cursors[slot] + 1) % len,
            KeyCode::Char(' ') => {
                let col = self.cursor_column(script);
                self.selection.toggle(col);
            }
            KeyCode::Char('[') => {
                self.selection.show_previous_table(script);
                self.clamp_cursor(script);
            }
            KeyCode::Char(']') => {
                self.selection.show_next_table(script);
                self.clamp_cursor(script);
            }
            KeyCode::Char('a') => self.selection.select_all(script),
            KeyCode::Char('r') => self.selection.reset_all(script),
            _ => {}
        }
    }

    fn clamp_cursor(&mut self, script: Script) {
        let len = self.visible_len(script);
        let slot = script_slot(script);
        self.cursors[slot] = self.cursors[slot].min(len.saturating_sub(1));
    }

    // --------------------------------------------------
    // 出題画面
    // --------------------------------------------------

    fn handle_quiz_key(&mut self, code: KeyCode) {
        // 出題中でなければ入力は無効
        if self.session.current().is_none() {
            return;
        }
        match code {
            KeyCode::Up => {
                let _ = self.session.reveal();
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.on_input_changed();
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                self.on_input_changed();
            }
            _ => {}
        }
    }

    /// 入力が変わるたびに判定する
    fn on_input_changed(&mut self) {
        match self.session.evaluate(&self.input) {
            Ok(MatchResult::Complete) => {
                // 正解したら自動で次へ
                self.input.clear();
                self.is_error = false;
                self.session.advance();
            }
            Ok(MatchResult::Invalid) => self.is_error = true,
            Ok(MatchResult::Pending) => self.is_error = false,
            Err(e) => warn!(error = %e, "input without an active question"),
        }
    }
}

fn script_slot(script: Script) -> usize {
    match script {
        Script::Hiragana => 0,
        Script::Katakana => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use kanawiz::StdRandom;
    use kanawiz::kana::TableKind;

    fn press(app: &mut AppState<StdRandom>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut AppState<StdRandom>, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn app_with(columns: &[&str]) -> AppState<StdRandom> {
        let mut selection = Selection::new();
        for name in columns {
            selection.set(name.parse().unwrap(), true);
        }
        AppState::new(selection, StdRandom::seeded(1))
    }

    #[test]
    fn test_tab_cycles_screens() {
        let mut app = app_with(&[]);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.screen, Screen::Katakana);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.screen, Screen::Start);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.screen, Screen::Hiragana);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.screen, Screen::Start);
    }

    #[test]
    fn test_start_without_selection() {
        let mut app = app_with(&[]);
        app.switch_to(Screen::Start);
        assert!(app.nothing_selected);
        type_str(&mut app, "a");
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_typing_flow() {
        let mut app = app_with(&["hiragana/simple/n"]);
        app.switch_to(Screen::Start);
        assert!(!app.nothing_selected);
        assert_eq!(app.session.current().unwrap().symbol, "ん");

        type_str(&mut app, "x");
        assert!(app.is_error);
        press(&mut app, KeyCode::Backspace);
        assert!(!app.is_error);

        press(&mut app, KeyCode::Up);
        assert!(app.session.is_revealed());

        type_str(&mut app, "N");
        assert!(app.input.is_empty());
        assert!(!app.is_error);
        // 1つしかないので補充されて同じ問題
        assert_eq!(app.session.current().unwrap().answer, "n");
        assert!(!app.session.is_revealed());
    }

    #[test]
    fn test_wrong_prefix_stays_pending() {
        let mut app = app_with(&["hiragana/simple/ta"]);
        app.switch_to(Screen::Start);
        type_str(&mut app, "q");
        assert!(!app.is_error);
    }

    #[test]
    fn test_leaving_start_stops_session() {
        let mut app = app_with(&["katakana/simple/a"]);
        app.switch_to(Screen::Start);
        type_str(&mut app, "zz");
        app.switch_to(Screen::Katakana);

        assert!(app.session.current().is_none());
        assert!(app.input.is_empty());
        assert!(!app.is_error);
        assert!(app.session.pool().original().is_empty());
    }

    #[test]
    fn test_table_keys() {
        let mut app = app_with(&[]);
        press(&mut app, KeyCode::Left);
        let col = app.cursor_column(Script::Hiragana);
        assert_eq!(col.label(), Some("pa"));

        press(&mut app, KeyCode::Char(' '));
        assert!(app.selection.is_checked(col));

        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.selection.visible_table(Script::Hiragana), TableKind::Double);
        assert_eq!(app.cursor_column(Script::Hiragana).label(), Some("pya"));

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.selection.checked_count(), 1 + 11);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.selection.checked_count(), 1);
    }

    #[test]
    fn test_esc_quits() {
        let mut app = app_with(&[]);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
