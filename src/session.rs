// ============================================
// src/session.rs
// 出題セッション (現在の問題 + 入力判定)
// ============================================

use tracing::{debug, info};

use crate::error::SessionError;
use crate::pool::{Pool, RandomSource};

/// 1問分のデータ (かな + ローマ字)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuizItem {
    pub symbol: String, // "あ" や "きゃ"
    pub answer: String, // "a" や "kya"
}

impl QuizItem {
    pub fn new(symbol: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            answer: answer.into(),
        }
    }
}

/// 入力判定の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    /// 入力途中 (エラー表示なし)
    Pending,
    /// 正解の文字数以上を入力したが一致しない
    Invalid,
    /// 完全一致
    Complete,
}

/// 出題セッション
#[derive(Debug)]
pub struct Session<R> {
    pool: Pool<QuizItem, R>,
    current: Option<QuizItem>,
    revealed: bool,
}

impl<R: RandomSource> Session<R> {
    pub fn new(rng: R) -> Self {
        Self {
            pool: Pool::new(rng),
            current: None,
            revealed: false,
        }
    }

    /// プールを初期化して最初の問題を出す
    ///
    /// `false` なら出題できるものが1つもない (何も選ばれていない)。
    pub fn start(&mut self, items: Vec<QuizItem>) -> bool {
        info!(items = items.len(), "session start");
        self.pool.initialize(items);
        self.advance()
    }

    /// 次の問題へ
    pub fn advance(&mut self) -> bool {
        match self.pool.draw() {
            Some(item) => {
                debug!(symbol = %item.symbol, "next question");
                self.current = Some(item);
                self.revealed = false;
                true
            }
            None => {
                self.current = None;
                false
            }
        }
    }

    /// 答えを表示する (判定には影響しない)
    pub fn reveal(&mut self) -> Result<(), SessionError> {
        if self.current.is_none() {
            return Err(SessionError::NoActiveQuestion);
        }
        self.revealed = true;
        Ok(())
    }

    /// 入力中の文字列を判定する
    ///
    /// 大文字小文字は区別しない。それ以外の正規化 (空白の除去など) はしない。
    /// 文字数が正解に届くまでは、間違っていても `Pending` を返す。
    pub fn evaluate(&self, input: &str) -> Result<MatchResult, SessionError> {
        let current = self.current.as_ref().ok_or(SessionError::NoActiveQuestion)?;

        let expected = current.answer.to_lowercase();
        let value = input.to_lowercase();

        if value == expected {
            Ok(MatchResult::Complete)
        } else if value.chars().count() >= expected.chars().count() {
            Ok(MatchResult::Invalid)
        } else {
            Ok(MatchResult::Pending)
        }
    }

    /// セッション終了。再開には `start` が必要
    pub fn stop(&mut self) {
        info!(cycles = self.pool.cycle(), "session stop");
        self.pool.clear();
        self.current = None;
        self.revealed = false;
    }

    pub fn current(&self) -> Option<&QuizItem> {
        self.current.as_ref()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn pool(&self) -> &Pool<QuizItem, R> {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::tests::Scripted;

    fn session_with(answer: &str) -> Session<Scripted> {
        let mut session = Session::new(Scripted::new(&[0.0]));
        assert!(session.start(vec![QuizItem::new("x", answer)]));
        session
    }

    #[test]
    fn test_start_empty_returns_false() {
        let mut session = Session::new(Scripted::new(&[0.0]));
        assert!(!session.start(Vec::new()));
        assert!(session.current().is_none());
        assert!(!session.advance());
    }

    #[test]
    fn test_exact_match_ignores_case() {
        let session = session_with("ka");
        assert_eq!(session.evaluate("KA"), Ok(MatchResult::Complete));
        assert_eq!(session.evaluate("Ka"), Ok(MatchResult::Complete));

        let session = session_with("Shi");
        assert_eq!(session.evaluate("shi"), Ok(MatchResult::Complete));
    }

    #[test]
    fn test_same_length_mismatch_is_invalid() {
        let session = session_with("shi");
        assert_eq!(session.evaluate("chi"), Ok(MatchResult::Invalid));
        assert_eq!(session.evaluate("shii"), Ok(MatchResult::Invalid));
    }

    #[test]
    fn test_shorter_input_is_pending() {
        let session = session_with("tsu");
        assert_eq!(session.evaluate(""), Ok(MatchResult::Pending));
        assert_eq!(session.evaluate("t"), Ok(MatchResult::Pending));
        // 文字数が足りないうちは間違っていてもエラーにしない
        assert_eq!(session.evaluate("xx"), Ok(MatchResult::Pending));
    }

    #[test]
    fn test_no_trimming() {
        let session = session_with("a");
        assert_eq!(session.evaluate(" a"), Ok(MatchResult::Invalid));
    }

    #[test]
    fn test_reveal_resets_on_advance() {
        let mut session = session_with("a");
        assert!(!session.is_revealed());
        session.reveal().unwrap();
        assert!(session.is_revealed());
        assert!(session.advance());
        assert!(!session.is_revealed());
    }

    #[test]
    fn test_stop_clears_everything() {
        let mut session = session_with("a");
        session.reveal().unwrap();
        session.stop();

        assert!(session.current().is_none());
        assert!(!session.is_revealed());
        assert!(session.pool().original().is_empty());
        assert!(session.pool().remaining().is_empty());
        assert_eq!(session.evaluate("a"), Err(SessionError::NoActiveQuestion));
        assert_eq!(session.reveal(), Err(SessionError::NoActiveQuestion));
        assert!(!session.advance());
    }
}
