// ============================================
// src/main.rs (メインファイル)
// ============================================

use std::fs::File;
use std::io::{Result, stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;

use crossterm::{
    ExecutableCommand,
    cursor::{Hide, Show},
    event::{self, Event},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

use ratatui::prelude::*;

use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use kanawiz::config::Settings;
use kanawiz::{ConfigError, Selection, StdRandom};

mod app;
use app::AppState;

mod ui;
use ui::ui;

/// KANA WiZ. ひらがな・カタカナのフラッシュカード
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// 乱数のシード (同じ出題順を再現する)
    #[arg(long)]
    seed: Option<u64>,

    /// すべての表のすべての列を選択した状態で始める
    #[arg(long)]
    all: bool,

    /// 設定ファイル (省略時は OS の設定ディレクトリの settings.json)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// ログの出力先 (省略時はログなし)
    #[arg(long, value_name = "FILE")]
    log: Option<PathBuf>,
}

// --------------------------------------------------
// メイン関数 (TUIセットアップと実行ループ)
// --------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log {
        init_logging(path)?;
    }

    // 設定エラーはターミナルを切り替える前に報告する
    let (selection, rng) = match prepare(&cli) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("kanawiz: {e}");
            std::process::exit(2);
        }
    };

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, AppState::new(selection, rng));
    restore_terminal(&mut terminal)?; // エラーでも必ず元に戻す
    result
}

/// ログはファイルへ (画面は TUI が使うため)
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "kanawiz=info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}

/// 設定を読み込み、初期の選択状態と乱数源を作る
fn prepare(cli: &Cli) -> std::result::Result<(Selection, StdRandom), ConfigError> {
    let settings = match cli.config.clone().or_else(Settings::default_path) {
        Some(path) => Settings::load(&path)?,
        None => Settings::default(),
    };

    let mut selection = Selection::new();
    settings.apply(&mut selection)?;
    if cli.all {
        selection.select_everything();
    }

    let rng = match cli.seed.or(settings.seed) {
        Some(seed) => StdRandom::seeded(seed),
        None => StdRandom::from_entropy(),
    };

    info!(columns = selection.checked_count(), "settings loaded");
    Ok((selection, rng))
}

fn setup_terminal() -> Result<Terminal<impl Backend>> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?; // 代替スクリーンを使用
    stdout().execute(Hide)?; // カーソルを非表示
    let backend = CrosstermBackend::new(stdout());
    Terminal::new(backend)
}

fn restore_terminal(_terminal: &mut Terminal<impl Backend>) -> Result<()> {
    stdout().execute(Show)?; // カーソルを再表示
    stdout().execute(LeaveAlternateScreen)?; // 代替スクリーンを終了
    disable_raw_mode()?;
    Ok(())
}

fn run_app(terminal: &mut Terminal<impl Backend>, mut app_state: AppState<StdRandom>) -> Result<()> {
    while !app_state.should_quit {
        terminal.draw(|f| ui(f, &app_state))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == event::KeyEventKind::Press {
                    app_state.handle_key(key);
                }
            }
        }
    }

    Ok(())
}
