// ============================================
// src/ui.rs
// UI描画
// ============================================

use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};

use kanawiz::RandomSource;
use kanawiz::kana::{self, Script};
use kanawiz::selection::ColumnRef;

use crate::app::{AppState, Screen};

/// 1列の表示幅
const COLUMN_WIDTH: u16 = 6;

pub fn ui<R: RandomSource>(f: &mut Frame, app_state: &AppState<R>) {
    let size = f.area();
    // 枠線を描画
    let block = Block::default().borders(Borders::ALL).title("Kana Wiz !");
    let inner_area = block.inner(size);
    f.render_widget(block, size);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // [0] タブ
            Constraint::Length(1), // [1] 空白
            Constraint::Min(1),    // [2] 本体
            Constraint::Length(1), // [3] 操作説明
        ])
        .split(inner_area);

    // 0. タブ (今の画面をハイライト)
    let tabs = Tabs::new(Screen::ALL.iter().map(|s| s.title()))
        .select(app_state.screen.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(Style::default().fg(Color::Magenta).bold());
    f.render_widget(tabs, chunks[0]);

    // 2. 本体
    match app_state.screen.script() {
        Some(script) => draw_tables(f, app_state, script, chunks[2]),
        None => draw_quiz(f, app_state, chunks[2]),
    }

    // 3. 操作説明
    let help = match app_state.screen {
        Screen::Start => "Type romaji / ↑: show answer / Tab: switch / Esc: quit",
        _ => "←→: move / Space: toggle / [ ]: table / a: all / r: reset / Tab: switch / Esc: quit",
    };
    f.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        chunks[3],
    );
}

// --------------------------------------------------
// かな表の画面
// --------------------------------------------------

fn draw_tables<R: RandomSource>(f: &mut Frame, app_state: &AppState<R>, script: Script, area: Rect) {
    let kind = app_state.selection.visible_table(script);
    let Some(table) = kana::table(script, kind) else {
        return;
    };
    let cursor = app_state.cursor_column(script);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    // 表の切り替え (カルーセル)
    f.render_widget(
        Paragraph::new(format!("◀ {kind} ▶")).bold().centered(),
        rows[0],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            table
                .columns
                .iter()
                .map(|_| Constraint::Length(COLUMN_WIDTH))
                .chain(std::iter::once(Constraint::Min(0))),
        )
        .split(rows[1]);

    for (idx, column) in table.columns.iter().enumerate() {
        let col = ColumnRef::new(script, kind, idx);
        let checked = app_state.selection.is_checked(col);

        let mark = if checked { "[x]" } else { "[ ]" };
        let header_style = if col == cursor {
            Style::default().fg(Color::Black).bg(Color::White)
        } else {
            Style::default().fg(Color::White)
        };
        let cell_style = if checked {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut lines = vec![Line::from(Span::styled(mark, header_style))];
        lines.extend(
            column
                .cells
                .iter()
                .map(|(symbol, _)| Line::from(Span::styled(*symbol, cell_style))),
        );
        f.render_widget(Paragraph::new(lines), columns[idx]);
    }
}

// --------------------------------------------------
// 出題画面
// --------------------------------------------------

fn draw_quiz<R: RandomSource>(f: &mut Frame, app_state: &AppState<R>, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // [0] かな
            Constraint::Length(1), // [1] 答え
            Constraint::Length(1), // [2] 空白
            Constraint::Length(1), // [3] 入力
            Constraint::Min(0),
        ])
        .split(area);

    let Some(item) = app_state.session.current() else {
        if app_state.nothing_selected {
            f.render_widget(
                Paragraph::new("Select at least one column")
                    .style(Style::default().fg(Color::Yellow))
                    .centered(),
                rows[0],
            );
        }
        return;
    };

    f.render_widget(
        Paragraph::new(item.symbol.as_str())
            .style(Style::default().fg(Color::White).bold())
            .centered(),
        rows[0],
    );

    // 答えは ↑ を押したときだけ
    if app_state.session.is_revealed() {
        f.render_widget(
            Paragraph::new(item.answer.as_str())
                .style(Style::default().fg(Color::Gray))
                .centered(),
            rows[1],
        );
    }

    let input_style = if app_state.is_error {
        Style::default().fg(Color::White).bg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    };
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw("> "),
            Span::styled(app_state.input.as_str(), input_style),
            Span::styled(" ", Style::default().bg(Color::White)), // カーソル
        ]))
        .centered(),
        rows[3],
    );
}
