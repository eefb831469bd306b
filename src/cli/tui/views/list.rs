//! Task list view: filter tabs, entry box, the visible tasks and a summary bar

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
};

use crate::cli::tui::app::{App, ConfirmAction, InputMode};
use crate::cli::tui::utils::truncate_str;
use crate::domain::{Filter, Stats};

/// Draw the list layout
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filter tabs
            Constraint::Length(3), // Entry box
            Constraint::Min(5),    // Tasks
            Constraint::Length(3), // Status bar
        ])
        .split(frame.area());

    draw_tabs(frame, app, chunks[0]);
    draw_entry(frame, app, chunks[1]);
    draw_tasks(frame, app, chunks[2]);
    draw_status_bar(frame, app, chunks[3]);
}

fn filter_count(filter: Filter, stats: Stats) -> usize {
    match filter {
        Filter::All => stats.total,
        Filter::Active => stats.active(),
        Filter::Completed => stats.completed,
    }
}

fn draw_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let stats = app.stats();
    let titles: Vec<String> = Filter::ALL
        .iter()
        .enumerate()
        .map(|(i, f)| format!("{}:{} ({})", i + 1, f.label(), filter_count(*f, stats)))
        .collect();

    let selected = Filter::ALL
        .iter()
        .position(|f| *f == app.filter())
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .block(Block::default().title("My Tasks").borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

fn draw_entry(frame: &mut Frame, app: &App, area: Rect) {
    let (content, style, border) = match app.input_mode() {
        InputMode::NewTask(text) => (
            format!("{}_", text),
            Style::default().fg(Color::Green),
            Style::default().fg(Color::Green),
        ),
        _ => (
            "Write a task... (press a)".to_string(),
            Style::default().fg(Color::DarkGray),
            Style::default(),
        ),
    };

    let paragraph = Paragraph::new(content).style(style).block(
        Block::default()
            .title("New task")
            .borders(Borders::ALL)
            .border_style(border),
    );

    frame.render_widget(paragraph, area);
}

fn draw_tasks(frame: &mut Frame, app: &App, area: Rect) {
    let tasks = app.visible_tasks();
    let block = Block::default()
        .title(format!("{} tasks", app.filter().label()))
        .borders(Borders::ALL);

    if tasks.is_empty() {
        let hint = match app.filter() {
            Filter::All => "Nothing here yet. Press 'a' to add a task.",
            Filter::Active => "No active tasks.",
            Filter::Completed => "No completed tasks.",
        };
        let paragraph = Paragraph::new(hint)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    // Borders, highlight symbol and checkbox
    let text_width = area.width.saturating_sub(2 + 2 + 4) as usize;

    let items: Vec<ListItem> = tasks
        .iter()
        .map(|task| {
            if task.is_completed() {
                ListItem::new(format!("[x] {}", truncate_str(task.text(), text_width))).style(
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT),
                )
            } else {
                ListItem::new(format!("[ ] {}", truncate_str(task.text(), text_width)))
            }
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.selected()));

    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (content, style) = match app.input_mode() {
        InputMode::Normal => {
            let msg = app.status_message().unwrap_or("[a]dd [space]toggle [x]delete [f]ilter [?]help [q]uit");
            (msg.to_string(), Style::default())
        }
        InputMode::NewTask(_) => (
            "Enter to add, Esc to cancel".to_string(),
            Style::default().fg(Color::Green),
        ),
        InputMode::Confirm(action) => {
            let msg = match action {
                ConfirmAction::DeleteTask(id) => {
                    let text = app.store().get(*id).map(|t| t.text()).unwrap_or("?");
                    format!("Delete '{}'? [y/n]", truncate_str(text, 40))
                }
                ConfirmAction::ClearCompleted => {
                    format!("Clear {} completed task(s)? [y/n]", app.stats().completed)
                }
            };
            (msg, Style::default().fg(Color::Yellow))
        }
    };

    let status_text = format!("{} | {}", app.stats(), content);

    let paragraph = Paragraph::new(status_text)
        .style(style)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
