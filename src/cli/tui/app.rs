//! TUI application state and logic

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;

use super::event::{Event, EventHandler};
use super::terminal::Terminal;
use super::views;
use crate::config::TuiConfig;
use crate::domain::{Filter, Stats, Task, TaskId, TaskStore};

const HELP: &str =
    "a:add space:toggle x:delete f/tab:filter 1-3:pick filter C:clear done j/k:move q:quit";

/// Input mode
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    NewTask(String),
    Confirm(ConfirmAction),
}

/// Actions that wait for a y/n answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteTask(TaskId),
    ClearCompleted,
}

/// Application state
pub struct App {
    /// The task collection and its filter
    store: TaskStore,

    /// Input mode
    input_mode: InputMode,

    /// Selected row in the visible list
    selected: usize,

    /// Status message to display
    status_message: Option<String>,

    /// Whether to quit
    should_quit: bool,

    /// Ask before deleting
    confirm_delete: bool,
}

impl App {
    /// Create a new application around an existing store
    pub fn new(store: TaskStore, config: &TuiConfig) -> Self {
        Self {
            store,
            input_mode: InputMode::Normal,
            selected: 0,
            status_message: None,
            should_quit: false,
            confirm_delete: config.confirm_delete,
        }
    }

    /// Run the main application loop
    pub fn run(&mut self, terminal: &mut Terminal, events: EventHandler) -> Result<()> {
        while !self.should_quit() {
            terminal.draw(|frame| self.draw(frame))?;

            match events.next()? {
                Event::Key(key) => self.handle_key(key),
                Event::Resize | Event::Tick => {}
            }
        }

        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        views::list::draw(frame, self);
    }

    /// Handle key events
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match &self.input_mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::NewTask(_) => self.handle_new_task_key(key),
            InputMode::Confirm(_) => self.handle_confirm_key(key),
        }

        self.clamp_selection();
    }

    /// Handle keys in normal mode
    fn handle_normal_key(&mut self, key: KeyEvent) {
        self.status_message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }

            // Navigation
            KeyCode::Char('j') | KeyCode::Down => self.move_selection_down(),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection_up(),
            KeyCode::Home | KeyCode::Char('g') => self.selected = 0,
            KeyCode::End | KeyCode::Char('G') => {
                self.selected = self.visible_len().saturating_sub(1);
            }

            // Filters
            KeyCode::Char('f') | KeyCode::Tab => self.set_filter(self.store.filter().next()),
            KeyCode::BackTab => self.set_filter(self.store.filter().prev()),
            KeyCode::Char(c @ '1'..='3') => {
                if let Ok(filter) = c.to_string().parse::<Filter>() {
                    self.set_filter(filter);
                }
            }

            // Actions
            KeyCode::Char('a') | KeyCode::Char('n') | KeyCode::Char('i') => {
                self.input_mode = InputMode::NewTask(String::new());
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_selected(),
            KeyCode::Char('x') | KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
            KeyCode::Char('C') => {
                if self.store.stats().completed == 0 {
                    self.status_message = Some("No completed tasks to clear".to_string());
                } else if self.confirm_delete {
                    self.input_mode = InputMode::Confirm(ConfirmAction::ClearCompleted);
                } else {
                    self.clear_completed();
                }
            }

            KeyCode::Char('?') => {
                self.status_message = Some(HELP.to_string());
            }

            _ => {}
        }
    }

    /// Handle keys while typing a new task
    fn handle_new_task_key(&mut self, key: KeyEvent) {
        let InputMode::NewTask(ref text) = self.input_mode else {
            return;
        };
        let mut text = text.clone();

        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                self.create_task(&text);
            }
            KeyCode::Backspace => {
                text.pop();
                self.input_mode = InputMode::NewTask(text);
            }
            KeyCode::Char(c) => {
                text.push(c);
                self.input_mode = InputMode::NewTask(text);
            }
            _ => {}
        }
    }

    /// Handle keys in confirm mode
    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                if let InputMode::Confirm(action) = std::mem::take(&mut self.input_mode) {
                    match action {
                        ConfirmAction::DeleteTask(id) => self.delete_task(id),
                        ConfirmAction::ClearCompleted => self.clear_completed(),
                    }
                }
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
            }
            _ => {}
        }
    }

    fn create_task(&mut self, text: &str) {
        let Some(id) = self.store.add_task(text).map(Task::id) else {
            return;
        };

        match self.visible_position(id) {
            Some(index) => self.selected = index,
            None => {
                self.status_message = Some(format!("Added {} (hidden by {} filter)", id, self.store.filter()));
            }
        }
    }

    fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.toggle_complete(id);
        }
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };

        if self.confirm_delete {
            self.input_mode = InputMode::Confirm(ConfirmAction::DeleteTask(id));
        } else {
            self.delete_task(id);
        }
    }

    fn delete_task(&mut self, id: TaskId) {
        if let Some(task) = self.store.delete_task(id) {
            self.status_message = Some(format!("Deleted: {}", task.text()));
        }
    }

    fn clear_completed(&mut self) {
        let removed = self.store.clear_completed();
        self.status_message = Some(format!("Cleared {} completed task(s)", removed));
    }

    fn set_filter(&mut self, filter: Filter) {
        self.store.set_filter(filter);
        self.selected = 0;
    }

    fn move_selection_down(&mut self) {
        let len = self.visible_len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    fn move_selection_up(&mut self) {
        let len = self.visible_len();
        if len > 0 {
            self.selected = if self.selected == 0 { len - 1 } else { self.selected - 1 };
        }
    }

    /// Keeps the selection inside the visible list after it shrinks
    fn clamp_selection(&mut self) {
        let len = self.visible_len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    fn visible_len(&self) -> usize {
        self.store.visible_tasks().len()
    }

    fn visible_position(&self, id: TaskId) -> Option<usize> {
        self.store.visible_tasks().iter().position(|t| t.id() == id)
    }

    fn selected_id(&self) -> Option<TaskId> {
        self.store.visible_tasks().get(self.selected).map(|t| t.id())
    }

    // Accessors for views

    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.store.visible_tasks()
    }

    pub fn stats(&self) -> Stats {
        self.store.stats()
    }

    pub fn filter(&self) -> Filter {
        self.store.filter()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn input_mode(&self) -> &InputMode {
        &self.input_mode
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }
}
