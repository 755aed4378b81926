use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use ticklist_core::{Todo, TodoList};

use crate::components::edit_dialog::{DialogOutcome, EditDialog};
use crate::components::todo_pane::TodoPane;

/// What the app is currently doing
#[derive(Debug, Clone)]
pub enum Mode {
    /// Normal list navigation
    Normal,
    /// Typing into the new-todo draft input
    Input,
    /// Edit dialog open for one record
    Edit(EditDialog),
}

/// Owns the authoritative todo collection and the new-todo draft.
///
/// All mutations run synchronously inside `handle_key`; one key event is
/// processed to completion before the next, so every observable state is a
/// single consistent snapshot.
pub struct App {
    list: TodoList,
    pane: TodoPane,
    draft: String,
    mode: Mode,
    status_message: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self::with_todos(Vec::new())
    }

    /// Start with a pre-filled collection; the first row is selected.
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let list = TodoList::from_todos(todos);
        let mut pane = TodoPane::new();
        pane.ensure_selection(list.len());
        Self {
            list,
            pane,
            draft: String::new(),
            mode: Mode::Normal,
            status_message: None,
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn todos(&self) -> &[Todo] {
        self.list.todos()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn selected_todo(&self) -> Option<&Todo> {
        self.pane.selected().and_then(|i| self.list.todos().get(i))
    }

    pub fn is_input_mode(&self) -> bool {
        matches!(self.mode, Mode::Input | Mode::Edit(_))
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.status_message = None;

        match self.mode.clone() {
            Mode::Normal => self.handle_normal(key),
            Mode::Input => self.handle_input(key),
            Mode::Edit(dialog) => self.handle_edit(key, dialog),
        }
    }

    fn handle_normal(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('n') | KeyCode::Char('i') => {
                self.mode = Mode::Input;
            }
            KeyCode::Char(' ') => {
                if let Some(todo) = self.selected_todo() {
                    let id = todo.id.clone();
                    let flipped = todo.status.toggled();
                    self.list.set_status(&id, flipped);
                }
            }
            KeyCode::Char('e') => {
                if let Some(todo) = self.selected_todo() {
                    self.mode = Mode::Edit(EditDialog::open(todo.clone()));
                }
            }
            // Deletion is immediate; there is no confirmation step.
            KeyCode::Char('d') => {
                if let Some(todo) = self.selected_todo() {
                    let id = todo.id.clone();
                    let name = todo.name.clone();
                    self.list.remove(&id);
                    self.pane.clamp(self.list.len());
                    self.status_message = Some(format!("Deleted: {name}"));
                }
            }
            _ => self.pane.handle_key(key, self.list.len()),
        }
    }

    fn handle_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                // Validation trims; the stored name does not. An empty or
                // whitespace draft changes nothing and stays in the buffer.
                if self.draft.trim().is_empty() {
                    return;
                }
                let todo = Todo::new(self.draft.clone());
                let name = todo.name.clone();
                self.list.add(todo);
                self.pane.ensure_selection(self.list.len());
                self.draft.clear();
                self.mode = Mode::Normal;
                self.status_message = Some(format!("Added: {name}"));
            }
            KeyCode::Esc => {
                // Leave the input; the draft survives until cleared or added.
                self.mode = Mode::Normal;
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.draft.clear();
            }
            KeyCode::Backspace => {
                self.draft.pop();
            }
            KeyCode::Char(c) => {
                self.draft.push(c);
            }
            _ => {}
        }
    }

    fn handle_edit(&mut self, key: KeyEvent, mut dialog: EditDialog) {
        let list = &mut self.list;
        let mut edited: Option<String> = None;
        let outcome = dialog.handle_key(key, |id, name| {
            list.rename(id, name);
            edited = Some(name.to_string());
        });

        match outcome {
            DialogOutcome::Open => self.mode = Mode::Edit(dialog),
            DialogOutcome::Closed => {
                if let Some(name) = edited {
                    self.status_message = Some(format!("Updated: {name}"));
                }
                self.mode = Mode::Normal;
            }
        }
    }

    //  Rendering

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_title_bar(frame, layout[0]);
        self.render_draft_input(frame, layout[1]);
        self.pane
            .render(frame, layout[2], &self.list, matches!(self.mode, Mode::Normal));
        self.render_status_bar(frame, layout[3]);

        if let Mode::Edit(ref dialog) = self.mode {
            dialog.render(frame, area);
        }
    }

    fn render_title_bar(&self, frame: &mut Frame, area: Rect) {
        let title = Line::from(vec![
            Span::styled(" ticklist ", Style::default().bold().fg(Color::Cyan)),
            Span::raw("| "),
            Span::styled(
                format!("{} of {} done", self.list.complete_count(), self.list.len()),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(title, area);
    }

    fn render_draft_input(&self, frame: &mut Frame, area: Rect) {
        let focused = matches!(self.mode, Mode::Input);
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .title(" New todo ")
            .borders(Borders::ALL)
            .border_style(border_style);

        let content = if self.draft.is_empty() {
            Line::from(Span::styled(
                "Enter a todo ...",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(Span::raw(self.draft.as_str()))
        };

        let paragraph = Paragraph::new(content).block(block);
        frame.render_widget(paragraph, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        if let Some(ref msg) = self.status_message {
            let line = Line::from(Span::styled(
                format!(" {msg}"),
                Style::default().fg(Color::Green),
            ));
            frame.render_widget(line, area);
            return;
        }

        let hints = match self.mode {
            Mode::Normal => vec![
                ("q", "quit"),
                ("j/k", "move"),
                ("n", "new"),
                ("Space", "toggle"),
                ("e", "edit"),
                ("d", "del"),
            ],
            Mode::Input => vec![("Enter", "add"), ("Ctrl+U", "clear"), ("Esc", "done")],
            Mode::Edit(_) => vec![("Enter", "save"), ("Esc", "close")],
        };

        let spans: Vec<Span> = hints
            .into_iter()
            .flat_map(|(key, desc)| {
                vec![
                    Span::styled(format!(" {key}"), Style::default().fg(Color::Yellow).bold()),
                    Span::raw(format!(" {desc} ")),
                ]
            })
            .collect();

        frame.render_widget(Line::from(spans), area);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
