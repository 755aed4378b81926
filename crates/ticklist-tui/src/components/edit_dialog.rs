use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ticklist_core::Todo;

/// Modal editor for one record's name.
///
/// The dialog owns only its own input buffer and a snapshot of the record
/// under edit. It never mutates the list; on submit it hands the new name
/// to the `edit_todo` capability the caller passes in and closes.
#[derive(Debug, Clone)]
pub struct EditDialog {
    todo: Todo,
    input: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Open,
    Closed,
}

impl EditDialog {
    /// The input buffer starts empty, not pre-filled with the current name;
    /// submitting replaces the whole name rather than editing it in place.
    pub fn open(todo: Todo) -> Self {
        Self {
            todo,
            input: String::new(),
        }
    }

    pub fn todo(&self) -> &Todo {
        &self.todo
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Feed one key event. Enter submits through `edit_todo` unless the
    /// buffer trims to empty, in which case nothing happens and the dialog
    /// stays open. Esc closes without submitting, whatever the buffer holds.
    pub fn handle_key<F>(&mut self, key: KeyEvent, mut edit_todo: F) -> DialogOutcome
    where
        F: FnMut(&str, &str),
    {
        match key.code {
            KeyCode::Enter => {
                if self.input.trim().is_empty() {
                    return DialogOutcome::Open;
                }
                // Stored name is the buffer as typed; only the check trims.
                edit_todo(&self.todo.id, &self.input);
                self.input.clear();
                DialogOutcome::Closed
            }
            KeyCode::Esc => DialogOutcome::Closed,
            KeyCode::Backspace => {
                self.input.pop();
                DialogOutcome::Open
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                DialogOutcome::Open
            }
            _ => DialogOutcome::Open,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup = centered_rect(50, 30, area);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Edit Todo ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let input_display = if self.input.is_empty() {
            Span::styled("Enter a todo ...", Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(self.input.as_str())
        };

        let lines = vec![
            Line::from(vec![
                Span::styled("Editing: ", Style::default().bold()),
                Span::raw(self.todo.name.as_str()),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("New name: ", Style::default().fg(Color::Cyan).bold()),
                input_display,
            ]),
        ];

        let paragraph = Paragraph::new(lines);
        frame.render_widget(paragraph, inner);
    }
}

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
