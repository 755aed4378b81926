use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ticklist_core::{TodoList, TodoStatus};

/// Scrollable view over the todo collection. Owns only the cursor; the
/// collection itself stays with the app.
pub struct TodoPane {
    list_state: ListState,
}

impl TodoPane {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Select the first row if nothing is selected yet. Called after adds
    /// so a freshly filled list always has a cursor.
    pub fn ensure_selection(&mut self, len: usize) {
        if self.list_state.selected().is_none() && len > 0 {
            self.list_state.select(Some(0));
        }
    }

    /// Keep the cursor inside the list after a removal.
    pub fn clamp(&mut self, len: usize) {
        match self.list_state.selected() {
            Some(_) if len == 0 => self.list_state.select(None),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, len: usize) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                let current = self.list_state.selected().unwrap_or(0);
                if current + 1 < len {
                    self.list_state.select(Some(current + 1));
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                let current = self.list_state.selected().unwrap_or(0);
                if current > 0 {
                    self.list_state.select(Some(current - 1));
                }
            }
            KeyCode::Char('g') => {
                if len > 0 {
                    self.list_state.select(Some(0));
                }
            }
            KeyCode::Char('G') => {
                if len > 0 {
                    self.list_state.select(Some(len - 1));
                }
            }
            _ => {}
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, list: &TodoList, is_active: bool) {
        let border_style = if is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .title(" Todos ")
            .borders(Borders::ALL)
            .border_style(border_style);

        if list.is_empty() {
            let hint = Paragraph::new(Line::from(Span::styled(
                " No todos yet. Press n to add one.",
                Style::default().fg(Color::DarkGray),
            )))
            .block(block);
            frame.render_widget(hint, area);
            return;
        }

        let items: Vec<ListItem> = list
            .todos()
            .iter()
            .map(|todo| {
                let (glyph, name_style) = match todo.status {
                    TodoStatus::Complete => (
                        "[x] ",
                        Style::default().fg(Color::Green).crossed_out(),
                    ),
                    TodoStatus::Incomplete => ("[ ] ", Style::default()),
                };
                ListItem::new(Line::from(vec![
                    Span::styled(glyph, Style::default().fg(Color::DarkGray)),
                    Span::styled(todo.name.as_str(), name_style),
                ]))
            })
            .collect();

        let widget = List::new(items)
            .block(block)
            .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan).bold())
            .highlight_symbol("> ");

        let mut state = self.list_state.clone();
        frame.render_stateful_widget(widget, area, &mut state);
    }
}

impl Default for TodoPane {
    fn default() -> Self {
        Self::new()
    }
}
