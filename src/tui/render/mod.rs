pub mod screen;
#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use super::app::{App, Mode};
use super::theme::Theme;
use screen::ScreenLine;

/// Main render function: project the state, then paint it with the theme
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let screen = screen::project(app);

    frame.render_widget(Block::default().style(Style::default().fg(app.theme.text)), area);

    // Layout: content | key hint (1 row, optional)
    let (body, footer) = match screen.hint {
        Some(_) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(area);
            (chunks[0], Some(chunks[1]))
        }
        None => (area, None),
    };

    let lines: Vec<Line> = screen
        .lines
        .iter()
        .map(|line| styled_line(line, &app.theme))
        .collect();
    frame.render_widget(Paragraph::new(lines), body);

    if let (Some(hint), Some(footer)) = (screen.hint, footer) {
        let style = Style::default().fg(app.theme.dim);
        frame.render_widget(Paragraph::new(Span::styled(hint, style)), footer);
    }

    if let Some(row) = screen.input_row() {
        place_cursor(frame, app, body, row);
    }
}

/// Show the terminal cursor inside the prompt, after the "> " prefix
fn place_cursor(frame: &mut Frame, app: &App, body: Rect, row: usize) {
    let input = match app.mode {
        Mode::AddTask => &app.add_input,
        Mode::EditTask => &app.edit_input,
        _ => return,
    };
    let x = body.x as usize + 2 + input.cursor_col();
    let y = body.y as usize + row;
    if x < body.right() as usize && y < body.bottom() as usize {
        frame.set_cursor_position((x as u16, y as u16));
    }
}

fn styled_line<'a>(line: &'a ScreenLine, theme: &Theme) -> Line<'a> {
    let text = Style::default().fg(theme.text);
    let dim = Style::default().fg(theme.dim);
    match line {
        ScreenLine::Title(s) => Line::from(Span::styled(
            s.as_str(),
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )),
        ScreenLine::Blank => Line::default(),
        ScreenLine::Message(s) | ScreenLine::Prompt(s) => Line::from(Span::styled(s.as_str(), text)),
        ScreenLine::Task {
            selected,
            id,
            name,
            created,
        } => {
            let marker = if *selected {
                Span::styled(
                    ">",
                    Style::default()
                        .fg(theme.cursor)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::raw(" ")
            };
            let name_style = if *selected {
                text.add_modifier(Modifier::BOLD)
            } else {
                text
            };
            Line::from(vec![
                marker,
                Span::raw(" "),
                Span::styled(format!("#{id}:"), Style::default().fg(theme.id)),
                Span::raw(" "),
                Span::styled(name.as_str(), name_style),
                Span::styled(format!(" ({created})"), dim),
            ])
        }
        ScreenLine::Input { text: s, placeholder } => {
            let style = if *placeholder { dim } else { text };
            Line::from(vec![
                Span::styled("> ", Style::default().fg(theme.cursor)),
                Span::styled(s.as_str(), style),
            ])
        }
        ScreenLine::Section(s) => Line::from(Span::styled(
            format!("--{s}--"),
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        )),
        ScreenLine::Binding { keys, desc } => Line::from(vec![
            Span::styled(*keys, Style::default().fg(theme.cursor)),
            Span::styled(format!(" - {desc}"), text),
        ]),
    }
}
