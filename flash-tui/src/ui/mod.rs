//! UI rendering
//!
//! Turns session state into terminal frames. Rendering reads state and
//! draws; it never changes anything.

pub mod theme;
pub mod view;

use ratatui::{
    backend::TestBackend,
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Padding, Paragraph, Wrap},
    Frame, Terminal,
};

use crate::app::SessionState;

pub use theme::Theme;
pub use view::{view, View};

/// Width of the input row, prompt included
const INPUT_WIDTH: u16 = 60;

/// Render the application UI
pub fn render(frame: &mut Frame, state: &SessionState, theme: &Theme) {
    let area = frame.area();
    let view = view(state);

    render_fill(frame, area, theme);

    // Borders plus one column of padding on each side
    let card_width = theme.box_width.saturating_add(4);
    let card_height = theme.box_height.saturating_add(2);

    let [_, card, _, input, status, help, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(card_height),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);

    render_card(frame, centered_width(card_width, card), &view, theme);

    if view.input_active {
        render_input(frame, centered_width(INPUT_WIDTH, input), state, &view);
    }

    render_status(frame, status, &view, theme);

    let help_line = Paragraph::new(view.help_line)
        .style(theme.help_style())
        .alignment(Alignment::Center);
    frame.render_widget(help_line, help);
}

/// Draw the whole screen into an off-screen buffer and return it as text
///
/// One line per row, trailing spaces trimmed.
pub fn render_to_string(
    state: &SessionState,
    theme: &Theme,
    width: u16,
    height: u16,
) -> std::io::Result<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|frame| render(frame, state, theme))?;
    Ok(buffer_to_string(terminal.backend().buffer()))
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            let row: String = (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            row.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_fill(frame: &mut Frame, area: Rect, theme: &Theme) {
    let row: String = std::iter::repeat(theme.fill)
        .take(area.width as usize)
        .collect();
    let lines: Vec<Line> = (0..area.height)
        .map(|_| Line::from(row.as_str()))
        .collect();

    frame.render_widget(Paragraph::new(lines).style(theme.fill_style()), area);
}

fn render_card(frame: &mut Frame, area: Rect, view: &View, theme: &Theme) {
    let block = Block::bordered()
        .border_type(BorderType::Double)
        .border_style(theme.border_style())
        .padding(Padding::horizontal(1));

    let card = Paragraph::new(view.current_text.as_str())
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, area);
    frame.render_widget(card, area);
}

fn render_input(frame: &mut Frame, area: Rect, state: &SessionState, view: &View) {
    let prompt_width = view.input_prompt.chars().count() as u16;
    let [prompt, field] =
        Layout::horizontal([Constraint::Length(prompt_width), Constraint::Min(1)]).areas(area);

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(view.input_prompt), prompt);
    frame.render_widget(state.input.textarea(), field);
}

fn render_status(frame: &mut Frame, area: Rect, view: &View, theme: &Theme) {
    let line = if let Some(ref error) = view.error {
        Line::from(vec![
            Span::styled("✗ ", theme.error_style()),
            Span::styled(error.as_str(), theme.error_style()),
        ])
    } else if let Some(ref message) = view.status {
        Line::from(Span::styled(message.as_str(), theme.status_style()))
    } else {
        Line::default()
    };

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// `width` columns centered horizontally in `area`, clamped to fit
fn centered_width(width: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
