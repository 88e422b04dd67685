use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;
use summarizer_core::{AppViewModel, BackendStatus, Panel, FEATURES};

use super::constants::*;
use super::markdown::render_markdown;

/// Terminal-only state that the core does not track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiState {
    pub spinner_frame: usize,
    pub scroll: u16,
    /// Largest useful `scroll` for the result panel, as of the last draw.
    pub max_scroll: u16,
}

impl UiState {
    fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }
}

pub fn render(frame: &mut Frame, view: &AppViewModel, ui: &mut UiState) {
    let [header, input_row, body, status] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .areas(frame.area());

    render_header(frame, header);
    render_input(frame, input_row, view, ui);
    match &view.panel {
        Panel::Features => render_features(frame, body),
        Panel::Busy { url } => render_busy(frame, body, url, ui),
        Panel::Error { message } => render_error(frame, body, message),
        Panel::Result { url, summary } => render_result(frame, body, url, summary, ui),
    }
    render_status(frame, status, &view.backend);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let text = Text::from(vec![
        Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(TAGLINE, Style::default().fg(Color::Gray))),
    ]);
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_input(frame: &mut Frame, area: Rect, view: &AppViewModel, ui: &UiState) {
    let [field, button] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(SUBMIT_WIDTH)]).areas(area);

    let field_style = if view.input_enabled {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let content = if view.input.is_empty() {
        Line::from(Span::styled(
            INPUT_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(view.input.as_str(), field_style))
    };
    // Keep the end of long input visible.
    let inner_width = field.width.saturating_sub(2);
    let input_width = u16::try_from(Line::from(view.input.as_str()).width()).unwrap_or(u16::MAX);
    let offset = input_width.saturating_sub(inner_width.saturating_sub(1));
    frame.render_widget(
        Paragraph::new(content)
            .scroll((0, offset))
            .block(Block::bordered().title(" URL ").border_style(field_style)),
        field,
    );
    if view.input_enabled {
        frame.set_cursor_position((field.x + 1 + input_width - offset, field.y + 1));
    }

    let (label, style) = if view.submit_enabled {
        (
            SUBMIT_LABEL.to_string(),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            format!("{} {}", ui.spinner(), BUSY_LABEL),
            Style::default().fg(Color::DarkGray),
        )
    };
    frame.render_widget(
        Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::bordered()),
        button,
    );
}

fn render_features(frame: &mut Frame, area: Rect) {
    let columns = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(area);

    for (card, column) in FEATURES.iter().zip(columns.iter()) {
        let text = Text::from(vec![
            Line::from(Span::styled(
                format!("{} {}", card.icon, card.title),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(card.blurb),
        ]);
        frame.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(Block::bordered()),
            *column,
        );
    }
}

fn render_busy(frame: &mut Frame, area: Rect, url: &str, ui: &UiState) {
    let line = Line::from(vec![
        Span::styled(ui.spinner(), Style::default().fg(Color::Cyan)),
        Span::raw(format!(" {BUSY_LABEL} ")),
        Span::styled(url.to_owned(), Style::default().fg(Color::Gray)),
    ]);
    frame.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(Block::bordered()),
        area,
    );
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let style = Style::default().fg(Color::Red);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(message.to_owned(), style)))
            .wrap(Wrap { trim: false })
            .block(Block::bordered().title(" ⚠ Error ").border_style(style)),
        area,
    );
}

fn render_result(frame: &mut Frame, area: Rect, url: &str, summary: &str, ui: &mut UiState) {
    let block = Block::bordered()
        .title(" 📄 Summary ")
        .title(Line::from(format!(" {url} ")).right_aligned())
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    let text = render_markdown(summary, inner.width);
    let max_scroll = u16::try_from(text.lines.len())
        .unwrap_or(u16::MAX)
        .saturating_sub(inner.height);
    ui.max_scroll = max_scroll;
    frame.render_widget(
        Paragraph::new(text)
            .scroll((ui.scroll.min(max_scroll), 0))
            .block(block),
        area,
    );
}

fn render_status(frame: &mut Frame, area: Rect, backend: &BackendStatus) {
    let (text, color) = backend_label(backend);
    let line = Line::from(vec![
        Span::styled(text, Style::default().fg(color)),
        Span::raw("  |  "),
        Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn backend_label(backend: &BackendStatus) -> (String, Color) {
    match backend {
        BackendStatus::Unknown => ("Backend: unknown".to_string(), Color::DarkGray),
        BackendStatus::Checking => ("Backend: checking...".to_string(), Color::DarkGray),
        BackendStatus::Online {
            status,
            mode,
            model,
        } => {
            let mut label = format!("Backend: {status}");
            for part in [mode, model].into_iter().flatten() {
                label.push_str(" · ");
                label.push_str(part);
            }
            (label, Color::Green)
        }
        BackendStatus::Unreachable { message } => {
            (format!("Backend unreachable: {message}"), Color::Yellow)
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;

    fn draw(view: &AppViewModel, ui: &UiState) -> String {
        let mut ui = *ui;
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, view, &mut ui)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = usize::from(buffer.area.width);
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn view_with(panel: Panel) -> AppViewModel {
        let loading = matches!(panel, Panel::Busy { .. });
        AppViewModel {
            input: "example.com".to_string(),
            input_enabled: !loading,
            submit_enabled: !loading,
            panel,
            ..AppViewModel::default()
        }
    }

    #[test]
    fn idle_shows_feature_cards_only() {
        let screen = draw(&view_with(Panel::Features), &UiState::default());
        assert!(screen.contains("Lightning Fast"));
        assert!(screen.contains("Completely Free"));
        assert!(screen.contains("Summarize"));
        assert!(!screen.contains("Error"));
        assert!(!screen.contains("Analyzing"));
    }

    #[test]
    fn loading_shows_busy_indicator_and_disabled_button() {
        let screen = draw(
            &view_with(Panel::Busy {
                url: "example.com".to_string(),
            }),
            &UiState::default(),
        );
        assert!(screen.contains("Analyzing..."));
        assert!(!screen.contains("✨"));
        assert!(!screen.contains("Lightning Fast"));
    }

    #[test]
    fn failure_shows_alert_region() {
        let screen = draw(
            &view_with(Panel::Error {
                message: "Please enter a URL".to_string(),
            }),
            &UiState::default(),
        );
        assert!(screen.contains("Error"));
        assert!(screen.contains("Please enter a URL"));
        assert!(!screen.contains("Lightning Fast"));
        assert!(!screen.contains("Summary"));
    }

    #[test]
    fn success_shows_url_badge_and_rendered_summary() {
        let screen = draw(
            &view_with(Panel::Result {
                url: "example.com".to_string(),
                summary: "# Quarterly Report\n\nRevenue is **up**.".to_string(),
            }),
            &UiState::default(),
        );
        assert!(screen.contains("Summary"));
        assert!(screen.contains("example.com"));
        assert!(screen.contains("Quarterly Report"));
        assert!(screen.contains("Revenue is"));
        assert!(!screen.contains("**"));
        assert!(!screen.contains("Lightning Fast"));
    }

    #[test]
    fn result_draw_records_scroll_limit() {
        let summary: String = (1..=60).map(|n| format!("- item {n}\n")).collect();
        let view = view_with(Panel::Result {
            url: "example.com".to_string(),
            summary,
        });
        let mut ui = UiState::default();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, &view, &mut ui)).unwrap();
        assert!(ui.max_scroll > 0);
        assert!(ui.max_scroll < 60);

        let view = view_with(Panel::Result {
            url: "example.com".to_string(),
            summary: "short".to_string(),
        });
        terminal.draw(|frame| render(frame, &view, &mut ui)).unwrap();
        assert_eq!(ui.max_scroll, 0);
    }

    #[test]
    fn status_bar_reports_backend() {
        let view = AppViewModel {
            backend: BackendStatus::Online {
                status: "ok".to_string(),
                mode: Some("local".to_string()),
                model: Some("gemma3".to_string()),
            },
            ..view_with(Panel::Features)
        };
        let screen = draw(&view, &UiState::default());
        assert!(screen.contains("Backend: ok · local · gemma3"));
    }

    #[test]
    fn backend_label_variants() {
        assert_eq!(
            backend_label(&BackendStatus::Unreachable {
                message: "connection refused".to_string()
            })
            .0,
            "Backend unreachable: connection refused"
        );
        assert_eq!(
            backend_label(&BackendStatus::Online {
                status: "ok".to_string(),
                mode: None,
                model: None,
            })
            .0,
            "Backend: ok"
        );
    }
}
