//! Main UI rendering and the terminal event loop.

use super::app::{App, Page};
use super::events::{handle_key_event, Event, EventHandler};
use super::theme::{colors, render_footer_hints, set_theme, FooterHints, Styles, Theme};
use super::views;
use super::widgets::{centered_rect, check_terminal_size, render_size_warning, MIN_HEIGHT, MIN_WIDTH};
use crate::config::TuiPreferences;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
};
use std::io::{self, stdout};

/// Run the dashboard until the user quits.
///
/// `theme` is the configured theme name; a saved preference overrides it.
pub fn run_tui(app: &mut App, theme: &str, tick_rate_ms: u64) -> io::Result<()> {
    let theme_name = TuiPreferences::load().map_or_else(|| theme.to_string(), |p| p.theme);
    set_theme(Theme::from_name(&theme_name));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(tick_rate_ms);
    let outcome = event_loop(&mut terminal, app, &events);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    outcome
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &EventHandler,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Resize(_, _) => {}
            Event::Tick => app.on_tick(),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if check_terminal_size(area.width, area.height).is_err() {
        render_size_warning(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(10),   // Page
            Constraint::Length(1), // Status line
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);

    match app.page {
        Page::Home => views::render_home(frame, chunks[1]),
        Page::Calculator => views::render_calculator(frame, chunks[1], app),
    }

    render_status_line(frame, chunks[2], app);
    render_footer(frame, chunks[3], app);

    if app.show_help {
        render_help_overlay(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let selected = match app.page {
        Page::Home => 0,
        Page::Calculator => 1,
    };
    let tabs = Tabs::new(vec![Page::Home.title(), Page::Calculator.title()])
        .select(selected)
        .style(Style::default().fg(scheme.text_muted))
        .highlight_style(Style::default().fg(scheme.primary).bold())
        .divider(Span::styled(" │ ", Style::default().fg(scheme.muted)))
        .block(
            Block::default()
                .title(Span::styled(
                    " placement-readiness ",
                    Styles::header_title(),
                ))
                .borders(Borders::BOTTOM)
                .border_style(Styles::border()),
        );
    frame.render_widget(tabs, area);
}

fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(ref warning) = app.artifact_warning {
        Line::from(vec![
            Span::styled(" ⚠ ", Styles::warning()),
            Span::styled(warning.as_str(), Styles::warning()),
        ])
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(line).style(Styles::status_bar()), area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    // Show status message if set, otherwise show page hints
    if let Some(ref msg) = app.status_message {
        let status_line = Line::from(vec![
            Span::styled("ℹ ", Style::default().fg(colors().accent)),
            Span::styled(msg.as_str(), Style::default().fg(colors().accent).bold()),
        ]);
        let footer = Paragraph::new(status_line).alignment(Alignment::Center);
        frame.render_widget(footer, area);
        return;
    }

    let hints = FooterHints::for_page(app.page.name());
    let footer = Paragraph::new(Line::from(render_footer_hints(&hints)))
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors().text_muted));
    frame.render_widget(footer, area);
}

fn help_row(key: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<14} "), Style::default().fg(colors().accent)),
        Span::styled(desc, Style::default().fg(colors().text)),
    ])
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup_area);

    let section = |title: &'static str| {
        Line::from(Span::styled(
            title,
            Style::default().fg(colors().primary).bold(),
        ))
    };

    let help_text = vec![
        Line::styled(
            "━━━ Keyboard Shortcuts ━━━",
            Style::default().fg(colors().accent).bold(),
        ),
        Line::from(""),
        section("Navigation"),
        help_row("Enter / c", "Open the calculator (home)"),
        help_row("h / Esc", "Back to home (calculator)"),
        help_row("↑/↓ or k/j", "Select field"),
        Line::from(""),
        section("Calculator"),
        help_row("←/→", "Step value down/up"),
        help_row("0-9 .", "Type a value"),
        help_row("Backspace", "Delete typed character"),
        help_row("Enter", "Calculate readiness"),
        help_row("r", "Reset form"),
        Line::from(""),
        section("General"),
        help_row("T", "Cycle theme"),
        help_row("?", "Toggle this help"),
        help_row("q / Ctrl+C", "Quit"),
    ];

    let help = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .title_style(Style::default().fg(colors().accent).bold())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors().accent)),
    );
    frame.render_widget(help, popup_area);
}
