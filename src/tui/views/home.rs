//! Landing page.

use crate::tui::theme::{colors, Styles};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

/// Feature cards shown on the landing page: (title, description).
pub const FEATURES: [(&str, &str); 4] = [
    (
        "Personalized Score",
        "Custom readiness score based on your skills and projects.",
    ),
    (
        "Skill Analysis",
        "Color-coded bars showing your strengths and gaps.",
    ),
    (
        "Project & Internship Insights",
        "Evaluate your hands-on experience.",
    ),
    (
        "Mock Interview Guidance",
        "Get actionable suggestions for improvement.",
    ),
];

pub fn render_home(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + tagline
            Constraint::Length(6), // Hero
            Constraint::Length(1), // Section title
            Constraint::Min(6),    // Feature cards
            Constraint::Length(3), // Call to action
        ])
        .split(area);

    render_title(frame, chunks[0]);
    render_hero(frame, chunks[1]);
    frame.render_widget(
        Paragraph::new(Line::styled(" Key Features", Styles::section_title())),
        chunks[2],
    );
    render_feature_cards(frame, chunks[3]);
    render_call_to_action(frame, chunks[4]);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::styled(
            "AI-Powered Placement Readiness Tool",
            Styles::header_title(),
        ),
        Line::styled(
            "Personalized insights and actionable suggestions to prepare for placements.",
            Styles::text_muted(),
        ),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

fn render_hero(frame: &mut Frame, area: Rect) {
    let scheme = colors();
    let hero = Paragraph::new(vec![
        Line::styled(
            "Get Ready for Your Dream Job",
            Style::default().fg(scheme.accent).bold(),
        ),
        Line::from(""),
        Line::styled(
            "Enter your scores, understand your strengths, and get personalized suggestions to improve.",
            Styles::text(),
        ),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Styles::border_focused()),
    );
    frame.render_widget(hero, area);
}

fn render_feature_cards(frame: &mut Frame, area: Rect) {
    let scheme = colors();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((title, desc), column) in FEATURES.iter().zip(columns.iter()) {
        let card = Paragraph::new(Line::styled(*desc, Styles::text()))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(format!(" {title} "))
                    .title_style(Style::default().fg(scheme.primary).bold())
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Styles::border()),
            );
        frame.render_widget(card, *column);
    }
}

fn render_call_to_action(frame: &mut Frame, area: Rect) {
    let scheme = colors();
    let cta = Paragraph::new(Line::from(vec![
        Span::styled(
            "Ready to check your placement readiness?  ",
            Styles::text(),
        ),
        Span::styled(
            " Enter ",
            Style::default().fg(Color::Black).bg(scheme.accent).bold(),
        ),
        Span::styled(" Go to Calculator", Styles::highlight()),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::TOP).border_style(Styles::border()));
    frame.render_widget(cta, area);
}
