//! Calculator page: input form, score gauge, skill bars, radar and suggestions.

use crate::readiness::{ReadinessResult, Skill};
use crate::reports::ALL_TARGETS_MET;
use crate::tui::app::{step_for, App};
use crate::tui::theme::{category_badge, colors, Styles};
use crate::tui::widgets::{render_radar, HorizontalBar};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Form label for a skill, including its range.
#[must_use]
pub const fn field_label(skill: Skill) -> &'static str {
    match skill {
        Skill::Dsa => "DSA Score (0-100)",
        Skill::CoreCs => "Core CS Score (0-100)",
        Skill::Aptitude => "Aptitude Score (0-100)",
        Skill::MockInterview => "Mock Interview (0-100)",
        Skill::Communication => "Communication (1-5)",
        Skill::Projects => "Strong Projects (0-5)",
        Skill::Internship => "Internship (months)",
        Skill::Cgpa => "CGPA (0-10)",
    }
}

/// Render a raw value at the precision of its step.
#[must_use]
pub fn format_value(skill: Skill, value: f64) -> String {
    if step_for(skill) < 1.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.0}")
    }
}

pub fn render_calculator(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(40), Constraint::Min(40)])
        .split(area);

    render_form(frame, columns[0], app);

    match app.result() {
        Some(result) => render_result(frame, columns[1], result),
        None => render_placeholder(frame, columns[1]),
    }
}

fn render_form(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let form = app.form();

    let items: Vec<ListItem> = Skill::ALL
        .iter()
        .enumerate()
        .map(|(i, skill)| {
            let selected = i == form.selected_index();
            let value_text = match (selected, form.buffer()) {
                (true, Some(typed)) => format!("{typed}_"),
                _ => format_value(*skill, form.values().get(*skill)),
            };
            let marker = if selected { "▶ " } else { "  " };
            let line = Line::from(vec![
                Span::styled(marker, Style::default().fg(scheme.accent)),
                Span::styled(
                    format!("{:<24}", field_label(*skill)),
                    if selected { Styles::value() } else { Styles::text() },
                ),
                Span::styled(
                    format!("{value_text:>7}"),
                    if selected {
                        Styles::highlight()
                    } else {
                        Styles::value()
                    },
                ),
            ]);
            let item = ListItem::new(line);
            if selected {
                item.style(Styles::selected())
            } else {
                item
            }
        })
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(10), Constraint::Min(3)])
        .split(area);

    let list = List::new(items).block(
        Block::default()
            .title(" Your Scores ")
            .title_style(Styles::section_title())
            .borders(Borders::ALL)
            .border_style(Styles::border_focused()),
    );
    frame.render_widget(list, chunks[0]);

    let help = Paragraph::new(vec![
        Line::styled(
            "Enter your scores to see your readiness, skill gaps, and improvement suggestions.",
            Styles::text_muted(),
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Styles::shortcut_key()),
            Span::styled(" calculate  ", Styles::shortcut_desc()),
            Span::styled("r", Styles::shortcut_key()),
            Span::styled(" reset", Styles::shortcut_desc()),
        ]),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).border_style(Styles::border()));
    frame.render_widget(help, chunks[1]);
}

fn render_placeholder(frame: &mut Frame, area: Rect) {
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::styled("No score yet", Styles::section_title()),
        Line::from(""),
        Line::styled("Press Enter to calculate", Styles::text_muted()),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(Styles::border()));
    frame.render_widget(text, area);
}

fn render_result(frame: &mut Frame, area: Rect, result: &ReadinessResult) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Gauge
            Constraint::Min(10),    // Bars + radar
            Constraint::Length(10), // Suggestions
        ])
        .split(area);

    render_score_gauge(frame, rows[0], result);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    render_skill_bars(frame, middle[0], result);

    let axes: Vec<(&'static str, f64)> = result
        .skill_breakdown
        .iter()
        .map(|(skill, value)| (skill.name(), *value))
        .collect();
    render_radar(
        frame,
        middle[1],
        &axes,
        Block::default()
            .title(" Skill Radar ")
            .title_style(Styles::section_title())
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );

    render_suggestions(frame, rows[2], result);
}

fn render_score_gauge(frame: &mut Frame, area: Rect, result: &ReadinessResult) {
    let scheme = colors();
    let color = scheme.category_color(result.category);
    let percent = result.score.clamp(0.0, 100.0).round() as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(Line::from(vec![
                    Span::styled(" Your Readiness Score ", Style::default().bold().fg(scheme.text)),
                    category_badge(result.category),
                    Span::raw(" "),
                ]))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
        .gauge_style(Style::default().fg(color).bg(scheme.muted))
        .percent(percent)
        .label(format!("{:.2} - {}", result.score, result.category));
    frame.render_widget(gauge, area);
}

fn render_skill_bars(frame: &mut Frame, area: Rect, result: &ReadinessResult) {
    let block = Block::default()
        .title(" Skill Overview ")
        .title_style(Styles::section_title())
        .borders(Borders::ALL)
        .border_style(Styles::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); result.skill_breakdown.len()])
        .split(inner);

    for ((skill, value), row) in result.skill_breakdown.iter().zip(rows.iter()) {
        frame.render_widget(HorizontalBar::new(skill.name(), *value), *row);
    }
}

fn render_suggestions(frame: &mut Frame, area: Rect, result: &ReadinessResult) {
    let scheme = colors();
    let lines: Vec<Line> = if result.suggestions.is_empty() {
        vec![Line::styled(ALL_TARGETS_MET, Styles::success().bold())]
    } else {
        result
            .suggestions
            .iter()
            .map(|s| {
                Line::from(vec![
                    Span::styled("- ", Style::default().fg(scheme.accent)),
                    Span::styled(s.message.as_str(), Styles::text()),
                ])
            })
            .collect()
    };

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .title(" Suggestions to Improve ")
            .title_style(Styles::section_title())
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(widget, area);
}
