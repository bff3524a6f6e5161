use crate::models::ExamSummary;
use crate::ui::layout::calculate_summary_chunks;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Result popup drawn over the quiz screen.
pub fn draw_summary(f: &mut Frame, summary: &ExamSummary) {
    let layout = calculate_summary_chunks(f.area());
    f.render_widget(Clear, layout.popup_area);

    let title = Paragraph::new("Exam Result")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let score_color = if summary.score >= 60 {
        Color::Green
    } else {
        Color::Red
    };

    let mut text = Text::default();
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        format!("Score: {}", summary.score),
        Style::default()
            .fg(score_color)
            .add_modifier(Modifier::BOLD),
    )));
    text.push_line(Line::from(""));
    text.push_line(Line::from(format!("Correct: {}", summary.correct)));
    text.push_line(Line::from(format!("Wrong: {}", summary.wrong)));
    text.push_line(Line::from(format!(
        "Unanswered: {}",
        summary.total - summary.correct - summary.wrong
    )));
    text.push_line(Line::from(format!("Accuracy: {}", summary.accuracy())));

    let content = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, layout.content_area);

    let help = Paragraph::new(Line::from(vec![
        Span::styled(
            "Enter/Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Review Answers  "),
        Span::styled(
            "Ctrl+C",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Exit App"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}
