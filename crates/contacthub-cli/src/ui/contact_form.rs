//! New-contact form pane — left panel.

use contacthub_core::Field;
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
  app::{App, Focus},
  form::FIELDS,
};

fn label(field: Field) -> &'static str {
  match field {
    Field::Name => "Name *",
    Field::Email => "Email *",
    Field::Phone => "Phone *",
    Field::Message => "Message",
  }
}

/// Render the form into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let focused = matches!(app.focus, Focus::Form(_) | Focus::Submit);
  let block = Block::default()
    .title(" Add Contact ")
    .borders(Borders::ALL)
    .border_style(if focused {
      Style::default().fg(Color::Cyan)
    } else {
      Style::default().fg(Color::DarkGray)
    });

  let mut lines: Vec<Line> = Vec::new();

  for field in FIELDS {
    let active = app.focus == Focus::Form(field);
    let label_style = if active {
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
    } else {
      Style::default().fg(Color::Gray)
    };
    lines.push(Line::from(Span::styled(label(field), label_style)));

    let value = app.form.value(field);
    let mut spans = vec![Span::raw(" "), Span::raw(value.to_string())];
    if active {
      spans.push(Span::styled("_", Style::default().fg(Color::Cyan)));
    }
    lines.push(Line::from(spans));

    match app.form.errors.get(&field) {
      Some(msg) => lines.push(Line::from(Span::styled(
        format!(" {msg}"),
        Style::default().fg(Color::Red),
      ))),
      None => lines.push(Line::from("")),
    }
  }

  // Submit button.
  let (button, style) = if app.submitting {
    ("[ Adding… ]", Style::default().fg(Color::DarkGray))
  } else if !app.can_submit() {
    ("[ Add Contact ]", Style::default().fg(Color::DarkGray))
  } else if app.focus == Focus::Submit {
    (
      "[ Add Contact ]",
      Style::default()
        .fg(Color::Black)
        .bg(Color::Green)
        .add_modifier(Modifier::BOLD),
    )
  } else {
    ("[ Add Contact ]", Style::default().fg(Color::Green))
  };
  let marker = if app.focus == Focus::Submit { "▶ " } else { "  " };
  lines.push(Line::from(vec![
    Span::styled(marker, Style::default().fg(Color::Cyan)),
    Span::styled(button, style),
  ]));

  f.render_widget(
    Paragraph::new(lines)
      .block(block)
      .wrap(Wrap { trim: false }),
    area,
  );
}
