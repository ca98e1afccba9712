//! TUI rendering — orchestrates all panes.

pub mod contact_form;
pub mod contact_list;

use std::time::Instant;

use chrono::Local;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Paragraph},
};

use crate::app::{App, Focus};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let area = f.area();

  // Vertical stack: header, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0], app);
  draw_body(f, rows[1], app);
  draw_status(f, rows[2], app);
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
  let date = Local::now().format("%Y-%m-%d").to_string();

  let left = Span::styled(
    " Contact Hub",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(
    format!("{}  {date} ", app.client.base_url()),
    Style::default().fg(Color::Gray),
  );

  let left_width = left.content.chars().count() as u16;
  let right_width = right.content.chars().count() as u16;
  let pad = area
    .width
    .saturating_sub(left_width)
    .saturating_sub(right_width);

  let line = Line::from(vec![
    left,
    Span::raw(" ".repeat(pad as usize)),
    right,
  ]);

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

// ─── Body ─────────────────────────────────────────────────────────────────────

fn draw_body(f: &mut Frame, area: Rect, app: &App) {
  // Form on the left, list on the right.
  let cols = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
    .split(area);

  contact_form::draw(f, cols[0], app);
  contact_list::draw(f, cols[1], app);
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, hints) = match app.focus {
    Focus::List if app.filter_active => {
      ("FILTER", "Type to filter  Enter keep  Esc clear")
    }
    Focus::List => (
      "LIST",
      "↑↓/jk move  d delete  s sort  / filter  r reload  Tab form  q quit",
    ),
    Focus::Submit => ("FORM", "Enter add contact  Tab list  Shift-Tab back"),
    Focus::Form(_) => ("FORM", "Type to edit  Tab next field  Esc list  Ctrl-C quit"),
  };

  let line = if app.show_success(Instant::now()) {
    Line::from(vec![Span::styled(
      " ✓ Contact added successfully! ",
      Style::default()
        .fg(Color::Black)
        .bg(Color::Green)
        .add_modifier(Modifier::BOLD),
    )])
  } else {
    let status = if app.status_msg.is_empty() {
      hints.to_string()
    } else {
      app.status_msg.clone()
    };
    let status_style = if app.status_msg.starts_with("Error") {
      Style::default().fg(Color::Red)
    } else {
      Style::default().fg(Color::DarkGray)
    };
    Line::from(vec![
      Span::styled(
        format!(" {mode_label} "),
        Style::default()
          .fg(Color::Black)
          .bg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      ),
      Span::styled(format!("  {status}"), status_style),
    ])
  };

  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}
