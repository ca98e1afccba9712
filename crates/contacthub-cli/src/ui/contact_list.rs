//! Contact list pane — right panel.

use chrono::Local;
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::{App, Focus};

/// Render the contact list into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let visible = app.visible_contacts();
  let total = app.contacts.len();

  // Title with count and sort order.
  let noun = if total == 1 { "contact" } else { "contacts" };
  let title = if app.filter_active || !app.filter.is_empty() {
    format!(" {}/{total} {noun} · {} ", visible.len(), app.sort.label())
  } else {
    format!(" {total} {noun} · {} ", app.sort.label())
  };

  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(if app.focus == Focus::List {
      Style::default().fg(Color::Cyan)
    } else {
      Style::default().fg(Color::DarkGray)
    });

  let mut inner_area = block.inner(area);
  f.render_widget(block, area);

  // Filter bar along the bottom of the pane.
  if (app.filter_active || !app.filter.is_empty()) && inner_area.height > 2 {
    let filter_area = Rect {
      x:      inner_area.x,
      y:      inner_area.y + inner_area.height - 1,
      width:  inner_area.width,
      height: 1,
    };
    inner_area.height = inner_area.height.saturating_sub(1);

    let filter_text = if app.filter_active {
      format!("/{}_", app.filter)
    } else {
      format!("/{}", app.filter)
    };
    f.render_widget(
      Paragraph::new(filter_text).style(Style::default().fg(Color::Yellow)),
      filter_area,
    );
  }

  if visible.is_empty() {
    let hint = if total == 0 {
      "No contacts yet. Add your first contact!"
    } else {
      "No contacts match the filter."
    };
    f.render_widget(
      Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
      inner_area,
    );
    return;
  }

  let dim = Style::default().fg(Color::DarkGray);
  let items: Vec<ListItem> = visible
    .iter()
    .map(|contact| {
      let mut lines = vec![
        Line::from(Span::styled(
          contact.name.clone(),
          Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("  {}  ·  {}", contact.email, contact.phone)),
      ];
      if !contact.message.is_empty() {
        lines.push(Line::from(Span::styled(
          format!("  “{}”", contact.message),
          Style::default().fg(Color::Gray),
        )));
      }
      let added = contact.created_at.with_timezone(&Local);
      lines.push(Line::from(Span::styled(
        format!("  added {}", added.format("%Y-%m-%d %H:%M")),
        dim,
      )));
      ListItem::new(lines)
    })
    .collect();

  let mut state = ListState::default();
  state.select(Some(app.list_cursor));

  f.render_stateful_widget(
    List::new(items)
      .highlight_style(
        Style::default()
          .bg(Color::Blue)
          .fg(Color::White),
      )
      .highlight_symbol("▌"),
    inner_area,
    &mut state,
  );
}
