//! Application state machine and event dispatcher.
//!
//! Key handling is synchronous: anything that needs the network is queued as
//! a [`Pending`] action, so the event loop can draw the in-flight state
//! before running it.

use std::{
  sync::Arc,
  time::{Duration, Instant},
};

use contacthub_core::{Contact, ContactDraft, Field};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use uuid::Uuid;

use crate::{
  client::{ApiClient, DeleteOutcome},
  form::{FIELDS, Form},
  view::{self, SortMode},
};

/// How long the "contact added" banner stays up.
pub const SUCCESS_BANNER: Duration = Duration::from_secs(3);

// ─── Focus ────────────────────────────────────────────────────────────────────

/// Which widget receives keys. Tab order: form fields, submit button, list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
  Form(Field),
  Submit,
  List,
}

impl Focus {
  fn next(self) -> Self {
    match self {
      Self::Form(f) => match FIELDS.iter().position(|x| *x == f) {
        Some(i) if i + 1 < FIELDS.len() => Self::Form(FIELDS[i + 1]),
        _ => Self::Submit,
      },
      Self::Submit => Self::List,
      Self::List => Self::Form(FIELDS[0]),
    }
  }

  fn prev(self) -> Self {
    match self {
      Self::Form(f) => match FIELDS.iter().position(|x| *x == f) {
        Some(i) if i > 0 => Self::Form(FIELDS[i - 1]),
        _ => Self::List,
      },
      Self::Submit => Self::Form(FIELDS[FIELDS.len() - 1]),
      Self::List => Self::Submit,
    }
  }
}

/// A network action queued by a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pending {
  Submit(ContactDraft),
  Delete(Uuid),
  Reload,
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  pub focus: Focus,

  /// Contacts as last known from the server, newest first.
  pub contacts: Vec<Contact>,

  pub form: Form,

  pub sort: SortMode,

  /// Current fuzzy-filter string (only edited when `filter_active`).
  pub filter: String,

  /// Whether the user is typing a filter query.
  pub filter_active: bool,

  /// Cursor position within the *visible* (sorted, filtered) list.
  pub list_cursor: usize,

  /// A create request is in flight; the submit button is disabled.
  pub submitting: bool,

  /// When set, the success banner shows until this instant.
  pub success_until: Option<Instant>,

  /// One-line status message shown in the status bar.
  pub status_msg: String,

  pending: Option<Pending>,

  /// Shared HTTP client.
  pub client: Arc<ApiClient>,
}

impl App {
  /// Create an [`App`] with an empty contact list and a blank form.
  pub fn new(client: ApiClient) -> Self {
    Self {
      focus: Focus::Form(Field::Name),
      contacts: Vec::new(),
      form: Form::default(),
      sort: SortMode::default(),
      filter: String::new(),
      filter_active: false,
      list_cursor: 0,
      submitting: false,
      success_until: None,
      status_msg: String::new(),
      pending: None,
      client: Arc::new(client),
    }
  }

  // ── Views ─────────────────────────────────────────────────────────────────

  /// Contacts in display order: sorted by the current mode, then filtered.
  pub fn visible_contacts(&self) -> Vec<&Contact> {
    view::filtered(view::sorted(&self.contacts, self.sort), &self.filter)
  }

  /// The contact under the list cursor in the visible view, if any.
  pub fn cursor_contact(&self) -> Option<&Contact> {
    self.visible_contacts().get(self.list_cursor).copied()
  }

  /// Submit is enabled exactly when the form is valid and nothing is in
  /// flight.
  pub fn can_submit(&self) -> bool { self.form.is_valid() && !self.submitting }

  pub fn show_success(&self, now: Instant) -> bool {
    self.success_until.is_some_and(|until| now < until)
  }

  /// Expire the success banner once its time is up.
  pub fn tick(&mut self, now: Instant) {
    if !self.show_success(now) {
      self.success_until = None;
    }
  }

  fn clamp_cursor(&mut self) {
    let len = self.visible_contacts().len();
    self.list_cursor = self.list_cursor.min(len.saturating_sub(1));
  }

  // ── Local state updates ───────────────────────────────────────────────────

  /// Mirror a successful create: prepend, clear the form, raise the banner.
  pub fn apply_created(&mut self, contact: Contact, now: Instant) {
    self.contacts.insert(0, contact);
    self.form.clear();
    self.focus = Focus::Form(Field::Name);
    self.success_until = Some(now + SUCCESS_BANNER);
    self.status_msg.clear();
  }

  /// Mirror a delete by dropping the record locally.
  pub fn apply_deleted(&mut self, id: Uuid) {
    self.contacts.retain(|c| c.id != id);
    self.clamp_cursor();
  }

  // ── Network actions ───────────────────────────────────────────────────────

  /// Take the queued network action, if any.
  pub fn take_pending(&mut self) -> Option<Pending> { self.pending.take() }

  /// Fetch all contacts and replace the local list. Failures are logged and
  /// leave the list as it was.
  pub async fn load_contacts(&mut self) {
    self.status_msg = "Loading contacts…".into();
    match self.client.list_contacts().await {
      Ok(contacts) => {
        self.contacts = contacts;
        self.clamp_cursor();
        self.status_msg.clear();
      }
      Err(e) => {
        tracing::error!(error = %format!("{e:#}"), "error fetching contacts");
        self.status_msg = format!("Error: {e}");
      }
    }
  }

  /// Run a queued action against the server.
  pub async fn run(&mut self, action: Pending) {
    match action {
      Pending::Reload => self.load_contacts().await,
      Pending::Submit(draft) => {
        let result = self.client.create_contact(&draft).await;
        self.submitting = false;
        match result {
          Ok(contact) => self.apply_created(contact, Instant::now()),
          Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "error submitting contact");
            self.status_msg = format!("Error: {e}");
          }
        }
      }
      Pending::Delete(id) => match self.client.delete_contact(id).await {
        Ok(DeleteOutcome::Deleted) => self.apply_deleted(id),
        Ok(DeleteOutcome::AlreadyGone) => {
          tracing::debug!(%id, "contact was already deleted");
          self.apply_deleted(id);
        }
        Err(e) => {
          tracing::error!(error = %format!("{e:#}"), "error deleting contact");
          self.status_msg = format!("Error: {e}");
        }
      },
    }
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub fn handle_key(&mut self, key: KeyEvent) -> bool {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return false;
    }

    // Filter input mode: all printable keys go into the filter string.
    if self.filter_active {
      self.handle_filter_key(key);
      return true;
    }

    match key.code {
      KeyCode::Tab => {
        self.focus = self.focus.next();
        return true;
      }
      KeyCode::BackTab => {
        self.focus = self.focus.prev();
        return true;
      }
      _ => {}
    }

    match self.focus {
      Focus::Form(field) => self.handle_form_key(field, key),
      Focus::Submit => self.handle_submit_key(key),
      Focus::List => return self.handle_list_key(key),
    }
    true
  }

  fn handle_filter_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Esc => {
        self.filter_active = false;
        self.filter.clear();
      }
      KeyCode::Enter => self.filter_active = false,
      KeyCode::Backspace => {
        self.filter.pop();
      }
      KeyCode::Char(c) => self.filter.push(c),
      _ => {}
    }
    self.list_cursor = 0;
  }

  fn handle_form_key(&mut self, field: Field, key: KeyEvent) {
    match key.code {
      KeyCode::Char(c) => self.form.push_char(field, c),
      KeyCode::Backspace => self.form.pop_char(field),
      KeyCode::Enter | KeyCode::Down => self.focus = self.focus.next(),
      KeyCode::Up => self.focus = self.focus.prev(),
      KeyCode::Esc => self.focus = Focus::List,
      _ => {}
    }
  }

  fn handle_submit_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Enter | KeyCode::Char(' ') => self.request_submit(),
      KeyCode::Up => self.focus = self.focus.prev(),
      KeyCode::Down => self.focus = self.focus.next(),
      KeyCode::Esc => self.focus = Focus::List,
      _ => {}
    }
  }

  /// Validate locally and, if everything passes, queue the create.
  fn request_submit(&mut self) {
    if self.submitting {
      return;
    }
    if !self.form.validate() {
      // Land on the first offending field.
      if let Some(field) = self.form.errors.keys().next() {
        self.focus = Focus::Form(*field);
      }
      return;
    }
    self.submitting = true;
    self.pending = Some(Pending::Submit(self.form.draft()));
  }

  fn handle_list_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      // Quit
      KeyCode::Char('q') => return false,

      // Navigation
      KeyCode::Down | KeyCode::Char('j') => {
        let len = self.visible_contacts().len();
        if len > 0 && self.list_cursor + 1 < len {
          self.list_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.list_cursor = self.list_cursor.saturating_sub(1);
      }

      // Delete the highlighted contact
      KeyCode::Char('d') | KeyCode::Delete => {
        if let Some(id) = self.cursor_contact().map(|c| c.id) {
          self.pending = Some(Pending::Delete(id));
        }
      }

      // Sort
      KeyCode::Char('s') => {
        self.sort = self.sort.next();
        self.list_cursor = 0;
      }

      // Filter
      KeyCode::Char('/') => {
        self.filter_active = true;
        self.filter.clear();
        self.list_cursor = 0;
      }

      KeyCode::Char('r') => self.pending = Some(Pending::Reload),

      KeyCode::Esc => self.focus = Focus::Form(Field::Name),

      _ => {}
    }
    true
  }
}
