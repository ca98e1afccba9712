//! Integration tests for `SqliteStore` against an in-memory database.

use contacthub_core::{ContactDraft, ContactStore, NewContact};
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn new_contact(name: &str, email: &str) -> NewContact {
  ContactDraft::new(name, email, "+1 (555) 010-0000")
    .with_message("met at the conference")
    .validate()
    .expect("valid draft")
}

// ─── Create / read ───────────────────────────────────────────────────────────

#[tokio::test]
async fn create_assigns_id_and_timestamps() {
  let s = store().await;

  let contact = s
    .create_contact(new_contact("Ada", "ada@example.com"))
    .await
    .unwrap();
  assert_ne!(contact.id, Uuid::nil());
  assert_eq!(contact.created_at, contact.updated_at);
  assert_eq!(contact.message, "met at the conference");

  let fetched = s.get_contact(contact.id).await.unwrap();
  assert_eq!(fetched, Some(contact));
}

#[tokio::test]
async fn ids_are_unique() {
  let s = store().await;
  let a = s.create_contact(new_contact("Ada", "ada@example.com")).await.unwrap();
  let b = s.create_contact(new_contact("Ada", "ada@example.com")).await.unwrap();
  assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn email_is_stored_lowercase() {
  let s = store().await;
  let input = ContactDraft::new("Ada", "A@Example.com", "0123456789")
    .validate()
    .unwrap();
  let created = s.create_contact(input).await.unwrap();

  let fetched = s.get_contact(created.id).await.unwrap().unwrap();
  assert_eq!(fetched.email, "a@example.com");
}

#[tokio::test]
async fn get_contact_missing_returns_none() {
  let s = store().await;
  let result = s.get_contact(Uuid::new_v4()).await.unwrap();
  assert!(result.is_none());
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_empty_store() {
  let s = store().await;
  assert!(s.list_contacts().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_is_newest_first() {
  let s = store().await;
  let mut ids = Vec::new();
  for name in ["first", "second", "third"] {
    let c = s
      .create_contact(new_contact(name, &format!("{name}@example.com")))
      .await
      .unwrap();
    ids.push(c.id);
  }
  ids.reverse();

  let listed = s.list_contacts().await.unwrap();
  let listed_ids: Vec<Uuid> = listed.iter().map(|c| c.id).collect();
  assert_eq!(listed_ids, ids);
  assert!(listed.windows(2).all(|w| w[0].created_at >= w[1].created_at));
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_returns_prior_contents() {
  let s = store().await;
  let created = s.create_contact(new_contact("Ada", "ada@example.com")).await.unwrap();

  let deleted = s.delete_contact(created.id).await.unwrap();
  assert_eq!(deleted, Some(created.clone()));
  assert!(s.get_contact(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn second_delete_reports_not_found() {
  let s = store().await;
  let created = s.create_contact(new_contact("Ada", "ada@example.com")).await.unwrap();

  assert!(s.delete_contact(created.id).await.unwrap().is_some());
  assert!(s.delete_contact(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn racing_deletes_remove_exactly_once() {
  let s = store().await;
  let created = s.create_contact(new_contact("Ada", "ada@example.com")).await.unwrap();

  let (a, b) = tokio::join!(s.delete_contact(created.id), s.delete_contact(created.id));
  let hits = [a.unwrap(), b.unwrap()].into_iter().flatten().count();
  assert_eq!(hits, 1);
}

#[tokio::test]
async fn list_after_creates_and_deletes() {
  let s = store().await;
  let mut created = Vec::new();
  for i in 0..5 {
    created.push(
      s.create_contact(new_contact(&format!("c{i}"), &format!("c{i}@example.com")))
        .await
        .unwrap(),
    );
  }
  s.delete_contact(created[1].id).await.unwrap();
  s.delete_contact(created[3].id).await.unwrap();

  let listed = s.list_contacts().await.unwrap();
  let names: Vec<&str> = listed.iter().map(|c| c.name.as_str()).collect();
  assert_eq!(names, ["c4", "c2", "c0"]);
}

// ─── Connection strings ──────────────────────────────────────────────────────

#[tokio::test]
async fn connect_accepts_memory_and_prefixed_urls() {
  for url in [":memory:", "sqlite::memory:", "sqlite://:memory:"] {
    let s = SqliteStore::connect(url).await.unwrap();
    assert!(s.list_contacts().await.unwrap().is_empty(), "{url}");
  }
}

#[tokio::test]
async fn file_store_persists_across_reopen() {
  let path = std::env::temp_dir().join(format!("contacthub-{}.db", Uuid::new_v4()));

  let created = {
    let s = SqliteStore::open(&path).await.unwrap();
    s.create_contact(new_contact("Ada", "ada@example.com")).await.unwrap()
  };

  let reopened = SqliteStore::connect(&format!("sqlite://{}", path.display()))
    .await
    .unwrap();
  assert_eq!(reopened.list_contacts().await.unwrap(), vec![created]);

  drop(reopened);
  for suffix in ["", "-wal", "-shm"] {
    let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
  }
}
