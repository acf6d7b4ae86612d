use super::*;

fn ann() -> SessionRecord {
    SessionRecord { name: "Ann".into(), email: "a@x.com".into() }
}

#[test]
fn empty_store_has_no_session() {
    let session = SessionStore::new(MemoryStore::default());
    assert_eq!(session.current(), Ok(None));
}

#[test]
fn save_writes_json_under_current_user_key() {
    let session = SessionStore::new(MemoryStore::default());
    session.save(&ann()).unwrap();

    let raw = session.backend().get(SESSION_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value, serde_json::json!({ "name": "Ann", "email": "a@x.com" }));
    assert_eq!(session.current(), Ok(Some(ann())));
}

#[test]
fn clear_removes_record() {
    let session = SessionStore::new(MemoryStore::default());
    session.save(&ann()).unwrap();
    session.clear().unwrap();
    assert_eq!(session.current(), Ok(None));
    assert_eq!(session.backend().get(SESSION_KEY), Ok(None));
}

#[test]
fn stored_null_reads_as_absent() {
    let store = MemoryStore::default();
    store.set(SESSION_KEY, "null").unwrap();
    let session = SessionStore::new(store);
    assert_eq!(session.current(), Ok(None));
}

#[test]
fn record_without_name_still_decodes() {
    let store = MemoryStore::default();
    store.set(SESSION_KEY, r#"{"email":"a@x.com"}"#).unwrap();
    let session = SessionStore::new(store);
    let record = session.current().unwrap().unwrap();
    assert_eq!(record.name, "");
    assert_eq!(record.email, "a@x.com");
}

#[test]
fn record_with_null_name_reads_as_empty_name() {
    let store = MemoryStore::default();
    store.set(SESSION_KEY, r#"{"name":null,"email":"a@x.com"}"#).unwrap();
    let session = SessionStore::new(store);
    assert_eq!(session.current(), Ok(Some(SessionRecord { name: String::new(), email: "a@x.com".into() })));
}

#[test]
fn garbage_value_is_corrupt() {
    let store = MemoryStore::default();
    store.set(SESSION_KEY, "{not json").unwrap();
    let session = SessionStore::new(store);
    let err = session.current().unwrap_err();
    assert!(matches!(err, StorageError::Corrupt(_)));
    assert_eq!(err.error_code(), "E_STORAGE_CORRUPT");
}
