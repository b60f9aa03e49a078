use pinnote_core::{KeyValueStore, NoteDraft, NoteList, SqliteStore, NOTES_KEY};
use rusqlite::Connection;

#[test]
fn in_memory_store_reads_back_last_write() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    assert_eq!(store.get(NOTES_KEY).unwrap(), None);

    store.set(NOTES_KEY, "[]").unwrap();
    store.set(NOTES_KEY, "[1]").unwrap();
    assert_eq!(store.get(NOTES_KEY).unwrap().as_deref(), Some("[1]"));
}

#[test]
fn notes_survive_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pinnote.sqlite3");

    {
        let store = SqliteStore::open(&path).unwrap();
        let mut list = NoteList::load(store).unwrap();
        list.add(NoteDraft::new("groceries", "weekly", "milk, eggs"))
            .unwrap();
        list.add(NoteDraft::new("ideas", "later", "write more tests"))
            .unwrap();
        list.toggle_pin(2).unwrap();
    }

    let list = NoteList::load(SqliteStore::open(&path).unwrap()).unwrap();
    assert_eq!(list.notes().len(), 2);
    assert_eq!(list.notes()[0].title, "groceries");
    assert!(list.notes()[1].pinned);
}

#[test]
fn store_uses_single_kv_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kv.sqlite3");
    {
        let mut store = SqliteStore::open(&path).unwrap();
        store.set(NOTES_KEY, "[]").unwrap();
    }

    let conn = Connection::open(&path).unwrap();
    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM kv_store WHERE key = 'notes';", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn dark_mode_toggle_picks_up_writes_from_another_handle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shared.sqlite3");

    let mut list = NoteList::load(SqliteStore::open(&path).unwrap()).unwrap();
    list.add(NoteDraft::new("a", "b", "c")).unwrap();

    let mut other = SqliteStore::open(&path).unwrap();
    other
        .set(
            NOTES_KEY,
            r#"[{"id":1,"title":"a","tagline":"b","body":"c","pinned":false},
                {"id":2,"title":"x","tagline":"y","body":"z","pinned":true}]"#,
        )
        .unwrap();

    list.toggle_dark_mode().unwrap();
    assert_eq!(list.notes().len(), 2);
    assert_eq!(list.notes()[1].title, "x");
}

#[test]
fn failed_dark_mode_reload_leaves_theme_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.sqlite3");

    let mut list = NoteList::load(SqliteStore::open(&path).unwrap()).unwrap();
    list.add(NoteDraft::new("a", "b", "c")).unwrap();

    let mut other = SqliteStore::open(&path).unwrap();
    other.set(NOTES_KEY, "{bad").unwrap();

    assert!(list.toggle_dark_mode().is_err());
    assert!(!list.dark_mode());
    assert_eq!(list.notes().len(), 1);
}

#[test]
fn reload_pulls_current_page_back_into_range() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shrink.sqlite3");

    let mut list = NoteList::load(SqliteStore::open(&path).unwrap()).unwrap();
    for n in 0..13 {
        list.add(NoteDraft::new(format!("t{n}"), "g", "b")).unwrap();
    }
    list.paginate(3).unwrap();

    let mut other = SqliteStore::open(&path).unwrap();
    other
        .set(
            NOTES_KEY,
            r#"[{"id":1,"title":"a","tagline":"b","body":"c","pinned":false}]"#,
        )
        .unwrap();

    list.reload().unwrap();
    assert_eq!(list.current_page(), 1);
    assert_eq!(list.current_notes().len(), 1);

    for n in 0..12 {
        list.add(NoteDraft::new(format!("u{n}"), "g", "b")).unwrap();
    }
    list.paginate(3).unwrap();
    other.set(NOTES_KEY, "[]").unwrap();

    list.toggle_dark_mode().unwrap();
    assert_eq!(list.current_page(), 1);
    assert!(list.current_notes().is_empty());
}
