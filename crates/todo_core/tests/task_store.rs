use std::sync::{Arc, Mutex};
use todo_core::{Task, TaskStore};

fn task(id: i64, title: &str) -> Task {
    Task::new(id, title, format!("Opis {id}"), 1_700_000_000_000 + id)
}

fn seeded() -> TaskStore {
    TaskStore::from_tasks(vec![task(1, "Zadanie 1"), task(2, "Zadanie 2")])
}

/// Records every published sequence.
fn record(store: &mut TaskStore) -> Arc<Mutex<Vec<Vec<Task>>>> {
    let published = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&published);
    store.subscribe(move |tasks| sink.lock().unwrap().push(tasks.to_vec()));
    published
}

#[test]
fn add_appends_and_publishes_new_sequence() {
    let mut store = seeded();
    let published = record(&mut store);

    store.add(task(3, "Zadanie 3"));

    let expected = vec![task(1, "Zadanie 1"), task(2, "Zadanie 2"), task(3, "Zadanie 3")];
    assert_eq!(store.tasks(), expected.as_slice());
    assert_eq!(published.lock().unwrap().last(), Some(&expected));
}

#[test]
fn add_does_not_reject_duplicate_ids() {
    let mut store = seeded();
    store.add(task(1, "duplicate"));
    assert_eq!(store.len(), 3);
}

#[test]
fn update_replaces_matching_task_in_place() {
    let mut store = seeded();
    let updated = task(1, "Updated");

    store.update(updated.clone());

    assert_eq!(store.tasks(), &[updated, task(2, "Zadanie 2")]);
}

#[test]
fn update_of_unknown_id_keeps_sequence_and_still_publishes() {
    let mut store = seeded();
    let published = record(&mut store);

    store.update(task(99, "ghost"));

    let published = published.lock().unwrap();
    assert_eq!(published.len(), 2);
    assert_eq!(published[0], published[1]);
    assert_eq!(store.tasks(), seeded().tasks());
}

#[test]
fn remove_drops_only_matching_task_and_keeps_order() {
    let mut store = TaskStore::from_tasks(vec![
        task(1, "a"),
        task(2, "b"),
        task(3, "c"),
    ]);

    store.remove(2);

    assert_eq!(store.tasks(), &[task(1, "a"), task(3, "c")]);
}

#[test]
fn remove_is_idempotent() {
    let mut once = seeded();
    once.remove(1);

    let mut twice = seeded();
    twice.remove(1);
    twice.remove(1);

    assert_eq!(once.tasks(), twice.tasks());
}

#[test]
fn remove_of_unknown_id_keeps_sequence() {
    let mut store = seeded();
    store.remove(42);
    assert_eq!(store.tasks(), seeded().tasks());
}

#[test]
fn complete_sets_flag_and_is_idempotent() {
    let mut store = seeded();

    store.complete(2);
    store.complete(2);

    let completed = store.get(2).expect("task 2 should exist");
    assert!(completed.is_completed);
    assert_eq!(completed.title, "Zadanie 2");
    assert!(!store.get(1).unwrap().is_completed);
}

#[test]
fn complete_of_unknown_id_is_noop_with_publish() {
    let mut store = seeded();
    let published = record(&mut store);

    store.complete(7);

    assert_eq!(published.lock().unwrap().len(), 2);
    assert!(store.tasks().iter().all(|task| !task.is_completed));
}

#[test]
fn attach_photo_sets_path_and_keeps_position() {
    let mut store = seeded();
    let published = record(&mut store);

    store.attach_photo(1, "new/photo/path");

    let expected = vec![task(1, "Zadanie 1").with_photo("new/photo/path"), task(2, "Zadanie 2")];
    assert_eq!(store.tasks(), expected.as_slice());
    assert_eq!(published.lock().unwrap().len(), 2);
}

#[test]
fn attach_photo_to_unknown_id_is_noop() {
    let mut store = seeded();
    store.attach_photo(5, "x.jpg");
    assert!(store.tasks().iter().all(|task| task.photo_path.is_none()));
}

#[test]
fn update_scenario_replaces_first_task_title() {
    let mut store = seeded();
    let published = record(&mut store);

    let updated = store.get(1).unwrap().with_title_and_description("Updated", "Opis 1");
    store.update(updated);

    let last = published.lock().unwrap().last().cloned().unwrap();
    assert_eq!(last[0].id, 1);
    assert_eq!(last[0].title, "Updated");
    assert_eq!(last[1], task(2, "Zadanie 2"));
}

#[test]
fn add_then_remove_publishes_exactly_twice_after_initial_state() {
    let mut store = TaskStore::new();
    let published = record(&mut store);

    store.add(task(1, "Test Task"));
    store.remove(1);

    let published = published.lock().unwrap();
    assert_eq!(published.len(), 3);
    assert!(published[0].is_empty());
    assert_eq!(published[1], vec![task(1, "Test Task")]);
    assert!(published[2].is_empty());
}

#[test]
fn every_subscriber_receives_each_publish_once() {
    let mut store = TaskStore::new();
    let first = record(&mut store);
    let second = record(&mut store);

    store.add(task(1, "a"));
    store.complete(1);

    assert_eq!(first.lock().unwrap().len(), 3);
    assert_eq!(second.lock().unwrap().len(), 3);
    assert_eq!(*first.lock().unwrap(), *second.lock().unwrap());
}

#[test]
fn id_mutations_apply_to_every_task_sharing_the_id() {
    let duplicated = || TaskStore::from_tasks(vec![task(1, "a"), task(2, "x"), task(1, "b")]);

    let mut completed = duplicated();
    completed.complete(1);
    let flags = completed.tasks().iter().map(|t| t.is_completed).collect::<Vec<_>>();
    assert_eq!(flags, vec![true, false, true]);

    let mut photographed = duplicated();
    photographed.attach_photo(1, "p.jpg");
    assert_eq!(photographed.tasks()[0].photo_path.as_deref(), Some("p.jpg"));
    assert_eq!(photographed.tasks()[2].photo_path.as_deref(), Some("p.jpg"));

    let mut updated = duplicated();
    updated.update(task(1, "same"));
    assert_eq!(updated.tasks(), &[task(1, "same"), task(2, "x"), task(1, "same")]);
}

#[test]
fn remove_with_duplicate_ids_is_idempotent() {
    let duplicated = || TaskStore::from_tasks(vec![task(1, "a"), task(2, "x"), task(1, "b")]);

    let mut once = duplicated();
    once.remove(1);
    let mut twice = duplicated();
    twice.remove(1);
    twice.remove(1);

    assert_eq!(once.tasks(), &[task(2, "x")]);
    assert_eq!(once.tasks(), twice.tasks());
}
