use std::sync::Arc;
use todo_core::{
    BindingConfig, CaptureOutcome, Collaborators, FixedClock, NotificationChannel, QueuedNotifier,
    QueuedPhotoCapture, SequentialIdGenerator, SnapshotView, Task, TaskStore, ViewBinding,
    ViewError,
};

type TestBinding = ViewBinding<
    SnapshotView,
    QueuedNotifier,
    QueuedPhotoCapture,
    SequentialIdGenerator,
    FixedClock,
>;

struct Harness {
    binding: TestBinding,
    view: Arc<SnapshotView>,
    notifier: QueuedNotifier,
    photo: QueuedPhotoCapture,
}

fn harness(store: TaskStore) -> Harness {
    let view = Arc::new(SnapshotView::new());
    let notifier = QueuedNotifier::new();
    let photo = QueuedPhotoCapture::new();
    let binding = ViewBinding::new(
        store,
        Arc::clone(&view),
        Collaborators {
            notifier: notifier.clone(),
            photo: photo.clone(),
            ids: SequentialIdGenerator::starting_at(100),
            clock: FixedClock(1_700_000_000_000),
        },
        BindingConfig::default(),
    )
    .expect("default config should be valid");

    Harness {
        binding,
        view,
        notifier,
        photo,
    }
}

fn seeded() -> TaskStore {
    TaskStore::from_tasks(vec![
        Task::new(1, "Zadanie 1", "Opis 1", 10),
        Task::new(2, "Zadanie 2", "Opis 2", 20),
    ])
}

#[test]
fn binding_renders_initial_state_on_construction() {
    let h = harness(seeded());

    assert_eq!(h.view.render_count(), 1);
    assert_eq!(h.view.list().ids(), vec![1, 2]);
    assert!(h.view.dialog().is_none());
}

#[test]
fn add_task_uses_defaults_and_notifies() {
    let mut h = harness(TaskStore::new());

    let id = h.binding.add_task();

    assert_eq!(id, 100);
    let list = h.view.list();
    let row = &list.rows[0];
    assert_eq!(row.title, "Nowe Zadanie");
    assert_eq!(row.description, "Opis nowego zadania");
    assert_eq!(row.due_date, 1_700_000_000_000);
    assert!(!row.is_completed);

    let notifications = h.notifier.drain();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "Dodano zadanie");
    assert_eq!(notifications[0].message, "Nowe Zadanie");
    assert_eq!(notifications[0].id, 100);
}

#[test]
fn rendered_list_follows_every_publish() {
    let mut h = harness(seeded());

    h.binding.add_task();
    h.binding.complete_task(1);
    h.binding.delete_task(2);

    assert_eq!(h.view.render_count(), 4);
    assert_eq!(h.view.list().ids(), vec![1, 100]);
    assert!(h.view.list().rows[0].is_completed);
}

#[test]
fn save_edit_overwrites_only_title_and_description() {
    let mut h = harness(seeded());

    h.binding.request_edit(1).unwrap();
    assert_eq!(h.view.dialog().map(|d| d.task_id()), Some(1));
    h.binding.edit_title("Updated").unwrap();
    h.binding.edit_description("Nowy opis").unwrap();
    h.binding.save_edit().unwrap();

    let tasks = h.binding.tasks();
    assert_eq!(tasks[0].id, 1);
    assert_eq!(tasks[0].title, "Updated");
    assert_eq!(tasks[0].description, "Nowy opis");
    assert_eq!(tasks[0].due_date, 10);
    assert_eq!(tasks[1], Task::new(2, "Zadanie 2", "Opis 2", 20));
    assert!(h.binding.dialog().is_none());
    assert!(h.view.dialog().is_none());

    let notifications = h.notifier.drain();
    assert_eq!(notifications[0].title, "Edytowano zadanie");
    assert_eq!(notifications[0].message, "Updated");
}

#[test]
fn save_edit_keeps_changes_made_while_dialog_was_open() {
    let mut h = harness(seeded());

    h.binding.request_edit(2).unwrap();
    h.binding.complete_task(2);
    h.binding.photo_captured(2, CaptureOutcome::Stored("photos/2.jpg".to_string()));
    h.binding.edit_title("Po edycji").unwrap();
    h.binding.save_edit().unwrap();

    let task = &h.binding.tasks()[1];
    assert_eq!(task.title, "Po edycji");
    assert!(task.is_completed);
    assert_eq!(task.photo_path.as_deref(), Some("photos/2.jpg"));
}

#[test]
fn cancel_edit_closes_dialog_without_mutation() {
    let mut h = harness(seeded());
    let renders_before = h.view.render_count();

    h.binding.request_edit(1).unwrap();
    h.binding.edit_title("discarded").unwrap();
    h.binding.cancel_edit().unwrap();

    assert_eq!(h.view.render_count(), renders_before);
    assert_eq!(h.binding.tasks()[0].title, "Zadanie 1");
    assert!(h.view.dialog().is_none());
    assert_eq!(h.notifier.pending(), 0);
}

#[test]
fn edit_of_unknown_task_is_rejected() {
    let mut h = harness(seeded());
    assert_eq!(h.binding.request_edit(9), Err(ViewError::TaskNotFound(9)));
    assert!(h.binding.dialog().is_none());
}

#[test]
fn delete_notifies_with_removed_title_only_when_present() {
    let mut h = harness(seeded());

    h.binding.delete_task(1);
    h.binding.delete_task(1);

    assert_eq!(h.binding.tasks().len(), 1);
    let notifications = h.notifier.drain();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "Usunięto zadanie");
    assert_eq!(notifications[0].message, "Zadanie 1");
    assert_eq!(notifications[0].id, 1);
}

#[test]
fn deleting_task_under_edit_closes_dialog() {
    let mut h = harness(seeded());

    h.binding.request_edit(2).unwrap();
    h.binding.delete_task(2);

    assert!(h.binding.dialog().is_none());
    assert_eq!(h.binding.save_edit(), Err(ViewError::NoDialogOpen));
}

#[test]
fn photo_flow_attaches_path_on_stored_outcome() {
    let mut h = harness(seeded());

    h.binding.request_photo(1).unwrap();
    let requested = h.photo.next_request().expect("capture should be requested");
    assert_eq!(requested, 1);
    assert_eq!(h.photo.next_request(), None);

    h.binding
        .photo_captured(requested, CaptureOutcome::Stored("new/photo/path".to_string()));

    assert_eq!(
        h.view.list().rows[0].photo_path.as_deref(),
        Some("new/photo/path")
    );
}

#[test]
fn photo_flow_ignores_no_photo_outcome() {
    let mut h = harness(seeded());
    let renders_before = h.view.render_count();

    h.binding.photo_captured(1, CaptureOutcome::NoPhoto);

    assert_eq!(h.view.render_count(), renders_before);
    assert!(h.binding.tasks()[0].photo_path.is_none());
}

#[test]
fn photo_request_for_unknown_task_is_rejected() {
    let mut h = harness(seeded());
    assert_eq!(h.binding.request_photo(5), Err(ViewError::TaskNotFound(5)));
    assert_eq!(h.photo.next_request(), None);
}

#[test]
fn extra_subscribers_see_the_same_publishes_as_the_view() {
    let mut h = harness(seeded());
    let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let id = h.binding.subscribe(move |tasks| sink.lock().unwrap().push(tasks.len()));

    h.binding.add_task();
    assert!(h.binding.unsubscribe(id));
    h.binding.delete_task(1);

    assert_eq!(*seen.lock().unwrap(), vec![2, 3]);
}

#[test]
fn binding_exposes_the_configured_notification_channel() {
    let mut config = BindingConfig::default();
    config.channel = NotificationChannel {
        id: "todo_updates".to_string(),
        name: "Todo updates".to_string(),
        description: "Changes to the task list".to_string(),
    };

    let binding: TestBinding = ViewBinding::new(
        TaskStore::new(),
        Arc::new(SnapshotView::new()),
        Collaborators {
            notifier: QueuedNotifier::new(),
            photo: QueuedPhotoCapture::new(),
            ids: SequentialIdGenerator::default(),
            clock: FixedClock(0),
        },
        config.clone(),
    )
    .expect("custom channel should validate");

    assert_eq!(binding.config().channel, config.channel);
    assert_eq!(binding.config().channel.id, "todo_updates");
}
