//! Line-oriented shell over the to-do core.
//!
//! # Responsibility
//! - Drive the same binding the app uses from stdin, for local checks.
//! - Print the re-rendered list after every publish.

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use todo_core::{
    init_logging, BindingConfig, CaptureOutcome, Collaborators, EditDialog, ListView, LogNotifier,
    Notifier, PhotoCapture, RuntimeConfig, SequentialIdGenerator, SystemClock, TaskId,
    TaskListView, TaskNotification, TaskStore, ViewBinding,
};

const HELP: &str = "commands: list | add | edit <id> | title <text> | desc <text> | save | cancel \
| done <id> | rm <id> | photo <id> <path> | help | quit";

struct PrintView;

impl TaskListView for PrintView {
    fn show_list(&self, list: &ListView) {
        print_list(list);
    }

    fn show_edit_dialog(&self, dialog: Option<&EditDialog>) {
        match dialog {
            Some(dialog) => println!(
                "[edit #{}] title={:?} desc={:?}",
                dialog.task_id(),
                dialog.title(),
                dialog.description()
            ),
            None => println!("[edit closed]"),
        }
    }
}

/// Prints notifications; mirrors them into the file log once it is active.
struct PrintNotifier {
    log: Option<LogNotifier>,
}

impl Notifier for PrintNotifier {
    fn notify(&self, notification: &TaskNotification) {
        println!(
            "(notify #{}) {}: {}",
            notification.id, notification.title, notification.message
        );
        if let Some(log) = &self.log {
            log.notify(notification);
        }
    }
}

// Paths arrive with the `photo` command itself, so requests are just logged.
struct InlinePhoto;

impl PhotoCapture for InlinePhoto {
    fn request_capture(&self, task_id: TaskId) {
        log::debug!("event=photo_request module=cli task_id={task_id}");
    }
}

type CliBinding =
    ViewBinding<PrintView, PrintNotifier, InlinePhoto, SequentialIdGenerator, SystemClock>;

fn main() {
    let file_logging = match RuntimeConfig::from_env() {
        Ok(RuntimeConfig {
            log_level,
            log_dir: Some(dir),
        }) => match init_logging(&log_level, &dir.to_string_lossy()) {
            Ok(()) => true,
            Err(err) => {
                eprintln!("logging disabled: {err}");
                false
            }
        },
        Ok(_) => false,
        Err(err) => {
            eprintln!("logging disabled: {err}");
            false
        }
    };

    let mut binding: CliBinding = match ViewBinding::new(
        TaskStore::new(),
        Arc::new(PrintView),
        Collaborators {
            notifier: PrintNotifier {
                log: file_logging.then_some(LogNotifier),
            },
            photo: InlinePhoto,
            ids: SequentialIdGenerator::default(),
            clock: SystemClock,
        },
        BindingConfig::default(),
    ) {
        Ok(binding) => binding,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            std::process::exit(2);
        }
    };

    println!("todo_core version={}", todo_core::core_version());
    println!("{HELP}");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        if !run_command(&mut binding, line.trim()) {
            break;
        }
        if let Err(err) = io::stdout().flush() {
            eprintln!("stdout closed: {err}");
            break;
        }
    }
}

/// Returns `false` when the shell should exit.
fn run_command(binding: &mut CliBinding, line: &str) -> bool {
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    let result = match command {
        "" => Ok(()),
        "quit" | "exit" => return false,
        "help" => {
            println!("{HELP}");
            Ok(())
        }
        "list" => {
            print_list(&todo_core::render_task_list(binding.tasks()));
            Ok(())
        }
        "add" => {
            binding.add_task();
            Ok(())
        }
        "edit" => {
            parse_id(rest).and_then(|id| binding.request_edit(id).map_err(|e| e.to_string()))
        }
        "title" => binding.edit_title(rest).map_err(|e| e.to_string()),
        "desc" => binding.edit_description(rest).map_err(|e| e.to_string()),
        "save" => binding.save_edit().map_err(|e| e.to_string()),
        "cancel" => binding.cancel_edit().map_err(|e| e.to_string()),
        "done" => parse_id(rest).map(|id| binding.complete_task(id)),
        "rm" => parse_id(rest).map(|id| binding.delete_task(id)),
        "photo" => {
            let (id, path) = rest.split_once(' ').unwrap_or((rest, ""));
            parse_id(id).and_then(|id| {
                binding.request_photo(id).map_err(|e| e.to_string())?;
                let path = path.trim();
                let outcome = if path.is_empty() {
                    CaptureOutcome::NoPhoto
                } else {
                    CaptureOutcome::Stored(path.to_string())
                };
                binding.photo_captured(id, outcome);
                Ok(())
            })
        }
        other => Err(format!("unknown command `{other}`; try `help`")),
    };

    if let Err(message) = result {
        println!("error: {message}");
    }
    true
}

fn parse_id(value: &str) -> Result<TaskId, String> {
    value
        .trim()
        .parse::<TaskId>()
        .map_err(|_| format!("expected a numeric task id, got `{value}`"))
}

fn print_list(list: &ListView) {
    if list.is_empty() {
        println!("(no tasks)");
        return;
    }
    for row in &list.rows {
        let mark = if row.is_completed { "x" } else { " " };
        let photo = row
            .photo_path
            .as_deref()
            .map(|path| format!(" [photo: {path}]"))
            .unwrap_or_default();
        println!("[{mark}] #{} {} - {}{photo}", row.id, row.title, row.description);
    }
}
