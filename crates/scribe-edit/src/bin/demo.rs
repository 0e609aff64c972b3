//! Scripted edit session against in-memory stores.
//!
//! Creates a note from the command line, turns it into a checklist, checks
//! the first item, saves and exits, then prints the emitted events and the
//! stored note as JSON.
//!
//! Usage: `scribe-edit-demo [TITLE] [LINE]...`
//!
//! Environment variables:
//!   LOG_FORMAT  - "json" or "text" (default: "text")
//!   LOG_FILE    - path to log file (optional, enables file logging)
//!   RUST_LOG    - standard env filter (default: "scribe_edit=info")

use std::sync::Arc;

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scribe_core::mock::{MockAlarmManager, MockNoteStore};
use scribe_core::NO_ID;
use scribe_edit::{EditAction, EditConfig, EditRunner, EditSession};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _log_guard = init_tracing();

    let mut args = std::env::args().skip(1);
    let title = args.next().unwrap_or_else(|| "Groceries".to_string());
    let lines: Vec<String> = args.collect();
    let content = if lines.is_empty() {
        "milk\neggs\nflour".to_string()
    } else {
        lines.join("\n")
    };

    let store = Arc::new(MockNoteStore::new());
    let alarms = Arc::new(MockAlarmManager::new());
    let (session, mut events) = EditSession::with_store(store.clone(), alarms, EditConfig::from_env());
    let handle = EditRunner::spawn(session);

    for action in [
        EditAction::Start {
            note_id: NO_ID,
            label_id: NO_ID,
        },
        EditAction::TitleChanged(title),
        EditAction::ContentChanged(content),
        EditAction::ToggleNoteType,
        EditAction::ItemChecked {
            pos: 1,
            checked: true,
        },
        EditAction::Save,
        EditAction::Exit,
    ] {
        handle.dispatch(action).await?;
    }
    let session = handle.join().await?;

    while let Ok(event) = events.try_recv() {
        println!("{}", serde_json::to_string(&event)?);
    }

    let note_id = session.note().id;
    match store.note(note_id) {
        Some(note) => println!("{}", serde_json::to_string_pretty(&note)?),
        None => info!(note_id, "Note was discarded"),
    }
    Ok(())
}

fn init_tracing() -> Option<WorkerGuard> {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let log_file = std::env::var("LOG_FILE").ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "scribe_edit=info".into());
    let registry = tracing_subscriber::registry().with(env_filter);

    match log_file {
        Some(path) => {
            let path = std::path::Path::new(&path);
            let file_dir = path.parent().unwrap_or(std::path::Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|f| f.to_str())
                .unwrap_or("scribe-edit.log");
            let file_appender = tracing_appender::rolling::daily(file_dir, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            if log_format == "json" {
                registry
                    .with(tracing_subscriber::fmt::layer().json().with_writer(non_blocking))
                    .init();
            } else {
                registry
                    .with(
                        tracing_subscriber::fmt::layer()
                            .with_writer(non_blocking)
                            .with_ansi(false),
                    )
                    .init();
            }
            Some(guard)
        }
        None => {
            if log_format == "json" {
                registry
                    .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                    .init();
            } else {
                registry
                    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                    .init();
            }
            None
        }
    }
}
