#![warn(clippy::pedantic, clippy::all, clippy::nursery)]

use roster::{
    Table,
    config::RuntimeConfiguration,
    error::ReadCsvFileSnafu,
    import::{import_students, read_students_csv},
    state::RosterState,
};
use snafu::ResultExt;
use std::fs::File;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[macro_use]
extern crate tracing;

#[tokio::main]
async fn main() {
    let dotenv_outcome = dotenvy::dotenv();

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .finish(),
    )
    .expect("unable to set tracing subscriber");

    info!("`tracing` online");
    if let Err(e) = dotenv_outcome {
        warn!(?e, "No .env loaded, relying on the process environment");
    }

    let config = RuntimeConfiguration::new().expect("unable to create config");
    let mut state = RosterState::new(&config)
        .await
        .expect("unable to create state");

    {
        let mut students = state.students();
        if students.create_table().await {
            info!(table = students.table_name(), "Created table");
        } else {
            info!(table = students.table_name(), "Table not created, assuming it already exists");
        }

        if let Some(path) = config.import_csv() {
            let file = File::open(path)
                .context(ReadCsvFileSnafu { path: path.clone() })
                .expect("unable to open import CSV");
            let (to_import, syntax_errors) = read_students_csv(file);
            for e in &syntax_errors {
                warn!(?e, "Skipping bad CSV row");
            }

            let inserted = import_students(&mut students, &to_import).await;
            info!(inserted, read = to_import.len(), ?path, "Imported students");
        }

        for student in students.find_all().await.expect("unable to list students") {
            info!(?student, "Stored student");
        }
    }

    if let Err(e) = state.sensible_shutdown().await {
        error!(?e, "Error sensibly shutting down");
    }
}
