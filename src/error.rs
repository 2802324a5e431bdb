use snafu::Snafu;
use std::path::PathBuf;

pub type RosterResult<T> = Result<T, RosterError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RosterError {
    #[snafu(display("Error opening database"))]
    OpenDatabase { source: sqlx::Error },
    #[snafu(display("Error closing database"))]
    CloseDatabase { source: sqlx::Error },
    #[snafu(display("Error making SQL query"))]
    MakeQuery { source: sqlx::Error },
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to open CSV file {}", path.display()))]
    ReadCsvFile {
        source: std::io::Error,
        path: PathBuf,
    },
    #[snafu(display("Error with CSVs"))]
    Csv { source: csv::Error },
    #[snafu(display("Unable to parse date {:?}", original))]
    ParseDate {
        source: time::error::Parse,
        original: String,
    },
}
