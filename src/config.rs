use crate::error::{BadEnvVarSnafu, RosterResult};
use dotenvy::var;
use snafu::ResultExt;
use std::{env::VarError, path::PathBuf, sync::Arc};

/// An unset variable is `None`, anything else wrong with it is still an error.
fn optional_env_var(
    name: &'static str,
    found: Result<String, dotenvy::Error>,
) -> RosterResult<Option<String>> {
    match found {
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => Ok(None),
        Err(source) => Err(source).context(BadEnvVarSnafu { name }),
    }
}

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    db_config: Arc<DbConfig>,
    import_csv: Option<PathBuf>,
}

impl RuntimeConfiguration {
    pub fn new() -> RosterResult<Self> {
        Ok(Self {
            db_config: Arc::new(DbConfig::new()?),
            import_csv: optional_env_var("ROSTER_IMPORT_CSV", var("ROSTER_IMPORT_CSV"))?
                .map(PathBuf::from),
        })
    }

    pub fn db_config(&self) -> Arc<DbConfig> {
        self.db_config.clone()
    }

    pub fn import_csv(&self) -> Option<&PathBuf> {
        self.import_csv.as_ref()
    }
}

#[derive(Debug)]
pub struct DbConfig {
    path: String,
}

impl DbConfig {
    pub fn new() -> RosterResult<Self> {
        let get_env_var = |name| var(name).context(BadEnvVarSnafu { name });

        Ok(Self {
            path: get_env_var("DB_PATH")?,
        })
    }

    //rwc so a fresh file gets created on first run
    pub fn get_db_path(&self) -> String {
        format!("sqlite://{}?mode=rwc", self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use std::ffi::OsString;

    #[test]
    fn unset_optional_var_is_none() {
        let found = Err(dotenvy::Error::EnvVar(VarError::NotPresent));
        assert!(matches!(optional_env_var("UNSET", found), Ok(None)));
    }

    #[test]
    fn set_optional_var_is_kept() {
        let found = Ok("students.csv".to_string());
        assert_eq!(
            optional_env_var("SET", found).unwrap().as_deref(),
            Some("students.csv")
        );
    }

    #[test]
    fn non_unicode_optional_var_is_an_error() {
        let found = Err(dotenvy::Error::EnvVar(VarError::NotUnicode(OsString::from(
            "students.csv",
        ))));
        assert!(matches!(
            optional_env_var("ROSTER_IMPORT_CSV", found),
            Err(RosterError::BadEnvVar {
                name: "ROSTER_IMPORT_CSV",
                ..
            })
        ));
    }
}
