//! Per-file checks.

use std::{fmt, fs, io, path::Path, str::Utf8Error};

use serde::Serialize;
use tracing::{debug, info};

use crate::{config::CheckConfig, error::SyntaxError, string::JsonString, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pass,
    Fail,
}

/// Why a file did not pass. The `Display` text is the report message.
#[derive(Debug, thiserror::Error)]
pub enum CheckFailure {
    #[error("File not found")]
    NotFound,
    #[error("Error reading file: {0}")]
    Io(#[from] io::Error),
    #[error("Error reading file: {0}")]
    Decode(#[from] Utf8Error),
    #[error("JSON syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("Root element must be a JSON object")]
    RootNotObject,
    #[error("Duplicate keys found: {}", KeyList(.0))]
    DuplicateKeys(Vec<JsonString>),
}

/// Renders keys as `["a", "b"]`.
struct KeyList<'a>(&'a [JsonString]);

impl fmt::Display for KeyList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, key) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}")?;
        }
        write!(f, "]")
    }
}

/// The outcome of checking one configured file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileCheckResult {
    #[serde(rename = "file")]
    file_name: String,
    status: Status,
    message: String,
}

pub const PASS_MESSAGE: &str = "Valid JSON, no duplicates";

impl FileCheckResult {
    pub fn pass(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            status: Status::Pass,
            message: PASS_MESSAGE.to_owned(),
        }
    }

    pub fn fail(file_name: impl Into<String>, failure: &CheckFailure) -> Self {
        Self {
            file_name: file_name.into(),
            status: Status::Fail,
            message: failure.to_string(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn passed(&self) -> bool {
        self.status == Status::Pass
    }
}

/// Checks an in-memory document: UTF-8, syntax, object root and duplicate
/// top-level keys, in that order.
pub fn check_document(bytes: &[u8]) -> Result<(), CheckFailure> {
    std::str::from_utf8(bytes)?;
    let value = Value::from_json(bytes)?;
    let Some(object) = value.as_object() else {
        debug!(root = value.type_name(), "root is not an object");
        return Err(CheckFailure::RootNotObject);
    };
    let duplicates = object.duplicate_keys();
    if !duplicates.is_empty() {
        return Err(CheckFailure::DuplicateKeys(
            duplicates.into_iter().cloned().collect(),
        ));
    }
    Ok(())
}

fn inspect(path: &Path) -> Result<(), CheckFailure> {
    if !path.is_file() {
        return Err(CheckFailure::NotFound);
    }
    let bytes = fs::read(path)?;
    debug!(path = %path.display(), len = bytes.len(), "read file");
    check_document(&bytes)
}

/// Checks the file at `path`, reporting it under `file_name`.
///
/// Never fails: every problem is turned into a failing result.
pub fn check_file(file_name: &str, path: &Path) -> FileCheckResult {
    match inspect(path) {
        Ok(()) => {
            debug!(file = file_name, "passed");
            FileCheckResult::pass(file_name)
        }
        Err(failure) => {
            info!(file = file_name, %failure, "check failed");
            FileCheckResult::fail(file_name, &failure)
        }
    }
}

/// Runs the checks for every configured file.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: CheckConfig,
}

impl Validator {
    pub fn new(config: CheckConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// One result per configured file, in configured order.
    pub fn run(&self) -> Vec<FileCheckResult> {
        self.config
            .files
            .iter()
            .map(|name| check_file(name, &self.config.path_of(name)))
            .collect()
    }
}
