//! Loading of externally compiled contract bytecode.
//!
//! The contracts are built outside this repository; the scripts only read
//! the compiler output. Two artifact shapes are accepted: a flat
//! `{"bytecode": "0x…"}` file, and the solc-style nesting
//! `{"<Name>": {"evm": {"bytecode": {"object": "…"}}}}` (with or without
//! the leading contract-name level).

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::Error;

/// Directory of `<Name>.json` artifact files.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Read the deployable bytecode for the contract `name`.
    pub fn bytecode(&self, name: &str) -> Result<Vec<u8>, Error> {
        let path = self.dir.join(format!("{name}.json"));
        let raw = fs::read_to_string(&path).map_err(|e| bad(&path, e))?;
        let value: Value = serde_json::from_str(&raw).map_err(|e| bad(&path, e))?;

        let hex_str = extract_bytecode(&value, name).ok_or_else(|| Error::BadArtifact {
            path: path.display().to_string(),
            reason: "no bytecode field found".into(),
        })?;

        let bytecode = hex::decode(hex_str.trim_start_matches("0x")).map_err(|e| bad(&path, e))?;
        tracing::debug!(path = %path.display(), size = bytecode.len(), "loaded contract bytecode");
        Ok(bytecode)
    }
}

fn bad(path: &Path, reason: impl ToString) -> Error {
    Error::BadArtifact {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

fn extract_bytecode<'a>(value: &'a Value, name: &str) -> Option<&'a str> {
    value
        .get("bytecode")
        .and_then(Value::as_str)
        .or_else(|| value.pointer("/evm/bytecode/object").and_then(Value::as_str))
        .or_else(|| {
            value
                .pointer(&format!("/{name}/evm/bytecode/object"))
                .and_then(Value::as_str)
        })
}
