use std::{fmt::Debug, path::PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Reads the whole file and hands its contents to `parse`, naming the file and
/// the target type on failure.
fn read_with<T>(
    path: PathBuf,
    format: &str,
    parse: impl FnOnce(&str) -> anyhow::Result<T>,
) -> anyhow::Result<T> {
    fs_err::read_to_string(&path)
        .map_err(anyhow::Error::new)
        .and_then(|contents| parse(&contents))
        .with_context(|| {
            format!(
                "Could not read {path:?} as {format} {}",
                std::any::type_name::<T>()
            )
        })
}

pub fn read_json<P: Into<PathBuf> + Debug, T: for<'de> Deserialize<'de>>(
    path: P,
) -> anyhow::Result<T> {
    read_with(path.into(), "JSON", |s| Ok(serde_json::from_str(s)?))
}

pub fn read_toml<P: Into<PathBuf> + Debug, T: for<'de> Deserialize<'de>>(
    path: P,
) -> anyhow::Result<T> {
    read_with(path.into(), "TOML", |s| Ok(toml::from_str(s)?))
}

/// Reads `path` as TOML or JSON depending on its extension; anything else is treated as TOML.
pub fn read_config<P: Into<PathBuf> + Debug, T: for<'de> Deserialize<'de>>(
    path: P,
) -> anyhow::Result<T> {
    let path = path.into();
    match path.extension().and_then(|x| x.to_str()) {
        Some("json") => read_json(path),
        _ => read_toml(path),
    }
}
