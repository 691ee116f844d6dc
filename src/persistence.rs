// File: src/persistence.rs
use crate::core::cmudict::CmuDict;
use crate::error::Result;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes a compiled dictionary snapshot. The file is replaced atomically, so a
/// reader never observes a half-written snapshot.
pub fn save_to_disk(dict: &CmuDict, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let mut writer = BufWriter::new(temp_file.as_file());
    bincode::serialize_into(&mut writer, dict)?;
    writer.flush()?;
    drop(writer);

    temp_file.persist(path).map_err(|e| e.error)?;
    log::debug!("wrote dictionary snapshot ({} words) to {}", dict.len(), path.display());
    Ok(())
}

pub fn load_from_disk(path: &Path) -> Result<CmuDict> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let dict: CmuDict = bincode::deserialize_from(reader)?;
    log::debug!("loaded dictionary snapshot ({} words) from {}", dict.len(), path.display());
    Ok(dict)
}
