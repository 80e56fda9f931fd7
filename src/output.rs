use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, instrument};

use crate::error::{OddsError, Result};
use crate::model::FlatRecord;

/// Write `records` as a JSON array to `path`, replacing any previous snapshot.
#[instrument(skip_all, fields(path = %path.display(), count = records.len()))]
pub fn write_records(path: &Path, records: &[FlatRecord]) -> Result<()> {
    let io_err = |source| OddsError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush().map_err(io_err)?;

    debug!("wrote odds snapshot");
    Ok(())
}
