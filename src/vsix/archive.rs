//! Streaming extraction of selected entries from a zip archive.
//!
//! This module handles the entry-by-entry scan of a VSIX package,
//! delegating the actual zip decoding to [`async_zip`].
//!
//! ## Extraction Strategy
//!
//! The archive is opened as a forward-only stream and entries are
//! visited one at a time:
//! 1. Read the next local file header, if any.
//! 2. Lowercase the entry name and test it against the caller's filter.
//! 3. On a match, buffer the full decompressed content; otherwise skip
//!    the content without decompressing it.
//!
//! At most one entry's content is in flight at any point, so memory
//! usage is bounded by the largest selected entry. Any failure aborts
//! the whole scan; buffered entries from earlier in the scan are
//! discarded along with the result map.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use async_zip::base::read::stream::ZipFileReader;
use tokio::fs::File;
use tokio::io::BufReader;
use tracing::debug;

/// Scan a zip archive and buffer the content of every entry whose
/// lowercased name passes `filter`.
///
/// Entry names are lowercased once, and the lowercased form is used both
/// for filtering and as the key in the returned map. Original-case names
/// are not retained.
///
/// # Arguments
///
/// * `path` - Filesystem path of the zip archive
/// * `filter` - Predicate over lowercased entry names
///
/// # Returns
///
/// A map from lowercased entry name to fully-buffered decompressed
/// content, containing exactly the entries accepted by the filter.
///
/// # Errors
///
/// Returns an error if the archive cannot be opened, if an entry cannot
/// be decoded, or if a selected entry's content stream fails. There is
/// no partial-success mode: the extraction either fully succeeds or
/// fully fails, and the file handle is released on every exit path.
pub async fn read_zip<F>(path: &Path, filter: F) -> Result<HashMap<String, Vec<u8>>>
where
    F: Fn(&str) -> bool,
{
    let file = File::open(path)
        .await
        .with_context(|| format!("failed to open archive {}", path.display()))?;

    let mut zip = ZipFileReader::with_tokio(BufReader::new(file));
    let mut contents = HashMap::new();

    loop {
        // Reaching the central directory means every entry has been visited
        let mut reading = match zip.next_with_entry().await? {
            Some(reading) => reading,
            None => break,
        };

        let name = reading.reader().entry().filename().as_str()?.to_lowercase();

        if filter(&name) {
            let mut buf = Vec::new();
            reading.reader_mut().read_to_end_checked(&mut buf).await?;
            debug!(entry = %name, bytes = buf.len(), "buffered archive entry");
            contents.insert(name, buf);
            zip = reading.done().await?;
        } else {
            debug!(entry = %name, "skipped archive entry");
            zip = reading.skip().await?;
        }
    }

    Ok(contents)
}
