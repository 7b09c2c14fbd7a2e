use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::{
    error::ExportError,
    types::{ExportDocument, Playlist},
};

/// Encodes the document as JSON indented by four spaces.
///
/// Field order follows the struct declarations (`playlist`, `songs`; each
/// song `name`, `artist`) and non-ASCII characters are written verbatim, so
/// the same document always encodes to the same bytes.
pub fn encode_document(document: &ExportDocument) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    document.serialize(&mut ser)?;
    Ok(buf)
}

/// Writes the playlist to `path` as an [`ExportDocument`], replacing any
/// existing file.
///
/// # Errors
///
/// - [`ExportError::Encode`] if serialization fails
/// - [`ExportError::Write`] if the file cannot be written
pub async fn export_playlist(playlist: &Playlist, path: &Path) -> Result<(), ExportError> {
    let document = ExportDocument::from(playlist);
    let json = encode_document(&document)?;

    async_fs::write(path, json)
        .await
        .map_err(|source| ExportError::Write {
            path: path.display().to_string(),
            source,
        })
}
