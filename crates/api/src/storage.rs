//! Media file storage for multipart uploads.
//!
//! Uploaded files land under the configured media directory, namespaced per
//! resource (`lawyer_documents/`, `case_documents/`). Stored names carry a
//! UUID prefix so repeated uploads of the same filename never collide; the
//! relative path is what gets persisted in the database.

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Persist uploaded file bytes under `media_dir/subdir/`, returning the
/// relative path to store in the database.
pub async fn save_upload(
    media_dir: &Path,
    subdir: &str,
    original_name: &str,
    bytes: &[u8],
) -> AppResult<String> {
    let file_name = sanitize_file_name(original_name);
    let stored_name = format!("{}_{file_name}", Uuid::new_v4());

    let dir = media_dir.join(subdir);
    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to create media dir: {e}")))?;

    let path = dir.join(&stored_name);
    tokio::fs::write(&path, bytes)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to write upload: {e}")))?;

    Ok(PathBuf::from(subdir)
        .join(stored_name)
        .to_string_lossy()
        .into_owned())
}

/// Strip path components and suspicious characters from a client-supplied
/// filename. Falls back to `"upload"` when nothing usable remains.
fn sanitize_file_name(name: &str) -> String {
    let base = Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload");

    let cleaned: String = base
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();

    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}
