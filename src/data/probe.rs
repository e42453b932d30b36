/// Image dimension probe
///
/// Reads the natural width/height of a screenshot without decoding the
/// whole image, so the lightbox can pick portrait framing after the file
/// is available. Runs on the blocking pool because header parsing is
/// file IO.
///
/// A failed probe is not an error condition for the lightbox — the caller
/// simply never switches to portrait framing.

use std::path::PathBuf;

use tokio::task;

/// Read the natural pixel dimensions of an image file.
pub async fn probe_dimensions(path: PathBuf) -> Result<(u32, u32), String> {
    task::spawn_blocking(move || {
        image::image_dimensions(&path)
            .map_err(|e| format!("failed to read header of {}: {}", path.display(), e))
    })
    .await
    .map_err(|e| format!("task join error: {}", e))?
}
