use std::thread;
use std::time::Duration;

use crossbeam::channel::{RecvTimeoutError, bounded};
use image::RgbaImage;
use tracing::warn;

use crate::error::AtlasError;

pub fn decode_rgba(bytes: &[u8]) -> Result<RgbaImage, AtlasError> {
    let decoded = image::load_from_memory(bytes).map_err(AtlasError::InvalidImage)?;
    Ok(decoded.to_rgba8())
}

/// Decode untrusted bytes on a worker thread so a pathological file cannot
/// hang the calling flow. On timeout the worker is abandoned; its result is
/// dropped with the channel.
pub fn decode_rgba_with_timeout(
    bytes: Vec<u8>,
    timeout: Duration,
) -> Result<RgbaImage, AtlasError> {
    let (result_tx, result_rx) = bounded(1);
    thread::spawn(move || {
        let _ = result_tx.send(decode_rgba(&bytes));
    });
    match result_rx.recv_timeout(timeout) {
        Ok(result) => result,
        Err(RecvTimeoutError::Timeout) => {
            warn!(?timeout, "image decode timed out");
            Err(AtlasError::DecodeTimeout(timeout))
        }
        Err(RecvTimeoutError::Disconnected) => Err(AtlasError::DecodeTimeout(timeout)),
    }
}
