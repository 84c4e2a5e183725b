//! Conversions between container frames and image files.
//!
//! This is the bridge the CLI uses: frames map losslessly to RGB8 image
//! buffers, which the `image` crate reads and writes as PNG/JPEG files.

use std::fs;
use std::path::{Path, PathBuf};

use image::{imageops::FilterType, ImageBuffer, RgbImage};
use tracing::debug;

use crate::error::{FormatError, Result};
use crate::format::{Frame, Video};

/// Convert a frame into an owned RGB image buffer.
pub fn frame_to_image(frame: &Frame) -> Result<RgbImage> {
    let (width, height) = (frame.width(), frame.height());

    ImageBuffer::from_raw(width, height, frame.data().to_vec()).ok_or_else(|| {
        FormatError::FrameLengthMismatch {
            actual: frame.data().len(),
            expected: width as usize * height as usize * 3,
            width,
            height,
        }
        .into()
    })
}

/// Convert an RGB image into a frame.
pub fn frame_from_image(image: &RgbImage) -> Result<Frame> {
    Frame::from_data(image.width(), image.height(), image.as_raw().clone())
}

/// Resample a frame to new dimensions with Lanczos3 filtering.
pub fn resize_frame(frame: &Frame, width: u32, height: u32) -> Result<Frame> {
    let resized = image::imageops::resize(&frame_to_image(frame)?, width, height, FilterType::Lanczos3);
    frame_from_image(&resized)
}

/// Load a frame from an image file.
///
/// With a `target` size, the image is resampled before conversion, so
/// sources larger than the maximum dimension still load as long as the
/// target fits.
pub fn read_frame<P: AsRef<Path>>(path: P, target: Option<(u32, u32)>) -> Result<Frame> {
    let mut image = image::open(path.as_ref())?.to_rgb8();

    if let Some((width, height)) = target {
        if (image.width(), image.height()) != (width, height) {
            image = image::imageops::resize(&image, width, height, FilterType::Lanczos3);
        }
    }

    frame_from_image(&image)
}

/// Write a frame to a PNG file.
pub fn write_frame_png<P: AsRef<Path>>(frame: &Frame, path: P) -> Result<()> {
    frame_to_image(frame)?.save(path.as_ref())?;
    Ok(())
}

/// Build a video from image files, in the order given.
///
/// With no `target`, the first image fixes the dimensions and any later
/// mismatch surfaces as a format error; an empty input list yields an empty
/// zero-area video.
pub fn video_from_images(paths: &[PathBuf], target: Option<(u32, u32)>) -> Result<Video> {
    let mut video: Option<Video> = None;

    for path in paths {
        debug!("Loading frame from {}", path.display());
        let frame = read_frame(path, target)?;

        if video.is_none() {
            video = Some(Video::new(frame.width(), frame.height())?);
        }
        if let Some(video) = video.as_mut() {
            video.add_frame(&frame)?;
        }
    }

    match video {
        Some(video) => Ok(video),
        None => {
            let (width, height) = target.unwrap_or((0, 0));
            Video::new(width, height)
        }
    }
}

/// Write every frame of a video to `dir` as `frame_NNNN.png`.
pub fn extract_frames<P: AsRef<Path>>(video: &Video, dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(video.frame_count());
    for (i, frame) in video.frames().enumerate() {
        let path = dir.join(format!("frame_{i:04}.png"));
        write_frame_png(&frame, &path)?;
        written.push(path);
    }

    Ok(written)
}

/// List the image files in a directory in lexicographic order.
pub fn collect_image_paths<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for entry in fs::read_dir(dir.as_ref())? {
        let path = entry?.path();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        if matches!(ext.as_deref(), Some("png" | "jpg" | "jpeg")) {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}
