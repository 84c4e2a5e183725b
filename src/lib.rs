//! # minvid
//!
//! A minimal uncompressed raster-video container: a byte buffer encodes a
//! fixed frame width and height followed by a sequential run of raw RGB
//! frames. Widths and heights are stored compactly as eight bytes whose sum
//! equals the value.
//!
//! ## Quick Start
//!
//! ```rust
//! use minvid::{Frame, Video};
//!
//! # fn main() -> minvid::Result<()> {
//! let mut video = Video::new(2, 1)?;
//!
//! let mut frame = Frame::new(2, 1)?;
//! frame.set_pixel(0, 0, [255, 0, 0])?;
//! frame.set_pixel(1, 0, [0, 255, 0])?;
//! video.add_frame(&frame)?;
//!
//! let bytes = video.encode();
//! assert_eq!(bytes.len(), 22);
//!
//! let decoded = Video::decode(&bytes)?;
//! assert_eq!(decoded.frame_count(), 1);
//! assert_eq!(decoded.get_frame(0)?.get_pixel(1, 0)?, [0, 255, 0]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//!
//! - [`format`] - The container format: dimension codec, [`Frame`], [`Video`]
//! - [`convert`] - Conversions between frames and image files
//! - [`config`] - Configuration for the bundled CLI
//!
//! All operations are synchronous, pure in-memory computation; callers
//! serialize mutating access to a given [`Video`].

pub mod config;
pub mod convert;
pub mod error;
pub mod format;

// Re-export commonly used types for convenience
pub use crate::{
    config::Config,
    error::{MinvidError, Result},
    format::{Frame, Video},
};
