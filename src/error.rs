use thiserror::Error;

/// Main error type for the minvid library
#[derive(Error, Debug)]
pub enum MinvidError {
    #[error("Range error: {0}")]
    Range(#[from] RangeError),

    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    #[error("Index error: {0}")]
    Index(#[from] IndexError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Dimension and construction bound violations
#[derive(Error, Debug)]
pub enum RangeError {
    #[error("dimension {value} exceeds the maximum of {max}")]
    DimensionTooLarge { value: u32, max: u32 },
}

/// Structural mismatches in frame or video data
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("frame data is {actual} bytes, expected {expected} for {width}x{height}")]
    FrameLengthMismatch {
        actual: usize,
        expected: usize,
        width: u32,
        height: u32,
    },

    #[error("frame is {frame_width}x{frame_height}, video is {video_width}x{video_height}")]
    FrameSizeMismatch {
        frame_width: u32,
        frame_height: u32,
        video_width: u32,
        video_height: u32,
    },

    #[error("buffer is {actual} bytes, shorter than the {header}-byte header")]
    BufferTooShort { actual: usize, header: usize },

    #[error("payload of {payload} bytes is not a whole number of {frame_size}-byte frames")]
    TruncatedPayload { payload: usize, frame_size: usize },

    #[error("zero-area video cannot carry {payload} payload bytes")]
    ZeroAreaPayload { payload: usize },
}

/// Out-of-range pixel or frame access
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("pixel ({x}, {y}) is outside a {width}x{height} frame")]
    PixelOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("frame index {index} is out of range for a video of {count} frames")]
    FrameOutOfBounds { index: usize, count: usize },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path}")]
    ParseFailed { path: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

/// Convenience type alias for Results using MinvidError
pub type Result<T> = std::result::Result<T, MinvidError>;
