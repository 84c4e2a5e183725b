use tracing::debug;

use crate::error::{FormatError, IndexError, Result};

use super::dimension::{decode_dimension, split};
use super::frame::Frame;
use super::{check_dimension, frame_payload_len, DIMENSION_BYTES, HEADER_BYTES};

/// An ordered run of same-sized frames behind a width/height header.
///
/// The 16 header bytes are derived from `width`/`height` and only
/// materialized by [`encode`](Video::encode); internally the video holds the
/// concatenated frame payloads. The payload length is always a whole
/// multiple of `width * height * 3`, so the buffer stays the single source
/// of truth for the frame count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    width: u32,
    height: u32,
    payload: Vec<u8>,
}

impl Video {
    /// Create an empty video with the given frame dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        check_dimension(width)?;
        check_dimension(height)?;

        Ok(Self {
            width,
            height,
            payload: Vec::new(),
        })
    }

    /// Decode a video from its byte-buffer encoding.
    ///
    /// The buffer must be at least as long as the header, and the bytes after
    /// it must form a whole number of frames; anything else is a format
    /// error. No partial decode: an invalid buffer yields no video.
    pub fn decode(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_BYTES {
            return Err(FormatError::BufferTooShort {
                actual: data.len(),
                header: HEADER_BYTES,
            }
            .into());
        }

        let mut dim = [0u8; DIMENSION_BYTES];
        dim.copy_from_slice(&data[..DIMENSION_BYTES]);
        let width = decode_dimension(&dim);
        dim.copy_from_slice(&data[DIMENSION_BYTES..HEADER_BYTES]);
        let height = decode_dimension(&dim);

        let payload = &data[HEADER_BYTES..];
        let frame_size = frame_payload_len(width, height);

        if frame_size == 0 {
            if !payload.is_empty() {
                return Err(FormatError::ZeroAreaPayload {
                    payload: payload.len(),
                }
                .into());
            }
        } else if payload.len() % frame_size != 0 {
            return Err(FormatError::TruncatedPayload {
                payload: payload.len(),
                frame_size,
            }
            .into());
        }

        let video = Self {
            width,
            height,
            payload: payload.to_vec(),
        };

        debug!(
            "Decoded {}x{} video with {} frames",
            width,
            height,
            video.frame_count()
        );

        Ok(video)
    }

    /// Append a frame to the video.
    ///
    /// The frame must match the video's dimensions; its own length invariant
    /// already guarantees the payload size.
    pub fn add_frame(&mut self, frame: &Frame) -> Result<()> {
        if frame.width() != self.width || frame.height() != self.height {
            return Err(FormatError::FrameSizeMismatch {
                frame_width: frame.width(),
                frame_height: frame.height(),
                video_width: self.width,
                video_height: self.height,
            }
            .into());
        }

        self.payload.extend_from_slice(frame.data());
        Ok(())
    }

    /// Copy out the frame at `index`.
    pub fn get_frame(&self, index: usize) -> Result<Frame> {
        let count = self.frame_count();
        if index >= count {
            return Err(IndexError::FrameOutOfBounds { index, count }.into());
        }

        let frame_size = frame_payload_len(self.width, self.height);
        let begin = index * frame_size;
        let data = self.payload[begin..begin + frame_size].to_vec();

        Ok(Frame::from_parts(self.width, self.height, data))
    }

    /// Number of frames currently in the video.
    pub fn frame_count(&self) -> usize {
        let frame_size = frame_payload_len(self.width, self.height);
        if frame_size == 0 {
            0
        } else {
            self.payload.len() / frame_size
        }
    }

    /// Iterate over copies of the frames in append order.
    pub fn frames(&self) -> impl Iterator<Item = Frame> + '_ {
        // Zero-area videos have an empty payload, so the chunk size floor
        // only prevents a zero-sized chunk request.
        let frame_size = frame_payload_len(self.width, self.height).max(1);

        self.payload
            .chunks_exact(frame_size)
            .map(move |chunk| Frame::from_parts(self.width, self.height, chunk.to_vec()))
    }

    /// Get the video width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the video height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Serialize the video: 16 header bytes, then the frame payloads in
    /// append order.
    pub fn encode(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(HEADER_BYTES + self.payload.len());

        // Dimensions are constructor-validated, so splitting cannot fail.
        data.extend_from_slice(&split(self.width));
        data.extend_from_slice(&split(self.height));
        data.extend_from_slice(&self.payload);

        data
    }
}

#[cfg(test)]
mod tests {
    use crate::error::MinvidError;
    use crate::format::MAX_DIMENSION;

    use super::*;

    fn filled_frame(width: u32, height: u32, color: [u8; 3]) -> Frame {
        let mut frame = Frame::new(width, height).unwrap();
        for y in 0..height {
            for x in 0..width {
                frame.set_pixel(x, y, color).unwrap();
            }
        }
        frame
    }

    #[test]
    fn test_frame_count_matches_appends() {
        let mut video = Video::new(4, 3).unwrap();
        assert_eq!(video.frame_count(), 0);

        for i in 1..=5 {
            video.add_frame(&Frame::new(4, 3).unwrap()).unwrap();
            assert_eq!(video.frame_count(), i);
        }
    }

    #[test]
    fn test_add_frame_dimension_mismatch() {
        let mut video = Video::new(4, 3).unwrap();
        let frame = Frame::new(3, 4).unwrap();

        let err = video.add_frame(&frame).unwrap_err();
        assert!(matches!(err, MinvidError::Format(_)));
        assert_eq!(video.frame_count(), 0);
    }

    #[test]
    fn test_get_frame_out_of_range() {
        let mut video = Video::new(2, 2).unwrap();
        video.add_frame(&Frame::new(2, 2).unwrap()).unwrap();

        assert!(video.get_frame(0).is_ok());

        let err = video.get_frame(1).unwrap_err();
        assert!(matches!(
            err,
            MinvidError::Index(IndexError::FrameOutOfBounds { index: 1, count: 1 })
        ));
    }

    #[test]
    fn test_get_frame_copies() {
        let mut video = Video::new(2, 2).unwrap();
        video.add_frame(&filled_frame(2, 2, [9, 9, 9])).unwrap();

        let mut frame = video.get_frame(0).unwrap();
        frame.set_pixel(0, 0, [0, 0, 0]).unwrap();

        // The video's buffer is unaffected by mutating the copy.
        assert_eq!(video.get_frame(0).unwrap().get_pixel(0, 0).unwrap(), [9, 9, 9]);
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let mut video = Video::new(3, 2).unwrap();
        video.add_frame(&filled_frame(3, 2, [10, 20, 30])).unwrap();
        video.add_frame(&filled_frame(3, 2, [40, 50, 60])).unwrap();
        video.add_frame(&filled_frame(3, 2, [70, 80, 90])).unwrap();

        let decoded = Video::decode(&video.encode()).unwrap();

        assert_eq!(decoded.width(), 3);
        assert_eq!(decoded.height(), 2);
        assert_eq!(decoded.frame_count(), 3);
        for i in 0..3 {
            assert_eq!(
                decoded.get_frame(i).unwrap().data(),
                video.get_frame(i).unwrap().data()
            );
        }
    }

    #[test]
    fn test_encoded_layout() {
        let mut video = Video::new(2, 1).unwrap();

        let mut frame = Frame::new(2, 1).unwrap();
        frame.set_pixel(0, 0, [255, 0, 0]).unwrap();
        frame.set_pixel(1, 0, [0, 255, 0]).unwrap();
        video.add_frame(&frame).unwrap();

        let data = video.encode();
        assert_eq!(data.len(), 22);
        assert_eq!(&data[..8], &[2, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(&data[8..16], &[1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(&data[16..], &[255, 0, 0, 0, 255, 0]);

        let decoded = Video::decode(&data).unwrap();
        assert_eq!(decoded.frame_count(), 1);
        assert_eq!(
            decoded.get_frame(0).unwrap().get_pixel(1, 0).unwrap(),
            [0, 255, 0]
        );
    }

    #[test]
    fn test_decode_buffer_too_short() {
        let err = Video::decode(&[0; 15]).unwrap_err();
        assert!(matches!(
            err,
            MinvidError::Format(FormatError::BufferTooShort { actual: 15, .. })
        ));
    }

    #[test]
    fn test_decode_truncated_payload() {
        let mut data = Video::new(2, 1).unwrap().encode();
        data.extend_from_slice(&[0; 5]);

        let err = Video::decode(&data).unwrap_err();
        assert!(matches!(
            err,
            MinvidError::Format(FormatError::TruncatedPayload { payload: 5, frame_size: 6 })
        ));
    }

    #[test]
    fn test_decode_zero_area_trailing_bytes() {
        let mut data = Video::new(0, 0).unwrap().encode();
        assert_eq!(data.len(), HEADER_BYTES);
        assert!(Video::decode(&data).is_ok());

        data.push(7);
        let err = Video::decode(&data).unwrap_err();
        assert!(matches!(
            err,
            MinvidError::Format(FormatError::ZeroAreaPayload { payload: 1 })
        ));
    }

    #[test]
    fn test_dimension_bounds() {
        assert!(Video::new(MAX_DIMENSION, MAX_DIMENSION).is_ok());

        let err = Video::new(MAX_DIMENSION + 1, 10).unwrap_err();
        assert!(matches!(err, MinvidError::Range(_)));
    }

    #[test]
    fn test_frames_iterator() {
        let mut video = Video::new(2, 2).unwrap();
        video.add_frame(&filled_frame(2, 2, [1, 1, 1])).unwrap();
        video.add_frame(&filled_frame(2, 2, [2, 2, 2])).unwrap();

        let frames: Vec<Frame> = video.frames().collect();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].get_pixel(0, 0).unwrap(), [1, 1, 1]);
        assert_eq!(frames[1].get_pixel(1, 1).unwrap(), [2, 2, 2]);

        assert_eq!(Video::new(0, 0).unwrap().frames().count(), 0);
    }
}
