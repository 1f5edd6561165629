//! Audio container adapter.
//!
//! Providers hand audio back in two shapes: a complete byte body, or a
//! streamed response. Both are normalized here into an [`AudioBuffer`] —
//! an in-memory MP3 byte buffer the UI shell can play directly. Streamed
//! responses are drained into a transient in-memory spool first, since
//! validation needs a seekable source.
//!
//! Validation and duration measurement work at the container level by
//! scanning MPEG frame headers; no decoder is involved.

use crate::error::{TTSError, TTSResult};
use crate::types::AudioFormat;
use bytes::Bytes;
use futures::{Stream, StreamExt};

/// In-memory encoded audio, ready for playback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AudioBuffer {
    data: Vec<u8>,
    format: AudioFormat,
}

impl AudioBuffer {
    /// Wrap raw MP3 bytes, rejecting payloads that do not start with a
    /// valid MPEG audio frame (after any leading ID3v2 tag).
    pub fn from_mp3_bytes(data: Vec<u8>) -> TTSResult<Self> {
        mp3_info(&data)?;
        Ok(Self {
            data,
            format: AudioFormat::Mp3,
        })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn format(&self) -> AudioFormat {
        self.format
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Playback duration in milliseconds, computed from frame headers.
    pub fn duration_ms(&self) -> TTSResult<u64> {
        Ok(mp3_info(&self.data)?.duration_ms())
    }
}

/// Drain a streamed provider response into a transient in-memory spool
/// and validate it as MP3.
///
/// The spool is owned by this call and released on every exit path,
/// including stream errors; nothing touches the filesystem.
pub async fn spool_stream<S, E>(stream: S) -> TTSResult<AudioBuffer>
where
    S: Stream<Item = Result<Bytes, E>>,
    E: std::fmt::Display,
{
    let mut stream = std::pin::pin!(stream);
    let mut spool: Vec<u8> = Vec::new();
    while let Some(chunk) = stream.next().await {
        let chunk =
            chunk.map_err(|e| TTSError::Http(format!("failed to read audio stream: {e}")))?;
        spool.extend_from_slice(&chunk);
    }
    AudioBuffer::from_mp3_bytes(spool)
}

/// Container-level facts about an MPEG audio stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mp3Info {
    /// Number of audio frames scanned
    pub frame_count: u32,
    /// Sample rate of the last scanned frame, in Hz
    pub sample_rate: u32,
    /// Total PCM samples across all frames
    pub total_samples: u64,
}

impl Mp3Info {
    pub fn duration_ms(&self) -> u64 {
        if self.sample_rate == 0 {
            return 0;
        }
        self.total_samples * 1000 / self.sample_rate as u64
    }
}

/// Scan an MP3 payload frame by frame.
///
/// Accepts an optional leading ID3v2 tag, walks Layer III frame headers,
/// and stops at the first non-frame byte (trailing tags). Fails if no
/// valid frame is found at all.
pub fn mp3_info(data: &[u8]) -> TTSResult<Mp3Info> {
    let mut pos = skip_id3v2(data);
    let mut frame_count: u32 = 0;
    let mut sample_rate: u32 = 0;
    let mut total_samples: u64 = 0;

    while pos + 4 <= data.len() {
        match FrameHeader::parse(&data[pos..]) {
            Some(header) => {
                frame_count += 1;
                sample_rate = header.sample_rate;
                total_samples += header.samples_per_frame as u64;
                pos += header.frame_len;
            }
            // Trailing non-frame data (ID3v1 and friends) ends the scan.
            None => break,
        }
    }

    if frame_count == 0 {
        return Err(TTSError::Audio(
            "payload is not an MPEG audio stream".to_string(),
        ));
    }

    Ok(Mp3Info {
        frame_count,
        sample_rate,
        total_samples,
    })
}

/// Byte offset past a leading ID3v2 tag, if one is present.
fn skip_id3v2(data: &[u8]) -> usize {
    if data.len() < 10 || &data[0..3] != b"ID3" {
        return 0;
    }
    // Tag size is a 28-bit synchsafe integer; bit 4 of the flags byte
    // signals a 10-byte footer.
    let size = ((data[6] as usize & 0x7F) << 21)
        | ((data[7] as usize & 0x7F) << 14)
        | ((data[8] as usize & 0x7F) << 7)
        | (data[9] as usize & 0x7F);
    let footer = if data[5] & 0x10 != 0 { 10 } else { 0 };
    10 + size + footer
}

#[derive(Clone, Copy, Debug)]
struct FrameHeader {
    sample_rate: u32,
    samples_per_frame: u32,
    frame_len: usize,
}

/// Layer III bitrates in kbps, indexed by the header's bitrate field.
const BITRATES_V1_L3: [u32; 15] = [
    0, 32, 40, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320,
];
const BITRATES_V2_L3: [u32; 15] = [
    0, 8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160,
];

const SAMPLE_RATES_V1: [u32; 3] = [44100, 48000, 32000];
const SAMPLE_RATES_V2: [u32; 3] = [22050, 24000, 16000];
const SAMPLE_RATES_V25: [u32; 3] = [11025, 12000, 8000];

impl FrameHeader {
    /// Parse one Layer III frame header at the start of `data`.
    fn parse(data: &[u8]) -> Option<Self> {
        if data.len() < 4 {
            return None;
        }
        // 11-bit sync word
        if data[0] != 0xFF || data[1] & 0xE0 != 0xE0 {
            return None;
        }

        let version_bits = (data[1] >> 3) & 0x03;
        let layer_bits = (data[1] >> 1) & 0x03;
        // Layer III only; reserved version is invalid
        if layer_bits != 0x01 || version_bits == 0x01 {
            return None;
        }

        let bitrate_index = (data[2] >> 4) & 0x0F;
        let sample_rate_index = (data[2] >> 2) & 0x03;
        // Free-format and invalid bitrates are rejected
        if bitrate_index == 0 || bitrate_index == 0x0F || sample_rate_index == 0x03 {
            return None;
        }
        let padding = ((data[2] >> 1) & 0x01) as usize;

        let (bitrates, sample_rates, samples_per_frame) = match version_bits {
            0x03 => (&BITRATES_V1_L3, &SAMPLE_RATES_V1, 1152u32),
            0x02 => (&BITRATES_V2_L3, &SAMPLE_RATES_V2, 576),
            _ => (&BITRATES_V2_L3, &SAMPLE_RATES_V25, 576),
        };

        let bitrate = bitrates[bitrate_index as usize] * 1000;
        let sample_rate = sample_rates[sample_rate_index as usize];
        let frame_len =
            (samples_per_frame as usize / 8) * bitrate as usize / sample_rate as usize + padding;
        if frame_len < 4 {
            return None;
        }

        Some(Self {
            sample_rate,
            samples_per_frame,
            frame_len,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;

    /// One MPEG1 Layer III frame: 44.1 kHz, 128 kbps, zero payload.
    pub(crate) fn mp3_frame() -> Vec<u8> {
        // frame_len = 144 * 128000 / 44100 = 417 bytes
        let mut frame = vec![0u8; 417];
        frame[0] = 0xFF;
        frame[1] = 0xFB; // MPEG1, Layer III, no CRC
        frame[2] = 0x90; // 128 kbps, 44.1 kHz, no padding
        frame[3] = 0xC4; // mono
        frame
    }

    pub(crate) fn mp3_fixture(frames: usize) -> Vec<u8> {
        let mut data = Vec::new();
        for _ in 0..frames {
            data.extend_from_slice(&mp3_frame());
        }
        data
    }

    #[test]
    fn test_mp3_info_counts_frames() {
        let info = mp3_info(&mp3_fixture(10)).unwrap();
        assert_eq!(info.frame_count, 10);
        assert_eq!(info.sample_rate, 44100);
        assert_eq!(info.total_samples, 10 * 1152);
        // 10 frames of 1152 samples at 44.1 kHz is ~261 ms
        assert_eq!(info.duration_ms(), 261);
    }

    #[test]
    fn test_mp3_info_skips_id3v2_tag() {
        let mut data = vec![0u8; 10];
        data[0..3].copy_from_slice(b"ID3");
        data[3] = 0x04; // version
        data[6..10].copy_from_slice(&[0x00, 0x00, 0x00, 0x00]);
        data.extend_from_slice(&mp3_fixture(3));
        let info = mp3_info(&data).unwrap();
        assert_eq!(info.frame_count, 3);
    }

    #[test]
    fn test_mp3_info_ignores_trailing_tag() {
        let mut data = mp3_fixture(5);
        data.extend_from_slice(b"TAGsome id3v1 trailer");
        let info = mp3_info(&data).unwrap();
        assert_eq!(info.frame_count, 5);
    }

    #[test]
    fn test_mp3_info_rejects_garbage() {
        let err = mp3_info(b"not audio at all").unwrap_err();
        assert!(matches!(err, TTSError::Audio(_)));
        assert!(mp3_info(&[]).is_err());
    }

    #[test]
    fn test_buffer_duration() {
        let buffer = AudioBuffer::from_mp3_bytes(mp3_fixture(20)).unwrap();
        assert_eq!(buffer.duration_ms().unwrap(), 20 * 1152 * 1000 / 44100);
        assert_eq!(buffer.format(), AudioFormat::Mp3);
        assert!(!buffer.is_empty());
    }

    #[tokio::test]
    async fn test_spool_stream_round_trip() {
        let source = mp3_fixture(8);
        let expected = mp3_info(&source).unwrap().duration_ms();

        // Chunk boundaries deliberately split frames
        let chunks: Vec<Result<Bytes, std::io::Error>> = source
            .chunks(100)
            .map(|c| Ok(Bytes::copy_from_slice(c)))
            .collect();

        let buffer = spool_stream(stream::iter(chunks)).await.unwrap();
        assert_eq!(buffer.duration_ms().unwrap(), expected);
        assert_eq!(buffer.data(), source.as_slice());
    }

    #[tokio::test]
    async fn test_spool_stream_propagates_errors() {
        let chunks: Vec<Result<Bytes, std::io::Error>> = vec![
            Ok(Bytes::copy_from_slice(&mp3_frame())),
            Err(std::io::Error::other("connection reset")),
        ];
        let err = spool_stream(stream::iter(chunks)).await.unwrap_err();
        assert!(matches!(err, TTSError::Http(_)));
    }

    #[tokio::test]
    async fn test_spool_stream_rejects_non_audio() {
        let chunks: Vec<Result<Bytes, std::io::Error>> =
            vec![Ok(Bytes::from_static(b"<html>502 Bad Gateway</html>"))];
        let err = spool_stream(stream::iter(chunks)).await.unwrap_err();
        assert!(matches!(err, TTSError::Audio(_)));
    }
}
