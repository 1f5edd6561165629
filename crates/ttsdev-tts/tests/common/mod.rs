#![allow(dead_code)]

/// One MPEG1 Layer III frame: 44.1 kHz, 128 kbps, zero payload.
pub fn mp3_frame() -> Vec<u8> {
    let mut frame = vec![0u8; 417];
    frame[0] = 0xFF;
    frame[1] = 0xFB;
    frame[2] = 0x90;
    frame[3] = 0xC4;
    frame
}

/// A playable MP3 fixture of `frames` frames (~26 ms each).
pub fn mp3_fixture(frames: usize) -> Vec<u8> {
    let mut data = Vec::new();
    for _ in 0..frames {
        data.extend_from_slice(&mp3_frame());
    }
    data
}
