#![no_main]

use libfuzzer_sys::fuzz_target;
use vortex::Hasher;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let reference_hash = vortex::hash(data);

    // Chunk size is derived from the first byte (1 to 255)
    let chunk_size = (data[0] as usize % 255) + 1;

    let mut hasher = Hasher::new();
    for chunk in data.chunks(chunk_size) {
        hasher.update(chunk);
    }

    assert_eq!(
        reference_hash,
        hasher.finalize(),
        "Streaming and One-Shot approaches differ!"
    );
});
