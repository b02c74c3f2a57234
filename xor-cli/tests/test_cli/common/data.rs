/// Small binary sample with leading zeros and high bytes.
pub static BINARY_DATA: &[u8] = &[0x00, 0x01, 0x02, 0x03, 0xFF, 0xFE, 0xFD, 0xFC];

/// Generate pseudo-random test data with a fixed seed for determinism.
pub fn generate_random_data(size: usize) -> Vec<u8> {
    generate_random_data_with_seed(size, 12345)
}

/// Generate pseudo-random test data with a caller-provided seed.
pub fn generate_random_data_with_seed(size: usize, mut seed: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);

    for _ in 0..size {
        // Linear congruential generator: compatible, deterministic, dependency-free.
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        data.push((seed >> 16) as u8);
    }

    data
}

/// Reference combine: pad the shorter input with zeros, XOR byte-wise.
pub fn reference_xor(a: &[u8], b: &[u8]) -> Vec<u8> {
    let len = a.len().max(b.len());
    (0..len)
        .map(|i| a.get(i).copied().unwrap_or(0) ^ b.get(i).copied().unwrap_or(0))
        .collect()
}

/// Remove the trailing zero run, as the default output mode does.
pub fn strip_trailing_zeros(mut data: Vec<u8>) -> Vec<u8> {
    while data.last() == Some(&0) {
        data.pop();
    }
    data
}
