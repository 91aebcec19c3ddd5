//! Benchmark utilities for the membership crates
pub mod utils {
    use rand::Rng;

    /// Random 20-byte elements
    pub fn generate_elements(count: usize) -> Vec<Vec<u8>> {
        let mut rng = rand::thread_rng();
        (0..count)
            .map(|_| {
                let mut element = vec![0u8; 20];
                rng.fill(&mut element[..]);
                element
            })
            .collect()
    }

    /// Elements sharing a 16-byte prefix and differing only in a counter
    pub fn generate_adversarial_elements(count: usize) -> Vec<Vec<u8>> {
        let mut rng = rand::thread_rng();
        let prefix: [u8; 16] = rng.gen();

        (0..count)
            .map(|i| {
                let mut element = vec![0u8; 20];
                element[..16].copy_from_slice(&prefix);
                element[16..20].copy_from_slice(&(i as u32).to_le_bytes());
                element
            })
            .collect()
    }

    /// Random bit indices below `capacity`
    pub fn generate_indices(count: usize, capacity: usize) -> Vec<u64> {
        let mut rng = rand::thread_rng();
        (0..count)
            .map(|_| rng.gen_range(0..capacity as u64))
            .collect()
    }
}
