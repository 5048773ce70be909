//! Small seedable RNG for word picks and spawn placement.

/// Linear-congruential generator (not crypto secure), stepped once per draw.
/// Seed it with [`Lcg::new`] for reproducible sequences in tests, or with
/// [`Lcg::from_clock`] in the browser.
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Seeds from browser entropy when the `rng` feature is enabled, otherwise
    /// from the page clock.
    pub fn from_clock() -> Self {
        Self::new(clock_seed())
    }

    fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(1_664_525)
            .wrapping_add(1_013_904_223);
        self.state
    }

    /// Index in `0..len`; returns 0 when the range is empty.
    pub fn next_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        // The low LCG bits cycle quickly; draw from the upper half.
        (self.next_u32() >> 16) as usize % len
    }
}

#[cfg(feature = "rng")]
fn clock_seed() -> u32 {
    let mut buf = [0u8; 4];
    match getrandom::getrandom(&mut buf) {
        Ok(()) => u32::from_le_bytes(buf),
        Err(_) => performance_seed(),
    }
}

#[cfg(not(feature = "rng"))]
fn clock_seed() -> u32 {
    performance_seed()
}

fn performance_seed() -> u32 {
    let now = web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0);
    // Sub-millisecond bits churn the most between page loads.
    (now * 1_000.0) as u64 as u32
}
