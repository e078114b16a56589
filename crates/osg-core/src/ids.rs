use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of the unique tokens stamped onto mapping records (`id`) and
/// error bodies (`traceId`).
///
/// `random` matches the historical output: a fresh UUID per record, the
/// one accepted departure from otherwise fully deterministic generation.
/// `seeded` derives tokens from a counter instead, making a whole
/// compilation byte-reproducible for golden-file comparisons.
#[derive(Debug)]
pub enum IdGen {
    Random,
    Seeded(AtomicU64),
}

impl IdGen {
    pub fn random() -> Self {
        IdGen::Random
    }

    pub fn seeded() -> Self {
        IdGen::Seeded(AtomicU64::new(1))
    }

    /// Next unique token, formatted as a UUID either way.
    pub fn next(&self) -> String {
        match self {
            IdGen::Random => Uuid::new_v4().to_string(),
            IdGen::Seeded(counter) => {
                let n = counter.fetch_add(1, Ordering::Relaxed);
                Uuid::from_u128(u128::from(n)).to_string()
            }
        }
    }
}

impl Default for IdGen {
    fn default() -> Self {
        IdGen::random()
    }
}
