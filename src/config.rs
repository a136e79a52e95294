/// Intra-community edge probability used when the CLI gets no --p1.
pub const DEFAULT_P1: f64 = 0.9;

/// Background edge probability used when the CLI gets no --p2.
pub const DEFAULT_P2: f64 = 0.1;

pub(crate) const WRITE_BUFFER_SIZE: usize = 128 * 1024;
