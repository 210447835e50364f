// Bounds for the snippet interpreter

/// Hard ceiling on recorded steps per run; breaching it aborts the whole call
pub const MAX_STEPS: usize = 500;

/// Hard ceiling on iterations of a single loop; breaching it aborts the call
pub const MAX_LOOP_ITERATIONS: u32 = 50;

/// Largest array a declaration or indexed write may produce
pub const MAX_ARRAY_LEN: usize = 10_000;
