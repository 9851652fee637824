#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickContext {
    pub tick: u64,
    pub dt_seconds: f32,
}

impl TickContext {
    pub fn new(tick: u64, dt_seconds: f32) -> Self {
        Self { tick, dt_seconds }
    }

    /// Context for the frame after this one.
    pub fn next(self, dt_seconds: f32) -> Self {
        Self {
            tick: self.tick.wrapping_add(1),
            dt_seconds,
        }
    }
}
