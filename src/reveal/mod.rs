//! Value reveal: eases a statistic from 0 up to its target the first time
//! it becomes visible.
//!
//! [`Animator`] is the pure state machine (`Idle -> Running -> Complete`, or
//! `LiteralComplete` for literal overrides). [`RevealDriver`] owns one
//! mounted animator and the tick thread that feeds it wall-clock time.

mod animator;
mod spec;
mod ticker;

pub use animator::{AnimationRun, Animator, Phase, ease_out_cubic, interpolate, progress};
pub use spec::{CounterSpec, DEFAULT_DURATION_MS, RenderableState};
pub use ticker::{FRAME_MS, FrameSink, RevealDriver, START_DELAY_MS, TickHandle};
