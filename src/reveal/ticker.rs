use std::ops::ControlFlow;
use std::sync::{
    Arc, Mutex, MutexGuard, PoisonError,
    atomic::{AtomicBool, Ordering},
};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::debug;

use super::animator::Animator;
use super::spec::{CounterSpec, RenderableState};

/// Frame interval for reveal animations (~20 fps is plenty for a key image).
pub const FRAME_MS: u64 = 50;

/// Pause between the visibility edge and the first animated frame.
pub const START_DELAY_MS: u64 = 100;

/// Receives every state a mounted reveal wants shown.
pub type FrameSink = Box<dyn FnMut(&RenderableState) + Send>;

/// A background tick thread. Dropping the handle cancels it.
///
/// Cancelling waits for a step already in flight, so once [`TickHandle::cancel`]
/// returns no step runs again.
pub struct TickHandle {
    shared: Arc<Gate>,
    thread: Option<JoinHandle<()>>,
}

#[derive(Default)]
struct Gate {
    cancel: AtomicBool,
    // Held for the whole of each step
    step: Mutex<()>,
}

impl Gate {
    fn hold(&self) -> MutexGuard<'_, ()> {
        self.step.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TickHandle {
    /// Calls `step` every `interval` until it breaks or the handle is cancelled.
    ///
    /// `step` must not cancel its own handle.
    pub fn spawn<F>(interval: Duration, mut step: F) -> Self
    where
        F: FnMut() -> ControlFlow<()> + Send + 'static,
    {
        let shared = Arc::new(Gate::default());
        let gate = Arc::clone(&shared);

        let thread = std::thread::spawn(move || {
            loop {
                std::thread::sleep(interval);

                let _held = gate.hold();
                if gate.cancel.load(Ordering::Acquire) {
                    break;
                }
                if step().is_break() {
                    break;
                }
            }
        });

        Self {
            shared,
            thread: Some(thread),
        }
    }

    /// Blocks only while a step is running.
    pub fn cancel(&self) {
        let _held = self.shared.hold();
        self.shared.cancel.store(true, Ordering::Release);
    }

    pub fn is_finished(&self) -> bool {
        self.thread.as_ref().is_none_or(|t| t.is_finished())
    }

    /// Blocks until the thread exits on its own.
    pub fn join(mut self) {
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        // Never join here: drops happen on the plugin's event thread.
        self.cancel();
    }
}

/// One mounted reveal: an [`Animator`] plus the tick thread driving it.
///
/// Dropping the driver is the unmount; any pending tick is cancelled.
pub struct RevealDriver {
    animator: Arc<Mutex<Animator>>,
    // Moves into the tick thread once the reveal starts
    sink: Option<FrameSink>,
    ticker: Option<TickHandle>,
}

impl RevealDriver {
    /// Mounts `spec` and emits its initial state.
    pub fn mount(spec: CounterSpec, mut sink: FrameSink) -> Self {
        let animator = Animator::new(spec);
        sink(&animator.initialize());
        Self {
            animator: Arc::new(Mutex::new(animator)),
            sink: Some(sink),
            ticker: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.ticker.as_ref().is_some_and(|t| !t.is_finished())
    }

    pub fn snapshot(&self) -> RenderableState {
        self.animator
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .state()
    }

    /// Visibility rising edge. Starts ticking after [`START_DELAY_MS`].
    pub fn on_visible(&mut self) -> bool {
        self.on_visible_with(
            Duration::from_millis(START_DELAY_MS),
            Duration::from_millis(FRAME_MS),
        )
    }

    pub fn on_visible_with(&mut self, delay: Duration, frame: Duration) -> bool {
        let started = self
            .animator
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .on_visible(Instant::now() + delay);
        if !started {
            return false;
        }
        let Some(mut sink) = self.sink.take() else {
            return false;
        };

        let animator = Arc::clone(&self.animator);
        let mut last: Option<RenderableState> = None;

        self.ticker = Some(TickHandle::spawn(frame, move || {
            let mut anim = animator.lock().unwrap_or_else(PoisonError::into_inner);
            let Some(state) = anim.tick(Instant::now()) else {
                return ControlFlow::Break(());
            };
            // Skip redraws when the rounded value didn't move
            let done = anim.is_done();
            if done || last.as_ref() != Some(&state) {
                sink(&state);
                last = Some(state);
            }
            if done {
                debug!(value = anim.spec().target, "reveal complete");
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        }));
        true
    }
}

impl Drop for RevealDriver {
    fn drop(&mut self) {
        // Waits out a frame mid-render so nothing paints after unmount
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }
}
