use std::time::{Duration, Instant};

use super::spec::{CounterSpec, RenderableState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Mounted, waiting for the first visibility signal.
    Idle,
    Running,
    Complete,
    /// A literal override is shown; nothing ever animates.
    LiteralComplete,
}

/// Mutable state for one mount's reveal. Created on the first visibility signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationRun {
    pub started_at: Instant,
    pub current_value: i64,
}

/// Eases a displayed number from 0 to `spec.target` exactly once per mount.
///
/// Time is always passed in, never read, so a host decides what "now" is.
#[derive(Debug)]
pub struct Animator {
    spec: CounterSpec,
    run: Option<AnimationRun>,
    phase: Phase,
}

impl Animator {
    pub fn new(spec: CounterSpec) -> Self {
        let phase = if spec.is_literal() {
            Phase::LiteralComplete
        } else {
            Phase::Idle
        };
        Self {
            spec,
            run: None,
            phase,
        }
    }

    pub fn spec(&self) -> &CounterSpec {
        &self.spec
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn run(&self) -> Option<&AnimationRun> {
        self.run.as_ref()
    }

    pub fn is_done(&self) -> bool {
        matches!(self.phase, Phase::Complete | Phase::LiteralComplete)
    }

    pub fn initialize(&self) -> RenderableState {
        self.spec.initialize()
    }

    /// What is on screen right now.
    pub fn state(&self) -> RenderableState {
        let value = self.run.map(|r| r.current_value).unwrap_or(0);
        self.spec.state_at(value)
    }

    /// Latches the run. `start_at` may lie in the future to delay the reveal.
    ///
    /// Returns `false` (and changes nothing) if a run already exists or the
    /// spec is a literal.
    pub fn on_visible(&mut self, start_at: Instant) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.run = Some(AnimationRun {
            started_at: start_at,
            current_value: 0,
        });
        self.phase = Phase::Running;
        true
    }

    /// One step of the loop. `None` unless running.
    pub fn tick(&mut self, now: Instant) -> Option<RenderableState> {
        if self.phase != Phase::Running {
            return None;
        }
        let run = self.run.as_mut()?;

        let elapsed = now.saturating_duration_since(run.started_at);
        let p = progress(elapsed, self.spec.duration_ms);
        if p < 1.0 {
            run.current_value = interpolate(self.spec.target, ease_out_cubic(p));
        } else {
            // Snap, so the last frame carries no rounding drift.
            run.current_value = self.spec.target;
            self.phase = Phase::Complete;
        }
        Some(self.spec.state_at(run.current_value))
    }
}

/// Fraction of `duration_ms` covered by `elapsed`, clamped to `[0, 1]`.
pub fn progress(elapsed: Duration, duration_ms: i64) -> f64 {
    if duration_ms <= 0 {
        return 1.0;
    }
    (elapsed.as_secs_f64() * 1000.0 / duration_ms as f64).clamp(0.0, 1.0)
}

pub fn ease_out_cubic(p: f64) -> f64 {
    1.0 - (1.0 - p).powi(3)
}

pub fn interpolate(target: i64, eased: f64) -> i64 {
    (target as f64 * eased).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn run_to_end(anim: &mut Animator, t0: Instant) -> RenderableState {
        let mut last = None;
        let mut t = t0;
        while let Some(state) = anim.tick(t) {
            last = Some(state);
            if anim.is_done() {
                break;
            }
            t += ms(16);
        }
        last.expect("at least one frame")
    }

    #[test]
    fn reaches_target_exactly() {
        for target in [1, 7, 98, 200, 999_999, -3, -250, 12_345_678_901] {
            let mut anim = Animator::new(CounterSpec::new(target).duration_ms(2000));
            let t0 = Instant::now();
            assert!(anim.on_visible(t0));
            let last = run_to_end(&mut anim, t0);
            assert_eq!(last.value(), Some(target));
            assert_eq!(anim.phase(), Phase::Complete);
            assert_eq!(anim.run().map(|r| r.current_value), Some(target));
        }
    }

    #[test]
    fn hundred_plus_scenario() {
        let spec = CounterSpec::new(200).suffix("+").duration_ms(2000);
        let mut anim = Animator::new(spec);
        let t0 = Instant::now();
        anim.on_visible(t0);

        assert_eq!(anim.tick(t0).map(|s| s.render()), Some("0+".into()));
        let mid = anim.tick(t0 + ms(1000)).map(|s| s.render());
        // 1 - 0.5^3 = 0.875
        assert_eq!(mid, Some("175+".into()));
        assert_eq!(
            anim.tick(t0 + ms(2000)).map(|s| s.render()),
            Some("200+".into())
        );
        assert!(anim.is_done());
        assert_eq!(anim.tick(t0 + ms(2100)), None);
        assert_eq!(anim.state().render(), "200+");
    }

    #[test]
    fn percent_scenario_ends_on_target() {
        let mut anim = Animator::new(CounterSpec::new(98).suffix("%"));
        let t0 = Instant::now();
        anim.on_visible(t0);
        let last = anim.tick(t0 + ms(5000)).map(|s| s.render());
        assert_eq!(last, Some("98%".into()));
    }

    #[test]
    fn second_visibility_signal_is_ignored() {
        let mut anim = Animator::new(CounterSpec::new(50));
        let t0 = Instant::now();
        assert!(anim.on_visible(t0));
        anim.tick(t0 + ms(500));
        let before = *anim.run().expect("run");

        assert!(!anim.on_visible(t0 + ms(700)));
        assert_eq!(anim.run().map(|r| r.started_at), Some(before.started_at));
        assert_eq!(anim.phase(), Phase::Running);
    }

    #[test]
    fn completed_run_does_not_restart() {
        let mut anim = Animator::new(CounterSpec::new(5).duration_ms(10));
        let t0 = Instant::now();
        anim.on_visible(t0);
        anim.tick(t0 + ms(10));
        assert!(!anim.on_visible(t0 + ms(20)));
        assert_eq!(anim.phase(), Phase::Complete);
    }

    #[test]
    fn literal_never_runs() {
        let spec = CounterSpec::new(0).literal("24/7");
        let mut anim = Animator::new(spec);
        assert_eq!(anim.phase(), Phase::LiteralComplete);
        assert_eq!(anim.initialize().render(), "24/7");

        let t0 = Instant::now();
        assert!(!anim.on_visible(t0));
        assert!(anim.run().is_none());
        assert_eq!(anim.tick(t0 + ms(3000)), None);
        assert_eq!(anim.state().render(), "24/7");
    }

    #[test]
    fn tick_before_visible_does_nothing() {
        let mut anim = Animator::new(CounterSpec::new(10));
        assert_eq!(anim.tick(Instant::now()), None);
        assert_eq!(anim.phase(), Phase::Idle);
        assert_eq!(anim.state().render(), "0");
    }

    #[test]
    fn non_positive_duration_completes_on_first_tick() {
        for duration in [0, -1, -5000] {
            let mut anim = Animator::new(CounterSpec::new(321).duration_ms(duration));
            let t0 = Instant::now();
            anim.on_visible(t0);
            assert_eq!(anim.tick(t0).and_then(|s| s.value()), Some(321));
            assert!(anim.is_done());
        }
    }

    #[test]
    fn zero_target_still_runs_full_duration() {
        let mut anim = Animator::new(CounterSpec::new(0).duration_ms(1000));
        let t0 = Instant::now();
        anim.on_visible(t0);
        assert_eq!(anim.tick(t0 + ms(500)).and_then(|s| s.value()), Some(0));
        assert_eq!(anim.phase(), Phase::Running);
        assert_eq!(anim.tick(t0 + ms(1000)).and_then(|s| s.value()), Some(0));
        assert_eq!(anim.phase(), Phase::Complete);
    }

    #[test]
    fn delayed_start_holds_at_zero() {
        let mut anim = Animator::new(CounterSpec::new(100).duration_ms(1000));
        let now = Instant::now();
        anim.on_visible(now + ms(100));
        assert_eq!(anim.tick(now).and_then(|s| s.value()), Some(0));
        assert_eq!(anim.phase(), Phase::Running);
    }

    #[test]
    fn negative_target_moves_down() {
        let mut anim = Animator::new(CounterSpec::new(-80).duration_ms(1000));
        let t0 = Instant::now();
        anim.on_visible(t0);
        let a = anim.tick(t0 + ms(250)).and_then(|s| s.value()).expect("a");
        let b = anim.tick(t0 + ms(750)).and_then(|s| s.value()).expect("b");
        assert!(a < 0 && b <= a);
    }

    #[test]
    fn progress_never_regresses() {
        let mut prev = 0.0;
        for t in (0..=2000).step_by(37) {
            let p = progress(ms(t), 2000);
            assert!(p >= prev);
            assert!((0.0..=1.0).contains(&p));
            prev = p;
        }
        assert_eq!(progress(ms(10_000), 2000), 1.0);
    }

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }
}
