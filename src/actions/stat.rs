use serde_json::{Map, Value};
use streamdeck_lib::prelude::*;
use techpotato_stats::content::{ContentSource, StatSection};
use techpotato_stats::reveal::{CounterSpec, DEFAULT_DURATION_MS, RenderableState, RevealDriver};
use techpotato_stats::visibility::OnceVisible;
use tracing::{debug, info, warn};

use super::settings::{get_i64, get_nonempty, get_u64};
use crate::render::{render_missing, render_state};

/// Shows one headline statistic, counting up the first time the key appears.
///
/// A key disappearing (page or profile switch) is an unmount: the reveal is
/// dropped and replays from 0 when the key comes back.
#[derive(Default)]
pub struct StatAction {
    lifecycle: StatLifecycle,
    reveal: Option<RevealDriver>,
}

impl ActionStatic for StatAction {
    const ID: &'static str = super::ids::STAT;
}

impl Action for StatAction {
    fn id(&self) -> &str {
        Self::ID
    }

    fn init(&mut self, cx: &Context, ctx_id: &str) {
        cx.sd().get_settings(ctx_id);
    }

    fn did_receive_settings(&mut self, cx: &Context, ev: &incoming::DidReceiveSettings) {
        let step = self.lifecycle.settings(parse_settings(&ev.settings));
        self.apply(step, cx, ev.context);
    }

    fn will_appear(&mut self, cx: &Context, ev: &incoming::WillAppear) {
        let step = self.lifecycle.appear();
        self.apply(step, cx, ev.context);
    }

    fn will_disappear(&mut self, _cx: &Context, _ev: &incoming::WillDisappear) {
        self.unmount();
    }

    fn teardown(&mut self, _cx: &Context, _ctx_id: &str) {
        self.unmount();
    }
}

impl StatAction {
    fn apply(&mut self, step: Step, cx: &Context, ctx_id: &str) {
        match step {
            Step::Noop => {}
            Step::Unmount => self.reveal = None,
            Step::Mount => {
                // Old frames must be gone before the new reveal paints
                self.reveal = None;
                self.reveal = self.mount(cx, ctx_id);
            }
        }
    }

    fn unmount(&mut self) {
        let step = self.lifecycle.disappear();
        // Dropping the driver cancels its pending tick and waits out a frame
        // that is mid-render
        if step == Step::Unmount {
            self.reveal = None;
        }
    }

    fn mount(&self, cx: &Context, ctx_id: &str) -> Option<RevealDriver> {
        let settings = self.lifecycle.current()?;
        let Some(spec) = resolve_spec(settings) else {
            render_missing(cx, ctx_id);
            return None;
        };
        debug!(ctx = ctx_id, value = spec.target, literal = spec.is_literal(), "mount stat");

        let cx2 = cx.clone();
        let ctx = ctx_id.to_string();
        let mut reveal = RevealDriver::mount(
            spec,
            Box::new(move |state: &RenderableState| render_state(&cx2, &ctx, state)),
        );
        reveal.on_visible();
        Some(reveal)
    }
}

/// What the key should do with its reveal after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Noop,
    /// Drop any current reveal and start a fresh one.
    Mount,
    Unmount,
}

/// Mounts once the key is both visible and configured, whichever comes last.
#[derive(Debug, Default)]
struct StatLifecycle {
    visibility: OnceVisible,
    settings: Option<StatSettings>,
}

impl StatLifecycle {
    fn current(&self) -> Option<&StatSettings> {
        self.settings.as_ref()
    }

    fn settings(&mut self, settings: StatSettings) -> Step {
        if self.settings.as_ref() == Some(&settings) {
            return Step::Noop;
        }
        self.settings = Some(settings);
        // New settings are a full remount
        if self.visibility.is_visible() {
            Step::Mount
        } else {
            Step::Noop
        }
    }

    fn appear(&mut self) -> Step {
        if self.visibility.signal(true) && self.settings.is_some() {
            Step::Mount
        } else {
            Step::Noop
        }
    }

    fn disappear(&mut self) -> Step {
        self.visibility.reset();
        Step::Unmount
    }
}

fn resolve_spec(settings: &StatSettings) -> Option<CounterSpec> {
    let content = match settings.source.load() {
        Ok(content) => content,
        Err(e) => {
            warn!("stat: {e:#}");
            return None;
        }
    };
    let Some(stat) = content.stat(settings.section, settings.index) else {
        warn!(
            section = ?settings.section,
            index = settings.index,
            "stat: no such statistic"
        );
        return None;
    };
    info!(label = %stat.label, value = stat.value, "stat resolved");

    let mut spec = stat.counter_spec(settings.duration_ms);
    if let Some(prefix) = &settings.prefix {
        spec = spec.prefix(prefix.as_str());
    }
    if let Some(suffix) = &settings.suffix {
        spec = spec.suffix(suffix.as_str());
    }
    if let Some(literal) = &settings.display_value {
        spec = spec.literal(literal.as_str());
    }
    Some(spec)
}

// ── Settings ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
struct StatSettings {
    section: StatSection,
    index: usize,
    duration_ms: i64,
    source: ContentSource,
    prefix: Option<String>,
    suffix: Option<String>,
    display_value: Option<String>,
}

impl Default for StatSettings {
    fn default() -> Self {
        Self {
            section: StatSection::Hero,
            index: 0,
            duration_ms: DEFAULT_DURATION_MS,
            source: ContentSource::Embedded,
            prefix: None,
            suffix: None,
            display_value: None,
        }
    }
}

fn parse_settings(v: &Map<String, Value>) -> StatSettings {
    let mut s = StatSettings::default();
    if let Some(section) = get_nonempty(v, "section") {
        match StatSection::parse(section) {
            Some(parsed) => s.section = parsed,
            None => warn!(section, "stat: unknown section, using hero"),
        }
    }
    s.index = get_u64(v, "index")
        .and_then(|i| usize::try_from(i).ok())
        .unwrap_or(0);
    s.duration_ms = get_i64(v, "durationMs").unwrap_or(DEFAULT_DURATION_MS);
    s.source = ContentSource::from_setting(get_nonempty(v, "contentPath"));
    s.prefix = get_nonempty(v, "prefix").map(str::to_string);
    s.suffix = get_nonempty(v, "suffix").map(str::to_string);
    s.display_value = get_nonempty(v, "displayValue").map(str::to_string);
    s
}
