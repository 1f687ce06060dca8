use std::ops::ControlFlow;
use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicBool, AtomicU64, Ordering},
};
use std::time::Duration;

use serde_json::{Map, Value};
use streamdeck_lib::prelude::*;
use techpotato_stats::carousel::Carousel;
use techpotato_stats::content::{ContentSource, ListSection};
use techpotato_stats::reveal::TickHandle;
use tracing::{debug, warn};

use super::settings::{get_nonempty, get_u64};
use crate::render::{render_caption, render_missing};

const DEFAULT_INTERVAL_MS: u64 = 5000;
const MIN_INTERVAL_MS: u64 = 1000;

/// Cycles through a content list: testimonials, services, team, ...
///
/// Auto-advances while visible. Short press shows the next item, long press
/// the previous one.
pub struct ShowcaseAction {
    captions: Arc<Vec<String>>,
    carousel: Arc<Mutex<Carousel>>,
    auto: Option<TickHandle>,
    visible: bool,

    // Long-press tracking
    holding: Arc<AtomicBool>,
    press_seq: u64,
    active_press_id: Arc<AtomicU64>,
    long_fired_press_id: Arc<AtomicU64>,

    settings: ShowcaseSettings,
}

impl Default for ShowcaseAction {
    fn default() -> Self {
        Self {
            captions: Arc::new(Vec::new()),
            carousel: Arc::new(Mutex::new(Carousel::default())),
            auto: None,
            visible: false,

            holding: Arc::new(AtomicBool::new(false)),
            press_seq: 0,
            active_press_id: Arc::new(AtomicU64::new(0)),
            long_fired_press_id: Arc::new(AtomicU64::new(0)),

            settings: ShowcaseSettings::default(),
        }
    }
}

impl ActionStatic for ShowcaseAction {
    const ID: &'static str = super::ids::SHOWCASE;
}

impl Action for ShowcaseAction {
    fn id(&self) -> &str {
        Self::ID
    }

    fn init(&mut self, cx: &Context, ctx_id: &str) {
        cx.sd().get_settings(ctx_id);
    }

    fn did_receive_settings(&mut self, cx: &Context, ev: &incoming::DidReceiveSettings) {
        self.settings = parse_settings(&ev.settings);
        self.captions = Arc::new(load_captions(&self.settings));
        place(
            &mut lock(&self.carousel),
            self.captions.len(),
            self.settings.start_index,
        );

        show_current(cx, ev.context, &self.captions, &self.carousel);
        if self.visible {
            self.start_auto(cx, ev.context);
        }
    }

    fn will_appear(&mut self, cx: &Context, ev: &incoming::WillAppear) {
        self.visible = true;
        show_current(cx, ev.context, &self.captions, &self.carousel);
        self.start_auto(cx, ev.context);
    }

    fn will_disappear(&mut self, _cx: &Context, _ev: &incoming::WillDisappear) {
        self.visible = false;
        self.auto = None;
    }

    fn teardown(&mut self, _cx: &Context, _ctx_id: &str) {
        self.visible = false;
        self.auto = None;
    }

    fn key_down(&mut self, cx: &Context, ev: &incoming::KeyDown) {
        self.holding.store(true, Ordering::SeqCst);

        self.press_seq = self.press_seq.wrapping_add(1);
        let pid = self.press_seq;
        self.active_press_id.store(pid, Ordering::SeqCst);
        self.long_fired_press_id.store(0, Ordering::SeqCst);

        let holding = Arc::clone(&self.holding);
        let active_id = Arc::clone(&self.active_press_id);
        let fired_id = Arc::clone(&self.long_fired_press_id);
        let captions = Arc::clone(&self.captions);
        let carousel = Arc::clone(&self.carousel);
        let cx2 = cx.clone();
        let ctx = ev.context.to_string();
        let long_press_ms = self.settings.long_press_ms;

        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(long_press_ms));

            // Only fire if still holding AND this is still the active press
            if !holding.load(Ordering::SeqCst) {
                return;
            }
            if active_id.load(Ordering::SeqCst) != pid {
                return;
            }

            fired_id.store(pid, Ordering::SeqCst);
            lock(&carousel).prev();
            show_current(&cx2, &ctx, &captions, &carousel);
        });
    }

    fn key_up(&mut self, cx: &Context, ev: &incoming::KeyUp) {
        self.holding.store(false, Ordering::SeqCst);

        let pid = self.active_press_id.load(Ordering::SeqCst);
        if self.long_fired_press_id.load(Ordering::SeqCst) == pid {
            // Long press already went back
            return;
        }

        lock(&self.carousel).next();
        show_current(cx, ev.context, &self.captions, &self.carousel);
    }
}

impl ShowcaseAction {
    /// (Re)starts auto-advance. Manual presses don't reset the interval.
    fn start_auto(&mut self, cx: &Context, ctx_id: &str) {
        self.auto = None;
        if self.captions.len() < 2 {
            return;
        }

        let captions = Arc::clone(&self.captions);
        let carousel = Arc::clone(&self.carousel);
        let cx2 = cx.clone();
        let ctx = ctx_id.to_string();
        let interval = Duration::from_millis(self.settings.interval_ms);
        debug!(ctx = ctx_id, items = captions.len(), ?interval, "showcase auto-advance");

        self.auto = Some(TickHandle::spawn(interval, move || {
            lock(&carousel).next();
            show_current(&cx2, &ctx, &captions, &carousel);
            ControlFlow::Continue(())
        }));
    }
}

fn lock(carousel: &Mutex<Carousel>) -> std::sync::MutexGuard<'_, Carousel> {
    carousel.lock().unwrap_or_else(PoisonError::into_inner)
}

fn show_current(cx: &Context, ctx_id: &str, captions: &[String], carousel: &Mutex<Carousel>) {
    let current = lock(carousel).current();
    match current.and_then(|i| captions.get(i)) {
        Some(text) => render_caption(cx, ctx_id, text),
        None => render_missing(cx, ctx_id),
    }
}

/// Fits the carousel to a new list and jumps to the configured item.
fn place(carousel: &mut Carousel, len: usize, start_index: usize) {
    carousel.resize(len);
    carousel.select(start_index);
}

fn load_captions(settings: &ShowcaseSettings) -> Vec<String> {
    match settings.source.load() {
        Ok(content) => content.captions(settings.section),
        Err(e) => {
            warn!("showcase: {e:#}");
            Vec::new()
        }
    }
}

// ── Settings ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
struct ShowcaseSettings {
    section: ListSection,
    interval_ms: u64,
    long_press_ms: u64,
    start_index: usize,
    source: ContentSource,
}

impl Default for ShowcaseSettings {
    fn default() -> Self {
        Self {
            section: ListSection::Testimonials,
            interval_ms: DEFAULT_INTERVAL_MS,
            long_press_ms: 500,
            start_index: 0,
            source: ContentSource::Embedded,
        }
    }
}

fn parse_settings(v: &Map<String, Value>) -> ShowcaseSettings {
    let mut s = ShowcaseSettings::default();
    if let Some(section) = get_nonempty(v, "section") {
        match ListSection::parse(section) {
            Some(parsed) => s.section = parsed,
            None => warn!(section, "showcase: unknown section, using testimonials"),
        }
    }
    s.interval_ms = get_u64(v, "intervalMs")
        .unwrap_or(DEFAULT_INTERVAL_MS)
        .max(MIN_INTERVAL_MS);
    if let Some(ms) = get_u64(v, "longPressMs") {
        s.long_press_ms = ms;
    }
    s.start_index = get_u64(v, "startIndex")
        .and_then(|i| usize::try_from(i).ok())
        .unwrap_or(0);
    s.source = ContentSource::from_setting(get_nonempty(v, "contentPath"));
    s
}
