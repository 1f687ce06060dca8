use std::sync::OnceLock;

use streamdeck_lib::Context;
use streamdeck_render::{Canvas, FontHandle, FontRegistry, TextOptions, WrapOptions, wrap_text};
use techpotato_stats::reveal::RenderableState;

// Embed the font at compile time — no runtime file I/O needed.
static FONT: OnceLock<FontHandle> = OnceLock::new();

// Leave a small margin inside 144px
const MAX_WIDTH: f32 = 136.0;

fn font() -> &'static FontHandle {
    FONT.get_or_init(|| {
        let mut reg = FontRegistry::new();
        reg.load_bytes(
            "mono",
            include_bytes!("../net.techpotato.stats.sdPlugin/fonts/DejaVuSansMono.ttf"),
        )
        .expect("embedded font must load")
    })
}

/// Render one reveal frame (`prefix + value + suffix`, or the literal).
pub fn render_state(cx: &Context, ctx_id: &str, state: &RenderableState) {
    render_fitted(cx, ctx_id, &state.render(), &[56.0, 44.0, 36.0, 28.0, 20.0], Layout::SingleLine);
}

/// Placeholder for keys whose statistic couldn't be resolved.
pub fn render_missing(cx: &Context, ctx_id: &str) {
    render_fitted(cx, ctx_id, "--", &[56.0], Layout::SingleLine);
}

/// Render a short caption, wrapped onto up to three lines.
pub fn render_caption(cx: &Context, ctx_id: &str, text: &str) {
    render_fitted(cx, ctx_id, text, &[28.0, 22.0, 18.0, 14.0], Layout::Caption);
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Layout {
    SingleLine,
    /// Up to three lines.
    Caption,
}

/// Picks the largest size at which `text` fits the layout, then draws it.
fn render_fitted(cx: &Context, ctx_id: &str, text: &str, sizes: &[f32], layout: Layout) {
    let max_lines: usize = match layout {
        Layout::SingleLine => 1,
        Layout::Caption => 3,
    };
    let font = font();
    let smallest = sizes.last().copied().unwrap_or(20.0);

    // Measure without a line cap so overflow shows up as extra lines
    let measure = WrapOptions {
        max_width: MAX_WIDTH,
        max_lines: 16,
    };
    let chosen_size = sizes
        .iter()
        .copied()
        .find(|&size| {
            let lines = wrap_text(font, size, text, &measure);
            lines.len() <= max_lines && lines.iter().all(|l| l.width_px <= MAX_WIDTH)
        })
        .unwrap_or(smallest); // fallback: always render at minimum size

    let opts = WrapOptions {
        max_width: MAX_WIDTH,
        max_lines: if layout == Layout::SingleLine { 1 } else { 3 },
    };
    let lines = wrap_text(font, chosen_size, text, &opts);

    let mut canvas = Canvas::key_icon();
    if !lines.is_empty() {
        canvas
            .draw_text(&lines, &TextOptions::new(font.clone(), chosen_size))
            .ok();
    }

    if let Ok(data_url) = canvas.finish().to_data_url() {
        cx.sd().set_image(ctx_id, Some(data_url), None, None);
    }
}
