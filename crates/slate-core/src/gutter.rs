//! Line-number gutter layout.
//!
//! The gutter keeps no state of its own: every scroll, resize or edit
//! recomputes the labels from whatever the text area currently reports.

/// What the gutter needs to know about a text area.
///
/// Coordinates are in pixels relative to the top of the visible viewport.
pub trait TextLayout {
    /// Height of the visible viewport, or `None` before the first layout.
    fn viewport_height(&self) -> Option<f32>;

    /// 0-based index of the line drawn at `y`, clamped to the buffer.
    fn line_at(&self, y: f32) -> usize;

    /// Top edge of `line`, or `None` if the line does not exist.
    fn line_top(&self, line: usize) -> Option<f32>;
}

/// One line number to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GutterLabel {
    /// 1-based line number
    pub number: usize,
    /// Top edge in viewport coordinates
    pub y: f32,
}

/// Computes the labels for every line at least partly inside the viewport.
///
/// One line past the last visible one is included so a label is never
/// clipped at the bottom edge. Nothing is produced while the viewport
/// has no usable height.
pub fn layout(text: &impl TextLayout) -> Vec<GutterLabel> {
    let height = match text.viewport_height() {
        Some(h) if h.is_finite() && h > 0.0 => h,
        _ => return Vec::new(),
    };

    let first = text.line_at(0.0);
    let last = text.line_at(height);

    (first..=last + 1)
        .filter_map(|line| {
            text.line_top(line).map(|y| GutterLabel {
                number: line + 1,
                y,
            })
        })
        .collect()
}

/// Layout of an unwrapped text area where every line has the same height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformLines {
    /// Number of lines in the buffer
    pub line_count: usize,
    /// Height of one line in pixels
    pub line_height: f32,
    /// Space above the first line
    pub top_padding: f32,
    /// How far the content is scrolled down
    pub scroll_offset: f32,
    /// Visible height, `None` until the viewport is known
    pub viewport_height: Option<f32>,
}

impl TextLayout for UniformLines {
    fn viewport_height(&self) -> Option<f32> {
        if self.line_height > 0.0 {
            self.viewport_height
        } else {
            None
        }
    }

    fn line_at(&self, y: f32) -> usize {
        let content_y = y + self.scroll_offset - self.top_padding;
        let line = (content_y / self.line_height).floor().max(0.0) as usize;
        line.min(self.line_count.saturating_sub(1))
    }

    fn line_top(&self, line: usize) -> Option<f32> {
        (line < self.line_count)
            .then(|| self.top_padding + line as f32 * self.line_height - self.scroll_offset)
    }
}
