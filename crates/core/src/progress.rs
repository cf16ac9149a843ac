use crate::color::Color;
use crate::error::EngineError;

const DEFAULT_START: f64 = 0.0;
const DEFAULT_END: f64 = 100.0;

/// Maps a progress value onto a multi-stop RGB gradient.
///
/// The engine owns the [`Color`] it was constructed with and is the only
/// mutator of it after handoff. The range [start, end] is split into
/// `stops.len() - 1` equal-width segments (one segment spanning the whole
/// range when a single stop is given); each `set_progress` locates the active
/// segment and linearly blends its two bounding stops into the owned color.
///
/// [`ProgressEngine::init`] must run once before the first `set_progress`.
pub struct ProgressEngine {
    stops: Vec<[u8; 3]>,
    start: f64,
    end: f64,
    breakpoints: Vec<f64>,
    progress: f64,
    color: Color,
    initialized: bool,
}

impl ProgressEngine {
    /// Creates an engine over `stops` and an optional `(start, end)` range,
    /// defaulting to (0, 100).
    ///
    /// Fails with `InvalidArgument` when the stop list is empty, a bound is
    /// non-finite, or start is not strictly below end. Supplying only one
    /// bound is unrepresentable here; callers pass both or neither.
    pub fn new(
        color: Color,
        stops: Vec<[u8; 3]>,
        range: Option<(f64, f64)>,
    ) -> Result<Self, EngineError> {
        if stops.is_empty() {
            return Err(EngineError::InvalidArgument(
                "at least one color stop is required".to_string(),
            ));
        }
        let (start, end) = range.unwrap_or((DEFAULT_START, DEFAULT_END));
        if !start.is_finite() || !end.is_finite() {
            return Err(EngineError::InvalidArgument(format!(
                "range bounds must be finite, got [{}, {}]",
                start, end
            )));
        }
        if start >= end {
            return Err(EngineError::InvalidArgument(format!(
                "range start {} must be below end {}",
                start, end
            )));
        }
        Ok(Self {
            stops,
            start,
            end,
            breakpoints: Vec::new(),
            progress: start,
            color,
            initialized: false,
        })
    }

    /// Computes breakpoints, snaps the color to the first stop, and rewinds
    /// progress to the range start. Chainable; call once after construction.
    pub fn init(&mut self) -> &mut Self {
        self.breakpoints = compute_breakpoints(self.start, self.end, self.stops.len());
        let first = self.stops[0];
        self.color
            .set([first[0] as i32, first[1] as i32, first[2] as i32]);
        self.progress = self.start;
        self.initialized = true;
        self
    }

    /// Moves the gauge to `value` and recomputes the owned color.
    ///
    /// Fails with `OutOfRange` outside [start, end] and `InvalidArgument` for
    /// non-finite values; failed calls leave progress and color untouched.
    pub fn set_progress(&mut self, value: f64) -> Result<(), EngineError> {
        if !self.initialized {
            return Err(EngineError::NotInitialized);
        }
        if !value.is_finite() {
            return Err(EngineError::InvalidArgument(format!(
                "progress must be finite, got {}",
                value
            )));
        }
        if value < self.start || value > self.end {
            return Err(EngineError::OutOfRange {
                value,
                start: self.start,
                end: self.end,
            });
        }

        self.progress = value;

        let (lo, hi) = self.segment_for(value);
        let seg_start = self.breakpoints[lo];
        let seg_end = self.breakpoints[hi];
        let pct = (value - seg_start) / (seg_end - seg_start);

        // A single-stop engine interpolates the stop against itself.
        let last = self.stops.len() - 1;
        let from = self.stops[lo.min(last)];
        let to = self.stops[hi.min(last)];

        let mix = |a: u8, b: u8| (a as f64 + pct * (b as f64 - a as f64)).round() as i32;
        self.color
            .set([mix(from[0], to[0]), mix(from[1], to[1]), mix(from[2], to[2])]);
        Ok(())
    }

    /// The raw current progress value.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Current progress normalized to [0, 1] over the configured range.
    pub fn progress_percentage(&self) -> f64 {
        (self.progress - self.start) / (self.end - self.start)
    }

    /// The configured (start, end) range.
    pub fn range(&self) -> (f64, f64) {
        (self.start, self.end)
    }

    /// The derived segment boundaries. Empty before `init`.
    pub fn breakpoints(&self) -> &[f64] {
        &self.breakpoints
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    /// The current color as a CSS `rgb(r,g,b)` string.
    pub fn color_css(&self) -> String {
        self.color.to_css()
    }

    /// The current color as a CSS `rgba(r,g,b,opacity)` string.
    pub fn color_css_alpha(&self, opacity: f64) -> String {
        self.color.to_css_alpha(opacity)
    }

    // Linear scan from the low end, first match wins: a value sitting exactly
    // on an interior breakpoint lands in the lower of its two segments. Kept
    // deliberately; downstream gradients depend on this tie-break.
    fn segment_for(&self, value: f64) -> (usize, usize) {
        for i in 1..self.breakpoints.len() {
            if value <= self.breakpoints[i] {
                return (i - 1, i);
            }
        }
        (self.breakpoints.len() - 2, self.breakpoints.len() - 1)
    }
}

/// Splits [start, end] into `stop_count - 1` equal-width segments.
///
/// Boundaries are generated by repeated addition, which drifts under floating
/// point and can land one element short or long; the result is corrected to
/// exactly `stop_count` entries with the last forced to exactly `end`.
fn compute_breakpoints(start: f64, end: f64, stop_count: usize) -> Vec<f64> {
    let k = stop_count - 1;
    if k == 0 {
        return vec![start, end];
    }

    let step = (end - start) / k as f64;
    let mut points = Vec::with_capacity(k + 1);
    let mut at = start;
    while at < end {
        points.push(at);
        at += step;
    }

    while points.len() < k + 1 {
        points.push(end);
    }
    points.truncate(k + 1);
    points[k] = end;
    points
}
