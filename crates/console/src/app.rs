use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Context;
use corona_core::ProgressEngine;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use rand::Rng;

use crate::render;

/// Step used by the manual nudge keys, in progress units.
const NUDGE_STEP: f64 = 5.0;

/// One labeled gauge and the engine that colors it.
pub struct Gauge {
    label: String,
    engine: ProgressEngine,
}

impl Gauge {
    pub fn new(label: String, engine: ProgressEngine) -> Self {
        Self { label, engine }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn engine(&self) -> &ProgressEngine {
        &self.engine
    }

    /// Moves the gauge by `delta`, clamped to the engine's range so the
    /// update can never trip the range check.
    fn nudge(&mut self, delta: f64) {
        let (start, end) = self.engine.range();
        let target = (self.engine.progress() + delta).clamp(start, end);
        if let Err(err) = self.engine.set_progress(target) {
            log::warn!("nudge on '{}' rejected: {}", self.label, err);
        }
    }

    fn randomize(&mut self, rng: &mut impl Rng) {
        let (start, end) = self.engine.range();
        let target = rng.random_range(start..=end);
        if let Err(err) = self.engine.set_progress(target) {
            log::warn!("randomized update on '{}' rejected: {}", self.label, err);
        }
    }
}

/// Single-threaded draw/input/tick loop.
///
/// Randomized updates run every `tick` while the auto flag is set. Space
/// toggles the flag, tab selects a gauge, the arrow keys nudge the selection,
/// q or escape quits.
pub fn run(mut gauges: Vec<Gauge>, tick: Duration, mut auto: bool) -> Result<(), anyhow::Error> {
    let mut stdout = io::stdout();
    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let result = event_loop(&mut stdout, &mut gauges, tick, &mut auto);

    execute!(stdout, Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn event_loop(
    out: &mut impl Write,
    gauges: &mut [Gauge],
    tick: Duration,
    auto: &mut bool,
) -> Result<(), anyhow::Error> {
    let mut rng = rand::rng();
    let mut selected = 0usize;
    let mut last_tick = Instant::now();

    loop {
        render::draw(out, gauges, selected, *auto)?;

        let budget = tick.saturating_sub(last_tick.elapsed());
        if event::poll(budget)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char(' ') => {
                        *auto = !*auto;
                        log::debug!("auto-updates {}", if *auto { "on" } else { "off" });
                    }
                    KeyCode::Tab => {
                        if !gauges.is_empty() {
                            selected = (selected + 1) % gauges.len();
                        }
                    }
                    KeyCode::Left | KeyCode::Down => {
                        if let Some(gauge) = gauges.get_mut(selected) {
                            gauge.nudge(-NUDGE_STEP);
                        }
                    }
                    KeyCode::Right | KeyCode::Up => {
                        if let Some(gauge) = gauges.get_mut(selected) {
                            gauge.nudge(NUDGE_STEP);
                        }
                    }
                    _ => {}
                }
            }
        }

        if last_tick.elapsed() >= tick {
            if *auto {
                for gauge in gauges.iter_mut() {
                    gauge.randomize(&mut rng);
                }
            }
            last_tick = Instant::now();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use corona_core::{stops, Color, ProgressEngine};

    use super::*;

    fn gauge() -> Gauge {
        let mut engine =
            ProgressEngine::new(Color::default(), stops::CHARGE.to_vec(), None).unwrap();
        engine.init();
        Gauge::new("Charge".to_string(), engine)
    }

    #[test]
    fn test_nudge_clamps_at_range_edges() {
        let mut gauge = gauge();
        gauge.nudge(-NUDGE_STEP);
        assert_eq!(gauge.engine().progress(), 0.0);

        for _ in 0..30 {
            gauge.nudge(NUDGE_STEP);
        }
        assert_eq!(gauge.engine().progress(), 100.0);
    }

    #[test]
    fn test_randomize_stays_in_range() {
        let mut gauge = gauge();
        let mut rng = rand::rng();
        for _ in 0..100 {
            gauge.randomize(&mut rng);
            let value = gauge.engine().progress();
            assert!((0.0..=100.0).contains(&value));
        }
    }
}
