use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};

use crate::app::Gauge;
use crate::dial;

const BAR_WIDTH: u16 = 40;

/// Number of filled bar cells for a fill fraction in [0, 1].
fn filled_cells(pct: f64, width: u16) -> u16 {
    (pct.clamp(0.0, 1.0) * width as f64).round() as u16
}

/// Draws the full frame: header, then one bar plus a dial readout per gauge.
pub fn draw(out: &mut impl Write, gauges: &[Gauge], selected: usize, auto: bool) -> io::Result<()> {
    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
    queue!(out, Print("corona gauge demo"))?;
    queue!(
        out,
        MoveTo(0, 1),
        Print(format!(
            "[space] auto-updates: {}   [tab] select   [arrows] nudge   [q] quit",
            if auto { "on " } else { "off" }
        ))
    )?;

    let circumference = dial::circumference();
    let mut row = 3u16;
    for (idx, gauge) in gauges.iter().enumerate() {
        let engine = gauge.engine();
        let pct = engine.progress_percentage();
        let [r, g, b] = engine.color().rgb();
        let filled = filled_cells(pct, BAR_WIDTH);

        let marker = if idx == selected { '>' } else { ' ' };
        queue!(
            out,
            MoveTo(0, row),
            Print(format!("{} {:<8} ", marker, gauge.label())),
            SetForegroundColor(Color::Rgb { r, g, b }),
            Print("█".repeat(filled as usize)),
            ResetColor,
            Print("░".repeat((BAR_WIDTH - filled) as usize)),
            Print(format!(" {:>5.1}%", pct * 100.0))
        )?;
        queue!(
            out,
            MoveTo(2, row + 1),
            Print(format!(
                "{}  angle {:.1}  dash-offset {:.1}/{:.1}",
                engine.color_css(),
                dial::needle_angle(pct),
                dial::dash_offset(pct, circumference),
                circumference
            ))
        )?;
        row += 3;
    }
    out.flush()
}
