//! Interactive loop: tick the prompt, redraw when something moved, dispatch
//! one input event per pass.

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::{backend::CrosstermBackend, Terminal};
use respondee::dashboard::RouteHistory;
use respondee::screen::HomeScreen;
use respondee::ui::{draw, ScreenLayout, Theme};
use std::io::Stdout;
use std::time::{Duration, Instant};

use crate::input::{map_event, InputEvent};

/// Poll timeout while nothing animates.
const IDLE_POLL: Duration = Duration::from_millis(250);

pub(crate) fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    screen: &mut HomeScreen<RouteHistory>,
    theme: &Theme,
    frame_interval: Duration,
) -> Result<()> {
    let mut dirty = true;
    let mut layout = None;
    loop {
        let tick = screen.tick(Instant::now());
        if dirty || tick.redraw || tick.presented.is_some() || tick.completed.is_some() {
            layout = Some(draw_frame(terminal, screen, theme)?);
            dirty = false;
        }

        let timeout = if screen.is_animating() {
            frame_interval
        } else {
            IDLE_POLL
        };
        if !event::poll(timeout).context("failed to poll terminal events")? {
            continue;
        }
        let event = event::read().context("failed to read terminal event")?;
        let Some(current) = layout.as_ref() else {
            continue;
        };
        match map_event(&event, current) {
            InputEvent::Quit => return Ok(()),
            InputEvent::Command(command) => {
                if screen.handle(command, Instant::now()) {
                    tracing::debug!(?command, "command applied");
                    dirty = true;
                }
            }
            InputEvent::Redraw => dirty = true,
            InputEvent::Ignored => {}
        }
    }
}

fn draw_frame(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    screen: &HomeScreen<RouteHistory>,
    theme: &Theme,
) -> Result<ScreenLayout> {
    let mut layout = None;
    terminal
        .draw(|frame| layout = Some(draw(frame, screen, theme)))
        .context("failed to draw frame")?;
    layout.context("frame finished without a layout")
}
