//! Respondee dashboard entrypoint.
//!
//! Resolves configuration, mounts the home screen, then either prints one
//! frame (`--snapshot`) or runs the interactive terminal loop until quit.

mod event_loop;
mod input;

use anyhow::{bail, Context, Result};
use clap::Parser;
use ratatui::{backend::CrosstermBackend, Terminal};
use respondee::config::{load_user_config, AppConfig, ResolvedConfig, SnapshotFormat};
use respondee::dashboard::RouteHistory;
use respondee::screen::{HomeScreen, ScreenCommand};
use respondee::telemetry::init_tracing;
use respondee::terminal_restore::TerminalRestoreGuard;
use respondee::ui::render_text;
use std::io;
use std::time::{Duration, Instant};

/// Synthetic frame step used to settle `--snapshot-dismissed`.
const SNAPSHOT_STEP: Duration = Duration::from_millis(16);
const SNAPSHOT_SETTLE_LIMIT: Duration = Duration::from_secs(30);

fn main() -> Result<()> {
    let config = AppConfig::parse();
    init_tracing(&config);

    let user_config = load_user_config(config.config.as_deref())?;
    let resolved = config.resolve(&user_config)?;
    tracing::info!(
        profile = %resolved.profile_name,
        banner_fade_ms = resolved.tuning.banner_fade.as_millis() as u64,
        bubble_exit_ms = resolved.tuning.bubble_exit.as_millis() as u64,
        frame_ms = resolved.frame_interval.as_millis() as u64,
        snapshot = config.snapshot,
        "respondee starting"
    );

    let mut screen = HomeScreen::mount(RouteHistory::new(), resolved.screen_options());
    if config.snapshot {
        let result = print_snapshot(&config, &resolved, &mut screen);
        screen.unmount();
        return result;
    }

    let result = run_interactive(&resolved, &mut screen);
    let history = screen.unmount();
    result?;
    if let Some(route) = history.last() {
        println!("last route: {route}");
    }
    Ok(())
}

fn print_snapshot(
    config: &AppConfig,
    resolved: &ResolvedConfig,
    screen: &mut HomeScreen<RouteHistory>,
) -> Result<()> {
    if config.snapshot_dismissed {
        settle_dismissed(screen)?;
    }
    match config.snapshot_format {
        SnapshotFormat::Text => {
            let text = render_text(screen, &resolved.theme(), config.width, config.height)?;
            print!("{text}");
        }
        SnapshotFormat::Json => {
            let json = serde_json::to_string_pretty(&screen.snapshot())
                .context("failed to encode snapshot")?;
            println!("{json}");
        }
    }
    Ok(())
}

/// Dismiss the banner and drive the transition to rest on a synthetic clock.
fn settle_dismissed(screen: &mut HomeScreen<RouteHistory>) -> Result<()> {
    let start = Instant::now();
    screen.handle(ScreenCommand::DismissBanner, start);
    let mut now = start;
    while screen.is_animating() {
        now += SNAPSHOT_STEP;
        if now - start > SNAPSHOT_SETTLE_LIMIT {
            bail!("dismiss transition did not settle");
        }
        screen.tick(now);
    }
    Ok(())
}

fn run_interactive(resolved: &ResolvedConfig, screen: &mut HomeScreen<RouteHistory>) -> Result<()> {
    let guard = TerminalRestoreGuard::new();
    let mut stdout = io::stdout();
    guard
        .enter_dashboard_mode(&mut stdout)
        .context("failed to prepare terminal")?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(stdout)).context("failed to init terminal backend")?;

    let result = event_loop::run(
        &mut terminal,
        screen,
        &resolved.theme(),
        resolved.frame_interval,
    );
    guard.restore();
    result
}
