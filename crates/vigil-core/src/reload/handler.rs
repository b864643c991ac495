//! The reload/poll/click loop.
//!
//! Strictly sequential: every cycle opens the URL, then either sleeps the
//! whole budget or polls it away in fixed intervals, clicking the challenge
//! prompt whenever it shows up on screen.

use std::thread;
use std::time::{Duration, Instant};

use chrono::Local;
use image::GrayImage;
use rand::Rng;
use tracing::info;

use super::errors::ReloadError;
use super::types::{AutomationPlan, ReloadPlan, ReloadSummary, SHUTDOWN_GRACE};
use crate::browsers::errors::BrowserError;
use crate::browsers::registry;
use crate::browsers::traits::BrowserBackend;
use crate::host;
use crate::input::handler::Pointer;
use crate::vision::handler as vision_ops;
use crate::vision::types::MatchRegion;

/// Run the reload loop with the browser named in the plan.
///
/// `on_cycle` is invoked with (cycle, cycles) right after each reload, so
/// callers can surface progress however they present output.
pub fn run(
    plan: &ReloadPlan,
    automation: Option<&AutomationPlan>,
    on_cycle: impl FnMut(u32, u32),
) -> Result<ReloadSummary, ReloadError> {
    let backend = registry::get_browser_by_kind(plan.browser()).ok_or_else(|| {
        // The registry covers every BrowserKind; this only trips if a new
        // kind is added without a backend.
        BrowserError::UnsupportedPlatform {
            browser: plan.browser().to_string(),
            os: std::env::consts::OS,
        }
    })?;

    run_with_backend(plan, backend, automation, on_cycle)
}

/// Run the reload loop against an explicit backend.
pub fn run_with_backend(
    plan: &ReloadPlan,
    backend: &dyn BrowserBackend,
    automation: Option<&AutomationPlan>,
    mut on_cycle: impl FnMut(u32, u32),
) -> Result<ReloadSummary, ReloadError> {
    // Template problems are surfaced before the first cycle, not mid-loop.
    let template = automation
        .map(|auto| vision_ops::load_template(auto.template_path()))
        .transpose()?;

    let started_at = Local::now();
    let planned_end = plan.planned_end(started_at);

    info!(
        event = "core.reload.loop_started",
        browser = backend.name(),
        cycles = plan.cycles(),
        sleep_secs = plan.sleep().as_secs_f64(),
        url = plan.url(),
        gui_auto = automation.is_some(),
        shutdown = plan.shutdown(),
        started_at = %started_at,
        planned_end = %planned_end
    );

    let mut challenges_dismissed = 0;
    for cycle in 1..=plan.cycles() {
        backend.open_url(plan.url())?;
        info!(
            event = "core.reload.cycle_started",
            cycle,
            cycles = plan.cycles(),
            now = %Local::now()
        );
        on_cycle(cycle, plan.cycles());

        match (automation, &template) {
            (Some(auto), Some(template)) => {
                challenges_dismissed += poll_cycle(plan.sleep(), auto, template)?;
            }
            _ => thread::sleep(plan.sleep()),
        }
    }

    info!(
        event = "core.reload.loop_completed",
        cycles = plan.cycles(),
        challenges_dismissed
    );

    if plan.shutdown() {
        info!(
            event = "core.reload.shutdown_pending",
            grace_secs = SHUTDOWN_GRACE.as_secs()
        );
        thread::sleep(SHUTDOWN_GRACE);
        host::power_off()?;
    }

    Ok(ReloadSummary {
        cycles_completed: plan.cycles(),
        challenges_dismissed,
        started_at,
        planned_end,
    })
}

/// Poll one cycle's time budget away in fixed intervals.
///
/// Each interval ends with a screen lookup; a hit triggers the dismissal
/// sequence. All time spent (sleeping, matching, clicking) counts toward
/// the budget, so a dismissed challenge never extends the cycle.
fn poll_cycle(
    budget: Duration,
    auto: &AutomationPlan,
    template: &GrayImage,
) -> Result<u32, ReloadError> {
    let pointer = Pointer::new(auto.input());
    let mut elapsed = Duration::ZERO;
    let mut dismissed = 0;

    while elapsed < budget {
        let poll_started = Instant::now();

        thread::sleep(auto.poll_interval());

        if let Some(region) =
            vision_ops::locate_on_screen(template, auto.confidence(), auto.retry())
        {
            dismiss_challenge(&region, auto, &pointer)?;
            dismissed += 1;
        }

        elapsed += poll_started.elapsed();
    }

    Ok(dismissed)
}

/// Click the challenge prompt with humanized timing.
///
/// Mirrors how a person would react: a short hesitation, an unhurried
/// pointer motion to a fixed offset inside the prompt, a click, a beat
/// afterwards. Every wait is randomized so the input never looks periodic.
fn dismiss_challenge(
    region: &MatchRegion,
    auto: &AutomationPlan,
    pointer: &Pointer,
) -> Result<(), ReloadError> {
    let mut rng = rand::thread_rng();
    let (offset_x, offset_y) = auto.click_offset();
    let target_x = region.left() + offset_x;
    let target_y = region.top() + offset_y;

    info!(
        event = "core.reload.challenge_found",
        left = region.left(),
        top = region.top(),
        target_x,
        target_y
    );

    thread::sleep(Duration::from_secs_f64(rng.r#gen::<f64>()));

    let motion = Duration::from_secs_f64(3.0 * rng.r#gen::<f64>());
    pointer.glide_to(target_x, target_y, motion)?;

    thread::sleep(Duration::from_secs_f64(rng.r#gen::<f64>()));
    pointer.left_click()?;
    thread::sleep(Duration::from_secs_f64(rng.r#gen::<f64>()));

    info!(
        event = "core.reload.challenge_dismissed",
        target_x,
        target_y
    );
    Ok(())
}
