use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::browsers::types::BrowserKind;
use crate::input::types::InputSettings;
use crate::vision::types::RetryPolicy;

/// Default target URL reloaded every cycle.
pub const DEFAULT_URL: &str = "https://www.google.co.jp/";

/// Default number of reload cycles (24 cycles of 30 minutes = 12 hours).
pub const DEFAULT_CYCLES: u32 = 24;

/// Default sleep per cycle in seconds (30 minutes).
pub const DEFAULT_SLEEP_SECS: f64 = 60.0 * 30.0;

/// Default polling interval while watching for the challenge image.
pub const DEFAULT_POLL_INTERVAL_SECS: f64 = 5.0;

/// Default pointer click offset from the matched region's top-left corner.
///
/// Lands on the challenge checkbox inside the reference screenshot.
pub const DEFAULT_CLICK_OFFSET: (i32, i32) = (152, 174);

/// Default match confidence for the challenge template.
pub const DEFAULT_CONFIDENCE: f32 = 0.8;

/// Grace period between the last cycle and the power-off request.
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(60);

/// Immutable plan for one run of the reload loop.
#[derive(Debug, Clone)]
pub struct ReloadPlan {
    browser: BrowserKind,
    cycles: u32,
    sleep: Duration,
    url: String,
    shutdown: bool,
}

impl ReloadPlan {
    pub fn new(
        browser: BrowserKind,
        cycles: u32,
        sleep: Duration,
        url: impl Into<String>,
        shutdown: bool,
    ) -> Self {
        Self {
            browser,
            cycles,
            sleep,
            url: url.into(),
            shutdown,
        }
    }

    pub fn browser(&self) -> BrowserKind {
        self.browser
    }

    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    pub fn sleep(&self) -> Duration {
        self.sleep
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn shutdown(&self) -> bool {
        self.shutdown
    }

    /// The timestamp the loop is expected to finish at, given its start.
    pub fn planned_end(&self, start: DateTime<Local>) -> DateTime<Local> {
        let total_ms = self.cycles as f64 * self.sleep.as_secs_f64() * 1000.0;
        start + chrono::Duration::milliseconds(total_ms as i64)
    }
}

/// Settings for the GUI-automation branch of a cycle.
#[derive(Debug, Clone)]
pub struct AutomationPlan {
    template_path: PathBuf,
    confidence: f32,
    poll_interval: Duration,
    retry: RetryPolicy,
    click_offset: (i32, i32),
    input: InputSettings,
}

impl AutomationPlan {
    pub fn new(template_path: impl Into<PathBuf>) -> Self {
        Self {
            template_path: template_path.into(),
            confidence: DEFAULT_CONFIDENCE,
            poll_interval: Duration::from_secs_f64(DEFAULT_POLL_INTERVAL_SECS),
            retry: RetryPolicy::single_attempt(),
            click_offset: DEFAULT_CLICK_OFFSET,
            input: InputSettings::default(),
        }
    }

    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_click_offset(mut self, offset: (i32, i32)) -> Self {
        self.click_offset = offset;
        self
    }

    pub fn with_input(mut self, input: InputSettings) -> Self {
        self.input = input;
        self
    }

    pub fn template_path(&self) -> &Path {
        &self.template_path
    }

    pub fn confidence(&self) -> f32 {
        self.confidence
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub fn retry(&self) -> &RetryPolicy {
        &self.retry
    }

    pub fn click_offset(&self) -> (i32, i32) {
        self.click_offset
    }

    pub fn input(&self) -> InputSettings {
        self.input
    }
}

/// Outcome of a completed reload loop.
#[derive(Debug, Clone, Serialize)]
pub struct ReloadSummary {
    pub cycles_completed: u32,
    pub challenges_dismissed: u32,
    pub started_at: DateTime<Local>,
    pub planned_end: DateTime<Local>,
}
