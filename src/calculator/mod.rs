//! Calculator application state
//!
//! Holds everything the form needs between events: the two raw fields, the
//! latest result, chart visibility and a transient notice. Updates are plain
//! methods; the caller owns the clock and passes `now` in, so a renderer can
//! drive dismissal from whatever timer it has.

mod notice;

pub use notice::{Notice, NoticeKind, NOTICE_TIMEOUT_MS};

use crate::error::ExportError;
use crate::export::to_csv_string;
use crate::input::{accept_growth_rate_entry, project_raw, MAX_GROWTH_RATE, MIN_GROWTH_RATE};
use crate::projection::ProjectionResult;
use chrono::{DateTime, Utc};
use log::debug;

/// Message posted after a successful calculation
pub const SUCCESS_MESSAGE: &str = "Projections calculated successfully!";

/// Form and result state for one calculator
#[derive(Debug, Clone, Default)]
pub struct CalculatorState {
    current_revenue: String,
    growth_rate: String,
    result: Option<ProjectionResult>,
    show_chart: bool,
    notice: Option<Notice>,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_revenue(&self) -> &str {
        &self.current_revenue
    }

    pub fn growth_rate(&self) -> &str {
        &self.growth_rate
    }

    pub fn result(&self) -> Option<&ProjectionResult> {
        self.result.as_ref()
    }

    pub fn show_chart(&self) -> bool {
        self.show_chart
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn set_current_revenue(&mut self, raw: impl Into<String>) {
        self.current_revenue = raw.into();
    }

    /// Store a typed growth rate if it is blank or within 0-100%.
    /// Returns false and keeps the previous value otherwise.
    pub fn set_growth_rate(&mut self, raw: impl Into<String>) -> bool {
        let raw = raw.into();
        if !accept_growth_rate_entry(&raw) {
            debug!("rejected growth rate entry {:?}", raw);
            return false;
        }
        self.growth_rate = raw;
        true
    }

    /// Store a growth rate picked on the slider
    pub fn set_growth_rate_from_slider(&mut self, value: f64) {
        let value = if value.is_nan() { MIN_GROWTH_RATE } else { value.clamp(MIN_GROWTH_RATE, MAX_GROWTH_RATE) };
        self.growth_rate = value.to_string();
    }

    /// Run the projection for the current fields
    ///
    /// Any previous result, chart and notice are cleared first, so a failed
    /// calculation never leaves stale figures on screen.
    pub fn calculate(&mut self, now: DateTime<Utc>) {
        self.result = None;
        self.show_chart = false;
        self.notice = None;

        match project_raw(&self.current_revenue, &self.growth_rate) {
            Ok(result) => {
                self.result = Some(result);
                self.show_chart = true;
                self.post(Notice::success(SUCCESS_MESSAGE, now));
            }
            Err(e) => {
                self.post(Notice::error(e.to_string(), now));
            }
        }
    }

    pub fn toggle_chart(&mut self) {
        self.show_chart = !self.show_chart;
    }

    /// Clear the notice once its display time has elapsed.
    /// Returns true if a notice was dismissed.
    pub fn dismiss_expired(&mut self, now: DateTime<Utc>) -> bool {
        match &self.notice {
            Some(notice) if notice.is_expired(now) => {
                self.notice = None;
                true
            }
            _ => false,
        }
    }

    /// Serialize the current projections to CSV
    pub fn export_csv(&self) -> Result<String, ExportError> {
        let result = self.result.as_ref().ok_or(ExportError::NoProjections)?;
        to_csv_string(result)
    }

    // Replacing the notice restarts its timer
    fn post(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }
}
