//! Final score reporting
//!
//! When the game is completed the host sends one report to the high score
//! backend. Reporting is fire-and-forget: failures are logged and dropped,
//! and nothing here can affect the simulation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Backend endpoint for new scores
pub const HIGHSCORES_ENDPOINT: &str = "/api/highscores";

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("JSON error: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("HTTP status {0}")]
    Status(u16),
}

/// Body of the score report request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub name: String,
    pub score: u32,
    pub level: u32,
}

impl ScoreReport {
    pub fn new(name: impl Into<String>, score: u32, level: u32) -> Self {
        Self {
            name: name.into(),
            score,
            level,
        }
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Somewhere to send a finished game's score
pub trait ScoreSink {
    /// Start sending a report. Implementations must not block the caller.
    fn submit(&mut self, report: &ScoreReport) -> Result<(), ReportError>;
}

/// Submit a report, swallowing any failure
pub fn report_final_score(sink: &mut dyn ScoreSink, report: &ScoreReport) {
    match sink.submit(report) {
        Ok(()) => log::info!(
            "Score report sent: {} scored {} on level {}",
            report.name,
            report.score,
            report.level
        ),
        Err(e) => log::error!("Failed to send high score: {}", e),
    }
}

/// Native sink: logs the payload instead of sending it
#[derive(Debug, Default)]
pub struct LogReporter;

impl ScoreSink for LogReporter {
    fn submit(&mut self, report: &ScoreReport) -> Result<(), ReportError> {
        let body = report.to_json()?;
        log::info!("POST {} {}", HIGHSCORES_ENDPOINT, body);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::FetchReporter;

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, Response};

    use super::{HIGHSCORES_ENDPOINT, ReportError, ScoreReport, ScoreSink};

    /// Browser sink: POSTs the report with `fetch` on a detached future
    #[derive(Debug, Default)]
    pub struct FetchReporter;

    impl ScoreSink for FetchReporter {
        fn submit(&mut self, report: &ScoreReport) -> Result<(), ReportError> {
            let body = report.to_json()?;
            let init = RequestInit::new();
            init.set_method("POST");
            init.set_body(&JsValue::from_str(&body));

            let request = Request::new_with_str_and_init(HIGHSCORES_ENDPOINT, &init)
                .map_err(|e| ReportError::Transport(format!("{:?}", e)))?;
            request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(|e| ReportError::Transport(format!("{:?}", e)))?;

            let window = web_sys::window()
                .ok_or_else(|| ReportError::Transport("no window".to_string()))?;
            let promise = window.fetch_with_request(&request);

            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = await_response(promise).await {
                    log::error!("Failed to send high score: {}", e);
                }
            });
            Ok(())
        }
    }

    async fn await_response(promise: js_sys::Promise) -> Result<(), ReportError> {
        let value = JsFuture::from(promise)
            .await
            .map_err(|e| ReportError::Transport(format!("{:?}", e)))?;
        let response: Response = value
            .dyn_into()
            .map_err(|_| ReportError::Transport("not a Response".to_string()))?;
        if !response.ok() {
            return Err(ReportError::Status(response.status()));
        }
        Ok(())
    }
}
