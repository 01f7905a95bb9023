use std::time::Instant;

use predictor::{HouseholdInputs, ModelHandle, Prediction, PredictorError};

const MAX_LOGS: usize = 200;

/// A single entry shown in the events panel.
#[derive(Debug, Clone)]
pub struct LogLine {
    pub level: &'static str,
    pub message: String,
}

/// Outcome of the most recent predict action.
pub type Outcome = Result<Prediction, String>;

/// Everything that lives from model load until exit: the shared model, the
/// last outcome and the event history.
#[derive(Debug, Clone)]
pub struct Session {
    model: ModelHandle,
    started_at: Instant,
    predictions: usize,
    outcome: Option<Outcome>,
    logs: Vec<LogLine>,
}

impl Session {
    /// Creates a new `Session` around a provisioned model.
    pub fn new(model: ModelHandle) -> Self {
        let logs = vec![LogLine {
            level: "INFO",
            message: format!("model ready: {}", model.summary()),
        }];

        Self {
            model,
            started_at: Instant::now(),
            predictions: 0,
            outcome: None,
            logs,
        }
    }

    pub fn model_summary(&self) -> String {
        self.model.summary()
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub fn logs(&self) -> &[LogLine] {
        &self.logs
    }

    pub fn predictions(&self) -> usize {
        self.predictions
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    /// Runs one prediction from the parsed form and records its outcome.
    pub fn submit(&mut self, inputs: Result<HouseholdInputs, PredictorError>) {
        let outcome = inputs.and_then(|inputs| predictor::predict(self.model.as_ref(), &inputs));

        match &outcome {
            Ok(prediction) => {
                self.predictions += 1;
                log::info!("{prediction}");
                self.push_log("INFO", prediction.to_string());
                for advisory in &prediction.advisories {
                    self.push_log("TIP", advisory.message().to_string());
                }
            }
            Err(e) => {
                log::warn!("prediction rejected: {e}");
                self.push_log("ERROR", e.to_string());
            }
        }

        self.outcome = Some(outcome.map_err(|e| e.to_string()));
    }

    /// Forgets the last outcome, e.g. after the form was reset.
    pub fn clear_outcome(&mut self) {
        self.outcome = None;
    }

    fn push_log(&mut self, level: &'static str, message: String) {
        self.logs.push(LogLine { level, message });
        if self.logs.len() > MAX_LOGS {
            let drain = self.logs.len() - MAX_LOGS;
            self.logs.drain(0..drain);
        }
    }
}
