use crate::core::models::mapping::BeadType;

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Validation,
    Mapping,
    Database,
    Resolution,
    Conversion,
    Output,
}

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::Validation => "Validating inputs",
            Stage::Mapping => "Reading bead type mapping",
            Stage::Database => "Loading parameter database",
            Stage::Resolution => "Resolving pair coefficients",
            Stage::Conversion => "Converting units",
            Stage::Output => "Writing pair coefficients",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Progress {
    StageStart { stage: Stage },
    StageFinish { stage: Stage },

    PairsStart { total: u64 },
    PairResolved { type_a: BeadType, type_b: BeadType },
    PairsFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }

    /// Runs `f` between a `StageStart` and a `StageFinish` event.
    ///
    /// `StageFinish` is only reported when `f` succeeds.
    pub fn stage<T, E>(&self, stage: Stage, f: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
        self.report(Progress::StageStart { stage });
        let value = f()?;
        self.report(Progress::StageFinish { stage });
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recording_reporter() -> (ProgressReporter<'static>, Arc<Mutex<Vec<String>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let reporter = ProgressReporter::with_callback(Box::new(move |event| {
            sink.lock().unwrap().push(format!("{:?}", event));
        }));
        (reporter, events)
    }

    #[test]
    fn reporter_without_callback_is_silent() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::Message("ignored".to_string()));
        let value: Result<u8, ()> = reporter.stage(Stage::Validation, || Ok(3));
        assert_eq!(value, Ok(3));
    }

    #[test]
    fn stage_reports_start_and_finish_on_success() {
        let (reporter, events) = recording_reporter();
        let result: Result<(), ()> = reporter.stage(Stage::Mapping, || Ok(()));
        assert!(result.is_ok());

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert!(events[0].contains("StageStart"));
        assert!(events[1].contains("StageFinish"));
    }

    #[test]
    fn stage_skips_finish_on_error() {
        let (reporter, events) = recording_reporter();
        let result: Result<(), &str> = reporter.stage(Stage::Database, || Err("boom"));
        assert_eq!(result, Err("boom"));

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert!(events[0].contains("Database"));
    }
}
