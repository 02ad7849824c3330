use crate::controllers::data::{Frame, StatsFrame};
use crate::controllers::dispatch::context::TickContext;
use crate::controllers::dispatch::handlers::ModeHandler;
use crate::core::stats::{StatsLog, StatsSource};
use tracing::warn;

/// Samples host stats into a rolling window and plots the whole window.
pub struct StatsHandler<S: StatsSource> {
    source: S,
    log: StatsLog,
}

impl<S: StatsSource> StatsHandler<S> {
    #[must_use]
    pub fn new(source: S, log: StatsLog) -> Self {
        Self { source, log }
    }

    #[must_use]
    pub fn log(&self) -> &StatsLog {
        &self.log
    }
}

impl<S: StatsSource> ModeHandler for StatsHandler<S> {
    fn name(&self) -> &'static str {
        "stats"
    }

    /// A failed sample keeps the previous window on screen; with nothing
    /// recorded yet the frame is skipped.
    fn frame(&mut self, ctx: &TickContext) -> Option<Frame> {
        match self.source.sample() {
            Ok(reading) => self.log.push(ctx.now, reading),
            Err(err) => {
                warn!(error = %err, "stats sample failed, reusing last window");
                self.log.prune(ctx.now);
            }
        }

        if self.log.is_empty() {
            return None;
        }

        Some(Frame::SysStats(StatsFrame {
            time_offsets: self.log.time_offsets(),
            cpu_percent_by_core: self.log.cpu_series_by_core(),
            mem_percent: self.log.mem_series(),
            cpu_temp_celsius: self.log.temp_series(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::StatsHandler;
    use crate::controllers::data::Frame;
    use crate::controllers::dispatch::context::TickContext;
    use crate::controllers::dispatch::handlers::ModeHandler;
    use crate::core::stats::{StatsError, StatsLog, StatsReading, StatsSource};
    use chrono::Local;
    use std::collections::VecDeque;
    use std::path::PathBuf;
    use std::time::Duration;

    struct ScriptedStats(VecDeque<Result<StatsReading, StatsError>>);

    impl StatsSource for ScriptedStats {
        fn sample(&mut self) -> Result<StatsReading, StatsError> {
            self.0.pop_front().unwrap_or_else(|| {
                Err(StatsError::Parse {
                    path: PathBuf::from("/proc/stat"),
                    detail: "script exhausted".to_string(),
                })
            })
        }
    }

    fn reading(mem: f32) -> StatsReading {
        StatsReading {
            cpu_percent: vec![mem / 2.0],
            mem_percent: mem,
            cpu_temp_celsius: Some(50.0),
        }
    }

    fn ctx(secs: u64) -> TickContext {
        TickContext {
            now: Duration::from_secs(secs),
            wall: Local::now(),
        }
    }

    #[test]
    fn successful_samples_accumulate_in_the_frame() {
        let source = ScriptedStats(VecDeque::from(vec![Ok(reading(10.0)), Ok(reading(20.0))]));
        let mut handler = StatsHandler::new(source, StatsLog::default());

        let _ = handler.frame(&ctx(0));
        let Some(Frame::SysStats(frame)) = handler.frame(&ctx(1)) else {
            panic!("expected a stats frame");
        };

        assert_eq!(frame.mem_percent, vec![10.0, 20.0]);
        assert_eq!(frame.time_offsets, vec![-1.0, 0.0]);
        assert_eq!(frame.cpu_percent_by_core, vec![vec![5.0, 10.0]]);
    }

    #[test]
    fn failed_sample_reuses_last_good_window() {
        let source = ScriptedStats(VecDeque::from(vec![Ok(reading(10.0))]));
        let mut handler = StatsHandler::new(source, StatsLog::default());

        let _ = handler.frame(&ctx(0));
        let Some(Frame::SysStats(frame)) = handler.frame(&ctx(1)) else {
            panic!("expected a stats frame");
        };

        assert_eq!(frame.mem_percent, vec![10.0]);
    }

    #[test]
    fn failure_with_empty_window_skips_frame() {
        let mut handler = StatsHandler::new(ScriptedStats(VecDeque::new()), StatsLog::default());

        assert_eq!(handler.frame(&ctx(0)), None);
        assert!(handler.log().is_empty());
    }
}
