use chrono::Local;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use tft_display::core::input::{ButtonSource, InputError, RawLevels};
use tft_display::core::market::{MarketDataProvider, MarketError, MarketSeries};
use tft_display::core::stats::{StatsError, StatsReading, StatsSource};
use tft_display::{
    DisplayConfig, HandlerKind, LogRenderer, TickContext, ViewportLimits, ViewportState,
    build_dispatcher, step_viewport,
};

struct Untouched;

impl ButtonSource for Untouched {
    fn read_levels(&mut self) -> Result<RawLevels, InputError> {
        Ok(RawLevels::default())
    }
}

#[derive(Clone)]
struct FixedStats;

impl StatsSource for FixedStats {
    fn sample(&mut self) -> Result<StatsReading, StatsError> {
        Ok(StatsReading {
            cpu_percent: vec![10.0, 20.0, 30.0, 40.0],
            mem_percent: 50.0,
            cpu_temp_celsius: Some(45.0),
        })
    }
}

#[derive(Clone)]
struct Offline;

impl MarketDataProvider for Offline {
    fn fetch(&mut self, _symbols: &[String]) -> Result<Vec<MarketSeries>, MarketError> {
        Err(MarketError::Unavailable {
            reason: "bench".to_string(),
        })
    }
}

fn bench_viewport_step(c: &mut Criterion) {
    let limits = ViewportLimits::default();
    let mut state = ViewportState::centered_in(&limits);

    c.bench_function("viewport_step", |b| {
        b.iter(|| black_box(step_viewport(&mut state, black_box(&limits))))
    });
}

fn bench_dispatch_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch_tick");

    for kind in [HandlerKind::Fractal, HandlerKind::Stats] {
        let mut config = DisplayConfig::default();
        config.modes.order = vec![kind, HandlerKind::Fill];
        // every tick fires so the handler and renderer are measured
        config.intervals.fractal_secs = 0.0;
        config.intervals.stats_secs = 0.0;
        config.stats.window_secs = 1.0;

        let mut dispatcher =
            match build_dispatcher(&config, Untouched, LogRenderer::new(), FixedStats, Offline) {
                Ok(dispatcher) => dispatcher,
                Err(err) => panic!("bench settings should be valid: {}", err),
            };
        let wall = Local::now();
        let mut now = Duration::ZERO;

        group.bench_function(format!("{:?}", kind).to_lowercase(), |b| {
            b.iter(|| {
                now += Duration::from_millis(1);
                black_box(dispatcher.tick(TickContext { now, wall }))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_viewport_step, bench_dispatch_tick);
criterion_main!(benches);
