//! # Dispatch Benchmarks
//!
//! Render occurrences fire for every item and name tag on every frame, so
//! `post` cost on those kinds bounds the client's frame budget.
//!
//! | Path | Target |
//! |------|--------|
//! | `ItemRender`, 1 listener | < 1µs |
//! | `ItemRender`, 32 listeners | < 10µs |
//! | Full chat pipeline | < 10µs |

use std::sync::Arc;
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lsu_bus::{EventBus, HandlerResult, ItemRender, Listener, Priority, RenderListener};
use lsu_features::{FeatureConfig, ManualTimeSource, RecordingChatSink};
use lsu_runtime::{ClientRuntime, RuntimeConfig};

struct Nudge(Priority);

impl RenderListener for Nudge {
    fn on_item_render(&self, event: &mut ItemRender) -> HandlerResult {
        event.transform_mut().translate(0.0, 0.01, 0.0);
        Ok(())
    }
}

impl Listener for Nudge {
    fn is_enabled(&self) -> bool {
        true
    }

    fn priority(&self) -> Priority {
        self.0
    }

    fn as_render(&self) -> Option<&dyn RenderListener> {
        Some(self)
    }
}

fn bench_item_render_fanout(c: &mut Criterion) {
    let mut group = c.benchmark_group("item-render");
    group.measurement_time(Duration::from_secs(5));

    for size in [1_usize, 8, 32] {
        let bus = EventBus::new();
        let listeners: Vec<_> = (0..size)
            .map(|i| Arc::new(Nudge(Priority::ALL[i % Priority::ALL.len()])))
            .collect();
        for listener in &listeners {
            bus.register(listener);
        }

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("post", size), &bus, |b, bus| {
            b.iter(|| {
                let mut event = ItemRender::new(black_box(7), true);
                black_box(bus.post(&mut event))
            })
        });
    }

    group.finish();
}

fn bench_chat_pipeline(c: &mut Criterion) {
    let features = FeatureConfig {
        enable_pm_format: true,
        disable_chat_tags: true,
        ..FeatureConfig::default()
    };
    let Ok(runtime) = ClientRuntime::with_ports(
        RuntimeConfig::default(),
        features,
        Arc::new(ManualTimeSource::new(0)),
        Arc::new(RecordingChatSink::new()),
    ) else {
        return;
    };

    c.bench_function("chat-pipeline/tagged-line", |b| {
        b.iter(|| {
            black_box(
                runtime
                    .chat()
                    .incoming(black_box("[LEGEND+] [No-Life] Player: hello there")),
            )
        })
    });
}

criterion_group!(benches, bench_item_render_fanout, bench_chat_pipeline);
criterion_main!(benches);
