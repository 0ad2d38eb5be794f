// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the notification lifecycle.
//!
//! Measures the performance of:
//! - Showing and dismissing alerts on a document
//! - Expiring a burst of alerts in one tick
//! - Serializing a page full of alerts

use criterion::{criterion_group, criterion_main, Criterion};
use jobmatch_alerts::notifications::{Manager, Notification, Severity};
use jobmatch_alerts::surface::{Document, RenderSurface};
use std::hint::black_box;
use std::time::Duration;
use tokio::time::Instant;

const BURST: usize = 100;

fn bench_show_and_dismiss(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_churn");

    group.bench_function("show_then_dismiss", |b| {
        b.iter(|| {
            let mut manager = Manager::new(Document::default());
            let ids: Vec<_> = (0..BURST)
                .map(|i| manager.notify(format!("alert {i}"), Severity::Info, Duration::from_secs(5)))
                .collect();
            for id in ids.into_iter().rev() {
                manager.dismiss(id);
            }
            black_box(&manager);
        });
    });

    group.bench_function("expire_burst", |b| {
        b.iter(|| {
            let mut manager = Manager::new(Document::default());
            let start = Instant::now();
            for i in 0..BURST {
                let duration = Duration::from_millis(100 + i as u64);
                manager.push(Notification::new(Severity::Success, "done", duration).created(start));
            }
            black_box(manager.tick_at(start + Duration::from_secs(1)));
        });
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_render");

    let mut document = Document::default();
    for (i, severity) in Severity::ALL.iter().cycle().take(BURST).enumerate() {
        document.append(&Notification::new(
            *severity,
            format!("<b>alert</b> number {i}"),
            Duration::ZERO,
        ));
    }

    group.bench_function("to_html", |b| {
        b.iter(|| black_box(document.to_html()));
    });

    group.finish();
}

criterion_group!(benches, bench_show_and_dismiss, bench_render);
criterion_main!(benches);
