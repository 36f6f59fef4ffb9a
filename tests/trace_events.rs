// tests/trace_events.rs
//! Tracing events emitted by the library

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tinygeo::prelude::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;

/// Counts TRACE events from this crate.
struct TraceCounter(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for TraceCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        if *meta.level() == Level::TRACE && meta.target().starts_with("tinygeo") {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

fn count_trace_events<F: FnOnce()>(f: F) -> usize {
    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(TraceCounter(Arc::clone(&count)));
    tracing::subscriber::with_default(subscriber, f);
    count.load(Ordering::SeqCst)
}

#[test]
fn test_degenerate_normalization_emits_trace_event() {
    let events = count_trace_events(|| {
        let v: Vector3<f32> = Vector::splat(1e-10);
        assert_eq!(v.normalized(), Vector::zero());
    });
    assert_eq!(events, 1);
}

#[test]
fn test_in_place_normalize_of_zero_emits_trace_event() {
    let events = count_trace_events(|| {
        let mut v: Vector2<f64> = Vector::zero();
        v.normalize();
        assert_eq!(v, Vector::zero());
    });
    assert_eq!(events, 1);
}

#[test]
fn test_regular_normalization_is_silent() {
    let events = count_trace_events(|| {
        let v: Vector3<f64> = Vector::new([3.0, 0.0, 4.0]);
        assert!((v.normalized().norm() - 1.0).abs() < 1e-12);
    });
    assert_eq!(events, 0);
}
