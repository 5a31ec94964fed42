use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use events::{DomainEvent, Event, EventDispatcher, EventPayload, FnHandler};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct OrderPlaced {
    order_id: String,
    total_cents: i64,
}

impl EventPayload for OrderPlaced {
    const EVENT_TYPE: &'static str = "OrderPlacedEvent";
}

fn dispatcher_with(handlers: usize) -> EventDispatcher {
    let dispatcher = EventDispatcher::new();
    for _ in 0..handlers {
        dispatcher.register_for::<OrderPlaced>(Arc::new(FnHandler::new(
            "noop",
            |event: &dyn DomainEvent| {
                std::hint::black_box(event.event_type());
                Ok(())
            },
        )));
    }
    dispatcher
}

fn bench_notify_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("events/notify");
    let event = Event::new(OrderPlaced {
        order_id: "1".to_string(),
        total_cents: 2500,
    });

    for handlers in [0, 1, 10, 100] {
        let dispatcher = dispatcher_with(handlers);
        group.bench_with_input(BenchmarkId::from_parameter(handlers), &handlers, |b, _| {
            b.iter(|| dispatcher.notify(&event));
        });
    }
    group.finish();
}

fn bench_register_unregister(c: &mut Criterion) {
    let dispatcher = dispatcher_with(10);
    let handler: Arc<dyn events::EventHandler> =
        Arc::new(FnHandler::new("churn", |_event: &dyn DomainEvent| Ok(())));

    c.bench_function("events/register_unregister", |b| {
        b.iter(|| {
            dispatcher.register("OrderPlacedEvent", Arc::clone(&handler));
            dispatcher.unregister("OrderPlacedEvent", &handler);
        });
    });
}

criterion_group!(benches, bench_notify_fan_out, bench_register_unregister);
criterion_main!(benches);
