use campuscal_core::{indicators_for, EventAggregator, IndicatorMemo, InputFingerprint};
use campuscal_domain::{CategoryFilter, EventSchedule, RawCalendarEvent, RawPost};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const CATEGORIES: [&str; 6] =
    ["academic", "institutional", "event", "announcement", "news", "sports"];

fn sample_posts(count: usize) -> Vec<RawPost> {
    (0..count)
        .map(|idx| {
            let day = idx % 28 + 1;
            RawPost::new(
                &format!("Post {idx}"),
                CATEGORIES[idx % CATEGORIES.len()],
                &format!("2024-06-{day:02}T0{}:00:00Z", idx % 10),
            )
            .with_id(&format!("post-{idx}"))
        })
        .collect()
}

fn sample_events(count: usize) -> Vec<RawCalendarEvent> {
    (0..count)
        .map(|idx| {
            let day = idx % 20 + 1;
            let schedule = match idx % 4 {
                0 => EventSchedule::DateRange {
                    start: format!("2024-06-{day:02}"),
                    end: format!("2024-06-{:02}", day + 5),
                },
                1 => EventSchedule::DateRange {
                    start: "2024-01-08".into(),
                    end: "2024-05-31".into(),
                },
                2 => EventSchedule::WeekInMonth {
                    year: Some(2024),
                    month: Some(6),
                    week_of_month: Some(2),
                },
                _ => EventSchedule::on(&format!("2024-06-{day:02}")),
            };
            let category = CATEGORIES[idx % CATEGORIES.len()];
            RawCalendarEvent::new(&format!("Event {idx}"), category, schedule)
                .with_id(&format!("event-{idx}"))
        })
        .collect()
}

fn aggregation_benchmark(c: &mut Criterion) {
    let posts = sample_posts(500);
    let events = sample_events(500);
    let filter = CategoryFilter::taxonomy();
    let aggregator = EventAggregator::default();

    let mut group = c.benchmark_group("aggregation");
    group.sample_size(30).measurement_time(std::time::Duration::from_secs(10));

    group.bench_function("build_index", |b| {
        b.iter(|| aggregator.build(black_box(&posts), black_box(&events), black_box(&filter)));
    });

    group.bench_function("fingerprint_inputs", |b| {
        b.iter(|| {
            InputFingerprint::compute(black_box(&posts), black_box(&events), &filter).unwrap()
        });
    });

    let index = aggregator.build(&posts, &events, &filter);
    let busiest: Vec<_> = index
        .event_index()
        .values()
        .max_by_key(|items| items.len())
        .cloned()
        .unwrap_or_default();

    group.bench_function("indicators_for_day", |b| {
        b.iter(|| indicators_for(black_box(&busiest)));
    });

    group.bench_function("indicators_memoized", |b| {
        let mut memo = IndicatorMemo::new();
        b.iter(|| memo.resolve(black_box(&busiest)).unique_count);
    });

    group.finish();
}

criterion_group!(core_benchmarks, aggregation_benchmark);
criterion_main!(core_benchmarks);
