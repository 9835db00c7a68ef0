//! Benchmarks for the UniClubs portal core
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tokio::time::Instant;
use uniclubs::config::UiConfig;
use uniclubs::render::RenderContext;
use uniclubs::store::seed;
use uniclubs::{
    ClubsApi, ComponentRenderer, DataStore, LatencyConfig, MemberDraft, MountPoints, TeamDraft,
    ViewState,
};

fn state_with_teams(count: usize) -> ViewState {
    let mut state = ViewState::new();
    let mut rng = StdRng::seed_from_u64(42);

    for i in 0..count {
        let draft = TeamDraft::named(format!("Team {}", i))
            .stream("CSE")
            .member(MemberDraft::new("Alex").specialty("Robotics"))
            .member(MemberDraft::new("Sam"));
        state.create_team(&draft, &mut rng);
    }
    state
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let renderer = ComponentRenderer::new(Arc::new(MountPoints::full_page()), &UiConfig::default());
    let events = seed::events();

    for size in [10, 100, 1000] {
        let state = state_with_teams(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("render_all_{}", size), |b| {
            b.iter(|| {
                let ctx = RenderContext {
                    state: &state,
                    events: &events,
                    user: None,
                    now: Instant::now(),
                };
                renderer.render_all(black_box(&ctx))
            })
        });
    }

    group.finish();
}

fn bench_view_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("view_state");

    group.bench_function("toggle_club_membership", |b| {
        let mut state = ViewState::new();
        b.iter(|| state.toggle_club_membership(black_box(4)).unwrap())
    });

    group.bench_function("create_team", |b| {
        let mut state = ViewState::empty();
        let mut rng = StdRng::seed_from_u64(7);
        let draft = TeamDraft::named("Bench");
        b.iter(|| state.create_team(black_box(&draft), &mut rng))
    });

    group.finish();
}

fn bench_store(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let mut group = c.benchmark_group("store");

    group.bench_function("join_club_instant", |b| {
        let store = DataStore::new(LatencyConfig::instant());
        b.to_async(&rt)
            .iter(|| async { store.join_club(black_box(1)).await.unwrap() })
    });

    group.bench_function("toggle_rsvp_instant", |b| {
        b.iter_custom(|iters| {
            rt.block_on(async {
                let store = DataStore::new(LatencyConfig::instant());
                let start = std::time::Instant::now();

                for _ in 0..iters {
                    store.toggle_rsvp(2).await.unwrap();
                }

                start.elapsed()
            })
        });
    });

    group.finish();
}

criterion_group!(benches, bench_render, bench_view_state, bench_store);
criterion_main!(benches);
