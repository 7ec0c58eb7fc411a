use async_trait::async_trait;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use roster_core::types::{ItemId, RosterEntry};
use roster_engine::{build_manager, ListModifier};
use roster_provider::{
    AllowAll, MemoryRoster, MutationPrompts, NameRules, NullRemote, RecordingSink,
};
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Prompts that answer instantly and never run dry.
struct ConstPrompts;

#[async_trait]
impl MutationPrompts for ConstPrompts {
    async fn prompt_add(&self) -> String {
        "Bench".to_string()
    }

    async fn prompt_rename(&self, _current: &str) -> String {
        "Bench".to_string()
    }

    async fn confirm_delete(&self, _name: &str) {}
}

fn make_entries(count: usize) -> Vec<RosterEntry> {
    (0..count)
        .map(|i| RosterEntry::new(ItemId::from(i.to_string()), format!("Member {i}")))
        .collect()
}

fn make_modifier(count: usize) -> ListModifier<MemoryRoster> {
    ListModifier::new(
        Arc::new(MemoryRoster::from_entries(make_entries(count))),
        Arc::new(ConstPrompts),
        Arc::new(NameRules::new()),
    )
}

// ---------------------------------------------------------------------------
// Benchmark: modifier rewrites
// ---------------------------------------------------------------------------

fn bench_modifier_add(c: &mut Criterion) {
    use roster_engine::Modify;

    let rt = tokio::runtime::Runtime::new().unwrap();

    let mut group = c.benchmark_group("modifier_add");
    for count in [100, 1_000, 10_000] {
        let modifier = make_modifier(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.to_async(&rt)
                .iter(|| async { black_box(modifier.add_new().await.unwrap()) });
        });
    }
    group.finish();
}

fn bench_modifier_delete(c: &mut Criterion) {
    use roster_engine::Modify;

    let rt = tokio::runtime::Runtime::new().unwrap();

    let mut group = c.benchmark_group("modifier_delete");
    for count in [100, 1_000, 10_000] {
        let modifier = make_modifier(count);
        // Mid-list target: retain scans the whole vector either way.
        let target = RosterEntry::new(ItemId::from((count / 2).to_string()), "Member");
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.to_async(&rt)
                .iter(|| async { black_box(modifier.delete(&target).await) });
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: full pipeline against a null remote
// ---------------------------------------------------------------------------

fn bench_pipeline_add(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    let mut group = c.benchmark_group("pipeline_add");
    for count in [100, 1_000, 10_000] {
        let manager = build_manager(
            Arc::new(NullRemote::<RosterEntry>::new()),
            Arc::new(MemoryRoster::from_entries(make_entries(count))),
            Arc::new(AllowAll),
            Arc::new(ConstPrompts),
            Arc::new(NameRules::new()),
            Arc::new(RecordingSink::new()),
        );
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.to_async(&rt)
                .iter(|| async { black_box(manager.add_new().await) });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_modifier_add,
    bench_modifier_delete,
    bench_pipeline_add,
);
criterion_main!(benches);
