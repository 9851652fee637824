use criterion::{black_box, criterion_group, criterion_main, Criterion};
use survivor_core::{Vec2, WorldInfo};
use survivor_nav::SpatialMemory;

fn bench_memory(c: &mut Criterion) {
    let world = WorldInfo::new(Vec2::ZERO, Vec2::new(500.0, 500.0));

    let mut group = c.benchmark_group("survivor-nav/memory");

    group.bench_function("explore_full_grid", |b| {
        b.iter(|| {
            let mut memory = SpatialMemory::new(15, 15, world);
            memory.update(0.016, Vec2::ZERO);
            while let Some(target) = memory.next_free_cell_position() {
                memory.update(0.016, target);
            }
            black_box(memory.cells().len());
        })
    });

    let mut memory = SpatialMemory::new(15, 15, world);
    for i in 0..64 {
        let angle = i as f32 * 0.7;
        memory.add_house(Vec2::from_angle(angle) * (10.0 + i as f32 * 3.0));
    }
    group.bench_function("closest_available_house", |b| {
        b.iter(|| black_box(memory.closest_available_house(black_box(Vec2::new(12.0, -40.0)))))
    });

    group.finish();
}

criterion_group!(benches, bench_memory);
criterion_main!(benches);
