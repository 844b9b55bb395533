use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hero_scatter::entities::{CanvasSpec, PlanInput, SpriteSize, VariationParams};
use scatter_planner::opt::plan;

criterion_main!(benches);
criterion_group!(benches, plan_bench);

const N_SPRITES: [usize; 4] = [5, 20, 50, 100];

fn create_input(n_sprites: usize) -> PlanInput {
    let sprites = (0..n_sprites)
        .map(|i| {
            let side = 200 + (i as u32 * 37) % 300;
            SpriteSize::try_new(side, side * 3 / 4).unwrap()
        })
        .collect();
    PlanInput::new(
        CanvasSpec::try_new(1440, 720).unwrap(),
        sprites,
        VariationParams::try_new(3, 15, 10).unwrap(),
        Some(0),
    )
}

fn plan_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_bench");
    for n_sprites in N_SPRITES {
        let input = create_input(n_sprites);
        group.bench_with_input(BenchmarkId::from_parameter(n_sprites), &input, |b, input| {
            b.iter(|| plan(black_box(input)).unwrap())
        });
    }
    group.finish();
}
