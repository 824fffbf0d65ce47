//! Benchmarks for a full add/flush/reset frame cycle.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use skelbatch_core::{BlendMode, Color, RenderTarget, TextureHandle, TextureId};
use skelbatch_render::{BatchPool, Batcher, Flip};
use skelbatch_test_utils::MockTriangleRenderer;

const QUAD: [f32; 8] = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];
const QUAD_INDICES: [u16; 6] = [0, 1, 2, 2, 3, 0];

fn bench_single_texture(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_single_texture");

    for attachments in [10, 100, 1000] {
        group.throughput(Throughput::Elements(attachments as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(attachments),
            &attachments,
            |b, &attachments| {
                let mut batcher = Batcher::new(BatchPool::new(), RenderTarget(0));
                let mut renderer = MockTriangleRenderer::new();
                let texture = TextureHandle::new(TextureId(1));
                b.iter(|| {
                    for _ in 0..attachments {
                        batcher.add(
                            &texture,
                            black_box(&QUAD),
                            &QUAD,
                            &QUAD_INDICES,
                            Color::WHITE,
                            Flip::NONE,
                        );
                    }
                    let stats = batcher.flush(&mut renderer);
                    batcher.reset();
                    renderer.clear();
                    stats
                });
            },
        );
    }

    group.finish();
}

fn bench_texture_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_texture_churn");

    for attachments in [10, 100] {
        group.throughput(Throughput::Elements(attachments as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(attachments),
            &attachments,
            |b, &attachments| {
                let mut batcher = Batcher::new(BatchPool::new(), RenderTarget(0));
                let mut renderer = MockTriangleRenderer::new();
                let textures: Vec<_> = (0..4).map(|i| TextureHandle::new(TextureId(i))).collect();
                b.iter(|| {
                    for i in 0..attachments {
                        if i % 16 == 0 {
                            batcher.add_blend_mode(BlendMode::Additive);
                        }
                        batcher.add(
                            &textures[i % textures.len()],
                            black_box(&QUAD),
                            &QUAD,
                            &QUAD_INDICES,
                            Color::WHITE,
                            Flip::NONE,
                        );
                    }
                    let stats = batcher.flush(&mut renderer);
                    batcher.reset();
                    renderer.clear();
                    stats
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_single_texture, bench_texture_churn);
criterion_main!(benches);
