//! Drives a batcher through a few frames of a fake skeleton and logs every
//! draw the renderer receives.
//!
//! Run with: `cargo run -p skelbatch-render --example skeleton_frame`

use skelbatch_core::{BlendMode, Color, RenderTarget, TextureHandle, TextureId, logging};
use skelbatch_core::profiling::{ProfilingBackend, init_profiling, new_frame};
use skelbatch_render::{BatchPool, Batcher, Flip};
use skelbatch_test_utils::TracingRenderer;

/// One region attachment: a quad in bone space.
struct Slot {
    texture: TextureHandle,
    offset: [f32; 2],
    blend: BlendMode,
    tint: Color,
}

fn quad(offset: [f32; 2], size: f32) -> [f32; 8] {
    let [x, y] = offset;
    [x, y, x + size, y, x + size, y + size, x, y + size]
}

fn main() {
    logging::init();
    if std::env::args().any(|arg| arg == "--profile") {
        init_profiling(ProfilingBackend::PuffinHttp);
    }

    let body = TextureHandle::new(TextureId(1));
    let effects = TextureHandle::new(TextureId(2));
    let slots = [
        Slot {
            texture: body.clone(),
            offset: [0.0, 0.0],
            blend: BlendMode::Normal,
            tint: Color::WHITE,
        },
        Slot {
            texture: body.clone(),
            offset: [16.0, 0.0],
            blend: BlendMode::Normal,
            tint: Color::WHITE,
        },
        Slot {
            texture: body,
            offset: [32.0, 0.0],
            blend: BlendMode::Normal,
            tint: Color::from_hex(0xFFD0A0),
        },
        Slot {
            texture: effects.clone(),
            offset: [8.0, 24.0],
            blend: BlendMode::Additive,
            tint: Color::rgba(1.0, 1.0, 1.0, 0.5),
        },
        Slot {
            texture: effects,
            offset: [24.0, 24.0],
            blend: BlendMode::Additive,
            tint: Color::rgba(1.0, 1.0, 1.0, 0.5),
        },
    ];

    let uvs = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];
    let indices = [0, 1, 2, 2, 3, 0];

    let pool = BatchPool::new();
    let mut batcher = Batcher::new(pool.clone(), RenderTarget(1));
    let mut renderer = TracingRenderer::new();

    for frame in 0..3 {
        new_frame();
        batcher.reset();

        let mut blend = BlendMode::Normal;
        let skeleton_tint = Color::rgba(1.0, 1.0, 1.0, 1.0 - frame as f32 * 0.25);
        for slot in &slots {
            if slot.blend != blend {
                batcher.add_blend_mode(slot.blend);
                blend = slot.blend;
            }
            let vertices = quad(slot.offset, 16.0);
            batcher.add(
                &slot.texture,
                &vertices,
                &uvs,
                &indices,
                slot.tint.modulate(skeleton_tint),
                Flip::new(frame % 2 == 1, false),
            );
        }
        if blend != BlendMode::Normal {
            batcher.add_blend_mode(BlendMode::Normal);
        }

        let stats = batcher.flush(&mut renderer);
        tracing::info!(frame, ?stats, in_use = pool.in_use(), "Frame complete");
    }

    tracing::info!(
        draw_calls = renderer.draw_calls(),
        blend_changes = renderer.blend_changes(),
        triangles = renderer.triangles(),
        allocated = pool.allocated(),
        "Done"
    );
}
