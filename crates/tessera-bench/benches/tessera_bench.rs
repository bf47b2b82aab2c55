//! Benchmarks for tessera operations.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use tessera_color::{hsv_to_rgb, rgb_to_hsv};
use tessera_geom::{cylinder, icosahedron, sphere, DebugShape, Shape};
use tessera_math::{to_rad, Mat4, Vec3};
use tessera_scene::{MatrixStack, SceneNode, SceneResult};

fn sample_transform() -> Mat4 {
    Mat4::IDENTITY
        .translate(Vec3::new(1.0, 2.0, 3.0))
        .rotate(0.7, Vec3::new(1.0, 1.0, 0.0).normalize())
        .scale(Vec3::new(2.0, 0.5, 1.5))
}

/// Benchmark core 4x4 matrix operations.
fn bench_mat4(c: &mut Criterion) {
    let mut group = c.benchmark_group("mat4");
    let a = sample_transform();
    let b = a.transpose();

    group.bench_function("apply", |bench| bench.iter(|| black_box(a).apply(black_box(&b))));
    group.bench_function("det", |bench| bench.iter(|| black_box(a).det()));
    group.bench_function("inverse", |bench| bench.iter(|| black_box(a).inverse()));
    group.bench_function("rotate", |bench| {
        bench.iter(|| black_box(a).rotate(black_box(0.3), Vec3::Y))
    });
    group.bench_function("look_at", |bench| {
        bench.iter(|| Mat4::look_at(black_box(Vec3::new(0.0, 5.0, 5.0)), Vec3::ZERO, Vec3::Y))
    });
    group.bench_function("perspective", |bench| {
        bench.iter(|| Mat4::perspective(black_box(to_rad(45.0)), 16.0 / 9.0, 0.1, 100.0))
    });

    let points: Vec<Vec3> = (0..10000).map(|i| Vec3::new(i as f32, 1.0, -(i as f32))).collect();
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("transform_point_10k", |bench| {
        bench.iter(|| points.iter().map(|&p| a.transform_point(black_box(p))).collect::<Vec<_>>())
    });

    group.finish();
}

/// Balanced binary tree of the given depth.
fn tree(depth: usize) -> SceneNode<u32> {
    let local = Mat4::IDENTITY.translate(Vec3::X).rotate(0.1, Vec3::Y);
    let mut node = SceneNode::new(local).with_payload(depth as u32);
    if depth > 0 {
        node.add_child(tree(depth - 1));
        node.add_child(tree(depth - 1));
    }
    node
}

/// Benchmark matrix stack and scene traversal.
fn bench_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene");
    let local = sample_transform();

    group.bench_function("push_pop", |bench| {
        let mut stack = MatrixStack::new();
        bench.iter(|| {
            let top = stack.push(black_box(&local));
            stack.pop();
            top
        })
    });

    for depth in [4usize, 8, 12] {
        let scene = tree(depth);
        group.throughput(Throughput::Elements(scene.count() as u64));
        group.bench_with_input(BenchmarkId::new("walk", depth), &scene, |bench, scene| {
            let mut stack = MatrixStack::new();
            bench.iter(|| {
                let mut sum = 0.0f32;
                let result = scene.walk(&mut stack, &mut |_, world| -> SceneResult<()> {
                    sum += world.get(0, 3);
                    Ok(())
                });
                result.map(|_| sum)
            })
        });
    }

    group.finish();
}

/// Benchmark mesh generation and buffer interleaving.
fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");

    for precision in [16u32, 64, 128] {
        group.bench_with_input(BenchmarkId::new("sphere", precision), &precision, |bench, &p| {
            bench.iter(|| sphere(black_box(p), black_box(p)))
        });
    }

    for precision in [1u32, 3, 5] {
        group.bench_with_input(BenchmarkId::new("icosahedron", precision), &precision, |bench, &p| {
            bench.iter(|| icosahedron(black_box(p)))
        });
    }

    group.bench_function("cylinder_64", |bench| bench.iter(|| cylinder(black_box(64))));

    if let Ok(data) = sphere(64, 64) {
        group.bench_function("debug_shape_64", |bench| {
            bench.iter(|| DebugShape::from(black_box(&data)).bytes())
        });
    }

    group.finish();
}

/// Benchmark HSV conversions.
fn bench_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("color");

    let colors: Vec<Vec3> = (0..10000)
        .map(|i| {
            let t = i as f32 / 10000.0;
            Vec3::new(t, 1.0 - t, (t * 7.0) % 1.0)
        })
        .collect();
    group.throughput(Throughput::Elements(colors.len() as u64));

    group.bench_function("rgb_to_hsv", |bench| {
        bench.iter(|| colors.iter().map(|&c| rgb_to_hsv(black_box(c))).collect::<Vec<_>>())
    });
    group.bench_function("hsv_roundtrip", |bench| {
        bench.iter(|| {
            colors
                .iter()
                .map(|&c| hsv_to_rgb(rgb_to_hsv(black_box(c))))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_mat4, bench_scene, bench_geometry, bench_color);
criterion_main!(benches);
