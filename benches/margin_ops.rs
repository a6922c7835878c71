//! Benchmarks for margin-line operations.

use criterion::{criterion_group, criterion_main, Criterion};
use marginline::algo::curvature;
use marginline::algo::downsample::downsample;
use marginline::algo::marginline::{trace, Marginline, TraceOptions};
use marginline::mesh::TriMesh;
use nalgebra::Point3;

/// Grid over [0, n] x [0, n] with a Gaussian bump in the middle.
fn create_bump_grid(n: usize) -> TriMesh {
    let mut positions = Vec::with_capacity((n + 1) * (n + 1));
    let mut triangles = Vec::with_capacity(n * n * 2);

    let center = n as f64 / 2.0;
    for j in 0..=n {
        for i in 0..=n {
            let x = i as f64;
            let y = j as f64;
            let r2 = (x - center).powi(2) + (y - center).powi(2);
            positions.push(Point3::new(x, y, 3.0 * (-r2 / (n as f64)).exp()));
        }
    }

    for j in 0..n {
        for i in 0..n {
            let v00 = j * (n + 1) + i;
            let v10 = v00 + 1;
            let v01 = v00 + (n + 1);
            let v11 = v01 + 1;

            triangles.push([v00, v10, v11]);
            triangles.push([v00, v11, v01]);
        }
    }

    TriMesh::new(positions, triangles).unwrap()
}

fn bench_mesh_construction(c: &mut Criterion) {
    let mesh = create_bump_grid(50);
    let positions = mesh.positions().to_vec();
    let triangles = mesh.triangles().to_vec();

    c.bench_function("build_grid_50x50", |b| {
        b.iter(|| TriMesh::new(positions.clone(), triangles.clone()).unwrap())
    });
}

fn bench_curvature(c: &mut Criterion) {
    let mesh = create_bump_grid(50);

    c.bench_function("curvature_parallel_50x50", |b| {
        b.iter(|| curvature::compute(&mesh).unwrap())
    });

    c.bench_function("curvature_sequential_50x50", |b| {
        b.iter(|| curvature::compute_sequential(&mesh).unwrap())
    });
}

fn bench_trace(c: &mut Criterion) {
    let mesh = create_bump_grid(50);
    let field = curvature::compute(&mesh).unwrap();
    let seed = mesh.nearest_vertex(&Point3::new(25.0, 25.0, 3.0));

    c.bench_function("trace_bump_grid_50x50", |b| {
        b.iter(|| {
            let mut line = Marginline::from_seed(seed);
            trace(&mesh, &field, &mut line, &TraceOptions::default());
            line
        })
    });
}

fn bench_downsample(c: &mut Criterion) {
    let path: Vec<usize> = (0..10_000).collect();

    c.bench_function("downsample_10k_to_30", |b| {
        b.iter(|| downsample(&path, 30, 3.0))
    });
}

criterion_group!(
    benches,
    bench_mesh_construction,
    bench_curvature,
    bench_trace,
    bench_downsample
);
criterion_main!(benches);
