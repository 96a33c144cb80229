//! Benchmarks for the beam solver

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use beam_solver::prelude::*;

fn create_midspan_model() -> AnalysisModel {
    let loads = LoadAssembly::builder().point_force(-10.0, 5.0).build();
    AnalysisModel::new(10.0, 32e9, 0.0054, loads).unwrap()
}

fn create_heavily_loaded_model(point_loads: usize, series_vertices: usize) -> AnalysisModel {
    let length = 20.0;
    let mut builder = LoadAssembly::builder();

    for k in 0..point_loads {
        let x = length * (k as f64 + 0.5) / point_loads as f64;
        builder = builder.point_force(-5.0, x).point_moment(1.0, x);
    }

    // Saw-tooth distributed load with a jump at every other vertex
    let vertices: Vec<LoadInstance> = (0..series_vertices)
        .map(|k| {
            let x = length * (k / 2) as f64 / (series_vertices / 2) as f64;
            let w = if k % 2 == 0 { -2.0 } else { -4.0 };
            LoadInstance::new(w, x)
        })
        .collect();
    builder = builder.distributed_force(vertices.clone()).unwrap();
    builder = builder.distributed_moment(vertices).unwrap();

    AnalysisModel::new(length, 200e9, 8.49e-5, builder.build()).unwrap()
}

fn benchmark_point_queries(c: &mut Criterion) {
    let model = create_midspan_model();
    c.bench_function("midspan_point_load_queries", |b| {
        b.iter(|| {
            let engine = model.engine();
            let x = black_box(3.7);
            black_box((
                engine.shear(x).unwrap(),
                engine.moment(x).unwrap(),
                engine.slope(x).unwrap(),
                engine.deflection(x).unwrap(),
            ));
        })
    });
}

fn benchmark_response_at(c: &mut Criterion) {
    let model = create_heavily_loaded_model(50, 200);
    c.bench_function("heavy_model_response_at", |b| {
        b.iter(|| {
            black_box(model.engine().response_at(black_box(7.3)).unwrap());
        })
    });
}

fn benchmark_diagram(c: &mut Criterion) {
    let model = create_heavily_loaded_model(50, 200);
    let options = AnalysisOptions::default();
    c.bench_function("heavy_model_diagram_101", |b| {
        b.iter(|| {
            black_box(model.engine().diagram(&options).unwrap());
        })
    });
}

criterion_group!(
    benches,
    benchmark_point_queries,
    benchmark_response_at,
    benchmark_diagram,
);

criterion_main!(benches);
