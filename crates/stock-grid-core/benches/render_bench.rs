use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stock_grid_core::{DisplayList, GridConfig, GridRenderer, NoOverlay, Theme};

fn bench_grid_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_pass");
    for &(cols, rows) in &[(4u32, 4u32), (24, 16)] {
        group.bench_function(format!("{cols}x{rows}"), |b| {
            let config = GridConfig::new(cols, rows, 2, 1.0).expect("config");
            let mut renderer = GridRenderer::new(config, &Theme::dark());
            renderer.on_resize(1024.0, 640.0).expect("resize");
            let mut dl = DisplayList::new();
            b.iter(|| {
                dl.clear();
                renderer.render(&mut dl, &mut NoOverlay).expect("render");
                black_box(dl.ops().len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_grid_pass);
criterion_main!(benches);
