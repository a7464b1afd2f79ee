use criterion::{black_box, criterion_group, criterion_main, Criterion};

use abalone_engine::games::abalone::{AbaloneGameBuilder, Layout};
use abalone_engine::rules::GameState;

fn bench_legal_actions(c: &mut Criterion) {
    for layout in [Layout::Classic, Layout::BelgianDaisy] {
        let (_game, state) = AbaloneGameBuilder::new().layout(layout).build().unwrap();
        c.bench_function(&format!("legal_actions/{layout}"), |b| {
            b.iter(|| black_box(&state).legal_actions())
        });
    }
}

fn bench_apply_and_clone(c: &mut Criterion) {
    let (_game, state) = AbaloneGameBuilder::new().build().unwrap();
    let action = state.legal_actions()[0];
    c.bench_function("clone_and_apply", |b| {
        b.iter(|| {
            let mut branch = black_box(&state).clone();
            branch.apply_action(action).unwrap();
            branch
        })
    });
}

criterion_group!(benches, bench_legal_actions, bench_apply_and_clone);
criterion_main!(benches);
