use criterion::{criterion_group, criterion_main, Criterion, black_box};
use pawnstorm::Position;

fn bench_eval(c: &mut Criterion) {
    let p = Position::startpos();
    c.bench_function("evaluate_startpos", |ben| {
        ben.iter(|| {
            let v = pawnstorm::search::eval::evaluate(black_box(&p));
            black_box(v)
        })
    });
}

criterion_group!(benches, bench_eval);
criterion_main!(benches);
