use RustedCalculus::symbolic::elementary::{ElementaryFunction, ElementaryOps};
use RustedCalculus::symbolic::fraction::Fraction;
use RustedCalculus::symbolic::function_options::FunctionOptions;
use RustedCalculus::symbolic::power_fn::PowerFn;
use RustedCalculus::symbolic::trig_fn::TrigFn;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_power_derivatives(c: &mut Criterion) {
    let f: ElementaryFunction = PowerFn::new(
        FunctionOptions::new()
            .a(Fraction::new(2, 3).unwrap())
            .b(1)
            .n(12)
            .coeff(Fraction::new(5, 7).unwrap()),
    )
    .unwrap()
    .into();
    c.bench_function("power nth derivative", |b| {
        b.iter(|| black_box(&f).nth_derivative(10))
    });
}

fn bench_power_definite_integral(c: &mut Criterion) {
    let f = PowerFn::new(FunctionOptions::new().a(3).b(-1).n(7)).unwrap();
    let lower = Fraction::new(1, 3).unwrap();
    let upper = Fraction::new(11, 5).unwrap();
    c.bench_function("power definite integral", |b| {
        b.iter(|| {
            f.definite_integral(black_box(lower.clone()), black_box(upper.clone()))
                .unwrap()
        })
    });
}

fn bench_trig_definite_integral(c: &mut Criterion) {
    let f = TrigFn::cos(FunctionOptions::new().a(2).b(30).coeff(3)).unwrap();
    c.bench_function("cos definite integral", |b| {
        b.iter(|| f.definite_integral(black_box(0), black_box(135)).unwrap())
    });
}

fn bench_number_function(c: &mut Criterion) {
    let f: ElementaryFunction =
        PowerFn::new(FunctionOptions::new().a(2).b(1).n(Fraction::new(5, 2).unwrap()))
            .unwrap()
            .into();
    let numeric = f.number_function();
    c.bench_function("power number function 1000 points", |b| {
        b.iter(|| (0..1000).map(|i| numeric(black_box(i as f64 * 0.01))).sum::<f64>())
    });
}

criterion_group!(
    benches,
    bench_power_derivatives,
    bench_power_definite_integral,
    bench_trig_definite_integral,
    bench_number_function
);
criterion_main!(benches);
