use criterion::{black_box, criterion_group, criterion_main, Criterion};
use echr_cases::conclusion::{parse, tokenize};

pub fn conclusion_benchmark(c: &mut Criterion) {
    let short = "Violation of Art. 6-1;Non-pecuniary damage - financial award";
    let long = "Preliminary objection dismissed (Article 35-1 - Exhaustion of domestic remedies);\
Violation of Article 3 - Prohibition of torture (Article 3 - Degrading treatment;Inhuman treatment) (Substantive aspect);\
Violation of Article 3 - Prohibition of torture (Article 3 - Effective investigation) (Procedural aspect);\
No violation of Article 5 - Right to liberty and security (Article 5-1 - Lawful arrest or detention);\
Violation of Article 1 of Protocol No. 1 - Protection of property;\
No violation of Art. 5-1 and 5-4;Just satisfaction reserved";

    c.bench_function("parse short conclusion", |b| b.iter(|| parse(black_box(short))));
    c.bench_function("parse long conclusion", |b| b.iter(|| parse(black_box(long))));
    c.bench_function("tokenize articles", |b| {
        b.iter(|| tokenize(black_box("p1-1+6-1+13+p4-2+3")))
    });
}

criterion_group!(benches, conclusion_benchmark);
criterion_main!(benches);
