use criterion::{black_box, criterion_group, criterion_main, Criterion};
use word_chain::{find_chain, load_dictionary, WordIndex, WORD_LENGTH};

fn bench_chains(c: &mut Criterion) {
    let words = load_dictionary();
    let index = WordIndex::build(&words, WORD_LENGTH);

    c.bench_function("chain stone -> spine", |b| {
        b.iter(|| find_chain(black_box(&index), black_box("stone"), black_box("spine")))
    });

    // Unreachable target: the search must exhaust the component.
    c.bench_function("chain apple -> mango", |b| {
        b.iter(|| find_chain(black_box(&index), black_box("apple"), black_box("mango")))
    });
}

criterion_group!(benches, bench_chains);
criterion_main!(benches);
