use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use prefix_tools::wordlist::trie::trie::Trie;

fn random_words(n: usize, rng: &mut StdRng) -> Vec<String> {
    (0..n)
        .map(|_| {
            let len = rng.gen_range(3..12);
            (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let words = random_words(50_000, &mut rng);
    let trie = Trie::new();
    trie.insert_all(words.iter().map(|w| w.as_str()));

    c.bench_function("find len 1", |b| b.iter(|| trie.find("a")));
    c.bench_function("find len 2", |b| b.iter(|| trie.find("ab")));
    c.bench_function("find len 3", |b| b.iter(|| trie.find("abc")));

    {
        let mut group = c.benchmark_group("10s");
        group.sample_size(10);
        group.bench_function("find all", |b| b.iter(|| trie.find("")));
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
