use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quadnode::shapes::Bound;
use quadnode::QuadTree;
use rand::prelude::*;

const ITEMS: u32 = 1000;

fn world() -> Bound {
    Bound::new(0.0, 0.0, 100.0, 100.0)
}

fn random_bound(rng: &mut impl Rng) -> Bound {
    let x = rng.gen_range(0.0..95.0);
    let y = rng.gen_range(0.0..95.0);
    Bound::new(x, y, x + 5.0, y + 5.0)
}

fn filled_tree(rng: &mut impl Rng) -> QuadTree<u32> {
    let mut quadtree = QuadTree::new(world()).unwrap();
    for key in 0..ITEMS {
        quadtree.insert(key, random_bound(rng)).unwrap();
    }
    quadtree
}

fn insert_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let mut quadtree = QuadTree::new(world()).unwrap();
    let mut key = 0u32;

    c.bench_function("quadtree_insert", |b| {
        b.iter(|| {
            if key == ITEMS * 10 {
                quadtree.clear();
                key = 0;
            }
            let _ = quadtree.insert(black_box(key), random_bound(&mut rng));
            key += 1;
        })
    });
}

fn remove_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let mut quadtree = filled_tree(&mut rng);

    c.bench_function("quadtree_remove", |b| {
        b.iter(|| {
            let key = rng.gen_range(0..ITEMS);
            if let Ok(bound) = quadtree.remove(black_box(key)) {
                let _ = quadtree.insert(key, bound);
            }
        })
    });
}

fn update_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let mut quadtree = filled_tree(&mut rng);

    c.bench_function("quadtree_update", |b| {
        b.iter(|| {
            let key = rng.gen_range(0..ITEMS);
            let _ = quadtree.update(black_box(key), random_bound(&mut rng));
        })
    });
}

fn find_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(4);
    let quadtree = filled_tree(&mut rng);
    let query = Bound::new(40.0, 40.0, 60.0, 60.0);
    let mut found: Vec<u32> = Vec::new();

    c.bench_function("quadtree_find", |b| {
        b.iter(|| {
            found.clear();
            quadtree.find_into(black_box(&query), &mut found);
        })
    });

    c.bench_function("quadtree_any", |b| {
        b.iter(|| quadtree.any(black_box(&query), |key| key % 97 == 0))
    });
}

criterion_group!(
    quadtree_benchmarks,
    insert_benchmark,
    remove_benchmark,
    update_benchmark,
    find_benchmark
);
criterion_main!(quadtree_benchmarks);
