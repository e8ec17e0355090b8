// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kedge::{copy, fill, SliceSink, SliceSource, StepOnly};
use std::hint::black_box;

const SIZES: [usize; 3] = [64, 1024, 16384];

fn bench_fill_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_bytes");

    for size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("byte_set", size), &size, |b, &size| {
            let mut buf = vec![0u8; size];
            b.iter(|| {
                fill(black_box(&mut buf[..]), black_box(0xA5u8));
                black_box(buf[size / 2])
            });
        });
    }
    group.finish();
}

fn bench_fill_scalars(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_scalars");

    for size in SIZES {
        group.throughput(Throughput::Bytes((size * 8) as u64));
        group.bench_with_input(BenchmarkId::new("u64_loop", size), &size, |b, &size| {
            let mut buf = vec![0u64; size];
            b.iter(|| {
                fill(black_box(&mut buf[..]), black_box(0xDEAD_BEEFu64));
                black_box(buf[size / 2])
            });
        });
    }
    group.finish();
}

fn bench_copy_tiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("copy_tiers");

    for size in SIZES {
        group.throughput(Throughput::Bytes((size * 8) as u64));

        group.bench_with_input(BenchmarkId::new("counted", size), &size, |b, &size| {
            let src: Vec<u64> = (0..size as u64).collect();
            let mut dst = vec![0u64; size];
            b.iter(|| {
                let (first, last) = SliceSource::range(black_box(&src));
                copy(first, last, SliceSink::new(&mut dst));
                black_box(dst[size / 2])
            });
        });

        group.bench_with_input(BenchmarkId::new("sentinel", size), &size, |b, &size| {
            let src: Vec<u64> = (0..size as u64).collect();
            let mut dst = vec![0u64; size];
            b.iter(|| {
                let (first, last) = StepOnly::pair(SliceSource::range(black_box(&src)));
                copy(first, last, SliceSink::new(&mut dst));
                black_box(dst[size / 2])
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_fill_bytes,
    bench_fill_scalars,
    bench_copy_tiers
);
criterion_main!(benches);
