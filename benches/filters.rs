//! Benchmarks for the convolution and histogram engines
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use inspectra::{convolve, equalize, histogram, kernel, Kernel};
use ndarray::Array2;

/// Generate a synthetic single-channel gradient image
fn generate_test_image(width: usize, height: usize) -> Array2<u8> {
    let mut image = Array2::<u8>::zeros((height, width));
    for y in 0..height {
        for x in 0..width {
            let v = (x * 255 / width.max(1) + y * 255 / height.max(1)) / 2;
            image[[y, x]] = v as u8;
        }
    }
    image
}

fn bench_convolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("convolve");

    let kernels: [(&str, Kernel<'static>); 3] = [
        ("gaussian_blur", kernel::GAUSSIAN_BLUR_3X3),
        ("sobel_x", kernel::SOBEL_X_3X3),
        ("laplacian", kernel::LAPLACIAN_3X3),
    ];

    for size in [256usize, 512, 1024].iter() {
        let image = generate_test_image(*size, *size);
        group.throughput(Throughput::Elements((size * size) as u64));

        for (name, k) in kernels.iter() {
            group.bench_with_input(
                BenchmarkId::new(*name, format!("{size}x{size}")),
                &image,
                |b, image| {
                    b.iter(|| convolve(black_box(image.view()), black_box(*k)).unwrap());
                },
            );
        }
    }

    group.finish();
}

fn bench_histogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram");

    for size in [256usize, 512, 1024].iter() {
        let image = generate_test_image(*size, *size);
        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_with_input(
            BenchmarkId::new("histogram", format!("{size}x{size}")),
            &image,
            |b, image| {
                b.iter(|| histogram(black_box(image.view())));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("equalize", format!("{size}x{size}")),
            &image,
            |b, image| {
                b.iter(|| equalize(black_box(image.view())));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_convolve, bench_histogram);
criterion_main!(benches);
