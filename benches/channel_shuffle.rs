use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use channel_shuffle::image_pipeline::{
    Channel, ChannelMap, ChannelShufflePipeline, OutputFormat, TransformConfig,
};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

fn generate_png(width: u32, height: u32) -> Vec<u8> {
    let image = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
    });
    let mut data = Vec::new();
    DynamicImage::ImageRgba8(image)
        .write_to(&mut Cursor::new(&mut data), ImageFormat::Png)
        .expect("encode bench input");
    data
}

fn benchmark_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_by_size");

    let sizes = vec![
        (512, 512, "512x512_no_resize"),
        (2048, 1024, "2048x1024_to_1024"),
        (4096, 4096, "4096x4096_to_1024"),
    ];

    for (width, height, label) in sizes {
        let input = generate_png(width, height);

        group.bench_with_input(BenchmarkId::from_parameter(label), &input, |b, data| {
            let pipeline = ChannelShufflePipeline::new(TransformConfig::default());

            b.iter(|| {
                let _ = pipeline.transform(black_box(data), None);
            });
        });
    }

    group.finish();
}

fn benchmark_output_formats(c: &mut Criterion) {
    let mut group = c.benchmark_group("output_formats");
    let input = generate_png(1024, 1024);

    let formats = vec![
        (OutputFormat::Png, "png"),
        (OutputFormat::Tga, "tga"),
        (OutputFormat::Jpeg, "jpeg"),
    ];

    for (format, label) in formats {
        group.bench_with_input(BenchmarkId::from_parameter(label), &input, |b, data| {
            let pipeline = ChannelShufflePipeline::new(TransformConfig::default());

            b.iter(|| {
                let mut output = Cursor::new(Vec::new());
                let _ = pipeline.convert(black_box(data), None, format, &mut output);
            });
        });
    }

    group.finish();
}

fn benchmark_channel_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("channel_map");
    let input = generate_png(1024, 1024);

    group.bench_function("identity", |b| {
        let pipeline = ChannelShufflePipeline::new(TransformConfig::default());

        b.iter(|| {
            let _ = pipeline.transform(black_box(&input), None);
        });
    });

    group.bench_function("fan_out_inverted", |b| {
        let map = ChannelMap::identity()
            .with_source(Channel::G, Channel::R)
            .with_source(Channel::B, Channel::R)
            .with_invert(Channel::A, true);
        let config = TransformConfig::builder()
            .channel_map(map)
            .build()
            .expect("valid config");
        let pipeline = ChannelShufflePipeline::new(config);

        b.iter(|| {
            let _ = pipeline.transform(black_box(&input), None);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_by_size,
    benchmark_output_formats,
    benchmark_channel_map
);
criterion_main!(benches);
