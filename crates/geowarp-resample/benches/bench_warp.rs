use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use geowarp_raster::{Raster, RasterSize};
use geowarp_resample::nodata::NoDataRange;
use geowarp_resample::warp::{warp_bilinear, AffineWarp, Background, WarpOptions};

fn rotation_about_center(width: usize, height: usize) -> AffineWarp {
    let angle = 45.0f32.to_radians();
    let (cx, cy) = (width as f32 / 2.0, height as f32 / 2.0);
    let (alpha, beta) = (angle.cos(), angle.sin());
    AffineWarp::new([
        alpha,
        beta,
        (1.0 - alpha) * cx - beta * cy,
        -beta,
        alpha,
        beta * cx + (1.0 - alpha) * cy,
    ])
}

fn bench_warp_bilinear(c: &mut Criterion) {
    let mut group = c.benchmark_group("WarpBilinear");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image_size = RasterSize {
            width: *width,
            height: *height,
        };
        let src = Raster::new(image_size, 3, vec![0u8; width * height * 3]).unwrap();
        let warp = rotation_about_center(*width, *height);

        group.bench_with_input(
            BenchmarkId::new("no_exclusions", &parameter_string),
            &(&src, warp),
            |b, i| {
                let (src, warp) = (i.0, i.1);
                let mut dst = Raster::from_size_val(image_size, 3, 0u8).unwrap();
                let options = WarpOptions {
                    background: Some(Background::Scalar(0)),
                    ..Default::default()
                };
                b.iter(|| {
                    warp_bilinear(
                        black_box(src),
                        black_box(&mut dst),
                        black_box(&warp),
                        black_box(&options),
                    )
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("nodata", &parameter_string),
            &(&src, warp),
            |b, i| {
                let (src, warp) = (i.0, i.1);
                let mut dst = Raster::from_size_val(image_size, 3, 0u8).unwrap();
                let options = WarpOptions {
                    nodata: Some(NoDataRange::point(255)),
                    background: Some(Background::Scalar(0)),
                    ..Default::default()
                };
                b.iter(|| {
                    warp_bilinear(
                        black_box(src),
                        black_box(&mut dst),
                        black_box(&warp),
                        black_box(&options),
                    )
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_warp_bilinear);
criterion_main!(benches);
