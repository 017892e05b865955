use criterion::{criterion_group, criterion_main, Criterion, black_box};

use scatterpaint::brush::{BrushConfiguration, BrushPalette, BrushPreset, BrushShape, PrototypeId};
use scatterpaint::math::Plane;
use scatterpaint::scatter::{seeded_rng, PaintSession};
use scatterpaint::surface::SurfaceProbe;
use scatterpaint::volume::{point_in_convex_polygon, BrushVolume};

use glam::Vec3;

fn box_corners() -> Vec<Vec3> {
    let mut corners = Vec::with_capacity(8);
    for x in [1.0, -1.0] {
        for y in [1.0, -1.0] {
            for z in [1.0, -1.0] {
                corners.push(Vec3::new(x, y, z));
            }
        }
    }
    corners
}

fn bench_convex_polygon_inside(c: &mut Criterion) {
    let corners = box_corners();

    c.bench_function("convex_polygon_box_inside", |b| {
        b.iter(|| point_in_convex_polygon(black_box(Vec3::new(0.2, -0.3, 0.1)), black_box(&corners)));
    });
}

fn bench_convex_polygon_outside(c: &mut Criterion) {
    // Worst case: every 4-subset is tested
    let corners = box_corners();

    c.bench_function("convex_polygon_box_outside", |b| {
        b.iter(|| point_in_convex_polygon(black_box(Vec3::new(3.0, 0.0, 0.0)), black_box(&corners)));
    });
}

fn bench_erase_box_volume(c: &mut Criterion) {
    let cfg = BrushConfiguration::default().with_shape(BrushShape::Box);
    let probe = SurfaceProbe::new(Vec3::ZERO, Vec3::new(0.3, 1.0, 0.2)).expect("valid probe");
    let volume = BrushVolume::at(&probe, &cfg);
    let points: Vec<Vec3> = (0..256)
        .map(|i| {
            let f = i as f32;
            Vec3::new((f * 0.37).sin() * 4.0, (f * 0.11).cos() * 2.0, (f * 0.73).sin() * 4.0)
        })
        .collect();

    c.bench_function("erase_box_256_points", |b| {
        b.iter(|| points.iter().filter(|p| volume.contains(black_box(**p))).count());
    });
}

fn bench_paint_tick(c: &mut Criterion) {
    let ground = Plane::from_point_normal(Vec3::ZERO, Vec3::Y).expect("valid plane");
    let mut palette = BrushPalette::empty();
    palette.push(BrushPreset::new("Bench", 0.5, 1.5).with_elements([PrototypeId(1), PrototypeId(2)]));
    let mut session = PaintSession::new(BrushConfiguration::default().with_density(100), palette, seeded_rng(7));

    c.bench_function("paint_tick_100_flat", |b| {
        let mut frame = 0u32;
        b.iter(|| {
            frame += 1;
            let point = Vec3::new((frame as f32 * 0.1).sin() * 10.0, 0.0, (frame as f32 * 0.1).cos() * 10.0);
            session.tick(SurfaceProbe::new(black_box(point), Vec3::Y), false, &ground)
        });
    });
}

criterion_group!(
    benches,
    bench_convex_polygon_inside,
    bench_convex_polygon_outside,
    bench_erase_box_volume,
    bench_paint_tick,
);
criterion_main!(benches);
