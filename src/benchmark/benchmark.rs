use std::time::Instant;

use crate::simulation::behavior::StickyBehavior;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Bounds, Item, NVec2, System};

/// Default physics parameters for the benchmarks
fn make_params() -> Parameters {
    Parameters {
        h0: 1.0 / 60.0,
        density: 0.01,
        elasticity: 0.5,
        friction: 0.1,
        resistance: 10.0,
        spring_strength: 250.0,
        inset: 16.0,
    }
}

/// Build a system with a 32x32 box parked off-center so the fields have
/// work to do
fn make_system(bounds: Bounds, inset: f64) -> System {
    let item = Item {
        x: NVec2::new(0.3 * bounds.w, 0.4 * bounds.h),
        v: NVec2::zeros(),
        size: NVec2::new(32.0, 32.0),
    };
    System::new(item, bounds, inset)
}

/// Time a raw tick across container sizes
pub fn bench_step() {
    // Different container sizes to test
    let sizes = [
        (320.0, 480.0),
        (480.0, 320.0),
        (768.0, 1024.0),
        (1920.0, 1080.0),
    ];
    let steps = 1_000_000;

    for (w, h) in sizes {
        let params = make_params();
        let behavior = StickyBehavior::new(params.clone());
        let mut sys = make_system(Bounds { w, h }, params.inset);

        // Warm up
        behavior.tick(&mut sys);

        let t0 = Instant::now();
        for _ in 0..steps {
            behavior.tick(&mut sys);
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!("container {w:6.0}x{h:<6.0} step = {per_step:.9} s");
    }
}

/// Count ticks until the box settles onto its nearest corner from a sweep
/// of release points
/// Paste output directly into excel to graph
pub fn bench_settle() {
    println!("release_x,release_y,ticks");

    let bounds = Bounds {
        w: 320.0,
        h: 480.0,
    };

    for i in 0..64 {
        let i_f = i as f64;
        // deterministic release points, no rand needed
        let p = NVec2::new(
            160.0 + (i_f * 0.37).sin() * 120.0,
            240.0 + (i_f * 0.13).cos() * 200.0,
        );

        let params = make_params();
        let behavior = StickyBehavior::new(params.clone());
        let mut sys = make_system(bounds, params.inset);

        // Drag the box to the release point and let go
        behavior.drag_began(&mut sys);
        behavior.drag_moved(&mut sys, p);
        behavior.drag_ended(&mut sys);

        let target = sys.anchors.nearest(p).point;

        // Points released near the quadrant seams barely feel any field;
        // cap the tick count rather than wait them out
        let mut ticks = 0usize;
        while (sys.item.x - target).norm() > 0.5 && ticks < 10_000 {
            behavior.tick(&mut sys);
            ticks += 1;
        }

        println!("{:.1},{:.1},{}", p.x, p.y, ticks);
    }
}
