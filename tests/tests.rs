use stickybox::simulation::anchors::{AnchorRole, AnchorSet};
use stickybox::simulation::behavior::StickyBehavior;
use stickybox::simulation::boundary::{clamp_axis, clamp_position, BoundaryConstraint};
use stickybox::simulation::forces::{Force, ForceSet, LinearDamping, SpringField};
use stickybox::simulation::params::Parameters;
use stickybox::simulation::scenario::Scenario;
use stickybox::simulation::states::{Bounds, Item, NVec2, SimState, System};

/// Canonical 320x480 portrait container
pub fn test_bounds() -> Bounds {
    Bounds {
        w: 320.0,
        h: 480.0,
    }
}

/// Default physics parameters for tests (32x32 box, inset 16)
pub fn test_params() -> Parameters {
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

/// Build a 32x32 item centered at `(x, y)`
pub fn test_item(x: f64, y: f64) -> Item {
    Item {
        x: NVec2::new(x, y),
        v: NVec2::zeros(),
        size: NVec2::new(32.0, 32.0),
    }
}

/// System for the canonical container with the box at `(x, y)`
pub fn test_system(x: f64, y: f64) -> System {
    System::new(test_item(x, y), test_bounds(), 16.0)
}

// ==================================================================================
// Anchor tests
// ==================================================================================

#[test]
fn anchors_match_reference_layout() {
    // 320x480 container, 32x32 box, inset 16 -> d = 32 on both axes
    let anchors = AnchorSet::compute(test_bounds(), NVec2::new(16.0, 16.0), 16.0);

    assert_eq!(anchors[AnchorRole::TopLeft].point, NVec2::new(32.0, 32.0));
    assert_eq!(anchors[AnchorRole::TopRight].point, NVec2::new(288.0, 32.0));
    assert_eq!(anchors[AnchorRole::BottomLeft].point, NVec2::new(32.0, 448.0));
    assert_eq!(anchors[AnchorRole::BottomRight].point, NVec2::new(288.0, 448.0));
}

#[test]
fn anchors_symmetric_and_inside() {
    let cases = [(320.0, 480.0), (480.0, 320.0), (1024.0, 768.0), (200.0, 200.0)];

    for (w, h) in cases {
        let bounds = Bounds { w, h };
        let anchors = AnchorSet::compute(bounds, NVec2::new(16.0, 12.0), 10.0);

        let tl = anchors[AnchorRole::TopLeft].point;
        let tr = anchors[AnchorRole::TopRight].point;
        let bl = anchors[AnchorRole::BottomLeft].point;
        let br = anchors[AnchorRole::BottomRight].point;

        assert_eq!(tr.x, w - tl.x, "top corners not mirrored for {w}x{h}");
        assert_eq!(bl.y, h - tl.y, "left corners not mirrored for {w}x{h}");
        assert_eq!(br, NVec2::new(tr.x, bl.y), "bottom-right inconsistent for {w}x{h}");

        for a in anchors.iter() {
            assert!(
                a.point.x > 0.0 && a.point.x < w && a.point.y > 0.0 && a.point.y < h,
                "anchor outside container {w}x{h}: {:?}",
                a
            );
        }
    }
}

#[test]
fn anchor_region_matches_field_spacing() {
    let anchors = AnchorSet::compute(test_bounds(), NVec2::new(16.0, 16.0), 16.0);

    // region = (w - 2d, h - 2d) with d = 32, shared by all four fields
    for a in anchors.iter() {
        assert_eq!(a.region, NVec2::new(256.0, 416.0));
    }
}

#[test]
fn nearest_anchor_by_quadrant() {
    let anchors = AnchorSet::compute(test_bounds(), NVec2::new(16.0, 16.0), 16.0);

    assert_eq!(anchors.nearest(NVec2::new(5.0, 5.0)).role, AnchorRole::TopLeft);
    assert_eq!(anchors.nearest(NVec2::new(300.0, 20.0)).role, AnchorRole::TopRight);
    assert_eq!(anchors.nearest(NVec2::new(10.0, 470.0)).role, AnchorRole::BottomLeft);
    assert_eq!(anchors.nearest(NVec2::new(300.0, 460.0)).role, AnchorRole::BottomRight);
}

// ==================================================================================
// Boundary tests
// ==================================================================================

#[test]
fn clamp_is_idempotent() {
    let bounds = test_bounds();
    let half = NVec2::new(16.0, 16.0);
    let points = [
        (-50.0, -50.0),
        (5.0, 5.0),
        (160.0, 240.0),
        (400.0, 500.0),
        (32.0, 448.0),
    ];

    for (x, y) in points {
        let once = clamp_position(NVec2::new(x, y), half, bounds, 16.0);
        let twice = clamp_position(once, half, bounds, 16.0);
        assert_eq!(once, twice, "clamp not idempotent at ({x}, {y})");
    }
}

#[test]
fn clamp_respects_inset_range() {
    // Range for a 32-wide box in a 320-wide container with inset 16 is [32, 288]
    assert_eq!(clamp_axis(-100.0, 16.0, 320.0, 16.0), 32.0);
    assert_eq!(clamp_axis(1000.0, 16.0, 320.0, 16.0), 288.0);
    assert_eq!(clamp_axis(100.0, 16.0, 320.0, 16.0), 100.0);
}

#[test]
fn degenerate_container_parks_axis_at_center() {
    // A 40-wide container cannot hold a 32-wide box with inset 16
    let c = clamp_axis(3.0, 16.0, 40.0, 16.0);
    assert_eq!(c, 20.0, "degenerate clamp did not center the axis");

    // and the fallback is itself a fixed point
    assert_eq!(clamp_axis(c, 16.0, 40.0, 16.0), 20.0);
}

#[test]
fn boundary_bounce_scales_velocity_by_elasticity() {
    let boundary = BoundaryConstraint::new(16.0);

    // Past the left clamp bound, still moving left
    let mut item = test_item(10.0, 240.0);
    item.v = NVec2::new(-3.0, 1.0);

    let hit = boundary.apply(&mut item, test_bounds(), 0.5);

    assert!(hit, "clamp correction not reported");
    assert_eq!(item.x, NVec2::new(32.0, 240.0));
    assert_eq!(item.v.x, 1.5, "velocity not reflected and scaled");
    assert_eq!(item.v.y, 1.0, "untouched axis lost its velocity");
}

#[test]
fn boundary_leaves_separating_velocity_alone() {
    let boundary = BoundaryConstraint::new(16.0);

    // Past the left clamp bound but already heading back inside
    let mut item = test_item(10.0, 240.0);
    item.v = NVec2::new(4.0, 0.0);

    boundary.apply(&mut item, test_bounds(), 0.5);

    assert_eq!(item.x.x, 32.0);
    assert_eq!(item.v.x, 4.0, "separating velocity must not be reflected");
}

// ==================================================================================
// Force tests
// ==================================================================================

#[test]
fn spring_pulls_toward_its_anchor() {
    let sys = test_system(100.0, 100.0);
    let spring = SpringField {
        role: AnchorRole::TopLeft,
        strength: 250.0,
    };

    let mut f = NVec2::zeros();
    spring.force(sys.t, &sys, &mut f);

    let to_anchor = sys.anchors[AnchorRole::TopLeft].point - sys.item.x;
    assert!(f.norm() > 0.0, "no spring force inside the field");
    assert!(f.dot(&to_anchor) > 0.0, "spring force not toward its anchor");
}

#[test]
fn far_field_has_decayed_to_zero() {
    // Box deep in the top-left quadrant: the bottom-right field is outside
    // its region and must contribute nothing
    let sys = test_system(50.0, 50.0);
    let spring = SpringField {
        role: AnchorRole::BottomRight,
        strength: 250.0,
    };

    let mut f = NVec2::zeros();
    spring.force(sys.t, &sys, &mut f);

    assert_eq!(f, NVec2::zeros(), "far field still pulling");
}

#[test]
fn net_field_force_points_into_the_dominant_corner() {
    // All four springs summed, no selection logic anywhere
    let mut forces = ForceSet::new();
    for role in AnchorRole::ALL {
        forces = forces.with(SpringField {
            role,
            strength: 250.0,
        });
    }

    let sys = test_system(50.0, 50.0);
    let mut f = NVec2::zeros();
    forces.accumulate(sys.t, &sys, &mut f);

    let to_tl = sys.anchors[AnchorRole::TopLeft].point - sys.item.x;
    assert!(f.dot(&to_tl) > 0.0, "net force not dominated by the nearest corner");
}

#[test]
fn damping_opposes_velocity() {
    let mut sys = test_system(100.0, 100.0);
    sys.item.v = NVec2::new(3.0, -2.0);

    let damping = LinearDamping {
        density: 0.01,
        resistance: 10.0,
        friction: 0.1,
    };

    let mut f = NVec2::zeros();
    damping.force(sys.t, &sys, &mut f);

    assert!(f.dot(&sys.item.v) < 0.0, "damping force not opposing motion");

    // Deceleration is (resistance + friction) * v regardless of density
    let a = f / sys.item.mass(0.01);
    assert!((a + 10.1 * sys.item.v).norm() < 1e-12, "unexpected damping magnitude");
}

#[test]
fn mass_derives_from_density_and_area() {
    let item = test_item(0.0, 0.0);
    assert!((item.mass(0.01) - 10.24).abs() < 1e-12);
}

// ==================================================================================
// Behavior / state machine tests
// ==================================================================================

#[test]
fn drag_suspends_forces_and_release_resumes() {
    let behavior = StickyBehavior::new(test_params());
    let mut sys = test_system(100.0, 100.0);
    assert_eq!(sys.state, SimState::Free);

    behavior.drag_began(&mut sys);
    assert_eq!(sys.state, SimState::UserControlled);

    // No tick moves the box while the user holds it, and time stands still
    let held = sys.item.x;
    behavior.tick(&mut sys);
    assert_eq!(sys.item.x, held, "box moved while user controlled");
    assert_eq!(sys.t, 0.0, "time advanced while user controlled");

    // Position follows the input directly, unclamped
    behavior.drag_moved(&mut sys, NVec2::new(5.0, 5.0));
    assert_eq!(sys.item.x, NVec2::new(5.0, 5.0));

    behavior.drag_ended(&mut sys);
    assert_eq!(sys.state, SimState::Free);
}

#[test]
fn drag_cycle_leaves_anchors_unchanged() {
    let behavior = StickyBehavior::new(test_params());
    let mut sys = test_system(100.0, 100.0);
    let before = sys.anchors.clone();

    behavior.drag_began(&mut sys);
    behavior.drag_moved(&mut sys, NVec2::new(200.0, 300.0));
    behavior.drag_ended(&mut sys);

    assert_eq!(sys.anchors, before, "anchors changed without a bounds change");
}

#[test]
fn release_outside_bounds_snaps_onto_the_corner() {
    let behavior = StickyBehavior::new(test_params());
    let mut sys = test_system(160.0, 240.0);

    // Drag past the top-left inset bound and let go: the boundary pulls the
    // box straight onto the corner anchor, where it stays at rest
    behavior.drag_began(&mut sys);
    behavior.drag_moved(&mut sys, NVec2::new(5.0, 5.0));
    behavior.drag_ended(&mut sys);

    let target = NVec2::new(32.0, 32.0);
    assert_eq!(sys.item.x, target);

    for _ in 0..120 {
        behavior.tick(&mut sys);
        assert_eq!(sys.item.x, target, "box drifted off a settled corner");
    }
}

#[test]
fn release_converges_monotonically_to_nearest_corner() {
    let behavior = StickyBehavior::new(test_params());
    let mut sys = test_system(160.0, 240.0);

    // Release at rest inside the top-left quadrant
    behavior.drag_began(&mut sys);
    behavior.drag_moved(&mut sys, NVec2::new(100.0, 120.0));
    behavior.drag_ended(&mut sys);

    let target = NVec2::new(32.0, 32.0);
    let mut dist = (sys.item.x - target).norm();

    for _ in 0..900 {
        behavior.tick(&mut sys);

        // Never leaves the inset clamp range
        assert!(
            sys.item.x.x >= 32.0 && sys.item.x.x <= 288.0,
            "x left the inset bounds: {}",
            sys.item.x.x
        );
        assert!(
            sys.item.x.y >= 32.0 && sys.item.x.y <= 448.0,
            "y left the inset bounds: {}",
            sys.item.x.y
        );

        // Monotone approach under overdamped fields
        let d = (sys.item.x - target).norm();
        assert!(d <= dist + 1e-9, "distance to corner grew: {dist} -> {d}");
        dist = d;
    }

    assert!(dist < 0.5, "box did not settle on the corner, still {dist} away");
}

#[test]
fn rotation_recomputes_anchors_and_reseats_box() {
    let behavior = StickyBehavior::new(test_params());
    let mut sys = test_system(288.0, 448.0); // resting on bottom-right

    behavior.bounds_changed(
        &mut sys,
        Bounds {
            w: 480.0,
            h: 320.0,
        },
    );

    // Anchors now describe the landscape corners
    assert_eq!(sys.anchors[AnchorRole::TopLeft].point, NVec2::new(32.0, 32.0));
    assert_eq!(sys.anchors[AnchorRole::TopRight].point, NVec2::new(448.0, 32.0));
    assert_eq!(sys.anchors[AnchorRole::BottomLeft].point, NVec2::new(32.0, 288.0));
    assert_eq!(sys.anchors[AnchorRole::BottomRight].point, NVec2::new(448.0, 288.0));

    // Box is re-seated at its default center and pinned for the transition
    assert_eq!(sys.item.x, NVec2::new(16.0, 16.0));
    assert_eq!(sys.state, SimState::UserControlled);

    let seated = sys.item.x;
    behavior.tick(&mut sys);
    assert_eq!(sys.item.x, seated, "box moved during the bounds transition");

    // Free motion resumes once the host transition completes
    behavior.transition_finished(&mut sys);
    assert_eq!(sys.state, SimState::Free);

    behavior.tick(&mut sys);
    assert_ne!(sys.item.x, seated, "box did not resume free motion");
}

// ==================================================================================
// Configuration tests
// ==================================================================================

#[test]
fn scenario_builds_with_derived_defaults() {
    let yaml = "
container:
  width: 320.0
  height: 480.0
item:
  width: 32.0
  height: 32.0
parameters:
  h0: 0.0166667
  density: 0.01
  elasticity: 0.5
  friction: 0.1
  resistance: 10.0
  spring_strength: 250.0
";
    let cfg = serde_yaml::from_str(yaml).expect("scenario yaml should parse");
    let scenario = Scenario::build_scenario(cfg);

    // Inset defaults to half the item width, seat to the default center
    assert_eq!(scenario.behavior.boundary.inset, 16.0);
    assert_eq!(scenario.system.item.x, NVec2::new(16.0, 16.0));
    assert_eq!(scenario.system.state, SimState::Free);
    assert!(!scenario.debug_enabled);

    // Anchors are ready before the first tick
    assert_eq!(
        scenario.system.anchors[AnchorRole::TopLeft].point,
        NVec2::new(32.0, 32.0)
    );
}

#[test]
fn scenario_honors_pinned_start_and_inset() {
    let yaml = "
container:
  width: 480.0
  height: 320.0
item:
  width: 48.0
  height: 64.0
  x: 432.0
  y: 264.0
parameters:
  h0: 0.0166667
  density: 0.01
  elasticity: 0.5
  friction: 0.1
  resistance: 10.0
  spring_strength: 250.0
  inset: 24.0
debug: true
";
    let cfg = serde_yaml::from_str(yaml).expect("scenario yaml should parse");
    let scenario = Scenario::build_scenario(cfg);

    assert_eq!(scenario.system.item.x, NVec2::new(432.0, 264.0));
    assert_eq!(scenario.behavior.boundary.inset, 24.0);
    assert!(scenario.debug_enabled);

    // The pinned start is exactly the bottom-right anchor
    assert_eq!(
        scenario.system.anchors[AnchorRole::BottomRight].point,
        scenario.system.item.x
    );
}
