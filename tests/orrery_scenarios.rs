//! End-to-end behavior of the orrery core through its in-process boundary.
//!
//! These tests drive orbits, selection and the camera together the way a
//! frame loop would: transitions between ticks, then `tick(dt)`.

mod common;

use approx::assert_relative_eq;
use orrery::camera::{FOCUS_BOUNDS, OVERVIEW_BOUNDS};
use orrery::error::SelectionError;
use orrery::orbit::ClampedDelta;
use orrery::selection::Selection;

use common::{earth_and_mars, earth_only, orrery_at_zero, solar_orrery};

#[test]
fn test_earth_reference_tick() {
    let mut orrery = orrery_at_zero(earth_only());

    orrery.tick(1.0);

    let angle = orrery.angle("earth").unwrap();
    let position = orrery.position("earth").unwrap();
    assert_relative_eq!(angle, 0.1, epsilon = 1e-9);
    assert_relative_eq!(position.x, 9.950, epsilon = 1e-3);
    assert_relative_eq!(position.y, 0.0, epsilon = 1e-3);
    assert_relative_eq!(position.z, 0.998, epsilon = 1e-3);
}

#[test]
fn test_focused_orbits_bitwise_frozen() {
    let mut orrery = orrery_at_zero(earth_only());
    orrery.tick(1.0);
    let before = orrery.angle("earth").unwrap();
    let position_before = orrery.position("earth").unwrap();

    orrery.pick("earth").unwrap();
    for _ in 0..3 {
        orrery.tick(1.0);
    }

    assert_eq!(orrery.angle("earth").unwrap().to_bits(), before.to_bits());
    assert_eq!(orrery.position("earth").unwrap(), position_before);
}

#[test]
fn test_spin_continues_while_paused() {
    let mut orrery = orrery_at_zero(earth_only());
    orrery.pick("earth").unwrap();

    let mut last = orrery.self_rotation("earth").unwrap();
    for _ in 0..5 {
        orrery.tick(0.5);
        let spin = orrery.self_rotation("earth").unwrap();
        assert!(spin > last);
        last = spin;
    }
}

#[test]
fn test_angle_strictly_increases_while_running() {
    let mut orrery = solar_orrery(11);
    let ids: Vec<String> = orrery
        .catalog()
        .iter()
        .map(|b| b.id.as_str().to_owned())
        .collect();

    for _ in 0..10 {
        let before: Vec<f64> = ids.iter().map(|id| orrery.angle(id).unwrap()).collect();
        orrery.tick(1.0 / 60.0);
        for (id, prev) in ids.iter().zip(before) {
            assert!(orrery.angle(id).unwrap() > prev, "{id} did not advance");
        }
    }
}

#[test]
fn test_negative_delta_never_rewinds() {
    let mut orrery = solar_orrery(3);
    let ids: Vec<String> = orrery
        .catalog()
        .iter()
        .map(|b| b.id.as_str().to_owned())
        .collect();
    let before: Vec<f64> = ids.iter().map(|id| orrery.angle(id).unwrap()).collect();

    let dt = orrery.tick(-5.0);

    assert_eq!(dt, ClampedDelta::Dropped);
    for (id, prev) in ids.iter().zip(before) {
        assert_eq!(orrery.angle(id).unwrap(), prev);
    }
}

#[test]
fn test_non_finite_delta_counts_as_zero() {
    let mut orrery = orrery_at_zero(earth_only());
    orrery.tick(f64::NAN);
    orrery.tick(f64::INFINITY);
    assert_eq!(orrery.angle("earth"), Some(0.0));
}

#[test]
fn test_huge_delta_is_capped() {
    let mut orrery = orrery_at_zero(earth_only());
    let dt = orrery.tick(3600.0);
    assert!(matches!(dt, ClampedDelta::Capped(_)));
    assert_relative_eq!(orrery.angle("earth").unwrap(), 0.1, epsilon = 1e-9);
}

#[test]
fn test_repeat_pick_stays_focused() {
    let mut orrery = orrery_at_zero(earth_only());

    orrery.pick("earth").unwrap();
    orrery.pick("earth").unwrap();

    assert_eq!(orrery.selection().map(|id| id.as_str()), Some("earth"));
    assert!(orrery.pause_gate());
}

#[test]
fn test_switch_focus_directly() {
    let mut orrery = orrery_at_zero(earth_and_mars());

    orrery.pick("earth").unwrap();
    let transition = orrery.pick("mars").unwrap();

    assert_eq!(transition.previous, Selection::Focused("earth".into()));
    assert_eq!(transition.current, Selection::Focused("mars".into()));
    assert!(orrery.pause_gate());
}

#[test]
fn test_clear_resumes_on_next_tick() {
    let mut orrery = orrery_at_zero(earth_only());
    orrery.pick("earth").unwrap();
    orrery.tick(1.0);
    assert_eq!(orrery.angle("earth"), Some(0.0));

    orrery.clear();
    assert!(!orrery.pause_gate());
    orrery.tick(1.0);

    assert_relative_eq!(orrery.angle("earth").unwrap(), 0.1, epsilon = 1e-9);
}

#[test]
fn test_unknown_pick_is_rejected() {
    let mut orrery = orrery_at_zero(earth_only());
    orrery.pick("earth").unwrap();

    let err = orrery.pick("vulcan").unwrap_err();

    assert_eq!(err, SelectionError::UnknownBody("vulcan".into()));
    assert_eq!(orrery.selection().map(|id| id.as_str()), Some("earth"));
}

#[test]
fn test_round_trip_restores_overview_bounds_exactly() {
    let mut orrery = orrery_at_zero(earth_only());
    let initial = orrery.camera().bounds();
    assert_eq!(initial, OVERVIEW_BOUNDS);

    orrery.pick("earth").unwrap();
    orrery.tick(0.1);
    assert_eq!(orrery.camera().bounds(), FOCUS_BOUNDS);

    orrery.clear();
    orrery.tick(0.1);
    assert_eq!(orrery.camera().bounds(), initial);
}

#[test]
fn test_seeded_scenes_reproducible() {
    let mut a = solar_orrery(99);
    let mut b = solar_orrery(99);
    for _ in 0..20 {
        a.tick(1.0 / 30.0);
        b.tick(1.0 / 30.0);
    }
    for body in a.catalog().iter() {
        let id = body.id.as_str();
        assert_eq!(a.position(id), b.position(id));
    }
}
