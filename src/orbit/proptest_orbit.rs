//! Property-based tests for orbit integration using proptest.
//!
//! These tests verify the pause gate and clamping invariants across arbitrary
//! speeds, phases and frame deltas.

use proptest::prelude::*;

use super::integrator::{MAX_TICK_DELTA, OrbitIntegrator, OrbitState, orbital_position};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A closed gate leaves the angle bit-for-bit unchanged for any number of ticks.
    #[test]
    fn prop_paused_angle_frozen(
        phase in 0.0f64..std::f64::consts::TAU,
        speed in -10.0f32..10.0,
        deltas in prop::collection::vec(-10.0f64..10.0, 1..50),
    ) {
        let integrator = OrbitIntegrator::default();
        let mut state = OrbitState::with_phase(phase);

        for dt in deltas {
            integrator.advance(&mut state, speed, integrator.clamp_delta(dt), true);
        }

        prop_assert_eq!(state.angle.to_bits(), phase.to_bits());
    }

    /// With a positive speed and positive delta the angle strictly increases.
    #[test]
    fn prop_running_angle_strictly_increases(
        phase in 0.0f64..std::f64::consts::TAU,
        speed in 0.01f32..10.0,
        deltas in prop::collection::vec(1e-3f64..5.0, 1..50),
    ) {
        let integrator = OrbitIntegrator::default();
        let mut state = OrbitState::with_phase(phase);

        for dt in deltas {
            let before = state.angle;
            integrator.advance(&mut state, speed, integrator.clamp_delta(dt), false);
            prop_assert!(state.angle > before);
        }
    }

    /// Spin advances every tick whatever the gate.
    #[test]
    fn prop_spin_ignores_gate(
        paused in any::<bool>(),
        dt in -5.0f64..5.0,
    ) {
        let integrator = OrbitIntegrator::default();
        let mut state = OrbitState::default();
        integrator.advance(&mut state, 1.0, integrator.clamp_delta(dt), paused);
        prop_assert!(state.spin > 0.0);
    }

    /// Clamping is total: any input lands in `[0, MAX_TICK_DELTA]`.
    #[test]
    fn prop_clamp_is_total(raw in any::<f64>()) {
        let clamped = OrbitIntegrator::default().clamp_delta(raw).seconds();
        prop_assert!((0.0..=MAX_TICK_DELTA).contains(&clamped));
    }

    /// Positions stay on the orbit circle in the orbital plane.
    #[test]
    fn prop_position_on_circle(
        radius in 0.0f32..100.0,
        angle in -1.0e4f64..1.0e4,
    ) {
        let pos = orbital_position(radius, angle);
        prop_assert_eq!(pos.y, 0.0);
        prop_assert!((pos.length() - radius).abs() < 1e-3 * radius.max(1.0));
    }
}
