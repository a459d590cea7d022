// Host-side tests for the control-signal smoothers and the latest-value
// mailbox handoff.

use morpho_core::*;
use std::sync::Arc;
use std::thread;

#[test]
fn smoother_moves_by_its_rate_each_step() {
    let mut s = Smoother::new(0.0, 0.08);
    s.target = 1.0;
    s.step();
    assert!((s.current - 0.08).abs() < 1e-7);
    s.step();
    assert!((s.current - (0.08 + 0.92 * 0.08)).abs() < 1e-6);
}

#[test]
fn smoother_approach_is_asymptotic_and_stable() {
    let mut s = Smoother::new(0.0, 0.08);
    s.target = 1.0;
    for _ in 0..400 {
        s.step();
    }
    assert!(s.current < 1.0, "never lands exactly on target");
    assert!((s.current - 1.0).abs() < 1e-3);
    for _ in 0..50 {
        s.step();
        assert!((s.current - 1.0).abs() < 1e-3, "stays settled");
    }
}

#[test]
fn smoother_rejects_rates_outside_unit_interval() {
    let mut s = Smoother::new(0.0, 0.08);
    assert!(s.set_rate(0.0).is_err());
    assert!(s.set_rate(1.5).is_err());
    assert!(s.set_rate(f32::NAN).is_err());
    assert_eq!(s.rate(), 0.08, "failed set leaves rate intact");
    assert!(s.set_rate(0.2).is_ok());
    assert_eq!(s.rate(), 0.2);
}

#[test]
fn control_signals_start_at_rest_with_documented_rates() {
    let signals = ControlSignals::new();
    assert_eq!(signals.spread.current, 1.0);
    assert_eq!(signals.scale.current, 1.0);
    assert_eq!(signals.rotation.current, 0.0);
    assert_eq!(signals.spread.rate(), SPREAD_RATE);
    assert_eq!(signals.scale.rate(), SCALE_RATE);
    assert_eq!(signals.rotation.rate(), ROTATION_RATE);
    assert_eq!(signals.sensitivity(), DEFAULT_SENSITIVITY);
}

#[test]
fn applying_features_sets_mapped_targets() {
    let mut signals = ControlSignals::new();
    signals.apply(Some(GestureFeatures {
        openness: 1.0,
        distance: 1.0,
        rotation: 1.0,
    }));
    assert!((signals.spread.target - 4.0).abs() < 1e-5);
    assert!((signals.scale.target - 2.3).abs() < 1e-5);
    assert!((signals.rotation.target - 1.5).abs() < 1e-6);
}

#[test]
fn no_hand_resets_targets_immediately() {
    let mut signals = ControlSignals::new();
    signals.apply(Some(GestureFeatures {
        openness: 1.0,
        distance: 1.0,
        rotation: 2.0,
    }));
    for _ in 0..30 {
        signals.step();
    }
    signals.apply(None);
    assert_eq!(signals.spread.target, REST_SPREAD);
    assert_eq!(signals.scale.target, REST_SCALE);
    assert_eq!(signals.rotation.target, REST_ROTATION);
    // current values drift back rather than snapping
    let before = signals.spread.current;
    signals.step();
    assert!(signals.spread.current < before);
    assert!(signals.spread.current > REST_SPREAD);
}

#[test]
fn rotation_smooths_more_slowly_than_spread() {
    let mut signals = ControlSignals::new();
    signals.spread.target = 2.0;
    signals.rotation.target = 1.0;
    signals.step();
    let spread_frac = (signals.spread.current - 1.0) / 1.0;
    let rot_frac = signals.rotation.current / 1.0;
    assert!((spread_frac - 0.08).abs() < 1e-5);
    assert!((rot_frac - 0.05).abs() < 1e-5);
}

#[test]
fn sensitivity_rejects_non_positive_values() {
    let mut signals = ControlSignals::new();
    assert!(signals.set_sensitivity(0.0).is_err());
    assert!(signals.set_sensitivity(-3.0).is_err());
    assert!(signals.set_sensitivity(f32::NAN).is_err());
    assert_eq!(signals.sensitivity(), DEFAULT_SENSITIVITY);
    assert!(signals.set_sensitivity(2.5).is_ok());
    assert_eq!(signals.sensitivity(), 2.5);
}

// ---------------- Mailbox ----------------

#[test]
fn mailbox_keeps_only_the_latest_value() {
    let mailbox = Mailbox::new();
    mailbox.post(1);
    mailbox.post(2);
    mailbox.post(3);
    assert_eq!(mailbox.take(), Some(3));
    assert_eq!(mailbox.take(), None, "take drains the slot");
}

#[test]
fn mailbox_hands_off_across_threads() {
    let mailbox = Arc::new(Mailbox::new());
    let producer = {
        let mailbox = Arc::clone(&mailbox);
        thread::spawn(move || {
            for i in 0..100u32 {
                mailbox.post(i);
            }
        })
    };
    producer.join().expect("producer");
    assert_eq!(mailbox.take(), Some(99), "newest observation wins");
}
