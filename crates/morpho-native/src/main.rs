use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use glam::Vec2;
use morpho_core::{
    gesture, ControlSignals, LandmarkFrame, Mailbox, MorphEngine, DEFAULT_PARTICLE_COUNT,
    LANDMARK_COUNT, SETTLED_EPSILON,
};

const TICK: Duration = Duration::from_millis(16);
const TRACKER_PERIOD: Duration = Duration::from_millis(33);
const STATUS_EVERY: Duration = Duration::from_secs(1);
const ENGINE_SEED: u64 = 42;

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    // Tracker observations: Some(frame) = hand detected, None = no hand.
    let mailbox: Arc<Mailbox<Option<LandmarkFrame>>> = Arc::new(Mailbox::new());

    // Synthetic tracker thread standing in for the camera pipeline: a
    // procedurally opening, slowly rolling hand that drops out of frame
    // every few seconds to exercise the rest policy.
    {
        let mailbox = Arc::clone(&mailbox);
        thread::Builder::new()
            .name("gesture-tracker".into())
            .spawn(move || {
                let start = Instant::now();
                loop {
                    let t = start.elapsed().as_secs_f32();
                    let observation = if (t % 10.0) < 7.0 {
                        Some(synthetic_frame(t))
                    } else {
                        None
                    };
                    mailbox.post(observation);
                    thread::sleep(TRACKER_PERIOD);
                }
            })?;
    }

    let mut engine = MorphEngine::new(DEFAULT_PARTICLE_COUNT, ENGINE_SEED)?;
    let mut signals = ControlSignals::new();
    log::info!(
        "engine up: {} particles, starting on {}",
        engine.particle_count(),
        engine.target_curve().label()
    );

    let mut last = Instant::now();
    let mut last_status = Instant::now();
    loop {
        let now = Instant::now();
        let dt = now - last;
        last = now;

        if let Some(observation) = mailbox.take() {
            let features = match observation {
                Some(frame) => match gesture::extract(&frame) {
                    Ok(f) => Some(f),
                    Err(e) => {
                        log::debug!("malformed frame treated as no hand: {e}");
                        None
                    }
                },
                None => None,
            };
            signals.apply(features);
        }

        engine.tick(dt);
        signals.step();

        if now - last_status >= STATUS_EVERY {
            last_status = now;
            log::info!(
                "curve={} settled={:.0}% spread={:.2} scale={:.2} rotation={:.2}",
                engine.target_curve().label(),
                engine.transition_progress(SETTLED_EPSILON) * 100.0,
                signals.spread.current,
                signals.scale.current,
                signals.rotation.current
            );
        }

        thread::sleep(TICK);
    }
}

/// Build a plausible 21-point hand pose: five fingers fanned around a
/// slowly rolling palm direction, opening and closing over time. All
/// points stay inside normalized image space.
fn synthetic_frame(t: f32) -> LandmarkFrame {
    let wrist = Vec2::new(0.5, 0.75);
    let roll = 0.5 * (t * 0.25).sin();
    let open = 0.5 + 0.5 * (t * 0.8).sin();

    let mut frame = [wrist; LANDMARK_COUNT];
    for finger in 0..5 {
        let angle = roll + (finger as f32 - 2.0) * 0.22;
        let dir = Vec2::new(angle.sin(), -angle.cos());
        let r_inner = 0.08;
        let r_tip = 0.16 * (1.0 + open);
        // four joints per finger, landmarks 1+4f .. 4+4f, inner to tip
        for joint in 0..4 {
            let r = r_inner + (r_tip - r_inner) * joint as f32 / 3.0;
            let p = wrist + dir * r;
            frame[1 + finger * 4 + joint] = Vec2::new(p.x.clamp(0.0, 1.0), p.y.clamp(0.0, 1.0));
        }
    }
    frame
}
