use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use parking_lot::Mutex;
use upload_progress::{Dp, ProgressRingArgs, ProgressRingController, RingCommand, RingConfig};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn recorder() -> (Arc<Mutex<Vec<f64>>>, impl Fn(f64) + Send + Sync + 'static) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    (seen, move |value| sink.lock().push(value))
}

#[test]
fn upload_sequence_reports_deltas() {
    let start = Instant::now();
    let (seen, on_finish) = recorder();
    let args = ProgressRingArgs::default()
        .percentage(25.0)
        .on_finish(on_finish);
    let mut ring = ProgressRingController::mount_at(args.clone(), start);

    ring.tick(start + ms(300));
    assert_eq!(*seen.lock(), vec![25.0]);
    assert_eq!(ring.cumulative_percentage(), 25.0);

    ring.update_at(args.percentage(10.0), start + ms(500));
    assert_eq!(ring.run_target(), Some(35.0));
    ring.tick(start + ms(800));

    assert_eq!(*seen.lock(), vec![25.0, 10.0]);
    assert_eq!(ring.cumulative_percentage(), 35.0);
}

#[test]
fn arc_sweeps_during_the_run() {
    let start = Instant::now();
    let mut ring = ProgressRingController::mount_at(
        ProgressRingArgs::default()
            .percentage(100.0)
            .duration(ms(1000)),
        start,
    );
    let circumference = ring.geometry().circumference();

    let mut last = f64::INFINITY;
    for step in 1..=10 {
        ring.tick(start + ms(step * 100));
        let offset = ring.stroke_dash_offset();
        assert!(offset < last, "offset must shrink every frame");
        last = offset;
    }
    assert!(last.abs() < 1e-9);
    assert!(circumference > 0.0);
}

#[test]
fn looping_ring_never_stops_reporting() {
    let start = Instant::now();
    let (seen, on_finish) = recorder();
    let mut ring = ProgressRingController::mount_at(
        ProgressRingArgs::default()
            .percentage(20.0)
            .looping(true)
            .on_finish(on_finish),
        start,
    );

    let mut now = start;
    for _ in 0..50 {
        now += ms(100);
        ring.tick(now);
    }
    let seen = seen.lock();
    assert_eq!(seen.len(), 16);
    assert!(seen.iter().all(|value| *value == 20.0));
    assert!(ring.is_animating());
}

#[test]
fn frame_matches_widget_geometry() {
    let ring = ProgressRingController::mount_at(
        ProgressRingArgs::default().radius(Dp(60.0)).stroke_width(Dp(5.0)),
        Instant::now(),
    );
    let frame = ring.frame();
    assert_eq!(frame.size, (120.0, 120.0));
    assert_eq!(frame.view_box, (0.0, 0.0, 130.0, 130.0));
    assert!(matches!(
        frame.commands[1],
        RingCommand::DashedCircle { radius, stroke_width, .. } if radius == 30.0 && stroke_width == 60.0
    ));

    let tree = frame.to_tree().expect("ring SVG parses");
    assert_eq!(tree.size().width(), 120.0);
}

#[test]
fn config_drives_the_controller() {
    let start = Instant::now();
    let args = RingConfig {
        percentage: Some(50.0),
        max: Some(200.0),
        duration_ms: Some(100),
        ..Default::default()
    }
    .into_args()
    .expect("valid config");
    let mut ring = ProgressRingController::mount_at(args, start);
    ring.tick(start + ms(100));

    let expected = ring.geometry().circumference() * 0.75;
    assert!((ring.stroke_dash_offset() - expected).abs() < 1e-9);
}
