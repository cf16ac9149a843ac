use approx::assert_relative_eq;
use corona_core::{stops, Channel, Color, EngineError, ProgressEngine};

#[test]
fn test_color_round_trip_and_clamp() {
    let mut color = Color::default();
    color.set([64, 128, 255]);
    assert_eq!(color.rgb(), [64, 128, 255]);

    color.set([300, -5, 128]);
    assert_eq!(color.rgb(), [255, 0, 128]);
    assert_eq!(color.channel(Channel::Green), 0);
}

#[test]
fn test_engine_drives_owned_color_through_gradient() {
    // Range chosen so the three segment boundaries (30, 60) are exact.
    let mut engine =
        ProgressEngine::new(Color::default(), stops::CHARGE.to_vec(), Some((0.0, 90.0)))
            .unwrap();
    engine.init();

    // Freshly initialized: first stop, zero progress.
    assert_eq!(engine.color_css(), "rgb(231,76,60)");
    assert_eq!(engine.progress(), 0.0);

    // Midpoint of the second segment, amber -> yellow:
    // round(230 + 0.5*11), round(126 + 0.5*70), round(34 - 0.5*19).
    engine.set_progress(45.0).unwrap();
    assert_eq!(engine.color().rgb(), [236, 161, 25]);

    engine.set_progress(90.0).unwrap();
    assert_eq!(engine.color_css(), "rgb(46,204,113)");
    assert_relative_eq!(engine.progress_percentage(), 1.0);
}

#[test]
fn test_engine_css_alpha_delegates_to_color() {
    let mut engine =
        ProgressEngine::new(Color::default(), vec![[10, 20, 30]], None).unwrap();
    engine.init();
    engine.set_progress(40.0).unwrap();
    assert_eq!(engine.color_css_alpha(0.5), "rgba(10,20,30,0.5)");
}

#[test]
fn test_failed_update_preserves_invariants() {
    let mut engine = ProgressEngine::new(
        Color::default(),
        stops::HEALTH.to_vec(),
        Some((0.0, 99.0)),
    )
    .unwrap();
    engine.init();
    engine.set_progress(33.0).unwrap();
    let before = (engine.progress(), engine.color().rgb());

    assert!(matches!(
        engine.set_progress(120.0),
        Err(EngineError::OutOfRange { .. })
    ));
    assert_eq!((engine.progress(), engine.color().rgb()), before);
}

#[test]
fn test_breakpoints_partition_range_per_stop_count() {
    let mut engine = ProgressEngine::new(
        Color::default(),
        vec![[0, 0, 0], [1, 1, 1], [2, 2, 2]],
        Some((0.0, 99.0)),
    )
    .unwrap();
    engine.init();

    let breakpoints = engine.breakpoints();
    assert_eq!(breakpoints.len(), 3);
    assert_relative_eq!(breakpoints[1], 49.5);
    assert_eq!(breakpoints[2], 99.0);
}
