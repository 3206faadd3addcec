use avoi_site::domain::Axis;
use avoi_site::{AgenticGrid, DrawCommand, FrameLoop, FrameRecorder, GridConfig, LoopState, SceneCore};

#[test]
fn facade_exports_the_last_frame_as_json() {
    let mut grid = AgenticGrid::with_seed(200, 100, 7);
    grid.step();

    let json = grid.frame_json().expect("frame should serialise");
    let commands: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
    assert_eq!(commands.len() as u32, grid.last_draw_count());
    assert_eq!(commands[0]["kind"], "clear");
    assert_eq!(commands[0]["width"], 200.0);
    assert!(commands.iter().skip(1).any(|c| c["kind"] == "line"));
}

#[test]
fn facade_reports_scroll_offset_and_frame() {
    let mut grid = AgenticGrid::with_seed(200, 100, 7);
    for _ in 0..40 {
        grid.step();
    }
    assert_eq!(grid.frame(), 40);
    assert_eq!(grid.scroll_offset(), 10.0);
}

#[test]
fn config_json_overrides_reach_the_scene() {
    let scene = SceneCore::from_config_json(300, 200, r#"{ "grid_size": 20, "max_nodes": 3 }"#)
        .expect("config should parse");
    assert_eq!(scene.config().grid_size, 20.0);
    assert_eq!(scene.config().max_nodes, 3);

    assert!(SceneCore::from_config_json(300, 200, r#"{ "pulse_prob": -1 }"#).is_err());
}

#[test]
fn unbounded_config_is_refused_before_any_frame() {
    let err = SceneCore::from_config_json(300, 200, r#"{ "max_nodes": 18446744073709551615 }"#)
        .err()
        .expect("oversized cap should be refused");
    assert!(err.contains("max_nodes"), "{err}");

    let err = SceneCore::from_config_json(300, 200, r#"{ "grid_size": 1e-300 }"#)
        .err()
        .expect("sub-pixel spacing should be refused");
    assert!(err.contains("grid_size"), "{err}");
}

#[test]
fn cancelled_loop_stops_rendering() {
    let mut lp = FrameLoop::new(SceneCore::with_seed(200, 100, GridConfig::default(), 1));
    let mut rec = FrameRecorder::new();
    let token = lp.token();

    assert_eq!(lp.tick(&mut rec), LoopState::Continue);
    token.cancel();
    assert_eq!(lp.tick(&mut rec), LoopState::Stopped);
    assert_eq!(lp.scene().frame(), 1);
}

#[test]
fn every_live_entity_is_drawn_each_frame() {
    let mut scene = SceneCore::with_seed(640, 360, GridConfig::default(), 99);
    let mut rec = FrameRecorder::new();
    for _ in 0..2_000 {
        scene.step(&mut rec);
        assert_eq!(rec.dot_count(), scene.node_count() - spawned_this_frame_nodes(&scene));
        assert_eq!(rec.beam_count(), scene.pulse_count() - spawned_this_frame_pulses(&scene));
        for dot in rec.commands() {
            if let DrawCommand::Dot { center, alpha, .. } = dot {
                assert!((0.0..=1.0).contains(alpha));
                assert!((0.0..360.0).contains(&center.1));
            }
        }
    }
}

// Fresh spawns are appended after the draw pass and have age 0 / untouched progress
fn spawned_this_frame_nodes(scene: &SceneCore) -> usize {
    scene.nodes().iter().filter(|n| n.age == 0).count()
}

fn spawned_this_frame_pulses(scene: &SceneCore) -> usize {
    scene.pulses().iter().filter(|p| p.progress == -p.length).count()
}

#[test]
fn horizontal_pulses_stay_on_surface_rows() {
    let mut scene = SceneCore::with_seed(400, 120, GridConfig::default(), 5);
    let mut rec = FrameRecorder::new();
    for _ in 0..3_000 {
        scene.step(&mut rec);
        for p in scene.pulses() {
            if p.axis == Axis::Horizontal {
                assert!(p.line_index < 3);
            } else {
                assert!(p.line_index < 10);
            }
        }
    }
}
