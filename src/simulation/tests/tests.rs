use super::*;
use crate::domain::Axis;
use crate::render::{DrawCommand, FrameRecorder};

fn quiet() -> GridConfig {
    GridConfig {
        node_prob: 0.0,
        pulse_prob: 0.0,
        ..GridConfig::default()
    }
}

#[test]
fn scroll_offset_tracks_frame_count() {
    let mut scene = SceneCore::with_seed(200, 100, GridConfig::default(), 1);
    let mut rec = FrameRecorder::new();
    assert_eq!(scene.scroll_offset(), 0.0);
    for t in 1..=500u64 {
        scene.step(&mut rec);
        assert_eq!(scene.frame(), t);
        assert_eq!(scene.scroll_offset(), t as f64 * 0.25);
    }
}

#[test]
fn grid_lines_shift_by_ten_after_forty_frames() {
    let mut scene = SceneCore::with_seed(200, 100, quiet(), 1);
    let mut rec = FrameRecorder::new();
    for _ in 0..40 {
        scene.step(&mut rec);
    }
    assert_eq!(rec.horizontal_line_ys(), vec![10.0, 50.0, 90.0]);
    assert_eq!(rec.vertical_line_xs(), vec![0.0, 40.0, 80.0, 120.0, 160.0, 200.0]);
}

#[test]
fn frame_starts_with_a_clear_of_the_current_size() {
    let mut scene = SceneCore::with_seed(320, 180, quiet(), 1);
    let mut rec = FrameRecorder::new();
    scene.step(&mut rec);
    assert_eq!(
        rec.commands()[0],
        DrawCommand::Clear { width: 320.0, height: 180.0 }
    );
    assert_eq!(scene.last_draw_count() as usize, rec.len());
}

#[test]
fn resize_applies_from_the_next_frame() {
    let mut scene = SceneCore::with_seed(200, 100, quiet(), 1);
    let mut rec = FrameRecorder::new();
    for _ in 0..40 {
        scene.step(&mut rec);
    }
    scene.resize(200, 200);
    // Recorded frame still reflects the old height
    assert_eq!(rec.horizontal_line_ys(), vec![10.0, 50.0, 90.0]);

    scene.step(&mut rec);
    let offset = 41.0 * 0.25;
    let expected: Vec<f64> = (0..5).map(|k| (k as f64 * 40.0 + offset) % 200.0).collect();
    assert_eq!(rec.horizontal_line_ys(), expected);
}

#[test]
fn populations_never_exceed_their_caps() {
    for config in [
        GridConfig::default(),
        GridConfig {
            node_prob: 1.0,
            pulse_prob: 1.0,
            ..GridConfig::default()
        },
    ] {
        let mut scene = SceneCore::with_seed(640, 360, config, 77);
        let mut rec = FrameRecorder::new();
        for _ in 0..5_000 {
            scene.step(&mut rec);
            assert!(scene.node_count() <= 15);
            assert!(scene.pulse_count() <= 8);
        }
    }
}

#[test]
fn saturated_scene_reaches_the_caps() {
    let config = GridConfig {
        node_prob: 1.0,
        pulse_prob: 1.0,
        ..GridConfig::default()
    };
    let mut scene = SceneCore::with_seed(640, 360, config, 3);
    let mut rec = FrameRecorder::new();
    for _ in 0..20 {
        scene.step(&mut rec);
    }
    assert_eq!(scene.node_count(), 15);
    assert_eq!(scene.pulse_count(), 8);
}

#[test]
fn node_with_max_life_thirty_lives_exactly_through_age_thirty() {
    let mut scene = SceneCore::with_seed(200, 100, quiet(), 1);
    let mut rec = FrameRecorder::new();
    scene.nodes.push(Node::new(1, 1, 30.0));

    for age in 1..=30 {
        scene.step(&mut rec);
        assert_eq!(scene.node_count(), 1, "missing at age {age}");
        assert_eq!(scene.nodes()[0].age, age);
        assert_eq!(rec.dot_count(), 1);
    }

    scene.step(&mut rec);
    assert_eq!(scene.node_count(), 0);
    assert_eq!(rec.dot_count(), 0);

    for _ in 0..100 {
        scene.step(&mut rec);
        assert_eq!(scene.node_count(), 0);
    }
}

#[test]
fn pulse_progress_is_monotonic_until_removal() {
    let mut scene = SceneCore::with_seed(200, 100, quiet(), 1);
    let mut rec = FrameRecorder::new();
    scene.pulses.push(Pulse::new(Axis::Vertical, 2, 60.0, 3.0));

    let mut last = -60.0;
    let mut ticks = 0;
    while scene.pulse_count() == 1 {
        scene.step(&mut rec);
        ticks += 1;
        if let Some(p) = scene.pulses().first() {
            assert!(p.progress >= last);
            assert!(p.progress <= 100.0 + 60.0);
            last = p.progress;
        }
    }
    // -60 + 3n > 160 first holds at n = 74
    assert_eq!(ticks, 74);
}

#[test]
fn same_seed_renders_the_same_frames() {
    let mut a = SceneCore::with_seed(400, 300, GridConfig::default(), 2024);
    let mut b = SceneCore::with_seed(400, 300, GridConfig::default(), 2024);
    let mut rec_a = FrameRecorder::new();
    let mut rec_b = FrameRecorder::new();
    for _ in 0..300 {
        a.step(&mut rec_a);
        b.step(&mut rec_b);
        assert_eq!(rec_a.commands(), rec_b.commands());
    }
}

#[test]
fn zero_sized_surface_is_harmless() {
    let mut scene = SceneCore::with_seed(0, 0, GridConfig::default(), 5);
    let mut rec = FrameRecorder::new();
    for _ in 0..200 {
        scene.step(&mut rec);
    }
    assert!(rec.horizontal_line_ys().is_empty());
    assert!(scene.node_count() <= 15);
}

#[test]
fn perf_stats_are_opt_in() {
    let mut scene = SceneCore::with_seed(200, 100, GridConfig::default(), 1);
    let mut rec = FrameRecorder::new();
    scene.step(&mut rec);
    assert_eq!(scene.get_perf_stats(), FrameStats::default());

    scene.enable_perf_metrics(true);
    scene.step(&mut rec);
    let stats = scene.get_perf_stats();
    assert_eq!(stats.frame(), 2);
    assert_eq!(stats.draw_calls(), scene.last_draw_count());
    assert!(stats.frame_ms() >= 0.0);

    scene.enable_perf_metrics(false);
    assert_eq!(scene.get_perf_stats(), FrameStats::default());
}
