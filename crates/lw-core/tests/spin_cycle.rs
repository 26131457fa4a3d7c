//! End-to-end spin cycle tests
//!
//! Drives a LuckWheel the way a host does:
//! - configure prizes and ranges
//! - spin, then feed frame deltas until the outcome arrives
//! - paint the result onto a recording surface

use std::sync::{Arc, Mutex};
use std::time::Duration;

use approx::assert_relative_eq;
use lw_core::{
    Bounds, GlyphPaint, LuckWheel, Prize, SectorPaint, SpinOutcome, TextMetrics, WheelConfig,
    WheelError, WheelSurface,
};

const FRAME: Duration = Duration::from_millis(16);

// ═══════════════════════════════════════════════════════════════════════════════
// HELPERS
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
struct CountingSurface {
    sectors: usize,
    glyphs: usize,
}

impl TextMetrics for CountingSurface {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * 0.5
    }
}

impl WheelSurface for CountingSurface {
    fn fill_sector(&mut self, _sector: &SectorPaint) {
        self.sectors += 1;
    }

    fn draw_glyph(&mut self, _glyph: &GlyphPaint) {
        self.glyphs += 1;
    }
}

fn wheel_with(count: usize) -> LuckWheel {
    let mut wheel = LuckWheel::new();
    wheel.controller_mut().seed(2024);
    wheel
        .set_prizes(
            (0..count)
                .map(|i| Prize::new(format!("p{i}"), format!("Prize {i}")).with_weight("1"))
                .collect(),
        )
        .unwrap();
    wheel
}

fn run(wheel: &mut LuckWheel) -> SpinOutcome {
    loop {
        if let Some(outcome) = wheel.tick(FRAME) {
            return outcome;
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_four_prize_scenario() {
    let mut wheel = wheel_with(4);
    wheel.set_circle_num_range(10, 10).unwrap();
    wheel.set_one_circle_millis_range(500, 500).unwrap();

    let received = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&received);
    wheel.on_spin_complete(move |outcome| sink.lock().unwrap().push(outcome.prize.clone()));

    let plan = wheel.spin("p2").unwrap();
    assert_eq!(plan.revolutions, 10);
    assert_eq!(plan.total_duration_ms, 5000);
    assert_relative_eq!(plan.total_rotation_degrees, 3420.0);

    let outcome = run(&mut wheel);
    assert_eq!(outcome.prize, wheel.model().prizes()[2]);
    assert_eq!(*received.lock().unwrap(), vec![wheel.model().prizes()[2].clone()]);
    assert_relative_eq!(wheel.controller().baseline_angle(), 180.0);
    assert_eq!(wheel.sector_under_pointer(), 2);
}

#[test]
fn test_every_target_lands_for_many_sizes() {
    for count in [1, 2, 3, 5, 8, 12, 16] {
        let mut wheel = wheel_with(count);
        wheel.set_circle_num_range(1, 3).unwrap();
        wheel.set_one_circle_millis_range(20, 40).unwrap();

        for index in (0..count).rev() {
            let id = format!("p{index}");
            let plan = wheel.spin(&id).unwrap();
            assert!((1..=3).contains(&plan.revolutions));
            assert!((20..=40).contains(&plan.per_revolution_ms));

            let outcome = run(&mut wheel);
            assert_eq!(outcome.target_index, index);
            assert_eq!(outcome.prize.id, id);
            assert_relative_eq!(
                wheel.controller().baseline_angle(),
                360.0 / count as f32 * index as f32,
                epsilon = 1e-3
            );
            assert_eq!(wheel.sector_under_pointer(), index);
        }
    }
}

#[test]
fn test_missing_prize_leaves_state() {
    let mut wheel = LuckWheel::new();
    wheel
        .set_prizes(vec![
            Prize::new("a", "A"),
            Prize::new("b", "B"),
            Prize::new("c", "C"),
        ])
        .unwrap();
    wheel.set_circle_num_range(1, 1).unwrap();
    wheel.set_one_circle_millis_range(10, 10).unwrap();
    wheel.spin("c").unwrap();
    run(&mut wheel);
    let baseline = wheel.controller().baseline_angle();
    let rotation = wheel.rotation();

    assert!(matches!(wheel.spin("d"), Err(WheelError::PrizeNotFound(_))));
    assert!(!wheel.is_spinning());
    assert!(wheel.tick(FRAME).is_none());
    assert_relative_eq!(wheel.controller().baseline_angle(), baseline);
    assert_relative_eq!(wheel.rotation(), rotation);
}

#[test]
fn test_rejected_ranges_keep_previous() {
    let mut wheel = wheel_with(4);
    wheel.set_circle_num_range(3, 4).unwrap();
    assert!(wheel.set_circle_num_range(5, 2).is_err());
    assert!(wheel.set_one_circle_millis_range(9, 1).is_err());

    let settings = wheel.controller().settings();
    assert_eq!((settings.circle_num.min, settings.circle_num.max), (3, 4));
    assert_eq!(
        (settings.one_circle_millis.min, settings.one_circle_millis.max),
        (400, 600)
    );
}

#[test]
fn test_render_during_spin() {
    let mut wheel = wheel_with(6);
    wheel.set_circle_num_range(1, 1).unwrap();
    wheel.spin("p5").unwrap();
    wheel.tick(FRAME);

    let mut surface = CountingSurface::default();
    assert!(wheel.render(Bounds::from_size(320.0, 240.0), &mut surface));
    assert_eq!(surface.sectors, 6);
    // "Prize N" is seven glyphs per sector
    assert_eq!(surface.glyphs, 6 * 7);
}

#[test]
fn test_config_driven_wheel() {
    let config = WheelConfig::from_yaml(
        r#"
profile: Studio
prizes:
  - { id: "10", title: "Ten", rate: "0.1" }
  - { id: "20", title: "Twenty", rate: "0.2" }
"#,
    )
    .unwrap();
    let mut wheel = LuckWheel::from_config(&config).unwrap();
    let plan = wheel.spin("20").unwrap();
    assert_eq!(plan.total_duration_ms, 100);
    let outcome = run(&mut wheel);
    assert_eq!(outcome.prize.weight, "0.2");
}
