//! LuckWheel - Prize wheel demo host
//!
//! Opens an iced window with the wheel and one "spin to" button per prize,
//! or simulates a spin without a window (`--headless`).

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use iced::widget::canvas::Cache;
use iced::widget::{Row, button, column, container, text};
use iced::{Element, Length, Subscription, Task, Theme};

use lw_core::{LuckWheel, Prize, SpinOutcome, WheelConfig};
use lw_gui::{Palette, Sizes, wheel_view};

/// Frame step used by the headless simulation (60 fps)
const SIM_FRAME: Duration = Duration::from_millis(16);

#[derive(Parser, Debug)]
#[command(name = "luckwheel", version, about = "Lucky prize wheel demo")]
struct Args {
    /// Wheel config (JSON or YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for reproducible spins
    #[arg(short, long)]
    seed: Option<u64>,

    /// Simulate one spin and print the result instead of opening a window
    #[arg(long)]
    headless: bool,

    /// Prize id to land on in headless mode (defaults to the first prize)
    #[arg(short, long, requires = "headless")]
    target: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let wheel = build_wheel(&args)?;

    if args.headless {
        return simulate(wheel, args.target.as_deref());
    }

    log::info!("Starting LuckWheel...");
    iced::application("LuckWheel", WheelDemo::update, WheelDemo::view)
        .subscription(WheelDemo::subscription)
        .theme(|_| Theme::Dark)
        .window_size((720.0, 640.0))
        .antialiasing(true)
        .run_with(move || (WheelDemo::new(wheel), Task::none()))?;
    Ok(())
}

fn build_wheel(args: &Args) -> anyhow::Result<LuckWheel> {
    let mut wheel = match &args.config {
        Some(path) => LuckWheel::from_config(&WheelConfig::load(path)?)?,
        None => {
            let mut wheel = LuckWheel::new();
            wheel.set_prizes(demo_prizes())?;
            wheel
        }
    };
    if let Some(seed) = args.seed {
        wheel.controller_mut().seed(seed);
    }
    Ok(wheel)
}

fn demo_prizes() -> Vec<Prize> {
    [
        "Coupon", "Mug", "Thanks", "Headset", "Voucher", "Thanks", "Tablet", "Phone",
    ]
    .iter()
    .enumerate()
    .map(|(i, label)| Prize::new((i + 1).to_string(), *label))
    .collect()
}

/// Run one spin at a fixed frame rate and report it
fn simulate(mut wheel: LuckWheel, target: Option<&str>) -> anyhow::Result<()> {
    let target = match target {
        Some(id) => id.to_string(),
        None => wheel.model().prize(0)?.id.clone(),
    };

    let plan = wheel.spin(&target)?;
    println!(
        "Spin to {:?}: {} revolutions × {}ms = {}ms, {:.1}° → {:.1}°",
        target,
        plan.revolutions,
        plan.per_revolution_ms,
        plan.total_duration_ms,
        plan.start_rotation_degrees,
        plan.total_rotation_degrees
    );

    let mut frames = 0u64;
    let outcome = loop {
        frames += 1;
        if let Some(outcome) = wheel.tick(SIM_FRAME) {
            break outcome;
        }
        if frames % 30 == 0 {
            log::debug!(
                "frame {frames}: {:.1}° (sector {})",
                wheel.rotation(),
                wheel.sector_under_pointer()
            );
        }
    };

    println!(
        "Landed on {:?} \"{}\" after {} frames (rotation {:.1}°, pointer sector {})",
        outcome.prize.id,
        outcome.prize.label,
        frames,
        outcome.rotation,
        wheel.sector_under_pointer()
    );
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════════
// WINDOW
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state
struct WheelDemo {
    wheel: LuckWheel,
    // Static pointer/hub layer
    chrome: Cache,
    last_frame: Option<Instant>,
    last_outcome: Option<SpinOutcome>,
    status: String,
}

#[derive(Debug, Clone)]
enum Message {
    /// Spin to the prize with this id
    Spin(String),

    /// Animation frame while spinning
    Frame(Instant),
}

impl WheelDemo {
    fn new(wheel: LuckWheel) -> Self {
        Self {
            wheel,
            chrome: Cache::new(),
            last_frame: None,
            last_outcome: None,
            status: String::from("Pick a prize to spin to"),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.wheel.is_spinning() {
            iced::window::frames().map(Message::Frame)
        } else {
            Subscription::none()
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Spin(id) => match self.wheel.spin(&id) {
                Ok(plan) => {
                    self.last_frame = None;
                    self.status = format!(
                        "Spinning {} revolutions over {:.1}s...",
                        plan.revolutions,
                        plan.total_duration_ms as f64 / 1000.0
                    );
                }
                Err(e) => {
                    log::warn!("Spin failed: {}", e);
                    self.status = e.to_string();
                }
            },

            Message::Frame(now) => {
                let dt = self
                    .last_frame
                    .map(|last| now.saturating_duration_since(last))
                    .unwrap_or(Duration::ZERO);
                self.last_frame = Some(now);

                if let Some(outcome) = self.wheel.tick(dt) {
                    self.status = format!("You won: {}", outcome.prize.label);
                    self.last_outcome = Some(outcome);
                    self.last_frame = None;
                }
            }
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let spinning = self.wheel.is_spinning();

        let buttons: Vec<Element<Message>> = self
            .wheel
            .model()
            .prizes()
            .iter()
            .map(|prize| {
                button(text(prize.label.as_str()).size(Sizes::TEXT_SMALL))
                    .on_press_maybe((!spinning).then(|| Message::Spin(prize.id.clone())))
                    .into()
            })
            .collect();

        let result = match &self.last_outcome {
            Some(outcome) => text(format!("Last prize: {} (#{})", outcome.prize.label, outcome.prize.id))
                .size(Sizes::TEXT_NORMAL)
                .color(Palette::ACCENT_GREEN),
            None => text("").size(Sizes::TEXT_NORMAL),
        };

        let content = column![
            text("LuckWheel").size(24).color(Palette::TEXT_PRIMARY),
            wheel_view(&self.wheel, &self.chrome, Length::Shrink, Length::Shrink),
            Row::with_children(buttons).spacing(Sizes::SPACING_NORMAL),
            text(&self.status).size(Sizes::TEXT_HEADER).color(Palette::TEXT_SECONDARY),
            result,
        ]
        .spacing(Sizes::SPACING_LARGE)
        .align_x(iced::Alignment::Center);

        container(content)
            .padding(Sizes::SPACING_LARGE)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(|_| container::Style::default().background(Palette::BG_DEEPEST))
            .into()
    }
}
