//! Headless knob driver
//!
//! Builds a knob from a configuration profile and replays a scripted drag and
//! key presses against it, printing the value and angle after every step.

use std::rc::Rc;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use knob_area::config::AppConfig;
use knob_area::health;
use knob_area::knob::{
    ElementBox, GlobalInput, KeyCode, KeyEvent, KnobArea, KnobCallbacks, KnobEnvironment,
    ListenerRegistry, ManualFrames, OffsetChain, PointerEvent,
};

#[derive(Debug, Parser)]
#[command(name = "knob", version, about = "Drive a headless rotary knob")]
struct Cli {
    /// Configuration profile (defaults to KNOB_PROFILE or "release")
    #[arg(long)]
    profile: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    min: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    max: Option<f64>,

    #[arg(long)]
    step: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    value: Option<f64>,

    #[arg(long)]
    diameter: Option<f64>,

    /// Pointer positions "X,Y" relative to the knob's top-left corner; the
    /// first presses, the rest drag
    #[arg(long = "drag", value_parser = parse_point, allow_hyphen_values = true)]
    drag: Vec<[f64; 2]>,

    /// Arrow keys to press after the drag
    #[arg(long = "key", value_enum)]
    keys: Vec<KeyArg>,

    /// Run the health checks and exit
    #[arg(long)]
    health: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KeyArg {
    Up,
    Down,
}

impl From<KeyArg> for KeyCode {
    fn from(key: KeyArg) -> Self {
        match key {
            KeyArg::Up => KeyCode::Up,
            KeyArg::Down => KeyCode::Down,
        }
    }
}

fn parse_point(s: &str) -> Result<[f64; 2], String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{s}'"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid coordinate '{part}': {e}"))
    };
    Ok([parse(x)?, parse(y)?])
}

fn print_state(step: &str, knob: &KnobArea) {
    println!(
        "{step:>12}  value {:>8}  angle {:>5}",
        knob.value(),
        knob.angle()
    );
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    if cli.health {
        let report = health::run_all_checks();
        health::print_report(&report);
        std::process::exit(report.exit_code());
    }

    let loaded = match &cli.profile {
        Some(profile) => AppConfig::load(profile),
        None => AppConfig::load_from_env(),
    };
    let AppConfig {
        profile,
        knob: mut settings,
    } = loaded.unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using default configuration");
        AppConfig::default()
    });

    settings.min = cli.min.unwrap_or(settings.min);
    settings.max = cli.max.unwrap_or(settings.max);
    settings.step = cli.step.unwrap_or(settings.step);
    settings.value = cli.value.unwrap_or(settings.value);
    settings.diameter = cli.diameter.unwrap_or(settings.diameter);
    info!(%profile, ?settings, "Starting knob");

    let registry = Rc::new(ListenerRegistry::new());
    let frames = Rc::new(ManualFrames::new());
    let element = OffsetChain::new(vec![
        ElementBox::new("div", [0.0, 0.0]),
        ElementBox::new("body", [0.0, 0.0]),
    ]);
    let env = KnobEnvironment::new(Rc::new(element), registry.clone(), frames.clone());

    let callbacks = KnobCallbacks::new()
        .on_interaction_change(|is_interacting| info!(is_interacting, "Interaction changed"));
    let props = settings.to_props().with_callbacks(callbacks);
    let mut knob = KnobArea::new(env, &props).context("invalid knob configuration")?;
    print_state("initial", &knob);

    if let Some((press, moves)) = cli.drag.split_first() {
        knob.handle_pointer_down(&PointerEvent::at(press[0], press[1]));
        knob.on_frame();
        print_state("press", &knob);

        for point in moves {
            let input = GlobalInput::PointerMove(PointerEvent::at(point[0], point[1]));
            registry.dispatch(&input, [&mut knob]);
            knob.on_frame();
            print_state("drag", &knob);
        }
        registry.dispatch(&GlobalInput::PointerUp, [&mut knob]);
    }

    if !cli.keys.is_empty() {
        knob.handle_focus();
        for key in &cli.keys {
            knob.handle_key_down(&KeyEvent::new((*key).into()));
            print_state(&format!("key {key:?}").to_lowercase(), &knob);
        }
        knob.handle_blur();
    }

    info!(
        value = knob.value(),
        angle = knob.angle(),
        frames = frames.requested(),
        listeners = registry.len(),
        "Done"
    );
    Ok(())
}
