//! Lucky Wheel headless runner
//!
//! Usage: `lucky-wheel [settings.json] [spins]`
//!
//! Runs the render loop with a logging renderer and spins the wheel a few
//! times, printing each prize. Set `RUST_LOG=trace` to see every frame.

use std::sync::Arc;
use std::sync::mpsc;
use std::time::Duration;

use lucky_wheel::render::LogRenderer;
use lucky_wheel::{LuckyDraw, RenderLoop, Settings};

const DEFAULT_SPINS: usize = 3;

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let spins = match args.next() {
        Some(n) => n.parse()?,
        None => DEFAULT_SPINS,
    };

    let mut draw = LuckyDraw::stock(&settings)?;
    let (tx, rx) = mpsc::channel();
    draw.engine_mut().on_spin_complete(move |outcome| {
        let _ = tx.send(outcome.clone());
    });
    let shared = draw.into_shared();

    let render_loop = RenderLoop::spawn(
        Arc::clone(&shared),
        LogRenderer::default(),
        settings.frame_delay(),
    );

    // Generous bound: the deceleration of a 3-turn spin takes well under 100 frames
    let timeout = settings.frame_delay() * 200 + Duration::from_millis(settings.spin_duration_ms);

    for round in 1..=spins {
        let index = shared.lock().spin()?;
        log::info!("Spin {}/{}: wheel heading for sector {}", round, spins, index);

        let outcome = rx.recv_timeout(timeout)?;
        println!("[{round}] {}", outcome.announcement());
    }

    render_loop.teardown(&shared);
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Lucky Wheel starting...");

    if let Err(err) = run() {
        log::error!("{err}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
