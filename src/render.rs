//! Fixed-cadence render loop
//!
//! A background thread draws the current frame, advances the animation by one
//! tick and sleeps whatever is left of the frame budget. Ticks never overlap:
//! each one holds the shared lock for the draw and the advance.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::draw::LuckyDraw;
use crate::wheel::{SectorCatalog, SpinOutcome, WheelEngine, WheelFrame};

/// Something the render loop can draw and advance
pub trait Animated: Send {
    fn frame(&self) -> WheelFrame;
    fn catalog(&self) -> &SectorCatalog;
    fn tick(&mut self) -> Option<SpinOutcome>;
    fn is_torn_down(&self) -> bool;
    fn teardown(&mut self);
}

impl Animated for WheelEngine {
    fn frame(&self) -> WheelFrame {
        WheelEngine::frame(self)
    }

    fn catalog(&self) -> &SectorCatalog {
        WheelEngine::catalog(self)
    }

    fn tick(&mut self) -> Option<SpinOutcome> {
        WheelEngine::tick(self)
    }

    fn is_torn_down(&self) -> bool {
        WheelEngine::is_torn_down(self)
    }

    fn teardown(&mut self) {
        WheelEngine::teardown(self)
    }
}

impl Animated for LuckyDraw {
    fn frame(&self) -> WheelFrame {
        self.engine().frame()
    }

    fn catalog(&self) -> &SectorCatalog {
        self.engine().catalog()
    }

    fn tick(&mut self) -> Option<SpinOutcome> {
        LuckyDraw::tick(self)
    }

    fn is_torn_down(&self) -> bool {
        self.engine().is_torn_down()
    }

    fn teardown(&mut self) {
        LuckyDraw::teardown(self)
    }
}

/// Host-side drawing collaborator
pub trait WheelRenderer: Send {
    /// Draw one frame; called before the tick that advances it
    fn draw(&mut self, frame: &WheelFrame, catalog: &SectorCatalog);

    /// Drop any images or surfaces held for drawing
    fn release(&mut self) {}
}

/// Renderer that only logs, for headless runs
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: u64,
}

impl LogRenderer {
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl WheelRenderer for LogRenderer {
    fn draw(&mut self, frame: &WheelFrame, catalog: &SectorCatalog) {
        self.frames += 1;
        if log::log_enabled!(log::Level::Trace) {
            let under = frame
                .wedge_under_pointer()
                .and_then(|w| catalog.get(w.index))
                .map(|s| s.label.as_str())
                .unwrap_or("-");
            log::trace!(
                "frame {}: angle={:.2} phase={:?} pointer on {}",
                self.frames,
                frame.angle,
                frame.phase,
                under
            );
        }
    }

    fn release(&mut self) {
        log::debug!("Log renderer released after {} frames", self.frames);
    }
}

/// Handle to the running render thread
#[derive(Debug)]
pub struct RenderLoop {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl RenderLoop {
    /// Start ticking `target` every `frame_delay`
    pub fn spawn<A, R>(target: Arc<Mutex<A>>, mut renderer: R, frame_delay: Duration) -> Self
    where
        A: Animated + 'static,
        R: WheelRenderer + 'static,
    {
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);

        let handle = thread::spawn(move || {
            log::debug!("Render loop started ({:?} per frame)", frame_delay);
            while flag.load(Ordering::Acquire) {
                let frame_start = Instant::now();
                {
                    let mut animated = target.lock();
                    // Teardown may land between the flag check and the lock
                    if animated.is_torn_down() || !flag.load(Ordering::Acquire) {
                        break;
                    }
                    renderer.draw(&animated.frame(), animated.catalog());
                    animated.tick();
                }

                let elapsed = frame_start.elapsed();
                if elapsed < frame_delay {
                    thread::sleep(frame_delay - elapsed);
                }
            }
            flag.store(false, Ordering::Release);
            renderer.release();
            log::debug!("Render loop stopped");
        });

        Self {
            running,
            handle: Some(handle),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Halt the loop, wait for the in-flight frame and release the renderer
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("Render thread panicked");
            }
        }
    }

    /// Stop the loop, then tear down what it was driving
    pub fn teardown<A: Animated>(mut self, target: &Mutex<A>) {
        self.stop();
        target.lock().teardown();
    }
}

impl Drop for RenderLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
