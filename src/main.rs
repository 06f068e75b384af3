//! Color Rush headless demo
//!
//! Runs one full session at a fixed 60 Hz step with a scripted auto-player
//! and a logging HUD sink. Pass a numeric seed argument for a reproducible
//! run; set `RUST_LOG=debug` to watch spawns and goal re-rolls.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use color_rush::SessionConfig;
use color_rush::consts::DEMO_DT;
use color_rush::sim::{ColorId, Phase, SessionController};
use color_rush::ui::DisplaySink;

/// HUD sink that logs display updates
struct LogDisplay {
    last_whole_second: i64,
}

impl DisplaySink for LogDisplay {
    fn update_score(&mut self, score: u32) {
        log::info!("score: {score}");
    }

    fn update_time_remaining(&mut self, seconds: f32) {
        let whole = seconds.ceil() as i64;
        if whole != self.last_whole_second {
            self.last_whole_second = whole;
            log::debug!("time remaining: {whole}s");
        }
    }

    fn update_goal_color(&mut self, color: ColorId) {
        log::info!("tap: {}", color.name().to_uppercase());
    }

    fn show_active_panel(&mut self) {
        log::info!("session running");
    }

    fn show_end_panel(&mut self, final_score: u32) {
        log::info!("game over, final score {final_score}");
    }
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xC0FFEE);

    let mut session = SessionController::new(SessionConfig::default(), seed);
    session.attach_display(Box::new(LogDisplay {
        last_whole_second: -1,
    }));
    session.start();

    // Auto-player: every so often goes for a goal target, occasionally
    // fumbles and taps whatever color is up instead.
    let mut player = Pcg32::seed_from_u64(seed ^ 0x9E37_79B9);

    while session.phase == Phase::Active {
        session.tick(DEMO_DT);

        if player.random_bool(0.05) {
            let want_goal = player.random_bool(0.8);
            let pick = session
                .targets
                .iter()
                .find(|t| t.is_goal == want_goal)
                .map(|t| t.id);
            if let Some(id) = pick {
                session.tap(id);
            }
        }
    }

    println!("final score: {}", session.score);
}
