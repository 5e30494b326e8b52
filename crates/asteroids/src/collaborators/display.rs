//! HUD written to the log

use super::UiDisplay;

/// Format a score the way the HUD shows it
pub fn format_score(score: u32) -> String {
    format!("SCORE: {score:05}")
}

/// Format remaining lives as ship glyphs
pub fn format_lives(lives: u32) -> String {
    "▲ ".repeat(lives as usize).trim_end().to_string()
}

/// Display that logs HUD changes and remembers the latest values
#[derive(Debug, Default)]
pub struct LogDisplay {
    score: u32,
    lives: u32,
    game_over: Option<u32>,
    menu_visible: bool,
}

impl LogDisplay {
    /// Create a display
    pub fn new() -> Self {
        Self::default()
    }

    /// Last score shown
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Last lives count shown
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Final score, once the game-over screen is up
    pub fn game_over(&self) -> Option<u32> {
        self.game_over
    }

    /// Whether the start menu is showing
    pub fn menu_visible(&self) -> bool {
        self.menu_visible
    }
}

impl UiDisplay for LogDisplay {
    fn update_score(&mut self, score: u32) {
        self.score = score;
        // A score update means play is under way
        self.menu_visible = false;
        self.game_over = None;
        log::debug!("{}", format_score(score));
    }

    fn update_lives(&mut self, lives: u32) {
        self.lives = lives;
        log::debug!("LIVES: {}", format_lives(lives));
    }

    fn show_game_over(&mut self, final_score: u32) {
        self.game_over = Some(final_score);
        log::info!("GAME OVER - final {}", format_score(final_score));
    }

    fn show_menu(&mut self) {
        self.menu_visible = true;
        log::info!("ASTEROIDS - press start");
    }
}
