use swipe_snake::{GameConfig, Position, SnakeGame};
use swipe_vision::annotate::char_glyph;

pub const TILE_PX: usize = 24;
pub const HUD_H: usize = 32;

const BG: u32 = 0xFF10_1018;
const HUD_BG: u32 = 0xFF0B_0B10;
const SNAKE_HEAD: u32 = 0xFF66_FF88;
const SNAKE_BODY: u32 = 0xFF2E_B84F;
const FOOD: u32 = 0xFFFF_5040;
const TEXT: u32 = 0xFFE8_E8E8;
const BANNER: u32 = 0xFFFF_D24A;

/// Software renderer for the game. Draws into a packed ARGB buffer sized
/// for the configured grid; the window blits the buffer as-is.
pub struct Renderer {
    width: usize,
    height: usize,
    buf: Vec<u32>,
}

impl Renderer {
    pub fn new(config: &GameConfig) -> Self {
        let width = config.grid_width as usize * TILE_PX;
        let height = config.grid_height as usize * TILE_PX + HUD_H;
        Self {
            width,
            height,
            buf: vec![BG; width * height],
        }
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn buffer(&self) -> &[u32] {
        &self.buf
    }

    pub fn render(&mut self, game: &SnakeGame) {
        self.buf.fill(BG);

        self.fill_rect(0, 0, self.width, HUD_H, HUD_BG);
        let score_text = format!("SCORE: {}", game.score());
        self.draw_label(&score_text, 10, 9, 3, TEXT);

        self.fill_tile(game.food(), FOOD);
        for &segment in game.snake().segments() {
            self.fill_tile(segment, SNAKE_BODY);
        }
        self.fill_tile(game.snake().head(), SNAKE_HEAD);

        if !game.is_alive() {
            self.draw_centered_label("GAME OVER", self.height / 2 - 20, 4, BANNER);
            self.draw_centered_label("SWIPE TO RESTART", self.height / 2 + 10, 3, TEXT);
        }
    }

    fn fill_tile(&mut self, pos: Position, color: u32) {
        if pos.x < 0 || pos.y < 0 {
            return;
        }
        let x = pos.x as usize * TILE_PX;
        let y = HUD_H + pos.y as usize * TILE_PX;
        // 1px gap keeps adjacent tiles visually distinct
        self.fill_rect(x + 1, y + 1, TILE_PX - 2, TILE_PX - 2, color);
    }

    fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        for row in y..(y + h).min(self.height) {
            for col in x..(x + w).min(self.width) {
                self.buf[row * self.width + col] = color;
            }
        }
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: u32) {
        if x < self.width && y < self.height {
            self.buf[y * self.width + x] = color;
        }
    }

    /// 3x5 bitmap font scaled up by `scale`.
    fn draw_label(&mut self, text: &str, x: usize, y: usize, scale: usize, color: u32) {
        let mut cx = x;
        for ch in text.chars() {
            let glyph = char_glyph(ch);
            for (row, &bits) in glyph.iter().enumerate() {
                for col in 0..3usize {
                    if bits & (1 << (2 - col)) != 0 {
                        for dy in 0..scale {
                            for dx in 0..scale {
                                self.set_pixel(
                                    cx + col * scale + dx,
                                    y + row * scale + dy,
                                    color,
                                );
                            }
                        }
                    }
                }
            }
            cx += 4 * scale;
            if cx >= self.width {
                break;
            }
        }
    }

    fn draw_centered_label(&mut self, text: &str, y: usize, scale: usize, color: u32) {
        let text_w = text.chars().count() * 4 * scale;
        let x = self.width.saturating_sub(text_w) / 2;
        self.draw_label(text, x, y, scale, color);
    }
}
