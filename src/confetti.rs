use rand::seq::SliceRandom;
use rand::Rng;

/// Number of color slots; the UI maps each index to a terminal color.
pub const COLORS: usize = 6;

const SYMBOLS: [char; 6] = ['*', '+', 'o', '.', '~', '^'];
const BURST: usize = 40;
// Lifetime in ticks; roughly three seconds at the 100ms tick rate.
const FRAMES: u32 = 30;

/// A single piece of falling confetti.
#[derive(Debug, Clone)]
pub struct Piece {
    pub x: f64,
    pub y: f64,
    pub vel_x: f64,
    pub vel_y: f64,
    pub symbol: char,
    pub color_index: usize,
}

impl Piece {
    fn spawn(width: f64, rng: &mut impl Rng) -> Self {
        Self {
            x: rng.gen_range(0.0..width),
            y: rng.gen_range(-3.0..0.0),
            vel_x: rng.gen_range(-0.6..0.6),
            vel_y: rng.gen_range(0.4..1.2),
            symbol: *SYMBOLS.choose(rng).unwrap_or(&'*'),
            color_index: rng.gen_range(0..COLORS),
        }
    }

    fn update(&mut self) {
        self.x += self.vel_x;
        self.y += self.vel_y;
        self.vel_y += 0.05; // gravity
    }
}

/// Tick-driven celebration shown after a perfect game.
#[derive(Debug)]
pub struct Confetti {
    pub pieces: Vec<Piece>,
    frames_left: u32,
    width: f64,
    height: f64,
}

impl Confetti {
    pub fn new() -> Self {
        Self {
            pieces: Vec::new(),
            frames_left: 0,
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn start(&mut self, width: u16, height: u16) {
        let mut rng = rand::thread_rng();
        self.width = width.max(1) as f64;
        self.height = height.max(1) as f64;
        self.frames_left = FRAMES;
        self.pieces = (0..BURST).map(|_| Piece::spawn(self.width, &mut rng)).collect();
    }

    pub fn is_active(&self) -> bool {
        self.frames_left > 0
    }

    /// Advance the animation by one tick: move pieces, drop the ones that
    /// fell off screen, and top the shower back up until time runs out.
    pub fn on_tick(&mut self) {
        if self.frames_left == 0 {
            return;
        }
        self.frames_left -= 1;
        if self.frames_left == 0 {
            self.pieces.clear();
            return;
        }

        for piece in &mut self.pieces {
            piece.update();
        }
        let (width, height) = (self.width, self.height);
        self.pieces
            .retain(|p| p.y <= height + 1.0 && p.x >= -1.0 && p.x <= width + 1.0);

        let mut rng = rand::thread_rng();
        while self.pieces.len() < BURST {
            self.pieces.push(Piece::spawn(self.width, &mut rng));
        }
    }
}

impl Default for Confetti {
    fn default() -> Self {
        Self::new()
    }
}
