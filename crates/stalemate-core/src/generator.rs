use crate::{PieceKind, Square};
use serde::{Deserialize, Serialize};

/// Pieces drawn for larger sets, in draw order. Queens come last so the
/// queen cap can shrink the range.
const DRAW_POOL: [PieceKind; 4] = [
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
    PieceKind::Queen,
];

/// Two-piece sets known to stalemate a king
const TWO_PIECE_SETS: [[PieceKind; 2]; 2] = [
    [PieceKind::Queen, PieceKind::Queen],
    [PieceKind::Queen, PieceKind::Bishop],
];

/// Pairs completed by one more piece into a three-piece set
const THREE_PIECE_BASES: [[PieceKind; 2]; 4] = [
    [PieceKind::Rook, PieceKind::Rook],
    [PieceKind::Bishop, PieceKind::Bishop],
    [PieceKind::Knight, PieceKind::Knight],
    [PieceKind::Knight, PieceKind::Bishop],
];

/// Largest piece set the generator draws, attacking king excluded
pub const MAX_PIECES: usize = 10;

/// Configuration for problem generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Upper bound on attacking pieces besides the king, clamped to
    /// `2..=MAX_PIECES`
    pub max_pieces: usize,
    /// Queens allowed before queens drop out of the draw
    pub max_queens: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_pieces: MAX_PIECES,
            max_queens: 5,
        }
    }
}

impl GeneratorConfig {
    /// Small sets that search quickly
    pub fn small() -> Self {
        Self {
            max_pieces: 5,
            max_queens: 5,
        }
    }
}

/// A generated stalemate problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// Square of the defending king
    pub king: Square,
    /// Attacking pieces, attacking king first
    pub pieces: Vec<PieceKind>,
}

/// Random problem generator
pub struct Generator {
    config: GeneratorConfig,
    rng: SimpleRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a new generator with default configuration
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: SimpleRng::new(),
        }
    }

    /// Create a generator with custom configuration
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: SimpleRng::new(),
        }
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: SimpleRng::with_seed(seed),
        }
    }

    pub fn set_config(&mut self, config: GeneratorConfig) {
        self.config = config;
    }

    /// A king square away from the board edge (rows and columns 1 to 6)
    pub fn king_square(&mut self) -> Square {
        let row = self.rng.range_inclusive(1, 6) as u8;
        let col = self.rng.range_inclusive(1, 6) as u8;
        Square::new_unchecked(row, col)
    }

    /// Attacking king followed by 2 to `max_pieces` other pieces
    pub fn pieces(&mut self) -> Vec<PieceKind> {
        let max = self.config.max_pieces.clamp(2, MAX_PIECES);
        let n = self.rng.range_inclusive(2, max);

        let mut result = vec![PieceKind::King];

        match n {
            2 => {
                let set = TWO_PIECE_SETS[self.rng.next_usize(TWO_PIECE_SETS.len())];
                result.extend(set);
            }
            3 => {
                let choice = self.rng.next_usize(THREE_PIECE_BASES.len());
                result.extend(THREE_PIECE_BASES[choice]);
                // Two rooks take anything; the weaker pairs need a rook or queen
                let extra = if choice == 0 {
                    DRAW_POOL[self.rng.next_usize(DRAW_POOL.len())]
                } else {
                    DRAW_POOL[self.rng.range_inclusive(2, 3)]
                };
                result.push(extra);
            }
            _ => {
                let mut queens = 0;
                for _ in 0..n {
                    let pool = if queens >= self.config.max_queens {
                        &DRAW_POOL[..3]
                    } else {
                        &DRAW_POOL[..]
                    };
                    let kind = pool[self.rng.next_usize(pool.len())];
                    if kind == PieceKind::Queen {
                        queens += 1;
                    }
                    result.push(kind);
                }
            }
        }

        result
    }

    /// King square and piece set together
    pub fn problem(&mut self) -> Problem {
        Problem {
            king: self.king_square(),
            pieces: self.pieces(),
        }
    }
}

/// Simple PRNG, seeded from the OS when no seed is given
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new() -> Self {
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            // Fallback: use a static counter if getrandom fails
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        });
        Self::with_seed(u64::from_le_bytes(seed_bytes))
    }

    fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    /// PCG XSH-RR output: 32 bits per step of the 64-bit state
    fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_usize(&mut self, bound: usize) -> usize {
        self.next_u32() as usize % bound
    }

    fn range_inclusive(&mut self, lo: usize, hi: usize) -> usize {
        lo + self.next_usize(hi - lo + 1)
    }
}
