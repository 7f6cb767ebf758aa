//! The collectible alphabet and the per-level letter layout.

use rand::Rng;

use crate::entities::Letter;
use crate::tuning::Tuning;

/// Armenian capitals used as collectibles.
pub const ARMENIAN_LETTERS: [char; 38] = [
    'Ա', 'Բ', 'Գ', 'Դ', 'Ե', 'Զ', 'Է', 'Ը', 'Թ', 'Ժ', 'Ի', 'Լ', 'Խ', 'Ծ', 'Կ', 'Հ', 'Ձ', 'Ղ',
    'Ճ', 'Մ', 'Յ', 'Ն', 'Շ', 'Ո', 'Չ', 'Պ', 'Ջ', 'Ռ', 'Ս', 'Վ', 'Տ', 'Ր', 'Ց', 'Ւ', 'Փ', 'Ք',
    'Օ', 'Ֆ',
];

/// Glyph drawn for the player character.
pub const PLAYER_GLYPH: char = 'Ճ';
/// Glyph drawn for the boss.
pub const BOSS_GLYPH: char = 'Չ';

pub fn is_alphabet_glyph(c: char) -> bool {
    ARMENIAN_LETTERS.contains(&c)
}

/// Build the collectible set for `level`.
///
/// Glyphs are drawn uniformly with repeats; x follows a fixed stride and y is
/// one of the two platform heights. The level does not change the layout yet.
pub fn generate_letters(_level: u32, tuning: &Tuning, rng: &mut impl Rng) -> Vec<Letter> {
    (0..tuning.letter_count)
        .map(|i| {
            let glyph = ARMENIAN_LETTERS[rng.gen_range(0..ARMENIAN_LETTERS.len())];
            let y = if rng.gen_bool(0.5) {
                tuning.letter_high_y
            } else {
                tuning.letter_low_y
            };
            Letter {
                id: i,
                glyph,
                x: tuning.letter_start_x + i as f32 * tuning.letter_stride_x,
                y,
                collected: false,
            }
        })
        .collect()
}
