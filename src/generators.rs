use rand::Rng;

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &[u8] = b"0123456789";
pub const SPECIALS: &[u8] = b"!@#$%^&*()-_=+[]{}|;:,.<>?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Numeric,
    Special,
}

impl CharacterClass {
    pub fn alphabet(self) -> &'static [u8] {
        match self {
            Self::Lowercase => LOWERCASE,
            Self::Uppercase => UPPERCASE,
            Self::Numeric => NUMBERS,
            Self::Special => SPECIALS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.alphabet().contains(&(c as u8))
    }

    /// Picks one character of this class uniformly at random.
    pub fn draw<R: Rng>(self, rng: &mut R) -> char {
        let alphabet = self.alphabet();
        let chosen_index = rng.random_range(0..alphabet.len());

        alphabet[chosen_index] as char
    }
}

/// Flips a fair coin between lower and upper case, then draws from that alphabet.
pub fn generate_letter<R: Rng>(rng: &mut R) -> char {
    let class = if rng.random_bool(0.5) {
        CharacterClass::Lowercase
    } else {
        CharacterClass::Uppercase
    };

    class.draw(rng)
}

pub fn generate_number<R: Rng>(rng: &mut R) -> char {
    CharacterClass::Numeric.draw(rng)
}

pub fn generate_special<R: Rng>(rng: &mut R) -> char {
    CharacterClass::Special.draw(rng)
}
