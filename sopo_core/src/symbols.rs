/// One reel symbol. The first four make up the common alphabet; `Gu` and
/// `Ki` only ever appear inside the `gktn` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    So,
    Po,
    Ta,
    N,
    Gu,
    Ki,
}

impl Symbol {
    /// Symbols a reel can land on.
    pub const COMMON: [Symbol; 4] = [Symbol::So, Symbol::Po, Symbol::Ta, Symbol::N];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            's' => Some(Symbol::So),
            'p' => Some(Symbol::Po),
            't' => Some(Symbol::Ta),
            'n' => Some(Symbol::N),
            'g' => Some(Symbol::Gu),
            'k' => Some(Symbol::Ki),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Symbol::So => 's',
            Symbol::Po => 'p',
            Symbol::Ta => 't',
            Symbol::N => 'n',
            Symbol::Gu => 'g',
            Symbol::Ki => 'k',
        }
    }

    /// Kana shown to the player.
    pub fn glyph(self) -> char {
        match self {
            Symbol::So => 'そ',
            Symbol::Po => 'ぽ',
            Symbol::Ta => 'た',
            Symbol::N => 'ん',
            Symbol::Gu => 'ぐ',
            Symbol::Ki => 'き',
        }
    }

    pub fn is_common(self) -> bool {
        Self::COMMON.contains(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_mapping_is_reversible() {
        for c in "sptngk".chars() {
            let sym = Symbol::from_char(c).unwrap();
            assert_eq!(sym.to_char(), c);
        }
        assert_eq!(Symbol::from_char('x'), None);
        assert_eq!(Symbol::from_char('S'), None);
    }

    #[test]
    fn only_reel_symbols_are_common() {
        assert!(Symbol::COMMON.iter().all(|s| s.is_common()));
        assert!(!Symbol::Gu.is_common());
        assert!(!Symbol::Ki.is_common());
    }
}
