use serde::Serialize;

const KB: u64 = 1024;
const MB: u64 = 1024 * KB;
const GB: u64 = 1024 * MB;
const TB: u64 = 1024 * GB;
const PB: u64 = 1024 * TB;
const EB: u64 = 1024 * PB;

/// Byte-scale bucket a magnitude falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Tier {
    Byte,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
}

struct TierInfo {
    suffix: char,
    width_hex: usize,
    width_dec: usize,
    divisor: u64,
}

// Indexed by `Tier as usize`.
const TIERS: [TierInfo; 7] = [
    TierInfo { suffix: 'b', width_hex: 4, width_dec: 4, divisor: 1 },
    TierInfo { suffix: 'K', width_hex: 8, width_dec: 7, divisor: KB },
    TierInfo { suffix: 'M', width_hex: 8, width_dec: 10, divisor: MB },
    TierInfo { suffix: 'G', width_hex: 12, width_dec: 13, divisor: GB },
    TierInfo { suffix: 'T', width_hex: 16, width_dec: 16, divisor: TB },
    TierInfo { suffix: 'P', width_hex: 16, width_dec: 19, divisor: PB },
    TierInfo { suffix: 'E', width_hex: 16, width_dec: 20, divisor: EB },
];

impl Tier {
    pub const ALL: [Tier; 7] = [
        Tier::Byte,
        Tier::Kilo,
        Tier::Mega,
        Tier::Giga,
        Tier::Tera,
        Tier::Peta,
        Tier::Exa,
    ];

    fn info(self) -> &'static TierInfo {
        &TIERS[self as usize]
    }

    pub fn suffix(self) -> char {
        self.info().suffix
    }

    /// Hex digits printed after `0x` when this tier sets the column width.
    pub fn width_hex(self) -> usize {
        self.info().width_hex
    }

    pub fn width_dec(self) -> usize {
        self.info().width_dec
    }

    pub fn divisor(self) -> u64 {
        self.info().divisor
    }

    /// Natural tier of `v`: the first tier whose upper bound exceeds it.
    pub fn classify(v: u64) -> Tier {
        if v < KB {
            Tier::Byte
        } else if v < MB {
            Tier::Kilo
        } else if v < GB {
            Tier::Mega
        } else if v < TB {
            Tier::Giga
        } else if v < PB {
            Tier::Tera
        } else if v < EB {
            Tier::Peta
        } else {
            Tier::Exa
        }
    }

    /// Tier selected by a trailing scale letter, either case.
    pub fn from_suffix(c: char) -> Option<Tier> {
        match c {
            'k' | 'K' => Some(Tier::Kilo),
            'm' | 'M' => Some(Tier::Mega),
            'g' | 'G' => Some(Tier::Giga),
            't' | 'T' => Some(Tier::Tera),
            'p' | 'P' => Some(Tier::Peta),
            'e' | 'E' => Some(Tier::Exa),
            _ => None,
        }
    }
}

/// Widest natural tier across `values`, used to align every printed column.
pub fn effective_tier(values: &[u64]) -> Tier {
    values
        .iter()
        .map(|&v| Tier::classify(v))
        .max()
        .unwrap_or(Tier::Byte)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, Tier::Byte)]
    #[case(1023, Tier::Byte)]
    #[case(1024, Tier::Kilo)]
    #[case(MB - 1, Tier::Kilo)]
    #[case(MB, Tier::Mega)]
    #[case(GB, Tier::Giga)]
    #[case(TB, Tier::Tera)]
    #[case(PB, Tier::Peta)]
    #[case(EB - 1, Tier::Peta)]
    #[case(EB, Tier::Exa)]
    #[case(u64::MAX, Tier::Exa)]
    fn test_classify_boundaries(#[case] value: u64, #[case] expected: Tier) {
        assert_eq!(Tier::classify(value), expected);
    }

    #[test]
    fn test_classify_is_monotonic() {
        let mut samples: Vec<u64> = (0..64).map(|s| 1u64 << s).collect();
        samples.extend((1..64).map(|s| (1u64 << s) - 1));
        samples.push(u64::MAX);
        samples.sort_unstable();

        for pair in samples.windows(2) {
            assert!(Tier::classify(pair[0]) <= Tier::classify(pair[1]));
        }
    }

    #[test]
    fn test_widths_never_shrink() {
        for pair in Tier::ALL.windows(2) {
            assert!(pair[0].width_hex() <= pair[1].width_hex());
            assert!(pair[0].width_dec() <= pair[1].width_dec());
            assert_eq!(pair[0].divisor() * 1024, pair[1].divisor());
        }
    }

    #[test]
    fn test_effective_tier_takes_widest() {
        assert_eq!(effective_tier(&[]), Tier::Byte);
        assert_eq!(effective_tier(&[5]), Tier::Byte);
        assert_eq!(effective_tier(&[1024, MB]), Tier::Mega);
        assert_eq!(effective_tier(&[TB, 3, GB]), Tier::Tera);
    }

    #[test]
    fn test_from_suffix() {
        assert_eq!(Tier::from_suffix('k'), Some(Tier::Kilo));
        assert_eq!(Tier::from_suffix('E'), Some(Tier::Exa));
        assert_eq!(Tier::from_suffix('b'), None);
        assert_eq!(Tier::from_suffix('x'), None);
    }
}
