//! Digit places - the four decimal positions a Cistercian glyph encodes

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One of the four base-10 positions of a number below 10000.
///
/// Declaration order is significance order, so `Thousands` compares greatest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum DigitPlace {
    Units = 0,
    Tens = 1,
    Hundreds = 2,
    Thousands = 3,
}

impl DigitPlace {
    /// All places, least significant first
    pub const ALL: [DigitPlace; 4] = [
        DigitPlace::Units,
        DigitPlace::Tens,
        DigitPlace::Hundreds,
        DigitPlace::Thousands,
    ];

    /// Exponent of ten this place stands for
    pub fn index(self) -> u32 {
        self as u32
    }

    /// 1, 10, 100 or 1000
    pub fn power(self) -> u32 {
        10u32.pow(self.index())
    }

    /// Value of this place in `number` (always 0..=9)
    pub fn digit_of(self, number: u32) -> u8 {
        ((number / self.power()) % 10) as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Units => "units",
            Self::Tens => "tens",
            Self::Hundreds => "hundreds",
            Self::Thousands => "thousands",
        }
    }
}

impl TryFrom<u32> for DigitPlace {
    type Error = Error;

    fn try_from(index: u32) -> Result<Self> {
        match index {
            0 => Ok(Self::Units),
            1 => Ok(Self::Tens),
            2 => Ok(Self::Hundreds),
            3 => Ok(Self::Thousands),
            other => Err(Error::InvalidPlace(other)),
        }
    }
}

impl std::fmt::Display for DigitPlace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_significance_order() {
        assert!(DigitPlace::Thousands > DigitPlace::Hundreds);
        assert!(DigitPlace::Hundreds > DigitPlace::Tens);
        assert!(DigitPlace::Tens > DigitPlace::Units);
    }

    #[test]
    fn test_digit_of() {
        assert_eq!(DigitPlace::Units.digit_of(1234), 4);
        assert_eq!(DigitPlace::Tens.digit_of(1234), 3);
        assert_eq!(DigitPlace::Hundreds.digit_of(1234), 2);
        assert_eq!(DigitPlace::Thousands.digit_of(1234), 1);
        assert_eq!(DigitPlace::Thousands.digit_of(999), 0);
    }

    #[test]
    fn test_try_from_index() {
        for place in DigitPlace::ALL {
            assert_eq!(DigitPlace::try_from(place.index()).unwrap(), place);
        }
        assert_eq!(DigitPlace::try_from(4), Err(Error::InvalidPlace(4)));
    }
}
