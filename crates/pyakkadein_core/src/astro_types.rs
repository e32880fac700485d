//! Types for Myanmar astrological day attributes.

/// Mahabote: the seven houses of the Myanmar horoscope, `(year − weekday) mod 7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Mahabote {
    Binga,
    Atun,
    Yaza,
    Adipati,
    Marana,
    Thike,
    Puti,
}

/// All mahabote houses in index order.
pub const ALL_MAHABOTES: [Mahabote; 7] = [
    Mahabote::Binga,
    Mahabote::Atun,
    Mahabote::Yaza,
    Mahabote::Adipati,
    Mahabote::Marana,
    Mahabote::Thike,
    Mahabote::Puti,
];

impl Mahabote {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Binga => "Binga",
            Self::Atun => "Atun",
            Self::Yaza => "Yaza",
            Self::Adipati => "Adipati",
            Self::Marana => "Marana",
            Self::Thike => "Thike",
            Self::Puti => "Puti",
        }
    }
}

/// Nakhat: the three-year cycle, `year mod 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Nakhat {
    Ogre,
    Elf,
    Human,
}

/// All nakhat in index order.
pub const ALL_NAKHATS: [Nakhat; 3] = [Nakhat::Ogre, Nakhat::Elf, Nakhat::Human];

impl Nakhat {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Ogre => "Ogre",
            Self::Elf => "Elf",
            Self::Human => "Human",
        }
    }
}

/// Nagahle: direction the dragon's head faces, changing every three months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Nagahle {
    West,
    North,
    East,
    South,
}

/// All nagahle directions in index order.
pub const ALL_NAGAHLES: [Nagahle; 4] = [Nagahle::West, Nagahle::North, Nagahle::East, Nagahle::South];

impl Nagahle {
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::West => "West",
            Self::North => "North",
            Self::East => "East",
            Self::South => "South",
        }
    }
}

/// Sabbath status of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sabbath {
    /// Uposatha day: waxing 8, full moon, waning 8, new moon.
    Sabbath,
    /// The day before a sabbath.
    Eve,
}

/// Pyathada (inauspicious) status of a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pyathada {
    /// Inauspicious all day.
    FullDay,
    /// Inauspicious in the afternoon only.
    Afternoon,
}

/// All astrological attributes of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AstrologicalFlags {
    /// Sabbath or sabbath eve, if either.
    pub sabbath: Option<Sabbath>,
    /// Yatyaza (inauspicious) day.
    pub yatyaza: bool,
    /// Pyathada (inauspicious) day or afternoon.
    pub pyathada: Option<Pyathada>,
    /// Thamanyo (auspicious) day.
    pub thamanyo: bool,
    /// Amyeittasote (inauspicious) day.
    pub amyeittasote: bool,
    /// Warameittugyi (auspicious) day.
    pub warameittugyi: bool,
    /// Warameittunge (inauspicious) day.
    pub warameittunge: bool,
    /// Yatpote (inauspicious) day.
    pub yatpote: bool,
    /// Thamaphyu (auspicious) day.
    pub thamaphyu: bool,
    /// Nagapor (inauspicious) day.
    pub nagapor: bool,
    /// Yatyotema (inauspicious) day.
    pub yatyotema: bool,
    /// Mahayatkyan (inauspicious) day.
    pub mahayatkyan: bool,
    /// Shanyat (inauspicious) day.
    pub shanyat: bool,
    pub mahabote: Mahabote,
    pub nakhat: Nakhat,
    pub nagahle: Nagahle,
}

impl AstrologicalFlags {
    pub fn is_sabbath(&self) -> bool {
        self.sabbath == Some(Sabbath::Sabbath)
    }

    pub fn is_sabbath_eve(&self) -> bool {
        self.sabbath == Some(Sabbath::Eve)
    }

    /// Pyathada for the full day or the afternoon.
    pub fn is_pyathada(&self) -> bool {
        self.pyathada.is_some()
    }

    pub fn is_afternoon_pyathada(&self) -> bool {
        self.pyathada == Some(Pyathada::Afternoon)
    }
}
