use super::error::AppError;
use serde::Serialize;

/// Room-count bucket used as a column dimension in every table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum RoomCategory {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4+")]
    FourPlus,
}

impl RoomCategory {
    /// Short code used on the wire and in selector values.
    pub fn code(&self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::FourPlus => "4+",
        }
    }

    /// Human-readable label for legends and table headers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::One => "1 room",
            Self::Two => "2 rooms",
            Self::Three => "3 rooms",
            Self::FourPlus => "4+ rooms",
        }
    }

    /// Position in display order, also used to pick a palette colour.
    pub const fn index(&self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
            Self::Three => 2,
            Self::FourPlus => 3,
        }
    }

    /// All categories in display order.
    pub fn all() -> &'static [Self] {
        &[Self::One, Self::Two, Self::Three, Self::FourPlus]
    }

    /// Maps a loosely formatted source key onto a category.
    ///
    /// Accepts bare numbers (`"2"`), prefixed forms (`"rooms2"`, `"room_2"`) and
    /// open-ended forms (`"4+"`). Any count of four or more lands in `FourPlus`.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim().to_ascii_lowercase();
        let digits = key
            .trim_start_matches("rooms")
            .trim_start_matches("room")
            .trim_start_matches(['_', '-', ' '])
            .trim_end_matches('+');

        match digits.parse::<u32>().ok()? {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            n if n >= 4 => Some(Self::FourPlus),
            _ => None,
        }
    }
}

impl std::fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for RoomCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| AppError::ConfigError(format!("Invalid room category: {s}")))
    }
}

/// One value per room category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ByRoom<T> {
    #[serde(rename = "1")]
    pub one: T,
    #[serde(rename = "2")]
    pub two: T,
    #[serde(rename = "3")]
    pub three: T,
    #[serde(rename = "4+")]
    pub four_plus: T,
}

impl<T: Copy> ByRoom<T> {
    pub const fn new(one: T, two: T, three: T, four_plus: T) -> Self {
        Self {
            one,
            two,
            three,
            four_plus,
        }
    }

    pub fn get(&self, category: RoomCategory) -> T {
        match category {
            RoomCategory::One => self.one,
            RoomCategory::Two => self.two,
            RoomCategory::Three => self.three,
            RoomCategory::FourPlus => self.four_plus,
        }
    }

    pub fn get_mut(&mut self, category: RoomCategory) -> &mut T {
        match category {
            RoomCategory::One => &mut self.one,
            RoomCategory::Two => &mut self.two,
            RoomCategory::Three => &mut self.three,
            RoomCategory::FourPlus => &mut self.four_plus,
        }
    }

    /// Iterates `(category, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (RoomCategory, T)> + '_ {
        RoomCategory::all().iter().map(|&c| (c, self.get(c)))
    }
}

impl ByRoom<u64> {
    pub fn sum(&self) -> u64 {
        self.one
            .saturating_add(self.two)
            .saturating_add(self.three)
            .saturating_add(self.four_plus)
    }
}
