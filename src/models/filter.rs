use super::room::RoomCategory;

/// Value used by selectors for "no restriction".
pub const ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DistrictSelector {
    #[default]
    All,
    District(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoomSelector {
    #[default]
    All,
    Category(RoomCategory),
}

impl DistrictSelector {
    /// Parses a selector control value; `"all"` lifts the restriction.
    pub fn from_value(value: &str) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::District(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::District(name) => name,
        }
    }
}

impl RoomSelector {
    /// Parses a selector control value. Unknown values fall back to `All`.
    pub fn from_value(value: &str) -> Self {
        if value == ALL {
            return Self::All;
        }
        RoomCategory::from_key(value).map_or(Self::All, Self::Category)
    }

    pub fn value(&self) -> &'static str {
        match self {
            Self::All => ALL,
            Self::Category(category) => category.code(),
        }
    }

    /// Room columns a view should surface for this selection.
    pub fn columns(&self) -> Vec<RoomCategory> {
        match self {
            Self::All => RoomCategory::all().to_vec(),
            Self::Category(category) => vec![*category],
        }
    }
}

/// Current user selection. Replaced as a whole on every change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub district: DistrictSelector,
    pub room: RoomSelector,
}

impl FilterSelection {
    pub fn new(district: DistrictSelector, room: RoomSelector) -> Self {
        Self { district, room }
    }

    pub fn with_district(&self, district: DistrictSelector) -> Self {
        Self {
            district,
            room: self.room,
        }
    }

    pub fn with_room(&self, room: RoomSelector) -> Self {
        Self {
            district: self.district.clone(),
            room,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_values() {
        assert_eq!(DistrictSelector::from_value("all"), DistrictSelector::All);
        assert_eq!(
            DistrictSelector::from_value("Podilskyi").value(),
            "Podilskyi"
        );
        assert_eq!(
            RoomSelector::from_value("4+"),
            RoomSelector::Category(RoomCategory::FourPlus)
        );
        assert_eq!(RoomSelector::from_value("bogus"), RoomSelector::All);
    }

    #[test]
    fn test_room_columns() {
        assert_eq!(RoomSelector::All.columns().len(), 4);
        assert_eq!(
            RoomSelector::Category(RoomCategory::Two).columns(),
            vec![RoomCategory::Two]
        );
    }

    #[test]
    fn test_whole_value_replacement() {
        let base = FilterSelection::default();
        let next = base.with_district(DistrictSelector::District("A".into()));
        assert_eq!(next.room, RoomSelector::All);
        assert_eq!(base.district, DistrictSelector::All);
    }
}
