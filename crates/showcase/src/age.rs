//! Age classification.

/// Life stage derived from an age in years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeGroup {
    Newborn,
    Toddler,
    Preschooler,
    Child,
    Teenager,
    Adult,
    InvalidAge,
}

impl AgeGroup {
    /// Total over every `i32`; negative ages map to [`AgeGroup::InvalidAge`].
    pub fn classify(age: i32) -> Self {
        match age {
            i32::MIN..=-1 => AgeGroup::InvalidAge,
            0 => AgeGroup::Newborn,
            1..=2 => AgeGroup::Toddler,
            3..=5 => AgeGroup::Preschooler,
            6..=12 => AgeGroup::Child,
            13..=18 => AgeGroup::Teenager,
            19.. => AgeGroup::Adult,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AgeGroup::Newborn => "Newborn",
            AgeGroup::Toddler => "Toddler",
            AgeGroup::Preschooler => "Preschooler",
            AgeGroup::Child => "Child",
            AgeGroup::Teenager => "Teenager",
            AgeGroup::Adult => "Adult",
            AgeGroup::InvalidAge => "Invalid age",
        }
    }
}

impl core::fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

pub fn age_group_label(age: i32) -> &'static str {
    AgeGroup::classify(age).label()
}

/// Coarse adult/minor split (18 and over is adult).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeStatus {
    Adult,
    Minor,
}

impl AgeStatus {
    pub fn of(age: i32) -> Self {
        if age >= 18 {
            AgeStatus::Adult
        } else {
            AgeStatus::Minor
        }
    }
}

impl core::fmt::Display for AgeStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AgeStatus::Adult => f.write_str("Adult"),
            AgeStatus::Minor => f.write_str("Minor"),
        }
    }
}
