// src/hero/src/attributes.rs

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

pub const NUM_ATTRIBUTES: usize = 4;

/// Core character attributes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString, Display,
)]
#[strum(serialize_all = "title_case", ascii_case_insensitive)]
pub enum Attribute {
    Strength,
    Intelligence,
    Wisdom,
    Constitution,
}

impl Attribute {
    pub fn all() -> [Attribute; NUM_ATTRIBUTES] {
        [
            Attribute::Strength,
            Attribute::Intelligence,
            Attribute::Wisdom,
            Attribute::Constitution,
        ]
    }

    /// Short display code, e.g. `STR`.
    pub fn abbrev(&self) -> &'static str {
        match self {
            Attribute::Strength => "STR",
            Attribute::Intelligence => "INT",
            Attribute::Wisdom => "WIS",
            Attribute::Constitution => "CON",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Attribute::Strength => 0,
            Attribute::Intelligence => 1,
            Attribute::Wisdom => 2,
            Attribute::Constitution => 3,
        }
    }
}

/// A value for every [`Attribute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    values: [i64; NUM_ATTRIBUTES],
}

impl Attributes {
    pub fn new(strength: i64, intelligence: i64, wisdom: i64, constitution: i64) -> Self {
        Self {
            values: [strength, intelligence, wisdom, constitution],
        }
    }

    pub fn get(&self, attr: Attribute) -> i64 {
        self.values[attr.index()]
    }

    pub fn increase(&mut self, attr: Attribute, amount: i64) {
        self.values[attr.index()] = self.values[attr.index()].saturating_add(amount);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i64)> + '_ {
        Attribute::all().into_iter().map(|attr| (attr, self.get(attr)))
    }
}
