// src/hero/src/class.rs

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::attributes::Attributes;

/// Player archetypes.
#[derive(
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
)]
#[strum(serialize_all = "title_case", ascii_case_insensitive)]
pub enum Class {
    /// Strong and sturdy.
    #[default]
    Fighter,
    /// Deep mana pool, light on health.
    Mage,
    /// Even across the board.
    Rogue,
}

impl Class {
    /// Starting attributes of the class.
    pub fn base_attributes(&self) -> Attributes {
        match self {
            //                                STR INT WIS CON
            Class::Fighter => Attributes::new(15, 10, 10, 12),
            Class::Mage => Attributes::new(10, 12, 15, 10),
            Class::Rogue => Attributes::new(12, 12, 12, 12),
        }
    }

    /// Catalog portrait shown for the class.
    pub fn portrait(&self) -> Portrait {
        match self {
            Class::Fighter => Portrait::Fighter,
            Class::Mage => Portrait::Mage,
            Class::Rogue => Portrait::Rogue,
        }
    }
}

/// Character portraits known to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Portrait {
    Fighter,
    Mage,
    Rogue,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::Attribute;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_base_attributes() {
        let mage = Class::Mage.base_attributes();
        assert_eq!(mage.get(Attribute::Strength), 10);
        assert_eq!(mage.get(Attribute::Intelligence), 12);
        assert_eq!(mage.get(Attribute::Wisdom), 15);
        assert_eq!(mage.get(Attribute::Constitution), 10);

        assert_eq!(Class::Fighter.base_attributes(), Attributes::new(15, 10, 10, 12));
        assert_eq!(Class::Rogue.base_attributes(), Attributes::new(12, 12, 12, 12));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Class::from_str("MAGE"), Ok(Class::Mage));
        assert_eq!(Class::from_str("rogue"), Ok(Class::Rogue));
        assert_eq!(Class::from_str("Fighter"), Ok(Class::Fighter));
        assert!(Class::from_str("Huntress").is_err());
    }

    #[test]
    fn test_names_and_portraits() {
        let names: Vec<String> = Class::iter().map(|c| c.to_string()).collect();
        assert_eq!(names, vec!["Fighter", "Mage", "Rogue"]);
        for class in Class::iter() {
            assert_eq!(class.portrait().to_string(), class.to_string());
        }
    }
}
