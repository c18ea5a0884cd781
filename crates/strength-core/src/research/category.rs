use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Topical domain a literature review is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    #[default]
    Hypertrophy,
    Strength,
    Power,
    Endurance,
    Recovery,
    InjuryPrevention,
    Nutrition,
    Technology,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 8] = [
        Category::Hypertrophy,
        Category::Strength,
        Category::Power,
        Category::Endurance,
        Category::Recovery,
        Category::InjuryPrevention,
        Category::Nutrition,
        Category::Technology,
    ];

    /// Label shown to the user and embedded in prompts.
    pub fn label(self) -> &'static str {
        match self {
            Self::Hypertrophy => "肌肥大",
            Self::Strength => "最大肌力",
            Self::Power => "爆發力",
            Self::Endurance => "能量系統",
            Self::Recovery => "恢復與監控",
            Self::InjuryPrevention => "傷害預防",
            Self::Nutrition => "運動營養",
            Self::Technology => "運動科技",
        }
    }

    /// Stable key used on the command line and in JSON.
    pub fn key(self) -> &'static str {
        match self {
            Self::Hypertrophy => "hypertrophy",
            Self::Strength => "strength",
            Self::Power => "power",
            Self::Endurance => "endurance",
            Self::Recovery => "recovery",
            Self::InjuryPrevention => "injury-prevention",
            Self::Nutrition => "nutrition",
            Self::Technology => "technology",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Accepts either the key or the display label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(s) || c.label() == s)
            .ok_or_else(|| {
                let keys: Vec<&str> = Self::ALL.iter().map(|c| c.key()).collect();
                format!("unknown category '{}', expected one of: {}", s, keys.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps() {
        assert_eq!(Category::Technology.next(), Category::Hypertrophy);
        assert_eq!(Category::Hypertrophy.previous(), Category::Technology);
        assert_eq!(Category::Strength.next().previous(), Category::Strength);
    }

    #[test]
    fn test_parse_key_and_label() {
        assert_eq!("injury-prevention".parse::<Category>(), Ok(Category::InjuryPrevention));
        assert_eq!("POWER".parse::<Category>(), Ok(Category::Power));
        assert_eq!("運動營養".parse::<Category>(), Ok(Category::Nutrition));
        assert!("cardio".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_uses_key() {
        let json = serde_json::to_string(&Category::InjuryPrevention).unwrap();
        assert_eq!(json, "\"injury-prevention\"");
    }
}
