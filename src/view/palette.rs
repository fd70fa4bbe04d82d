//! Soft color palette used by cards and chart lines

use serde::{Deserialize, Serialize};

/// Color token; the presentation layer maps it to a hex value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SoftColor {
    Blue,
    Green,
    Pink,
    Purple,
    Teal,
    Orange,
    Indigo,
    Red,
}

impl SoftColor {
    pub fn all() -> &'static [SoftColor] {
        &[
            SoftColor::Blue,
            SoftColor::Green,
            SoftColor::Pink,
            SoftColor::Purple,
            SoftColor::Teal,
            SoftColor::Orange,
            SoftColor::Indigo,
            SoftColor::Red,
        ]
    }

    pub fn hex(&self) -> &'static str {
        match self {
            SoftColor::Blue => "#63B3ED",
            SoftColor::Green => "#68D391",
            SoftColor::Pink => "#F687B3",
            SoftColor::Purple => "#B794F4",
            SoftColor::Teal => "#4FD1C5",
            SoftColor::Orange => "#F6AD55",
            SoftColor::Indigo => "#7F9CF5",
            SoftColor::Red => "#FC8181",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SoftColor::Blue => "blue",
            SoftColor::Green => "green",
            SoftColor::Pink => "pink",
            SoftColor::Purple => "purple",
            SoftColor::Teal => "teal",
            SoftColor::Orange => "orange",
            SoftColor::Indigo => "indigo",
            SoftColor::Red => "red",
        }
    }
}

impl std::fmt::Display for SoftColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_values_are_distinct() {
        let mut seen: Vec<&str> = SoftColor::all().iter().map(|c| c.hex()).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), SoftColor::all().len());
        assert!(seen.iter().all(|h| h.starts_with('#') && h.len() == 7));
    }

    #[test]
    fn test_serialized_name_matches_display() {
        for color in SoftColor::all() {
            let json = serde_json::to_string(color).unwrap();
            assert_eq!(json, format!("\"{}\"", color));
        }
    }
}
