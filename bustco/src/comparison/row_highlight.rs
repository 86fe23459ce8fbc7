use serde::Serialize;
use std::fmt::Display;

/// background color of a highlighted comparison row.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HighlightColor {
    Gray,
    Blue,
    Red,
    Yellow,
}

impl Display for HighlightColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HighlightColor::Gray => "gray",
            HighlightColor::Blue => "blue",
            HighlightColor::Red => "red",
            HighlightColor::Yellow => "yellow",
        };
        write!(f, "{s}")
    }
}

/// highlight flags of one comparison row.
///
/// `all_equal` excludes every other flag. otherwise the three remaining flags
/// are evaluated independently, always against the ICE value:
/// - `bev_higher`: bev > ice
/// - `bev_ad_higher`: bev_ad > ice
/// - `ice_higher`: ice > bev or ice > bev_ad
///
/// a row that is not all-equal carries at least one flag and may carry several.
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowHighlight {
    pub all_equal: bool,
    pub bev_higher: bool,
    pub bev_ad_higher: bool,
    pub ice_higher: bool,
}

impl RowHighlight {
    pub fn classify(ice: f64, bev: f64, bev_ad: f64) -> RowHighlight {
        if ice == bev && bev == bev_ad {
            return RowHighlight {
                all_equal: true,
                ..Default::default()
            };
        }
        RowHighlight {
            all_equal: false,
            bev_higher: bev > ice,
            bev_ad_higher: bev_ad > ice,
            ice_higher: ice > bev || ice > bev_ad,
        }
    }

    /// colors of the set flags, in flag order.
    pub fn colors(&self) -> Vec<HighlightColor> {
        [
            (self.all_equal, HighlightColor::Gray),
            (self.bev_higher, HighlightColor::Blue),
            (self.bev_ad_higher, HighlightColor::Red),
            (self.ice_higher, HighlightColor::Yellow),
        ]
        .into_iter()
        .filter_map(|(set, color)| set.then_some(color))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{HighlightColor, RowHighlight};

    #[test]
    fn test_bev_and_ice_both_flagged() {
        let h = RowHighlight::classify(10.0, 12.0, 8.0);
        assert!(!h.all_equal);
        assert!(h.bev_higher);
        assert!(!h.bev_ad_higher);
        assert!(h.ice_higher);
        assert_eq!(h.colors(), vec![HighlightColor::Blue, HighlightColor::Yellow]);
    }

    #[test]
    fn test_all_equal_sets_no_other_flag() {
        let h = RowHighlight::classify(5.0, 5.0, 5.0);
        assert_eq!(
            h,
            RowHighlight {
                all_equal: true,
                bev_higher: false,
                bev_ad_higher: false,
                ice_higher: false
            }
        );
        assert_eq!(h.colors(), vec![HighlightColor::Gray]);
    }

    #[test]
    fn test_both_electric_higher() {
        let h = RowHighlight::classify(0.0, 4.0, 4.0);
        assert!(h.bev_higher && h.bev_ad_higher);
        assert!(!h.ice_higher);
    }

    #[test]
    fn test_ice_highest() {
        let h = RowHighlight::classify(9.0, 9.0, 1.0);
        assert_eq!(h.colors(), vec![HighlightColor::Yellow]);
    }
}
