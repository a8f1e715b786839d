use crate::view::Dp;

/// Converts density-independent units into terminal cells.
///
/// A terminal cell is roughly twice as tall as it is wide, so a row spans
/// twice the dp of a column and a square in dp stays square on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Density {
    pub dp_per_column: u16,
    pub dp_per_row: u16,
}

impl Default for Density {
    fn default() -> Self {
        Self {
            dp_per_column: 5,
            dp_per_row: 10,
        }
    }
}

impl Density {
    pub fn to_columns(&self, dp: Dp) -> u16 {
        round_div(dp.0, self.dp_per_column)
    }

    pub fn to_rows(&self, dp: Dp) -> u16 {
        round_div(dp.0, self.dp_per_row)
    }
}

fn round_div(value: u16, per: u16) -> u16 {
    let per = per.max(1) as u32;
    ((value as u32 + per / 2) / per) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_conversions() {
        let density = Density::default();
        assert_eq!(density.to_columns(Dp(100)), 20);
        assert_eq!(density.to_rows(Dp(100)), 10);
        assert_eq!(density.to_columns(Dp(16)), 3);
        assert_eq!(density.to_rows(Dp(16)), 2);
        assert_eq!(density.to_rows(Dp(8)), 1);
        assert_eq!(density.to_rows(Dp(0)), 0);
    }

    #[test]
    fn test_zero_divisor_does_not_panic() {
        let density = Density {
            dp_per_column: 0,
            dp_per_row: 0,
        };
        assert_eq!(density.to_columns(Dp(7)), 7);
    }
}
