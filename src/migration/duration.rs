use std::fmt;
use std::ops::Add;

/// Inclusive duration range in whole weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRange {
    pub min: u32,
    pub max: u32,
}

impl WeekRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

impl Add for WeekRange {
    type Output = WeekRange;

    fn add(self, other: WeekRange) -> WeekRange {
        WeekRange::new(self.min + other.min, self.max + other.max)
    }
}

impl fmt::Display for WeekRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{} weeks", self.min)
        } else {
            write!(f, "{}-{} weeks", self.min, self.max)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(WeekRange::new(2, 4).to_string(), "2-4 weeks");
        assert_eq!(WeekRange::new(2, 2).to_string(), "2 weeks");
    }

    #[test]
    fn test_ranges_add_component_wise() {
        let total = [WeekRange::new(1, 2), WeekRange::new(2, 3), WeekRange::new(4, 8)]
            .into_iter()
            .fold(WeekRange::new(0, 0), |acc, r| acc + r);
        assert_eq!(total, WeekRange::new(7, 13));
    }
}
