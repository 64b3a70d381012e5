//! Calendar grid computation for the day and month pickers.
//!
//! Weeks always start on Monday. Months are zero-based (`0` = January) and
//! constrained by [`Month`], so an invalid month cannot reach the grid code.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// 6 weeks × 7 days. `0` marks a cell with no day.
pub type DayGrid = [[u32; 7]; 6];

/// 4 rows × 3 months, used by the month picker.
pub type MonthGrid<T> = [[T; 3]; 4];

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Zero-based month of the year (`0..=11`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Month(u32);

impl Month {
    pub const JANUARY: Month = Month(0);
    pub const FEBRUARY: Month = Month(1);
    pub const DECEMBER: Month = Month(11);

    pub const ALL: [Month; 12] = [
        Month(0),
        Month(1),
        Month(2),
        Month(3),
        Month(4),
        Month(5),
        Month(6),
        Month(7),
        Month(8),
        Month(9),
        Month(10),
        Month(11),
    ];

    /// Zero-based constructor; `None` outside `0..=11`.
    pub fn new(index: u32) -> Option<Self> {
        (index < 12).then_some(Self(index))
    }

    /// Zero-based index.
    pub fn index(self) -> u32 {
        self.0
    }

    /// One-based month number as used by `chrono` and ISO dates.
    pub fn number(self) -> u32 {
        self.0 + 1
    }
}

impl TryFrom<u32> for Month {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Month::new(value).ok_or_else(|| format!("Invalid month index: {}", value))
    }
}

impl From<Month> for u32 {
    fn from(month: Month) -> Self {
        month.0
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub fn days_in_month(year: i32, month: Month) -> u32 {
    if month == Month::FEBRUARY && is_leap_year(year) {
        29
    } else {
        DAYS_IN_MONTH[month.index() as usize]
    }
}

/// Weekday of the 1st of the month, remapped so Monday = 0 … Sunday = 6.
pub fn first_weekday_of_month(year: i32, month: Month) -> u32 {
    // Years outside chrono's range start on Monday.
    NaiveDate::from_ymd_opt(year, month.number(), 1)
        .map(|date| {
            let sunday_based = date.weekday().num_days_from_sunday();
            if sunday_based == 0 {
                6
            } else {
                sunday_based - 1
            }
        })
        .unwrap_or(0)
}

/// Lays the days of a month out on a Monday-first 6×7 grid.
///
/// `first_weekday` is the column of the 1st (Monday = 0). Cell `i` (1-based,
/// row-major) holds `i - first_weekday` when that is a valid day, else `0`.
pub fn compute_day_grid(year: i32, month: Month, first_weekday: u32) -> DayGrid {
    let days = days_in_month(year, month) as i64;
    let offset = first_weekday as i64;
    let mut grid = [[0u32; 7]; 6];

    for (row_index, row) in grid.iter_mut().enumerate() {
        for (col_index, cell) in row.iter_mut().enumerate() {
            let position = (row_index * 7 + col_index + 1) as i64;
            let day = position - offset;
            if (1..=days).contains(&day) {
                *cell = day as u32;
            }
        }
    }

    grid
}

/// Grid for the month shown by the picker cursor.
pub fn day_grid(cursor: YearMonth) -> DayGrid {
    compute_day_grid(
        cursor.year,
        cursor.month,
        first_weekday_of_month(cursor.year, cursor.month),
    )
}

/// Splits twelve month labels into four rows of three, keeping their order.
pub fn compute_month_grid<T: Clone>(names: &[T; 12]) -> MonthGrid<T> {
    std::array::from_fn(|row| std::array::from_fn(|col| names[row * 3 + col].clone()))
}

/// The month a picker currently displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: Month,
}

impl YearMonth {
    pub fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: Month(date.month0()),
        }
    }

    /// Month before this one. January of `i32::MIN` has no predecessor and stays put.
    pub fn previous(self) -> Self {
        if self.month == Month::JANUARY {
            match self.year.checked_sub(1) {
                Some(year) => Self::new(year, Month::DECEMBER),
                None => self,
            }
        } else {
            Self::new(self.year, Month(self.month.0 - 1))
        }
    }

    /// Month after this one. December of `i32::MAX` has no successor and stays put.
    pub fn next(self) -> Self {
        if self.month == Month::DECEMBER {
            match self.year.checked_add(1) {
                Some(year) => Self::new(year, Month::JANUARY),
                None => self,
            }
        } else {
            Self::new(self.year, Month(self.month.0 + 1))
        }
    }

    pub fn previous_year(self) -> Self {
        Self::new(self.year.saturating_sub(1), self.month)
    }

    pub fn next_year(self) -> Self {
        Self::new(self.year.saturating_add(1), self.month)
    }

    pub fn days(self) -> u32 {
        days_in_month(self.year, self.month)
    }

    pub fn first_day(self) -> Option<NaiveDate> {
        self.date(1)
    }

    /// Date behind a clicked day cell. Empty cells (`0`) give `None`.
    pub fn date(self, day: u32) -> Option<NaiveDate> {
        if day == 0 || day > self.days() {
            return None;
        }
        NaiveDate::from_ymd_opt(self.year, self.month.number(), day)
    }

    /// Month behind a cell of the 4×3 month grid.
    pub fn month_for_cell(row: usize, col: usize) -> Option<Month> {
        if row >= 4 || col >= 3 {
            return None;
        }
        Month::new((row * 3 + col) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(index: u32) -> Month {
        Month::new(index).unwrap()
    }

    fn non_zero(grid: &DayGrid) -> Vec<u32> {
        grid.iter().flatten().copied().filter(|d| *d != 0).collect()
    }

    #[test]
    fn test_leap_years() {
        assert_eq!(days_in_month(2024, Month::FEBRUARY), 29);
        assert_eq!(days_in_month(2023, Month::FEBRUARY), 28);
        assert_eq!(days_in_month(2000, Month::FEBRUARY), 29);
        assert_eq!(days_in_month(1900, Month::FEBRUARY), 28);
        assert_eq!(days_in_month(2023, Month::JANUARY), 31);
        assert_eq!(days_in_month(2023, month(3)), 30);
    }

    #[test]
    fn test_month_bounds() {
        assert!(Month::new(11).is_some());
        assert!(Month::new(12).is_none());
        assert_eq!(month(4).number(), 5);
        assert!(serde_json::from_str::<Month>("12").is_err());
        assert_eq!(serde_json::from_str::<Month>("3").unwrap(), month(3));
    }

    #[test]
    fn test_first_weekday_is_monday_based() {
        // 2024-01-01 was a Monday, 2023-10-01 a Sunday.
        assert_eq!(first_weekday_of_month(2024, Month::JANUARY), 0);
        assert_eq!(first_weekday_of_month(2023, month(9)), 6);
        // 2026-10-01 is a Thursday.
        assert_eq!(first_weekday_of_month(2026, month(9)), 3);
    }

    #[test]
    fn test_february_starting_monday_leaves_last_rows_empty() {
        // February 2021: 28 days, starts on Monday.
        let grid = day_grid(YearMonth::new(2021, Month::FEBRUARY));
        assert_eq!(grid[0], [1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(grid[3], [22, 23, 24, 25, 26, 27, 28]);
        assert_eq!(grid[4], [0; 7]);
        assert_eq!(grid[5], [0; 7]);
    }

    #[test]
    fn test_31_day_month_starting_sunday_uses_six_rows() {
        // October 2023: 31 days, starts on Sunday.
        let grid = day_grid(YearMonth::new(2023, month(9)));
        assert_eq!(grid[0], [0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(grid[5], [30, 31, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_grid_contains_every_day_once_in_order() {
        for year in [1900, 1999, 2000, 2023, 2024, 2100] {
            for m in Month::ALL {
                let grid = day_grid(YearMonth::new(year, m));
                let days = non_zero(&grid);
                let expected: Vec<u32> = (1..=days_in_month(year, m)).collect();
                assert_eq!(days, expected, "{}-{}", year, m.number());

                let flat: Vec<u32> = grid.iter().flatten().copied().collect();
                let first = flat.iter().position(|d| *d != 0).unwrap();
                let last = flat.iter().rposition(|d| *d != 0).unwrap();
                assert!(flat[first..=last].iter().all(|d| *d != 0));
            }
        }
    }

    #[test]
    fn test_compute_day_grid_with_explicit_offset() {
        let grid = compute_day_grid(2023, month(3), 5);
        assert_eq!(grid[0], [0, 0, 0, 0, 0, 1, 2]);
        assert_eq!(grid[4], [24, 25, 26, 27, 28, 29, 30]);
        assert_eq!(grid[5], [0; 7]);
    }

    #[test]
    fn test_month_grid_preserves_order() {
        let names = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        let grid = compute_month_grid(&names);
        assert_eq!(grid.len(), 4);
        assert_eq!(grid[1], ["Apr", "May", "Jun"]);
        let flat: Vec<&str> = grid.iter().flatten().copied().collect();
        assert_eq!(flat, names.to_vec());
    }

    #[test]
    fn test_navigation_rolls_over_years() {
        let december = YearMonth::new(2023, Month::DECEMBER);
        assert_eq!(december.next(), YearMonth::new(2024, Month::JANUARY));
        assert_eq!(december.next().previous(), december);

        let january = YearMonth::new(2024, Month::JANUARY);
        assert_eq!(january.previous(), YearMonth::new(2023, Month::DECEMBER));
        assert_eq!(january.next_year(), YearMonth::new(2025, Month::JANUARY));
        assert_eq!(january.previous_year(), YearMonth::new(2023, Month::JANUARY));
    }

    #[test]
    fn test_navigation_stops_at_year_limits() {
        let last = YearMonth::new(i32::MAX, Month::DECEMBER);
        assert_eq!(last.next(), last);
        assert_eq!(last.next_year(), last);
        assert_eq!(last.previous(), YearMonth::new(i32::MAX, month(10)));

        let first = YearMonth::new(i32::MIN, Month::JANUARY);
        assert_eq!(first.previous(), first);
        assert_eq!(first.previous_year(), first);
        assert_eq!(first.next(), YearMonth::new(i32::MIN, Month::FEBRUARY));
    }

    #[test]
    fn test_cell_selection() {
        let cursor = YearMonth::new(2024, Month::FEBRUARY);
        assert_eq!(cursor.date(0), None);
        assert_eq!(cursor.date(30), None);
        assert_eq!(cursor.date(29), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(cursor.first_day(), NaiveDate::from_ymd_opt(2024, 2, 1));

        assert_eq!(YearMonth::month_for_cell(0, 0), Some(Month::JANUARY));
        assert_eq!(YearMonth::month_for_cell(2, 1), Some(month(7)));
        assert_eq!(YearMonth::month_for_cell(3, 2), Some(Month::DECEMBER));
        assert_eq!(YearMonth::month_for_cell(4, 0), None);
    }

    #[test]
    fn test_from_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(YearMonth::from_date(date), YearMonth::new(2026, month(9)));
    }
}
