//! Integration test: layout properties of whole years.

use chrono::{Datelike, NaiveDate};
use yearcal::calendar::{days_in_month, weekday_index, weeks_in_month, NoHolidays};
use yearcal::grid::{build_grid, GridStyle, GridSummary};
use yearcal::locale::NorwayCalendar;
use yearcal::palette::Palette;
use yearcal::render::{TableDocument, TableModel};

const YEARS: std::ops::RangeInclusive<i32> = 1996..=2032;

fn layout(year: i32) -> (TableModel, GridSummary) {
    let mut doc = TableDocument::new();
    let summary = build_grid(year, &GridStyle::default(), &NoHolidays, &mut doc).unwrap();
    (doc.table().unwrap().clone(), summary)
}

/// (row, col) of every placed cell, in reading order, with its text.
fn placed(table: &TableModel) -> Vec<(usize, usize, String)> {
    let mut out = Vec::new();
    for (r, row) in table.rows.iter().enumerate() {
        for (c, cell) in row.cells.iter().enumerate() {
            if !cell.is_blank() {
                out.push((r, c, cell.text.clone()));
            }
        }
    }
    out
}

#[test]
fn allocated_rows_match_month_calendars() {
    for year in YEARS {
        let expected: usize = (1..=12).map(|m| weeks_in_month(year, m).unwrap()).sum();
        let (_, summary) = layout(year);
        assert_eq!(summary.rows_allocated, expected, "{year}");
        assert_eq!(
            summary.rows_used + summary.rows_pruned,
            summary.rows_allocated,
            "{year}"
        );
    }
}

#[test]
fn used_rows_cover_the_year_exactly() {
    for year in YEARS {
        let jan1 = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
        let days = if NaiveDate::from_ymd_opt(year, 2, 29).is_some() { 366 } else { 365 };
        let expected = (weekday_index(jan1) + days + 6) / 7;
        let (table, summary) = layout(year);
        assert_eq!(summary.rows_used, expected, "{year}");
        assert_eq!(table.rows.len(), expected, "{year}");
        // pruning always removes something for real years
        assert!(summary.rows_pruned > 0, "{year}");
    }
}

#[test]
fn month_colors_count_days() {
    let palette = Palette::default();
    for year in YEARS {
        let (table, _) = layout(year);
        let cells: Vec<_> = table.rows.iter().flat_map(|r| r.cells.iter()).collect();
        // months sharing a color are told apart by walking the days in order
        let mut index = 0;
        let filled: Vec<_> = cells.iter().filter(|c| !c.is_blank()).collect();
        for month in 1..=12 {
            let color = palette.for_month(month).unwrap();
            for day in 1..=days_in_month(year, month).unwrap() {
                let cell = filled[index];
                assert_eq!(cell.text, day.to_string(), "{year}-{month}-{day}");
                assert_eq!(cell.background, Some(color), "{year}-{month}-{day}");
                index += 1;
            }
        }
        assert_eq!(index, filled.len(), "{year}");
        // blank cells keep no styling
        assert!(cells
            .iter()
            .filter(|c| c.is_blank())
            .all(|c| c.background.is_none() && c.padding.is_none()));
    }
}

#[test]
fn months_continue_in_next_column() {
    for year in YEARS {
        let (table, _) = layout(year);
        let cells = placed(&table);
        for pair in cells.windows(2) {
            let (r0, c0, _) = pair[0];
            let (r1, c1, _) = pair[1];
            assert_eq!(c1, (c0 + 1) % 7, "{year}");
            assert_eq!(r1, if c0 == 6 { r0 + 1 } else { r0 }, "{year}");
        }
    }
}

#[test]
fn leap_february() {
    let feb = Palette::default().for_month(2).unwrap();
    for (year, days) in [(2024, 29), (2025, 28)] {
        let (table, _) = layout(year);
        let texts: Vec<String> = table
            .rows
            .iter()
            .flat_map(|r| r.cells.iter())
            .filter(|c| c.background == Some(feb))
            .map(|c| c.text.clone())
            .collect();
        // February's color is shared with July
        let july = 31;
        assert_eq!(texts.len(), days + july, "{year}");
        assert_eq!(texts[days - 1], days.to_string(), "{year}");
    }
}

#[test]
fn scenario_2025() {
    let (table, _) = layout(2025);
    let first = table.cell(0, 2).unwrap();
    assert_eq!(first.text, "1");
    assert_eq!(first.background, Some(Palette::default().for_month(1).unwrap()));

    // December 31, 2025 is a Wednesday; its row stays with 4..=6 blank
    let last = table.rows.last().unwrap();
    assert_eq!(last.cells[2].text, "31");
    assert!(!last.cells[0].is_blank());
    assert!(last.cells[3..].iter().all(|c| c.is_blank()));
    assert_eq!(last.height, Some(GridStyle::default().row_height_twips));
}

#[test]
fn same_year_twice_is_identical() {
    let mut no = NorwayCalendar::with_default_rules(false);
    no.populate_cal(2025, 2025).unwrap();
    let holidays = no.get_cal();
    let style = GridStyle::default();

    let mut a = TableDocument::new();
    let mut b = TableDocument::new();
    build_grid(2025, &style, &holidays, &mut a).unwrap();
    build_grid(2025, &style, &holidays, &mut b).unwrap();
    assert_eq!(a, b);
}

#[test]
fn norwegian_holidays_are_red() {
    let mut no = NorwayCalendar::with_default_rules(false);
    no.populate_cal(2025, 2025).unwrap();
    let holidays = no.get_cal();
    let style = GridStyle::default();
    let mut doc = TableDocument::new();
    let summary = build_grid(2025, &style, &holidays, &mut doc).unwrap();
    assert_eq!(summary.holidays_marked, 12);

    let table = doc.table().unwrap();
    let mut date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    for (r, c, text) in placed(table) {
        assert_eq!(text, date.day().to_string());
        let cell = table.cell(r, c).unwrap();
        let expected = holidays.is_holiday(date).then_some(style.holiday_text_color);
        assert_eq!(cell.text_color, expected, "{date}");
        date = date.succ_opt().unwrap();
    }
}
