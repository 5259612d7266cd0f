//! Norwegian public holidays.

use crate::calendar::{Holiday, HolidayCalendar};
use crate::error::CalendarError;
use chrono::Weekday;
use std::env;
use tracing::debug;

/// Environment variable holding extra holiday rules as a JSON array.
pub const EXTRA_RULES_ENV: &str = "YEARCAL_EXTRA_RULES";

/// Holiday calendar specific to Norway
#[derive(Debug, Clone)]
pub struct NorwayCalendar {
    cal: HolidayCalendar,
    holiday_rules: Vec<Holiday>,
}

impl NorwayCalendar {
    /// Create a Norwegian calendar with the statutory public holidays. Sundays
    /// are added as holidays when `include_sundays` is set.
    pub fn with_default_rules(include_sundays: bool) -> NorwayCalendar {
        let mut holiday_rules = vec![
            // Nyttårsdag
            Holiday::YearlyDay {
                month: 1,
                day: 1,
                first: None,
                last: None,
            },
            // Skjærtorsdag
            easter(-3),
            // Langfredag
            easter(-2),
            // Første påskedag
            easter(0),
            // Andre påskedag
            easter(1),
            // Arbeidernes dag
            Holiday::YearlyDay {
                month: 5,
                day: 1,
                first: Some(1947),
                last: None,
            },
            // Grunnlovsdag
            Holiday::YearlyDay {
                month: 5,
                day: 17,
                first: Some(1947),
                last: None,
            },
            // Kristi himmelfartsdag
            easter(39),
            // Første pinsedag
            easter(49),
            // Andre pinsedag
            easter(50),
            // Første juledag
            Holiday::YearlyDay {
                month: 12,
                day: 25,
                first: None,
                last: None,
            },
            // Andre juledag
            Holiday::YearlyDay {
                month: 12,
                day: 26,
                first: None,
                last: None,
            },
        ];
        if include_sundays {
            holiday_rules.push(Holiday::WeekDay(Weekday::Sun));
        }
        NorwayCalendar {
            cal: HolidayCalendar::default(),
            holiday_rules,
        }
    }

    /// add an ad-hoc holiday rule to the rule list
    pub fn add_holiday_rule(&mut self, holiday: Holiday) -> &mut Self {
        self.holiday_rules.push(holiday);
        self
    }

    /// add rules parsed from a JSON array
    pub fn add_json_rules(&mut self, json: &str) -> Result<&mut Self, CalendarError> {
        let mut rules: Vec<Holiday> = serde_json::from_str(json)?;
        debug!(count = rules.len(), "parsed extra holiday rules");
        self.holiday_rules.append(&mut rules);
        Ok(self)
    }

    /// add rules from [`EXTRA_RULES_ENV`] when the variable is set
    pub fn add_env_rules(&mut self) -> Result<&mut Self, CalendarError> {
        match env::var(EXTRA_RULES_ENV) {
            Ok(json) => self.add_json_rules(&json),
            Err(_) => Ok(self),
        }
    }

    /// populate the calendar for `start` to `end` (inclusively)
    pub fn populate_cal(&mut self, start: i32, end: i32) -> Result<&mut Self, CalendarError> {
        self.cal = HolidayCalendar::calc_calendar(&self.holiday_rules, start, end)?;
        Ok(self)
    }

    pub fn get_cal(&self) -> HolidayCalendar {
        self.cal.clone()
    }
}

fn easter(offset: i32) -> Holiday {
    Holiday::EasterOffset {
        offset,
        first: None,
        last: None,
    }
}
