use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, Days, NaiveDate};

use crate::{
    model::{HabitColor, Participant, ParticipantCompletion},
    types::Uuid,
};

use super::{FirstDayOfWeek, Schedule};

/// One participant's completion of a habit on some day
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantMark {
    pub participant_id: Uuid,
    pub color: HabitColor,
}

/// date -> participants who completed that day, in completion order
pub type ParticipantCompletions = BTreeMap<NaiveDate, Vec<ParticipantMark>>;

/// Join per-day completion facts with the habit's accepted-participant
/// colors. Facts from pending or colorless participants are dropped.
pub fn participant_completions(
    participants: &[Participant],
    facts: &[ParticipantCompletion],
) -> ParticipantCompletions {
    let colors: BTreeMap<Uuid, HabitColor> = participants
        .iter()
        .filter(|p| p.is_accepted())
        .filter_map(|p| p.color.map(|color| (p.user_id, color)))
        .collect();

    let mut map = ParticipantCompletions::new();
    for fact in facts {
        if let Some(&color) = colors.get(&fact.user_id) {
            map.entry(fact.date).or_default().push(ParticipantMark {
                participant_id: fact.user_id,
                color,
            });
        }
    }
    map
}

/// Distinct participant colors for one day, in first-appearance order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlendedBackground {
    colors: Vec<HabitColor>,
}

impl BlendedBackground {
    fn from_marks(marks: &[ParticipantMark]) -> Option<Self> {
        let mut colors = Vec::new();
        for mark in marks {
            if !colors.contains(&mark.color) {
                colors.push(mark.color);
            }
        }
        if colors.is_empty() {
            None
        } else {
            Some(Self { colors })
        }
    }

    pub fn colors(&self) -> &[HabitColor] {
        &self.colors
    }

    /// Even-sliced conic gradient across the day cell
    pub fn css(&self) -> String {
        let slice = 360.0 / self.colors.len() as f32;
        let stops = self
            .colors
            .iter()
            .enumerate()
            .map(|(i, color)| {
                format!(
                    "{} {:.1}deg {:.1}deg",
                    color.css_hex(),
                    i as f32 * slice,
                    (i + 1) as f32 * slice
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!("conic-gradient({stops})")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Cells outside the rendered month are placeholders in the UI
    pub in_current_month: bool,
    pub completed: bool,
    /// Off-schedule day, or the weekly goal is already met. Never set on a
    /// completed day.
    pub disabled: bool,
    pub is_today: bool,
    pub background: Option<BlendedBackground>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub first_day: FirstDayOfWeek,
    pub weeks: Vec<[DayCell; 7]>,
}

impl MonthGrid {
    /// Number of cells belonging to the rendered month
    pub fn day_count(&self) -> usize {
        self.weeks
            .iter()
            .flatten()
            .filter(|c| c.in_current_month)
            .count()
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell> {
        self.weeks.iter().flatten().find(|c| c.date == date)
    }
}

/// Project one calendar month of a habit into day cells.
///
/// Rows are calendar weeks aligned to `first_day`; weekly-goal counting
/// uses the full week, including days that fall outside the rendered
/// month, so quota state is correct at month boundaries.
pub fn project_month(
    reference: NaiveDate,
    first_day: FirstDayOfWeek,
    schedule: &Schedule,
    completed: &BTreeSet<NaiveDate>,
    participants: Option<&ParticipantCompletions>,
    today: NaiveDate,
) -> MonthGrid {
    let year = reference.year();
    let month = reference.month();
    let first_of_month = reference
        .with_day(1)
        .expect("day 1 exists in every month");
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .expect("day 1 exists in every month");
    let days_in_month = (first_of_next - first_of_month).num_days() as usize;

    let offset = first_day.column(first_of_month.weekday().number_from_monday() as u8);
    let rows = (offset + days_in_month).div_ceil(7);
    let grid_start = first_of_month - Days::new(offset as u64);

    let mut weeks = Vec::with_capacity(rows);
    for row in 0..rows {
        let row_start = grid_start + Days::new(row as u64 * 7);
        let goal_met = match schedule {
            Schedule::WeeklyGoal(goal) => {
                let done = (0..7)
                    .filter(|&i| completed.contains(&(row_start + Days::new(i))))
                    .count();
                done >= *goal as usize
            }
            _ => false,
        };

        let cells: [DayCell; 7] = std::array::from_fn(|col| {
            let date = row_start + Days::new(col as u64);
            let is_completed = completed.contains(&date);
            // A completion always overrides schedule display; over-norm
            // days show as completed, never as disabled
            let disabled = !is_completed
                && match schedule {
                    Schedule::Weekdays(days) => {
                        !days.contains(&(date.weekday().number_from_monday() as u8))
                    }
                    Schedule::WeeklyGoal(_) => goal_met,
                    Schedule::Unrestricted => false,
                };
            let background = participants
                .and_then(|map| map.get(&date))
                .and_then(|marks| BlendedBackground::from_marks(marks));

            DayCell {
                date,
                in_current_month: date.month() == month && date.year() == year,
                completed: is_completed,
                disabled,
                is_today: date == today,
                background,
            }
        });
        weeks.push(cells);
    }

    MonthGrid {
        year,
        month,
        first_day,
        weeks,
    }
}

/// Twelve month projections for the yearly report. The report only
/// distinguishes done from idle days, so the schedule is unrestricted
/// and no participant input applies.
pub fn project_year(
    year: i32,
    first_day: FirstDayOfWeek,
    completed: &BTreeSet<NaiveDate>,
    today: NaiveDate,
) -> Vec<MonthGrid> {
    (1..=12)
        .map(|month| {
            let first_of_month =
                NaiveDate::from_ymd_opt(year, month, 1).expect("day 1 exists in every month");
            project_month(
                first_of_month,
                first_day,
                &Schedule::Unrestricted,
                completed,
                None,
                today,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::{
        calendar::parse_date,
        model::ParticipantStatus,
    };

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn dates(list: &[&str]) -> BTreeSet<NaiveDate> {
        list.iter().map(|s| d(s)).collect()
    }

    fn project(
        reference: &str,
        first_day: FirstDayOfWeek,
        schedule: &Schedule,
        completed: &BTreeSet<NaiveDate>,
    ) -> MonthGrid {
        project_month(
            d(reference),
            first_day,
            schedule,
            completed,
            None,
            d("2024-01-15"),
        )
    }

    #[test]
    fn grid_holds_exactly_the_days_of_the_month() {
        let cases = [
            ("2024-01-10", 31),
            ("2024-02-10", 29), // leap year
            ("2023-02-10", 28),
            ("2024-04-10", 30),
        ];
        for first_day in [FirstDayOfWeek::Monday, FirstDayOfWeek::Sunday] {
            for (reference, days) in cases {
                let grid = project(reference, first_day, &Schedule::Unrestricted, &dates(&[]));
                assert_eq!(grid.day_count(), days, "{reference} {first_day:?}");
                let total = grid.weeks.len() * 7;
                assert_eq!(total % 7, 0);
                let placeholders = grid
                    .weeks
                    .iter()
                    .flatten()
                    .filter(|c| !c.in_current_month)
                    .count();
                assert_eq!(placeholders, total - days);
            }
        }
    }

    #[test]
    fn completions_are_marked() {
        let completed = dates(&["2024-01-05", "2024-01-20"]);
        let grid = project(
            "2024-01-01",
            FirstDayOfWeek::Monday,
            &Schedule::Unrestricted,
            &completed,
        );
        for date in &completed {
            let cell = grid.cell(*date).unwrap();
            assert!(cell.completed);
            assert!(!cell.disabled);
        }
        assert!(!grid.cell(d("2024-01-06")).unwrap().completed);
    }

    #[test]
    fn projection_is_pure() {
        let completed = dates(&["2024-01-01", "2024-01-09"]);
        let schedule = Schedule::weekly_goal(2).unwrap();
        let a = project("2024-01-01", FirstDayOfWeek::Sunday, &schedule, &completed);
        let b = project("2024-01-01", FirstDayOfWeek::Sunday, &schedule, &completed);
        assert_eq!(a, b);
    }

    #[test]
    fn weekly_goal_disables_the_rest_of_a_met_week() {
        // Week of Mon 2024-01-01 .. Sun 2024-01-07, goal 3, exactly 3 done
        let completed = dates(&["2024-01-01", "2024-01-02", "2024-01-03"]);
        let schedule = Schedule::weekly_goal(3).unwrap();
        let grid = project("2024-01-01", FirstDayOfWeek::Monday, &schedule, &completed);

        for day in ["2024-01-04", "2024-01-05", "2024-01-06", "2024-01-07"] {
            let cell = grid.cell(d(day)).unwrap();
            assert!(cell.disabled, "{day} should be disabled");
            assert!(!cell.completed);
        }
        // The following week is unaffected
        assert!(!grid.cell(d("2024-01-08")).unwrap().disabled);
    }

    #[test]
    fn over_quota_completion_stays_completed() {
        // 4 completions against a goal of 3
        let completed = dates(&[
            "2024-01-01",
            "2024-01-02",
            "2024-01-03",
            "2024-01-04",
        ]);
        let schedule = Schedule::weekly_goal(3).unwrap();
        let grid = project("2024-01-01", FirstDayOfWeek::Monday, &schedule, &completed);

        let over = grid.cell(d("2024-01-04")).unwrap();
        assert!(over.completed);
        assert!(!over.disabled);
        assert!(grid.cell(d("2024-01-05")).unwrap().disabled);
    }

    #[test]
    fn weekly_goal_counts_across_the_month_boundary() {
        // February 2024 starts on a Thursday; its first grid row includes
        // Jan 29-31. Three January completions meet the goal for that week.
        let completed = dates(&["2024-01-29", "2024-01-30", "2024-01-31"]);
        let schedule = Schedule::weekly_goal(3).unwrap();
        let grid = project("2024-02-01", FirstDayOfWeek::Monday, &schedule, &completed);

        let feb1 = grid.cell(d("2024-02-01")).unwrap();
        assert!(feb1.in_current_month);
        assert!(feb1.disabled);
        assert!(!grid.cell(d("2024-02-05")).unwrap().disabled);
    }

    #[test]
    fn weekday_schedule_with_over_norm_completion() {
        // Mon/Wed/Fri habit; Mon 2024-01-01 completed in schedule, Tue
        // 2024-01-02 completed outside it
        let schedule = Schedule::weekdays([1, 3, 5]).unwrap();
        let completed = dates(&["2024-01-01", "2024-01-02"]);
        let grid = project("2024-01-01", FirstDayOfWeek::Monday, &schedule, &completed);

        let mon = grid.cell(d("2024-01-01")).unwrap();
        assert!(mon.completed);
        assert!(!mon.disabled);

        let tue = grid.cell(d("2024-01-02")).unwrap();
        assert!(tue.completed, "over-norm completion must stay visible");
        assert!(!tue.disabled);

        // Wednesday is in schedule and not completed
        let wed = grid.cell(d("2024-01-03")).unwrap();
        assert!(!wed.completed);
        assert!(!wed.disabled);

        // Thursday is off-schedule and not completed
        assert!(grid.cell(d("2024-01-04")).unwrap().disabled);
    }

    #[test]
    fn week_start_preference_shifts_columns() {
        // 2024-01-01 is a Monday
        let monday_first = project(
            "2024-01-01",
            FirstDayOfWeek::Monday,
            &Schedule::Unrestricted,
            &dates(&[]),
        );
        let jan1_col = monday_first.weeks[0]
            .iter()
            .position(|c| c.date == d("2024-01-01"))
            .unwrap();
        assert_eq!(jan1_col, 0);

        let sunday_first = project(
            "2024-01-01",
            FirstDayOfWeek::Sunday,
            &Schedule::Unrestricted,
            &dates(&[]),
        );
        let jan1_col = sunday_first.weeks[0]
            .iter()
            .position(|c| c.date == d("2024-01-01"))
            .unwrap();
        assert_eq!(jan1_col, 1);
        assert!(!sunday_first.weeks[0][0].in_current_month);
    }

    #[test]
    fn is_today_matches_only_the_reference_instant() {
        let grid = project(
            "2024-01-01",
            FirstDayOfWeek::Monday,
            &Schedule::Unrestricted,
            &dates(&[]),
        );
        let today_cells: Vec<_> = grid
            .weeks
            .iter()
            .flatten()
            .filter(|c| c.is_today)
            .collect();
        assert_eq!(today_cells.len(), 1);
        assert_eq!(today_cells[0].date, d("2024-01-15"));
    }

    #[test]
    fn year_projection_covers_every_day_once() {
        let grids = project_year(
            2024,
            FirstDayOfWeek::Monday,
            &dates(&[]),
            d("2024-01-15"),
        );
        assert_eq!(grids.len(), 12);
        let total: usize = grids.iter().map(|g| g.day_count()).sum();
        assert_eq!(total, 366); // leap year

        let total_2023: usize = project_year(
            2023,
            FirstDayOfWeek::Monday,
            &dates(&[]),
            d("2024-01-15"),
        )
        .iter()
        .map(|g| g.day_count())
        .sum();
        assert_eq!(total_2023, 365);
    }

    #[test]
    fn year_projection_marks_completions_and_never_disables() {
        let completed = dates(&["2024-03-05", "2024-12-31"]);
        let grids = project_year(2024, FirstDayOfWeek::Sunday, &completed, d("2024-01-15"));

        let march = &grids[2];
        assert_eq!(march.month, 3);
        assert!(march.cell(d("2024-03-05")).unwrap().completed);

        let december = &grids[11];
        assert!(december.cell(d("2024-12-31")).unwrap().completed);

        for cell in grids.iter().flat_map(|g| g.weeks.iter().flatten()) {
            assert!(!cell.disabled);
        }
    }

    fn mark(color: HabitColor) -> ParticipantMark {
        ParticipantMark {
            participant_id: Uuid::new_v4(),
            color,
        }
    }

    #[test]
    fn blending_keeps_first_appearance_order() {
        let marks = vec![
            mark(HabitColor::Gold),
            mark(HabitColor::Sapphire),
            mark(HabitColor::Gold),
        ];
        let background = BlendedBackground::from_marks(&marks).unwrap();
        assert_eq!(
            background.colors(),
            &[HabitColor::Gold, HabitColor::Sapphire]
        );
        assert_eq!(
            background.css(),
            "conic-gradient(#ffd700 0.0deg 180.0deg, #2563eb 180.0deg 360.0deg)"
        );
    }

    #[test]
    fn no_marks_means_no_background() {
        assert_eq!(BlendedBackground::from_marks(&[]), None);

        let mut map = ParticipantCompletions::new();
        map.insert(d("2024-01-05"), vec![mark(HabitColor::Ruby)]);
        let grid = project_month(
            d("2024-01-01"),
            FirstDayOfWeek::Monday,
            &Schedule::Unrestricted,
            &dates(&["2024-01-05", "2024-01-06"]),
            Some(&map),
            d("2024-01-15"),
        );
        assert!(grid.cell(d("2024-01-05")).unwrap().background.is_some());
        // Completed day without participant marks falls back to default
        // completed styling
        assert!(grid.cell(d("2024-01-06")).unwrap().background.is_none());
    }

    #[test]
    fn participant_join_ignores_pending_and_colorless() {
        let accepted = Participant {
            user_id: Uuid::new_v4(),
            status: ParticipantStatus::Accepted,
            color: Some(HabitColor::Emerald),
            joined_at: Utc::now(),
        };
        let pending = Participant {
            user_id: Uuid::new_v4(),
            status: ParticipantStatus::Pending,
            color: Some(HabitColor::Ruby),
            joined_at: Utc::now(),
        };
        let colorless = Participant {
            user_id: Uuid::new_v4(),
            status: ParticipantStatus::Accepted,
            color: None,
            joined_at: Utc::now(),
        };
        let facts = vec![
            ParticipantCompletion {
                date: d("2024-01-05"),
                user_id: accepted.user_id,
            },
            ParticipantCompletion {
                date: d("2024-01-05"),
                user_id: pending.user_id,
            },
            ParticipantCompletion {
                date: d("2024-01-06"),
                user_id: colorless.user_id,
            },
        ];

        let map = participant_completions(&[accepted.clone(), pending, colorless], &facts);
        assert_eq!(map.len(), 1);
        let marks = &map[&d("2024-01-05")];
        assert_eq!(marks.len(), 1);
        assert_eq!(marks[0].participant_id, accepted.user_id);
        assert_eq!(marks[0].color, HabitColor::Emerald);
    }
}
