//! Availability computation: working-hours resolution, slot generation,
//! conflict filtering and the single-slot booking predicate.
//!
//! All interval arithmetic is half-open [start, end): a slot whose end
//! touches an appointment's start does not conflict with it, and vice
//! versa. Computations happen in the business's configured timezone;
//! appointments are stored as UTC instants and converted on the way in.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::{
    config::BookingConfig,
    error::{AppError, AppResult},
    models::business::Business,
    models::enums::OfferingStatus,
    models::schedule::{CustomWorkingHours, WorkingHours},
    repository::Repository,
};

/// An open interval on a specific date, in business-local time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Why a candidate slot is not bookable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotCheck {
    Available,
    InPast,
    Conflicting,
    OutsideWorkingHours,
}

impl SlotCheck {
    pub fn is_available(self) -> bool {
        self == SlotCheck::Available
    }

    pub fn reason(self) -> &'static str {
        match self {
            SlotCheck::Available => "available",
            SlotCheck::InPast => "the slot is in the past",
            SlotCheck::Conflicting => "the slot overlaps an existing appointment",
            SlotCheck::OutsideWorkingHours => "the slot falls outside working hours",
        }
    }
}

/// Half-open interval overlap: [a_start, a_end) intersects [b_start, b_end)
pub fn overlaps(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> bool {
    a_start < b_end && a_end > b_start
}

/// Resolve the open intervals applicable to a date.
///
/// A date-specific override wins exclusively over the weekly schedule; an
/// override with equal start and end times closes the date. Without an
/// override, every weekly row matching the date's ISO weekday
/// (1 = Monday .. 7 = Sunday) applies. No rows means the day is closed.
pub fn resolve_open_intervals(
    date: NaiveDate,
    custom: Option<&CustomWorkingHours>,
    weekly: &[WorkingHours],
) -> Vec<OpenInterval> {
    if let Some(ovr) = custom {
        if ovr.start_time == ovr.end_time {
            return Vec::new();
        }
        return vec![OpenInterval {
            start: date.and_time(ovr.start_time),
            end: date.and_time(ovr.end_time),
        }];
    }

    let day_of_week = date.weekday().number_from_monday() as i16;
    weekly
        .iter()
        .filter(|wh| wh.day_of_week == day_of_week)
        .map(|wh| OpenInterval {
            start: date.and_time(wh.start_time),
            end: date.and_time(wh.end_time),
        })
        .collect()
}

/// Generate candidate slot starts by stepping through one interval.
///
/// The last slot satisfies `start + slot_len <= interval.end`; an interval
/// shorter than `slot_len` yields nothing.
pub fn slot_starts(interval: OpenInterval, slot_len: Duration) -> Vec<NaiveDateTime> {
    let mut starts = Vec::new();
    if slot_len <= Duration::zero() {
        return starts;
    }
    let mut current = interval.start;
    while current + slot_len <= interval.end {
        starts.push(current);
        current += slot_len;
    }
    starts
}

/// One day's bookable slot starts: generate per interval, drop candidates
/// before `now` and candidates overlapping a busy span, deduplicate times
/// produced by overlapping working-hour rows.
pub fn free_slots(
    intervals: &[OpenInterval],
    slot_len: Duration,
    busy: &[(NaiveDateTime, NaiveDateTime)],
    now: NaiveDateTime,
) -> Vec<NaiveTime> {
    let mut kept: BTreeSet<NaiveTime> = BTreeSet::new();
    for interval in intervals {
        for start in slot_starts(*interval, slot_len) {
            if start < now {
                continue;
            }
            let end = start + slot_len;
            if busy.iter().any(|&(b_start, b_end)| overlaps(start, end, b_start, b_end)) {
                continue;
            }
            kept.insert(start.time());
        }
    }
    kept.into_iter().collect()
}

/// Whether [start, end) is fully contained in at least one open interval
pub fn fits_open_interval(intervals: &[OpenInterval], start: NaiveDateTime, end: NaiveDateTime) -> bool {
    intervals.iter().any(|iv| start >= iv.start && end <= iv.end)
}

#[derive(Clone)]
pub struct AvailabilityService {
    repository: Repository,
    max_range_days: i64,
}

impl AvailabilityService {
    pub fn new(repository: Repository, booking: &BookingConfig) -> Self {
        Self {
            repository,
            max_range_days: booking.max_range_days,
        }
    }

    /// Parse the business's configured IANA zone
    pub fn business_tz(business: &Business) -> AppResult<Tz> {
        business.timezone.parse::<Tz>().map_err(|_| {
            AppError::Internal(format!(
                "Business {} has invalid timezone '{}'",
                business.id, business.timezone
            ))
        })
    }

    /// Current wall-clock time in the business's zone
    fn now_local(tz: Tz) -> NaiveDateTime {
        Utc::now().with_timezone(&tz).naive_local()
    }

    /// Convert a business-local datetime to the stored UTC instant. A
    /// nonexistent local time (DST gap) is a validation error; an ambiguous
    /// one resolves to the earlier instant.
    pub fn local_to_utc(tz: Tz, local: NaiveDateTime) -> AppResult<DateTime<Utc>> {
        tz.from_local_datetime(&local)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| {
                AppError::Validation(format!("{} does not exist in timezone {}", local, tz))
            })
    }

    /// Available slot starts per date over [from, to], for one offering and
    /// optionally one employee. Dates without bookable slots are omitted.
    pub async fn available_slots(
        &self,
        business_id: i32,
        offering_id: i32,
        employee_id: Option<i32>,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<BTreeMap<NaiveDate, Vec<NaiveTime>>> {
        if to < from {
            return Err(AppError::BadRequest("'to' is before 'from'".to_string()));
        }
        let range_days = (to - from).num_days() + 1;
        if range_days > self.max_range_days {
            return Err(AppError::BadRequest(format!(
                "Date range of {} days exceeds the maximum of {}",
                range_days, self.max_range_days
            )));
        }

        let business = self.repository.businesses.get_by_id(business_id).await?;
        let offering = self.repository.offerings.get_by_id(business_id, offering_id).await?;
        if offering.status != OfferingStatus::Active {
            return Err(AppError::BusinessRule("Offering is archived".to_string()));
        }
        if let Some(id) = employee_id {
            self.repository.employees.get_by_id(business_id, id).await?;
        }

        let tz = Self::business_tz(&business)?;
        let slot_len = Duration::minutes(offering.duration_minutes as i64);
        let now = Self::now_local(tz);

        let weekly = self.repository.schedules.list_working_hours(business_id).await?;
        let overrides: HashMap<NaiveDate, CustomWorkingHours> = self
            .repository
            .schedules
            .custom_in_range(business_id, from, to)
            .await?
            .into_iter()
            .map(|c| (c.work_date, c))
            .collect();

        let busy = self
            .busy_spans_local(business_id, employee_id, tz, from, to)
            .await?;

        let mut result = BTreeMap::new();
        let mut date = from;
        while date <= to {
            let intervals = resolve_open_intervals(date, overrides.get(&date), &weekly);
            let slots = free_slots(&intervals, slot_len, &busy, now);
            if !slots.is_empty() {
                result.insert(date, slots);
            }
            date += Duration::days(1);
        }
        Ok(result)
    }

    /// Whether one specific slot is currently bookable (pure predicate; the
    /// booking flow re-checks inside the insert transaction)
    pub async fn is_slot_available(
        &self,
        business_id: i32,
        offering_id: i32,
        employee_id: Option<i32>,
        date: NaiveDate,
        time: NaiveTime,
    ) -> AppResult<bool> {
        Ok(self
            .check_slot(business_id, offering_id, employee_id, date, time)
            .await?
            .is_available())
    }

    /// Full single-slot validation with the rejection reason
    pub async fn check_slot(
        &self,
        business_id: i32,
        offering_id: i32,
        employee_id: Option<i32>,
        date: NaiveDate,
        time: NaiveTime,
    ) -> AppResult<SlotCheck> {
        let business = self.repository.businesses.get_by_id(business_id).await?;
        let offering = self.repository.offerings.get_by_id(business_id, offering_id).await?;
        if offering.status != OfferingStatus::Active {
            return Err(AppError::BusinessRule("Offering is archived".to_string()));
        }
        if let Some(id) = employee_id {
            self.repository.employees.get_by_id(business_id, id).await?;
        }

        let tz = Self::business_tz(&business)?;
        let slot_start = date.and_time(time);
        let slot_end = slot_start + Duration::minutes(offering.duration_minutes as i64);

        if slot_start < Self::now_local(tz) {
            return Ok(SlotCheck::InPast);
        }

        let busy = self
            .busy_spans_local(business_id, employee_id, tz, date, date)
            .await?;
        if busy
            .iter()
            .any(|&(b_start, b_end)| overlaps(slot_start, slot_end, b_start, b_end))
        {
            return Ok(SlotCheck::Conflicting);
        }

        let custom = self.repository.schedules.custom_for_date(business_id, date).await?;
        let day_of_week = date.weekday().number_from_monday() as i16;
        let weekly = self
            .repository
            .schedules
            .working_hours_for_day(business_id, day_of_week)
            .await?;
        let intervals = resolve_open_intervals(date, custom.as_ref(), &weekly);

        if !fits_open_interval(&intervals, slot_start, slot_end) {
            return Ok(SlotCheck::OutsideWorkingHours);
        }
        Ok(SlotCheck::Available)
    }

    /// Occupied spans of active appointments covering the local date range,
    /// converted to business-local time. The UTC fetch window is padded by a
    /// day on each side so any zone offset is covered; precision comes from
    /// the local overlap test.
    async fn busy_spans_local(
        &self,
        business_id: i32,
        employee_id: Option<i32>,
        tz: Tz,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<(NaiveDateTime, NaiveDateTime)>> {
        let fetch_from = Utc.from_utc_datetime(&(from - Duration::days(1)).and_time(NaiveTime::MIN));
        let fetch_to = Utc.from_utc_datetime(&(to + Duration::days(2)).and_time(NaiveTime::MIN));

        let spans = self
            .repository
            .appointments
            .active_spans_between(business_id, employee_id, fetch_from, fetch_to)
            .await?;

        Ok(spans
            .into_iter()
            .map(|(start, end)| {
                (
                    start.with_timezone(&tz).naive_local(),
                    end.with_timezone(&tz).naive_local(),
                )
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wh(day_of_week: i16, start: &str, end: &str) -> WorkingHours {
        WorkingHours {
            id: 0,
            business_id: 1,
            day_of_week,
            start_time: t(start),
            end_time: t(end),
            crea_date: None,
        }
    }

    fn custom(date: NaiveDate, start: &str, end: &str) -> CustomWorkingHours {
        CustomWorkingHours {
            id: 0,
            business_id: 1,
            work_date: date,
            start_time: t(start),
            end_time: t(end),
            crea_date: None,
            modif_date: None,
        }
    }

    fn t(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn dt(date: &str, time: &str) -> NaiveDateTime {
        d(date).and_time(t(time))
    }

    // 2025-01-06 is a Monday
    const MONDAY: &str = "2025-01-06";

    fn distant_past() -> NaiveDateTime {
        dt("2000-01-01", "00:00")
    }

    #[test]
    fn closed_day_resolves_to_no_intervals() {
        let weekly = vec![wh(2, "09:00", "17:00")];
        let intervals = resolve_open_intervals(d(MONDAY), None, &weekly);
        assert!(intervals.is_empty());
    }

    #[test]
    fn weekday_matches_iso_numbering() {
        // day 1 must mean Monday
        let weekly = vec![wh(1, "09:00", "17:00")];
        let intervals = resolve_open_intervals(d(MONDAY), None, &weekly);
        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].start, dt(MONDAY, "09:00"));
        // 2025-01-12 is a Sunday, day 7
        let sunday = vec![wh(7, "10:00", "12:00")];
        assert_eq!(resolve_open_intervals(d("2025-01-12"), None, &sunday).len(), 1);
    }

    #[test]
    fn override_fully_replaces_weekly_schedule() {
        // 2025-01-01 is a Wednesday with a recurring 09:00-17:00 schedule
        let weekly = vec![wh(3, "09:00", "17:00")];
        let ovr = custom(d("2025-01-01"), "14:00", "16:00");
        let intervals = resolve_open_intervals(d("2025-01-01"), Some(&ovr), &weekly);
        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].start, dt("2025-01-01", "14:00"));
        assert_eq!(intervals[0].end, dt("2025-01-01", "16:00"));

        let slots = free_slots(&intervals, Duration::minutes(30), &[], distant_past());
        assert!(slots.iter().all(|s| *s >= t("14:00") && *s < t("16:00")));
        assert_eq!(slots.first(), Some(&t("14:00")));
        assert_eq!(slots.last(), Some(&t("15:30")));
    }

    #[test]
    fn zero_length_override_closes_the_date() {
        let weekly = vec![wh(1, "09:00", "17:00")];
        let ovr = custom(d(MONDAY), "00:00", "00:00");
        assert!(resolve_open_intervals(d(MONDAY), Some(&ovr), &weekly).is_empty());
    }

    #[test]
    fn multiple_intervals_on_one_day_all_apply() {
        let weekly = vec![wh(1, "09:00", "12:00"), wh(1, "14:00", "18:00"), wh(2, "09:00", "12:00")];
        let intervals = resolve_open_intervals(d(MONDAY), None, &weekly);
        assert_eq!(intervals.len(), 2);
    }

    #[test]
    fn slots_stay_within_interval_bounds() {
        let interval = OpenInterval {
            start: dt(MONDAY, "09:00"),
            end: dt(MONDAY, "12:10"),
        };
        let slot_len = Duration::minutes(45);
        let starts = slot_starts(interval, slot_len);
        assert!(!starts.is_empty());
        for start in &starts {
            assert!(*start >= interval.start);
            assert!(*start + slot_len <= interval.end);
        }
        // 09:00, 09:45, 10:30, 11:15 fit; 12:00 + 45min would overrun
        assert_eq!(starts.len(), 4);
    }

    #[test]
    fn interval_shorter_than_slot_yields_nothing() {
        // 45-minute service, one-hour day: 09:45 + 45min > 10:00 after the first
        let interval = OpenInterval {
            start: dt(MONDAY, "09:00"),
            end: dt(MONDAY, "10:00"),
        };
        assert_eq!(slot_starts(interval, Duration::minutes(45)).len(), 1);
        let tight = OpenInterval {
            start: dt(MONDAY, "09:00"),
            end: dt(MONDAY, "09:30"),
        };
        assert!(slot_starts(tight, Duration::minutes(45)).is_empty());
    }

    #[test]
    fn conflict_filter_drops_overlapping_slots() {
        // Open Monday 09:00-12:00, 30-minute slots, one appointment 10:00-10:30
        let intervals = vec![OpenInterval {
            start: dt(MONDAY, "09:00"),
            end: dt(MONDAY, "12:00"),
        }];
        let busy = vec![(dt(MONDAY, "10:00"), dt(MONDAY, "10:30"))];
        let slots = free_slots(&intervals, Duration::minutes(30), &busy, distant_past());
        let expected: Vec<NaiveTime> = ["09:00", "09:30", "10:30", "11:00", "11:30"]
            .iter()
            .map(|s| t(s))
            .collect();
        assert_eq!(slots, expected);
    }

    #[test]
    fn retained_slots_never_overlap_busy_spans() {
        let intervals = vec![OpenInterval {
            start: dt(MONDAY, "08:00"),
            end: dt(MONDAY, "20:00"),
        }];
        let slot_len = Duration::minutes(25);
        let busy = vec![
            (dt(MONDAY, "09:10"), dt(MONDAY, "09:40")),
            (dt(MONDAY, "12:00"), dt(MONDAY, "13:00")),
            (dt(MONDAY, "17:55"), dt(MONDAY, "18:05")),
        ];
        for slot in free_slots(&intervals, slot_len, &busy, distant_past()) {
            let start = d(MONDAY).and_time(slot);
            let end = start + slot_len;
            for &(b_start, b_end) in &busy {
                assert!(!overlaps(start, end, b_start, b_end));
            }
        }
    }

    #[test]
    fn back_to_back_slots_are_not_conflicts() {
        let intervals = vec![OpenInterval {
            start: dt(MONDAY, "09:00"),
            end: dt(MONDAY, "12:00"),
        }];
        let slot_len = Duration::minutes(60);
        // Appointment 10:00-11:00: slot ending 10:00 and slot starting 11:00 both survive
        let busy = vec![(dt(MONDAY, "10:00"), dt(MONDAY, "11:00"))];
        let slots = free_slots(&intervals, slot_len, &busy, distant_past());
        assert_eq!(slots, vec![t("09:00"), t("11:00")]);
    }

    #[test]
    fn past_slots_are_dropped() {
        let intervals = vec![OpenInterval {
            start: dt(MONDAY, "09:00"),
            end: dt(MONDAY, "12:00"),
        }];
        let now = dt(MONDAY, "10:15");
        let slots = free_slots(&intervals, Duration::minutes(30), &[], now);
        // 09:00..10:00 are gone; 10:30 onwards remain (10:00 < now)
        assert_eq!(slots, vec![t("10:30"), t("11:00"), t("11:30")]);
    }

    #[test]
    fn overlapping_weekly_rows_deduplicate_candidates() {
        let weekly = vec![wh(1, "09:00", "12:00"), wh(1, "10:00", "13:00")];
        let intervals = resolve_open_intervals(d(MONDAY), None, &weekly);
        let slots = free_slots(&intervals, Duration::minutes(60), &[], distant_past());
        // 10:00 and 11:00 are generated by both rows but appear once
        assert_eq!(slots, vec![t("09:00"), t("10:00"), t("11:00"), t("12:00")]);
    }

    #[test]
    fn free_slots_is_idempotent() {
        let intervals = vec![OpenInterval {
            start: dt(MONDAY, "09:00"),
            end: dt(MONDAY, "17:00"),
        }];
        let busy = vec![(dt(MONDAY, "11:00"), dt(MONDAY, "12:30"))];
        let first = free_slots(&intervals, Duration::minutes(30), &busy, distant_past());
        let second = free_slots(&intervals, Duration::minutes(30), &busy, distant_past());
        assert_eq!(first, second);
    }

    #[test]
    fn containment_requires_a_single_interval() {
        let intervals = vec![
            OpenInterval { start: dt(MONDAY, "09:00"), end: dt(MONDAY, "12:00") },
            OpenInterval { start: dt(MONDAY, "12:00"), end: dt(MONDAY, "14:00") },
        ];
        // Fully inside the first interval
        assert!(fits_open_interval(&intervals, dt(MONDAY, "09:00"), dt(MONDAY, "10:00")));
        // Flush with an interval end
        assert!(fits_open_interval(&intervals, dt(MONDAY, "11:00"), dt(MONDAY, "12:00")));
        // Spans the seam between two intervals: contained by neither
        assert!(!fits_open_interval(&intervals, dt(MONDAY, "11:30"), dt(MONDAY, "12:30")));
        // Outside entirely
        assert!(!fits_open_interval(&intervals, dt(MONDAY, "15:00"), dt(MONDAY, "16:00")));
    }

    #[test]
    fn overlap_test_is_half_open() {
        let a = (dt(MONDAY, "09:00"), dt(MONDAY, "10:00"));
        let b = (dt(MONDAY, "10:00"), dt(MONDAY, "11:00"));
        assert!(!overlaps(a.0, a.1, b.0, b.1));
        assert!(!overlaps(b.0, b.1, a.0, a.1));
        let c = (dt(MONDAY, "09:59"), dt(MONDAY, "10:01"));
        assert!(overlaps(a.0, a.1, c.0, c.1));
    }
}
