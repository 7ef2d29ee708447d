//! Raw record → candidate materialization
//!
//! Each raw record turns into zero or more [`Candidate`]s: day entries,
//! placeholder entries, or an explicit drop carrying its reason. Nothing is
//! discarded silently; the accumulator sees every outcome and counts it.

use campuscal_domain::{
    Category, CategoryFilter, DayKey, EventSchedule, ItemSource, MonthKey, NormalizedItem,
    PlaceholderGranularity, PlaceholderItem, RangeBounds, RawCalendarEvent, RawPost,
};
use tracing::debug;

use super::range::RangePolicy;
use super::stats::DropReason;
use crate::day_key::DayKeyer;
use crate::indicators::color_for;

/// One materialized outcome of a raw record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    Day(NormalizedItem),
    Placeholder(PlaceholderItem),
    /// Marks a range reduced to boundary days; precedes its day entries
    CollapsedRange,
    Dropped(DropReason),
}

/// Stateless converter from raw records to candidates
#[derive(Debug, Clone, Copy)]
pub struct Materializer<'a> {
    keyer: &'a DayKeyer,
    policy: &'a RangePolicy,
}

impl<'a> Materializer<'a> {
    #[must_use]
    pub const fn new(keyer: &'a DayKeyer, policy: &'a RangePolicy) -> Self {
        Self { keyer, policy }
    }

    /// Candidates for one post. Posts ignore the category selection.
    #[must_use]
    pub fn post(&self, post: &RawPost) -> Vec<Candidate> {
        let title = post.title.clone().unwrap_or_default();

        if post.is_bulk_import() {
            return drop_record(ItemSource::Post, &title, DropReason::BulkImport);
        }
        let category = match resolve_category(post.raw_category()) {
            Ok(category) => category,
            Err(reason) => return drop_record(ItemSource::Post, &title, reason),
        };
        let Some(date_key) = self.keyer.parse_first(post.date_candidates()) else {
            return drop_record(ItemSource::Post, &title, DropReason::UnparseableDate);
        };

        vec![Candidate::Day(NormalizedItem {
            id: post.id.clone(),
            title,
            date_key,
            color: color_for(&category),
            category,
            source: ItemSource::Post,
            time: post.time.clone(),
            description: None,
            range: None,
            is_pinned: post.is_pinned.unwrap_or(false),
            is_urgent: post.is_urgent.unwrap_or(false),
        })]
    }

    /// Candidates for one calendar event, filtered by `selected`.
    #[must_use]
    pub fn calendar_event(
        &self,
        event: &RawCalendarEvent,
        selected: &CategoryFilter,
    ) -> Vec<Candidate> {
        let title = event.title.clone().unwrap_or_default();

        let category = match resolve_category(event.raw_category()) {
            Ok(category) => category,
            Err(reason) => return drop_record(ItemSource::Calendar, &title, reason),
        };
        if !selected.allows(&category) {
            return drop_record(ItemSource::Calendar, &title, DropReason::NotSelected);
        }

        // date_key is assigned per materialized day
        let template = NormalizedItem {
            id: event.id.clone(),
            title,
            date_key: DayKey::new(chrono::NaiveDate::MIN),
            color: color_for(&category),
            category,
            source: ItemSource::Calendar,
            time: event.time.clone(),
            description: event.description.clone(),
            range: None,
            is_pinned: false,
            is_urgent: false,
        };

        match &event.schedule {
            EventSchedule::Single { .. } => {
                match self.keyer.parse_first(event.schedule.single_candidates()) {
                    Some(date_key) => vec![Candidate::Day(NormalizedItem { date_key, ..template })],
                    None => {
                        let reason = DropReason::UnparseableDate;
                        drop_record(ItemSource::Calendar, &template.title, reason)
                    }
                }
            }
            EventSchedule::DateRange { start, end } => self.range(template, start, end),
            EventSchedule::WeekInMonth { year, month, week_of_month } => placeholder(
                template,
                *year,
                *month,
                week_of_month.and_then(|week| u32::try_from(week).ok()),
                PlaceholderGranularity::Week,
            ),
            EventSchedule::MonthOnly { year, month } => {
                placeholder(template, *year, *month, None, PlaceholderGranularity::Month)
            }
        }
    }

    fn range(&self, template: NormalizedItem, start: &str, end: &str) -> Vec<Candidate> {
        let bounds = (self.keyer.parse_day(start), self.keyer.parse_day(end));
        let (Some(start), Some(end)) = bounds else {
            return drop_record(ItemSource::Calendar, &template.title, DropReason::UnparseableDate);
        };
        let Some(plan) = self.policy.plan(start, end) else {
            return drop_record(ItemSource::Calendar, &template.title, DropReason::InvertedRange);
        };

        let bounds = RangeBounds { start, end, collapsed: plan.is_collapsed() };
        let mut candidates = Vec::with_capacity(plan.days().len() + 1);
        if plan.is_collapsed() {
            debug!(
                title = %template.title,
                %start,
                %end,
                threshold = self.policy.collapse_threshold_days(),
                "long range collapsed to boundary days"
            );
            candidates.push(Candidate::CollapsedRange);
        }
        candidates.extend(plan.days().iter().map(|&date_key| {
            Candidate::Day(NormalizedItem { date_key, range: Some(bounds), ..template.clone() })
        }));
        candidates
    }
}

/// Presence check on the raw category, then normalization.
fn resolve_category(raw: Option<&str>) -> Result<Category, DropReason> {
    let raw = raw.ok_or(DropReason::MissingCategory)?;
    let category = Category::normalize(Some(raw));
    if category.as_str().is_empty() {
        return Err(DropReason::EmptyCategory);
    }
    Ok(category)
}

fn placeholder(
    template: NormalizedItem,
    year: Option<i64>,
    month: Option<i64>,
    week_of_month: Option<u32>,
    granularity: PlaceholderGranularity,
) -> Vec<Candidate> {
    let month_key = year
        .and_then(|year| i32::try_from(year).ok())
        .zip(month.and_then(|month| u32::try_from(month).ok()))
        .and_then(|(year, month)| MonthKey::new(year, month));

    let Some(month) = month_key else {
        let reason = DropReason::InvalidPlaceholderMonth;
        return drop_record(ItemSource::Calendar, &template.title, reason);
    };

    vec![Candidate::Placeholder(PlaceholderItem {
        id: template.id,
        title: template.title,
        month,
        week_of_month,
        granularity,
        category: template.category,
        color: template.color,
        description: template.description,
        time: template.time,
    })]
}

fn drop_record(source: ItemSource, title: &str, reason: DropReason) -> Vec<Candidate> {
    debug!(%source, title, %reason, "record dropped");
    vec![Candidate::Dropped(reason)]
}
