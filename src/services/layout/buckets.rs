use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::event::Event;
use crate::models::view::DateWindow;

/// Events falling on exactly the given calendar day, ordered by start time
/// and then by id so equal start times come out deterministically.
pub fn bucket_for_day<'a>(events: &[&'a Event], day: NaiveDate) -> Vec<&'a Event> {
    let mut bucket: Vec<&Event> = events.iter().copied().filter(|e| e.day == day).collect();
    sort_bucket(&mut bucket);
    bucket
}

/// One bucket per day of the window, in day order.
///
/// Every window day is present as a key; days with no events map to an empty
/// list rather than a missing entry. Events outside the window are ignored.
pub fn bucket_by_day<'a>(
    events: &[&'a Event],
    window: &DateWindow,
) -> BTreeMap<NaiveDate, Vec<&'a Event>> {
    let mut buckets: BTreeMap<NaiveDate, Vec<&Event>> =
        window.days().map(|day| (day, Vec::new())).collect();

    for event in events {
        if let Some(bucket) = buckets.get_mut(&event.day) {
            bucket.push(event);
        }
    }
    for bucket in buckets.values_mut() {
        sort_bucket(bucket);
    }
    buckets
}

fn sort_bucket(bucket: &mut [&Event]) {
    bucket.sort_by(|a, b| {
        a.start_minutes()
            .cmp(&b.start_minutes())
            .then_with(|| a.id.cmp(&b.id))
    });
}
