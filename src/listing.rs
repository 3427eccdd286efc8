use chrono::NaiveDate;
use tracing::debug;

use crate::models::Item;

/// The four views the pages are built from. Every view borrows from the same
/// item slice, so an item can show up in more than one of them.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Listing<'a> {
    pub coming_soon: Vec<&'a Item>,
    pub past_workshops: Vec<&'a Item>,
    pub self_paced: Vec<&'a Item>,
    pub recorded_workshops: Vec<&'a Item>,
}

impl<'a> Listing<'a> {
    pub fn classify(items: &'a [Item], as_of: NaiveDate) -> Self {
        let mut listing = Listing::default();

        for item in items {
            match &item.schedule {
                Some(schedule) if schedule.end >= as_of => listing.coming_soon.push(item),
                Some(_) => listing.past_workshops.push(item),
                None => listing.self_paced.push(item),
            }
            if item.recorded {
                listing.recorded_workshops.push(item);
            }
        }

        listing.coming_soon.sort_by_key(|item| item.begin());
        listing
            .past_workshops
            .sort_by(|a, b| b.begin().cmp(&a.begin()));

        debug!(
            %as_of,
            coming_soon = listing.coming_soon.len(),
            past = listing.past_workshops.len(),
            self_paced = listing.self_paced.len(),
            recorded = listing.recorded_workshops.len(),
            "classified items"
        );
        listing
    }
}
