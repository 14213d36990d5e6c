//! Row predicate composition and the filter engine

use crate::engine::selection::{is_unrestricted, Dimension, SelectionSet, ALL_SENTINEL};
use crate::input::record::Record;
use log::debug;
use std::collections::{BTreeSet, HashSet};

/// Boolean inclusion test over a single record.
pub type RowPredicate<'a> = Box<dyn Fn(&Record) -> bool + 'a>;

/// Membership test for one dimension. An unrestricted selection accepts every row.
pub fn dimension_predicate<'a>(
    dimension: Dimension,
    chosen: &'a BTreeSet<String>,
) -> RowPredicate<'a> {
    if is_unrestricted(chosen) {
        Box::new(|_: &Record| true)
    } else {
        Box::new(move |record: &Record| chosen.contains(dimension.value(record)))
    }
}

/// Logical AND; an empty list accepts every row.
pub fn all_of(predicates: Vec<RowPredicate<'_>>) -> RowPredicate<'_> {
    Box::new(move |record: &Record| predicates.iter().all(|p| p(record)))
}

/// Logical OR; an empty list rejects every row.
pub fn any_of(predicates: Vec<RowPredicate<'_>>) -> RowPredicate<'_> {
    Box::new(move |record: &Record| predicates.iter().any(|p| p(record)))
}

/// Inclusion predicate for a whole selection set.
pub fn selection_predicate(selections: &SelectionSet) -> RowPredicate<'_> {
    all_of(
        selections
            .iter()
            .map(|(dimension, chosen)| dimension_predicate(dimension, chosen))
            .collect(),
    )
}

/// Rows matching every selected dimension, in their table order.
pub fn apply_filters<'a, I>(records: I, selections: &SelectionSet) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    if selections.is_unrestricted() {
        let all: Vec<&Record> = records.into_iter().collect();
        debug!("No restricted dimensions; keeping all {} records", all.len());
        return all;
    }

    let predicate = selection_predicate(selections);
    let mut total = 0usize;
    let filtered: Vec<&Record> = records
        .into_iter()
        .inspect(|_| total += 1)
        .filter(|record| predicate(*record))
        .collect();

    debug!("Filter kept {} of {} records", filtered.len(), total);
    filtered
}

/// Options for a selection widget: "All" followed by the distinct values of
/// the dimension in first-seen order.
pub fn dimension_options<'a, I>(records: I, dimension: Dimension) -> Vec<String>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut seen = HashSet::new();
    let mut options = vec![ALL_SENTINEL.to_string()];
    for record in records {
        let value = dimension.value(record);
        if seen.insert(value) {
            options.push(value.to_string());
        }
    }
    options
}
