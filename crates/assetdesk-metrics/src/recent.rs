//! Most-recently-updated tickets.

use std::cmp::Reverse;

use assetdesk_core::Ticket;

/// The `n` most recently updated tickets of a snapshot, newest first.
///
/// Ties on `updated_at` keep collection order. The selection is fixed when
/// the value is built; [`RecentActivity::iter`] can be called any number of
/// times and always yields the same tickets in the same order.
#[derive(Debug, Clone)]
pub struct RecentActivity<'a> {
    tickets: &'a [Ticket],
    order: Vec<usize>,
}

impl<'a> RecentActivity<'a> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[must_use]
    pub fn iter(&self) -> Iter<'_, 'a> {
        Iter {
            tickets: self.tickets,
            order: self.order.iter(),
        }
    }
}

impl<'s, 'a> IntoIterator for &'s RecentActivity<'a> {
    type Item = &'a Ticket;
    type IntoIter = Iter<'s, 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`RecentActivity`] selection.
#[derive(Debug, Clone)]
pub struct Iter<'s, 'a> {
    tickets: &'a [Ticket],
    order: std::slice::Iter<'s, usize>,
}

impl<'a> Iterator for Iter<'_, 'a> {
    type Item = &'a Ticket;

    fn next(&mut self) -> Option<Self::Item> {
        let tickets = self.tickets;
        self.order.next().map(|&index| &tickets[index])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_, '_> {}

/// Select the `n` tickets with the largest `updated_at`.
#[must_use]
pub fn recent_activity(tickets: &[Ticket], n: usize) -> RecentActivity<'_> {
    let mut order: Vec<usize> = (0..tickets.len()).collect();
    // Stable sort: equal stamps stay in collection order.
    order.sort_by_key(|&index| Reverse(tickets[index].updated_at));
    order.truncate(n);
    RecentActivity { tickets, order }
}
