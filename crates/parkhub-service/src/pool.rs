//! Per-category free lists of parking slots.

use std::collections::{BTreeMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use parkhub_core::error::AppError;
use parkhub_entity::{Category, Slot};

/// Free/total counts for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStatus {
    /// The slot category.
    pub category: Category,
    /// Number of slots configured for the category.
    pub total: usize,
    /// Slots currently free.
    pub free: usize,
    /// Slots currently held by tickets.
    pub occupied: usize,
}

/// FIFO free lists of slots, one per category.
///
/// The pool is not synchronized; callers serialize access to it (see
/// [`crate::parking::Parking`]). A slot is either in its category's free
/// list or held by exactly one ticket, never both.
#[derive(Debug, Default)]
pub struct SlotPool {
    /// Free slots per category, front is handed out first.
    free: BTreeMap<Category, VecDeque<Slot>>,
    /// Configured universe size per category.
    capacity: BTreeMap<Category, usize>,
}

impl SlotPool {
    /// Build a pool from a category → slot names layout.
    ///
    /// Names are handed out in the given order. A category listed twice is
    /// merged. Duplicate names within one category are rejected.
    pub fn new<I, N, S>(layout: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = (Category, N)>,
        N: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut pool = Self::default();
        let mut seen: HashSet<Slot> = HashSet::new();

        for (category, names) in layout {
            let free = pool.free.entry(category).or_default();
            for name in names {
                let slot = Slot::new(name, category);
                if !seen.insert(slot.clone()) {
                    return Err(AppError::configuration(format!(
                        "Duplicate slot '{}' in category '{}'",
                        slot.name, category
                    )));
                }
                free.push_back(slot);
            }
            pool.capacity.insert(category, free.len());
        }

        Ok(pool)
    }

    /// Remove and return the oldest free slot of exactly `category`.
    ///
    /// A category seen for the first time is registered with an empty list,
    /// so unconfigured categories yield `None` rather than an error.
    pub fn try_assign(&mut self, category: Category) -> Option<Slot> {
        self.capacity.entry(category).or_insert(0);
        self.free.entry(category).or_default().pop_front()
    }

    /// Return `slot` to the back of its own category's free list.
    ///
    /// Callers must release each assigned slot at most once.
    pub fn release(&mut self, slot: Slot) {
        self.free.entry(slot.category).or_default().push_back(slot);
    }

    /// Number of slots configured for `category`.
    pub fn capacity(&self, category: Category) -> usize {
        self.capacity.get(&category).copied().unwrap_or(0)
    }

    /// Free slots of `category`, in the order they would be assigned.
    pub fn free_slots(&self, category: Category) -> impl Iterator<Item = &Slot> {
        self.free.get(&category).into_iter().flatten()
    }

    /// Counts for every known category, in ascending category order.
    pub fn status(&self) -> Vec<CategoryStatus> {
        self.free
            .iter()
            .map(|(category, free)| {
                let total = self.capacity(*category);
                CategoryStatus {
                    category: *category,
                    total,
                    free: free.len(),
                    occupied: total.saturating_sub(free.len()),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(pool: &SlotPool, category: Category) -> Vec<String> {
        pool.free_slots(category).map(|s| s.name.clone()).collect()
    }

    #[test]
    fn test_assigns_in_fifo_order() {
        let mut pool = SlotPool::new([(Category::Primary, ["A1", "A2", "A3"])]).unwrap();

        assert_eq!(pool.try_assign(Category::Primary).unwrap().name, "A1");
        assert_eq!(pool.try_assign(Category::Primary).unwrap().name, "A2");
        assert_eq!(names(&pool, Category::Primary), vec!["A3"]);
    }

    #[test]
    fn test_release_appends_to_back() {
        let mut pool = SlotPool::new([(Category::Primary, ["A1", "A2"])]).unwrap();
        let first = pool.try_assign(Category::Primary).unwrap();

        pool.release(first);
        assert_eq!(names(&pool, Category::Primary), vec!["A2", "A1"]);
    }

    #[test]
    fn test_release_goes_to_slot_category() {
        let mut pool = SlotPool::new([
            (Category::Primary, vec![]),
            (Category::SecondaryCompatible, vec!["B"]),
        ])
        .unwrap();
        let slot = pool.try_assign(Category::SecondaryCompatible).unwrap();
        assert_eq!(pool.free_slots(Category::SecondaryCompatible).count(), 0);

        pool.release(slot);
        assert_eq!(pool.free_slots(Category::SecondaryCompatible).count(), 1);
        assert_eq!(pool.free_slots(Category::Primary).count(), 0);
    }

    #[test]
    fn test_unknown_category_is_lazily_empty() {
        let mut pool = SlotPool::new([(Category::Primary, ["A"])]).unwrap();

        assert!(pool.try_assign(Category::TertiaryCompatible).is_none());
        let status = pool.status();
        assert_eq!(status.len(), 2);
        assert_eq!(
            status[1],
            CategoryStatus {
                category: Category::TertiaryCompatible,
                total: 0,
                free: 0,
                occupied: 0,
            }
        );
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = SlotPool::new([(Category::Primary, ["A", "A"])]).unwrap_err();
        assert!(err.message.contains("Duplicate slot 'A'"));

        let ok = SlotPool::new([
            (Category::Primary, ["A"]),
            (Category::SecondaryCompatible, ["A"]),
        ]);
        assert!(ok.is_ok());
    }

    #[test]
    fn test_status_tracks_occupancy() {
        let mut pool = SlotPool::new([
            (Category::Primary, vec!["A1", "A2"]),
            (Category::SecondaryCompatible, vec!["B1"]),
        ])
        .unwrap();
        pool.try_assign(Category::Primary);

        let status = pool.status();
        assert_eq!(status[0].category, Category::Primary);
        assert_eq!((status[0].total, status[0].free, status[0].occupied), (2, 1, 1));
        assert_eq!((status[1].total, status[1].free, status[1].occupied), (1, 1, 0));
    }
}
