//! Sort keys and multi-column ordering.

use std::cmp::Ordering;

use super::ColumnSchema;

/// Direction of a single sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest values first.
    Ascending,
    /// Largest values first.
    Descending,
}

impl SortDirection {
    /// Marker drawn next to a sorted column header.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// Next step of the unsorted → ascending → descending → unsorted cycle.
const fn rotate(current: Option<SortDirection>) -> Option<SortDirection> {
    match current {
        None => Some(SortDirection::Ascending),
        Some(SortDirection::Ascending) => Some(SortDirection::Descending),
        Some(SortDirection::Descending) => None,
    }
}

/// One column participating in the sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    /// Column index in the schema.
    pub column: usize,
    /// Sort direction.
    pub direction: SortDirection,
}

/// Ordered list of sort keys; earlier keys take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    keys: Vec<SortKey>,
}

impl SortState {
    /// Rotates the sort on `column`.
    ///
    /// Without `append` the column becomes the only sort key. With `append`
    /// the column is added after the existing keys, or rotated in place when
    /// it already participates; rotating past descending removes it.
    pub fn toggle(&mut self, column: usize, append: bool) {
        let existing = self.keys.iter().position(|key| key.column == column);
        let current = existing
            .and_then(|index| self.keys.get(index))
            .map(|key| key.direction);
        let next = rotate(current);

        if !append {
            self.keys.clear();
            if let Some(direction) = next {
                self.keys.push(SortKey { column, direction });
            }
            return;
        }

        match (existing, next) {
            (Some(index), Some(direction)) => {
                if let Some(key) = self.keys.get_mut(index) {
                    key.direction = direction;
                }
            }
            (Some(index), None) => {
                self.keys.remove(index);
            }
            (None, Some(direction)) => self.keys.push(SortKey { column, direction }),
            (None, None) => {}
        }
    }

    /// Active keys in precedence order.
    #[must_use]
    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    /// Returns true when no column is sorted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Precedence (0-based) and direction of `column`, if sorted.
    #[must_use]
    pub fn key_for(&self, column: usize) -> Option<(usize, SortDirection)> {
        self.keys
            .iter()
            .enumerate()
            .find(|(_, key)| key.column == column)
            .map(|(order, key)| (order, key.direction))
    }

    /// Compares two rows key by key.
    #[must_use]
    pub fn compare<R>(&self, schema: &ColumnSchema<R>, left: &R, right: &R) -> Ordering {
        self.keys
            .iter()
            .filter_map(|key| schema.column(key.column).map(|column| (key, column)))
            .map(|(key, column)| {
                let ordering = column.value(left).sort_cmp(&column.value(right));
                match key.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn plain_toggle_rotates_through_three_states() {
        let mut state = SortState::default();

        state.toggle(2, false);
        assert_eq!(state.key_for(2), Some((0, SortDirection::Ascending)));

        state.toggle(2, false);
        assert_eq!(state.key_for(2), Some((0, SortDirection::Descending)));

        state.toggle(2, false);
        assert!(state.is_empty());
    }

    #[test]
    fn plain_toggle_replaces_other_keys() {
        let mut state = SortState::default();
        state.toggle(0, false);
        state.toggle(1, true);

        state.toggle(3, false);

        assert_eq!(
            state.keys(),
            &[SortKey {
                column: 3,
                direction: SortDirection::Ascending
            }]
        );
    }

    #[test]
    fn append_composes_keys_in_click_order() {
        let mut state = SortState::default();
        state.toggle(4, false);
        state.toggle(1, true);
        state.toggle(7, true);

        let columns: Vec<_> = state.keys().iter().map(|key| key.column).collect();
        assert_eq!(columns, vec![4, 1, 7]);
    }

    #[rstest]
    #[case::once(1, Some((1, SortDirection::Descending)))]
    #[case::twice(2, None)]
    fn append_rotates_existing_key_in_place(
        #[case] extra_toggles: usize,
        #[case] expected: Option<(usize, SortDirection)>,
    ) {
        let mut state = SortState::default();
        state.toggle(0, false);
        state.toggle(5, true);

        for _ in 0..extra_toggles {
            state.toggle(5, true);
        }

        assert_eq!(state.key_for(5), expected);
        assert_eq!(state.key_for(0), Some((0, SortDirection::Ascending)));
    }
}
