//! Position ordering utilities.
//!
//! Cards and lists carry a 1-based `position` that is unique and contiguous
//! within their parent. `sort_by_position` puts a sequence into display
//! order; `normalize_positions` re-stamps a sequence after a splice so the
//! contiguity invariant holds again.

/// Anything ordered by a 1-based integer position
pub trait Positioned {
    fn position(&self) -> u32;
    fn set_position(&mut self, position: u32);
}

/// Return a new sequence sorted ascending by position. The sort is stable:
/// elements with equal positions keep their original relative order. The
/// input is not mutated.
pub fn sort_by_position<T: Positioned + Clone>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by_key(|item| item.position());
    sorted
}

/// Re-stamp each element's position to its 1-based index in the given
/// order. The input order is authoritative; no sorting happens here. Must
/// be applied to every list whose card sequence was spliced by a move.
pub fn normalize_positions<T: Positioned>(mut items: Vec<T>) -> Vec<T> {
    for (index, item) in items.iter_mut().enumerate() {
        item.set_position(index as u32 + 1);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        label: &'static str,
        position: u32,
    }

    impl Item {
        fn new(label: &'static str, position: u32) -> Self {
            Self { label, position }
        }
    }

    impl Positioned for Item {
        fn position(&self) -> u32 {
            self.position
        }

        fn set_position(&mut self, position: u32) {
            self.position = position;
        }
    }

    #[test]
    fn test_sort_by_position_ascending() {
        let items = vec![Item::new("c", 3), Item::new("a", 1), Item::new("b", 2)];
        let sorted = sort_by_position(&items);

        let labels: Vec<_> = sorted.iter().map(|i| i.label).collect();
        assert_eq!(labels, ["a", "b", "c"]);
        // Input untouched
        assert_eq!(items[0].label, "c");
    }

    #[test]
    fn test_sort_by_position_stable_for_ties() {
        let items = vec![
            Item::new("first", 2),
            Item::new("second", 2),
            Item::new("head", 1),
            Item::new("third", 2),
        ];
        let sorted = sort_by_position(&items);

        let labels: Vec<_> = sorted.iter().map(|i| i.label).collect();
        assert_eq!(labels, ["head", "first", "second", "third"]);
    }

    #[test]
    fn test_normalize_positions_restamps_one_based() {
        let items = vec![Item::new("a", 7), Item::new("b", 7), Item::new("c", 2)];
        let normalized = normalize_positions(items);

        let positions: Vec<_> = normalized.iter().map(|i| i.position).collect();
        assert_eq!(positions, [1, 2, 3]);
        // Order is taken as authoritative, never re-sorted
        let labels: Vec<_> = normalized.iter().map(|i| i.label).collect();
        assert_eq!(labels, ["a", "b", "c"]);
    }

    #[test]
    fn test_normalize_positions_idempotent() {
        let items = vec![Item::new("a", 4), Item::new("b", 9)];
        let once = normalize_positions(items);
        let twice = normalize_positions(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_normalize_positions_empty() {
        let items: Vec<Item> = Vec::new();
        assert!(normalize_positions(items).is_empty());
    }
}
