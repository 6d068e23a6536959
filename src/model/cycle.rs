/// Returns the element after (or before) `current` in `items`, wrapping around.
///
/// A `current` not found in `items` is treated as the first element.
/// `items` must not be empty.
pub fn cycle<T: PartialEq + Copy>(items: &[T], current: T, forward: bool) -> T {
    let pos = items.iter().position(|&x| x == current).unwrap_or(0);
    let next = if forward {
        (pos + 1) % items.len()
    } else {
        (pos + items.len() - 1) % items.len()
    };
    items[next]
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    #[test]
    fn forward_advances() {
        assert_eq!(cycle(&[1, 2, 3], 1, true), 2);
    }

    #[test]
    fn forward_wraps_to_first() {
        assert_eq!(cycle(&[1, 2, 3], 3, true), 1);
    }

    #[test]
    fn backward_wraps_to_last() {
        assert_eq!(cycle(&[1, 2, 3], 1, false), 3);
    }

    #[test]
    fn missing_current_starts_from_first() {
        assert_eq!(cycle(&[1, 2, 3], 9, true), 2);
        assert_eq!(cycle(&[1, 2, 3], 9, false), 3);
    }

    #[test]
    fn single_item_stays_put() {
        assert_eq!(cycle(&['a'], 'a', true), 'a');
        assert_eq!(cycle(&['a'], 'a', false), 'a');
    }

    #[quickcheck]
    fn forward_then_backward_is_identity(len: u8, pick: u8) -> bool {
        let items: Vec<u8> = (0..=len).collect();
        let current = items[usize::from(pick) % items.len()];
        cycle(&items, cycle(&items, current, true), false) == current
    }
}
