//! Inclusive numeric sequence generator.

/// Iterator over `min..=max`; empty when `min > max`, fused at exhaustion.
#[derive(Debug, Clone)]
pub struct Sequence {
    next: i64,
    max: i64,
    done: bool,
}

/// Yields every integer from `min` through `max` inclusive.
pub fn sequence(min: i64, max: i64) -> Sequence {
    Sequence {
        next: min,
        max,
        done: min > max,
    }
}

impl Iterator for Sequence {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.done {
            return None;
        }
        let current = self.next;
        if current == self.max {
            self.done = true;
        } else {
            self.next += 1;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let remaining = (self.max - self.next) as usize + 1;
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inclusive_bounds() {
        assert_eq!(sequence(1, 5).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert_eq!(sequence(-2, 1).collect::<Vec<_>>(), vec![-2, -1, 0, 1]);
    }

    #[test]
    fn single_element_and_empty() {
        assert_eq!(sequence(7, 7).collect::<Vec<_>>(), vec![7]);
        assert_eq!(sequence(3, 2).count(), 0);
    }

    #[test]
    fn exhaustion_is_fused() {
        let mut s = sequence(0, 1);
        assert_eq!(s.next(), Some(0));
        assert_eq!(s.next(), Some(1));
        assert_eq!(s.next(), None);
        assert_eq!(s.next(), None);
    }

    #[test]
    fn size_hint_is_exact() {
        assert_eq!(sequence(1, 10).size_hint(), (10, Some(10)));
        assert_eq!(sequence(5, 4).size_hint(), (0, Some(0)));
    }
}
