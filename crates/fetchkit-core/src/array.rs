//! Generic array helpers: dedupe, chunking, set-style difference, grouping.
//!
//! All of these are pure input-to-output transforms over slices or iterators;
//! none allocate beyond the returned collection.

use std::collections::HashMap;
use std::hash::Hash;

/// Removes duplicate elements, preserving first-seen order.
pub fn uniq<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = std::collections::HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert((*item).clone()))
        .cloned()
        .collect()
}

/// Returns every element whose first occurrence is at an earlier index, so a
/// value appearing three times is reported twice.
pub fn find_duplicates<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .filter(|(index, item)| items.iter().position(|x| x == *item) != Some(*index))
        .map(|(_, item)| item.clone())
        .collect()
}

/// Splits `items` into chunks of `chunk_size`; the last chunk may be shorter.
/// A chunk size of zero yields no chunks.
pub fn chunk<T: Clone>(items: &[T], chunk_size: usize) -> Vec<Vec<T>> {
    if chunk_size == 0 {
        return Vec::new();
    }
    items.chunks(chunk_size).map(|c| c.to_vec()).collect()
}

/// Elements of `first` that do not appear in `second`, order preserved,
/// duplicates kept.
pub fn difference<T: PartialEq + Clone>(first: &[T], second: &[T]) -> Vec<T> {
    first
        .iter()
        .filter(|item| !second.contains(item))
        .cloned()
        .collect()
}

/// Keyed difference: elements of `first` whose key (per `key_fn`) does not
/// appear among the keys of `second`.
pub fn difference_by<T, K, F>(first: &[T], second: &[T], key_fn: F) -> Vec<T>
where
    T: Clone,
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let second_keys: Vec<K> = second.iter().map(&key_fn).collect();
    first
        .iter()
        .filter(|item| !second_keys.contains(&key_fn(item)))
        .cloned()
        .collect()
}

/// Drops absent values, keeping the rest in order.
pub fn compact<T>(items: impl IntoIterator<Item = Option<T>>) -> Vec<T> {
    items.into_iter().flatten().collect()
}

/// Flattens multiple slices into one vector, in order.
pub fn concat<T: Clone>(arrays: &[&[T]]) -> Vec<T> {
    let total: usize = arrays.iter().map(|a| a.len()).sum();
    let mut out = Vec::with_capacity(total);
    for array in arrays {
        out.extend_from_slice(array);
    }
    out
}

/// Groups items by the key produced by `key_fn`. Order within each group
/// follows the input order.
pub fn group_by<T, K, F>(items: Vec<T>, key_fn: F) -> HashMap<K, Vec<T>>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for item in items {
        groups.entry(key_fn(&item)).or_default().push(item);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniq_preserves_first_seen_order() {
        assert_eq!(uniq(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
        assert_eq!(uniq::<i32>(&[]), Vec::<i32>::new());
    }

    #[test]
    fn find_duplicates_reports_each_extra_occurrence() {
        assert_eq!(find_duplicates(&[1, 2, 1, 3, 1]), vec![1, 1]);
        assert_eq!(find_duplicates(&["a", "b", "c"]), Vec::<&str>::new());
    }

    #[test]
    fn chunk_splits_with_short_tail() {
        assert_eq!(chunk(&[1, 2, 3, 4, 5], 2), vec![vec![1, 2], vec![3, 4], vec![5]]);
        assert_eq!(chunk(&[1, 2], 5), vec![vec![1, 2]]);
        assert!(chunk(&[1, 2, 3], 0).is_empty());
    }

    #[test]
    fn difference_keeps_order_and_duplicates() {
        assert_eq!(difference(&[1, 2, 2, 3], &[2]), vec![1, 3]);
        assert_eq!(difference(&[1, 1, 4], &[3]), vec![1, 1, 4]);
    }

    #[test]
    fn difference_by_uses_the_key() {
        #[derive(Debug, Clone, PartialEq)]
        struct Pkg {
            name: &'static str,
            version: u32,
        }
        let have = vec![
            Pkg { name: "curl", version: 1 },
            Pkg { name: "tokio", version: 2 },
        ];
        let want = vec![Pkg { name: "curl", version: 9 }];
        let missing = difference_by(&have, &want, |p| p.name);
        assert_eq!(missing, vec![Pkg { name: "tokio", version: 2 }]);
    }

    #[test]
    fn compact_drops_none() {
        assert_eq!(compact(vec![Some(1), None, Some(2), None]), vec![1, 2]);
    }

    #[test]
    fn concat_flattens_in_order() {
        assert_eq!(concat(&[&[1, 2][..], &[][..], &[3][..]]), vec![1, 2, 3]);
    }

    #[test]
    fn group_by_buckets_in_input_order() {
        let groups = group_by(vec!["apple", "avocado", "banana"], |s| s.as_bytes()[0]);
        assert_eq!(groups[&b'a'], vec!["apple", "avocado"]);
        assert_eq!(groups[&b'b'], vec!["banana"]);
    }
}
