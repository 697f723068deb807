#[cfg(test)]
mod tests {
    use spool_core::{NonEmptyList, RandomInts, random_token, separated_by};

    #[test]
    fn non_empty_list_always_has_a_head() {
        let list = NonEmptyList::new(1);
        assert_eq!(list.len(), 1);
        assert_eq!(*list.first(), 1);
        let list = NonEmptyList::with_rest(1, [2, 3]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(0), Some(&1));
        assert_eq!(list.get(2), Some(&3));
        assert_eq!(list.get(3), None);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn non_empty_list_from_vec() {
        let list: NonEmptyList<i32> = NonEmptyList::try_from(vec![5, 6]).unwrap();
        assert_eq!(list.into_iter().collect::<Vec<_>>(), [5, 6]);
        assert!(NonEmptyList::<i32>::try_from(vec![]).is_err());
    }

    #[test]
    fn random_sources() {
        let values: Vec<i64> = RandomInts::new(1..=6).take(100).collect();
        assert_eq!(values.len(), 100);
        assert!(values.iter().all(|v| (1..=6).contains(v)));
        let token = random_token(16);
        assert_eq!(token.len(), 16);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn separated_by_joins_produced_pieces() {
        let mut out = String::new();
        separated_by(&mut out, ["a", "b", "c"], |out, v| out.push_str(v), ".");
        assert_eq!(out, "a.b.c");
        // A piece producing no output does not earn its own separator.
        let mut out = String::new();
        separated_by(&mut out, ["a", "", "c"], |out, v| out.push_str(v), ".");
        assert_eq!(out, "a.c");
    }
}
