use crate::impls::utils::impl_navigate_for_hashmap;

impl_navigate_for_hashmap!(::hashbrown::HashMap<K, V, S>);

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use foldhash::fast::FixedState;

    use crate::Navigate;

    #[test]
    fn lookup_by_string_key() {
        let mut map = ::hashbrown::HashMap::with_hasher(FixedState::with_seed(7));
        map.insert("alpha".to_string(), 1_i32);
        map.insert("0".to_string(), 2_i32);

        let mapping = map.as_mapping().unwrap();
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("alpha").unwrap().downcast_ref::<i32>(), Some(&1));
        assert_eq!(mapping.get("0").unwrap().downcast_ref::<i32>(), Some(&2));
        assert!(mapping.get("beta").is_none());
    }
}
