use crate::impls::utils::impl_navigate_for_hashmap;

impl_navigate_for_hashmap!(::std::collections::HashMap<K, V, S>);

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::Navigate;

    #[test]
    fn lookup_by_str_key() {
        let map = HashMap::from([("x", 1.5_f64), ("y", 2.5_f64)]);

        let mapping = map.as_mapping().unwrap();
        assert_eq!(mapping.get("y").unwrap().downcast_ref::<f64>(), Some(&2.5));
        assert!(mapping.get("z").is_none());
    }
}
