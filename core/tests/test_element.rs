// Element contract helpers: boundary cache, factories, downcasting.

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use hla_encoding::basic::{HlaInteger16BE, HlaOctet};
    use hla_encoding::element::{AsAny, BoundaryCache, ElementFactory, Encodable};

    #[test]
    fn boundary_cache_computes_once_until_invalidated() {
        let cache = BoundaryCache::new();
        let calls = Cell::new(0);
        let compute = || {
            calls.set(calls.get() + 1);
            8
        };

        assert_eq!(cache.cached(), None);
        assert_eq!(cache.get_or_compute(compute), 8);
        assert_eq!(cache.get_or_compute(compute), 8);
        assert_eq!(calls.get(), 1);
        assert_eq!(cache.cached(), Some(8));

        cache.invalidate();
        assert_eq!(cache.cached(), None);
        assert_eq!(cache.get_or_compute(|| 4), 4);
    }

    #[test]
    fn closures_and_constructors_are_factories() {
        let from_fn: &dyn ElementFactory<HlaOctet> = &HlaOctet::default;
        assert_eq!(from_fn.create(), HlaOctet::new(0));

        let seeded = || HlaInteger16BE::new(42);
        assert_eq!(seeded.create().value(), 42);
        // every call yields a fresh element
        assert_eq!(seeded.create(), seeded.create());
    }

    #[test]
    fn trait_objects_downcast_to_concrete_type() {
        let item: Box<dyn Encodable> = Box::new(HlaInteger16BE::new(5));
        let any = AsAny::as_any(&*item);
        assert_eq!(any.downcast_ref::<HlaInteger16BE>().map(|v| v.value()), Some(5));
        assert!(any.downcast_ref::<HlaOctet>().is_none());
    }

    #[test]
    fn to_bytes_is_sized_to_encoded_length() {
        let value = HlaInteger16BE::new(0x0102);
        let wire = value.to_bytes().unwrap();
        assert_eq!(wire.len(), value.encoded_length());
        assert_eq!(wire, vec![1, 2]);
    }
}
