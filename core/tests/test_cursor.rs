// Cursor behaviour the codecs rely on:
// * `align` (advance + zero padding + bounds)
// * `verify` (remaining capacity)
// * `put_int` / `get_int` (configured byte order)
// * typed primitives and extraction

#[cfg(test)]
mod tests {
    use byteorder::{BigEndian, LittleEndian};
    use hla_encoding::cursor::{ByteWrapper, Endian, WrapperConfig};
    use hla_encoding::types::CursorError;

// # ✅ 1. Alignment

    #[test]
    fn align_advances_to_next_multiple() {
        let mut w = ByteWrapper::new(16);
        w.put_u8(0xAA).unwrap();
        w.align(4).unwrap();
        assert_eq!(w.position(), 4);

        // already aligned: no movement
        w.align(4).unwrap();
        assert_eq!(w.position(), 4);

        w.align(8).unwrap();
        assert_eq!(w.position(), 8);
    }

    #[test]
    fn align_zero_fills_skipped_bytes() {
        let mut w = ByteWrapper::from_vec(vec![0xFF; 8]);
        w.put_u8(0x01).unwrap();
        w.align(8).unwrap();
        assert_eq!(w.array(), &[0x01, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn align_rejects_zero_boundary() {
        let mut w = ByteWrapper::new(4);
        assert_eq!(w.align(0), Err(CursorError::InvalidBoundary { boundary: 0 }));
    }

    #[test]
    fn align_past_end_is_rejected() {
        let mut w = ByteWrapper::new(3);
        w.put_u8(1).unwrap();
        assert!(matches!(w.align(4), Err(CursorError::Overflow { need: 3, have: 2, .. })));
    }

// # ✅ 2. Capacity checks

    #[test]
    fn verify_checks_remaining_bytes() {
        let mut w = ByteWrapper::new(8);
        w.put_int(7).unwrap();
        assert!(w.verify(4).is_ok());
        assert_eq!(
            w.verify(5),
            Err(CursorError::Underflow { position: 4, need: 5, have: 4 })
        );
    }

    #[test]
    fn read_past_end_is_underflow() {
        let mut w = ByteWrapper::from_vec(vec![0, 1]);
        assert!(matches!(w.get_int(), Err(CursorError::Underflow { need: 4, have: 2, .. })));
    }

    #[test]
    fn write_past_end_is_overflow() {
        let mut w = ByteWrapper::new(2);
        assert!(matches!(
            w.put_i32::<BigEndian>(1),
            Err(CursorError::Overflow { need: 4, have: 2, .. })
        ));
        // failed write does not move the position
        assert_eq!(w.position(), 0);
    }

// # ✅ 3. Count field byte order

    #[test]
    fn put_int_defaults_to_big_endian() {
        let mut w = ByteWrapper::new(4);
        w.put_int(0x0102_0304).unwrap();
        assert_eq!(w.array(), &[1, 2, 3, 4]);
    }

    #[test]
    fn put_int_follows_little_endian_config() {
        let mut w = ByteWrapper::with_config(4, WrapperConfig::new(Endian::Little));
        w.put_int(0x0102_0304).unwrap();
        assert_eq!(w.array(), &[4, 3, 2, 1]);

        w.reset();
        assert_eq!(w.get_int().unwrap(), 0x0102_0304);
    }

// # ✅ 4. Typed primitives

    #[test]
    fn typed_primitives_roundtrip() {
        let mut w = ByteWrapper::new(2 + 2 + 4 + 8 + 4 + 8 + 3);
        w.put_i16::<BigEndian>(-2).unwrap();
        w.put_i16::<LittleEndian>(0x0102).unwrap();
        w.put_i32::<BigEndian>(i32::MIN).unwrap();
        w.put_i64::<LittleEndian>(i64::MAX).unwrap();
        w.put_f32::<BigEndian>(1.5).unwrap();
        w.put_f64::<LittleEndian>(-0.25).unwrap();
        w.put_bytes(b"abc").unwrap();
        assert_eq!(w.remaining(), 0);

        let mut r = ByteWrapper::from_slice(w.array());
        assert_eq!(r.get_i16::<BigEndian>().unwrap(), -2);
        assert_eq!(r.get_i16::<LittleEndian>().unwrap(), 0x0102);
        assert_eq!(r.get_i32::<BigEndian>().unwrap(), i32::MIN);
        assert_eq!(r.get_i64::<LittleEndian>().unwrap(), i64::MAX);
        assert_eq!(r.get_f32::<BigEndian>().unwrap(), 1.5);
        assert_eq!(r.get_f64::<LittleEndian>().unwrap(), -0.25);
        assert_eq!(r.get_bytes(3).unwrap(), b"abc");
    }

    #[test]
    fn into_inner_returns_whole_buffer() {
        let mut w = ByteWrapper::new(6);
        w.put_u8(9).unwrap();
        assert_eq!(w.len(), 6);
        assert_eq!(w.into_inner(), vec![9, 0, 0, 0, 0, 0]);
    }
}
