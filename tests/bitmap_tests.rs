use resstore::{BitState, Bitmap, BitmapError};

#[test]
fn test_create_smallest_and_large() {
    let bitmap = Bitmap::new(0).unwrap();
    assert_eq!(bitmap.num_bits(), 0);
    assert_eq!(bitmap.check(0, 0), Ok(BitState::AllClear));

    let bitmap = Bitmap::new(999_999).unwrap();
    assert_eq!(bitmap.num_bits(), 999_999);
    assert_eq!(bitmap.check(0, 999_999), Ok(BitState::AllClear));
}

#[test]
fn test_range_errors() {
    let mut bitmap = Bitmap::new(2000).unwrap();

    assert_eq!(
        bitmap.free(2001, 0),
        Err(BitmapError::OutOfRange {
            base: 2001,
            num_bits: 2000
        })
    );
    assert_eq!(
        bitmap.free(0, 2001),
        Err(BitmapError::RangeOverflow {
            base: 0,
            limit: 2001,
            num_bits: 2000
        })
    );
    assert_eq!(
        bitmap.free(100, 1990),
        Err(BitmapError::RangeOverflow {
            base: 100,
            limit: 1990,
            num_bits: 2000
        })
    );
    // base + limit wraps around usize.
    assert_eq!(
        bitmap.free(1900, usize::MAX - 100),
        Err(BitmapError::RangeOverflow {
            base: 1900,
            limit: usize::MAX - 100,
            num_bits: 2000
        })
    );

    assert!(matches!(
        bitmap.take(2001, 0),
        Err(BitmapError::OutOfRange { .. })
    ));
    assert!(matches!(
        bitmap.take(0, 2001),
        Err(BitmapError::RangeOverflow { .. })
    ));
    assert!(matches!(
        bitmap.take(1900, usize::MAX - 100),
        Err(BitmapError::RangeOverflow { .. })
    ));

    assert!(matches!(
        bitmap.check(2001, 0),
        Err(BitmapError::OutOfRange { .. })
    ));
    assert!(matches!(
        bitmap.check(0, 2001),
        Err(BitmapError::RangeOverflow { .. })
    ));

    assert!(matches!(
        bitmap.count(2001, 0),
        Err(BitmapError::OutOfRange { .. })
    ));
    assert!(matches!(
        bitmap.count(100, 1990),
        Err(BitmapError::RangeOverflow { .. })
    ));
}

#[test]
fn test_single_bit_walk() {
    let mut bitmap = Bitmap::new(2000).unwrap();

    for i in (0..=2000).step_by(40) {
        assert_eq!(bitmap.check(i, 0), Ok(BitState::AllClear));
        bitmap.take(i, 0).unwrap();
        assert_eq!(bitmap.check(i, 0), Ok(BitState::AllSet));
        bitmap.free(i, 0).unwrap();
        assert_eq!(bitmap.check(i, 0), Ok(BitState::AllClear));
    }
}

#[test]
fn test_alternating_pattern() {
    let mut bitmap = Bitmap::new(2000).unwrap();

    for i in (0..2000).step_by(2) {
        bitmap.take(i, 0).unwrap();
        bitmap.free(i + 1, 0).unwrap();
    }
    for i in (0..2000).step_by(2) {
        assert_eq!(bitmap.check(i, 0), Ok(BitState::AllSet));
        assert_eq!(bitmap.check(i + 1, 0), Ok(BitState::AllClear));
    }
    // Bits 1..=8 hold 2,4,6,8 set.
    assert_eq!(bitmap.count(1, 7), Ok(4));
    assert_eq!(bitmap.check(0, 1999), Ok(BitState::Mixed));
}

#[test]
fn test_take_check_count_free_scenario() {
    // 2001-bit map: take seven bits, verify bit by bit, count, free.
    let mut bitmap = Bitmap::new(2000).unwrap();

    bitmap.take(0, 6).unwrap();
    for i in 0..=6 {
        assert_eq!(bitmap.check(i, 0), Ok(BitState::AllSet));
    }
    assert_eq!(bitmap.check(7, 0), Ok(BitState::AllClear));
    assert_eq!(bitmap.count(0, 7), Ok(7));

    bitmap.free(0, 6).unwrap();
    for i in 0..=6 {
        assert_eq!(bitmap.check(i, 0), Ok(BitState::AllClear));
    }
    assert_eq!(bitmap.count(0, 7), Ok(0));
}

#[test]
fn test_runs_across_word_boundaries() {
    let mut bitmap = Bitmap::new(2000).unwrap();

    // Runs sized to straddle 32- and 64-bit word edges.
    for run in [29, 62, 66] {
        bitmap.take(0, run - 1).unwrap();
        for i in 0..run {
            assert_eq!(bitmap.check(i, 0), Ok(BitState::AllSet));
        }
        assert_eq!(bitmap.check(run, 0), Ok(BitState::AllClear));

        bitmap.free(0, run - 1).unwrap();
        for i in 0..run {
            assert_eq!(bitmap.check(i, 0), Ok(BitState::AllClear));
        }
    }
}

#[test]
fn test_multi_bit_check_obstacle_course() {
    let mut bitmap = Bitmap::new(2000).unwrap();

    // 111000 repeating over the first 70 bits, then 65 clear, 65 set.
    bitmap.take(0, 199).unwrap();
    for i in (0..70).step_by(6) {
        bitmap.take(i, 2).unwrap();
        bitmap.free(i + 3, 2).unwrap();
    }
    bitmap.free(70, 64).unwrap();
    bitmap.take(135, 64).unwrap();

    assert_eq!(bitmap.check(0, 2), Ok(BitState::AllSet));
    assert_eq!(bitmap.check(0, 3), Ok(BitState::Mixed));
    assert_eq!(bitmap.check(3, 2), Ok(BitState::AllClear));
    assert_eq!(bitmap.check(30, 4), Ok(BitState::Mixed));
    assert_eq!(bitmap.check(70, 64), Ok(BitState::AllClear));
    assert_eq!(bitmap.check(68, 66), Ok(BitState::Mixed));
    assert_eq!(bitmap.check(70, 65), Ok(BitState::Mixed));
    assert_eq!(bitmap.check(135, 64), Ok(BitState::AllSet));
    assert_eq!(bitmap.check(135, 65), Ok(BitState::Mixed));
    assert_eq!(bitmap.check(100, 50), Ok(BitState::Mixed));
}

#[test]
fn test_alloc_returns_distinct_free_blocks() {
    let mut bitmap = Bitmap::new(2000).unwrap();

    assert_eq!(
        bitmap.alloc(2001),
        Err(BitmapError::BadParameter {
            block_size: 2001,
            num_bits: 2000
        })
    );

    let a = bitmap.alloc(0).unwrap();
    let b = bitmap.alloc(0).unwrap();
    let c = bitmap.alloc(0).unwrap();
    assert_ne!(a, b);
    assert_ne!(a, c);
    assert_ne!(b, c);
    assert_eq!(bitmap.count(0, 2000), Ok(3));

    let d = bitmap.alloc(1).unwrap();
    let e = bitmap.alloc(62).unwrap();
    let f = bitmap.alloc(101).unwrap();
    assert_eq!(bitmap.count(0, 2000), Ok(3 + 2 + 63 + 102));

    // Every returned block was genuinely free and is now fully taken.
    assert_eq!(bitmap.check(d, 1), Ok(BitState::AllSet));
    assert_eq!(bitmap.check(e, 62), Ok(BitState::AllSet));
    assert_eq!(bitmap.check(f, 101), Ok(BitState::AllSet));
}

#[test]
fn test_alloc_first_fit_skips_taken_runs() {
    let mut bitmap = Bitmap::new(99).unwrap();

    // Occupy bits 0..=9, leave a 5-bit gap, occupy 15..=19.
    bitmap.take(0, 9).unwrap();
    bitmap.take(15, 4).unwrap();

    // A 5-bit request lands exactly in the gap.
    assert_eq!(bitmap.alloc(4), Ok(10));
    // The next one has to go past the second run.
    assert_eq!(bitmap.alloc(4), Ok(20));
}

#[test]
fn test_alloc_no_match() {
    let mut bitmap = Bitmap::new(99).unwrap();

    // Chop the free space into runs shorter than the request.
    for i in (0..=99).step_by(10) {
        bitmap.take(i, 0).unwrap();
    }
    assert_eq!(bitmap.alloc(9), Err(BitmapError::NoMatch { block_size: 9 }));

    // A fitting request still succeeds.
    assert_eq!(bitmap.alloc(8), Ok(1));
}

#[test]
fn test_resize_preserves_bits() {
    let mut bitmap = Bitmap::new(99).unwrap();
    bitmap.take(3, 2).unwrap();
    bitmap.take(90, 9).unwrap();

    bitmap.resize(999).unwrap();
    assert_eq!(bitmap.num_bits(), 999);
    assert_eq!(bitmap.check(3, 2), Ok(BitState::AllSet));
    assert_eq!(bitmap.check(90, 9), Ok(BitState::AllSet));
    assert_eq!(bitmap.check(100, 899), Ok(BitState::AllClear));
    assert_eq!(bitmap.count(0, 999), Ok(13));

    bitmap.resize(99).unwrap();
    assert_eq!(bitmap.num_bits(), 99);
    assert_eq!(bitmap.count(0, 99), Ok(13));
    assert!(matches!(
        bitmap.check(100, 0),
        Err(BitmapError::OutOfRange { .. })
    ));
}

#[test]
fn test_resize_shrink_discards_bits() {
    let mut bitmap = Bitmap::new(199).unwrap();
    bitmap.take(0, 199).unwrap();

    // Shrink mid-word, then grow again: the discarded bits come back
    // clear.
    bitmap.resize(9).unwrap();
    assert_eq!(bitmap.count(0, 9), Ok(10));

    bitmap.resize(199).unwrap();
    assert_eq!(bitmap.check(0, 9), Ok(BitState::AllSet));
    assert_eq!(bitmap.check(10, 189), Ok(BitState::AllClear));
    assert_eq!(bitmap.count(0, 199), Ok(10));
}
