use float_decode::*;

#[test]
fn integer_mode() {
    // all-zero strings of any length are 0
    for n in [1, 8, 23, 32] {
        let bits = "0".repeat(n).parse::<BitString>().unwrap();
        assert_eq!(
            bits.magnitude(ParseMode::Integer),
            0.0,
            "nonzero magnitude for {} zeros",
            n
        );
    }

    let bits = "1".parse::<BitString>().unwrap();
    assert_eq!(bits.magnitude(ParseMode::Integer), 1.0);

    let bits = "10000000".parse::<BitString>().unwrap();
    assert_eq!(bits.magnitude(ParseMode::Integer), 128.0);

    let bits = "11111111".parse::<BitString>().unwrap();
    assert_eq!(bits.magnitude(ParseMode::Integer), 255.0);
}

#[test]
fn fractional_mode() {
    // a 1 followed by any number of zeros is exactly one half
    for n in 0..=23 {
        let s = format!("1{}", "0".repeat(n));
        let bits = s.parse::<BitString>().unwrap();
        assert_eq!(
            bits.magnitude(ParseMode::Fractional),
            0.5,
            "trailing zeros changed the value: {}",
            s
        );
    }

    let bits = "011".parse::<BitString>().unwrap();
    assert_eq!(bits.magnitude(ParseMode::Fractional), 0.375);

    let bits = "111".parse::<BitString>().unwrap();
    assert_eq!(bits.magnitude(ParseMode::Fractional), 0.875);
}

#[test]
fn empty_is_zero() {
    let bits = "".parse::<BitString>().unwrap();
    assert!(bits.is_empty());
    assert_eq!(bits.magnitude(ParseMode::Integer), 0.0);
    assert_eq!(bits.magnitude(ParseMode::Fractional), 0.0);
}

#[test]
fn rejects_non_binary_digits() {
    let err = "0120".parse::<BitString>().unwrap_err();
    assert_eq!(
        err,
        DecodeError::InvalidBit {
            position: 2,
            found: '2'
        }
    );
}

#[test]
fn display_round_trips() {
    let s = "01000000010010010000111111011011";
    let bits = s.parse::<BitString>().unwrap();
    assert_eq!(bits.len(), 32);
    assert_eq!(bits.to_string(), s);
}
