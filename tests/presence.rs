use nillable::{Bool, Date, Float, Int, Int32, Int64, Nillable, Text, Uint32, Uuid};

#[test]
fn constructors_set_presence() {
    let n = Int32::new(17);
    assert!(!n.is_nil());
    assert!(n.is_initialized());
    assert_eq!(n.get(), 17);
    assert_eq!(n, Nillable::Value(17));

    let nil = Int32::nil();
    assert!(nil.is_nil());
    assert!(nil.is_initialized());
    assert_eq!(nil.get(), 0);
    assert_eq!(nil, Nillable::Null);
}

#[test]
fn default_is_uninitialized() {
    let n = Int64::default();
    assert!(n.is_nil());
    assert!(!n.is_initialized());
    assert!(n.encodes_null());
    assert_eq!(n.get(), 0);
    assert_ne!(n, Int64::nil());
}

#[test]
fn nil_and_null_encoding_are_different_predicates() {
    // a present value encodes, nil and uninitialized do not
    assert!(!Bool::new(false).encodes_null());
    assert!(Bool::nil().encodes_null());
    assert!(Bool::default().encodes_null());
    // the nil check ignores initialization
    assert!(Bool::default().is_nil());
    assert!(!Bool::default().is_initialized());
    assert!(Bool::nil().is_initialized());
}

#[test]
fn zero_value_is_present() {
    assert!(!Int32::new(0).is_nil());
    assert!(!Text::new(String::new()).is_nil());
    assert!(!Bool::new(false).is_nil());
}

#[test]
fn option_conversions() {
    assert_eq!(Text::from(Some("a".to_string())), Text::new("a".to_string()));
    assert_eq!(Text::from(None::<String>), Text::nil());
    assert_eq!(Float::from(Some(2.5)), Float::new(2.5));
    assert_eq!(Uint32::new(7).into_option(), Some(7));
    assert_eq!(Uint32::nil().into_option(), None);
    assert_eq!(Uint32::default().value(), None);
}

#[test]
fn nil_renders_zero_value_text() {
    assert_eq!(Int32::new(-8).to_string(), "-8");
    assert_eq!(Int32::nil().to_string(), "0");
    assert_eq!(Int64::default().to_string(), "0");
    assert_eq!(Uint32::new(4294967295).to_string(), "4294967295");
    assert_eq!(Bool::new(true).to_string(), "true");
    assert_eq!(Bool::nil().to_string(), "false");
    assert_eq!(Float::new(2.75).to_string(), "2.75");
    assert_eq!(Float::new(100.0).to_string(), "100");
    assert_eq!(Float::nil().to_string(), "0");
    assert_eq!(Text::new("hello".to_string()).to_string(), "hello");
    assert_eq!(Text::nil().to_string(), "");
    assert_eq!(Date::new("2019-11-12".into()).to_string(), "2019-11-12");
    assert_eq!(Date::nil().to_string(), "");
    assert_eq!(Uuid::nil().to_string(), "00000000-0000-0000-0000-000000000000");
}

#[test]
fn data_type_names() {
    assert_eq!(Int32::nil().data_type(), "int32");
    assert_eq!(Int64::nil().data_type(), "int64");
    assert_eq!(Uint32::nil().data_type(), "uint32");
    assert_eq!(Float::nil().data_type(), "float64");
    assert_eq!(Text::nil().data_type(), "string");
    assert_eq!(Date::nil().data_type(), "date");
    assert_eq!(Uuid::nil().data_type(), "uuid");
}

#[test]
fn int_is_the_64_bit_kind() {
    assert_eq!(Int::new(i64::MAX), Int64::new(i64::MAX));
    assert_eq!(Int::nil().data_type(), "int64");
}
