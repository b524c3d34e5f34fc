mod common;

use chrono::{FixedOffset, TimeZone};
use nillable::{Bool, Date, DriverValue, Float, Int32, Int64, Text, Time, Uint32, Uuid};
use rusqlite::{params, Connection};

fn connection() -> Connection {
    common::init_tracing();
    let conn = Connection::open_in_memory().expect("in-memory database");
    conn.execute_batch(
        "create table scalars (
            id integer primary key,
            b integer, i32 integer, i64 integer, u32 integer, f real,
            t text, d text, ts text, u blob
        );",
    )
    .expect("schema");
    conn
}

#[test]
fn present_values_round_trip() {
    let conn = connection();
    let stamp = FixedOffset::west_opt(5 * 3600)
        .unwrap()
        .with_ymd_and_hms(2023, 5, 20, 8, 15, 0)
        .unwrap();
    let id = uuid::Uuid::new_v4();
    conn.execute(
        "insert into scalars (id, b, i32, i64, u32, f, t, d, ts, u) values (1, ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            Bool::new(true),
            Int32::new(-17),
            Int64::new(i64::MAX),
            Uint32::new(u32::MAX),
            Float::new(0.25),
            Text::new("posit".to_string()),
            Date::new("2023-05-20".into()),
            Time::new(stamp),
            Uuid::new(id),
        ],
    )
    .expect("insert");

    let row = conn
        .query_row("select b, i32, i64, u32, f, t, d, ts, u from scalars where id = 1", [], |row| {
            Ok((
                row.get::<_, Bool>(0)?,
                row.get::<_, Int32>(1)?,
                row.get::<_, Int64>(2)?,
                row.get::<_, Uint32>(3)?,
                row.get::<_, Float>(4)?,
                row.get::<_, Text>(5)?,
                row.get::<_, Date>(6)?,
                row.get::<_, Time>(7)?,
                row.get::<_, Uuid>(8)?,
            ))
        })
        .expect("select");

    assert_eq!(row.0, Bool::new(true));
    assert_eq!(row.1, Int32::new(-17));
    assert_eq!(row.2, Int64::new(i64::MAX));
    assert_eq!(row.3, Uint32::new(u32::MAX));
    assert_eq!(row.4, Float::new(0.25));
    assert_eq!(row.5, Text::new("posit".to_string()));
    assert_eq!(row.6, Date::new("2023-05-20".into()));
    assert_eq!(row.7, Time::new(stamp));
    assert_eq!(row.7.get().offset(), stamp.offset());
    assert_eq!(row.8, Uuid::new(id));
}

#[test]
fn absent_values_are_stored_as_null() {
    let conn = connection();
    conn.execute(
        "insert into scalars (id, b, i32, t, d, u) values (2, ?1, ?2, ?3, ?4, ?5)",
        params![Bool::nil(), Int32::default(), Text::nil(), Date::nil(), Uuid::default()],
    )
    .expect("insert");
    let nulls: i64 = conn
        .query_row(
            "select (b is null) + (i32 is null) + (t is null) + (d is null) + (u is null) from scalars where id = 2",
            [],
            |row| row.get(0),
        )
        .expect("select");
    assert_eq!(nulls, 5);

    let (b, i, d): (Bool, Int32, Date) = conn
        .query_row("select b, i32, d from scalars where id = 2", [], |row| {
            Ok((row.get(0)?, row.get(1)?, row.get(2)?))
        })
        .expect("select");
    // scanned nulls are nil but initialized
    assert_eq!(b, Bool::nil());
    assert_eq!(i, Int32::nil());
    assert!(i.is_initialized());
    assert_eq!(d, Date::nil());
}

#[test]
fn columns_are_coerced_across_storage_classes() {
    let conn = connection();
    conn.execute(
        "insert into scalars (id, i32, i64, f, t) values (3, '42', 7.0, '2.5', 'x')",
        [],
    )
    .expect("insert");
    let (i, f, b): (Int32, Float, Bool) = conn
        .query_row("select i32, f, i64 from scalars where id = 3", [], |row| {
            Ok((row.get(0)?, row.get(1)?, row.get(2)?))
        })
        .expect("select");
    // the integer column affinity already turned '42' into 42
    assert_eq!(i, Int32::new(42));
    assert_eq!(f, Float::new(2.5));
    assert_eq!(b, Bool::new(true));
}

#[test]
fn timestamp_text_reads_as_a_date() {
    let conn = connection();
    conn.execute("insert into scalars (id, d) values (6, '2023-05-20 10:00:00')", [])
        .expect("insert");
    let d: Date = conn
        .query_row("select d from scalars where id = 6", [], |row| row.get(0))
        .expect("select");
    assert_eq!(d, Date::new("2023-05-20".into()));
}

#[test]
fn rejected_columns_surface_as_conversion_errors() {
    let conn = connection();
    conn.execute("insert into scalars (id, i64, t) values (4, 3000000000, 'x')", []).expect("insert");
    let err = conn
        .query_row("select i64 from scalars where id = 4", [], |row| row.get::<_, Int32>(0))
        .unwrap_err();
    assert!(matches!(err, rusqlite::Error::FromSqlConversionFailure(..)));
    assert!(err.to_string().contains("Range error"));

    let err = conn
        .query_row("select t from scalars where id = 4", [], |row| row.get::<_, Date>(0))
        .unwrap_err();
    assert!(err.to_string().contains("Scan error"));
}

#[test]
fn driver_values_bind_directly() {
    let conn = connection();
    conn.execute(
        "insert into scalars (id, i64, t) values (5, ?1, ?2)",
        params![DriverValue::Int(9), DriverValue::Null],
    )
    .expect("insert");
    let (i, t): (Int64, Text) = conn
        .query_row("select i64, t from scalars where id = 5", [], |row| Ok((row.get(0)?, row.get(1)?)))
        .expect("select");
    assert_eq!(i, Int64::new(9));
    assert_eq!(t, Text::nil());
    assert!(DriverValue::Uint(u64::MAX).to_sql_value().is_err());
}
