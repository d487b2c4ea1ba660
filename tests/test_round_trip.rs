//! Integration tests binding typed columns and reading them back.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use sqltypes::{
    Column, DriverValue, Error, MonthDay, ParameterSink, Parameters, Row, SqlDate, SqlEnum,
    SqlTime, SqlTimestamp, Table, Year, YearMonth,
};
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Color {
    Red,
    Green,
    Blue,
}

impl SqlEnum for Color {
    fn members() -> &'static [Self] {
        &[Color::Red, Color::Green, Color::Blue]
    }

    fn name(&self) -> &'static str {
        match self {
            Color::Red => "RED",
            Color::Green => "GREEN",
            Color::Blue => "BLUE",
        }
    }
}

fn round_trip<T>(column: &Column<T>, value: &T) -> Option<T> {
    let mut params = Parameters::new();
    column.bind(&mut params, 1, Some(value)).unwrap();
    let mut row = Row::from_parameters(params);
    column.extract(&mut row, 1).unwrap()
}

fn null_round_trip<T>(column: &Column<T>) -> Option<T> {
    let mut params = Parameters::new();
    column.bind(&mut params, 1, None).unwrap();
    assert_eq!(params.null_type(1), Some(column.sql_type().type_code()));
    let mut row = Row::from_parameters(params);
    column.extract(&mut row, 1).unwrap()
}

fn bound_value<T>(column: &Column<T>, value: &T) -> DriverValue {
    let mut params = Parameters::new();
    column.bind(&mut params, 1, Some(value)).unwrap();
    params.get(1).cloned().unwrap()
}

fn row_with(value: DriverValue) -> Row {
    let mut params = Parameters::new();
    params.set_object(1, value).unwrap();
    Row::from_parameters(params)
}

#[test]
fn test_scalar_round_trips() {
    let mut table = Table::new("t_scalar");
    let boolean = table.boolean("b").unwrap().build();
    let int = table.int("i").unwrap().build();
    let long = table.long("l").unwrap().build();
    let float = table.float("f").unwrap().build();
    let double = table.double("d").unwrap().build();
    let decimal = table.decimal("dec").unwrap().build();
    let varchar = table.varchar("v").unwrap().build();
    let text = table.text("t").unwrap().build();
    let bytes = table.bytes("raw").unwrap().build();

    assert_eq!(round_trip(&boolean, &true), Some(true));
    assert_eq!(round_trip(&int, &i32::MIN), Some(i32::MIN));
    assert_eq!(round_trip(&long, &i64::MAX), Some(i64::MAX));
    assert_eq!(round_trip(&float, &1.5f32), Some(1.5f32));
    assert_eq!(round_trip(&double, &-2.25f64), Some(-2.25f64));

    let amount = Decimal::from_str("12345.6789").unwrap();
    assert_eq!(round_trip(&decimal, &amount), Some(amount));

    assert_eq!(round_trip(&varchar, &"héllo".to_string()), Some("héllo".to_string()));
    assert_eq!(round_trip(&text, &String::new()), Some(String::new()));
    assert_eq!(round_trip(&bytes, &vec![0u8, 1, 255]), Some(vec![0u8, 1, 255]));
}

#[test]
fn test_temporal_round_trips() {
    let mut table = Table::new("t_temporal");
    let jdbc_timestamp = table.jdbc_timestamp("jts").unwrap().build();
    let jdbc_date = table.jdbc_date("jd").unwrap().build();
    let jdbc_time = table.jdbc_time("jt").unwrap().build();
    let instant = table.timestamp("ts").unwrap().build();
    let datetime = table.datetime("dt").unwrap().build();
    let date = table.date("d").unwrap().build();
    let time = table.time("t").unwrap().build();

    let ts = SqlTimestamp::new(1_700_000_000, 123_000_000);
    assert_eq!(round_trip(&jdbc_timestamp, &ts), Some(ts));
    assert_eq!(round_trip(&jdbc_date, &SqlDate::new(-365)), Some(SqlDate::new(-365)));
    assert_eq!(round_trip(&jdbc_time, &SqlTime::new(3600, 5)), Some(SqlTime::new(3600, 5)));

    let now: DateTime<Utc> = DateTime::from_timestamp(1_729_514_165, 987_654_321).unwrap();
    assert_eq!(round_trip(&instant, &now), Some(now));

    let local = NaiveDate::from_ymd_opt(2024, 10, 21)
        .unwrap()
        .and_hms_nano_opt(12, 36, 5, 1)
        .unwrap();
    assert_eq!(round_trip(&datetime, &local), Some(local));

    let day = NaiveDate::from_ymd_opt(1900, 3, 1).unwrap();
    assert_eq!(round_trip(&date, &day), Some(day));

    let wall = NaiveTime::from_hms_milli_opt(8, 15, 30, 250).unwrap();
    assert_eq!(round_trip(&time, &wall), Some(wall));
}

#[test]
fn test_instant_bound_as_driver_timestamp() {
    let mut table = Table::new("t");
    let instant = table.timestamp("ts").unwrap().build();
    let epoch = DateTime::from_timestamp(86_400, 0).unwrap();
    assert_eq!(
        bound_value(&instant, &epoch),
        DriverValue::Timestamp(SqlTimestamp::new(86_400, 0))
    );
}

#[test]
fn test_partial_calendar_formats() {
    let mut table = Table::new("t_calendar");
    let month_day = table.month_day("md").unwrap().build();
    let year_month = table.year_month("ym").unwrap().build();
    let year = table.year("y").unwrap().build();

    let md = MonthDay::new(3, 7).unwrap();
    assert_eq!(bound_value(&month_day, &md), DriverValue::String("03-07".to_string()));
    assert_eq!(round_trip(&month_day, &md), Some(md));

    let ym = YearMonth::new(2024, 1).unwrap();
    assert_eq!(bound_value(&year_month, &ym), DriverValue::String("2024-01".to_string()));
    assert_eq!(round_trip(&year_month, &ym), Some(ym));

    let far = YearMonth::new(45000, 1).unwrap();
    assert_eq!(bound_value(&year_month, &far), DriverValue::String("+45000-01".to_string()));
    assert_eq!(round_trip(&year_month, &far), Some(far));

    let ancient = YearMonth::new(-44, 3).unwrap();
    assert_eq!(bound_value(&year_month, &ancient), DriverValue::String("-0044-03".to_string()));
    assert_eq!(round_trip(&year_month, &ancient), Some(ancient));

    let mut row = row_with(DriverValue::String("-0044-03".to_string()));
    assert_eq!(year_month.extract(&mut row, 1).unwrap(), Some(ancient));

    let y = Year::new(2024).unwrap();
    assert_eq!(bound_value(&year, &y), DriverValue::Int(2024));
    assert_eq!(round_trip(&year, &y), Some(y));
}

#[test]
fn test_malformed_calendar_text_fails() {
    let mut table = Table::new("t_calendar");
    let month_day = table.month_day("md").unwrap().build();
    let year_month = table.year_month("ym").unwrap().build();

    let mut row = row_with(DriverValue::String("7th of March".to_string()));
    assert!(matches!(month_day.extract(&mut row, 1), Err(Error::Format { .. })));

    let mut row = row_with(DriverValue::String("2024-1".to_string()));
    assert!(matches!(year_month.extract(&mut row, 1), Err(Error::Format { .. })));
}

#[test]
fn test_enum_stored_by_name() {
    let mut table = Table::new("t_paint");
    let color = table.enumeration::<Color>("color").unwrap().build();

    assert_eq!(bound_value(&color, &Color::Green), DriverValue::String("GREEN".to_string()));
    assert_eq!(round_trip(&color, &Color::Green), Some(Color::Green));

    let mut row = row_with(DriverValue::String("BLUE".to_string()));
    assert_eq!(color.extract(&mut row, 1).unwrap(), Some(Color::Blue));
}

#[test]
fn test_enum_blank_or_null_is_none() {
    let mut table = Table::new("t_paint");
    let color = table.enumeration::<Color>("color").unwrap().build();

    for stored in [
        DriverValue::Null,
        DriverValue::String(String::new()),
        DriverValue::String("   ".to_string()),
    ] {
        let mut row = row_with(stored);
        assert_eq!(color.extract(&mut row, 1).unwrap(), None);
    }
}

#[test]
fn test_enum_unknown_name_fails() {
    let mut table = Table::new("t_paint");
    let color = table.enumeration::<Color>("color").unwrap().build();

    let mut row = row_with(DriverValue::String("PURPLE".to_string()));
    match color.extract(&mut row, 1) {
        Err(Error::Lookup { enum_type, name }) => {
            assert_eq!(enum_type, "Color");
            assert_eq!(name, "PURPLE");
        }
        other => panic!("Expected Lookup error, got {:?}", other),
    }
}

#[test]
fn test_uuid_passthrough() {
    let mut table = Table::new("t_entity");
    let id = table.uuid("id").unwrap().primary_key().build();

    let uuid = Uuid::parse_str("123e4567-e89b-12d3-a456-426614174000").unwrap();
    assert_eq!(bound_value(&id, &uuid), DriverValue::Uuid(uuid));
    assert_eq!(round_trip(&id, &uuid), Some(uuid));

    let random = Uuid::new_v4();
    assert_eq!(round_trip(&id, &random), Some(random));
}

#[test]
fn test_uuid_from_non_uuid_object_fails() {
    let mut table = Table::new("t_entity");
    let id = table.uuid("id").unwrap().build();

    let mut row = row_with(DriverValue::Long(42));
    match id.extract(&mut row, 1) {
        Err(Error::Cast { expected, actual }) => {
            assert_eq!(expected, "uuid");
            assert_eq!(actual, "bigint");
        }
        other => panic!("Expected Cast error, got {:?}", other),
    }
}

#[test]
fn test_null_propagates_for_every_column() {
    let mut table = Table::new("t_nulls");

    assert_eq!(null_round_trip(&table.boolean("c1").unwrap().build()), None);
    assert_eq!(null_round_trip(&table.int("c2").unwrap().build()), None);
    assert_eq!(null_round_trip(&table.long("c3").unwrap().build()), None);
    assert_eq!(null_round_trip(&table.float("c4").unwrap().build()), None);
    assert_eq!(null_round_trip(&table.double("c5").unwrap().build()), None);
    assert_eq!(null_round_trip(&table.decimal("c6").unwrap().build()), None);
    assert_eq!(null_round_trip(&table.varchar("c7").unwrap().build()), None);
    assert_eq!(null_round_trip(&table.text("c8").unwrap().build()), None);
    assert_eq!(null_round_trip(&table.blob("c9").unwrap().build()), None);
    assert_eq!(null_round_trip(&table.bytes("c10").unwrap().build()), None);
    assert_eq!(null_round_trip(&table.jdbc_timestamp("c11").unwrap().build()), None);
    assert_eq!(null_round_trip(&table.jdbc_date("c12").unwrap().build()), None);
    assert_eq!(null_round_trip(&table.jdbc_time("c13").unwrap().build()), None);
    assert_eq!(null_round_trip(&table.timestamp("c14").unwrap().build()), None);
    assert_eq!(null_round_trip(&table.datetime("c15").unwrap().build()), None);
    assert_eq!(null_round_trip(&table.date("c16").unwrap().build()), None);
    assert_eq!(null_round_trip(&table.time("c17").unwrap().build()), None);
    assert_eq!(null_round_trip(&table.month_day("c18").unwrap().build()), None);
    assert_eq!(null_round_trip(&table.year_month("c19").unwrap().build()), None);
    assert_eq!(null_round_trip(&table.year("c20").unwrap().build()), None);
    assert_eq!(
        null_round_trip(&table.enumeration::<Color>("c21").unwrap().build()),
        None
    );
    assert_eq!(null_round_trip(&table.uuid("c22").unwrap().build()), None);

    assert_eq!(table.columns().len(), 22);
}

#[test]
fn test_zero_is_not_null() {
    let mut table = Table::new("t");
    let int = table.int("i").unwrap().build();
    let flag = table.boolean("b").unwrap().build();
    assert_eq!(round_trip(&int, &0), Some(0));
    assert_eq!(round_trip(&flag, &false), Some(false));
}

#[test]
fn test_columns_are_shareable_across_threads() {
    let mut table = Table::new("t");
    let color = table.enumeration::<Color>("color").unwrap().build();

    let handles: Vec<_> = [Color::Red, Color::Green, Color::Blue]
        .into_iter()
        .map(|member| {
            let color = color.clone();
            std::thread::spawn(move || round_trip(&color, &member))
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        results,
        vec![Some(Color::Red), Some(Color::Green), Some(Color::Blue)]
    );
}
