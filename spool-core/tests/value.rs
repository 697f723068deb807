#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use spool_core::{AsValue, Value};
    use time::macros::datetime;
    use uuid::Uuid;

    #[test]
    fn value_null() {
        assert_eq!(Value::Null, Value::Null);
        assert_ne!(Value::Float32(Some(1.0)), Value::Null);
        assert!(Value::Null.is_null());
        assert!(Value::Varchar(None).is_null());
        assert!(Value::Int32(None).is_null());
        assert!(!Value::Varchar(Some("".into())).is_null());
    }

    #[test]
    fn value_types() {
        assert!(Value::Int32(Some(1)).same_type(&Value::Int32(None)));
        assert!(!Value::Int32(Some(1)).same_type(&Value::Int64(Some(1))));
        assert_eq!(Value::Int32(Some(1)).type_name(), "int32");
        assert_eq!(Value::Variant(None).type_name(), "variant");
    }

    #[test]
    fn value_bool() {
        let val: Value = true.into();
        assert_eq!(val, Value::Boolean(Some(true)));
        assert_ne!(val, Value::Boolean(Some(false)));
        assert_ne!(val, Value::Boolean(None));
        let var: bool = AsValue::try_from_value(val).unwrap();
        assert!(var);
        assert!(bool::try_from_value((8 as i16).into()).unwrap());
        assert!(!bool::try_from_value((0 as i32).into()).unwrap());
        assert!(bool::try_from_value((9 as i64).into()).unwrap());
        assert!(!bool::try_from_value((0 as u8).into()).unwrap());
        assert!(bool::try_from_value((0.5 as f32).into()).is_err());
    }

    #[test]
    fn value_integers() {
        let val: Value = (-31 as i32).into();
        assert_eq!(val, Value::Int32(Some(-31)));
        let var: i32 = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, -31);
        assert_eq!(i32::try_from_value((29 as i16).into()).unwrap(), 29);
        assert_eq!(i32::try_from_value((77 as u8).into()).unwrap(), 77);
        assert_eq!(i32::try_from_value((100000 as i64).into()).unwrap(), 100000);
        assert!(i32::try_from_value((i64::MAX).into()).is_err());
        assert_eq!(i64::try_from_value((-1 as i32).into()).unwrap(), -1);
        assert_eq!(i16::try_from_value((5000 as i64).into()).unwrap(), 5000);
        assert!(i16::try_from_value((100000 as i64).into()).is_err());
        assert_eq!(u8::try_from_value((200 as i32).into()).unwrap(), 200);
        assert!(u8::try_from_value((-1 as i32).into()).is_err());
        assert!(i32::try_from_value((0.1 as f64).into()).is_err());
    }

    #[test]
    fn value_floats() {
        assert_eq!(f64::try_from_value((0.5 as f32).into()).unwrap(), 0.5);
        assert_eq!(f32::try_from_value((0.25 as f64).into()).unwrap(), 0.25);
        assert!(f64::try_from_value((1 as i32).into()).is_err());
    }

    #[test]
    fn value_decimal() {
        let var = Decimal::new(12345, 2);
        let val: Value = var.into();
        assert_eq!(val, Value::Decimal(Some(Decimal::new(12345, 2))));
        let var: Decimal = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, Decimal::new(12345, 2));
        assert_eq!(
            Decimal::try_from_value((25 as i64).into()).unwrap(),
            Decimal::from(25),
        );
        assert!(Decimal::try_from_value(Value::Varchar(Some("1.5".into()))).is_err());
    }

    #[test]
    fn value_text() {
        let val: Value = String::from("spool").into();
        assert_eq!(val, Value::Varchar(Some("spool".into())));
        let var: String = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, "spool");
        assert_eq!(
            String::try_from_value(Value::Variant(Some("opaque".into()))).unwrap(),
            "opaque",
        );
        assert!(String::try_from_value(Value::Int32(Some(1))).is_err());
    }

    #[test]
    fn value_blob() {
        let val: Value = vec![1u8, 2, 3].into();
        assert_eq!(val, Value::Blob(Some(vec![1u8, 2, 3].into_boxed_slice())));
        let var: Vec<u8> = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, vec![1, 2, 3]);
    }

    #[test]
    fn value_timestamp() {
        let var = datetime!(2024-05-17 10:30:00);
        let val: Value = var.into();
        assert_eq!(val, Value::Timestamp(Some(datetime!(2024-05-17 10:30:00))));
        let var: time::PrimitiveDateTime = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, datetime!(2024-05-17 10:30:00));
    }

    #[test]
    fn value_uuid() {
        let var = Uuid::new_v4();
        let val: Value = var.into();
        let back: Uuid = AsValue::try_from_value(val).unwrap();
        assert_eq!(back, var);
        let parsed: Uuid =
            AsValue::try_from_value(Value::Varchar(Some(var.to_string()))).unwrap();
        assert_eq!(parsed, var);
        assert!(Uuid::try_from_value(Value::Varchar(Some("not-a-uuid".into()))).is_err());
    }

    #[test]
    fn value_option() {
        let val = None::<i32>.as_value();
        assert_eq!(val, Value::Int32(None));
        assert!(val.is_null());
        let var: Option<i32> = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, None);
        let var: Option<i32> = AsValue::try_from_value(Some(7).as_value()).unwrap();
        assert_eq!(var, Some(7));
        let var: Option<i32> = AsValue::try_from_value(Value::Null).unwrap();
        assert_eq!(var, None);
    }
}
