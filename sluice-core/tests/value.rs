#[cfg(test)]
mod tests {
    use sluice_core::Value;

    #[test]
    fn typed_nulls_keep_their_type() {
        assert!(Value::Null.is_null());
        assert!(Value::Int64(None).is_null());
        assert!(Value::Varchar(None).is_null());
        assert!(!Value::from(0i64).is_null());
        assert!(!Value::from("").is_null());
        assert!(Value::Int64(None).same_type(&Value::from(7i64)));
        assert!(!Value::Int64(None).same_type(&Value::Float64(None)));
    }

    #[test]
    fn equality_is_type_aware() {
        assert_eq!(Value::from(1i64), Value::from(1i64));
        assert_ne!(Value::from(1i64), Value::from(1.0));
        assert_ne!(Value::from(true), Value::from(1i64));
        assert_eq!(Value::from("a"), Value::from("a".to_owned()));
        assert_ne!(Value::Int64(None), Value::from(0i64));
    }
}
