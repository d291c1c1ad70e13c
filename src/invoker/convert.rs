use crate::core::{DataType, InvokeError, Result, Value};

/// Coerces `value` to the declared parameter type, dispatching on
/// (source kind, destination kind).
///
/// Mixed numeric arguments widen or narrow instead of failing; narrowing
/// that would lose the value entirely (non-finite, out of range) reports
/// a mismatch rather than truncating.
pub fn coerce(method: &str, index: usize, value: &Value, expected: DataType) -> Result<Value> {
    match (value, expected) {
        (Value::Integer(_), DataType::Integer)
        | (Value::Float(_), DataType::Float)
        | (Value::Text(_), DataType::Text)
        | (Value::Boolean(_), DataType::Boolean) => Ok(value.clone()),

        (Value::Integer(i), DataType::Float) => Ok(Value::Float(*i as f64)),

        (Value::Float(f), DataType::Integer) => match value.as_i64() {
            Some(i) => Ok(Value::Integer(i)),
            None => Err(InvokeError::TypeMismatch(
                method.to_string(),
                index,
                expected,
                format!("non-representable FLOAT {}", f),
            )),
        },

        (Value::Integer(i), DataType::Text) => Ok(Value::Text(i.to_string())),
        (Value::Float(f), DataType::Text) => Ok(Value::Text(f.to_string())),
        (Value::Boolean(b), DataType::Text) => Ok(Value::Text(b.to_string())),

        _ => Err(InvokeError::TypeMismatch(
            method.to_string(),
            index,
            expected,
            value.type_name().to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_pass_through() {
        assert_eq!(
            coerce("m", 0, &Value::Text("x".into()), DataType::Text).unwrap(),
            Value::Text("x".into())
        );
        assert_eq!(
            coerce("m", 0, &Value::Float(1.5), DataType::Float).unwrap(),
            Value::Float(1.5)
        );
    }

    #[test]
    fn test_integer_widens_to_float() {
        assert_eq!(
            coerce("m", 0, &Value::Integer(3), DataType::Float).unwrap(),
            Value::Float(3.0)
        );
    }

    #[test]
    fn test_float_narrows_to_integer() {
        assert_eq!(
            coerce("m", 0, &Value::Float(2.9), DataType::Integer).unwrap(),
            Value::Integer(2)
        );
        assert_eq!(
            coerce("m", 0, &Value::Float(-2.9), DataType::Integer).unwrap(),
            Value::Integer(-2)
        );
    }

    #[test]
    fn test_non_representable_narrowing_is_reported() {
        for f in [f64::NAN, f64::INFINITY, 1e300] {
            let err = coerce("m", 1, &Value::Float(f), DataType::Integer).unwrap_err();
            assert!(matches!(err, InvokeError::TypeMismatch(_, 1, DataType::Integer, _)));
        }
    }

    #[test]
    fn test_numeric_and_boolean_to_text() {
        assert_eq!(
            coerce("m", 0, &Value::Integer(5), DataType::Text).unwrap(),
            Value::Text("5".into())
        );
        assert_eq!(
            coerce("m", 0, &Value::Float(2.5), DataType::Text).unwrap(),
            Value::Text("2.5".into())
        );
        assert_eq!(
            coerce("m", 0, &Value::Boolean(true), DataType::Text).unwrap(),
            Value::Text("true".into())
        );
    }

    #[test]
    fn test_no_conversion_path() {
        let err = coerce("m", 2, &Value::Text("5".into()), DataType::Integer).unwrap_err();
        assert!(matches!(err, InvokeError::TypeMismatch(_, 2, DataType::Integer, _)));

        let err = coerce("m", 0, &Value::Boolean(true), DataType::Float).unwrap_err();
        assert!(matches!(err, InvokeError::TypeMismatch(_, 0, DataType::Float, _)));
    }
}
