use super::{DataType, InvokeError, Result};

/// Declared parameter of a registered method.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub data_type: DataType,
}

impl Param {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// Declared shape of a registered method: ordered fixed parameters plus an
/// optional trailing variadic slot accepting any number of values of one
/// element type.
#[derive(Debug, Clone)]
pub struct Signature {
    params: Vec<Param>,
    variadic: Option<DataType>,
}

impl Signature {
    pub fn new(params: Vec<Param>) -> Self {
        Self {
            params,
            variadic: None,
        }
    }

    pub fn variadic(mut self, elem: DataType) -> Self {
        self.variadic = Some(elem);
        self
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn fixed_len(&self) -> usize {
        self.params.len()
    }

    pub fn is_variadic(&self) -> bool {
        self.variadic.is_some()
    }

    /// Expected type at argument position `i`; `None` past the end of a
    /// non-variadic parameter list.
    pub fn expected_at(&self, i: usize) -> Option<DataType> {
        if i < self.params.len() {
            Some(self.params[i].data_type)
        } else {
            self.variadic
        }
    }

    /// Checks the supplied argument count against the declared parameters.
    /// Variadic methods accept any count from `fixed_len()` upward.
    pub fn check_arity(&self, method: &str, actual: usize) -> Result<()> {
        let fixed = self.params.len();
        if actual < fixed {
            return Err(InvokeError::TooFewArguments(method.to_string(), fixed, actual));
        }
        if actual > fixed && !self.is_variadic() {
            return Err(InvokeError::TooManyArguments(method.to_string(), fixed, actual));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_fixed() -> Signature {
        Signature::new(vec![
            Param::new("label", DataType::Text),
            Param::new("count", DataType::Integer),
        ])
    }

    #[test]
    fn test_expected_at_fixed() {
        let sig = two_fixed();
        assert_eq!(sig.expected_at(0), Some(DataType::Text));
        assert_eq!(sig.expected_at(1), Some(DataType::Integer));
        assert_eq!(sig.expected_at(2), None);
    }

    #[test]
    fn test_expected_at_variadic_tail() {
        let sig = two_fixed().variadic(DataType::Float);
        assert_eq!(sig.expected_at(1), Some(DataType::Integer));
        assert_eq!(sig.expected_at(2), Some(DataType::Float));
        assert_eq!(sig.expected_at(99), Some(DataType::Float));
    }

    #[test]
    fn test_check_arity_exact() {
        let sig = two_fixed();
        assert!(sig.check_arity("m", 2).is_ok());
        assert!(matches!(
            sig.check_arity("m", 1),
            Err(InvokeError::TooFewArguments(_, 2, 1))
        ));
        assert!(matches!(
            sig.check_arity("m", 3),
            Err(InvokeError::TooManyArguments(_, 2, 3))
        ));
    }

    #[test]
    fn test_check_arity_variadic() {
        let sig = two_fixed().variadic(DataType::Text);
        assert!(sig.check_arity("m", 2).is_ok());
        assert!(sig.check_arity("m", 7).is_ok());
        assert!(matches!(
            sig.check_arity("m", 1),
            Err(InvokeError::TooFewArguments(_, 2, 1))
        ));
    }
}
