use crate::bot::InternalError;

pub trait Required<T> {
    fn required(self) -> Result<T, InternalError>;
}

impl<T> Required<T> for Option<T> {
    fn required(self) -> Result<T, InternalError> {
        self.ok_or_else(|| InternalError::UnexpectedNone {
            type_name: std::any::type_name::<T>().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_value_names_the_type() {
        let result = None::<String>.required();
        assert!(matches!(
            result,
            Err(InternalError::UnexpectedNone { type_name }) if type_name.contains("String")
        ));
        assert_eq!(Some(3).required().ok(), Some(3));
    }
}
