#[cfg(test)]
mod tests {
    use crate::error::{PlotError, Result};

    #[test]
    fn test_unknown_option_error() {
        let error = PlotError::unknown_option("color");
        assert!(matches!(error, PlotError::UnknownOption { .. }));
        assert_eq!(error.key(), "color");
        assert_eq!(error.to_string(), "color is not a possible kwarg");
    }

    #[test]
    fn test_error_propagation() {
        fn strict(name: &str) -> Result<()> {
            Err(PlotError::unknown_option(name))
        }

        fn caller() -> Result<u32> {
            strict("linewidth")?;
            Ok(1)
        }

        let err = caller().unwrap_err();
        assert_eq!(err.key(), "linewidth");
    }

    #[test]
    fn test_error_is_std_error() {
        let boxed: Box<dyn std::error::Error + Send + Sync> =
            Box::new(PlotError::unknown_option("alpha"));
        assert!(boxed.to_string().contains("alpha"));
    }
}
