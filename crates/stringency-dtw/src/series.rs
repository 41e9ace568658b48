//! Validated, borrowed numeric sequences.

use std::ops::Index;

use crate::error::DtwError;

/// Borrowed view into a sequence. Guaranteed non-empty with all finite values.
#[derive(Debug, Clone, Copy)]
pub struct SeriesView<'a>(&'a [f64]);

impl<'a> SeriesView<'a> {
    /// Create a new view, validating that the slice is non-empty and finite.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DtwError::EmptySeries`] | `values` is empty |
    /// | [`DtwError::NonFiniteValue`] | Any value is NaN or infinite |
    pub fn new(values: &'a [f64]) -> Result<Self, DtwError> {
        if values.is_empty() {
            return Err(DtwError::EmptySeries);
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(DtwError::NonFiniteValue { index });
        }
        Ok(Self(values))
    }

    /// Return the underlying slice.
    #[must_use]
    pub fn as_slice(&self) -> &'a [f64] {
        self.0
    }

    /// Return the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for a validated view; present for `len_without_is_empty`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Index<usize> for SeriesView<'_> {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl AsRef<[f64]> for SeriesView<'_> {
    fn as_ref(&self) -> &[f64] {
        self.0
    }
}

impl<'a> TryFrom<&'a [f64]> for SeriesView<'a> {
    type Error = DtwError;

    fn try_from(values: &'a [f64]) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_slice() {
        assert_eq!(SeriesView::new(&[]).unwrap_err(), DtwError::EmptySeries);
    }

    #[test]
    fn rejects_nan_with_position() {
        let data = [50.0, f64::NAN, 60.0];
        assert_eq!(
            SeriesView::new(&data).unwrap_err(),
            DtwError::NonFiniteValue { index: 1 }
        );
    }

    #[test]
    fn rejects_neg_infinity() {
        let data = [f64::NEG_INFINITY, 2.0];
        assert!(matches!(
            SeriesView::new(&data),
            Err(DtwError::NonFiniteValue { index: 0 })
        ));
    }

    #[test]
    fn indexing_and_len() {
        let data = [11.1, 22.2, 33.3];
        let view = SeriesView::new(&data).unwrap();
        assert_eq!(view.len(), 3);
        assert_eq!(view[2], 33.3);
        assert_eq!(view.as_slice(), &data);
    }

    #[test]
    fn try_from_slice() {
        let data = vec![1.0, 2.0];
        let view: Result<SeriesView<'_>, _> = data.as_slice().try_into();
        assert!(view.is_ok());
    }
}
