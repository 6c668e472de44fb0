//! Multi-stop color gradients.
//!
//! ## Usage
//!
//! Color the bars of a track and the thumb from the same gradient so both
//! agree exactly at equal positions.
//!
//! ```
//! use huebar_slider::gradient::Gradient;
//! use huebar_ui::Color;
//!
//! let gradient = Gradient::new(vec![Color::RED, Color::GREEN, Color::BLUE], Some(vec![0.0, 0.5, 1.0]))
//!     .expect("valid gradient");
//! assert_eq!(gradient.sample(0.5), Color::GREEN);
//! assert_eq!(gradient.sample(0.25), Color::new(0.5, 0.5, 0.0, 1.0));
//! ```

use huebar_ui::Color;
use smallvec::SmallVec;

use crate::error::SliderError;

/// Inline capacity covering the default four-color gradient.
type ColorList = SmallVec<[Color; 4]>;
type StopList = SmallVec<[f64; 4]>;

/// A validated gradient: colors paired with non-decreasing stops in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    colors: ColorList,
    stops: StopList,
}

impl Gradient {
    /// Builds a gradient, deriving evenly spaced stops when `stops` is `None`.
    ///
    /// # Errors
    ///
    /// Fails when `colors` is empty, when the stop count differs from the
    /// color count, or when stops are out of range or decreasing.
    pub fn new(
        colors: impl IntoIterator<Item = Color>,
        stops: Option<Vec<f64>>,
    ) -> Result<Self, SliderError> {
        let colors: ColorList = colors.into_iter().collect();
        if colors.is_empty() {
            return Err(SliderError::EmptyGradient);
        }

        let stops: StopList = match stops {
            Some(stops) => {
                if stops.len() != colors.len() {
                    return Err(SliderError::StopCountMismatch {
                        colors: colors.len(),
                        stops: stops.len(),
                    });
                }
                validate_stops(&stops)?;
                stops.into_iter().collect()
            }
            None => even_stops(colors.len()),
        };

        Ok(Self { colors, stops })
    }

    /// The gradient colors.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// The stop positions, one per color.
    pub fn stops(&self) -> &[f64] {
        &self.stops
    }

    /// Samples the gradient at `t`. See [`sample`].
    pub fn sample(&self, t: f64) -> Color {
        sample(t, &self.colors, &self.stops)
    }
}

/// Evenly spaced stops `i / count` for `count` colors.
///
/// The last stop is `(count - 1) / count`, so everything from there to `1.0`
/// renders the last color.
pub fn even_stops(count: usize) -> SmallVec<[f64; 4]> {
    (0..count).map(|i| i as f64 / count as f64).collect()
}

fn validate_stops(stops: &[f64]) -> Result<(), SliderError> {
    let mut previous = 0.0;
    for (index, &stop) in stops.iter().enumerate() {
        if !(0.0..=1.0).contains(&stop) {
            return Err(SliderError::StopOutOfRange { index, stop });
        }
        if stop < previous {
            return Err(SliderError::StopsNotSorted { index, stop });
        }
        previous = stop;
    }
    Ok(())
}

/// Returns the color at position `t` of the gradient given by `colors` and
/// `stops`.
///
/// - At or before the first stop the first color is returned, at or after the
///   last stop the last color.
/// - In between, the largest `i` with `stops[i] <= t` is found and the
///   channels of `colors[i]` and `colors[i + 1]` are blended linearly.
/// - Coincident stops yield `colors[i]` rather than dividing by zero.
///
/// Extra entries in the longer of the two slices are ignored; an empty input
/// yields [`Color::TRANSPARENT`].
pub fn sample(t: f64, colors: &[Color], stops: &[f64]) -> Color {
    let len = colors.len().min(stops.len());
    if len == 0 {
        return Color::TRANSPARENT;
    }
    let colors = &colors[..len];
    let stops = &stops[..len];
    let last = len - 1;

    if t.is_nan() || t <= stops[0] {
        return colors[0];
    }
    if t >= stops[last] {
        return colors[last];
    }

    // stops[0] < t < stops[last], so 1 <= partition point <= last.
    let index = stops.partition_point(|stop| *stop <= t).saturating_sub(1);
    let next = (index + 1).min(last);
    let span = stops[next] - stops[index];
    if span <= 0.0 {
        return colors[index];
    }

    let fraction = (t - stops[index]) / span;
    colors[index].lerp(colors[next], fraction as f32)
}
