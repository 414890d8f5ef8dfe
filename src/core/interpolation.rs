use num_traits::Float;
use std::ops::{Add, Mul, Sub};

/// Trait for interpolation between two values
pub trait Interpolator<T, V>
where
    T: Float + Copy,
    V: Copy + Add<Output = V> + Sub<Output = V> + Mul<T, Output = V>,
{
    fn interpolate(&self, alpha: T, a: &V, b: &V) -> V;
}

/// Keyframes, used to construct (and define) a piecewise interpolator
/// Generic keyframe: maps an input (query) to an output value.
#[derive(Clone, Copy, Debug)]
pub struct InterpolationKeyframe<T, V> {
    pub input: T,
    pub output: V,
}

/// Generic container for performing interpolation between keyframes.
/// Queries outside of the keyframe inputs are held at the first (or last) value.
pub struct KeyframeInterpolator<T, V, F>
where
    T: Float + Copy,
    V: Copy + Add<Output = V> + Sub<Output = V> + Mul<T, Output = V>,
    F: Interpolator<T, V>,
{
    queries: Vec<T>,
    values: Vec<V>,
    interpolator: F,
}

impl<T, V, F> KeyframeInterpolator<T, V, F>
where
    T: Float + Copy,
    V: Copy + Add<Output = V> + Sub<Output = V> + Mul<T, Output = V>,
    F: Interpolator<T, V>,
{
    pub fn new(keyframes: Vec<InterpolationKeyframe<T, V>>, interpolator: F) -> Self {
        assert!(!keyframes.is_empty(), "keyframes must not be empty");
        for pair in keyframes.windows(2) {
            assert!(
                pair[0].input < pair[1].input,
                "keyframes must be strictly increasing"
            );
        }

        let queries = keyframes.iter().map(|k| k.input).collect();
        let values = keyframes.iter().map(|k| k.output).collect();

        Self {
            queries,
            values,
            interpolator,
        }
    }

    pub fn first_value(&self) -> V {
        self.values[0]
    }

    pub fn last_value(&self) -> V {
        self.values[self.values.len() - 1]
    }

    pub fn evaluate(&self, query: T) -> V {
        let last = self.queries.len() - 1;
        if query <= self.queries[0] {
            self.first_value()
        } else if query >= self.queries[last] {
            self.last_value()
        } else {
            // A query exactly on a keyframe takes alpha = 1 on the segment below it.
            let idx_upp = self.queries.partition_point(|q| *q < query);
            let idx_low = idx_upp - 1;
            let val_low = self.queries[idx_low];
            let alpha = (query - val_low) / (self.queries[idx_upp] - val_low);
            self.interpolator
                .interpolate(alpha, &self.values[idx_low], &self.values[idx_upp])
        }
    }
}

/// Linear interpolation: a + (b - a) * alpha
#[derive(Default, Clone, Copy)]
pub struct LinearInterpolator;

impl<T, V> Interpolator<T, V> for LinearInterpolator
where
    T: Float + Copy,
    V: Copy + Add<Output = V> + Sub<Output = V> + Mul<T, Output = V>,
{
    fn interpolate(&self, alpha: T, a: &V, b: &V) -> V {
        *a + (*b - *a) * alpha
    }
}
