use crate::core::color_map::ColorMapper;
use crate::core::error::TableError;
use crate::core::lookup_table::uniform_samples;
use crate::core::packed_color::{ChannelQuantization, PackedRgba};

/// Number of samples in the table that the firmware headers have always used.
pub const DEFAULT_SAMPLE_COUNT: usize = 255;

/// Largest table that will be generated (one million entries).
pub const MAX_SAMPLE_COUNT: usize = 1 << 20;

/**
 * The packed colors of a colormap, sampled at evenly spaced points on [0,1]
 * (both ends included), in ascending order of the sample point.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleTable {
    entries: Vec<PackedRgba>,
}

impl SampleTable {
    pub fn generate<M>(
        color_map: &M,
        sample_count: usize,
        quantization: ChannelQuantization,
    ) -> Result<SampleTable, TableError>
    where
        M: ColorMapper + ?Sized,
    {
        if sample_count == 0 || sample_count > MAX_SAMPLE_COUNT {
            return Err(TableError::InvalidSampleCount {
                count: sample_count,
                max: MAX_SAMPLE_COUNT,
            });
        }

        let entries = uniform_samples(sample_count)
            .into_iter()
            .map(|query| {
                PackedRgba::from_channels(&color_map.compute_channels(query), quantization)
            })
            .collect();

        Ok(SampleTable { entries })
    }

    pub fn entries(&self) -> &[PackedRgba] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color_map::{resolve_color_map, NamedColorMap};
    use crate::core::packed_color::OPAQUE_ALPHA;
    use nalgebra::Vector3;
    use std::cell::RefCell;

    /// Records every query and maps between black and a fixed color.
    struct RecordingColorMap {
        color: Vector3<f64>,
        queries: RefCell<Vec<f64>>,
    }

    impl ColorMapper for RecordingColorMap {
        fn compute_channels(&self, query: f64) -> Vector3<f64> {
            self.queries.borrow_mut().push(query);
            self.color * query
        }
    }

    fn recording(color: Vector3<f64>) -> RecordingColorMap {
        RecordingColorMap {
            color,
            queries: RefCell::new(Vec::new()),
        }
    }

    #[test]
    fn test_sample_points_span_the_unit_interval() {
        let color_map = recording(Vector3::new(1.0, 1.0, 1.0));
        let table =
            SampleTable::generate(&color_map, 11, ChannelQuantization::Truncate).unwrap();
        let queries = color_map.queries.borrow();

        assert_eq!(table.len(), 11);
        assert_eq!(queries.len(), 11);
        assert_eq!(queries[0], 0.0);
        assert_eq!(queries[10], 1.0);
        assert_eq!(table.entries()[0], PackedRgba::from_rgb(0, 0, 0));
        assert_eq!(table.entries()[10], PackedRgba::from_rgb(255, 255, 255));
    }

    #[test]
    fn test_single_sample_is_taken_at_zero() {
        let color_map = recording(Vector3::new(1.0, 0.5, 0.25));
        let table = SampleTable::generate(&color_map, 1, ChannelQuantization::Truncate).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(*color_map.queries.borrow(), vec![0.0]);
        assert_eq!(table.entries()[0], PackedRgba::from_rgb(0, 0, 0));
    }

    #[test]
    fn test_zero_samples_is_an_error() {
        let color_map = recording(Vector3::new(1.0, 1.0, 1.0));
        let result = SampleTable::generate(&color_map, 0, ChannelQuantization::Truncate);
        assert!(matches!(
            result,
            Err(TableError::InvalidSampleCount { count: 0, .. })
        ));
        assert!(color_map.queries.borrow().is_empty());
    }

    #[test]
    fn test_oversized_sample_count_is_an_error() {
        let color_map = recording(Vector3::new(1.0, 1.0, 1.0));
        for sample_count in [MAX_SAMPLE_COUNT + 1, usize::MAX] {
            match SampleTable::generate(&color_map, sample_count, ChannelQuantization::Truncate) {
                Err(TableError::InvalidSampleCount { count, max }) => {
                    assert_eq!(count, sample_count);
                    assert_eq!(max, MAX_SAMPLE_COUNT);
                }
                other => panic!("expected {} to be rejected, got {:?}", sample_count, other),
            }
        }
        assert!(color_map.queries.borrow().is_empty());

        let largest =
            SampleTable::generate(&color_map, MAX_SAMPLE_COUNT, ChannelQuantization::Truncate)
                .unwrap();
        assert_eq!(largest.len(), MAX_SAMPLE_COUNT);
    }

    #[test]
    fn test_every_entry_is_opaque_and_count_is_exact() {
        for map in NamedColorMap::ALL.iter() {
            let color_map = map.build();
            for sample_count in [2, 3, 17, 255, 256, 1000] {
                let table =
                    SampleTable::generate(&color_map, sample_count, ChannelQuantization::Truncate)
                        .unwrap();
                assert_eq!(table.len(), sample_count);
                assert!(table.entries().iter().all(|c| c.alpha() == OPAQUE_ALPHA));
            }
        }
    }

    #[test]
    fn test_inferno_reference_values() {
        let inferno = resolve_color_map("inferno").unwrap();
        let table =
            SampleTable::generate(&inferno, DEFAULT_SAMPLE_COUNT, ChannelQuantization::Truncate)
                .unwrap();

        let entries = table.entries();
        assert_eq!(entries.len(), 255);
        assert_eq!(entries[0].0, 1023);
        assert_eq!(entries[1].0, 1279);
        assert_eq!(entries[2].0, 1791);
        assert_eq!(entries[127].0, 3140965631);
        assert_eq!(entries[254].0, 4244546815);

        // inferno(0.0) = (0.001462, 0.000466, 0.013866)
        assert_eq!(entries[0].red(), (0.001462 * 255.0) as u8);
        assert_eq!(entries[0].blue(), 3);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let hot = resolve_color_map("hot").unwrap();
        let first = SampleTable::generate(&hot, 255, ChannelQuantization::Round).unwrap();
        let second = SampleTable::generate(&hot, 255, ChannelQuantization::Round).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rounding_never_lowers_a_channel() {
        let inferno = resolve_color_map("inferno").unwrap();
        let truncated =
            SampleTable::generate(&inferno, 255, ChannelQuantization::Truncate).unwrap();
        let rounded = SampleTable::generate(&inferno, 255, ChannelQuantization::Round).unwrap();

        let mut changed = 0;
        for (t, r) in truncated.entries().iter().zip(rounded.entries()) {
            for (a, b) in [(t.red(), r.red()), (t.green(), r.green()), (t.blue(), r.blue())] {
                assert!(b == a || b == a + 1);
                if b != a {
                    changed += 1;
                }
            }
        }
        assert!(changed > 0);
    }
}
