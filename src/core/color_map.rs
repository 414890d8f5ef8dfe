use std::fmt;
use std::str::FromStr;

use more_asserts::assert_ge;
use nalgebra::Vector3;

use crate::core::color_map_data::{
    ChannelSegments, SegmentData, BINARY_SEGMENTS, GRAY_SEGMENTS, HOT_SEGMENTS, INFERNO_DATA,
};
use crate::core::error::TableError;
use crate::core::interpolation::{InterpolationKeyframe, KeyframeInterpolator, LinearInterpolator};
use crate::core::lookup_table::{uniform_samples, LookupTable};

/// Every named colormap is resolved into a table with this many entries.
pub const COLOR_MAP_ENTRY_COUNT: usize = 256;

/// Appending this to a colormap name selects the reversed colormap.
pub const REVERSED_SUFFIX: &str = "_r";

/// Maps a query on [0,1] to red, green, and blue intensities, each on [0,1].
pub trait ColorMapper {
    fn compute_channels(&self, query: f64) -> Vector3<f64>;
}

/**
 * Colormap backed by a fixed lookup table of channel triples. Queries select
 * an entry directly (no blending between neighbors), which is what keeps the
 * generated tables identical to the ones produced by the plotting stack that
 * the colormaps originally come from.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct LookupColorMap {
    table: LookupTable<Vector3<f64>>,
}

impl LookupColorMap {
    pub fn from_listed(colors: &[[f64; 3]]) -> LookupColorMap {
        LookupColorMap {
            table: LookupTable::from_entries(
                colors
                    .iter()
                    .map(|rgb| Vector3::new(rgb[0], rgb[1], rgb[2]))
                    .collect(),
            ),
        }
    }

    /**
     * Sample per-channel linear ramps into a table. The keyframe positions are
     * scaled into index space, and entry `i` is the ramp evaluated at
     * `(entry_count - 1) * uniform_samples(entry_count)[i]`. That product is not
     * always exactly `i`, and the last bit matters once channels are truncated.
     * The first and last entries are exactly the end keyframe values.
     */
    pub fn from_segments(segments: &SegmentData, entry_count: usize) -> LookupColorMap {
        assert_ge!(entry_count, 2);
        let scale = (entry_count - 1) as f64;
        let red = channel_interpolator(segments.red, scale);
        let green = channel_interpolator(segments.green, scale);
        let blue = channel_interpolator(segments.blue, scale);
        let samples = uniform_samples(entry_count);

        LookupColorMap {
            table: LookupTable::new(entry_count, |index| {
                let query = scale * samples[index];
                Vector3::new(
                    red.evaluate(query).clamp(0.0, 1.0),
                    green.evaluate(query).clamp(0.0, 1.0),
                    blue.evaluate(query).clamp(0.0, 1.0),
                )
            }),
        }
    }

    pub fn reversed(&self) -> LookupColorMap {
        LookupColorMap {
            table: self.table.reversed(),
        }
    }

    pub fn entries(&self) -> &[Vector3<f64>] {
        self.table.entries()
    }
}

impl ColorMapper for LookupColorMap {
    fn compute_channels(&self, query: f64) -> Vector3<f64> {
        *self.table.lookup(query)
    }
}

fn channel_interpolator(
    segments: ChannelSegments,
    scale: f64,
) -> KeyframeInterpolator<f64, f64, LinearInterpolator> {
    KeyframeInterpolator::new(
        segments
            .iter()
            .map(|&(position, intensity)| InterpolationKeyframe {
                input: position * scale,
                output: intensity,
            })
            .collect(),
        LinearInterpolator,
    )
}

/// The colormaps that can be selected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColorMap {
    Inferno,
    Gray,
    Binary,
    Hot,
}

impl NamedColorMap {
    pub const ALL: [NamedColorMap; 4] = [
        NamedColorMap::Inferno,
        NamedColorMap::Gray,
        NamedColorMap::Binary,
        NamedColorMap::Hot,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            NamedColorMap::Inferno => "inferno",
            NamedColorMap::Gray => "gray",
            NamedColorMap::Binary => "binary",
            NamedColorMap::Hot => "hot",
        }
    }

    pub fn build(&self) -> LookupColorMap {
        match self {
            NamedColorMap::Inferno => LookupColorMap::from_listed(&INFERNO_DATA),
            NamedColorMap::Gray => {
                LookupColorMap::from_segments(&GRAY_SEGMENTS, COLOR_MAP_ENTRY_COUNT)
            }
            NamedColorMap::Binary => {
                LookupColorMap::from_segments(&BINARY_SEGMENTS, COLOR_MAP_ENTRY_COUNT)
            }
            NamedColorMap::Hot => {
                LookupColorMap::from_segments(&HOT_SEGMENTS, COLOR_MAP_ENTRY_COUNT)
            }
        }
    }
}

impl fmt::Display for NamedColorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

pub fn known_color_map_names() -> Vec<&'static str> {
    NamedColorMap::ALL.iter().map(|map| map.name()).collect()
}

/// A named colormap, optionally reversed (`"inferno_r"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorMapSelection {
    pub color_map: NamedColorMap,
    pub reversed: bool,
}

impl ColorMapSelection {
    pub fn build(&self) -> LookupColorMap {
        let color_map = self.color_map.build();
        if self.reversed {
            color_map.reversed()
        } else {
            color_map
        }
    }
}

impl FromStr for ColorMapSelection {
    type Err = TableError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let (base_name, reversed) = match name.strip_suffix(REVERSED_SUFFIX) {
            Some(base_name) => (base_name, true),
            None => (name, false),
        };

        NamedColorMap::ALL
            .iter()
            .find(|map| map.name() == base_name)
            .map(|&color_map| ColorMapSelection {
                color_map,
                reversed,
            })
            .ok_or_else(|| TableError::UnknownColorMap {
                name: name.to_owned(),
                known: known_color_map_names().join(", "),
            })
    }
}

impl fmt::Display for ColorMapSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reversed {
            write!(f, "{}{}", self.color_map, REVERSED_SUFFIX)
        } else {
            write!(f, "{}", self.color_map)
        }
    }
}

/// Look up a colormap by name and build its table.
pub fn resolve_color_map(name: &str) -> Result<LookupColorMap, TableError> {
    let selection: ColorMapSelection = name.parse()?;
    Ok(selection.build())
}
