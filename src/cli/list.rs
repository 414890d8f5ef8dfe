use std::io::{self, Write};

use crate::core::color_map::{known_color_map_names, REVERSED_SUFFIX};

pub fn write_color_map_names<W: Write>(writer: &mut W) -> io::Result<()> {
    for name in known_color_map_names() {
        writeln!(writer, "{}", name)?;
    }
    Ok(())
}

/// Print every colormap that `generate` accepts, one per line.
pub fn list_color_maps() -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_color_map_names(&mut handle)?;
    log::debug!(
        "Every colormap is also available reversed, with the `{}` suffix",
        REVERSED_SUFFIX
    );
    Ok(())
}
