use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::core::error::TableError;
use crate::core::sample_table::SampleTable;

/// The names that appear in the generated header, apart from the table itself.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderLayout {
    pub include_path: String,
    pub element_type: String,
    pub array_name: String,
}

impl Default for HeaderLayout {
    fn default() -> Self {
        HeaderLayout {
            include_path: "types.h".to_owned(),
            element_type: "u32".to_owned(),
            array_name: "colormap".to_owned(),
        }
    }
}

fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

impl HeaderLayout {
    pub fn validate(&self) -> Result<(), TableError> {
        let invalid = |field: &'static str, value: &str| TableError::InvalidLayout {
            field,
            value: value.to_owned(),
        };

        if self.include_path.is_empty()
            || self.include_path.contains('"')
            || self.include_path.contains('\n')
        {
            return Err(invalid("include_path", &self.include_path));
        }
        if !is_c_identifier(&self.element_type) {
            return Err(invalid("element_type", &self.element_type));
        }
        if !is_c_identifier(&self.array_name) {
            return Err(invalid("array_name", &self.array_name));
        }
        Ok(())
    }

    /// Serialize the table as a header holding one constant array.
    pub fn write_header<W: Write>(&self, writer: &mut W, table: &SampleTable) -> io::Result<()> {
        write!(writer, "#pragma once\n\n")?;
        write!(writer, "#include \"{}\"\n\n", self.include_path)?;
        writeln!(
            writer,
            "const {} {}[{}] =",
            self.element_type,
            self.array_name,
            table.len()
        )?;
        writeln!(writer, "{{")?;
        let last = table.len().saturating_sub(1);
        for (i, color) in table.entries().iter().enumerate() {
            let comma = if i < last { "," } else { "" };
            writeln!(writer, "    {}{}", color, comma)?;
        }
        writeln!(writer, "}};")?;
        Ok(())
    }

    pub fn render(&self, table: &SampleTable) -> io::Result<String> {
        let mut buffer: Vec<u8> = Vec::new();
        self.write_header(&mut buffer, table)?;
        String::from_utf8(buffer).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }
}
