//! Colored terminal preview of a flavor's quantized palette.

use std::collections::BTreeMap;
use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor};

use crate::flavor::Flavor;

/// Print one swatch line per color: block, name, source hex, palette index.
/// Colors are listed in the flavor's own order.
pub fn print_preview(
    out: &mut impl Write,
    flavor: &Flavor,
    quantized: &BTreeMap<String, u8>,
) -> io::Result<()> {
    queue!(out, Print(format!("{}\n", flavor.name)))?;
    for (name, hex) in flavor.colors {
        let Some(index) = quantized.get(&name.to_lowercase()) else {
            continue;
        };
        queue!(
            out,
            Print("  "),
            SetBackgroundColor(Color::AnsiValue(*index)),
            Print("      "),
            ResetColor,
            Print(format!("  {name:<12} {hex} -> {index:>3}\n")),
        )?;
    }
    queue!(out, Print("\n"))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flavor;

    #[test]
    fn preview_lists_every_color() {
        let quantized = flavor::LATTE.quantize().unwrap();
        let mut buf = Vec::new();
        print_preview(&mut buf, &flavor::LATTE, &quantized).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("Latte (light)\n"));
        for (name, _) in flavor::LATTE.colors {
            assert!(text.contains(name), "missing swatch for {name}");
        }
    }

    #[test]
    fn preview_skips_unquantized_colors() {
        let mut buf = Vec::new();
        print_preview(&mut buf, &flavor::LATTE, &BTreeMap::new()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "Latte (light)\n\n");
    }
}
