use crate::gradient::GradientBuilder;
use crate::models::hex_to_rgb;
use comfy_table::{Attribute, Cell, CellAlignment, Table};

/// Print the default gradient as a table of stops plus an interpolated
/// colourbar preview, shown once at server startup.
pub fn print_stop_summary(stops: &[(i32, String)]) {
    let mut table = Table::new();
    table
        .set_header(vec![
            Cell::new("Position")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
            Cell::new("Hex")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
            Cell::new("Colour").add_attribute(Attribute::Bold),
        ])
        .load_preset(comfy_table::presets::ASCII_BORDERS_ONLY_CONDENSED);

    for (position, hex) in stops {
        let swatch = match hex_to_rgb(hex) {
            Ok(rgb) => format!("\x1b[38;2;{};{};{}m████\x1b[0m", rgb.r, rgb.g, rgb.b),
            Err(_) => "????".to_string(),
        };
        table.add_row(vec![
            Cell::new(format!("{}%", position)).set_alignment(CellAlignment::Center),
            Cell::new(hex).set_alignment(CellAlignment::Center),
            Cell::new(swatch),
        ]);
    }

    println!("\nDefault gradient:\n{}", table);

    if let Some(bar) = colourbar(stops, 48) {
        println!("\n  {}\n", bar);
    }
}

/// Render the stop list through the gradient engine at the given width and
/// return it as a line of truecolor blocks.
fn colourbar(stops: &[(i32, String)], width: u32) -> Option<String> {
    let mut preview = GradientBuilder::new(width, 1).ok()?;
    for (position, hex) in stops {
        preview.add_position(*position).ok()?.add_colour(hex).ok()?;
    }
    preview.calculate_rel_to_abs();
    preview.fill_with_gradient().ok()?;

    let frame = preview.frame()?;
    let mut bar = String::new();
    for x in 0..frame.width() {
        let px = frame.pixel(x, 0)?;
        bar.push_str(&format!("\x1b[38;2;{};{};{}m█\x1b[0m", px.r, px.g, px.b));
    }
    Some(bar)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colourbar_covers_the_requested_width() {
        let stops = vec![(0, "f80a19".to_string()), (100, "00862d".to_string())];
        let bar = colourbar(&stops, 16).unwrap();
        assert_eq!(bar.matches('█').count(), 16);
    }

    #[test]
    fn colourbar_needs_at_least_two_usable_stops() {
        assert!(colourbar(&[(0, "fff".to_string())], 16).is_none());
        assert!(colourbar(&[(0, "nothex".to_string()), (100, "fff".to_string())], 16).is_none());
    }
}
