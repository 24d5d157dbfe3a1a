//! Renders a lab measurement scale, red → yellow → green and back, twice,
//! with a black marker at the measured value, and writes it to
//! `lab_scale.png` in the current directory.

use gradbar::GradientBuilder;
use gradbar::render::PngRasterizer;
use gradbar::traits::Rasterizer;
use std::fs;

fn main() -> anyhow::Result<()> {
    let mut scale = GradientBuilder::new(1000, 70)?;

    scale.add_position(0)?.add_colour("f80a19")?;

    scale.add_position(32)?.add_colour("f8e800")?;
    scale.add_position(35)?.add_colour("00862d")?;
    scale.add_position(38)?.add_colour("f8e800")?;

    scale.add_position(50)?.add_colour("f80a19")?;

    scale.add_position(82)?.add_colour("f8e800")?;
    scale.add_position(85)?.add_colour("00862d")?;
    scale.add_position(88)?.add_colour("f8e800")?;

    scale.add_position(100)?.add_colour("f80a19")?;

    scale.calculate_rel_to_abs();

    scale.set_min_value(Some(200.0))?;
    scale.set_max_value(Some(500.0))?;
    scale.set_value(Some(305.0));

    scale.fill_with_gradient()?;
    scale.draw_value()?;

    let frame = scale
        .frame()
        .ok_or_else(|| anyhow::anyhow!("no frame was rendered"))?;
    let image = PngRasterizer
        .rasterize(frame)
        .map_err(anyhow::Error::msg)?;

    fs::write("lab_scale.png", &image.bytes)?;
    println!("🖼️ Wrote lab_scale.png ({} bytes)", image.bytes.len());

    Ok(())
}
