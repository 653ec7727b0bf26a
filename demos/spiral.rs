//! Draws a square spiral with two turtles sharing one headless canvas and
//! reports how much of it got inked.
use turtlegraphics::prelude::*;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = ScreenConfig::from_ron_str(r#"(width: 400, height: 400, background: "ivory")"#)?;
    let canvas = shared(RasterCanvas::from_config(&config)?);

    let mut outer = Turtle::on(&canvas)?;
    outer.set_pen_color(parse_css_color("navy")?);
    for step in 1..=60 {
        outer.forward(f64::from(step) * 3.0)?.right(90.0)?;
    }

    // A second turtle marks the corners of a smaller square in red.
    let mut marker = Turtle::on(&canvas)?;
    marker.pen_up().go_to(-50.0, 50.0)?;
    for _ in 0..4 {
        marker.dot_with(8.0, &parse_css_color("crimson")?)?;
        marker.right(90.0)?.forward(100.0)?;
    }

    let canvas = canvas.borrow();
    let background = canvas.background().to_rgba8();
    let inked = canvas
        .image()
        .pixels()
        .filter(|p| p.0 != background)
        .count();
    tracing::info!(inked, "spiral finished");
    Ok(())
}
