//! Walks a 4th order Gosper curve and shows it in a nannou window.
//! Run with `--features nannou`.
use std::collections::HashMap;

use turtlegraphics::prelude::*;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let gosper = LSystem {
        axiom: "A".to_string(),
        rules: HashMap::from([
            ('A', "A-B--B+A++AA+B-".to_string()),
            ('B', "+A-BB--B-A++A+B".to_string()),
        ]),
    };

    let canvas = shared(WindowCanvas::new(600, 600, parse_css_color("white")?)?);
    let mut turtle = Turtle::on(&canvas)?;
    turtle
        .set_pen_color(parse_css_color("navy")?)
        .pen_up()
        .go_to(-120.0, 180.0)?
        .pen_down()
        .right(90.0)?
        .walk_lpath(&gosper.expand(4), 60.0, 6.0)?
        .dot_sized(6.0)?;

    canvas.borrow().show();
    Ok(())
}
