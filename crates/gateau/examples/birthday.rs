//! Compose a two-tier birthday cake and print its order summary.

use anyhow::Result;
use gateau::Session;
use gateau_config::{Flavor, SizeClass};
use gateau_outline::BaseShape;

fn main() -> Result<()> {
    let mut session = Session::new();
    session.set_shape(BaseShape::Heart);
    session.set_size(SizeClass::Large);
    session.set_flavor(Flavor::Chocolate);
    session.add_layer();
    session.toggle_topping("cherries");
    session.toggle_topping("sprinkles");
    session.toggle_topping("candles");
    session.set_text("Joyeux anniversaire");

    let frame = session.frame();
    println!("layers: {}", frame.layers.len());
    for group in &frame.toppings {
        println!("  {} -> {} instances", group.id, group.instances.len());
    }
    println!("top of stack at y = {:.2}", frame.top_y);
    println!("weight: {:.1} kg", session.weight());
    println!("height: {:.1} cm", session.total_height());
    println!("price:  {:.2}", session.price());

    let json = session.config().to_json()?;
    println!("--- configuration ---\n{json}");
    Ok(())
}
