#![warn(clippy::all)]

use log::{info, warn};
use matstack::{
    math::vector::Vector4f,
    transform::{MatrixStack, MatrixStackError},
};

const ASPECT_RATIO: f32 = 16.0 / 9.0;

fn draw(label: &str, stack: &MatrixStack) {
    let origin = stack.top().transform_vec(&Vector4f::new(0.0, 0.0, 0.0, 1.0));
    info!(
        "{label} (depth {}), origin -> {origin}\n{}",
        stack.depth(),
        stack.top()
    );
}

fn main() -> Result<(), MatrixStackError> {
    env_logger::init();

    let mut stack = MatrixStack::with_capacity(8);
    stack.perspective(std::f32::consts::FRAC_PI_3, ASPECT_RATIO, 0.1, 100.0);
    stack.translate(0.0, 0.0, -10.0);
    draw("camera", &stack);

    for (i, offset) in [-3.0, 0.0, 3.0].into_iter().enumerate() {
        stack.push();
        stack.translate(offset, 0.0, 0.0);
        draw(&format!("body {i}"), &stack);

        stack.push();
        stack.translate(0.0, 1.5, 0.0);
        stack.scale(0.5, 0.5, 0.5);
        draw(&format!("head {i}"), &stack);
        stack.pop()?;

        stack.pop()?;
    }

    draw("camera again", &stack);
    info!("determinant {}", stack.top().determinant());

    if let Err(e) = stack.pop() {
        warn!("{e}");
    }

    Ok(())
}
