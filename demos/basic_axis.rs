//! Basic axis control demo.
//!
//! Drives a single stepper axis back and forth through a recording pin
//! effector and prints what reached the "hardware".
//!
//! Run with `RUST_LOG=debug` to see the driver's own log output.

use cnc_motion::{AxisConfig, Millis, MotorDriver, MotorKind, PinId, RecordingEffector};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Basic Axis Demo ===\n");

    let effector = RecordingEffector::new();
    let config = AxisConfig::new(
        vec![PinId(15), PinId(11), PinId(13), PinId(12)],
        MotorKind::Stepper,
        Millis(5),
    );

    let mut motor = MotorDriver::new("x", &config, effector.clone())?;
    motor.setup().await?;

    println!(
        "motor '{}' ({}) ready, phase {}",
        motor.label(),
        motor.kind(),
        motor.phase()
    );

    motor.forward(4).await?;
    println!("after forward(4): phase {}", motor.phase());

    motor.backward(4).await?;
    println!("after backward(4): phase {}", motor.phase());

    motor.stop().await?;

    println!(
        "\n{} pin writes reached the effector:",
        effector.write_count()
    );
    for write in effector.writes() {
        println!("  pin {:>2} <- {:?}", write.pin, write.level);
    }

    Ok(())
}
