//! Path tracing demo.
//!
//! Draws a square with two stepper axes and a DC pen axis, then lifts the
//! pen - the same flow an HTTP front end would drive.

use std::sync::Arc;

use tokio::sync::Mutex;

use cnc_motion::{parse_config, Machine, Point, RecordingEffector};

const CONFIG: &str = r#"
name = "plotter"

[x]
pins = [15, 11, 13, 12]
kind = "stepper"
step_delay_ms = 5

[y]
pins = [37, 33, 35, 31]
kind = "stepper"
step_delay_ms = 5

[z]
pins = [18, 16, 22]
kind = "dc"
step_delay_ms = 10
"#;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Draw Square Demo ===\n");

    let effector = RecordingEffector::new();
    let config = parse_config(CONFIG)?;
    let machine = Machine::init(config, effector.clone()).await?;

    // At most one motion operation runs at a time; sharing the machine with
    // concurrent request handlers goes through an async mutex.
    let machine = Arc::new(Mutex::new(machine));

    let square = [
        Point::new(0, 0, 0),  // pen down
        Point::new(40, 0, 0),
        Point::new(40, 40, 0),
        Point::new(0, 40, 0),
        Point::new(0, 0, 0),
        Point::new(0, 0, 1), // pen up
    ];

    {
        let mut rig = machine.lock().await;
        rig.trace(&square).await?;
        println!("traced {} points, now at {}", square.len(), rig.position());
    }

    println!("{} pin writes were issued", effector.write_count());

    Ok(())
}
