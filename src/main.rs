//! Collision-avoidance car firmware entry point
//!
//! Initializes the hardware and starts the four control tasks on three
//! executors, one per priority level:
//!
//! | Priority | Executor | Tasks |
//! | -------- | -------- | ----- |
//! | high | interrupt (`SWI_IRQ_1`) | sensor scan |
//! | medium | interrupt (`SWI_IRQ_0`) | both motor tasks |
//! | low | thread mode | decision engine |

#![no_std]
#![no_main]

use collision_car::hw::drive_motors::DriveMotors;
use collision_car::hw::range_sensors::RangeSensors;
use collision_car::system::motor::MotorRole;
use collision_car::system::resources;
use collision_car::task::{
    motor_actuate::motor_actuate, process_sensor_data::process_sensor_data,
    sensor_scan::sensor_scan,
};
use cortex_m_rt::entry;
use defmt::{info, unwrap};
use embassy_executor::{Executor, InterruptExecutor};
use embassy_rp::block::ImageDef;
use embassy_rp::config::Config;
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

/// Firmware image type for bootloader
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = ImageDef::secure_exe();

static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();
static EXECUTOR_MED: InterruptExecutor = InterruptExecutor::new();
static EXECUTOR_LOW: StaticCell<Executor> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}

#[interrupt]
unsafe fn SWI_IRQ_0() {
    EXECUTOR_MED.on_interrupt()
}

/// Firmware entry point
#[entry]
fn main() -> ! {
    let p = embassy_rp::init(Config::default());
    info!("Collision-avoidance car starting");

    // Split the resources into separate groups, one per owner
    let r = resources::split(p);

    let sensors = RangeSensors::new(r.range_sensors);
    // `_standby` stays alive for as long as `main`, which never returns
    let DriveMotors {
        standby: _standby,
        m1,
        m2,
    } = unwrap!(DriveMotors::new(r.motor_driver));

    // Sensor scan: highest priority so its readings see the least jitter
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    unwrap!(spawner.spawn(sensor_scan(sensors)));

    // Motors share the middle priority
    interrupt::SWI_IRQ_0.set_priority(Priority::P3);
    let spawner = EXECUTOR_MED.start(interrupt::SWI_IRQ_0);
    unwrap!(spawner.spawn(motor_actuate(m1, MotorRole::Turning)));
    unwrap!(spawner.spawn(motor_actuate(m2, MotorRole::Fixed)));

    // Decision engine runs in thread mode, below every interrupt executor
    let executor = EXECUTOR_LOW.init(Executor::new());
    executor.run(|spawner| {
        unwrap!(spawner.spawn(process_sensor_data()));
    })
}
