//! Drives the sensor -> decision -> motor pipeline one tick at a time with a
//! scripted distance source and recording actuators.

use collision_car::system::config::{DriveConfig, FAR_SENTINEL_CM};
use collision_car::system::decision::DecisionEngine;
use collision_car::system::io::{Actuator, DistanceSource};
use collision_car::system::motor::{MotorControl, MotorRole};
use collision_car::system::shares::Shares;
use collision_car::system::state::VehicleState;
use collision_car::task::{motor_actuate, process_sensor_data, sensor_scan};
use core::future::Future;
use core::pin::{pin, Pin};
use core::task::{Context, Waker};
use std::sync::Arc;
use std::task::Wake;

use embassy_futures::block_on;
use embassy_time::{Duration, MockDriver};

/// Replays a fixed list of (ultrasonic, infrared) readings
struct ScriptedSource {
    readings: Vec<(f32, f32)>,
    next: usize,
}

impl ScriptedSource {
    fn new(readings: &[(f32, f32)]) -> Self {
        Self {
            readings: readings.to_vec(),
            next: 0,
        }
    }

    fn current(&self) -> (f32, f32) {
        self.readings[self.next.min(self.readings.len() - 1)]
    }
}

impl DistanceSource for ScriptedSource {
    async fn read_ultrasonic_cm(&mut self) -> f32 {
        self.current().0
    }

    async fn read_infrared_cm(&mut self) -> f32 {
        let ir = self.current().1;
        self.next += 1;
        ir
    }
}

/// Records every command it receives
#[derive(Default)]
struct RecordingActuator {
    calls: Vec<(u8, bool)>,
}

impl Actuator for RecordingActuator {
    type Error = ();

    fn set(&mut self, duty: u8, clockwise: bool) -> Result<(), ()> {
        self.calls.push((duty, clockwise));
        Ok(())
    }
}

/// Rejects every command
struct FaultyActuator;

impl Actuator for FaultyActuator {
    type Error = &'static str;

    fn set(&mut self, _duty: u8, _clockwise: bool) -> Result<(), &'static str> {
        Err("driver fault")
    }
}

struct Car {
    shares: Shares,
    source: ScriptedSource,
    engine: DecisionEngine,
    m1: MotorControl,
    m2: MotorControl,
    m1_actuator: RecordingActuator,
    m2_actuator: RecordingActuator,
}

impl Car {
    fn new(readings: &[(f32, f32)]) -> Self {
        let config = DriveConfig::default();
        Self {
            shares: Shares::new(),
            source: ScriptedSource::new(readings),
            engine: DecisionEngine::new(config),
            m1: MotorControl::new(MotorRole::Turning, config.smoothing),
            m2: MotorControl::new(MotorRole::Fixed, config.smoothing),
            m1_actuator: RecordingActuator::default(),
            m2_actuator: RecordingActuator::default(),
        }
    }

    /// Runs every task once, in pipeline order
    fn tick(&mut self) -> Option<Duration> {
        block_on(sensor_scan::sample(&mut self.source, &self.shares));
        let decision = process_sensor_data::step(&mut self.engine, &self.shares);
        motor_actuate::actuate(&mut self.m1, &mut self.m1_actuator, &self.shares).unwrap();
        motor_actuate::actuate(&mut self.m2, &mut self.m2_actuator, &self.shares).unwrap();
        decision.cooldown
    }

    fn published(&self) -> (u8, u8, bool) {
        published(&self.shares)
    }
}

fn published(shares: &Shares) -> (u8, u8, bool) {
    (shares.m1_duty.get(), shares.m2_duty.get(), shares.turn.get())
}

struct NoopWaker;

impl Wake for NoopWaker {
    fn wake(self: Arc<Self>) {}
}

/// Polls a never-ending task once; it must be parked on a timer afterwards
fn poll_once<F: Future<Output = ()>>(task: Pin<&mut F>) {
    let waker = Waker::from(Arc::new(NoopWaker));
    assert!(task.poll(&mut Context::from_waker(&waker)).is_pending());
}

#[test]
fn sampler_publishes_raw_readings() {
    let shares = Shares::new();
    let mut source = ScriptedSource::new(&[(0.0, -52.0)]);
    let readings = block_on(sensor_scan::sample(&mut source, &shares));
    assert_eq!(readings, (0.0, -52.0));
    assert_eq!(shares.us_distance.get(), 0.0);
    assert_eq!(shares.ir_distance.get(), -52.0);
}

#[test]
fn decision_before_first_sample_drives_full_speed() {
    let shares = Shares::new();
    let mut engine = DecisionEngine::new(DriveConfig::default());
    assert_eq!(shares.us_distance.get(), FAR_SENTINEL_CM);
    let decision = process_sensor_data::step(&mut engine, &shares);
    assert_eq!((decision.m1_duty, decision.m2_duty, decision.turn), (255, 255, false));
    assert_eq!(engine.state(), VehicleState::Running);
}

#[test]
fn motors_before_first_decision_stay_braked() {
    let shares = Shares::new();
    let mut control = MotorControl::new(MotorRole::Turning, 0.9);
    let mut actuator = RecordingActuator::default();
    motor_actuate::actuate(&mut control, &mut actuator, &shares).unwrap();
    assert_eq!(actuator.calls, vec![(0, true)]);
}

#[test]
fn approach_stop_turn_scenario() {
    let mut car = Car::new(&[(100.0, 100.0), (30.0, 30.0), (30.0, 10.0), (30.0, 10.0)]);

    assert_eq!(car.tick(), None);
    assert_eq!(car.published(), (255, 255, false));
    assert_eq!(car.engine.state(), VehicleState::Running);

    assert_eq!(car.tick(), None);
    assert_eq!(car.published(), (200, 200, false));
    assert_eq!(car.engine.state(), VehicleState::Running);

    assert_eq!(car.tick(), Some(Duration::from_secs(5)));
    assert_eq!(car.published(), (0, 0, false));
    assert_eq!(car.engine.state(), VehicleState::Stopped);

    assert_eq!(car.tick(), None);
    assert_eq!(car.published(), (200, 200, true));
    assert_eq!(car.engine.state(), VehicleState::Stopped);

    // turning motor: ccw while driving, braked, then cw for the turn
    let m1 = &car.m1_actuator.calls;
    assert_eq!(m1.len(), 4);
    assert!(!m1[0].1 && !m1[1].1);
    assert_eq!(m1[2], (0, true));
    assert_eq!(m1[3], (20, true));

    // fixed motor keeps its direction throughout
    let m2 = &car.m2_actuator.calls;
    assert!(m2.iter().all(|&(_, clockwise)| clockwise));
    assert_eq!(m2[2], (0, true));
}

#[test]
fn motors_ramp_up_and_brake_immediately() {
    let mut readings = vec![(100.0, 100.0); 50];
    readings.push((10.0, 10.0));
    let mut car = Car::new(&readings);

    for _ in 0..50 {
        car.tick();
    }
    let duties: Vec<u8> = car.m2_actuator.calls.iter().map(|&(duty, _)| duty).collect();
    assert_eq!(duties[0], 25);
    assert!(duties.windows(2).all(|w| w[0] <= w[1]));
    assert!(*duties.last().unwrap() >= 250);

    car.tick();
    assert_eq!(car.m1_actuator.calls.last(), Some(&(0, true)));
    assert_eq!(car.m2_actuator.calls.last(), Some(&(0, true)));
    assert_eq!(car.m1.speed(), 0.0);
    assert_eq!(car.m2.speed(), 0.0);
}

#[test]
fn actuators_are_commanded_every_tick() {
    let mut car = Car::new(&[(100.0, 100.0)]);
    for _ in 0..300 {
        car.tick();
    }
    // still commanded once per tick after settling at full speed
    assert_eq!(car.m1_actuator.calls.len(), 300);
    assert_eq!(car.m2_actuator.calls.len(), 300);
    let tail = &car.m2_actuator.calls[290..];
    assert!(tail.iter().all(|&(duty, clockwise)| duty >= 254 && clockwise));
}

#[test]
fn fixed_motor_never_reads_turn_flag() {
    let shares = Shares::new();
    shares.m2_duty.put(200);
    shares.turn.put(true);
    assert_eq!(motor_actuate::command(&shares, MotorRole::Fixed), (200, false));
    shares.m1_duty.put(150);
    assert_eq!(motor_actuate::command(&shares, MotorRole::Turning), (150, true));
}

#[test]
fn rejected_command_is_reported() {
    let shares = Shares::new();
    shares.m1_duty.put(255);
    let mut control = MotorControl::new(MotorRole::Turning, 0.9);
    let result = motor_actuate::actuate(&mut control, &mut FaultyActuator, &shares);
    assert_eq!(result, Err("driver fault"));
    // smoothing still advanced, the next tick continues the ramp
    assert!(control.speed() > 0.0);
}

#[test]
fn decision_task_holds_the_stop_through_cooldown() {
    let driver = MockDriver::get();
    driver.reset();
    let period = Duration::from_millis(60);

    let shares = Shares::new();
    shares.m1_duty.put(255);
    shares.m2_duty.put(255);
    shares.us_distance.put(10.0);
    shares.ir_distance.put(10.0);
    let mut task = pin!(process_sensor_data::run(DriveConfig::default(), &shares));

    // fresh stop is published before the pause starts
    poll_once(task.as_mut());
    assert_eq!(published(&shares), (0, 0, false));

    // path clears, but readings are not serviced while cooling down
    shares.us_distance.put(100.0);
    shares.ir_distance.put(100.0);
    for _ in 0..83 {
        driver.advance(period);
        poll_once(task.as_mut());
        assert_eq!(published(&shares), (0, 0, false));
    }

    // cooldown over at 5 s; the ticker restarts instead of catching up
    driver.advance(Duration::from_millis(20));
    poll_once(task.as_mut());
    assert_eq!(published(&shares), (0, 0, false));

    driver.advance(period);
    poll_once(task.as_mut());
    assert_eq!(published(&shares), (255, 255, false));

    // then one evaluation per period
    shares.us_distance.put(30.0);
    shares.ir_distance.put(30.0);
    driver.advance(Duration::from_millis(30));
    poll_once(task.as_mut());
    assert_eq!(published(&shares), (255, 255, false));
    driver.advance(Duration::from_millis(30));
    poll_once(task.as_mut());
    assert_eq!(published(&shares), (200, 200, false));
}
