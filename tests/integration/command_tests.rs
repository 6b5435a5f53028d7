//! Command dispatch: readiness gating and ack pass-through.

use devctl::adapters::time::SimDelay;
use devctl::app::commands::{Command, GET_CONTACT, GET_MOTION};
use devctl::app::ports::HardwareInterface;
use devctl::sensors::contact::{ContactState, SimContactSensor};
use devctl::sensors::motion::SimMotionSensor;
use devctl::{DeviceController, Error, HardwareError};

use super::mock_hw::{HwCall, ScriptedHardware};

/// Run `check` against a fresh controller for each sensor variant.
fn for_each_variant(check: impl Fn(&dyn HardwareInterface)) {
    check(&SimMotionSensor::new());
    check(&SimContactSensor::new());
}

#[test]
fn command_before_boot_rejected() {
    for_each_variant(|hw| {
        let mut ctl = DeviceController::new(hw, SimDelay::new());
        assert_eq!(ctl.send_str("PING"), Err(Error::NotReady));
    });
}

#[test]
fn command_before_boot_never_reaches_hardware() {
    let hw = ScriptedHardware::ready();
    let mut ctl = DeviceController::new(&hw, SimDelay::new());

    for text in ["PING", "RESET", "", GET_MOTION] {
        assert_eq!(ctl.send_str(text), Err(Error::NotReady));
    }
    assert!(hw.sends().is_empty());
}

#[test]
fn successful_command_after_boot() {
    for_each_variant(|hw| {
        let mut ctl = DeviceController::new(hw, SimDelay::new());
        ctl.boot_device(3, 1).unwrap();
        assert_eq!(ctl.send_str("PING").unwrap().as_str(), "ACK:PING");
        assert!(ctl.is_ready());
    });
}

#[test]
fn ack_passes_through_unchanged() {
    let hw = SimMotionSensor::new();
    let mut ctl = DeviceController::new(&hw, SimDelay::new());
    ctl.boot_device(1, 1).unwrap();

    assert_eq!(ctl.send_str(GET_MOTION).unwrap().as_str(), "MOTION:NO");
    hw.set_motion(true);
    assert_eq!(ctl.send_str(GET_MOTION).unwrap().as_str(), "MOTION:YES");

    let cmd = Command::new("PING").unwrap();
    let direct = hw.send_command(&cmd).unwrap();
    assert_eq!(ctl.send_command(&cmd).unwrap(), direct);
}

#[test]
fn contact_query_command() {
    let hw = SimContactSensor::new();
    let mut ctl = DeviceController::new(&hw, SimDelay::new());
    ctl.boot_device(1, 1).unwrap();

    assert_eq!(ctl.send_str(GET_CONTACT).unwrap().as_str(), "CONTACT:CLOSED");
    hw.set_contact(ContactState::Open);
    assert_eq!(ctl.send_str(GET_CONTACT).unwrap().as_str(), "CONTACT:OPEN");
    assert_eq!(hw.sim().commands().len(), 2);
}

#[test]
fn shutdown_then_command_rejected() {
    let hw = ScriptedHardware::ready();
    let mut ctl = DeviceController::new(&hw, SimDelay::new());
    ctl.boot_device(1, 1).unwrap();
    ctl.send_str("PING").unwrap();

    ctl.shutdown();
    assert!(!ctl.is_ready());
    assert_eq!(ctl.send_str("PING"), Err(Error::NotReady));
    assert_eq!(hw.count(&HwCall::PowerOff), 1);
    assert_eq!(hw.sends(), vec!["PING".to_string()]);
}

#[test]
fn shutdown_before_boot_is_harmless() {
    let hw = ScriptedHardware::ready();
    let mut ctl = DeviceController::new(&hw, SimDelay::new());
    ctl.shutdown();
    ctl.shutdown();
    assert!(!ctl.is_ready());
    assert_eq!(ctl.boot_device(1, 1), Ok(1));
}

#[test]
fn hardware_rejection_surfaces_without_state_change() {
    let hw = SimMotionSensor::new();
    let mut ctl = DeviceController::new(&hw, SimDelay::new());
    ctl.boot_device(1, 1).unwrap();

    // Powered off behind the controller's back.
    hw.power_off();
    assert_eq!(
        ctl.send_str("PING"),
        Err(Error::Hardware(HardwareError::NotPowered))
    );
    assert!(ctl.is_ready());
}
