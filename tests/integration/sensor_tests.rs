//! Capability dispatch for motion and contact sensors.

use devctl::adapters::time::SimDelay;
use devctl::app::ports::{Capability, Status};
use devctl::sensors::contact::{ContactState, SimContactSensor};
use devctl::sensors::motion::SimMotionSensor;
use devctl::{DeviceController, Error};

use super::mock_hw::ScriptedHardware;

// ── Motion ────────────────────────────────────────────────────

#[test]
fn motion_detection_follows_hardware() {
    let hw = SimMotionSensor::new();
    let mut ctl = DeviceController::new(&hw, SimDelay::new());
    ctl.boot_device(3, 1).unwrap();

    assert_eq!(ctl.check_motion(), Ok(false));
    hw.set_motion(true);
    assert_eq!(ctl.check_motion(), Ok(true));
    hw.set_motion(false);
    assert_eq!(ctl.check_motion(), Ok(false));
}

#[test]
fn motion_on_contact_sensor_is_type_error() {
    let hw = SimContactSensor::new();
    let mut ctl = DeviceController::new(&hw, SimDelay::new());

    let expected = Err(Error::WrongDeviceType {
        expected: Capability::Motion,
        found: Capability::Contact,
    });
    assert_eq!(ctl.check_motion(), expected);
    ctl.boot_device(3, 1).unwrap();
    assert_eq!(ctl.check_motion(), expected);
}

// ── Contact ───────────────────────────────────────────────────

#[test]
fn contact_sensing_follows_hardware() {
    let hw = SimContactSensor::new();
    let mut ctl = DeviceController::new(&hw, SimDelay::new());
    ctl.boot_device(3, 1).unwrap();

    assert_eq!(ctl.check_contact(), Ok(ContactState::Closed));
    hw.set_contact_str("OPEN").unwrap();
    assert_eq!(ctl.check_contact(), Ok(ContactState::Open));
    hw.set_contact_str("CLOSED").unwrap();
    assert_eq!(ctl.check_contact(), Ok(ContactState::Closed));
}

#[test]
fn contact_on_motion_sensor_is_type_error() {
    let hw = SimMotionSensor::new();
    let mut ctl = DeviceController::new(&hw, SimDelay::new());
    ctl.boot_device(3, 1).unwrap();

    assert_eq!(
        ctl.check_contact(),
        Err(Error::WrongDeviceType {
            expected: Capability::Contact,
            found: Capability::Motion,
        })
    );
}

#[test]
fn invalid_contact_assignment_rejected() {
    let hw = SimContactSensor::new();
    assert_eq!(hw.set_contact_str("INVALID"), Err(Error::InvalidContactState));
    assert_eq!(hw.contact(), ContactState::Closed);
}

#[test]
fn corrupt_contact_reading_is_state_error() {
    let hw = ScriptedHardware::with_capability(&[Status::Ready], Capability::Contact);
    let ctl = DeviceController::new(&hw, SimDelay::new());

    assert_eq!(ctl.check_contact(), Ok(ContactState::Closed));
    hw.force_contact("AJAR");
    assert_eq!(ctl.check_contact(), Err(Error::InvalidDeviceState));
}

#[test]
fn generic_hardware_has_no_sensor_capability() {
    let hw = ScriptedHardware::ready();
    let ctl = DeviceController::new(&hw, SimDelay::new());

    assert_eq!(ctl.capability(), Capability::Generic);
    assert!(matches!(
        ctl.check_motion(),
        Err(Error::WrongDeviceType { found: Capability::Generic, .. })
    ));
    assert!(matches!(
        ctl.check_contact(),
        Err(Error::WrongDeviceType { found: Capability::Generic, .. })
    ));
}

#[test]
fn scripted_motion_double_dispatches() {
    let hw = ScriptedHardware::with_capability(&[Status::Ready], Capability::Motion);
    let ctl = DeviceController::new(&hw, SimDelay::new());
    hw.set_motion(true);
    assert_eq!(ctl.check_motion(), Ok(true));
}
