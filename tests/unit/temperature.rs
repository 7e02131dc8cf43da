//! Unit tests for temperature sensor functionality

use crate::common::test_utils::assert_float_eq;
use crate::common::{Operation, create_started_driver};
use itg3200::registers::TEMP_OUT_H;

#[test]
fn test_temperature_reference_point() {
    let (mut driver, interface) = create_started_driver();

    // Formula: 35 + (raw + 13200) / 280, so -13200 is exactly 35 °C
    interface.set_temperature_data(-13200);

    let temp = driver.read_temperature_celsius().unwrap();
    assert_eq!(temp, 35.0);
}

#[test]
fn test_temperature_zero_raw() {
    let (mut driver, interface) = create_started_driver();
    interface.set_temperature_data(0);

    let temp = driver.read_temperature_celsius().unwrap();

    // 35 + 13200 / 280 = 82.142857...
    assert_float_eq(temp, 35.0 + 13200.0 / 280.0, 1e-4);
}

#[test]
fn test_temperature_room() {
    let (mut driver, interface) = create_started_driver();

    // 25 °C -> raw = (25 - 35) * 280 - 13200 = -16000
    interface.set_temperature_data(-16000);

    let temp = driver.read_temperature_celsius().unwrap();
    assert_float_eq(temp, 25.0, 1e-4);
}

#[test]
fn test_temperature_extremes() {
    let (mut driver, interface) = create_started_driver();

    interface.set_temperature_data(i16::MIN);
    let low = driver.read_temperature_celsius().unwrap();
    assert_float_eq(low, 35.0 + (-32768.0 + 13200.0) / 280.0, 1e-3);

    interface.set_temperature_data(i16::MAX);
    let high = driver.read_temperature_celsius().unwrap();
    assert_float_eq(high, 35.0 + (32767.0 + 13200.0) / 280.0, 1e-3);
}

#[test]
fn test_temperature_raw_is_big_endian_word() {
    let (mut driver, interface) = create_started_driver();
    interface.set_registers(TEMP_OUT_H, &[0xCC, 0x70]);

    assert_eq!(driver.read_temperature().unwrap(), -13200);
    assert_eq!(
        interface.operations(),
        vec![Operation::Read {
            address: TEMP_OUT_H,
            data: vec![0xCC, 0x70],
        }]
    );
}
