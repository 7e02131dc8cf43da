//! End-to-end driver session against the mock register map

use crate::common::test_utils::assert_float_eq;
use crate::common::{RecordingDelay, create_mock_driver};
use itg3200::registers::{DLPF_FS, INT_CFG, PWR_MGM, SMPLRT_DIV};
use itg3200::{
    AxisOffsets, ClockSource, FullScaleRange, GyroConfig, InterruptConfig, LowPassFilter,
};

#[test]
fn test_complete_session() {
    let (mut driver, interface) = create_mock_driver();

    // Identity and init
    assert_eq!(driver.read_who_am_i().unwrap(), 0x68);
    driver.begin().unwrap();
    assert_eq!(interface.reset_count(), 1);
    assert_eq!(driver.full_scale().unwrap(), FullScaleRange::Dps2000);

    // Configure for 100 Hz output with a 42 Hz filter, PLL on gyro X
    let config = GyroConfig {
        full_scale: FullScaleRange::Dps2000,
        dlpf: LowPassFilter::Hz42,
        sample_rate_div: 9,
    };
    driver.configure_gyroscope(config).unwrap();
    driver.set_clock_source(ClockSource::PllGyroX).unwrap();
    driver
        .configure_interrupts(&InterruptConfig::data_ready_only())
        .unwrap();

    assert_eq!(interface.get_register(SMPLRT_DIV), 9);
    assert_eq!(interface.get_register(DLPF_FS), 0b0001_1011);
    assert_eq!(interface.get_register(PWR_MGM), 0b0000_0001);
    assert_eq!(interface.get_register(INT_CFG), 0b0000_0001);
    assert_float_eq(driver.read_gyroscope_config().unwrap().sample_rate_hz(), 100.0, 1e-3);

    // Calibrate against a stationary bias, then sample
    let mut bias = vec![[12, -8, 3]; 5];
    bias.push([12 + 14375, -8, 3 - 14375]);
    interface.set_gyro_sequence(bias);

    let mut delay = RecordingDelay::default();
    let offsets = driver.calibrate(4, 10, &mut delay).unwrap();
    assert_eq!(offsets, AxisOffsets { x: -12, y: 8, z: -3 });
    assert_eq!(delay.ms_calls, vec![10; 4]);

    let rate = driver.read_angular_velocity().unwrap();
    assert_float_eq(rate.x, 1000.0, 1e-3);
    assert_float_eq(rate.y, 0.0, 1e-6);
    assert_float_eq(rate.z, -1000.0, 1e-3);

    interface.set_temperature_data(-13200);
    assert_eq!(driver.read_temperature_celsius().unwrap(), 35.0);

    // Session end hands the interface back with its state intact
    let released = driver.release();
    assert_eq!(released.get_register(SMPLRT_DIV), 9);
}

#[test]
fn test_sleep_and_wake() {
    let (mut driver, interface) = create_mock_driver();
    driver.begin().unwrap();

    driver.set_sleep(true).unwrap();
    assert!(driver.read_power_status().unwrap().sleep);

    driver.set_sleep(false).unwrap();
    driver.set_clock_source(ClockSource::PllGyroZ).unwrap();

    let status = driver.read_power_status().unwrap();
    assert!(!status.sleep);
    assert_eq!(status.clock_source, ClockSource::PllGyroZ);
    assert_eq!(interface.get_register(PWR_MGM), 0b0000_0011);
}
