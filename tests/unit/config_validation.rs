//! Unit tests for gyroscope configuration

use crate::common::{create_mock_driver, create_started_driver};
use itg3200::registers::{DLPF_FS, PWR_MGM, SMPLRT_DIV};
use itg3200::{FullScaleRange, GyroConfig, LowPassFilter};

#[test]
fn test_begin_sequence() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(SMPLRT_DIV, 0x42);
    interface.set_register(DLPF_FS, 0b0000_0011);

    driver.begin().unwrap();

    // Reset first, then divider, then full scale
    assert_eq!(
        interface.writes(),
        vec![(PWR_MGM, 0x80), (SMPLRT_DIV, 0x00), (DLPF_FS, 0b0001_1011)]
    );
    assert_eq!(interface.reset_count(), 1);

    // DLPF bits survive the full scale write
    assert_eq!(driver.low_pass_filter().unwrap(), LowPassFilter::Hz42);
    assert_eq!(driver.full_scale().unwrap(), FullScaleRange::Dps2000);
    assert_eq!(driver.sample_rate_divider().unwrap(), 0);
}

#[test]
fn test_sample_rate_divider_round_trip() {
    let (mut driver, interface) = create_started_driver();

    for divider in [0u8, 1, 7, 99, 255] {
        driver.set_sample_rate_divider(divider).unwrap();
        assert_eq!(driver.sample_rate_divider().unwrap(), divider);
        assert_eq!(interface.get_register(SMPLRT_DIV), divider);
    }
}

#[test]
fn test_low_pass_filter_round_trip() {
    let (mut driver, _interface) = create_started_driver();

    for filter in [
        LowPassFilter::Hz256,
        LowPassFilter::Hz188,
        LowPassFilter::Hz98,
        LowPassFilter::Hz42,
        LowPassFilter::Hz20,
        LowPassFilter::Hz10,
        LowPassFilter::Hz5,
    ] {
        driver.set_low_pass_filter(filter).unwrap();
        assert_eq!(driver.low_pass_filter().unwrap(), filter);
        // Full scale is untouched
        assert_eq!(driver.full_scale().unwrap(), FullScaleRange::Dps2000);
    }
}

#[test]
fn test_reserved_encodings_pass_through() {
    let (mut driver, interface) = create_started_driver();

    driver.set_low_pass_filter(LowPassFilter::Reserved(7)).unwrap();
    assert_eq!(
        driver.low_pass_filter().unwrap(),
        LowPassFilter::Reserved(7)
    );

    driver.set_full_scale(FullScaleRange::Reserved(0)).unwrap();
    assert_eq!(driver.full_scale().unwrap(), FullScaleRange::Reserved(0));
    assert_eq!(interface.get_register(DLPF_FS), 0b0000_0111);
}

#[test]
fn test_configure_gyroscope() {
    let (mut driver, interface) = create_started_driver();
    interface.set_register(DLPF_FS, 0b1110_0000);

    let config = GyroConfig {
        full_scale: FullScaleRange::Dps2000,
        dlpf: LowPassFilter::Hz20,
        sample_rate_div: 9,
    };
    driver.configure_gyroscope(config).unwrap();

    assert_eq!(interface.get_register(SMPLRT_DIV), 9);
    // Upper reserved bits preserved, FS_SEL = 3, DLPF_CFG = 4
    assert_eq!(interface.get_register(DLPF_FS), 0b1111_1100);
    assert_eq!(driver.read_gyroscope_config().unwrap(), config);
    assert!((config.sample_rate_hz() - 100.0).abs() < 0.001);
}

#[test]
fn test_configure_gyroscope_single_dlpf_write() {
    let (mut driver, interface) = create_started_driver();

    driver.configure_gyroscope(GyroConfig::default()).unwrap();

    let dlpf_writes = interface
        .writes()
        .into_iter()
        .filter(|(address, _)| *address == DLPF_FS)
        .count();
    assert_eq!(dlpf_writes, 1);
}

#[test]
fn test_default_config_matches_begin() {
    let (mut driver, _interface) = create_started_driver();

    assert_eq!(driver.read_gyroscope_config().unwrap(), GyroConfig::default());
}
