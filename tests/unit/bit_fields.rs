//! Unit tests for the generic bit-field accessors

use crate::common::{Operation, create_mock_driver};
use itg3200::registers::{
    self, ACTL, CLK_SEL, CONFIG_FIELDS, DLPF_CFG, FS_SEL, OPEN, RAW_RDY_EN, SLEEP,
};

const SENTINELS: [u8; 4] = [0x00, 0xFF, 0xA5, 0x5A];

#[test]
fn test_write_then_read_every_field() {
    for field in CONFIG_FIELDS {
        for sentinel in SENTINELS {
            // H_RESET reads back as 0, keep it out of the sentinel
            let sentinel = if field.reg == registers::PWR_MGM {
                sentinel & !0x80
            } else {
                sentinel
            };
            for value in 0..=field.mask {
                let (mut driver, interface) = create_mock_driver();
                interface.set_register(field.reg, sentinel);

                driver.write_field(field, value).unwrap();
                assert_eq!(driver.read_field(field).unwrap(), value & field.mask);

                // Bits outside the field keep the sentinel
                let outside = !field.register_mask();
                assert_eq!(
                    interface.get_register(field.reg) & outside,
                    sentinel & outside,
                    "field {:?} clobbered neighbouring bits",
                    field
                );
            }
        }
    }
}

#[test]
fn test_write_field_truncates_value() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(registers::DLPF_FS, 0b1110_0000);

    driver.write_field(DLPF_CFG, 0b1111_1010).unwrap();

    assert_eq!(driver.read_field(DLPF_CFG).unwrap(), 0b010);
    assert_eq!(interface.get_register(registers::DLPF_FS), 0b1110_0010);
}

#[test]
fn test_write_field_is_idempotent() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(registers::PWR_MGM, 0b0101_0000);

    driver.write_field(CLK_SEL, 0b011).unwrap();
    let first = interface.get_register(registers::PWR_MGM);
    for _ in 0..3 {
        driver.write_field(CLK_SEL, 0b011).unwrap();
        assert_eq!(driver.read_field(CLK_SEL).unwrap(), 0b011);
    }
    assert_eq!(interface.get_register(registers::PWR_MGM), first);
}

#[test]
fn test_set_bits_leaves_sentinel_bits() {
    for sentinel in SENTINELS {
        let (mut driver, interface) = create_mock_driver();
        interface.set_register(registers::INT_CFG, sentinel);

        driver.set_bits(RAW_RDY_EN).unwrap();

        let after = interface.get_register(registers::INT_CFG);
        assert_eq!(after, sentinel | 0b0000_0001);
    }
}

#[test]
fn test_clear_bits_leaves_sentinel_bits() {
    for sentinel in SENTINELS {
        let (mut driver, interface) = create_mock_driver();
        interface.set_register(registers::INT_CFG, sentinel);

        driver.clear_bits(OPEN).unwrap();

        let after = interface.get_register(registers::INT_CFG);
        assert_eq!(after, sentinel & !0b0100_0000);
    }
}

#[test]
fn test_set_bits_on_multi_bit_field() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(registers::DLPF_FS, 0b0000_0101);

    driver.set_bits(FS_SEL).unwrap();

    assert_eq!(interface.get_register(registers::DLPF_FS), 0b0001_1101);
}

#[test]
fn test_field_write_is_read_modify_write() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(registers::INT_CFG, 0x01);

    driver.write_field(ACTL, 1).unwrap();

    assert_eq!(
        interface.operations(),
        vec![
            Operation::Read {
                address: registers::INT_CFG,
                data: vec![0x01],
            },
            Operation::Write {
                address: registers::INT_CFG,
                data: vec![0x81],
            },
        ]
    );
}

#[test]
fn test_read_field_is_single_read() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(registers::PWR_MGM, 0b0100_0000);

    assert_eq!(driver.read_field(SLEEP).unwrap(), 1);
    assert_eq!(interface.operations().len(), 1);
    assert!(interface.writes().is_empty());
}
