#![allow(non_camel_case_types)]

// NOTE: All multi-byte fields in USB descriptors are little endian.

// This is used as the value of the bDescriptorType field present in every
// descriptor.
//
// Table 9-5 of USB2.0 Spec
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DescriptorType {
    DEVICE = 1,
    CONFIGURATION = 2,
    STRING = 3,
    INTERFACE = 4,
    ENDPOINT = 5,
    DEVICE_QUALIFIER = 6,
}

impl DescriptorType {
    pub fn from_value(value: u8) -> Option<Self> {
        Some(match value {
            1 => Self::DEVICE,
            2 => Self::CONFIGURATION,
            3 => Self::STRING,
            4 => Self::INTERFACE,
            5 => Self::ENDPOINT,
            6 => Self::DEVICE_QUALIFIER,
            _ => {
                return None;
            }
        })
    }
}

/// Writes a u16 into the buffer at the given offset in little endian byte
/// order. The caller guarantees that the 2 byte region is in bounds.
pub fn write_u16_le(buffer: &mut [u8], offset: usize, value: u16) {
    buffer[offset] = (value & 0xFF) as u8;
    buffer[offset + 1] = ((value >> 8) & 0xFF) as u8;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_u16_le_test() {
        let mut buffer = [0u8; 4];
        write_u16_le(&mut buffer, 1, 0x0403);
        assert_eq!(buffer, [0x00, 0x03, 0x04, 0x00]);

        write_u16_le(&mut buffer, 0, 0xFFFF);
        assert_eq!(buffer, [0xFF, 0xFF, 0x04, 0x00]);
    }

    #[test]
    fn descriptor_type_from_value_test() {
        assert_eq!(
            DescriptorType::from_value(2),
            Some(DescriptorType::CONFIGURATION)
        );
        assert_eq!(DescriptorType::from_value(5), Some(DescriptorType::ENDPOINT));
        assert_eq!(DescriptorType::from_value(0), None);
        assert_eq!(DescriptorType::from_value(7), None);
    }
}
