use alloc::vec::Vec;

use crate::descriptors::{write_u16_le, DescriptorType};
use crate::interface::Interface;

/// Complete set of interfaces a device presents under one configuration.
///
/// Rendering produces the configuration descriptor followed by every
/// interface and endpoint descriptor attached to it: the exact block a host
/// requests with GET_DESCRIPTOR during enumeration.
#[derive(Clone)]
pub struct Configuration {
    configuration_number: u8,
    string_identifier: u8,
    self_powered: bool,
    remote_wakeup: bool,
    max_power_2ma: u8,
    interfaces: Vec<Interface>,
}

impl Configuration {
    // Size of the configuration descriptor itself.
    //
    // Table 9-10 of USB2.0 Spec
    pub const DESCRIPTOR_LENGTH: usize = 9;

    /// `max_power_2ma` is the maximum bus current draw in 2mA units.
    pub fn new(
        configuration_number: u8,
        string_identifier: u8,
        self_powered: bool,
        remote_wakeup: bool,
        max_power_2ma: u8,
        interfaces: Vec<Interface>,
    ) -> Self {
        Self {
            configuration_number,
            string_identifier,
            self_powered,
            remote_wakeup,
            max_power_2ma,
            interfaces,
        }
    }

    pub fn interfaces(&self) -> &[Interface] {
        &self.interfaces
    }

    /// Number of bytes needed to store this configuration descriptor and
    /// every interface and endpoint descriptor below it.
    pub fn length(&self) -> usize {
        Self::DESCRIPTOR_LENGTH
            + self
                .interfaces
                .iter()
                .map(|interface| interface.length())
                .sum::<usize>()
    }

    /// Serializes the whole configuration tree. `buffer` must be exactly
    /// length() bytes.
    ///
    /// Interfaces receive sequential 0-based numbers in declaration order.
    /// wTotalLength is written last, once the final cursor position is
    /// known.
    pub fn render(&self, buffer: &mut [u8]) {
        assert_eq!(buffer.len(), self.length());

        buffer[0] = Self::DESCRIPTOR_LENGTH as u8;
        buffer[1] = DescriptorType::CONFIGURATION as u8;
        // buffer[2..4] is wTotalLength: backpatched below after all children
        // have been rendered.
        buffer[4] = self.interfaces.len() as u8;
        buffer[5] = self.configuration_number;
        buffer[6] = self.string_identifier;

        let mut attributes: u8 = 1 << 7; // reserved, must be set
        if self.self_powered {
            attributes |= 1 << 6;
        }
        if self.remote_wakeup {
            attributes |= 1 << 5;
        }
        buffer[7] = attributes;

        buffer[8] = self.max_power_2ma;

        let mut location = Self::DESCRIPTOR_LENGTH;
        for (index, interface) in self.interfaces.iter().enumerate() {
            let len = interface.length();
            interface.render(&mut buffer[location..(location + len)], index as u8);
            location += len;
        }

        // The cursor must land exactly where length() said it would and the
        // total must fit wTotalLength. Anything else would hand the host an
        // unusable descriptor block.
        assert_eq!(location, buffer.len());
        assert!(location <= u16::MAX as usize);
        write_u16_le(buffer, 2, location as u16);
    }
}
