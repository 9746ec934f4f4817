use alloc::vec::Vec;

use crate::descriptors::DescriptorType;
use crate::endpoint::Endpoint;

/// Single interface within a configuration along with all of its endpoints.
///
/// The interface number is not stored here: interfaces are implicitly
/// numbered by their position in the parent Configuration, so only the
/// parent can assign it (at render time).
#[derive(Clone)]
pub struct Interface {
    interface_class: u8,
    interface_sub_class: u8,
    interface_protocol: u8,
    string_identifier: u8,
    endpoints: Vec<Endpoint>,
}

impl Interface {
    // Size of the interface descriptor itself.
    //
    // Table 9-12 of USB2.0 Spec
    pub const DESCRIPTOR_LENGTH: usize = 9;

    pub fn new(
        interface_class: u8,
        interface_sub_class: u8,
        interface_protocol: u8,
        string_identifier: u8,
        endpoints: Vec<Endpoint>,
    ) -> Self {
        Self {
            interface_class,
            interface_sub_class,
            interface_protocol,
            string_identifier,
            endpoints,
        }
    }

    /// Interface implementing a vendor defined function: class, subclass and
    /// protocol are all 0xFF.
    pub fn vendor_specific(string_identifier: u8, endpoints: Vec<Endpoint>) -> Self {
        Self::new(0xFF, 0xFF, 0xFF, string_identifier, endpoints)
    }

    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    /// Number of bytes needed to store this interface descriptor and all of
    /// its endpoint descriptors.
    pub fn length(&self) -> usize {
        Self::DESCRIPTOR_LENGTH
            + self
                .endpoints
                .iter()
                .map(|endpoint| endpoint.length())
                .sum::<usize>()
    }

    /// Serializes this interface followed by each of its endpoints. `buffer`
    /// must be exactly length() bytes.
    ///
    /// Hosts associate endpoints with the interface descriptor that precedes
    /// them, so endpoints are rendered in declaration order.
    pub fn render(&self, buffer: &mut [u8], interface_number: u8) {
        assert_eq!(buffer.len(), self.length());

        buffer[0] = Self::DESCRIPTOR_LENGTH as u8;
        buffer[1] = DescriptorType::INTERFACE as u8;
        buffer[2] = interface_number;
        buffer[3] = 0; // bAlternateSetting, not supported
        buffer[4] = self.endpoints.len() as u8;
        buffer[5] = self.interface_class;
        buffer[6] = self.interface_sub_class;
        buffer[7] = self.interface_protocol;
        buffer[8] = self.string_identifier;

        let mut location = Self::DESCRIPTOR_LENGTH;
        for endpoint in &self.endpoints {
            let len = endpoint.length();
            endpoint.render(&mut buffer[location..(location + len)]);
            location += len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::EndpointDirection;

    #[test]
    fn interface_length_test() {
        let interface = Interface::new(
            0x08,
            0x06,
            0x50,
            0,
            vec![
                Endpoint::bulk(EndpointDirection::In, 1, 512),
                Endpoint::bulk(EndpointDirection::Out, 2, 512),
            ],
        );

        assert_eq!(interface.length(), 9 + 2 * 7);
    }

    #[test]
    fn interface_render_test() {
        let interface = Interface::new(
            0x08,
            0x06,
            0x50,
            4,
            vec![
                Endpoint::bulk(EndpointDirection::In, 1, 512),
                Endpoint::bulk(EndpointDirection::Out, 2, 512),
            ],
        );

        let mut buffer = vec![0u8; interface.length()];
        interface.render(&mut buffer, 3);

        assert_eq!(
            &buffer[0..9],
            &[0x09, 0x04, 0x03, 0x00, 0x02, 0x08, 0x06, 0x50, 0x04]
        );

        // Endpoints follow the header in declaration order.
        assert_eq!(buffer[9 + 2], 0x81);
        assert_eq!(buffer[16 + 2], 0x02);
    }

    #[test]
    fn vendor_specific_interface_test() {
        let interface = Interface::vendor_specific(2, vec![]);

        let mut buffer = vec![0u8; interface.length()];
        interface.render(&mut buffer, 0);

        assert_eq!(buffer.len(), 9);
        assert_eq!(&buffer[5..8], &[0xFF, 0xFF, 0xFF]);
        assert_eq!(buffer[4], 0);
        assert_eq!(buffer[8], 2);
    }
}
