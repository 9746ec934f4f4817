use crate::descriptors::{write_u16_le, DescriptorType};

/// Direction of an endpoint as encoded in bit 7 of its bEndpointAddress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointDirection {
    /// Host to device.
    Out = 0,

    /// Device to host.
    In = 1 << 7,
}

// Transfer type in bits 1:0 of an endpoint's bmAttributes.
//
// Table 9-13 of USB2.0 Spec
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointTransfer {
    Control = 0b00,
    Isochronous = 0b01,
    Bulk = 0b10,
    Interrupt = 0b11,
}

// Synchronisation type in bits 3:2 of an endpoint's bmAttributes. Only
// meaningful for isochronous endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointSynchronisation {
    None = 0b00 << 2,
    Asynchronous = 0b01 << 2,
    Adaptive = 0b10 << 2,
    Synchronous = 0b11 << 2,
}

// Usage type in bits 5:4 of an endpoint's bmAttributes. Only meaningful for
// isochronous endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointUsage {
    Data = 0b00 << 4,
    Feedback = 0b01 << 4,
    ImplicitFeedback = 0b10 << 4,
}

/// Single endpoint attached to an interface. Serializes to a fixed 7 byte
/// descriptor record.
#[derive(Clone, Copy)]
pub struct Endpoint {
    direction: EndpointDirection,
    address: u8,
    transfer: EndpointTransfer,
    synchronisation: EndpointSynchronisation,
    usage: EndpointUsage,
    max_packet_size: u16,
    interval: u8,
}

impl Endpoint {
    pub const DESCRIPTOR_LENGTH: usize = 7;

    /// Creates an endpoint with full control over every field.
    ///
    /// Addresses above 15 don't exist on the bus, so the value is truncated
    /// to its low 4 bits rather than rejected.
    pub fn new(
        direction: EndpointDirection,
        address: u8,
        transfer: EndpointTransfer,
        synchronisation: EndpointSynchronisation,
        usage: EndpointUsage,
        max_packet_size: u16,
        interval: u8,
    ) -> Self {
        Self {
            direction,
            address: address & 0x0F, // max endpoint = 15
            transfer,
            synchronisation,
            usage,
            max_packet_size,
            interval,
        }
    }

    /// Bulk endpoint with the usual defaults: no synchronisation, data
    /// usage and no polling interval.
    pub fn bulk(direction: EndpointDirection, address: u8, max_packet_size: u16) -> Self {
        Self::new(
            direction,
            address,
            EndpointTransfer::Bulk,
            EndpointSynchronisation::None,
            EndpointUsage::Data,
            max_packet_size,
            0,
        )
    }

    /// Interrupt endpoint polled by the host every `interval` frames.
    pub fn interrupt(
        direction: EndpointDirection,
        address: u8,
        max_packet_size: u16,
        interval: u8,
    ) -> Self {
        Self::new(
            direction,
            address,
            EndpointTransfer::Interrupt,
            EndpointSynchronisation::None,
            EndpointUsage::Data,
            max_packet_size,
            interval,
        )
    }

    /// Number of bytes render() will produce.
    pub fn length(&self) -> usize {
        Self::DESCRIPTOR_LENGTH
    }

    /// Serializes this endpoint. `buffer` must be exactly length() bytes.
    pub fn render(&self, buffer: &mut [u8]) {
        assert_eq!(buffer.len(), Self::DESCRIPTOR_LENGTH);

        buffer[0] = Self::DESCRIPTOR_LENGTH as u8;
        buffer[1] = DescriptorType::ENDPOINT as u8;
        buffer[2] = self.direction as u8 | self.address;
        buffer[3] = self.transfer as u8 | self.synchronisation as u8 | self.usage as u8;
        write_u16_le(buffer, 4, self.max_packet_size);
        buffer[6] = self.interval;
    }
}
