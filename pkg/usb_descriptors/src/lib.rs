// Builders for the binary USB descriptors that a device reports to the host
// during enumeration.
//
// The configuration descriptor is sent back to the host together with all of
// the interface and endpoint descriptors attached to it, which is why they
// are packaged up into a single buffer here. Each node knows its own
// serialized length, so the size of the full block can be computed before a
// single byte is written.
//
// This is a partial implementation, no support for:
//
//  - ideally, the USB standard interface classes, subclasses and protocols
//    would be supported using strong types built on the underlying types here
//  - building string descriptors, but you can specify the index where used.
//  - no support for alternate setting interfaces
//  - Only Bulk and Interrupt endpoint specialisations; other kinds can still
//    be created directly with Endpoint::new.
//  - Interfaces are implicitly numbered, not manually numbered.
//  - Doesn't create a device or device qualifier descriptor.

#![no_std]

#[cfg(feature = "std")]
#[macro_use]
extern crate std;

#[cfg(feature = "alloc")]
#[macro_use]
extern crate alloc;

#[cfg(feature = "alloc")]
#[macro_use]
extern crate failure;

#[cfg(feature = "alloc")]
mod configuration;
#[cfg(feature = "alloc")]
mod descriptor_builders;
#[cfg(feature = "alloc")]
mod descriptor_set;
pub mod descriptors;
mod endpoint;
#[cfg(feature = "alloc")]
mod error;
#[cfg(feature = "alloc")]
mod interface;

#[cfg(feature = "alloc")]
pub use configuration::Configuration;
#[cfg(feature = "alloc")]
pub use descriptor_builders::build_configuration_set;
#[cfg(feature = "alloc")]
pub use descriptor_set::ConfigurationSet;
pub use endpoint::{
    Endpoint, EndpointDirection, EndpointSynchronisation, EndpointTransfer, EndpointUsage,
};
#[cfg(feature = "alloc")]
pub use error::{Error, ErrorKind, Result};
#[cfg(feature = "alloc")]
pub use interface::Interface;
