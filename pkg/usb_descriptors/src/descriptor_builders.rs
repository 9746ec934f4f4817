use log::debug;

use crate::configuration::Configuration;
use crate::descriptor_set::ConfigurationSet;
use crate::error::{Error, ErrorKind, Result};

/// Builds the finished descriptor block for one configuration.
///
/// The callback provides the fully specified Configuration value. The
/// returned set holds a buffer of exactly Configuration::length() bytes with
/// the rendered tree in it. There is no way to grow or edit the set
/// afterwards: to change anything, rebuild the configuration and render a
/// new set.
pub fn build_configuration_set<F: FnOnce() -> Configuration>(
    make_configuration: F,
) -> Result<ConfigurationSet> {
    let configuration = make_configuration();

    if configuration.interfaces().len() > u8::MAX as usize {
        return Err(Error {
            kind: ErrorKind::TooManyInterfaces,
            message: format!(
                "{} interfaces do not fit in bNumInterfaces",
                configuration.interfaces().len()
            ),
        });
    }

    for (index, interface) in configuration.interfaces().iter().enumerate() {
        if interface.endpoints().len() > u8::MAX as usize {
            return Err(Error {
                kind: ErrorKind::TooManyEndpoints,
                message: format!(
                    "interface {} has {} endpoints which do not fit in bNumEndpoints",
                    index,
                    interface.endpoints().len()
                ),
            });
        }
    }

    let length = configuration.length();
    if length > u16::MAX as usize {
        return Err(Error {
            kind: ErrorKind::TotalLengthOverflow,
            message: format!(
                "total descriptor length {} does not fit in wTotalLength",
                length
            ),
        });
    }

    let mut data = vec![0u8; length];
    configuration.render(&mut data);

    debug!("rendered configuration descriptor set: {} bytes", length);

    Ok(ConfigurationSet::new(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::{Endpoint, EndpointDirection};
    use crate::interface::Interface;

    fn sample_configuration() -> Configuration {
        Configuration::new(
            1,
            3,
            false,
            false,
            100,
            vec![
                Interface::vendor_specific(
                    1,
                    vec![
                        Endpoint::bulk(EndpointDirection::Out, 1, 512),
                        Endpoint::interrupt(EndpointDirection::In, 1, 512, 1),
                    ],
                ),
                Interface::vendor_specific(
                    2,
                    vec![
                        Endpoint::bulk(EndpointDirection::Out, 1, 512),
                        Endpoint::bulk(EndpointDirection::In, 1, 512),
                        Endpoint::bulk(EndpointDirection::In, 2, 512),
                        Endpoint::bulk(EndpointDirection::In, 3, 512),
                    ],
                ),
            ],
        )
    }

    #[test]
    fn build_configuration_set_test() {
        let set = build_configuration_set(sample_configuration).unwrap();
        let bytes = set.as_bytes();

        assert_eq!(bytes.len(), 9 + (9 + 2 * 7) + (9 + 4 * 7));
        assert_eq!(
            u16::from_le_bytes([bytes[2], bytes[3]]) as usize,
            bytes.len()
        );
        assert_eq!(bytes[4], 2);
    }

    #[test]
    fn too_many_interfaces_test() {
        let err = build_configuration_set(|| {
            let interfaces = (0..256)
                .map(|_| Interface::vendor_specific(0, vec![]))
                .collect();
            Configuration::new(1, 0, false, false, 50, interfaces)
        })
        .unwrap_err();

        assert!(matches!(err.kind, ErrorKind::TooManyInterfaces));
    }

    #[test]
    fn too_many_endpoints_test() {
        let err = build_configuration_set(|| {
            let endpoints = (0..256)
                .map(|i| Endpoint::bulk(EndpointDirection::In, i as u8, 64))
                .collect();
            Configuration::new(
                1,
                0,
                false,
                false,
                50,
                vec![Interface::vendor_specific(0, endpoints)],
            )
        })
        .unwrap_err();

        assert!(matches!(err.kind, ErrorKind::TooManyEndpoints));
    }

    #[test]
    fn total_length_overflow_test() {
        // 37 interfaces of 255 endpoints each stay within the one-byte
        // counts but overflow the 16 bit total length.
        let err = build_configuration_set(|| {
            let interfaces = (0..37)
                .map(|_| {
                    let endpoints = (0..255)
                        .map(|i| Endpoint::bulk(EndpointDirection::In, i as u8, 64))
                        .collect();
                    Interface::vendor_specific(0, endpoints)
                })
                .collect();
            Configuration::new(1, 0, false, false, 50, interfaces)
        })
        .unwrap_err();

        assert!(matches!(err.kind, ErrorKind::TotalLengthOverflow));
    }
}
