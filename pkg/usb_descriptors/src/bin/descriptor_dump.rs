// Builds the descriptor block for a sample two-interface vendor device and
// dumps it as hex. Useful for eyeballing the exact bytes a host would see.

use usb_descriptors::{
    build_configuration_set, Configuration, Endpoint, EndpointDirection, Interface,
};

fn main() -> usb_descriptors::Result<()> {
    let set = build_configuration_set(|| {
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
    })?;

    for (i, byte) in set.as_bytes().iter().enumerate() {
        if i % 8 == 0 {
            if i != 0 {
                println!();
            }
        } else {
            print!(" ");
        }

        print!("{:02X}", byte);
    }
    println!();

    Ok(())
}
