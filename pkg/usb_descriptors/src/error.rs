use alloc::string::String;

#[derive(Debug, Fail)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

#[derive(Debug)]
pub enum ErrorKind {
    /// The accumulated descriptor length does not fit in the 2-byte
    /// wTotalLength field.
    TotalLengthOverflow,

    /// A configuration has more interfaces than fit in bNumInterfaces.
    TooManyInterfaces,

    /// An interface has more endpoints than fit in bNumEndpoints.
    TooManyEndpoints,
}

pub type Result<T> = core::result::Result<T, Error>;
