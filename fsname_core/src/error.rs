use std::error;
use std::fmt;
use std::io;
use std::str;

#[derive(Debug)]
pub enum FsNameError {
    Io(io::Error),
    Decode(str::Utf8Error),
    Config(toml::de::Error),
}

impl fmt::Display for FsNameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FsNameError::Io(ref err) => write!(f, "IO error: {}", err),
            FsNameError::Decode(ref err) => write!(f, "decode error: {}", err),
            FsNameError::Config(ref err) => write!(f, "config error: {}", err),
        }
    }
}

impl error::Error for FsNameError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            FsNameError::Io(ref err) => Some(err),
            FsNameError::Decode(ref err) => Some(err),
            FsNameError::Config(ref err) => Some(err),
        }
    }
}

impl From<io::Error> for FsNameError {
    fn from(err: io::Error) -> Self {
        FsNameError::Io(err)
    }
}

impl From<str::Utf8Error> for FsNameError {
    fn from(err: str::Utf8Error) -> Self {
        FsNameError::Decode(err)
    }
}

impl From<toml::de::Error> for FsNameError {
    fn from(err: toml::de::Error) -> Self {
        FsNameError::Config(err)
    }
}

#[test]
fn decode_error_display() {
    let bytes = [0x66u8, 0x6f, 0xff];
    let err: FsNameError = str::from_utf8(&bytes).unwrap_err().into();
    assert!(err.to_string().starts_with("decode error:"));
    assert!(error::Error::source(&err).is_some());
}
