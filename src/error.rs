/// An error that can occur while reading bytes to decode.
#[non_exhaustive]
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadError<I> {
    /// An IO error occurred while reading from the underlying source.
    IO(I),
    /// The buffer is too small to read any bytes.
    BufferTooSmall,
}

impl<I> core::fmt::Display for ReadError<I>
where
    I: core::fmt::Display,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::IO(err) => write!(f, "IO error: {err}"),
            Self::BufferTooSmall => write!(f, "Buffer too small"),
        }
    }
}

impl<I> core::error::Error for ReadError<I> where I: core::fmt::Display + core::fmt::Debug {}

#[cfg(test)]
mod test {
    use std::format;

    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            format!("{}", ReadError::IO("broken pipe")),
            "IO error: broken pipe"
        );
        assert_eq!(
            format!("{}", ReadError::<&str>::BufferTooSmall),
            "Buffer too small"
        );
    }
}
