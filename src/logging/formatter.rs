/// Formats a byte slice as a list of `0xHH` values.
#[cfg_attr(
    not(any(feature = "log", feature = "defmt", feature = "tracing")),
    allow(dead_code)
)]
pub(crate) struct Formatter<'a>(pub &'a [u8]);

impl core::fmt::Debug for Formatter<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[")?;

        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }

            write!(f, "0x{byte:02X}")?;
        }

        write!(f, "]")
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Formatter<'_> {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=[u8]:#04x}", self.0)
    }
}
