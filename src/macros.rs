/// Convenience macro to call [`maybe_next`](crate::functions::maybe_next) on a [`FramedRead`](crate::FramedRead).
#[macro_export]
macro_rules! maybe_next {
    ($framed:expr) => {{
        $crate::functions::maybe_next(
            &mut $framed.state,
            &mut $framed.decoder,
            &mut $framed.inner,
        )
        .await
    }};
}

/// Calls [`maybe_next!`](crate::maybe_next!) on a [`FramedRead`](crate::FramedRead) in a loop until an event is returned or an error occurs.
///
/// # Return value
///
/// - `Some(Ok(event))` if an event was decoded. Call `next` again to read more events.
/// - `Some(Err(error))` if an error occurred. The caller should stop reading.
/// - `None` if eof was reached. The caller should stop reading.
#[macro_export]
macro_rules! next {
    ($framed:expr) => {{
        'next: loop {
            match $crate::maybe_next!($framed) {
                Some(Ok(None)) => continue 'next,
                Some(Ok(Some(event))) => break 'next Some(Ok(event)),
                Some(Err(err)) => break 'next Some(Err(err)),
                None => break 'next None,
            }
        }
    }};
}
