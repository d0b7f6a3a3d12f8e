/// Records the invoking location as a [`CallSite`](crate::CallSite).
///
/// The function name is qualified with `module_path!()`, so the resulting
/// frame reports the enclosing module and the given name separately.
///
/// # Examples
///
/// ```
/// use trace_rail::{adapt_call_sites, call_site};
///
/// let trace = adapt_call_sites(&[call_site!("load")]).unwrap();
/// assert_eq!(trace.oldest().function(), "load");
/// assert_eq!(trace.oldest().lineno(), line!() - 2);
/// ```
#[macro_export]
macro_rules! call_site {
    ($name:literal) => {
        $crate::CallSite::new(concat!(module_path!(), ".", $name), file!(), line!())
    };
}
