//! Convenience macros for working with KNX addresses.

/// Creates a [`GroupAddress`](crate::addressing::GroupAddress) from 3-level notation.
///
/// The `ga!` macro provides a clean syntax for group address literals using
/// the familiar KNX 3-level notation (main/middle/sub).
///
/// # Syntax
///
/// ```text
/// ga!(main/middle/sub)
/// ```
///
/// Where:
/// - `main`: Main group (0-31)
/// - `middle`: Middle group (0-7)
/// - `sub`: Sub group (0-255)
///
/// # Examples
///
/// ```
/// use knx_tp::ga;
///
/// let temp_sensor = ga!(1/2/10);
/// let light_switch = ga!(2/1/5);
///
/// assert_eq!(temp_sensor.to_text(), "1/2/10");
/// ```
///
/// # Compile-Time Validation
///
/// The macro validates address components at compile time:
///
/// ```compile_fail
/// // This will fail to compile: main group > 31
/// let addr = knx_tp::ga!(32/0/0);
/// ```
///
/// ```compile_fail
/// // This will fail to compile: middle group > 7
/// let addr = knx_tp::ga!(1/8/0);
/// ```
#[macro_export]
macro_rules! ga {
    ($main:literal / $middle:literal / $sub:literal) => {{
        // Compile-time validation
        const _: () = {
            if $main > 31 {
                panic!("Main group must be 0-31");
            }
            if $middle > 7 {
                panic!("Middle group must be 0-7");
            }
            if $sub > 255 {
                panic!("Sub group must be 0-255");
            }
        };

        // 5 bits main, 3 bits middle, 8 bits sub
        const RAW: u16 = (($main & 0x1F) << 11) | (($middle & 0x07) << 8) | ($sub & 0xFF);
        $crate::addressing::GroupAddress::from(RAW)
    }};
}
