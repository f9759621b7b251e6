use web_sys::{self};

use crate::types::Float;

// Helper function to log to the browser console
pub fn console_log(message: &str) {
    web_sys::console::log_1(&message.into());
}

/// Format and log. Goes to the browser console on wasm, stdout otherwise.
#[macro_export]
macro_rules! flog {
    ($($arg:tt)*) => {
        $crate::cfg_if::cfg_if! {
            if #[cfg(target_arch = "wasm32")] {
                $crate::util::console_log(&format!($($arg)*));
            } else {
                println!($($arg)*);
            }
        }
    };
}

pub fn assert_close(a: Float, b: Float, tol: Float) {
    assert!((a - b).abs() < tol, "{} != {}", a, b);
}

#[macro_export]
macro_rules! assert_close {
    ($left:expr, $right:expr, $tolerance:expr) => {
        let left = $left;
        let right = $right;
        let tol = $tolerance;
        let diff = (left - right).abs();
        if diff > tol {
            panic!(
                "assertion failed: {} ~= {} \
                (tolerance: {}, difference: {})",
                left, right, tol, diff
            );
        }
    };
}

#[macro_export]
macro_rules! assert_vec_close {
    ($left:expr, $right:expr, $tolerance:expr) => {
        let left = $left;
        let right = $right;
        let tol = $tolerance;
        for (a, b) in left.iter().zip(right.iter()) {
            $crate::assert_close!(a, b, tol);
        }
    };
}
