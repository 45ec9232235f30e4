extern crate fastlog;

use fastlog::{approx_log2, approx_ln};

fn main() {
    let x = 1.2345_f32;

    let reference = x.log2();
    let approx = approx_log2(x);
    println!("std: {} approx_log2: {} error: {}",
             reference, approx, (reference - approx).abs());

    let reference = x.ln();
    let approx = approx_ln(x);
    println!("std: {} approx_ln: {} error: {}",
             reference, approx, (reference - approx).abs());
}
