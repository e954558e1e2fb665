// ============================================================================
// Basic Usage Example
// ============================================================================

use fixed_radix::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Fixed-Radix Example ===\n");

    // Radix conversion: one value, several bases
    let format = NumberFormat::decimal(8, 8);
    let value = FixedRadix::parse(format, "-46.625").unwrap();
    println!("Converting {} ({})", value, format);
    for base in [2, 8, 16, 36] {
        match value.with_base(base) {
            Ok(converted) => println!("  base {:>2}: {}", base, converted),
            Err(e) => println!("  base {:>2}: {}", base, e),
        }
    }

    // Expression evaluation: parse once, evaluate for several bindings
    println!("\n=== Expressions ===");
    let binding_format = NumberFormat::default();
    for input in ["2x+3", "2(x+1)", "x^3", "-1/2", "(x-1)(x+1)", "(2+"] {
        let expr = match parse(input) {
            Ok(expr) => expr,
            Err(e) => {
                println!("\n{:<12} rejected: {}", input, e);
                continue;
            },
        };

        println!("\n{:<12} postfix: {}", input, expr);
        for x in ["0", "1.5", "4"] {
            let x_value = FixedRadix::parse(binding_format, x).unwrap();
            match evaluate(&expr, &x_value) {
                Ok(result) => println!("  x = {:<4} -> {}", x, render(&result)),
                Err(e) => println!("  x = {:<4} -> error: {}", x, e),
            }
        }
    }

    // Operands must share a format
    println!("\n=== Format Mismatch ===");
    let a = FixedRadix::from_f64(NumberFormat::decimal(4, 2), 1.5);
    let b = FixedRadix::from_f64(NumberFormat::hexadecimal(4, 2), 1.5);
    match a.checked_add(&b) {
        Ok(sum) => println!("Sum: {}", sum),
        Err(e) => println!("Rejected: {}", e),
    }
}
