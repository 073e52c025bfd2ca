const WHITE: &str = "\x1B[38;2;255;255;255m█";
const BLACK: &str = "\x1B[38;2;0;0;0m█";

// UPC-A calls for a quiet zone of 9 modules on each side
const PADDING: usize = 9;
const HEIGHT: usize = 12;

/// Prints the barcode a few lines tall with a quiet zone, then the
/// human readable label centered underneath (if any).
pub fn display(pattern: &[bool], label: &str) {
    let width = pattern.len() + PADDING * 2;
    let quiet_row = str::repeat(WHITE, width);
    let margin = str::repeat(WHITE, PADDING);

    println!("{quiet_row}");
    for _ in 0..HEIGHT {
        print!("{margin}");
        for &bar in pattern {
            print!("{}", if bar { BLACK } else { WHITE });
        }
        println!("{margin}");
    }
    println!("{quiet_row}\x1B[0m");

    if !label.is_empty() {
        println!("{label:^width$}");
    }
}
