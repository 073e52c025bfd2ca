mod utils;

use std::time::{SystemTime, UNIX_EPOCH};
use upca::UpcA;

fn main() {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before 1970")
        .as_secs() as u32;

    let mut upc = UpcA::new(true);
    upc.generate_num(seconds);

    utils::display(upc.pattern(), upc.text());
}
