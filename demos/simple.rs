mod utils;

use upca::UpcA;

fn main() {
    let mut upc = UpcA::new(true);
    upc.generate_ascii("03600029145");

    utils::display(upc.pattern(), upc.text());
}
