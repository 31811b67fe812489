#![allow(non_snake_case)]
use RustedCalculus::Examples::calculus_examples::calculus_examples;
use RustedCalculus::Utils::logger::init_logger;

fn main() {
    let example = 0;
    if let Err(e) = init_logger("info", false) {
        eprintln!("{}", e);
    }
    match example {
        0 => {
            // k(ax+b)^n: notation, derivative, integral, exact and symbolic values
            calculus_examples(0);
        }
        1 => {
            // k cos(ax+b): special angles in degrees
            calculus_examples(1);
        }
        2 => {
            // 1/(ax+b) and the logarithm
            calculus_examples(2);
        }
        3 => {
            // functions read from a task document
            calculus_examples(3);
        }
        4 => {
            // successive derivatives saved into csv
            calculus_examples(4);
        }
        _ => {
            for i in 0..5 {
                calculus_examples(i);
            }
        }
    }
}
