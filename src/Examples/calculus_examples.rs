// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_snake_case)]

use crate::Utils::logger::save_steps_to_csv;
use crate::Utils::task_parser::parse_task_document;
use crate::symbolic::calculus_errors::CalculusError;
use crate::symbolic::elementary::{ElementaryFunction, ElementaryOps};
use crate::symbolic::fraction::Fraction;
use crate::symbolic::function_options::FunctionOptions;
use crate::symbolic::power_fn::PowerFn;
use crate::symbolic::term::Term;
use crate::symbolic::trig_fn::TrigFn;
use crate::symbolic::trig_values::Angle;
use log::{error, info};

#[allow(dead_code)]
pub fn calculus_examples(example: usize) {
    let result = match example {
        0 => power_walkthrough(),
        1 => trig_walkthrough(),
        2 => ln_walkthrough(),
        3 => task_document_session(),
        4 => steps_to_csv(),
        _ => {
            println!("no example with number {}", example);
            Ok(())
        }
    };
    if let Err(e) = result {
        error!("example {} failed: {}", example, e);
    }
}

fn power_walkthrough() -> Result<(), CalculusError> {
    // f = 1/2 (2x + 1)^3
    let f = PowerFn::new(
        FunctionOptions::new()
            .a(2)
            .b(1)
            .n(3)
            .coeff(Fraction::new(1, 2)?),
    )?;
    println!("f = {}", f);
    println!("f' = {}", f.derivative());
    println!("F = {}", f.integral()?);
    println!("f(1) = {}", f.value_at(1)?);
    // the same function at a symbolic point 3y
    println!(
        "f(3y) = {}",
        f.algebraic_value_at(&Term::new(Fraction::from(3), "y"))?
    );
    println!("int_0^1 f dx = {}", f.definite_integral(0, 1)?);
    println!(
        "int_0^t f dx = {}",
        f.definite_integral(0, Term::new(Fraction::one(), "t"))?
    );
    // lossy closure for numerics
    let numeric = f.to_number_function();
    println!("f(0.5) ~ {}", numeric(0.5));
    Ok(())
}

fn trig_walkthrough() -> Result<(), CalculusError> {
    let g = TrigFn::cos(FunctionOptions::new().a(2).coeff(3))?;
    println!("g = {}", g);
    println!("g' = {}", g.derivative());
    println!("G = {}", g.integral());
    // argument in degrees
    println!("g(15) = {}", g.value_at(15)?);
    println!(
        "int_0^(pi/4) g dx = {}",
        g.definite_integral(0, Angle::from_pi_multiple(Fraction::new(1, 4)?))?
    );
    match g.value_at(10) {
        Ok(value) => println!("g(10) = {}", value),
        Err(e) => println!("g(10) has no exact form: {}", e),
    }
    let numeric = g.to_number_function();
    println!("g(pi/8 rad) ~ {}", numeric(std::f64::consts::PI / 8.0));
    Ok(())
}

fn ln_walkthrough() -> Result<(), CalculusError> {
    // 1/(x + 2) has no power antiderivative
    let r = PowerFn::new(FunctionOptions::new().b(2).n(-1))?;
    if let Err(e) = r.integral() {
        println!("integral of {}: {}", r, e);
    }
    let log = r.ln_integral()?;
    println!("ln integral of {} = {}", r, log);
    println!("ln value at 1 = {}", log.value_at(1)?);
    println!("d/dx {} = {}", log, log.derivative());
    println!("int_0^4 r dx = {}", r.ln_definite_integral(0, 4)?);
    // bounds enclosing x = -2 are refused
    if let Err(e) = r.ln_definite_integral(-3, 0) {
        println!("int_-3^0 r dx: {}", e);
    }
    Ok(())
}

fn task_document_session() -> Result<(), CalculusError> {
    let input = "// exercises
f1
kind: power a: 2 b: 1 n: 3 coeff: 1/2
g
kind: cos
a: 1 b: 30 variable: t
h
kind: power b: 2 n: -1
";
    let functions = parse_task_document(input)?;
    for (title, f) in &functions {
        println!("{}: {} = {}", title, f.kind_name(), f);
        println!("  derivative: {}", f.differentiate());
        match f.integrate() {
            Ok(integral) => println!("  integral: {}", integral),
            Err(e) => println!("  integral: {}", e),
        }
        match f.definite_integrate(&Fraction::zero(), &Fraction::from(30)) {
            Ok(value) => println!("  definite integral 0..30: {}", value),
            Err(e) => println!("  definite integral 0..30: {}", e),
        }
    }
    Ok(())
}

fn steps_to_csv() -> Result<(), CalculusError> {
    let f: ElementaryFunction = PowerFn::new(FunctionOptions::new().b(2).n(4))?.into();
    let mut steps = vec![("f".to_string(), f.latex())];
    let mut current = f.clone();
    for k in 1..=4 {
        current = current.differentiate();
        steps.push((format!("d{}f", k), current.latex()));
    }
    steps.push(("F".to_string(), f.integrate()?.latex()));
    let filename = "calculus_steps.csv";
    save_steps_to_csv(&steps, filename)
        .map_err(|e| CalculusError::InvalidArgument(format!("cannot write {}: {}", filename, e)))?;
    info!("{} steps saved to {}", steps.len(), filename);
    Ok(())
}
