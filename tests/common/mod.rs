#![allow(dead_code)]

use rand::Rng;
use std::fs::File;
use std::io::Error;
use std::path::Path;

pub const HEADER: [&str; 5] = ["method", "vpa", "card_number", "expiry_month", "expiry_year"];

/// Appends a Luhn check digit to `prefix`, padding with random digits up to `len`.
pub fn luhn_valid_number(prefix: &str, len: usize) -> String {
    let mut rng = rand::thread_rng();
    let mut digits: Vec<u32> = prefix.chars().filter_map(|c| c.to_digit(10)).collect();
    while digits.len() < len - 1 {
        digits.push(rng.gen_range(0..10));
    }

    // The check digit sits at position 0 from the right, so payload doubling
    // starts with the rightmost payload digit.
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 0 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();
    digits.push((10 - sum % 10) % 10);

    digits
        .iter()
        .map(|d| char::from_digit(*d, 10).unwrap_or('0'))
        .collect()
}

pub fn generate_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    wtr.write_record(HEADER)?;

    for i in 0..rows {
        if i % 2 == 0 {
            wtr.write_record(["upi", &format!("user{i}@bank"), "", "", ""])?;
        } else {
            let number = luhn_valid_number("4", 16);
            wtr.write_record(["card", "", &number, "12", "2099"])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
