/*
 * Copyright (c) 2003-2023. Trevor Campbell and others.
 */

pub const SM_PER_NM: f64 = 1.15078;
pub const KM_PER_NM: f64 = 1.852;

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

pub fn nm_to_sm(nm: f64) -> f64 {
    nm * SM_PER_NM
}

pub fn nm_to_km(nm: f64) -> f64 {
    nm * KM_PER_NM
}
