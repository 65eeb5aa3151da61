// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! LaTeX rows for the capacity tables
//!
//! Each row builds one [`Configuration`], runs it, and formats the summary.

use crate::experiment::{run_configuration, Configuration, Result, ResultSummary, RunOptions};

/// Table 2.1: `(N, H, S0, w, G)` with fixed word size N
pub const TABLE21_ROWS: &[&[Table21Row]] = &[
    &[
        Table21Row::new(4, 4, 10, 1, 100.0),
        Table21Row::new(5, 4, 10, 1, 100.0),
        Table21Row::new(4, 4, 10, 2, 100.0),
        Table21Row::new(10, 10, 100, 4, 100.0),
        Table21Row::new(11, 10, 100, 4, 100.0),
        Table21Row::new(11, 10, 100, 5, 100.0),
        Table21Row::new(11, 10, 1000, 60, 100.0),
        Table21Row::new(11, 10, 10000, 600, 100.0),
        Table21Row::new(22, 20, 10000, 450, 100.0),
    ],
    &[
        Table21Row::new(10, 10, 100, 6, 1.5),
        Table21Row::new(11, 10, 1000, 15, 1.5),
        Table21Row::new(11, 10, 10000, 160, 1.5),
        Table21Row::new(14, 10, 10000, 10, 1.5),
    ],
];

/// Table 2.3: `(H, G, S0, R, w)` with density-driven words
pub const TABLE23_ROWS: &[&[Table23Row]] = &[
    &[
        Table23Row::new(30, 4.0, 10000, 303, 200),
        Table23Row::new(105, 4.0, 10000, 86, 70),
        Table23Row::new(40, 1.9, 10000, 250, 100),
    ],
    &[
        Table23Row::new(5, 3.6, 1000, 333, 300),
        Table23Row::new(10, 3.6, 1000, 111, 60),
        Table23Row::new(5, 1.9, 1000, 333, 300),
        Table23Row::new(15, 4.0, 1000, 66, 30),
    ],
    &[
        Table23Row::new(5, 3.6, 200, 57, 40),
        Table23Row::new(10, 4.0, 200, 20, 10),
        Table23Row::new(20, 1.9, 200, 12, 10),
    ],
];

/// Test words per trial for table rows
pub const TABLE_TEST_WORDS: usize = 5000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Table21Row {
    pub n: usize,
    pub h: u32,
    pub s0: usize,
    pub w: usize,
    pub g: f32,
}

impl Table21Row {
    pub const fn new(n: usize, h: u32, s0: usize, w: usize, g: f32) -> Self {
        Self { n, h, s0, w, g }
    }

    /// Single compartment, no delays, Q = S0/H
    pub fn configuration(&self, num_test_words: usize) -> Configuration {
        let h = self.h as f32;
        Configuration::default()
            .with_neuron_params(1, 1, 1, self.s0 as f64 / f64::from(h), self.g, h)
            .with_test_params(Some(self.n), None, self.w, num_test_words)
    }

    /// `pF% & N & H & S0 & w & G & L & L/S0 \\`
    pub fn format(&self, summary: &ResultSummary) -> String {
        format!(
            "\t{:.2} & {} & {} & {} & {} & {} & {:.1} & {:.2} \\\\",
            summary.pf.mean * 100.0,
            self.n,
            self.h,
            with_thousands(self.s0),
            self.w,
            self.g,
            summary.l.mean,
            summary.l.mean / self.s0 as f64
        )
    }

    pub fn run(&self, num_test_words: usize, options: &RunOptions) -> Result<String> {
        let results = run_configuration(&self.configuration(num_test_words), options)?;
        Ok(self.format(&results.summary()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Table23Row {
    pub h: u32,
    pub g: f32,
    pub s0: usize,
    pub r: u32,
    pub w: usize,
}

impl Table23Row {
    pub const fn new(h: u32, g: f32, s0: usize, r: u32, w: usize) -> Self {
        Self { h, g, s0, r, w }
    }

    /// Single compartment, no delays, Q = S0/(H·R), words drawn by density
    pub fn configuration(&self, num_test_words: usize) -> Configuration {
        let h = self.h as f32;
        let r = f64::from(self.r);
        Configuration::default()
            .with_neuron_params(1, 1, 1, self.s0 as f64 / (f64::from(h) * r), self.g, h)
            .with_test_params(None, Some(r), self.w, num_test_words)
    }

    /// `L & pF% & pL% & H & G & S0 & R & w \\`
    pub fn format(&self, summary: &ResultSummary) -> String {
        format!(
            "\t{:.1} & {:.2} & {:.2} & {} & {:.1} & {} & {} & {} \\\\",
            summary.l.mean,
            summary.pf.mean * 100.0,
            summary.pl.mean * 100.0,
            self.h,
            self.g,
            with_thousands(self.s0),
            self.r,
            self.w
        )
    }

    pub fn run(&self, num_test_words: usize, options: &RunOptions) -> Result<String> {
        let results = run_configuration(&self.configuration(num_test_words), options)?;
        Ok(self.format(&results.summary()))
    }
}

/// Banner printed above a table
pub fn table_header(name: &str) -> String {
    let title = format!("% {}. %", name);
    let rule = "%".repeat(title.len());
    format!("{}\n{}\n{}\n", rule, title, rule)
}

/// Separator between row groups
pub const MIDRULE: &str = "\t\\midrule";

/// One-configuration summary with both mean and standard deviation
pub fn format_summary(config: &Configuration, trials: usize, summary: &ResultSummary) -> String {
    format!(
        "S0={} H={} G={} C={} D1={} D2={} w={} trials={}\n\
         pL = {:.4} ± {:.4}\n\
         pF = {:.6} ± {:.6}\n\
         L  = {:.2} ± {:.2} bits",
        config.s0(),
        config.h,
        config.g,
        config.c,
        config.d1,
        config.d2,
        config.w,
        trials,
        summary.pl.mean,
        summary.pl.std,
        summary.pf.mean,
        summary.pf.std,
        summary.l.mean,
        summary.l.std
    )
}

/// `10000` -> `10,000`
pub fn with_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
