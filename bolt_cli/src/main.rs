//! # BoltGroup CLI Application
//!
//! Terminal front-end for bolt group checks. Prompts for a pattern, the
//! applied loads, and a bolt selection, then prints the force distribution
//! results with the combined interaction check.
//!
//! All numeric parsing lives here; the engine itself only sees well-formed
//! values.

use std::io::{self, BufRead, Write};

use bolt_core::calculations::bolt_group::{calculate, BoltGroupInput};
use bolt_core::catalog;
use bolt_core::geometry::Arrangement;
use bolt_core::loads::LoadSet;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_string(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn main() {
    println!("BoltGroup CLI - Bolt Group Force Distribution");
    println!("=============================================");
    println!();

    let pattern = prompt_string("Pattern [R]ectangular or [C]ircular [R]: ", "R");

    let arrangement = if pattern.eq_ignore_ascii_case("c") {
        let diameter_mm = prompt_f64("Pitch circle diameter (mm) [400.0]: ", 400.0);
        let num_bolts = prompt_u32("Number of bolts [8]: ", 8);
        Arrangement::Circular { diameter_mm, num_bolts }
    } else {
        let num_rows = prompt_u32("Number of rows [4]: ", 4);
        let num_cols = prompt_u32("Number of columns [4]: ", 4);
        let row_spacing_mm = prompt_f64("Row spacing (mm) [150.0]: ", 150.0);
        let col_spacing_mm = prompt_f64("Column spacing (mm) [160.0]: ", 160.0);
        Arrangement::Rectangular { num_rows, num_cols, row_spacing_mm, col_spacing_mm }
    };

    println!();
    let loads = LoadSet::new()
        .with_shear(
            prompt_f64("Horizontal shear Vx (kN) [20.0]: ", 20.0),
            prompt_f64("Vertical shear Vy (kN) [5.0]: ", 5.0),
        )
        .with_torsion(prompt_f64("Torsion Tb (kNm) [10.0]: ", 10.0))
        .with_moments(
            prompt_f64("Major-axis moment Mb (kNm) [50.0]: ", 50.0),
            prompt_f64("Minor-axis moment Mm (kNm) [10.0]: ", 10.0),
        )
        .with_axial(prompt_f64("Axial force Nt, tension +ve (kN) [10.0]: ", 10.0));

    println!();
    println!("Available grades: {}", catalog::list_grades().join(", "));
    let grade = prompt_string("Bolt grade [Grade 8.8]: ", "Grade 8.8");
    let sizes = catalog::list_sizes(&grade);
    if !sizes.is_empty() {
        println!("Available sizes: {}", sizes.join(", "));
    }
    let size = prompt_string("Bolt size [M24]: ", "M24");
    let prying_allowance = prompt_f64("Prying allowance (>= 1.0) [1.1]: ", 1.1);

    let input = BoltGroupInput {
        label: "CLI-Demo".to_string(),
        arrangement,
        loads,
        grade,
        size,
        prying_allowance,
    };

    println!();
    match calculate(&input) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  BOLT GROUP RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Group:");
            println!("  Bolts:    {} ({} {})", result.bolt_count, result.grade, result.size);
            println!("  Ibp:      {:.0}", result.polar_moment);
            println!();
            println!("Demand (governing bolt):");
            println!("  V_max = {:.2} kN", result.max_shear_kn);
            println!("  N_max = {:.2} kN", result.max_tension_kn);
            println!("  fv = {:.1} MPa, ft = {:.1} MPa", result.shear_stress_mpa, result.tensile_stress_mpa);
            println!();
            println!("Capacity:");
            println!("  φVf  = {:.1} kN", result.shear_capacity_kn);
            println!("  φNtf = {:.1} kN", result.tension_capacity_kn);
            println!();
            println!("Interaction:");
            println!("  (V/φVf)² + (N/φNtf)² = {:.3} {}",
                result.combined_ratio,
                status_icon(result.passes())
            );
            println!();
            println!("═══════════════════════════════════════");
            println!("  RESULT: {}", if result.passes() { "PASS" } else { "FAIL" });
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}
