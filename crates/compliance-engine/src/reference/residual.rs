//! ISO 8217:2010 Table 2 — residual marine fuels.
//!
//! Viscosity is at 50 degC, density at 15 degC. Sulphur for residual
//! grades is governed by statutory requirements (MARPOL Annex VI), which
//! the 2010 edition points to instead of a table value, hence the
//! placeholder cells.

use super::ReferenceRow;

pub const ROWS: &[ReferenceRow] = &[
    // RMA 10
    ReferenceRow { grade: "RMA10", parameter: "Viscosity", limit: "≤10.00" },
    ReferenceRow { grade: "RMA10", parameter: "Density", limit: "≤920.0" },
    ReferenceRow { grade: "RMA10", parameter: "CCAI", limit: "≤850" },
    ReferenceRow { grade: "RMA10", parameter: "Sulphur", limit: "-" },
    ReferenceRow { grade: "RMA10", parameter: "Flash Point", limit: "≥60" },
    ReferenceRow { grade: "RMA10", parameter: "Pour Point", limit: "≤6" },
    ReferenceRow { grade: "RMA10", parameter: "Carbon Residue", limit: "≤2.50" },
    ReferenceRow { grade: "RMA10", parameter: "Ash", limit: "≤0.040" },
    ReferenceRow { grade: "RMA10", parameter: "Water", limit: "≤0.30" },
    ReferenceRow { grade: "RMA10", parameter: "Total Sediment", limit: "≤0.10" },
    ReferenceRow { grade: "RMA10", parameter: "Vanadium", limit: "≤50" },
    ReferenceRow { grade: "RMA10", parameter: "Sodium", limit: "≤50" },
    ReferenceRow { grade: "RMA10", parameter: "Aluminium + Silicon", limit: "≤25" },
    ReferenceRow { grade: "RMA10", parameter: "Acid Number", limit: "≤2.5" },
    // RMB 30
    ReferenceRow { grade: "RMB30", parameter: "Viscosity", limit: "≤30.00" },
    ReferenceRow { grade: "RMB30", parameter: "Density", limit: "≤960.0" },
    ReferenceRow { grade: "RMB30", parameter: "CCAI", limit: "≤860" },
    ReferenceRow { grade: "RMB30", parameter: "Sulphur", limit: "-" },
    ReferenceRow { grade: "RMB30", parameter: "Flash Point", limit: "≥60" },
    ReferenceRow { grade: "RMB30", parameter: "Pour Point", limit: "≤6" },
    ReferenceRow { grade: "RMB30", parameter: "Carbon Residue", limit: "≤10.00" },
    ReferenceRow { grade: "RMB30", parameter: "Ash", limit: "≤0.070" },
    ReferenceRow { grade: "RMB30", parameter: "Water", limit: "≤0.50" },
    ReferenceRow { grade: "RMB30", parameter: "Total Sediment", limit: "≤0.10" },
    ReferenceRow { grade: "RMB30", parameter: "Vanadium", limit: "≤150" },
    ReferenceRow { grade: "RMB30", parameter: "Sodium", limit: "≤100" },
    ReferenceRow { grade: "RMB30", parameter: "Aluminium + Silicon", limit: "≤40" },
    ReferenceRow { grade: "RMB30", parameter: "Acid Number", limit: "≤2.5" },
    // RMD 80
    ReferenceRow { grade: "RMD80", parameter: "Viscosity", limit: "≤80.00" },
    ReferenceRow { grade: "RMD80", parameter: "Density", limit: "≤975.0" },
    ReferenceRow { grade: "RMD80", parameter: "CCAI", limit: "≤860" },
    ReferenceRow { grade: "RMD80", parameter: "Sulphur", limit: "-" },
    ReferenceRow { grade: "RMD80", parameter: "Flash Point", limit: "≥60" },
    ReferenceRow { grade: "RMD80", parameter: "Pour Point", limit: "≤30" },
    ReferenceRow { grade: "RMD80", parameter: "Carbon Residue", limit: "≤14.00" },
    ReferenceRow { grade: "RMD80", parameter: "Ash", limit: "≤0.070" },
    ReferenceRow { grade: "RMD80", parameter: "Water", limit: "≤0.50" },
    ReferenceRow { grade: "RMD80", parameter: "Total Sediment", limit: "≤0.10" },
    ReferenceRow { grade: "RMD80", parameter: "Vanadium", limit: "≤150" },
    ReferenceRow { grade: "RMD80", parameter: "Sodium", limit: "≤100" },
    ReferenceRow { grade: "RMD80", parameter: "Aluminium + Silicon", limit: "≤40" },
    ReferenceRow { grade: "RMD80", parameter: "Acid Number", limit: "≤2.5" },
    // RME 180
    ReferenceRow { grade: "RME180", parameter: "Viscosity", limit: "≤180.0" },
    ReferenceRow { grade: "RME180", parameter: "Density", limit: "≤991.0" },
    ReferenceRow { grade: "RME180", parameter: "CCAI", limit: "≤860" },
    ReferenceRow { grade: "RME180", parameter: "Sulphur", limit: "-" },
    ReferenceRow { grade: "RME180", parameter: "Flash Point", limit: "≥60" },
    ReferenceRow { grade: "RME180", parameter: "Pour Point", limit: "≤30" },
    ReferenceRow { grade: "RME180", parameter: "Carbon Residue", limit: "≤15.00" },
    ReferenceRow { grade: "RME180", parameter: "Ash", limit: "≤0.070" },
    ReferenceRow { grade: "RME180", parameter: "Water", limit: "≤0.50" },
    ReferenceRow { grade: "RME180", parameter: "Total Sediment", limit: "≤0.10" },
    ReferenceRow { grade: "RME180", parameter: "Vanadium", limit: "≤150" },
    ReferenceRow { grade: "RME180", parameter: "Sodium", limit: "≤50" },
    ReferenceRow { grade: "RME180", parameter: "Aluminium + Silicon", limit: "≤50" },
    ReferenceRow { grade: "RME180", parameter: "Acid Number", limit: "≤2.5" },
    // RMG 180 / 380 / 500 / 700
    ReferenceRow { grade: "RMG180", parameter: "Viscosity", limit: "≤180.0" },
    ReferenceRow { grade: "RMG180", parameter: "Density", limit: "≤991.0" },
    ReferenceRow { grade: "RMG180", parameter: "CCAI", limit: "≤870" },
    ReferenceRow { grade: "RMG180", parameter: "Sulphur", limit: "-" },
    ReferenceRow { grade: "RMG180", parameter: "Flash Point", limit: "≥60" },
    ReferenceRow { grade: "RMG180", parameter: "Pour Point", limit: "≤30" },
    ReferenceRow { grade: "RMG180", parameter: "Carbon Residue", limit: "≤18.00" },
    ReferenceRow { grade: "RMG180", parameter: "Ash", limit: "≤0.100" },
    ReferenceRow { grade: "RMG180", parameter: "Water", limit: "≤0.50" },
    ReferenceRow { grade: "RMG180", parameter: "Total Sediment", limit: "≤0.10" },
    ReferenceRow { grade: "RMG180", parameter: "Vanadium", limit: "≤350" },
    ReferenceRow { grade: "RMG180", parameter: "Sodium", limit: "≤100" },
    ReferenceRow { grade: "RMG180", parameter: "Aluminium + Silicon", limit: "≤60" },
    ReferenceRow { grade: "RMG180", parameter: "Acid Number", limit: "≤2.5" },
    ReferenceRow { grade: "RMG380", parameter: "Viscosity", limit: "≤380.0" },
    ReferenceRow { grade: "RMG380", parameter: "Density", limit: "≤991.0" },
    ReferenceRow { grade: "RMG380", parameter: "CCAI", limit: "≤870" },
    ReferenceRow { grade: "RMG380", parameter: "Sulphur", limit: "-" },
    ReferenceRow { grade: "RMG380", parameter: "Flash Point", limit: "≥60" },
    ReferenceRow { grade: "RMG380", parameter: "Pour Point", limit: "≤30" },
    ReferenceRow { grade: "RMG380", parameter: "Carbon Residue", limit: "≤18.00" },
    ReferenceRow { grade: "RMG380", parameter: "Ash", limit: "≤0.100" },
    ReferenceRow { grade: "RMG380", parameter: "Water", limit: "≤0.50" },
    ReferenceRow { grade: "RMG380", parameter: "Total Sediment", limit: "≤0.10" },
    ReferenceRow { grade: "RMG380", parameter: "Vanadium", limit: "≤350" },
    ReferenceRow { grade: "RMG380", parameter: "Sodium", limit: "≤100" },
    ReferenceRow { grade: "RMG380", parameter: "Aluminium + Silicon", limit: "≤60" },
    ReferenceRow { grade: "RMG380", parameter: "Acid Number", limit: "≤2.5" },
    ReferenceRow { grade: "RMG500", parameter: "Viscosity", limit: "≤500.0" },
    ReferenceRow { grade: "RMG500", parameter: "Density", limit: "≤991.0" },
    ReferenceRow { grade: "RMG500", parameter: "CCAI", limit: "≤870" },
    ReferenceRow { grade: "RMG500", parameter: "Sulphur", limit: "-" },
    ReferenceRow { grade: "RMG500", parameter: "Flash Point", limit: "≥60" },
    ReferenceRow { grade: "RMG500", parameter: "Pour Point", limit: "≤30" },
    ReferenceRow { grade: "RMG500", parameter: "Carbon Residue", limit: "≤18.00" },
    ReferenceRow { grade: "RMG500", parameter: "Ash", limit: "≤0.100" },
    ReferenceRow { grade: "RMG500", parameter: "Water", limit: "≤0.50" },
    ReferenceRow { grade: "RMG500", parameter: "Total Sediment", limit: "≤0.10" },
    ReferenceRow { grade: "RMG500", parameter: "Vanadium", limit: "≤350" },
    ReferenceRow { grade: "RMG500", parameter: "Sodium", limit: "≤100" },
    ReferenceRow { grade: "RMG500", parameter: "Aluminium + Silicon", limit: "≤60" },
    ReferenceRow { grade: "RMG500", parameter: "Acid Number", limit: "≤2.5" },
    ReferenceRow { grade: "RMG700", parameter: "Viscosity", limit: "≤700.0" },
    ReferenceRow { grade: "RMG700", parameter: "Density", limit: "≤991.0" },
    ReferenceRow { grade: "RMG700", parameter: "CCAI", limit: "≤870" },
    ReferenceRow { grade: "RMG700", parameter: "Sulphur", limit: "-" },
    ReferenceRow { grade: "RMG700", parameter: "Flash Point", limit: "≥60" },
    ReferenceRow { grade: "RMG700", parameter: "Pour Point", limit: "≤30" },
    ReferenceRow { grade: "RMG700", parameter: "Carbon Residue", limit: "≤18.00" },
    ReferenceRow { grade: "RMG700", parameter: "Ash", limit: "≤0.100" },
    ReferenceRow { grade: "RMG700", parameter: "Water", limit: "≤0.50" },
    ReferenceRow { grade: "RMG700", parameter: "Total Sediment", limit: "≤0.10" },
    ReferenceRow { grade: "RMG700", parameter: "Vanadium", limit: "≤350" },
    ReferenceRow { grade: "RMG700", parameter: "Sodium", limit: "≤100" },
    ReferenceRow { grade: "RMG700", parameter: "Aluminium + Silicon", limit: "≤60" },
    ReferenceRow { grade: "RMG700", parameter: "Acid Number", limit: "≤2.5" },
    // RMK 380 / 500 / 700
    ReferenceRow { grade: "RMK380", parameter: "Viscosity", limit: "≤380.0" },
    ReferenceRow { grade: "RMK380", parameter: "Density", limit: "≤1010.0" },
    ReferenceRow { grade: "RMK380", parameter: "CCAI", limit: "≤870" },
    ReferenceRow { grade: "RMK380", parameter: "Sulphur", limit: "-" },
    ReferenceRow { grade: "RMK380", parameter: "Flash Point", limit: "≥60" },
    ReferenceRow { grade: "RMK380", parameter: "Pour Point", limit: "≤30" },
    ReferenceRow { grade: "RMK380", parameter: "Carbon Residue", limit: "≤20.00" },
    ReferenceRow { grade: "RMK380", parameter: "Ash", limit: "≤0.150" },
    ReferenceRow { grade: "RMK380", parameter: "Water", limit: "≤0.50" },
    ReferenceRow { grade: "RMK380", parameter: "Total Sediment", limit: "≤0.10" },
    ReferenceRow { grade: "RMK380", parameter: "Vanadium", limit: "≤450" },
    ReferenceRow { grade: "RMK380", parameter: "Sodium", limit: "≤100" },
    ReferenceRow { grade: "RMK380", parameter: "Aluminium + Silicon", limit: "≤60" },
    ReferenceRow { grade: "RMK380", parameter: "Acid Number", limit: "≤2.5" },
    ReferenceRow { grade: "RMK500", parameter: "Viscosity", limit: "≤500.0" },
    ReferenceRow { grade: "RMK500", parameter: "Density", limit: "≤1010.0" },
    ReferenceRow { grade: "RMK500", parameter: "CCAI", limit: "≤870" },
    ReferenceRow { grade: "RMK500", parameter: "Sulphur", limit: "-" },
    ReferenceRow { grade: "RMK500", parameter: "Flash Point", limit: "≥60" },
    ReferenceRow { grade: "RMK500", parameter: "Pour Point", limit: "≤30" },
    ReferenceRow { grade: "RMK500", parameter: "Carbon Residue", limit: "≤20.00" },
    ReferenceRow { grade: "RMK500", parameter: "Ash", limit: "≤0.150" },
    ReferenceRow { grade: "RMK500", parameter: "Water", limit: "≤0.50" },
    ReferenceRow { grade: "RMK500", parameter: "Total Sediment", limit: "≤0.10" },
    ReferenceRow { grade: "RMK500", parameter: "Vanadium", limit: "≤450" },
    ReferenceRow { grade: "RMK500", parameter: "Sodium", limit: "≤100" },
    ReferenceRow { grade: "RMK500", parameter: "Aluminium + Silicon", limit: "≤60" },
    ReferenceRow { grade: "RMK500", parameter: "Acid Number", limit: "≤2.5" },
    ReferenceRow { grade: "RMK700", parameter: "Viscosity", limit: "≤700.0" },
    ReferenceRow { grade: "RMK700", parameter: "Density", limit: "≤1010.0" },
    ReferenceRow { grade: "RMK700", parameter: "CCAI", limit: "≤870" },
    ReferenceRow { grade: "RMK700", parameter: "Sulphur", limit: "-" },
    ReferenceRow { grade: "RMK700", parameter: "Flash Point", limit: "≥60" },
    ReferenceRow { grade: "RMK700", parameter: "Pour Point", limit: "≤30" },
    ReferenceRow { grade: "RMK700", parameter: "Carbon Residue", limit: "≤20.00" },
    ReferenceRow { grade: "RMK700", parameter: "Ash", limit: "≤0.150" },
    ReferenceRow { grade: "RMK700", parameter: "Water", limit: "≤0.50" },
    ReferenceRow { grade: "RMK700", parameter: "Total Sediment", limit: "≤0.10" },
    ReferenceRow { grade: "RMK700", parameter: "Vanadium", limit: "≤450" },
    ReferenceRow { grade: "RMK700", parameter: "Sodium", limit: "≤100" },
    ReferenceRow { grade: "RMK700", parameter: "Aluminium + Silicon", limit: "≤60" },
    ReferenceRow { grade: "RMK700", parameter: "Acid Number", limit: "≤2.5" },
];
