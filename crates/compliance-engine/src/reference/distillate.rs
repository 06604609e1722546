//! ISO 8217:2010 Table 1 — distillate marine fuels.
//!
//! Limits are kept as the free-text cells they appear as in the standard's
//! table; the limit grammar parser turns them into typed constraints at
//! table build time. Viscosity is at 40 degC, density at 15 degC.

use super::ReferenceRow;

pub const ROWS: &[ReferenceRow] = &[
    // DMX
    ReferenceRow { grade: "DMX", parameter: "Viscosity", limit: "1.400-5.500" },
    ReferenceRow { grade: "DMX", parameter: "Density", limit: "-" },
    ReferenceRow { grade: "DMX", parameter: "Sulphur", limit: "≤1.00" },
    ReferenceRow { grade: "DMX", parameter: "Flash Point", limit: "≥43" },
    ReferenceRow { grade: "DMX", parameter: "Cetane Index", limit: "≥45" },
    ReferenceRow { grade: "DMX", parameter: "Cloud Point", limit: "≤-16" },
    ReferenceRow { grade: "DMX", parameter: "Acid Number", limit: "≤0.5" },
    ReferenceRow { grade: "DMX", parameter: "Carbon Residue", limit: "≤0.30" },
    ReferenceRow { grade: "DMX", parameter: "Oxidation Stability", limit: "≤25" },
    ReferenceRow { grade: "DMX", parameter: "Ash", limit: "≤0.010" },
    ReferenceRow { grade: "DMX", parameter: "Lubricity", limit: "≤520" },
    // DMA
    ReferenceRow { grade: "DMA", parameter: "Viscosity", limit: "2.000-6.000" },
    ReferenceRow { grade: "DMA", parameter: "Density", limit: "≤890.0" },
    ReferenceRow { grade: "DMA", parameter: "Sulphur", limit: "≤1.50" },
    ReferenceRow { grade: "DMA", parameter: "Flash Point", limit: "≥60" },
    ReferenceRow { grade: "DMA", parameter: "Cetane Index", limit: "≥40" },
    ReferenceRow { grade: "DMA", parameter: "Pour Point", limit: "≤-6" },
    ReferenceRow { grade: "DMA", parameter: "Acid Number", limit: "≤0.5" },
    ReferenceRow { grade: "DMA", parameter: "Carbon Residue", limit: "≤0.30" },
    ReferenceRow { grade: "DMA", parameter: "Oxidation Stability", limit: "≤25" },
    ReferenceRow { grade: "DMA", parameter: "Ash", limit: "≤0.010" },
    ReferenceRow { grade: "DMA", parameter: "Lubricity", limit: "≤520" },
    // DMZ
    ReferenceRow { grade: "DMZ", parameter: "Viscosity", limit: "3.000-6.000" },
    ReferenceRow { grade: "DMZ", parameter: "Density", limit: "≤890.0" },
    ReferenceRow { grade: "DMZ", parameter: "Sulphur", limit: "≤1.50" },
    ReferenceRow { grade: "DMZ", parameter: "Flash Point", limit: "≥60" },
    ReferenceRow { grade: "DMZ", parameter: "Cetane Index", limit: "≥40" },
    ReferenceRow { grade: "DMZ", parameter: "Pour Point", limit: "≤-6" },
    ReferenceRow { grade: "DMZ", parameter: "Acid Number", limit: "≤0.5" },
    ReferenceRow { grade: "DMZ", parameter: "Carbon Residue", limit: "≤0.30" },
    ReferenceRow { grade: "DMZ", parameter: "Oxidation Stability", limit: "≤25" },
    ReferenceRow { grade: "DMZ", parameter: "Ash", limit: "≤0.010" },
    ReferenceRow { grade: "DMZ", parameter: "Lubricity", limit: "≤520" },
    // DMB
    ReferenceRow { grade: "DMB", parameter: "Viscosity", limit: "2.000-11.00" },
    ReferenceRow { grade: "DMB", parameter: "Density", limit: "≤900.0" },
    ReferenceRow { grade: "DMB", parameter: "Sulphur", limit: "≤2.00" },
    ReferenceRow { grade: "DMB", parameter: "Flash Point", limit: "≥60" },
    ReferenceRow { grade: "DMB", parameter: "Cetane Index", limit: "≥35" },
    ReferenceRow { grade: "DMB", parameter: "Pour Point", limit: "≤0" },
    ReferenceRow { grade: "DMB", parameter: "Acid Number", limit: "≤0.5" },
    ReferenceRow { grade: "DMB", parameter: "Carbon Residue", limit: "≤0.30" },
    ReferenceRow { grade: "DMB", parameter: "Water", limit: "≤0.30" },
    ReferenceRow { grade: "DMB", parameter: "Total Sediment", limit: "≤0.10" },
    ReferenceRow { grade: "DMB", parameter: "Ash", limit: "≤0.010" },
];
