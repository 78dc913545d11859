//! Static catalog of the 118 chemical elements
//!
//! Each record carries the grid placement used by the periodic table view:
//! period and group for main-table elements, and a separate row/column for
//! the lanthanide and actinide series, which render below the main grid.

/// Which table row an element renders on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockRow {
    /// Main table, placed by (period, group)
    Main,
    /// Lanthanide series row, placed by block column
    Lanthanide,
    /// Actinide series row, placed by block column
    Actinide,
}

/// One immutable element record.
///
/// `group` is 1..=18 for main-table elements and for La/Lu/Ac/Lr (which
/// anchor group 3 from their own series row); 0 means "f-block, no group".
/// `block_col` is only meaningful off the main table.
#[derive(Debug, Clone, Copy)]
pub struct ElementRecord {
    pub z: u32,
    pub symbol: &'static str,
    pub name: &'static str,
    pub period: u8,
    pub group: u8,
    pub block_row: BlockRow,
    pub block_col: u8,
}

const fn el(
    z: u32,
    symbol: &'static str,
    name: &'static str,
    period: u8,
    group: u8,
    block_row: BlockRow,
    block_col: u8,
) -> ElementRecord {
    ElementRecord {
        z,
        symbol,
        name,
        period,
        group,
        block_row,
        block_col,
    }
}

use BlockRow::{Actinide, Lanthanide, Main};

/// All 118 elements in atomic-number order.
pub static ELEMENTS: [ElementRecord; 118] = [
    el(1, "H", "Hydrogen", 1, 1, Main, 0),
    el(2, "He", "Helium", 1, 18, Main, 0),
    el(3, "Li", "Lithium", 2, 1, Main, 0),
    el(4, "Be", "Beryllium", 2, 2, Main, 0),
    el(5, "B", "Boron", 2, 13, Main, 0),
    el(6, "C", "Carbon", 2, 14, Main, 0),
    el(7, "N", "Nitrogen", 2, 15, Main, 0),
    el(8, "O", "Oxygen", 2, 16, Main, 0),
    el(9, "F", "Fluorine", 2, 17, Main, 0),
    el(10, "Ne", "Neon", 2, 18, Main, 0),
    el(11, "Na", "Sodium", 3, 1, Main, 0),
    el(12, "Mg", "Magnesium", 3, 2, Main, 0),
    el(13, "Al", "Aluminium", 3, 13, Main, 0),
    el(14, "Si", "Silicon", 3, 14, Main, 0),
    el(15, "P", "Phosphorus", 3, 15, Main, 0),
    el(16, "S", "Sulfur", 3, 16, Main, 0),
    el(17, "Cl", "Chlorine", 3, 17, Main, 0),
    el(18, "Ar", "Argon", 3, 18, Main, 0),
    el(19, "K", "Potassium", 4, 1, Main, 0),
    el(20, "Ca", "Calcium", 4, 2, Main, 0),
    el(21, "Sc", "Scandium", 4, 3, Main, 0),
    el(22, "Ti", "Titanium", 4, 4, Main, 0),
    el(23, "V", "Vanadium", 4, 5, Main, 0),
    el(24, "Cr", "Chromium", 4, 6, Main, 0),
    el(25, "Mn", "Manganese", 4, 7, Main, 0),
    el(26, "Fe", "Iron", 4, 8, Main, 0),
    el(27, "Co", "Cobalt", 4, 9, Main, 0),
    el(28, "Ni", "Nickel", 4, 10, Main, 0),
    el(29, "Cu", "Copper", 4, 11, Main, 0),
    el(30, "Zn", "Zinc", 4, 12, Main, 0),
    el(31, "Ga", "Gallium", 4, 13, Main, 0),
    el(32, "Ge", "Germanium", 4, 14, Main, 0),
    el(33, "As", "Arsenic", 4, 15, Main, 0),
    el(34, "Se", "Selenium", 4, 16, Main, 0),
    el(35, "Br", "Bromine", 4, 17, Main, 0),
    el(36, "Kr", "Krypton", 4, 18, Main, 0),
    el(37, "Rb", "Rubidium", 5, 1, Main, 0),
    el(38, "Sr", "Strontium", 5, 2, Main, 0),
    el(39, "Y", "Yttrium", 5, 3, Main, 0),
    el(40, "Zr", "Zirconium", 5, 4, Main, 0),
    el(41, "Nb", "Niobium", 5, 5, Main, 0),
    el(42, "Mo", "Molybdenum", 5, 6, Main, 0),
    el(43, "Tc", "Technetium", 5, 7, Main, 0),
    el(44, "Ru", "Ruthenium", 5, 8, Main, 0),
    el(45, "Rh", "Rhodium", 5, 9, Main, 0),
    el(46, "Pd", "Palladium", 5, 10, Main, 0),
    el(47, "Ag", "Silver", 5, 11, Main, 0),
    el(48, "Cd", "Cadmium", 5, 12, Main, 0),
    el(49, "In", "Indium", 5, 13, Main, 0),
    el(50, "Sn", "Tin", 5, 14, Main, 0),
    el(51, "Sb", "Antimony", 5, 15, Main, 0),
    el(52, "Te", "Tellurium", 5, 16, Main, 0),
    el(53, "I", "Iodine", 5, 17, Main, 0),
    el(54, "Xe", "Xenon", 5, 18, Main, 0),
    el(55, "Cs", "Caesium", 6, 1, Main, 0),
    el(56, "Ba", "Barium", 6, 2, Main, 0),
    // Lanthanide series, rendered on its own row under group 3
    el(57, "La", "Lanthanum", 6, 3, Lanthanide, 0),
    el(58, "Ce", "Cerium", 6, 0, Lanthanide, 1),
    el(59, "Pr", "Praseodymium", 6, 0, Lanthanide, 2),
    el(60, "Nd", "Neodymium", 6, 0, Lanthanide, 3),
    el(61, "Pm", "Promethium", 6, 0, Lanthanide, 4),
    el(62, "Sm", "Samarium", 6, 0, Lanthanide, 5),
    el(63, "Eu", "Europium", 6, 0, Lanthanide, 6),
    el(64, "Gd", "Gadolinium", 6, 0, Lanthanide, 7),
    el(65, "Tb", "Terbium", 6, 0, Lanthanide, 8),
    el(66, "Dy", "Dysprosium", 6, 0, Lanthanide, 9),
    el(67, "Ho", "Holmium", 6, 0, Lanthanide, 10),
    el(68, "Er", "Erbium", 6, 0, Lanthanide, 11),
    el(69, "Tm", "Thulium", 6, 0, Lanthanide, 12),
    el(70, "Yb", "Ytterbium", 6, 0, Lanthanide, 13),
    el(71, "Lu", "Lutetium", 6, 3, Lanthanide, 14),
    el(72, "Hf", "Hafnium", 6, 4, Main, 0),
    el(73, "Ta", "Tantalum", 6, 5, Main, 0),
    el(74, "W", "Tungsten", 6, 6, Main, 0),
    el(75, "Re", "Rhenium", 6, 7, Main, 0),
    el(76, "Os", "Osmium", 6, 8, Main, 0),
    el(77, "Ir", "Iridium", 6, 9, Main, 0),
    el(78, "Pt", "Platinum", 6, 10, Main, 0),
    el(79, "Au", "Gold", 6, 11, Main, 0),
    el(80, "Hg", "Mercury", 6, 12, Main, 0),
    el(81, "Tl", "Thallium", 6, 13, Main, 0),
    el(82, "Pb", "Lead", 6, 14, Main, 0),
    el(83, "Bi", "Bismuth", 6, 15, Main, 0),
    el(84, "Po", "Polonium", 6, 16, Main, 0),
    el(85, "At", "Astatine", 6, 17, Main, 0),
    el(86, "Rn", "Radon", 6, 18, Main, 0),
    el(87, "Fr", "Francium", 7, 1, Main, 0),
    el(88, "Ra", "Radium", 7, 2, Main, 0),
    // Actinide series, rendered on its own row under group 3
    el(89, "Ac", "Actinium", 7, 3, Actinide, 0),
    el(90, "Th", "Thorium", 7, 0, Actinide, 1),
    el(91, "Pa", "Protactinium", 7, 0, Actinide, 2),
    el(92, "U", "Uranium", 7, 0, Actinide, 3),
    el(93, "Np", "Neptunium", 7, 0, Actinide, 4),
    el(94, "Pu", "Plutonium", 7, 0, Actinide, 5),
    el(95, "Am", "Americium", 7, 0, Actinide, 6),
    el(96, "Cm", "Curium", 7, 0, Actinide, 7),
    el(97, "Bk", "Berkelium", 7, 0, Actinide, 8),
    el(98, "Cf", "Californium", 7, 0, Actinide, 9),
    el(99, "Es", "Einsteinium", 7, 0, Actinide, 10),
    el(100, "Fm", "Fermium", 7, 0, Actinide, 11),
    el(101, "Md", "Mendelevium", 7, 0, Actinide, 12),
    el(102, "No", "Nobelium", 7, 0, Actinide, 13),
    el(103, "Lr", "Lawrencium", 7, 3, Actinide, 14),
    el(104, "Rf", "Rutherfordium", 7, 4, Main, 0),
    el(105, "Db", "Dubnium", 7, 5, Main, 0),
    el(106, "Sg", "Seaborgium", 7, 6, Main, 0),
    el(107, "Bh", "Bohrium", 7, 7, Main, 0),
    el(108, "Hs", "Hassium", 7, 8, Main, 0),
    el(109, "Mt", "Meitnerium", 7, 9, Main, 0),
    el(110, "Ds", "Darmstadtium", 7, 10, Main, 0),
    el(111, "Rg", "Roentgenium", 7, 11, Main, 0),
    el(112, "Cn", "Copernicium", 7, 12, Main, 0),
    el(113, "Nh", "Nihonium", 7, 13, Main, 0),
    el(114, "Fl", "Flerovium", 7, 14, Main, 0),
    el(115, "Mc", "Moscovium", 7, 15, Main, 0),
    el(116, "Lv", "Livermorium", 7, 16, Main, 0),
    el(117, "Ts", "Tennessine", 7, 17, Main, 0),
    el(118, "Og", "Oganesson", 7, 18, Main, 0),
];

pub const ELEMENT_COUNT: usize = 118;

impl ElementRecord {
    /// Group label for info overlays: the group number, or "f-block".
    pub fn group_label(&self) -> String {
        if self.group > 0 {
            self.group.to_string()
        } else {
            "f-block".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_complete_and_ordered() {
        assert_eq!(ELEMENTS.len(), ELEMENT_COUNT);
        for (i, e) in ELEMENTS.iter().enumerate() {
            assert_eq!(e.z, i as u32 + 1, "record {} out of order", e.symbol);
            assert!((1..=7).contains(&e.period), "{} period", e.symbol);
            assert!(e.group <= 18, "{} group", e.symbol);
        }
    }

    #[test]
    fn group_zero_only_on_series_rows() {
        for e in &ELEMENTS {
            match e.block_row {
                BlockRow::Main => assert!(e.group >= 1, "{} needs a group", e.symbol),
                BlockRow::Lanthanide | BlockRow::Actinide => {
                    // La/Lu and Ac/Lr anchor group 3 from their series row
                    if e.group != 0 {
                        assert_eq!(e.group, 3, "{}", e.symbol);
                        assert!(e.block_col == 0 || e.block_col == 14, "{}", e.symbol);
                    }
                }
            }
        }
    }

    #[test]
    fn series_rows_hold_fifteen_each() {
        let lanth = ELEMENTS
            .iter()
            .filter(|e| e.block_row == BlockRow::Lanthanide)
            .count();
        let act = ELEMENTS
            .iter()
            .filter(|e| e.block_row == BlockRow::Actinide)
            .count();
        assert_eq!(lanth, 15);
        assert_eq!(act, 15);
    }

    #[test]
    fn spot_checks() {
        assert_eq!(ELEMENTS[0].symbol, "H");
        assert_eq!(ELEMENTS[78].name, "Gold");
        assert_eq!(ELEMENTS[117].symbol, "Og");
    }

    #[test]
    fn group_labels() {
        // Iron sits in group 8; uranium has no group of its own
        assert_eq!(ELEMENTS[25].group_label(), "8");
        assert_eq!(ELEMENTS[91].group_label(), "f-block");
    }
}
