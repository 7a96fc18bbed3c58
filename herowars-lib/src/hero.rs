//! The hero table schema.

use crate::column::{Column, ColumnGroup, Columns};

pub const HERO: &str = "Hero";
pub const IMAGE: &str = "Image";
pub const ROLE: &str = "Role";
pub const ATTACK_TYPE: &str = "AttackType";

/// Numeric stat columns as `(accessor, header)`, in display order.
pub const STATS: [(&str, &str); 12] = [
    ("Power", "Power"),
    ("Intelligence", "Intelligence"),
    ("Agility", "Agility"),
    ("Health", "Health"),
    ("Armor", "Armor"),
    ("Strength", "Strength"),
    ("MagicAttack", "Magic attack"),
    ("PhysicalAttack", "Physical attack"),
    ("MagicDefense", "Magic defense"),
    ("ArmorPenetration", "Armor penetration"),
    ("Dodge", "Dodge"),
    ("CriticalHitChance", "Critical hit chance"),
];

/// Columns of the hero table: one "Heros" group over name, role, attack
/// type, and every stat.
///
/// The name filters fuzzily, role and attack type by picking an observed
/// value, and every stat by numeric range.
pub fn hero_columns() -> Columns {
    let mut columns = vec![
        Column::new(HERO, "Name").fuzzy(),
        Column::new(ROLE, "Role").select(),
        Column::new(ATTACK_TYPE, "AttackType").select(),
    ];
    columns.extend(
        STATS
            .iter()
            .map(|(accessor, header)| Column::new(*accessor, *header).range()),
    );
    Columns::new(vec![ColumnGroup::new("Heros", columns)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::FilterControl;

    #[test]
    fn test_hero_columns() {
        let columns = hero_columns();
        assert_eq!(columns.len(), 15);
        assert_eq!(columns.groups()[0].header, "Heros");

        let headers: Vec<&str> = columns.iter().map(|c| c.header.as_str()).collect();
        assert_eq!(headers[0], "Name");
        assert_eq!(headers[14], "Critical hit chance");

        let control = |accessor: &str| {
            columns
                .get(accessor)
                .and_then(|c| c.filter.as_ref())
                .map(|f| f.control)
        };
        assert_eq!(control("Hero"), Some(FilterControl::Text));
        assert_eq!(control("Role"), Some(FilterControl::Select));
        assert_eq!(control("MagicDefense"), Some(FilterControl::Range));
    }
}
