//! Static type effectiveness table
//!
//! Each row is authored independently from the defending side: `strong_against`
//! lists attacking types this type takes reduced damage from, `weak_against` lists
//! attacking types it takes extra damage from and `immune_to` lists attacking types
//! that do nothing. Rows need not agree with each other.

use super::Type;

/// One row of the effectiveness table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeRelations {
    pub kind: Type,
    pub strong_against: &'static [Type],
    pub weak_against: &'static [Type],
    pub immune_to: &'static [Type],
}

impl TypeRelations {
    const fn new(
        kind: Type,
        strong_against: &'static [Type],
        weak_against: &'static [Type],
        immune_to: &'static [Type],
    ) -> Self {
        Self {
            kind,
            strong_against,
            weak_against,
            immune_to,
        }
    }
}

use Type::*;

/// Indexed by `Type as usize`, so every type has exactly one row
#[rustfmt::skip]
pub static TYPE_EFFECTIVENESS: [TypeRelations; 18] = [
    TypeRelations::new(Normal,   &[], &[Fighting], &[Ghost]),
    TypeRelations::new(Fire,     &[Grass, Ice, Bug, Steel], &[Water, Rock, Ground], &[]),
    TypeRelations::new(Water,    &[Fire, Rock, Ground], &[Electric, Grass], &[]),
    TypeRelations::new(Grass,    &[Water, Rock, Ground], &[Fire, Ice, Flying, Bug], &[]),
    TypeRelations::new(Electric, &[Water, Flying], &[Ground], &[]),
    TypeRelations::new(Ice,      &[Grass, Ground, Flying, Dragon], &[Fire, Fighting, Rock, Steel], &[]),
    TypeRelations::new(Fighting, &[Normal, Ice, Rock, Dark, Steel], &[Flying, Psychic, Fairy], &[]),
    TypeRelations::new(Poison,   &[Grass, Fairy], &[Ground, Psychic], &[]),
    TypeRelations::new(Ground,   &[Fire, Electric, Poison, Rock, Steel], &[Water, Ice, Grass], &[Electric]),
    TypeRelations::new(Flying,   &[Grass, Fighting, Bug], &[Electric, Ice, Rock], &[Ground]),
    TypeRelations::new(Psychic,  &[Fighting, Poison], &[Bug, Ghost, Dark], &[]),
    TypeRelations::new(Bug,      &[Grass, Psychic, Dark], &[Fire, Flying, Rock], &[]),
    TypeRelations::new(Rock,     &[Fire, Ice, Flying, Bug], &[Water, Grass, Fighting, Ground, Steel], &[]),
    TypeRelations::new(Ghost,    &[Psychic, Ghost], &[Ghost, Dark], &[Normal, Fighting]),
    TypeRelations::new(Dragon,   &[Dragon], &[Ice, Dragon, Fairy], &[]),
    TypeRelations::new(Dark,     &[Psychic, Ghost], &[Fighting, Bug, Fairy], &[]),
    TypeRelations::new(Steel,    &[Ice, Rock, Fairy], &[Fire, Fighting, Ground], &[Poison]),
    TypeRelations::new(Fairy,    &[Fighting, Dragon, Dark], &[Poison, Steel], &[]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_follow_type_order() {
        for t in Type::all() {
            assert_eq!(t.relations().kind, *t);
        }
    }

    #[test]
    fn test_relations_lookup() {
        let water = Type::Water.relations();
        assert_eq!(water.strong_against, &[Fire, Rock, Ground]);
        assert_eq!(water.weak_against, &[Electric, Grass]);
        assert!(water.immune_to.is_empty());

        assert_eq!(Type::Ghost.relations().immune_to, &[Normal, Fighting]);
    }

    #[test]
    fn test_relations_are_not_symmetric() {
        // Ice shrugs off Ground, yet Ground lists Ice as a weakness
        assert!(Type::Ice.relations().strong_against.contains(&Ground));
        assert!(Type::Ground.relations().weak_against.contains(&Ice));
        assert!(!Type::Ground.relations().strong_against.contains(&Ice));
    }
}
