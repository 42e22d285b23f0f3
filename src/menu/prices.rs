use std::fmt::Display;

use rust_decimal::Decimal;
use rusty_money::{iso, Money};

/// A euro amount. Serializes as the plain decimal amount so the report stays
/// locale-neutral; `Display` uses the currency's own formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eur(Money<'static, iso::Currency>);

impl Eur {
    pub fn from_amount(amount: Decimal) -> Self {
        Self(Money::from_decimal(amount, iso::EUR))
    }

    pub fn amount(&self) -> Decimal {
        *self.0.amount()
    }
}

impl Display for Eur {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl serde::Serialize for Eur {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.amount(), serializer)
    }
}

/// Per-audience prices for one meal. Every slot stays unset until the price
/// line yields a valid token count.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize)]
pub struct Prices {
    students: Option<Eur>,
    researcher_students: Option<Eur>,
    staff: Option<Eur>,
    others: Option<Eur>,
}

impl Prices {
    /// Assigns amounts to audiences by token count. One price covers every
    /// audience; with more tokens the student price comes first and the rest
    /// get progressively more expensive. Counts outside 1..=4 leave every
    /// slot unset.
    pub fn from_amounts(amounts: &[Decimal]) -> Self {
        let eur = |d: Decimal| Some(Eur::from_amount(d));
        match *amounts {
            [all] => Self {
                students: eur(all),
                researcher_students: eur(all),
                staff: eur(all),
                others: eur(all),
            },
            [students, rest] => Self {
                students: eur(students),
                researcher_students: eur(rest),
                staff: eur(rest),
                others: eur(rest),
            },
            [students, researchers, rest] => Self {
                students: eur(students),
                researcher_students: eur(researchers),
                staff: eur(rest),
                others: eur(rest),
            },
            [students, researchers, staff, others] => Self {
                students: eur(students),
                researcher_students: eur(researchers),
                staff: eur(staff),
                others: eur(others),
            },
            _ => Self::default(),
        }
    }

    pub const fn students(&self) -> Option<&Eur> {
        self.students.as_ref()
    }

    pub const fn researcher_students(&self) -> Option<&Eur> {
        self.researcher_students.as_ref()
    }

    pub const fn staff(&self) -> Option<&Eur> {
        self.staff.as_ref()
    }

    pub const fn others(&self) -> Option<&Eur> {
        self.others.as_ref()
    }
}

/// Coarse price class derived from the student price. Unica publishes no
/// named price ranges, so these mirror the ranges of the student union
/// cafes. Meaningful only when the price line actually assigned prices; an
/// unset price line classifies as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum PriceTier {
    Other,
    Normal,
    Deli,
    Special,
}

impl PriceTier {
    pub fn from_student_price(student: Decimal) -> Self {
        if student < Decimal::new(280, 2) {
            Self::Other
        } else if student < Decimal::new(330, 2) {
            Self::Normal
        } else if student < Decimal::new(570, 2) {
            Self::Deli
        } else {
            Self::Special
        }
    }
}

impl Display for PriceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Other => "Other",
            Self::Normal => "Normal",
            Self::Deli => "Deli",
            Self::Special => "Special",
        };
        write!(f, "{label}")
    }
}
