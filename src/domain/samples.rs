//! Sample recipes: a pizza built from dough, sauce and cheese.

use crate::domain::comida::{Comida, Items};

/// Dough: `farinha`, 2 `ovo`, 4 `sal`.
pub fn massa() -> Comida {
    Comida::with_items(
        "massa",
        ["farinha", "ovo", "ovo", "sal", "sal", "sal", "sal"],
    )
}

/// Sauce: 2 `tomate`, `cebola`, `alho`, `sal`.
pub fn molho() -> Comida {
    Comida::with_items("molho", ["tomate", "tomate", "cebola", "alho", "sal"])
}

/// `massa` without salt, three portions of `molho`, and 2 `queijo`.
pub fn pizza() -> Comida {
    let mut massa = massa();
    massa.remove_by_name("sal");
    Comida::new("pizza") + Items::new().push(massa).push(molho() * 3.0) + ["queijo", "queijo"]
}

/// The sample recipes by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    Pizza,
    Massa,
    Molho,
}

impl Sample {
    pub fn build(self) -> Comida {
        match self {
            Sample::Pizza => pizza(),
            Sample::Massa => massa(),
            Sample::Molho => molho(),
        }
    }
}
