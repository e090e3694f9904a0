//! Built-in menu used when no menu file is available.

use crate::model::MenuItem;

/// The house menu of the Buteco do Bartho.
pub fn default_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::beverage("Coca-Cola", 5.00, "Refrigerante gelado"),
        MenuItem::beverage("Long neck HEINEKEN", 12.00, "Cerveja gelada"),
        MenuItem::food(
            "X-salada",
            40.00,
            "Pão brioche, hambúrguer, queijo cheedar, alface e tomate",
        ),
        MenuItem::food("Porção batata frita", 25.00, "Batatas fritas crocantes"),
        MenuItem::dessert("Milk-shake", 17.50, "Milk-shake cremoso de baunilha"),
    ]
}
