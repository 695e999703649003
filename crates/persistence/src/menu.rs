//! Weekly mess menu

use hostel_nexus_core::MessMenu;

/// Read-only weekly menu, seeded with the demo week
#[derive(Clone)]
pub struct MessMenuService {
    menu: Vec<MessMenu>,
}

impl MessMenuService {
    pub fn new(menu: Vec<MessMenu>) -> Self {
        Self { menu }
    }

    /// The full week in order
    pub fn week(&self) -> &[MessMenu] {
        &self.menu
    }

    /// Menu for a single day
    pub fn for_day(&self, day: &str) -> Option<&MessMenu> {
        self.menu.iter().find(|m| m.day.eq_ignore_ascii_case(day))
    }
}

impl Default for MessMenuService {
    fn default() -> Self {
        Self::new(vec![
            MessMenu::new(
                "Monday",
                &["Idli", "Sambar", "Chutney", "Bread", "Butter", "Fruit"],
                &["Rice", "Dal", "Vegetable Curry", "Curd", "Papad"],
                &["Tea/Coffee", "Biscuits", "Samosa"],
                &["Chapati", "Paneer Butter Masala", "Rice", "Salad", "Sweet"],
            ),
            MessMenu::new(
                "Tuesday",
                &["Dosa", "Sambar", "Chutney", "Bread", "Jam", "Fruit"],
                &["Rice", "Rajma", "Mixed Veg", "Raita", "Papad"],
                &["Tea/Coffee", "Cake", "Pakora"],
                &["Chapati", "Aloo Gobi", "Rice", "Salad", "Ice Cream"],
            ),
            MessMenu::new(
                "Wednesday",
                &["Poha", "Upma", "Bread", "Butter", "Boiled Egg", "Fruit"],
                &["Rice", "Dal Tadka", "Aloo Matar", "Curd", "Papad"],
                &["Tea/Coffee", "Biscuits", "Vada"],
                &["Chapati", "Chicken Curry/Paneer", "Rice", "Salad", "Custard"],
            ),
            MessMenu::new(
                "Thursday",
                &["Paratha", "Curd", "Bread", "Jam", "Fruit"],
                &["Rice", "Chana Dal", "Bhindi Fry", "Raita", "Papad"],
                &["Tea/Coffee", "Sandwich", "Biscuits"],
                &["Chapati", "Mixed Veg Curry", "Rice", "Salad", "Kheer"],
            ),
            MessMenu::new(
                "Friday",
                &["Puri", "Aloo Sabzi", "Bread", "Butter", "Fruit"],
                &["Rice", "Dal Fry", "Palak Paneer", "Curd", "Papad"],
                &["Tea/Coffee", "Biscuits", "Cutlet"],
                &["Chapati", "Egg Curry/Matar Paneer", "Rice", "Salad", "Halwa"],
            ),
            MessMenu::new(
                "Saturday",
                &["Chole Bhature", "Bread", "Jam", "Fruit"],
                &["Rice", "Sambar", "Aloo Jeera", "Curd", "Papad"],
                &["Tea/Coffee", "Biscuits", "Patties"],
                &["Chapati", "Malai Kofta", "Rice", "Salad", "Fruit Custard"],
            ),
            MessMenu::new(
                "Sunday",
                &["Uttapam", "Coconut Chutney", "Bread", "Butter", "Fruit"],
                &["Rice", "Dal Makhani", "Mixed Veg", "Raita", "Papad"],
                &["Tea/Coffee", "Biscuits", "French Fries"],
                &["Chapati", "Butter Chicken/Paneer Butter Masala", "Rice", "Salad", "Sweet"],
            ),
        ])
    }
}
