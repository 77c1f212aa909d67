// TUI application state and event handling
use mealdash_core::{CartStore, Catalog, Category, DecreaseOutcome, PricingTable};
use ratatui::widgets::ListState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Catalog, // Browsing the menu
    Detail,  // One category's items
    Cart,    // The order so far
}

/// What a confirm modal does when the user says yes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    RemoveCartLine(usize),
    DeleteCategory(String),
}

/// Free-text form for the "add menu" action - no field is validated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddMenuForm {
    pub name: String,
    pub price: String,
    pub thumb_url: String,
    pub description: String,
    /// Which of the four fields has the cursor
    pub field: usize,
}

impl AddMenuForm {
    pub const FIELD_COUNT: usize = 4;

    pub fn current_field_mut(&mut self) -> &mut String {
        match self.field {
            0 => &mut self.name,
            1 => &mut self.price,
            2 => &mut self.thumb_url,
            _ => &mut self.description,
        }
    }

    pub fn next_field(&mut self) {
        self.field = (self.field + 1) % Self::FIELD_COUNT;
    }

    pub fn previous_field(&mut self) {
        self.field = (self.field + Self::FIELD_COUNT - 1) % Self::FIELD_COUNT;
    }
}

/// Price-only edit for an existing category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditPriceForm {
    pub category: String,
    pub price: String,
}

/// Whatever is floating above the current screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    Confirm {
        message: String,
        action: ConfirmAction,
    },
    AddMenu(AddMenuForm),
    EditPrice(EditPriceForm),
    /// The "more options" menu: Edit / Delete / Cancel
    ActionMenu {
        category: String,
        cursor: usize,
    },
}

/// The category the user navigated into, with its items
#[derive(Debug, Clone)]
pub struct DetailView {
    pub category: String,
    pub items: Vec<Category>,
}

pub struct App {
    pub should_quit: bool,
    pub screen: Screen,
    pub catalog: Catalog,
    pub pricing: PricingTable,
    pub cart: CartStore,
    pub loading: bool,
    pub status_message: Option<String>,
    pub modal: Option<Modal>,
    pub catalog_index: usize,
    pub catalog_state: ListState,
    pub detail: Option<DetailView>,
    pub detail_index: usize,
    pub cart_index: usize,
    pub cart_state: ListState,
}

impl App {
    pub fn new(catalog: Catalog, pricing: PricingTable) -> Self {
        let mut catalog_state = ListState::default();
        catalog_state.select(Some(0));
        let mut cart_state = ListState::default();
        cart_state.select(Some(0));

        Self {
            should_quit: false,
            screen: Screen::Catalog,
            catalog,
            pricing,
            cart: CartStore::new(),
            loading: false,
            status_message: None,
            modal: None,
            catalog_index: 0,
            catalog_state,
            detail: None,
            detail_index: 0,
            cart_index: 0,
            cart_state,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    // --- Catalog screen ---

    pub fn selected_category(&self) -> Option<&Category> {
        self.catalog.get(self.catalog_index)
    }

    pub fn next_category(&mut self) {
        if !self.catalog.is_empty() {
            self.catalog_index = (self.catalog_index + 1).min(self.catalog.len() - 1);
            self.catalog_state.select(Some(self.catalog_index));
        }
    }

    pub fn previous_category(&mut self) {
        if self.catalog_index > 0 {
            self.catalog_index -= 1;
            self.catalog_state.select(Some(self.catalog_index));
        }
    }

    fn clamp_catalog_selection(&mut self) {
        if self.catalog.is_empty() {
            self.catalog_index = 0;
        } else {
            self.catalog_index = self.catalog_index.min(self.catalog.len() - 1);
        }
        self.catalog_state.select(Some(self.catalog_index));
    }

    /// Open the add-menu form
    pub fn open_add_menu(&mut self) {
        self.modal = Some(Modal::AddMenu(AddMenuForm::default()));
    }

    /// Commit the add-menu form: append the category and record its price
    ///
    /// Free-text straight through - no uniqueness, numeric or URL checks.
    pub fn save_add_menu(&mut self) {
        if let Some(Modal::AddMenu(form)) = self.modal.take() {
            self.pricing.set_price(form.name.clone(), &form.price);
            self.catalog
                .add(Category::new(form.name, form.thumb_url, form.description));
            self.set_status("Menu successfully added");
        }
    }

    /// Open the price edit for the selected category, pre-filled without `$`
    pub fn open_edit_price(&mut self) {
        if let Some(category) = self.selected_category() {
            let name = category.name.clone();
            let price = self.pricing.raw_price(&name);
            self.modal = Some(Modal::EditPrice(EditPriceForm {
                category: name,
                price,
            }));
        }
    }

    pub fn open_edit_price_for(&mut self, name: String) {
        let price = self.pricing.raw_price(&name);
        self.modal = Some(Modal::EditPrice(EditPriceForm {
            category: name,
            price,
        }));
    }

    pub fn save_edit_price(&mut self) {
        if let Some(Modal::EditPrice(form)) = self.modal.take() {
            self.pricing.set_price(form.category, &form.price);
        }
    }

    /// Ask before deleting the selected category
    pub fn request_delete_selected(&mut self) {
        if let Some(category) = self.selected_category() {
            let name = category.name.clone();
            self.modal = Some(Modal::Confirm {
                message: format!("Delete category {}?", name),
                action: ConfirmAction::DeleteCategory(name),
            });
        }
    }

    pub fn request_delete(&mut self, name: String) {
        self.modal = Some(Modal::Confirm {
            message: format!("Delete category {}?", name),
            action: ConfirmAction::DeleteCategory(name),
        });
    }

    /// The "more options" action menu for the selected category
    pub fn open_action_menu(&mut self) {
        if let Some(category) = self.selected_category() {
            self.modal = Some(Modal::ActionMenu {
                category: category.name.clone(),
                cursor: 0,
            });
        }
    }

    // --- Detail screen ---

    pub fn open_detail(&mut self, category: String, items: Vec<Category>) {
        self.detail = Some(DetailView { category, items });
        self.detail_index = 0;
        self.screen = Screen::Detail;
        self.clear_status();
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
        self.screen = Screen::Catalog;
        self.clear_status();
    }

    pub fn selected_item(&self) -> Option<&Category> {
        self.detail.as_ref()?.items.get(self.detail_index)
    }

    pub fn next_item(&mut self) {
        if let Some(detail) = &self.detail {
            if !detail.items.is_empty() {
                self.detail_index = (self.detail_index + 1).min(detail.items.len() - 1);
            }
        }
    }

    pub fn previous_item(&mut self) {
        if self.detail_index > 0 {
            self.detail_index -= 1;
        }
    }

    /// Add the selected item to the cart at the navigated category's price
    pub fn add_selected_item_to_cart(&mut self) {
        let Some(detail) = &self.detail else {
            return;
        };
        let Some(item) = detail.items.get(self.detail_index).cloned() else {
            return;
        };

        let price = self.pricing.lookup(&detail.category).to_string();
        self.cart.add(item, price);
        self.set_status("Item has been added to the cart");
    }

    // --- Cart screen ---

    pub fn go_to_cart(&mut self) {
        self.screen = Screen::Cart;
        self.clamp_cart_selection();
        self.clear_status();
    }

    pub fn leave_cart(&mut self) {
        self.screen = Screen::Catalog;
        self.clear_status();
    }

    pub fn next_cart_line(&mut self) {
        if !self.cart.is_empty() {
            self.cart_index = (self.cart_index + 1).min(self.cart.len() - 1);
            self.cart_state.select(Some(self.cart_index));
        }
    }

    pub fn previous_cart_line(&mut self) {
        if self.cart_index > 0 {
            self.cart_index -= 1;
            self.cart_state.select(Some(self.cart_index));
        }
    }

    fn clamp_cart_selection(&mut self) {
        if self.cart.is_empty() {
            self.cart_index = 0;
        } else {
            self.cart_index = self.cart_index.min(self.cart.len() - 1);
        }
        self.cart_state.select(Some(self.cart_index));
    }

    pub fn increase_selected_quantity(&mut self) {
        self.cart.increase(self.cart_index);
    }

    /// Decrease the selected line, or ask to delete it when it's at 1
    pub fn decrease_selected_quantity(&mut self) {
        match self.cart.decrease(self.cart_index) {
            DecreaseOutcome::Decremented | DecreaseOutcome::OutOfRange => {}
            DecreaseOutcome::NeedsConfirmation => {
                self.modal = Some(Modal::Confirm {
                    message: "Are you sure to delete this item?".to_string(),
                    action: ConfirmAction::RemoveCartLine(self.cart_index),
                });
            }
        }
    }

    /// Checkout is a stub for now - log it and tell the user
    pub fn checkout(&mut self) {
        if !self.cart.is_empty() {
            tracing::info!(total = %self.cart.total(), "proceed to checkout");
            self.set_status("Proceeding to checkout...");
        }
    }

    // --- Modal handling ---

    pub fn dismiss_modal(&mut self) {
        self.modal = None;
    }

    /// Run the pending confirm action
    pub fn confirm_modal(&mut self) {
        if let Some(Modal::Confirm { action, .. }) = self.modal.take() {
            match action {
                ConfirmAction::RemoveCartLine(index) => {
                    self.cart.remove(index);
                    self.clamp_cart_selection();
                    self.set_status("Removed from cart");
                }
                ConfirmAction::DeleteCategory(name) => {
                    self.catalog.delete(&name);
                    self.clamp_catalog_selection();
                    self.set_status(format!("Deleted {}", name));
                }
            }
        }
    }

    pub fn action_menu_next(&mut self) {
        if let Some(Modal::ActionMenu { cursor, .. }) = &mut self.modal {
            *cursor = (*cursor + 1).min(2); // Edit / Delete / Cancel
        }
    }

    pub fn action_menu_previous(&mut self) {
        if let Some(Modal::ActionMenu { cursor, .. }) = &mut self.modal {
            *cursor = cursor.saturating_sub(1);
        }
    }

    /// Dispatch the highlighted action-menu entry
    pub fn action_menu_select(&mut self) {
        if let Some(Modal::ActionMenu { category, cursor }) = self.modal.take() {
            match cursor {
                0 => self.open_edit_price_for(category),
                1 => self.request_delete(category),
                _ => {} // Cancel
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_app() -> App {
        let catalog = Catalog::from(vec![
            Category::new("Seafood", "", "Fish and such"),
            Category::new("Dessert", "", "Sweet things"),
        ]);
        App::new(catalog, PricingTable::with_default_menu())
    }

    #[test]
    fn test_add_to_cart_uses_category_price() {
        let mut app = sample_app();
        app.open_detail(
            "Seafood".into(),
            vec![Category::new("Seafood", "", "Fish and such")],
        );

        app.add_selected_item_to_cart();

        assert_eq!(app.cart.len(), 1);
        assert_eq!(app.cart.get(0).unwrap().price, "$25.99");
        assert_eq!(app.status_message.as_deref(), Some("Item has been added to the cart"));
    }

    #[test]
    fn test_add_to_cart_falls_back_for_unknown_category() {
        let mut app = sample_app();
        app.open_detail("Goat".into(), vec![Category::new("Goat", "", "")]);

        app.add_selected_item_to_cart();

        assert_eq!(app.cart.get(0).unwrap().price, "$13.99");
    }

    #[test]
    fn test_decrease_at_one_opens_confirm_modal() {
        let mut app = sample_app();
        app.open_detail("Seafood".into(), vec![Category::new("Seafood", "", "")]);
        app.add_selected_item_to_cart();
        app.go_to_cart();

        app.decrease_selected_quantity();

        assert!(matches!(
            app.modal,
            Some(Modal::Confirm {
                action: ConfirmAction::RemoveCartLine(0),
                ..
            })
        ));
        // Nothing removed until the user confirms
        assert_eq!(app.cart.len(), 1);
    }

    #[test]
    fn test_confirm_removes_line() {
        let mut app = sample_app();
        app.open_detail("Seafood".into(), vec![Category::new("Seafood", "", "")]);
        app.add_selected_item_to_cart();
        app.go_to_cart();

        app.decrease_selected_quantity();
        app.confirm_modal();

        assert!(app.cart.is_empty());
        assert!(app.modal.is_none());
    }

    #[test]
    fn test_dismiss_leaves_line_untouched() {
        let mut app = sample_app();
        app.open_detail("Seafood".into(), vec![Category::new("Seafood", "", "")]);
        app.add_selected_item_to_cart();
        app.go_to_cart();

        app.decrease_selected_quantity();
        app.dismiss_modal();

        assert_eq!(app.cart.len(), 1);
        assert_eq!(app.cart.get(0).unwrap().quantity, 1);
    }

    #[test]
    fn test_decrease_above_one_needs_no_modal() {
        let mut app = sample_app();
        app.open_detail("Seafood".into(), vec![Category::new("Seafood", "", "")]);
        app.add_selected_item_to_cart();
        app.go_to_cart();
        app.increase_selected_quantity();

        app.decrease_selected_quantity();

        assert!(app.modal.is_none());
        assert_eq!(app.cart.get(0).unwrap().quantity, 1);
    }

    #[test]
    fn test_delete_category_flow() {
        let mut app = sample_app();

        app.request_delete_selected(); // Seafood is selected
        assert!(matches!(app.modal, Some(Modal::Confirm { .. })));

        app.confirm_modal();
        assert_eq!(app.catalog.len(), 1);
        assert_eq!(app.catalog.get(0).unwrap().name, "Dessert");
    }

    #[test]
    fn test_delete_last_category_clamps_selection() {
        let mut app = sample_app();
        app.next_category(); // select Dessert, index 1

        app.request_delete_selected();
        app.confirm_modal();

        assert_eq!(app.catalog.len(), 1);
        assert_eq!(app.catalog_index, 0);
    }

    #[test]
    fn test_add_menu_flow() {
        let mut app = sample_app();
        let before = app.catalog.len();

        app.open_add_menu();
        if let Some(Modal::AddMenu(form)) = &mut app.modal {
            form.name = "Lamb".into();
            form.price = "17.99".into();
            form.thumb_url = "https://example.com/lamb.png".into();
            form.description = "Lamb dishes".into();
        }
        app.save_add_menu();

        assert_eq!(app.catalog.len(), before + 1);
        assert_eq!(app.pricing.lookup("Lamb"), "$17.99");
        assert_eq!(app.status_message.as_deref(), Some("Menu successfully added"));
    }

    #[test]
    fn test_edit_price_prefills_without_dollar() {
        let mut app = sample_app();

        app.open_edit_price(); // Seafood
        let Some(Modal::EditPrice(form)) = &mut app.modal else {
            panic!("expected edit price modal");
        };
        assert_eq!(form.price, "25.99");

        form.price = "19.99".into();
        app.save_edit_price();

        assert_eq!(app.pricing.lookup("Seafood"), "$19.99");
    }

    #[test]
    fn test_action_menu_edit_and_delete_paths() {
        let mut app = sample_app();

        app.open_action_menu();
        app.action_menu_select(); // cursor 0 = Edit
        assert!(matches!(app.modal, Some(Modal::EditPrice(_))));
        app.dismiss_modal();

        app.open_action_menu();
        app.action_menu_next(); // cursor 1 = Delete
        app.action_menu_select();
        assert!(matches!(
            app.modal,
            Some(Modal::Confirm {
                action: ConfirmAction::DeleteCategory(_),
                ..
            })
        ));
        app.dismiss_modal();

        app.open_action_menu();
        app.action_menu_next();
        app.action_menu_next(); // cursor 2 = Cancel
        app.action_menu_select();
        assert!(app.modal.is_none());
    }

    #[test]
    fn test_add_menu_form_field_cycling() {
        let mut form = AddMenuForm::default();
        assert_eq!(form.field, 0);
        form.next_field();
        form.next_field();
        form.next_field();
        form.next_field();
        assert_eq!(form.field, 0);
        form.previous_field();
        assert_eq!(form.field, AddMenuForm::FIELD_COUNT - 1);
    }
}
