use super::cart::{Cart, CartItem};
use super::lang::Language;
use super::page::{Page, Screen};

/// Client state of one visit. Never persisted: a reload starts over.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    page: Page,
    language: Language,
    access_token: Option<String>,
    cart: Cart,
    /// Set while an order submission is in flight
    pub checkout_pending: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Resolves what the shell renders. The admin page stays behind the
    /// login screen until a login succeeds.
    pub fn screen(&self) -> Screen {
        match self.page {
            Page::Admin if !self.is_authenticated() => Screen::Login,
            page => Screen::Page(page),
        }
    }

    pub fn navigate(&mut self, page: Page) {
        self.page = page;
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
    }

    pub fn add_to_cart(&mut self, item: CartItem, redirect: bool) {
        self.cart.add(item);
        if redirect {
            self.page = Page::Cart;
        }
    }

    pub fn remove_from_cart(&mut self, id: &str) {
        self.cart.remove(id);
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    pub fn cart_count(&self) -> u32 {
        self.cart.count()
    }

    pub fn login_succeeded(&mut self, access_token: String) {
        self.access_token = Some(access_token);
        self.page = Page::Admin;
    }

    pub fn cancel_login(&mut self) {
        self.page = Page::Home;
    }

    pub fn logout(&mut self) {
        self.access_token = None;
        self.page = Page::Home;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::cart::ItemKind;

    fn ticket() -> CartItem {
        CartItem::new("ticket-weekday", "Weekdays", "أيام الأسبوع", 89, ItemKind::Ticket)
    }

    #[test]
    fn fresh_session_is_english_home_and_anonymous() {
        let session = Session::new();
        assert_eq!(session.page(), Page::Home);
        assert_eq!(session.language(), Language::En);
        assert!(!session.is_authenticated());
        assert_eq!(session.cart_count(), 0);
    }

    #[test]
    fn language_toggle_keeps_cart_and_page() {
        let mut session = Session::new();
        session.navigate(Page::Parties);
        session.add_to_cart(ticket(), false);

        session.toggle_language();
        assert_eq!(session.language(), Language::Ar);
        assert_eq!(session.page(), Page::Parties);
        assert_eq!(session.cart_count(), 1);

        session.set_language(Language::En);
        assert_eq!(session.language(), Language::En);
        assert_eq!(session.cart().items().len(), 1);
    }

    #[test]
    fn add_with_redirect_opens_cart() {
        let mut session = Session::new();
        session.add_to_cart(ticket(), false);
        assert_eq!(session.page(), Page::Home);

        session.add_to_cart(ticket(), true);
        assert_eq!(session.page(), Page::Cart);
        assert_eq!(session.cart_count(), 2);
    }

    #[test]
    fn admin_requires_login() {
        let mut session = Session::new();
        session.navigate(Page::Admin);
        assert_eq!(session.screen(), Screen::Login);

        session.login_succeeded("token".into());
        assert_eq!(session.screen(), Screen::Page(Page::Admin));
        assert_eq!(session.access_token(), Some("token"));
    }

    #[test]
    fn logout_returns_home_and_forgets_token() {
        let mut session = Session::new();
        session.navigate(Page::Admin);
        session.login_succeeded("token".into());

        session.logout();
        assert_eq!(session.page(), Page::Home);
        assert!(!session.is_authenticated());

        session.navigate(Page::Admin);
        assert_eq!(session.screen(), Screen::Login);
    }

    #[test]
    fn cancelling_login_goes_home() {
        let mut session = Session::new();
        session.navigate(Page::Admin);
        session.cancel_login();
        assert_eq!(session.screen(), Screen::Page(Page::Home));
    }
}
